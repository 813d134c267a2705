//! BDD test world for the alarm console frontend

use std::sync::{Arc, Mutex};

use alarm_console_app::api::{Alarm, AlarmListResponse, AlarmStatus, Severity};
use alarm_console_app::io::{HttpClient, HttpResponse};
use alarm_console_app::params::{ListParams, LocationQuery};
use alarm_console_app::query::{AlarmsQuery, QueryState};
use alarm_console_app::view::AlarmsPageView;
use alarm_console_app::AlarmApiClient;
use cucumber::World;
use tokio::sync::oneshot;
use url::Url;

#[derive(Debug, Default, World)]
pub struct AlarmConsoleWorld {
    // Params adapter testing
    pub location: Option<LocationQuery>,
    pub params: Option<ListParams>,

    // Client testing
    pub request_url: Option<Url>,

    // Page testing
    pub api: Arc<StubAlarmApi>,
    pub query: Option<Arc<AlarmsQuery>>,
    pub page_view: Option<AlarmsPageView>,
}

impl AlarmConsoleWorld {
    pub fn query(&mut self) -> Arc<AlarmsQuery> {
        let api = Arc::clone(&self.api);
        Arc::clone(self.query.get_or_insert_with(|| {
            let client = AlarmApiClient::new("http://alarms.test", api as Arc<dyn HttpClient>)
                .expect("valid base url");
            Arc::new(AlarmsQuery::new(client))
        }))
    }

    pub fn render(&mut self, params: &ListParams, state: &QueryState<AlarmListResponse>) {
        self.page_view = Some(AlarmsPageView::new(params, state));
    }
}

/// What the stub API answers with
#[derive(Debug, Clone)]
pub struct StubBehaviour {
    pub item_count: usize,
    pub severity: Severity,
    pub total: u64,
    pub fail_status: Option<u16>,
}

impl Default for StubBehaviour {
    fn default() -> Self {
        Self {
            item_count: 0,
            severity: Severity::Info,
            total: 0,
            fail_status: None,
        }
    }
}

/// An alarm API double that records requested URLs and builds pages on demand.
///
/// Every alarm's code carries the page it was served for (`P<page>-<n>`).
#[derive(Debug, Default)]
pub struct StubAlarmApi {
    pub behaviour: Mutex<StubBehaviour>,
    pub requests: Mutex<Vec<String>>,
    /// Requests whose URL contains the fragment wait for the receiver
    pub slow: Mutex<Option<(String, oneshot::Receiver<()>)>>,
}

impl StubAlarmApi {
    fn page_body(&self, url: &str) -> String {
        let behaviour = self.behaviour.lock().unwrap().clone();
        let parsed = Url::parse(url).expect("stub received an invalid url");
        let page: u32 = parsed
            .query_pairs()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(1);
        let page_size: u32 = parsed
            .query_pairs()
            .find(|(k, _)| k == "page_size")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(25);

        let items = (0..behaviour.item_count)
            .map(|n| Alarm {
                id: (page as i64) * 1000 + n as i64,
                site_id: format!("SITE-{}", n),
                site_name: format!("Site {}", n),
                alarm_code: format!("P{}-{}", page, n),
                alarm_label: "Door open".to_string(),
                severity: behaviour.severity.clone(),
                status: AlarmStatus::Open,
                started_at: "2024-03-01T10:00:00Z".to_string(),
                cleared_at: None,
                acked_at: None,
            })
            .collect();

        serde_json::to_string(&AlarmListResponse {
            items,
            page,
            page_size,
            total: behaviour.total,
        })
        .expect("serializable page")
    }
}

#[async_trait::async_trait]
impl HttpClient for StubAlarmApi {
    async fn get_json(&self, url: &str) -> alarm_console_app::Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        let gate = {
            let mut slow = self.slow.lock().unwrap();
            let is_slow = slow
                .as_ref()
                .is_some_and(|(fragment, _)| url.contains(fragment.as_str()));
            if is_slow {
                slow.take().map(|(_, gate)| gate)
            } else {
                None
            }
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if let Some(status) = self.behaviour.lock().unwrap().fail_status {
            return Ok(HttpResponse {
                status,
                body: "Internal Server Error".to_string(),
            });
        }
        Ok(HttpResponse {
            status: 200,
            body: self.page_body(url),
        })
    }
}
