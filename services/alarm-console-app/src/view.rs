//! Alarms page view model
//!
//! Everything the alarms page renders is derived here from the current
//! parameters and query state, so the components hold no state of their own.

use crate::api::{Alarm, AlarmListResponse, Severity};
use crate::params::ListParams;
use crate::query::{QueryState, QueryStatus};

/// Number of columns in the alarm table
pub const TABLE_COLUMNS: usize = 6;

/// What the table body shows
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Loading,
    Error(String),
    Empty,
    Rows(Vec<Alarm>),
}

/// Previous/next button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Pagination {
    /// `total` is `None` until the first response arrives; "next" stays
    /// disabled until then.
    pub fn new(page: u32, page_size: u32, total: Option<u64>) -> Self {
        let next_disabled = match total {
            Some(total) => u64::from(page) * u64::from(page_size) >= total,
            None => true,
        };
        Self {
            page,
            prev_disabled: page <= 1,
            next_disabled,
        }
    }

    pub fn prev_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }
}

/// Alarm counts per severity over the items of the displayed page only.
///
/// This is a sample of the result set, not a global breakdown; the header
/// labels it accordingly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityTotals {
    pub critical: u32,
    pub major: u32,
    pub warn: u32,
    pub info: u32,
    /// Values outside the known severities
    pub other: u32,
}

impl SeverityTotals {
    pub fn from_items(items: &[Alarm]) -> Self {
        items.iter().fold(Self::default(), |mut totals, alarm| {
            *totals.slot_mut(&alarm.severity) += 1;
            totals
        })
    }

    pub fn count(&self, severity: &Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Warn => self.warn,
            Severity::Info => self.info,
            Severity::Other(_) => self.other,
        }
    }

    fn slot_mut(&mut self, severity: &Severity) -> &mut u32 {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::Major => &mut self.major,
            Severity::Warn => &mut self.warn,
            Severity::Info => &mut self.info,
            Severity::Other(_) => &mut self.other,
        }
    }
}

/// Header figures: page-local severity counts next to the server total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderTotals {
    pub on_page: SeverityTotals,
    pub total: u64,
}

impl HeaderTotals {
    pub fn from_response(response: &AlarmListResponse) -> Self {
        Self {
            on_page: SeverityTotals::from_items(&response.items),
            total: response.total,
        }
    }
}

/// The whole alarms page, derived from parameters and query state
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmsPageView {
    pub status: QueryStatus,
    pub body: TableBody,
    pub pagination: Pagination,
    pub totals: HeaderTotals,
    pub is_fetching: bool,
}

impl AlarmsPageView {
    /// On error the header and pagination keep the figures of the last data
    /// received, since the failed request brought nothing new.
    pub fn new(params: &ListParams, state: &QueryState<AlarmListResponse>) -> Self {
        let status = state.status();
        let body = match (&state.error, &state.data) {
            (Some(e), _) => TableBody::Error(e.to_string()),
            (None, None) => TableBody::Loading,
            (None, Some(data)) if data.items.is_empty() => TableBody::Empty,
            (None, Some(data)) => TableBody::Rows(data.items.clone()),
        };
        let totals = state
            .data
            .as_ref()
            .map(HeaderTotals::from_response)
            .unwrap_or_default();
        let pagination = Pagination::new(
            params.page_or_default(),
            params.page_size_or_default(),
            state.data.as_ref().map(|d| d.total),
        );

        Self {
            status,
            body,
            pagination,
            totals,
            is_fetching: state.is_fetching,
        }
    }
}
