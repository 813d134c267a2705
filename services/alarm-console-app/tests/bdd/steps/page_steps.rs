//! BDD step definitions for the alarms page

use std::sync::{Arc, Mutex};

use alarm_console_app::api::{AlarmListResponse, Severity};
use alarm_console_app::params::{ListParams, LocationQuery};
use alarm_console_app::query::QueryState;
use alarm_console_app::view::{AlarmsPageView, TableBody};
use cucumber::{given, then, when};
use tokio::sync::oneshot;

use crate::world::AlarmConsoleWorld;

fn page_view(world: &AlarmConsoleWorld) -> &AlarmsPageView {
    world.page_view.as_ref().expect("page not rendered")
}

fn params_for(search: &str) -> ListParams {
    ListParams::from_query(&LocationQuery::parse(search))
}

async fn load(world: &mut AlarmConsoleWorld, search: &str) {
    let params = params_for(search);
    let query = world.query();
    query.load(params.clone(), |_| {}).await;
    let state = query.snapshot().await;
    world.render(&params, &state);
}

#[given(expr = "the API returns {int} alarms with a total of {int}")]
fn api_returns(world: &mut AlarmConsoleWorld, count: usize, total: u64) {
    let mut behaviour = world.api.behaviour.lock().unwrap();
    behaviour.item_count = count;
    behaviour.total = total;
}

#[given(expr = "the API returns {int} {word} alarms with a total of {int}")]
fn api_returns_severity(world: &mut AlarmConsoleWorld, count: usize, severity: String, total: u64) {
    let mut behaviour = world.api.behaviour.lock().unwrap();
    behaviour.item_count = count;
    behaviour.severity = Severity::from(severity);
    behaviour.total = total;
}

#[when(expr = "the API starts failing with status {int}")]
fn api_fails(world: &mut AlarmConsoleWorld, status: u16) {
    world.api.behaviour.lock().unwrap().fail_status = Some(status);
}

#[when(expr = "the alarms page loads {string}")]
async fn page_loads(world: &mut AlarmConsoleWorld, search: String) {
    load(world, &search).await;
}

#[when(expr = "the alarms page loads {string} and then {string} before the first response arrives")]
async fn page_loads_superseded(world: &mut AlarmConsoleWorld, first: String, second: String) {
    let (release, gate) = oneshot::channel();
    let first_params = params_for(&first);
    let second_params = params_for(&second);
    let fragment = format!("page={}", first_params.page_or_default());
    *world.api.slow.lock().unwrap() = Some((fragment, gate));

    let query = world.query();
    let published = Arc::new(Mutex::new(Vec::<QueryState<AlarmListResponse>>::new()));
    let sink = Arc::clone(&published);
    let publish = move |s: QueryState<AlarmListResponse>| sink.lock().unwrap().push(s);

    tokio::join!(query.load(first_params, &publish), async {
        query.load(second_params.clone(), &publish).await;
        let _ = release.send(());
    });

    let last = published
        .lock()
        .unwrap()
        .last()
        .cloned()
        .expect("nothing published");
    world.render(&second_params, &last);
}

#[then("the table shows a single \"No alarms\" row")]
fn shows_no_alarms(world: &mut AlarmConsoleWorld) {
    assert_eq!(page_view(world).body, TableBody::Empty);
}

#[then("the table shows an error row")]
fn shows_error(world: &mut AlarmConsoleWorld) {
    assert!(
        matches!(page_view(world).body, TableBody::Error(_)),
        "expected an error row, got {:?}",
        page_view(world).body
    );
}

#[then(expr = "the table shows {int} rows")]
fn shows_rows(world: &mut AlarmConsoleWorld, count: usize) {
    match &page_view(world).body {
        TableBody::Rows(items) => assert_eq!(items.len(), count),
        other => panic!("expected rows, got {:?}", other),
    }
}

#[then(expr = "the table shows the alarms of page {int}")]
fn shows_page(world: &mut AlarmConsoleWorld, page: u32) {
    let prefix = format!("P{}-", page);
    match &page_view(world).body {
        TableBody::Rows(items) => {
            assert!(!items.is_empty());
            assert!(
                items.iter().all(|a| a.alarm_code.starts_with(&prefix)),
                "rows from another page: {:?}",
                items.iter().map(|a| &a.alarm_code).collect::<Vec<_>>()
            );
        }
        other => panic!("expected rows, got {:?}", other),
    }
}

#[then(expr = "the previous button is {word}")]
fn previous_button(world: &mut AlarmConsoleWorld, state: String) {
    assert_eq!(page_view(world).pagination.prev_disabled, state == "disabled");
}

#[then(expr = "the next button is {word}")]
fn next_button(world: &mut AlarmConsoleWorld, state: String) {
    assert_eq!(page_view(world).pagination.next_disabled, state == "disabled");
}

#[then(expr = "the header total is {int}")]
fn header_total(world: &mut AlarmConsoleWorld, total: u64) {
    assert_eq!(page_view(world).totals.total, total);
}

#[then(expr = "the header shows {int} {word} alarms on this page")]
fn header_severity_count(world: &mut AlarmConsoleWorld, count: u32, severity: String) {
    let severity = Severity::from(severity);
    assert_eq!(page_view(world).totals.on_page.count(&severity), count);
}

#[then(expr = "the API received {int} requests")]
fn api_request_count(world: &mut AlarmConsoleWorld, count: usize) {
    assert_eq!(world.api.requests.lock().unwrap().len(), count);
}
