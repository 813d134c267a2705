//! BDD step definitions for the location query adapter

use alarm_console_app::params::{ListParams, LocationQuery, QueryChange};
use cucumber::{given, then, when};

use crate::world::AlarmConsoleWorld;

fn split(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_string()).collect()
}

fn params(world: &AlarmConsoleWorld) -> &ListParams {
    world.params.as_ref().expect("params not derived")
}

#[given(expr = "the location query {string}")]
fn location_query(world: &mut AlarmConsoleWorld, search: String) {
    world.location = Some(LocationQuery::parse(&search));
}

#[given("an empty location query")]
fn empty_location_query(world: &mut AlarmConsoleWorld) {
    world.location = Some(LocationQuery::default());
}

#[when("the list parameters are derived")]
fn derive_params(world: &mut AlarmConsoleWorld) {
    let location = world.location.as_ref().expect("location not set");
    world.params = Some(ListParams::from_query(location));
}

#[when(expr = "the page size is changed to {int}")]
fn change_page_size(world: &mut AlarmConsoleWorld, size: u32) {
    let location = world.location.take().expect("location not set");
    world.location = Some(location.apply(QueryChange::page_size(size)));
}

#[when(expr = "the page is changed to {int}")]
fn change_page(world: &mut AlarmConsoleWorld, page: u32) {
    let location = world.location.take().expect("location not set");
    world.location = Some(location.apply(QueryChange::page(page)));
}

#[then(expr = "the page is {int}")]
fn page_is(world: &mut AlarmConsoleWorld, page: u32) {
    assert_eq!(params(world).page, Some(page));
}

#[then(expr = "the page size is {int}")]
fn page_size_is(world: &mut AlarmConsoleWorld, page_size: u32) {
    assert_eq!(params(world).page_size, Some(page_size));
}

#[then(expr = "the severity filter is {string}")]
fn severity_filter_is(world: &mut AlarmConsoleWorld, expected: String) {
    assert_eq!(params(world).severity, Some(split(&expected)));
}

#[then(expr = "the status filter is {string}")]
fn status_filter_is(world: &mut AlarmConsoleWorld, expected: String) {
    assert_eq!(params(world).status, Some(split(&expected)));
}

#[then("there is no severity filter")]
fn no_severity_filter(world: &mut AlarmConsoleWorld) {
    assert_eq!(params(world).severity, None);
}

#[then("there is no status filter")]
fn no_status_filter(world: &mut AlarmConsoleWorld) {
    assert_eq!(params(world).status, None);
}

#[then("there is no search text")]
fn no_search_text(world: &mut AlarmConsoleWorld) {
    assert_eq!(params(world).q, None);
}

#[then(expr = "the search text is {string}")]
fn search_text_is(world: &mut AlarmConsoleWorld, expected: String) {
    assert_eq!(params(world).q.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the ordering is {string}")]
fn ordering_is(world: &mut AlarmConsoleWorld, expected: String) {
    assert_eq!(params(world).ordering.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the location query becomes {string}")]
fn location_query_becomes(world: &mut AlarmConsoleWorld, expected: String) {
    let location = world.location.as_ref().expect("location not set");
    assert_eq!(location.to_search(), expected);
}
