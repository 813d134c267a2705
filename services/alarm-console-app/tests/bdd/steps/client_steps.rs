//! BDD step definitions for alarm request URLs

use std::sync::Arc;

use alarm_console_app::io::HttpClient;
use alarm_console_app::params::{ListParams, LocationQuery};
use alarm_console_app::AlarmApiClient;
use cucumber::{given, then, when};

use crate::world::AlarmConsoleWorld;

fn split(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_string()).collect()
}

fn request_pairs(world: &AlarmConsoleWorld) -> Vec<(String, String)> {
    world
        .request_url
        .as_ref()
        .expect("request url not built")
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[given("empty list parameters")]
fn empty_params(world: &mut AlarmConsoleWorld) {
    world.params = Some(ListParams::default());
}

#[given(expr = "list parameters with severities {string}")]
fn params_with_severities(world: &mut AlarmConsoleWorld, severities: String) {
    world.params = Some(ListParams {
        severity: Some(split(&severities)),
        ..ListParams::default()
    });
}

#[given(expr = "list parameters with an empty search text and page {int}")]
fn params_with_empty_search(world: &mut AlarmConsoleWorld, page: u32) {
    world.params = Some(ListParams {
        page: Some(page),
        q: Some(String::new()),
        ..ListParams::default()
    });
}

#[given(expr = "list parameters derived from the location query {string}")]
fn params_from_location(world: &mut AlarmConsoleWorld, search: String) {
    world.params = Some(ListParams::from_query(&LocationQuery::parse(&search)));
}

#[when("the alarms request URL is built")]
fn build_url(world: &mut AlarmConsoleWorld) {
    let http = Arc::clone(&world.api) as Arc<dyn HttpClient>;
    let client = AlarmApiClient::new("http://alarms.test", http).unwrap();
    let params = world.params.as_ref().expect("params not set");
    world.request_url = Some(client.alarms_url(params).unwrap());
}

#[then("the request URL has no query string")]
fn no_query_string(world: &mut AlarmConsoleWorld) {
    let url = world.request_url.as_ref().expect("request url not built");
    assert_eq!(url.query(), None, "unexpected query in {}", url);
    assert_eq!(url.path(), "/api/alarms");
}

#[then(expr = "the request URL has exactly the {string} values {string}")]
fn exact_values(world: &mut AlarmConsoleWorld, key: String, values: String) {
    let found: Vec<String> = request_pairs(world)
        .into_iter()
        .filter(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .collect();
    assert_eq!(found, split(&values));
}

#[then(expr = "the request URL has no {string} parameter")]
fn no_parameter(world: &mut AlarmConsoleWorld, key: String) {
    assert!(
        request_pairs(world).iter().all(|(k, _)| *k != key),
        "found '{}' in {:?}",
        key,
        world.request_url
    );
}
