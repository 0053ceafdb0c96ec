//! BDD step definitions for nomination loading feature

use std::sync::Arc;

use cucumber::{given, then, when};
use tokio::sync::{Notify, RwLock};

use nominations_core::{NominationEnvelope, NominationRecord};
use recent_nominations::io::{HttpClient, HttpResponse};
use recent_nominations::{activate, NominationLoader, NominationsError};

use crate::world::NominationsWorld;

// --- Test doubles ---

/// A recorded GET request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP client that records requests and replays one canned outcome
#[derive(Debug)]
pub struct RecordingHttpClient {
    pub response: Result<HttpResponse, String>,
    pub requests: RwLock<Vec<RecordedRequest>>,
    pub gate: Option<Arc<Notify>>,
}

impl RecordingHttpClient {
    fn new(response: Result<HttpResponse, String>) -> Self {
        Self {
            response,
            requests: RwLock::new(Vec::new()),
            gate: None,
        }
    }
}

#[async_trait::async_trait]
impl HttpClient for RecordingHttpClient {
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> recent_nominations::Result<HttpResponse> {
        self.requests.write().await.push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.response {
            Ok(r) => Ok(r.clone()),
            Err(msg) => Err(NominationsError::Http(msg.clone())),
        }
    }
}

pub fn parse_statuses(list: &str) -> Vec<i64> {
    list.split(',')
        .map(|s| s.trim().parse().expect("status must be an integer"))
        .collect()
}

pub fn records_with_statuses(first_id: i64, list: &str) -> Vec<NominationRecord> {
    parse_statuses(list)
        .into_iter()
        .enumerate()
        .map(|(i, status)| NominationRecord {
            id: serde_json::json!(first_id + i as i64),
            name: format!("Nominee {}", first_id + i as i64),
            nominated_by: "Nominator".to_string(),
            status: Some(status),
            image_url: None,
            created_date: Some("2024-11-04T09:15:00Z".to_string()),
        })
        .collect()
}

fn ok_body(body: String) -> RecordingHttpClient {
    RecordingHttpClient::new(Ok(HttpResponse { status: 200, body }))
}

fn statuses_of(records: &[NominationRecord]) -> Vec<i64> {
    records
        .iter()
        .map(|r| r.status.expect("record without status"))
        .collect()
}

// --- Given ---

#[given(expr = "the nominations API returns statuses {string}")]
fn api_returns_statuses(world: &mut NominationsWorld, list: String) {
    let envelope = NominationEnvelope::new(records_with_statuses(1, &list));
    let body = serde_json::to_string(&envelope).unwrap();
    world.http = Some(Arc::new(ok_body(body)));
}

#[given("the nominations API returns an envelope without nomination data")]
fn api_returns_no_data(world: &mut NominationsWorld) {
    world.http = Some(Arc::new(ok_body(r#"{"data": {}}"#.to_string())));
}

#[given("the nominations API returns a body that is not JSON")]
fn api_returns_garbage(world: &mut NominationsWorld) {
    world.http = Some(Arc::new(ok_body("<html>Gateway</html>".to_string())));
}

#[given("the nominations API is unreachable")]
fn api_unreachable(world: &mut NominationsWorld) {
    world.http = Some(Arc::new(RecordingHttpClient::new(Err(
        "connection refused".to_string(),
    ))));
}

#[given(expr = "the nominations API responds with status {int}")]
fn api_responds_with(world: &mut NominationsWorld, status: u16) {
    world.http = Some(Arc::new(RecordingHttpClient::new(Ok(HttpResponse {
        status,
        body: "error".to_string(),
    }))));
}

#[given(expr = "the slow nominations API returns statuses {string}")]
fn slow_api_returns_statuses(world: &mut NominationsWorld, list: String) {
    let envelope = NominationEnvelope::new(records_with_statuses(1, &list));
    let mut client = ok_body(serde_json::to_string(&envelope).unwrap());
    client.gate = Some(Arc::new(Notify::new()));
    world.http = Some(Arc::new(client));
}

#[given(expr = "the bearer token {string}")]
fn bearer_token(world: &mut NominationsWorld, token: String) {
    world.token = Some(token);
}

#[given(expr = "a fallback dataset with statuses {string}")]
fn fallback_dataset(world: &mut NominationsWorld, list: String) {
    world.fallback = records_with_statuses(100, &list);
}

// --- When ---

#[when("the view is activated")]
fn view_activated(world: &mut NominationsWorld) {
    let http: Arc<dyn HttpClient> = world.http.clone().expect("API not configured");
    let loader = NominationLoader::new(
        "http://nominations.test/hr/home/list/company_id?pageSize=1&pageNumber=1",
        world.token.clone(),
        world.fallback.clone(),
        http,
    );
    world.activation = Some(activate(Arc::new(loader)));
}

#[when("the view settles")]
async fn view_settles(world: &mut NominationsWorld) {
    let activation = world.activation.as_mut().expect("view not activated");
    activation.settled().await;
    world.view = Some(activation.snapshot().await);
}

#[when("the view is torn down")]
fn view_torn_down(world: &mut NominationsWorld) {
    world
        .activation
        .as_ref()
        .expect("view not activated")
        .teardown();
}

#[when("the slow API finally responds")]
fn slow_api_responds(world: &mut NominationsWorld) {
    let http = world.http.as_ref().expect("API not configured");
    http.gate.as_ref().expect("API is not slow").notify_one();
}

// --- Then ---

#[then("the view should be loading")]
async fn view_loading(world: &mut NominationsWorld) {
    let activation = world.activation.as_ref().expect("view not activated");
    assert!(activation.snapshot().await.loading);
}

#[then("the view should not be loading")]
fn view_not_loading(world: &mut NominationsWorld) {
    let view = world.view.as_ref().expect("view not settled");
    assert!(!view.loading);
}

#[then(expr = "the view should hold statuses {string}")]
fn view_holds_statuses(world: &mut NominationsWorld, list: String) {
    let view = world.view.as_ref().expect("view not settled");
    assert_eq!(statuses_of(&view.nominations), parse_statuses(&list));
}

#[then("the view should hold the fallback dataset")]
fn view_holds_fallback(world: &mut NominationsWorld) {
    let view = world.view.as_ref().expect("view not settled");
    assert_eq!(view.nominations, world.fallback);
}

#[then("the view should hold no nominations")]
fn view_holds_nothing(world: &mut NominationsWorld) {
    let view = world.view.as_ref().expect("view not settled");
    assert!(view.nominations.is_empty());
}

#[then(expr = "exactly {int} request(s) should have been sent")]
async fn request_count(world: &mut NominationsWorld, expected: usize) {
    let http = world.http.as_ref().expect("API not configured");
    assert_eq!(http.requests.read().await.len(), expected);
}

#[then(expr = "the request should carry header {string} with value {string}")]
async fn request_header(world: &mut NominationsWorld, name: String, value: String) {
    let http = world.http.as_ref().expect("API not configured");
    let requests = http.requests.read().await;
    let request = requests.first().expect("no request sent");
    assert!(
        request.headers.contains(&(name.clone(), value.clone())),
        "headers {:?} missing {}: {}",
        request.headers,
        name,
        value
    );
}

#[then("the request should carry no authorization header")]
async fn request_no_auth(world: &mut NominationsWorld) {
    let http = world.http.as_ref().expect("API not configured");
    let requests = http.requests.read().await;
    let request = requests.first().expect("no request sent");
    assert!(request
        .headers
        .iter()
        .all(|(name, _)| !name.eq_ignore_ascii_case("authorization")));
}

#[then(expr = "the request URL should end with {string}")]
async fn request_url_suffix(world: &mut NominationsWorld, suffix: String) {
    let http = world.http.as_ref().expect("API not configured");
    let requests = http.requests.read().await;
    let request = requests.first().expect("no request sent");
    assert!(request.url.ends_with(&suffix), "{}", request.url);
}
