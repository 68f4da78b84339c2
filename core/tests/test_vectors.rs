//! Verify request URLs and response parsing against JSON vectors in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request URL, a simulated
//! response, and either the expected decoded result or the expected error
//! kind. Results are compared as typed values, so field order in the vectors
//! does not matter.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use wikimedia_rest::{
    Error, EventType, HttpRequest, HttpResponse, OnThisDayFeed, Summary, TitleRevisions,
    Transport, TransportError, WikimediaClient,
};

const BASE_URL: &str = "http://localhost:3000";

/// Transport that replays the vector's simulated response.
struct Replay {
    response: HttpResponse,
    urls: Arc<Mutex<Vec<String>>>,
}

impl Transport for Replay {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.urls.lock().unwrap().push(request.url.clone());
        Ok(self.response.clone())
    }
}

/// Build a client replaying `case["simulated_response"]` and the shared log
/// of requested URLs.
fn replay_client(case: &Value) -> (WikimediaClient<Replay>, Arc<Mutex<Vec<String>>>) {
    let sim = &case["simulated_response"];
    let urls = Arc::new(Mutex::new(Vec::new()));
    let transport = Replay {
        response: HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
        },
        urls: Arc::clone(&urls),
    };
    (WikimediaClient::with_transport(BASE_URL, transport).unwrap(), urls)
}

fn assert_requested(name: &str, case: &Value, urls: &Mutex<Vec<String>>) {
    let expected = format!("{BASE_URL}{}", case["expected_request"]["url"].as_str().unwrap());
    assert_eq!(*urls.lock().unwrap(), vec![expected], "{name}: request url");
}

fn assert_error_kind(name: &str, expected: &str, err: &Error) {
    let matched = match expected {
        "NotFound" => matches!(err, Error::NotFound { .. }),
        "HttpStatus" => matches!(err, Error::HttpStatus { .. }),
        "Decode" => matches!(err, Error::Decode(_)),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(matched, "{name}: expected {expected}, got {err:?}");
}

// ---------------------------------------------------------------------------
// Page summary
// ---------------------------------------------------------------------------

#[test]
fn page_summary_test_vectors() {
    let raw = include_str!("../../test-vectors/page_summary.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let (client, urls) = replay_client(case);

        let result = client.get_page_summary(case["input_title"].as_str().unwrap());
        assert_requested(name, case, &urls);

        if let Some(expected_error) = case.get("expected_error") {
            assert_error_kind(name, expected_error.as_str().unwrap(), &result.unwrap_err());
        } else {
            let expected: Summary = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Page title
// ---------------------------------------------------------------------------

#[test]
fn page_title_test_vectors() {
    let raw = include_str!("../../test-vectors/page_title.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let (client, urls) = replay_client(case);

        let result = client.get_page_title(case["input_title"].as_str().unwrap());
        assert_requested(name, case, &urls);

        if let Some(expected_error) = case.get("expected_error") {
            assert_error_kind(name, expected_error.as_str().unwrap(), &result.unwrap_err());
        } else {
            let expected: TitleRevisions =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// On this day
// ---------------------------------------------------------------------------

#[test]
fn feed_on_this_day_test_vectors() {
    let raw = include_str!("../../test-vectors/feed_onthisday.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let month = input["month"].as_u64().unwrap() as u32;
        let day = input["day"].as_u64().unwrap() as u32;
        let event_type: EventType = input["event_type"].as_str().unwrap().parse().unwrap();
        let (client, urls) = replay_client(case);

        let result = client.get_feed_on_this_day(month, day, event_type);
        assert_requested(name, case, &urls);

        if let Some(expected_error) = case.get("expected_error") {
            assert_error_kind(name, expected_error.as_str().unwrap(), &result.unwrap_err());
        } else {
            let expected: OnThisDayFeed =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}
