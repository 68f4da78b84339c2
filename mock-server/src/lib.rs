//! In-process fake of the Wikimedia REST v1 endpoints the client covers.
//!
//! Serves fixed fixtures under `/api/rest_v1/`. Unknown titles get a 404 and
//! malformed feed parameters a 400, both with a problem JSON body like the
//! real service sends.

pub mod fixtures;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tracing::debug;

use fixtures::{Fixtures, RANDOM_TITLE};

pub type SharedFixtures = Arc<Fixtures>;

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

const EVENT_KINDS: [&str; 5] = ["selected", "births", "deaths", "events", "holidays"];

pub fn app() -> Router {
    let fixtures: SharedFixtures = Arc::new(Fixtures::seeded());
    let api = Router::new()
        .route("/page/summary/{title}", get(page_summary))
        .route("/page/title/{title}", get(page_title))
        .route("/page/random/summary", get(random_summary))
        .route("/page/random/title", get(random_title))
        .route("/feed/onthisday/{kind}/{mm}/{dd}", get(on_this_day))
        .with_state(fixtures);
    Router::new().nest("/api/rest_v1", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn problem(status: StatusCode, kind: &str, detail: String) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({
            "type": format!("https://mediawiki.org/wiki/HyperSwitch/errors/{kind}"),
            "title": status.canonical_reason().unwrap_or_default(),
            "detail": detail,
        })),
    )
}

fn not_found(title: &str) -> (StatusCode, Json<Value>) {
    problem(
        StatusCode::NOT_FOUND,
        "not_found",
        format!("Page or revision not found: {title}"),
    )
}

async fn page_summary(State(fixtures): State<SharedFixtures>, Path(title): Path<String>) -> ApiResult {
    debug!(%title, "summary");
    fixtures
        .page(&title)
        .map(|page| Json(page.summary.clone()))
        .ok_or_else(|| not_found(&title))
}

async fn page_title(State(fixtures): State<SharedFixtures>, Path(title): Path<String>) -> ApiResult {
    debug!(%title, "title");
    fixtures
        .page(&title)
        .map(|page| Json(page.revisions.clone()))
        .ok_or_else(|| not_found(&title))
}

async fn random_summary(State(fixtures): State<SharedFixtures>) -> ApiResult {
    fixtures
        .random()
        .map(|page| Json(page.summary.clone()))
        .ok_or_else(|| not_found(RANDOM_TITLE))
}

async fn random_title(State(fixtures): State<SharedFixtures>) -> ApiResult {
    fixtures
        .random()
        .map(|page| Json(page.revisions.clone()))
        .ok_or_else(|| not_found(RANDOM_TITLE))
}

/// Parse a two-digit calendar component within `1..=max`.
fn two_digits(raw: &str, max: u32) -> Option<u32> {
    if raw.len() != 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().filter(|v| (1..=max).contains(v))
}

async fn on_this_day(
    State(fixtures): State<SharedFixtures>,
    Path((kind, mm, dd)): Path<(String, String, String)>,
) -> ApiResult {
    debug!(%kind, %mm, %dd, "onthisday");
    if two_digits(&mm, 12).is_none() || two_digits(&dd, 31).is_none() {
        return Err(problem(
            StatusCode::BAD_REQUEST,
            "invalid_request",
            format!("Invalid date: {mm}/{dd}"),
        ));
    }

    let feed = fixtures.feed();
    if kind == "all" {
        return Ok(Json(feed.clone()));
    }
    if !EVENT_KINDS.contains(&kind.as_str()) {
        return Err(problem(
            StatusCode::BAD_REQUEST,
            "invalid_request",
            format!("Invalid event type: {kind}"),
        ));
    }

    let mut filtered = Map::new();
    filtered.insert(kind.clone(), feed[kind.as_str()].clone());
    Ok(Json(Value::Object(filtered)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_digits_accepts_padded_values() {
        assert_eq!(two_digits("03", 12), Some(3));
        assert_eq!(two_digits("12", 12), Some(12));
        assert_eq!(two_digits("31", 31), Some(31));
    }

    #[test]
    fn two_digits_rejects_unpadded_or_out_of_range() {
        assert_eq!(two_digits("3", 12), None);
        assert_eq!(two_digits("003", 12), None);
        assert_eq!(two_digits("13", 12), None);
        assert_eq!(two_digits("00", 31), None);
        assert_eq!(two_digits("-1", 31), None);
        assert_eq!(two_digits("ab", 31), None);
    }

    #[test]
    fn problem_body_names_error_kind() {
        let (status, Json(body)) = not_found("Atlantis");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["type"], "https://mediawiki.org/wiki/HyperSwitch/errors/not_found");
        assert_eq!(body["title"], "Not Found");
        assert_eq!(body["detail"], "Page or revision not found: Atlantis");
    }
}
