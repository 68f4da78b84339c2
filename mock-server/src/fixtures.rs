//! Canned REST v1 payloads, shaped like the real service's responses.

use std::collections::HashMap;

use serde_json::{json, Value};

/// Title served by the `page/random/*` routes.
pub const RANDOM_TITLE: &str = "Belgium";

pub struct Page {
    pub summary: Value,
    pub revisions: Value,
}

pub struct Fixtures {
    pages: HashMap<String, Page>,
    feed: Value,
}

impl Fixtures {
    pub fn seeded() -> Self {
        let pages = [belgium(), acdc()]
            .into_iter()
            .map(|page| (page.summary["title"].as_str().unwrap_or_default().to_string(), page))
            .collect();
        Self {
            pages,
            feed: on_this_day_feed(),
        }
    }

    /// Look up a page the way the service does: spaces and underscores are
    /// interchangeable.
    pub fn page(&self, title: &str) -> Option<&Page> {
        self.pages.get(&title.replace('_', " "))
    }

    pub fn random(&self) -> Option<&Page> {
        self.page(RANDOM_TITLE)
    }

    pub fn feed(&self) -> &Value {
        &self.feed
    }
}

fn summary(title: &str, slug: &str, page_id: u64, extract: &str, description: &str) -> Value {
    let desktop = format!("https://en.wikipedia.org/wiki/{slug}");
    let mobile = format!("https://en.m.wikipedia.org/wiki/{slug}");
    let api = "https://en.wikipedia.org/api/rest_v1/page";
    json!({
        "type": "standard",
        "title": title,
        "displaytitle": format!("<span class=\"mw-page-title-main\">{title}</span>"),
        "pageid": page_id,
        "extract": extract,
        "extract_html": format!("<p>{extract}</p>"),
        "description": description,
        "content_urls": {
            "desktop": {
                "page": desktop,
                "revisions": format!("{desktop}?action=history"),
                "edit": format!("{desktop}?action=edit"),
                "talk": format!("https://en.wikipedia.org/wiki/Talk:{slug}")
            },
            "mobile": {
                "page": mobile,
                "revisions": format!("https://en.m.wikipedia.org/wiki/Special:History/{slug}"),
                "edit": format!("{mobile}?action=edit"),
                "talk": format!("https://en.m.wikipedia.org/wiki/Talk:{slug}")
            }
        },
        "api_urls": {
            "summary": format!("{api}/summary/{slug}"),
            "metadata": format!("{api}/metadata/{slug}"),
            "references": format!("{api}/references/{slug}"),
            "media": format!("{api}/media/{slug}"),
            "edit_html": format!("{api}/html/{slug}"),
            "talk_page_html": format!("{api}/html/Talk:{slug}")
        }
    })
}

fn belgium() -> Page {
    let mut summary = summary(
        "Belgium",
        "Belgium",
        3343,
        "Belgium, officially the Kingdom of Belgium, is a country in Northwestern Europe.",
        "Country in Western Europe",
    );
    summary["thumbnail"] = json!({
        "source": "https://upload.wikimedia.org/wikipedia/commons/thumb/6/65/Flag_of_Belgium.svg/320px-Flag_of_Belgium.svg.png",
        "width": 320,
        "height": 277
    });
    summary["originalimage"] = json!({
        "source": "https://upload.wikimedia.org/wikipedia/commons/6/65/Flag_of_Belgium.svg",
        "width": 450,
        "height": 390
    });

    Page {
        summary,
        revisions: json!({
            "items": [{
                "title": "Belgium",
                "page_id": 3343,
                "rev": 1_187_654_321u64,
                "tid": "3f2c7a10-8e1b-11ee-b9d1-0242ac120002",
                "namespace": 0,
                "user_id": 4242,
                "user_text": "ExampleEditor",
                "timestamp": "2023-11-28T14:03:09Z",
                "comment": "copyedit",
                "tags": [],
                "restrictions": [],
                "page_language": "en",
                "redirect": false
            }]
        }),
    }
}

fn acdc() -> Page {
    Page {
        summary: summary(
            "AC/DC",
            "AC%2FDC",
            1455,
            "AC/DC are an Australian rock band formed in Sydney in 1973.",
            "Australian rock band",
        ),
        revisions: json!({
            "items": [{
                "title": "AC/DC",
                "page_id": 1455,
                "rev": 1_190_000_001u64,
                "timestamp": "2023-12-10T08:15:00Z",
                "comment": "/* History */ fix link",
                "page_language": "en"
            }]
        }),
    }
}

fn entry(text: &str, year: i32, titles: &[&str]) -> Value {
    let pages: Vec<Value> = titles
        .iter()
        .map(|title| {
            json!({
                "title": title,
                "extract": format!("{title} is referenced by this entry."),
            })
        })
        .collect();
    json!({ "text": text, "year": year, "pages": pages })
}

fn on_this_day_feed() -> Value {
    json!({
        "selected": [entry("Belgium adopts its first constitution.", 1831, &["Belgium", "Constitution_of_Belgium"])],
        "births": [
            entry("William Shatner, Canadian actor", 1931, &["William_Shatner"]),
            entry("Andrew Lloyd Webber, English composer", 1948, &["Andrew_Lloyd_Webber"])
        ],
        "deaths": [entry("Jean-Baptiste Lully, French composer", 1687, &["Jean-Baptiste_Lully"])],
        "events": [entry("The first AC/DC single is released.", 1974, &["AC/DC"])],
        "holidays": [{ "text": "World Water Day", "pages": [{ "title": "World_Water_Day", "extract": "" }] }]
    })
}
