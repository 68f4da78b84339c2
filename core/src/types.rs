//! Response schemas for the REST v1 endpoints.
//!
//! # Design
//! Every field tolerates absence: a missing key decodes to its default (or
//! `None`) instead of failing, and defaults are skipped again on encode so
//! the wire form stays symmetric. Nested groups that the service may leave
//! out entirely (`thumbnail`, `content_urls`, the on-this-day categories) are
//! `Option`s, keeping "absent" apart from "present but zero".

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Revision list returned by `page/title/{title}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleRevisions {
    pub items: Vec<Title>,
    #[serde(skip_serializing_if = "is_zero")]
    pub count: u32,
}

/// One revision of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Title {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub page_id: u64,
    #[serde(rename = "rev", skip_serializing_if = "is_zero")]
    pub revision: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_language: String,
}

/// Page summary returned by `page/summary/{title}` and `page/random/summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub title: String,
    #[serde(rename = "displaytitle", skip_serializing_if = "String::is_empty")]
    pub display_title: String,
    pub extract: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extract_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Image>,
    #[serde(rename = "originalimage", skip_serializing_if = "Option::is_none")]
    pub original_image: Option<Image>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_urls: Option<ContentUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_urls: Option<ApiUrls>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub source: String,
    pub width: u32,
    pub height: u32,
}

/// Links to the rendered page, per device class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<ContentUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<ContentUrl>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentUrl {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub revisions: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub edit: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub talk: String,
}

/// Links to secondary REST resources for the same page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiUrls {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub metadata: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub references: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub media: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub edit_html: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub talk_page_html: String,
}

/// Feed returned by `feed/onthisday/{type}/{mm}/{dd}`.
///
/// Only the categories matching the requested `EventType` are present;
/// `EventType::All` fills all five.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnThisDayFeed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub births: Option<Vec<OnThisDay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaths: Option<Vec<OnThisDay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<OnThisDay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<OnThisDay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Vec<OnThisDay>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnThisDay {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Summary>,
}

/// Category filter for the on-this-day feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    All,
    Selected,
    Births,
    Deaths,
    Holidays,
    Events,
}

impl EventType {
    /// Every variant, in discriminant order.
    pub const VARIANTS: [EventType; 6] = [
        EventType::All,
        EventType::Selected,
        EventType::Births,
        EventType::Deaths,
        EventType::Holidays,
        EventType::Events,
    ];

    /// Path segment used by the feed endpoint.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::All => "all",
            EventType::Selected => "selected",
            EventType::Births => "births",
            EventType::Deaths => "deaths",
            EventType::Holidays => "holidays",
            EventType::Events => "events",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::InvalidEventType(s.to_string()))
    }
}

impl TryFrom<u8> for EventType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::VARIANTS
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::InvalidEventType(value.to_string()))
    }
}
