//! The photo feed collaborator.
//!
//! Searching is an effect over an environment that can fetch a URL. The
//! effect's single result is mapped to exactly one gallery event by
//! [`completion_event`]; the chart decides whether that event still
//! applies when it arrives.

use super::chart::GalleryEvent;
use super::data::{GalleryPayload, Photo};
use super::error::FeedError;
use crate::machine::Transitioner;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::{debug, warn};
use url::Url;

/// A public feed response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<Photo>,
}

/// Environment capability: fetch a feed body.
pub trait PhotoFeed {
    fn fetch(&self, url: &Url) -> Result<String, FeedError>;
}

/// Search the feed at `url`.
pub fn search_photos<Env>(url: Url) -> impl Effect<Output = Vec<Photo>, Error = FeedError, Env = Env>
where
    Env: PhotoFeed + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| -> Result<Vec<Photo>, FeedError> {
        debug!(%url, "searching photo feed");
        let body = env.fetch(&url)?;
        Ok(parse_feed(&body)?.items)
    })
}

/// Parse a feed body, with or without a JSONP wrapper.
pub fn parse_feed(body: &str) -> Result<FeedResponse, FeedError> {
    let trimmed = body.trim();
    let json = jsonp_payload(trimmed).unwrap_or(trimmed);
    Ok(serde_json::from_str(json)?)
}

/// The argument of a `callback(...)` wrapper, if `body` is one.
fn jsonp_payload(body: &str) -> Option<&str> {
    let open = body.find('(')?;
    let callback = body[..open].trim_end();
    let mut chars = callback.chars();
    let starts_like_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if !starts_like_identifier
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'))
    {
        return None;
    }

    let inner = body[open + 1..].trim_end().strip_suffix(';').unwrap_or(&body[open + 1..]);
    inner.trim_end().strip_suffix(')')
}

/// Map a search result to the one event it produces.
pub fn completion_event(
    result: Result<Vec<Photo>, FeedError>,
) -> (GalleryEvent, Option<GalleryPayload>) {
    match result {
        Ok(items) => (GalleryEvent::SearchSuccess, Some(GalleryPayload::Items(items))),
        Err(error) => {
            warn!(%error, "photo search failed");
            (GalleryEvent::SearchFailure, None)
        }
    }
}

/// Queue the completion of a search on `transitioner`.
pub fn deliver(
    transitioner: &Transitioner<GalleryEvent, GalleryPayload>,
    result: Result<Vec<Photo>, FeedError>,
) {
    let (event, payload) = completion_event(result);
    transitioner.transition(event, payload);
}

/// A feed that serves a fixed body and records what was requested.
#[derive(Clone, Debug, Default)]
pub struct StaticFeed {
    body: Option<String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StaticFeed {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            requests: Arc::default(),
        }
    }

    /// A feed whose every request fails.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// URLs requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl PhotoFeed for StaticFeed {
    fn fetch(&self, url: &Url) -> Result<String, FeedError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        self.body
            .clone()
            .ok_or_else(|| FeedError::Request(format!("{url} is unavailable")))
    }
}

/// A small JSONP feed body used by the demo and tests.
pub const SAMPLE_FEED: &str = r#"jsoncallback({
    "title": "Recent Uploads tagged cats",
    "items": [
        {
            "title": "Tabby",
            "link": "https://www.flickr.com/photos/example/1/",
            "media": { "m": "https://live.staticflickr.com/1/1_m.jpg" }
        },
        {
            "title": "Kitten",
            "link": "https://www.flickr.com/photos/example/2/",
            "media": { "m": "https://live.staticflickr.com/2/2_m.jpg" }
        },
        {
            "title": "Sleeping",
            "link": "https://www.flickr.com/photos/example/3/",
            "media": { "m": "https://live.staticflickr.com/3/3_m.jpg" }
        }
    ]
})"#;
