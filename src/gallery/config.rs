//! Gallery configuration.

use super::error::FeedError;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_FEED_URL: &str = "https://api.flickr.com/services/feeds/photos_public.gne";

/// Where and how the gallery asks for photos.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Base URL of the public photo feed.
    pub feed_url: String,
    pub lang: String,
    /// JSONP callback parameter value; `None` requests plain JSON.
    pub jsonp_callback: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            lang: "en-us".to_string(),
            jsonp_callback: Some("jsoncallback".to_string()),
        }
    }
}

impl GalleryConfig {
    /// Load a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let config: Self = serde_json::from_str(json)?;
        if config.lang.trim().is_empty() {
            return Err(FeedError::Config("lang must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Request URL for a tag search.
    pub fn search_url(&self, query: &str) -> Result<Url, FeedError> {
        let mut url = Url::parse(&self.feed_url)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("lang", &self.lang)
                .append_pair("format", "json")
                .append_pair("tags", query);
            match &self.jsonp_callback {
                Some(callback) => pairs.append_pair("jsoncallback", callback),
                None => pairs.append_pair("nojsoncallback", "1"),
            };
        }
        Ok(url)
    }
}
