//! Gallery data and payloads.

use serde::{Deserialize, Serialize};

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";
pub const RETRY_LABEL: &str = "Try search again";

/// Image URLs for a feed item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub m: String,
}

/// One item of the public photo feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub media: Media,
}

/// Everything the gallery view renders besides the machine state.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryData {
    pub items: Vec<Photo>,
    pub search_text: String,
    pub disable_form: bool,
    pub photo: Option<Photo>,
}

impl Default for GalleryData {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_text: SEARCH_LABEL.to_string(),
            disable_form: false,
            photo: None,
        }
    }
}

/// Payloads carried by gallery transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryPayload {
    /// Result of a successful search.
    Items(Vec<Photo>),

    /// The photo a user selected.
    Photo(Photo),
}
