//! A photo gallery built on Finite.
//!
//! The gallery searches a public photo feed, shows the results as
//! thumbnails, and opens one photo at a time. Its chart is small enough to
//! read in one go (see [`GALLERY_CHART_JSON`]); the reducer owns the form
//! labels and the result list, and the feed search runs as an effect whose
//! completion is delivered back through a [`Transitioner`](crate::machine::Transitioner).

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod feed;
pub mod reducer;
pub mod view;

pub use chart::{gallery_chart, GalleryEvent, GalleryState, GALLERY_CHART_JSON};
pub use config::{GalleryConfig, DEFAULT_FEED_URL};
pub use data::{GalleryData, GalleryPayload, Media, Photo};
pub use error::{FeedError, GalleryError};
pub use feed::{
    completion_event, deliver, parse_feed, search_photos, FeedResponse, PhotoFeed, StaticFeed,
    SAMPLE_FEED,
};
pub use reducer::GalleryReducer;
pub use view::{GalleryView, PhotoDetail};
