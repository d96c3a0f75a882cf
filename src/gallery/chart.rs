//! The gallery's states, events and chart.

use crate::builder::ChartBuilder;
use crate::core::Chart;
use crate::{event_enum, state_enum};

state_enum! {
    /// Where the gallery UI currently is.
    pub enum GalleryState {
        Start = "start",
        Loading = "loading",
        Error = "error",
        Gallery = "gallery",
        Photo = "photo",
    }
}

event_enum! {
    /// Everything the gallery UI or its feed can ask for.
    pub enum GalleryEvent {
        Search = "SEARCH",
        SearchSuccess = "SEARCH_SUCCESS",
        SearchFailure = "SEARCH_FAILURE",
        CancelSearch = "CANCEL_SEARCH",
        SelectPhoto = "SELECT_PHOTO",
        ExitPhoto = "EXIT_PHOTO",
    }
}

/// The gallery chart in its declarative JSON form.
pub const GALLERY_CHART_JSON: &str = r#"{
    "initial": "start",
    "states": {
        "start": { "on": { "SEARCH": "loading" } },
        "loading": {
            "on": {
                "SEARCH_SUCCESS": "gallery",
                "SEARCH_FAILURE": "error",
                "CANCEL_SEARCH": "gallery"
            }
        },
        "error": { "on": { "SEARCH": "loading" } },
        "gallery": { "on": { "SEARCH": "loading", "SELECT_PHOTO": "photo" } },
        "photo": { "on": { "EXIT_PHOTO": "gallery" } }
    }
}"#;

/// Build the gallery chart.
pub fn gallery_chart() -> Chart<GalleryState, GalleryEvent> {
    use GalleryEvent as E;
    use GalleryState as S;

    ChartBuilder::new()
        .initial(S::Start)
        .transition(S::Start, E::Search, S::Loading)
        .transition(S::Loading, E::SearchSuccess, S::Gallery)
        .transition(S::Loading, E::SearchFailure, S::Error)
        .transition(S::Loading, E::CancelSearch, S::Gallery)
        .transition(S::Error, E::Search, S::Loading)
        .transition(S::Gallery, E::Search, S::Loading)
        .transition(S::Gallery, E::SelectPhoto, S::Photo)
        .transition(S::Photo, E::ExitPhoto, S::Gallery)
        .build()
        .expect("gallery chart is valid (checked by builder_and_json_charts_agree)")
}
