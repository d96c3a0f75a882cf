//! Gallery reducer.

use super::chart::{GalleryEvent, GalleryState};
use super::data::{GalleryData, GalleryPayload, RETRY_LABEL, SEARCHING_LABEL, SEARCH_LABEL};
use super::error::GalleryError;
use crate::core::{Action, ActionKind};
use crate::machine::Reducer;
use tracing::debug;

/// Turns gallery actions into new [`GalleryData`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Event = GalleryEvent;
    type Payload = GalleryPayload;
    type Data = GalleryData;
    type Error = GalleryError;

    fn reduce(
        &self,
        data: Option<&GalleryData>,
        action: &Action<GalleryState, GalleryEvent, GalleryPayload>,
    ) -> Result<GalleryData, GalleryError> {
        let current = data.cloned().unwrap_or_default();

        let event = match &action.kind {
            ActionKind::Init => return Ok(GalleryData::default()),
            ActionKind::Event(event) => event,
        };

        match event {
            GalleryEvent::Search => Ok(GalleryData {
                search_text: SEARCHING_LABEL.to_string(),
                disable_form: true,
                ..current
            }),
            GalleryEvent::SearchSuccess => match &action.payload {
                Some(GalleryPayload::Items(items)) => Ok(GalleryData {
                    items: items.clone(),
                    ..GalleryData::default()
                }),
                _ => Err(GalleryError::MissingPayload {
                    event: "SEARCH_SUCCESS",
                    expected: "items",
                }),
            },
            GalleryEvent::SearchFailure => Ok(GalleryData {
                search_text: RETRY_LABEL.to_string(),
                ..GalleryData::default()
            }),
            // Cancelling keeps the previous results but re-enables the form.
            GalleryEvent::CancelSearch => Ok(GalleryData {
                search_text: SEARCH_LABEL.to_string(),
                disable_form: false,
                ..current
            }),
            GalleryEvent::SelectPhoto => match &action.payload {
                Some(GalleryPayload::Photo(photo)) => {
                    debug!(link = %photo.link, title = %photo.title, "photo selected");
                    Ok(GalleryData {
                        photo: Some(photo.clone()),
                        ..current
                    })
                }
                _ => Err(GalleryError::MissingPayload {
                    event: "SELECT_PHOTO",
                    expected: "photo",
                }),
            },
            GalleryEvent::ExitPhoto => Ok(GalleryData {
                photo: None,
                ..current
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::data::Photo;

    fn photo(link: &str) -> Photo {
        Photo {
            title: "cat".to_string(),
            link: link.to_string(),
            ..Photo::default()
        }
    }

    fn reduce(
        data: &GalleryData,
        event: GalleryEvent,
        payload: Option<GalleryPayload>,
        next: GalleryState,
    ) -> Result<GalleryData, GalleryError> {
        GalleryReducer.reduce(Some(data), &Action::event(event, payload, next))
    }

    #[test]
    fn init_yields_default_data() {
        let data = GalleryReducer
            .reduce(None, &Action::init(GalleryState::Start))
            .unwrap();

        assert_eq!(data, GalleryData::default());
        assert_eq!(data.search_text, "Search");
    }

    #[test]
    fn search_disables_the_form() {
        let data = reduce(
            &GalleryData::default(),
            GalleryEvent::Search,
            None,
            GalleryState::Loading,
        )
        .unwrap();

        assert_eq!(data.search_text, "Searching...");
        assert!(data.disable_form);
    }

    #[test]
    fn success_resets_and_stores_items() {
        let searching = GalleryData {
            search_text: SEARCHING_LABEL.to_string(),
            disable_form: true,
            ..GalleryData::default()
        };
        let items = vec![photo("a"), photo("b")];

        let data = reduce(
            &searching,
            GalleryEvent::SearchSuccess,
            Some(GalleryPayload::Items(items.clone())),
            GalleryState::Gallery,
        )
        .unwrap();

        assert_eq!(data.items, items);
        assert_eq!(data.search_text, "Search");
        assert!(!data.disable_form);
    }

    #[test]
    fn success_without_items_is_an_error() {
        let err = reduce(
            &GalleryData::default(),
            GalleryEvent::SearchSuccess,
            None,
            GalleryState::Gallery,
        )
        .unwrap_err();

        assert_eq!(
            err,
            GalleryError::MissingPayload {
                event: "SEARCH_SUCCESS",
                expected: "items"
            }
        );
    }

    #[test]
    fn failure_asks_to_retry() {
        let with_items = GalleryData {
            items: vec![photo("a")],
            ..GalleryData::default()
        };

        let data = reduce(
            &with_items,
            GalleryEvent::SearchFailure,
            None,
            GalleryState::Error,
        )
        .unwrap();

        assert_eq!(data.search_text, "Try search again");
        assert!(data.items.is_empty());
    }

    #[test]
    fn cancel_keeps_items_and_enables_form() {
        let searching = GalleryData {
            items: vec![photo("a")],
            search_text: SEARCHING_LABEL.to_string(),
            disable_form: true,
            photo: None,
        };

        let data = reduce(
            &searching,
            GalleryEvent::CancelSearch,
            None,
            GalleryState::Gallery,
        )
        .unwrap();

        assert_eq!(data.items.len(), 1);
        assert!(!data.disable_form);
        assert_eq!(data.search_text, "Search");
    }

    #[test]
    fn select_and_exit_photo() {
        let gallery = GalleryData {
            items: vec![photo("a"), photo("b")],
            ..GalleryData::default()
        };

        let selected = reduce(
            &gallery,
            GalleryEvent::SelectPhoto,
            Some(GalleryPayload::Photo(photo("b"))),
            GalleryState::Photo,
        )
        .unwrap();
        assert_eq!(selected.photo, Some(photo("b")));
        assert_eq!(selected.items, gallery.items);

        let exited = reduce(&selected, GalleryEvent::ExitPhoto, None, GalleryState::Gallery).unwrap();
        assert_eq!(exited.photo, None);
    }
}
