//! Text rendering of the gallery.

use super::chart::GalleryState;
use super::reducer::GalleryReducer;
use crate::core::State;
use crate::machine::Machine;
use crate::render::{Component, Match, Switch};

pub const ERROR_MESSAGE: &str = "Uh oh, search failed.";

/// Full-size view of the selected photo.
pub struct PhotoDetail;

impl Component<GalleryReducer> for PhotoDetail {
    type Output = String;

    fn render(&self, machine: &Machine<'_, GalleryReducer>) -> String {
        match &machine.data.photo {
            Some(photo) => format!("[photo] {} <{}> (exit to close)", photo.title, photo.media.m),
            None => "[photo]".to_string(),
        }
    }
}

/// The gallery screen: search form, status line, thumbnails, detail.
pub struct GalleryView {
    controls: Switch<GalleryReducer, String>,
    status: Switch<GalleryReducer, String>,
    detail: Switch<GalleryReducer, String>,
}

impl GalleryView {
    pub fn new() -> Self {
        Self {
            controls: Switch::new().case(
                Match::new(GalleryState::Loading)
                    .callback(|m: &Machine<'_, GalleryReducer>| {
                        format!("[Cancel] {}", m.data.search_text)
                    }),
            ),
            status: Switch::new()
                .case(Match::new(GalleryState::Error).child(ERROR_MESSAGE.to_string())),
            detail: Switch::new().case(Match::new(GalleryState::Photo).view(PhotoDetail)),
        }
    }

    /// Render the screen for `machine`, with `query` in the search box.
    pub fn render(&self, machine: &Machine<'_, GalleryReducer>, query: &str) -> String {
        let data = machine.data;
        let mut lines = vec![format!("<gallery state={}>", machine.state.name())];

        let disabled = if data.disable_form { " (disabled)" } else { "" };
        let mut form = format!("search: [{query}] [{}]{disabled}", data.search_text);
        if let Some(controls) = self.controls.render(machine) {
            form.push(' ');
            form.push_str(&controls);
        }
        lines.push(form);

        lines.extend(self.status.render(machine));
        lines.extend(
            data.items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("  #{i} {} <{}>", item.title, item.media.m)),
        );
        lines.extend(self.detail.render(machine));

        lines.join("\n")
    }
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}
