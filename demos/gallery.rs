//! Photo Gallery
//!
//! This demo drives the gallery chart through a scripted session against
//! an in-memory feed.
//!
//! Key concepts:
//! - A JSON chart bound to a reducer
//! - Switch/Match rendering keyed on the current state
//! - A search effect whose completion is queued through a transitioner
//! - Stale completions rejected by the chart after a cancel
//!
//! Run with: cargo run --example gallery -- [tag]
//! Set RUST_LOG=finite=debug to see transitions as they happen.

use finite::gallery::{
    deliver, search_photos, GalleryConfig, GalleryEvent, GalleryPayload, GalleryReducer,
    GalleryView, StaticFeed, GALLERY_CHART_JSON, SAMPLE_FEED,
};
use finite::machine::Finite;
use std::error::Error;
use stillwater::effect::Effect;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Photo Gallery ===\n");

    let query = std::env::args().nth(1).unwrap_or_else(|| "cats".to_string());
    let config = match std::env::var("GALLERY_CONFIG") {
        Ok(json) => GalleryConfig::from_json(&json)?,
        Err(_) => GalleryConfig::default(),
    };

    let mut finite = Finite::from_json(GALLERY_CHART_JSON, GalleryReducer)?;
    let view = GalleryView::new();
    let shown = query.clone();
    finite.set_renderer(move |machine| println!("{}\n", view.render(machine, &shown)));
    finite.mount();

    let url = config.search_url(&query)?;
    println!("Searching {url}\n");

    // First attempt: the feed is down.
    finite.send(GalleryEvent::Search)?;
    let result = search_photos(url.clone()).run(&StaticFeed::unavailable()).await;
    deliver(&finite.transitioner(), result);
    finite.run_pending()?;

    // Retry, then cancel before the results arrive.
    finite.send(GalleryEvent::Search)?;
    let pending = search_photos(url.clone()).run(&StaticFeed::new(SAMPLE_FEED)).await;
    finite.send(GalleryEvent::CancelSearch)?;
    deliver(&finite.transitioner(), pending);
    for outcome in finite.run_pending()? {
        println!("Late search result: accepted = {}\n", outcome.is_accepted());
    }

    // Search again and let it finish.
    finite.send(GalleryEvent::Search)?;
    let result = search_photos(url).run(&StaticFeed::new(SAMPLE_FEED)).await;
    deliver(&finite.transitioner(), result);
    finite.run_pending()?;

    if let Some(photo) = finite.data().items.get(1).cloned() {
        finite.transition(GalleryEvent::SelectPhoto, Some(GalleryPayload::Photo(photo)))?;
        finite.send(GalleryEvent::ExitPhoto)?;
    }

    println!("Path: {:?}", finite.history().get_path());
    println!("\n=== Demo Complete ===");

    Ok(())
}
