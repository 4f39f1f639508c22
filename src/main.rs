use link_deck::bookmarks;
use link_deck::favicon::{FaviconLoader, HttpFaviconSource};
use link_deck::gui::DashboardApp;
use link_deck::logging;
use link_deck::settings::{Settings, SETTINGS_FILE};
use link_deck::theme::JsonPreferenceStore;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging);

    let groups = bookmarks::load_or_default(settings.bookmarks_file.as_deref());
    let store = JsonPreferenceStore::open(settings.preferences_path());
    tracing::debug!("theme preferences at {}", store.path().display());
    let source = HttpFaviconSource::new(settings.favicon_timeout())?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size())
            .with_min_inner_size([320.0, 240.0]),
        follow_system_theme: true,
        ..Default::default()
    };

    eframe::run_native(
        "Links",
        native_options,
        Box::new(move |cc| {
            let favicons = FaviconLoader::spawn(source, Some(cc.egui_ctx.clone()));
            Box::new(DashboardApp::new(&groups, &settings, store, Some(favicons)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start dashboard window: {e}"))?;
    Ok(())
}
