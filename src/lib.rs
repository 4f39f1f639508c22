pub mod accent;
pub mod bookmarks;
pub mod card;
pub mod dashboard;
pub mod favicon;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod settings;
pub mod shortcuts;
pub mod theme;
