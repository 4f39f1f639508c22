use crate::card::Card;

/// Open `card` in the system browser. The browser runs as a separate process,
/// so the opened page has no handle back into the dashboard.
pub fn open_card(card: &Card) -> anyhow::Result<()> {
    open_link(&card.url)
}

pub fn open_link(url: &str) -> anyhow::Result<()> {
    tracing::info!("opening {url}");
    open::that_detached(url)?;
    Ok(())
}
