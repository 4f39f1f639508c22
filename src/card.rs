use crate::accent::{domain_of, resolve_accent, Accent};
use crate::bookmarks::BookmarkEntry;

pub const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
pub const DEFAULT_FAVICON_SIZE: u32 = 64;

/// State of a card's favicon. A card leaves `Pending` at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Link tile built from one bookmark entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub name: String,
    pub url: String,
    /// Bare domain used both for display and by the search filter.
    pub domain: String,
    pub accent: Accent,
    pub favicon_url: String,
    pub icon: IconState,
}

impl Card {
    pub fn build(entry: &BookmarkEntry, favicon_size: u32) -> Self {
        Self {
            name: entry.name.clone(),
            url: entry.url.clone(),
            domain: domain_of(&entry.url),
            accent: resolve_accent(&entry.url),
            favicon_url: favicon_url(&entry.url, favicon_size),
            icon: IconState::Pending,
        }
    }

    /// Record the outcome of the favicon load. Returns `false` when the icon
    /// was already resolved, in which case nothing changes.
    pub fn resolve_icon(&mut self, loaded: bool) -> bool {
        if self.icon != IconState::Pending {
            return false;
        }
        self.icon = if loaded {
            IconState::Loaded
        } else {
            IconState::Failed
        };
        true
    }

    pub(crate) fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(query) || self.domain.contains(query)
    }
}

pub fn favicon_url(url: &str, size: u32) -> String {
    format!(
        "{FAVICON_SERVICE}?sz={size}&domain_url={}",
        urlencoding::encode(url)
    )
}
