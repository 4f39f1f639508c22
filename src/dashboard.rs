//! View-model for the rendered bookmark groups.
//!
//! The GUI only projects this model; all search and visibility logic lives
//! here so it can be exercised without a window.

use crate::bookmarks::BookmarkGroup;
use crate::card::Card;

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub card: Card,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub label: String,
    pub cards: Vec<CardView>,
    pub visible_count: usize,
    /// Set by the search filter when no card in the section matches.
    pub hidden: bool,
}

impl Section {
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn count_label(&self) -> String {
        count_label(self.visible_count)
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.visible).map(|c| &c.card)
    }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 link".to_string()
    } else {
        format!("{count} links")
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    sections: Vec<Section>,
    favicon_size: u32,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(crate::card::DEFAULT_FAVICON_SIZE)
    }
}

impl Dashboard {
    pub fn new(favicon_size: u32) -> Self {
        Self {
            sections: Vec::new(),
            favicon_size,
        }
    }

    /// Replace every section with freshly built ones for `groups`.
    pub fn render_groups(&mut self, groups: &[BookmarkGroup]) {
        self.sections.clear();
        for group in groups {
            let cards: Vec<CardView> = group
                .items
                .iter()
                .map(|entry| CardView {
                    card: Card::build(entry, self.favicon_size),
                    visible: true,
                })
                .collect();
            self.sections.push(Section {
                label: group.group.clone(),
                visible_count: cards.len(),
                hidden: false,
                cards,
            });
        }
        tracing::debug!(
            sections = self.sections.len(),
            cards = self.card_count(),
            "rendered bookmark groups"
        );
    }

    /// Show the cards whose name or domain contains `query`, case-insensitively.
    pub fn filter(&mut self, query: &str) {
        let query = query.trim().to_lowercase();
        for section in &mut self.sections {
            let mut visible = 0;
            for view in &mut section.cards {
                view.visible = view.card.matches(&query);
                if view.visible {
                    visible += 1;
                }
            }
            section.visible_count = visible;
            section.hidden = visible == 0;
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }

    /// First visible card in display order.
    pub fn first_visible(&self) -> Option<&Card> {
        self.sections
            .iter()
            .filter(|s| s.is_visible())
            .find_map(|s| s.visible_cards().next())
    }

    /// Apply a favicon outcome to every card pointing at `url`.
    pub fn resolve_icon(&mut self, url: &str, loaded: bool) -> bool {
        let mut changed = false;
        for view in self.sections.iter_mut().flat_map(|s| s.cards.iter_mut()) {
            if view.card.url == url {
                changed |= view.card.resolve_icon(loaded);
            }
        }
        changed
    }
}
