use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    pub name: String,
    pub url: String,
}

impl BookmarkEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Named collection of links rendered as one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkGroup {
    pub group: String,
    #[serde(default)]
    pub items: Vec<BookmarkEntry>,
}

/// Links shown when no bookmarks file is configured.
pub fn default_bookmarks() -> Vec<BookmarkGroup> {
    vec![
        BookmarkGroup {
            group: "Primary".into(),
            items: vec![
                BookmarkEntry::new("Google", "https://www.google.com"),
                BookmarkEntry::new("Facebook", "https://www.facebook.com"),
                BookmarkEntry::new("YouTube", "https://www.youtube.com"),
                BookmarkEntry::new("Instagram", "https://www.instagram.com"),
                BookmarkEntry::new("ChatGPT", "https://www.chatgpt.com"),
            ],
        },
        BookmarkGroup {
            group: "Secondary".into(),
            items: vec![
                BookmarkEntry::new("Perplexity", "https://www.perplexity.ai"),
                BookmarkEntry::new("GitHub", "https://www.github.com"),
            ],
        },
    ]
}

/// Read bookmark groups from `path`. An empty file yields no groups; a
/// missing or unreadable one is an error.
pub fn load_bookmarks(path: &str) -> anyhow::Result<Vec<BookmarkGroup>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read bookmarks file {path}"))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let list: Vec<BookmarkGroup> = serde_json::from_str(&content)?;
    Ok(list)
}

/// Groups from the configured file, or the built-in list when no file is
/// configured or it cannot be loaded.
pub fn load_or_default(path: Option<&str>) -> Vec<BookmarkGroup> {
    let Some(path) = path else {
        return default_bookmarks();
    };
    match load_bookmarks(path) {
        Ok(groups) => groups,
        Err(e) => {
            tracing::warn!("failed to load bookmarks: {e:#}; using built-in list");
            default_bookmarks()
        }
    }
}

pub fn save_bookmarks(path: &str, groups: &[BookmarkGroup]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(groups)?;
    std::fs::write(path, json)?;
    Ok(())
}
