use eframe::egui::Color32;
use std::fmt;

/// Display color assigned to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Hex { r: u8, g: u8, b: u8 },
    Hsl { hue: u16, saturation: u8, lightness: u8 },
}

impl Accent {
    const fn hex(rgb: u32) -> Self {
        Accent::Hex {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    pub fn to_color32(self) -> Color32 {
        match self {
            Accent::Hex { r, g, b } => Color32::from_rgb(r, g, b),
            Accent::Hsl {
                hue,
                saturation,
                lightness,
            } => {
                let (r, g, b) = hsl_to_rgb(
                    hue as f32,
                    saturation as f32 / 100.0,
                    lightness as f32 / 100.0,
                );
                Color32::from_rgb(r, g, b)
            }
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accent::Hex { r, g, b } => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            Accent::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue} {saturation}% {lightness}%)"),
        }
    }
}

/// Domain keywords mapped to brand colors. Order matters: the first keyword
/// contained in a domain wins, so `github` must stay ahead of `git`.
pub const BRAND_ACCENTS: &[(&str, Accent)] = &[
    ("google", Accent::hex(0x4285F4)),
    ("facebook", Accent::hex(0x1877F2)),
    ("youtube", Accent::hex(0xFF0033)),
    ("instagram", Accent::hex(0xE4405F)),
    ("chatgpt", Accent::hex(0x10A37F)),
    ("openai", Accent::hex(0x10A37F)),
    ("perplexity", Accent::hex(0x6B4EFF)),
    ("github", Accent::hex(0x171515)),
    ("git", Accent::hex(0x171515)),
];

const FALLBACK_SATURATION: u8 = 70;
const FALLBACK_LIGHTNESS: u8 = 55;

/// Bare hostname of `url` without a leading `www.`.
///
/// Strings that do not parse as URLs are returned unchanged so they can still
/// be displayed and searched.
pub fn domain_of(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            host.strip_prefix("www.").unwrap_or(host).to_string()
        }
        Err(_) => url.to_string(),
    }
}

pub fn resolve_accent(url: &str) -> Accent {
    accent_for_domain(&domain_of(url))
}

pub fn accent_for_domain(domain: &str) -> Accent {
    let domain = domain.to_lowercase();
    BRAND_ACCENTS
        .iter()
        .find(|(keyword, _)| domain.contains(keyword))
        .map(|(_, accent)| *accent)
        .unwrap_or_else(|| Accent::Hsl {
            hue: fallback_hue(&domain),
            saturation: FALLBACK_SATURATION,
            lightness: FALLBACK_LIGHTNESS,
        })
}

/// Rolling `hash * 31 + code` over UTF-16 units. The shift wraps at 32 bits
/// while the running value does not, matching the colors produced by the
/// browser version of the dashboard.
fn fallback_hue(domain: &str) -> u16 {
    let mut hash: i64 = 0;
    for unit in domain.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = unit as i64 + (shifted - hash);
    }
    (hash.unsigned_abs() % 360) as u16
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_byte = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_strips_scheme_and_www() {
        assert_eq!(domain_of("https://www.google.com"), "google.com");
        assert_eq!(domain_of("https://news.ycombinator.com/item?id=1"), "news.ycombinator.com");
        assert_eq!(domain_of("http://www.www.example.org"), "www.example.org");
    }

    #[test]
    fn malformed_url_is_used_as_domain() {
        assert_eq!(domain_of("not a url"), "not a url");
        assert_eq!(domain_of("www.example.com"), "www.example.com");
    }

    #[test]
    fn brand_keyword_wins() {
        assert_eq!(resolve_accent("https://www.youtube.com"), Accent::hex(0xFF0033));
        assert_eq!(resolve_accent("https://WWW.GOOGLE.COM"), Accent::hex(0x4285F4));
    }

    #[test]
    fn earlier_keywords_take_precedence() {
        // contains both "youtube" and "google"; "google" comes first in the table
        assert_eq!(
            accent_for_domain("youtube.googleapis.com"),
            Accent::hex(0x4285F4)
        );
        assert_eq!(accent_for_domain("gitlab.com"), Accent::hex(0x171515));
    }

    #[test]
    fn fallback_hue_matches_rolling_hash() {
        // "a" -> 97, "ab" -> 98 + 97 * 31 = 3105 -> 3105 % 360 = 225
        assert_eq!(fallback_hue("a"), 97);
        assert_eq!(fallback_hue("ab"), 225);
        assert_eq!(fallback_hue(""), 0);
    }

    #[test]
    fn fallback_is_deterministic_and_in_range() {
        for url in [
            "https://example.com",
            "https://www.example.com/path",
            "https://docs.rs/egui",
            "https://a-very-long-subdomain.with.many.parts.example.co.uk",
        ] {
            let first = resolve_accent(url);
            assert_eq!(first, resolve_accent(url));
            match first {
                Accent::Hsl {
                    hue,
                    saturation,
                    lightness,
                } => {
                    assert!(hue < 360);
                    assert_eq!(saturation, 70);
                    assert_eq!(lightness, 55);
                }
                other => panic!("unexpected brand accent {other} for {url}"),
            }
        }
        assert_eq!(
            resolve_accent("https://example.com"),
            resolve_accent("http://www.example.com/other")
        );
    }

    #[test]
    fn display_uses_css_notation() {
        assert_eq!(Accent::hex(0x4285F4).to_string(), "#4285F4");
        let hsl = Accent::Hsl {
            hue: 210,
            saturation: 70,
            lightness: 55,
        };
        assert_eq!(hsl.to_string(), "hsl(210 70% 55%)");
    }

    #[test]
    fn hsl_converts_to_rgb() {
        let red = Accent::Hsl {
            hue: 0,
            saturation: 100,
            lightness: 50,
        };
        assert_eq!(red.to_color32(), Color32::from_rgb(255, 0, 0));
        let blue = Accent::Hsl {
            hue: 240,
            saturation: 100,
            lightness: 50,
        };
        assert_eq!(blue.to_color32(), Color32::from_rgb(0, 0, 255));
    }
}
