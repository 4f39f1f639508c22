use anyhow::{bail, Context, Result};
use eframe::egui;
use reqwest::blocking::Client;
use std::collections::HashSet;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

/// Source of raw favicon bytes.
pub trait FaviconSource: Send + 'static {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFaviconSource {
    client: Client,
}

impl HttpFaviconSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("link-deck favicon loader")
            .build()?;
        Ok(Self { client })
    }
}

impl FaviconSource for HttpFaviconSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            bail!("favicon request returned {status}");
        }
        Ok(resp.bytes()?.to_vec())
    }
}

struct FaviconRequest {
    card_url: String,
    favicon_url: String,
}

pub struct FaviconResult {
    pub card_url: String,
    pub image: Result<egui::ColorImage>,
}

/// Fetches favicons on a background thread. Each card URL is requested at
/// most once; results are collected with [`FaviconLoader::poll`].
pub struct FaviconLoader {
    tx: Sender<FaviconRequest>,
    rx: Receiver<FaviconResult>,
    requested: HashSet<String>,
    /// Requests the worker never received; reported as failures by `poll`.
    undelivered: Vec<String>,
}

impl FaviconLoader {
    pub fn spawn<S: FaviconSource>(source: S, repaint: Option<egui::Context>) -> Self {
        let (req_tx, req_rx) = channel::<FaviconRequest>();
        let (res_tx, res_rx) = channel();
        std::thread::spawn(move || {
            for req in req_rx {
                let image = source
                    .fetch(&req.favicon_url)
                    .and_then(|bytes| decode_icon(&bytes));
                if let Err(e) = &image {
                    tracing::debug!("favicon for {} unavailable: {e}", req.card_url);
                }
                if res_tx
                    .send(FaviconResult {
                        card_url: req.card_url,
                        image,
                    })
                    .is_err()
                {
                    break;
                }
                if let Some(ctx) = &repaint {
                    ctx.request_repaint();
                }
            }
        });
        Self {
            tx: req_tx,
            rx: res_rx,
            requested: HashSet::new(),
            undelivered: Vec::new(),
        }
    }

    /// Queue a fetch for `card_url` unless one was already queued.
    pub fn request(&mut self, card_url: &str, favicon_url: &str) -> bool {
        if !self.requested.insert(card_url.to_string()) {
            return false;
        }
        let sent = self.tx.send(FaviconRequest {
            card_url: card_url.to_string(),
            favicon_url: favicon_url.to_string(),
        });
        if sent.is_err() {
            tracing::warn!("favicon worker stopped; {card_url} will use the fallback icon");
            self.undelivered.push(card_url.to_string());
        }
        true
    }

    /// Results that arrived since the last call.
    pub fn poll(&mut self) -> Vec<FaviconResult> {
        let mut results: Vec<FaviconResult> = self
            .undelivered
            .drain(..)
            .map(|card_url| FaviconResult {
                card_url,
                image: Err(anyhow::anyhow!("favicon worker stopped")),
            })
            .collect();
        results.extend(self.rx.try_iter());
        results
    }
}

pub fn decode_icon(bytes: &[u8]) -> Result<egui::ColorImage> {
    let img = image::load_from_memory(bytes).context("decode favicon")?;
    let size = [img.width() as usize, img.height() as usize];
    let rgba = img.to_rgba8();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    fn png_bytes() -> Vec<u8> {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([255, 0, 0, 255]),
        ));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageOutputFormat::Png).unwrap();
        out.into_inner()
    }

    struct StubSource {
        calls: Arc<Mutex<Vec<String>>>,
        body: Option<Vec<u8>>,
    }

    impl FaviconSource for StubSource {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(url.to_string());
            match &self.body {
                Some(b) => Ok(b.clone()),
                None => bail!("offline"),
            }
        }
    }

    fn wait_for(loader: &mut FaviconLoader, count: usize) -> Vec<FaviconResult> {
        let start = Instant::now();
        let mut out = Vec::new();
        while out.len() < count && start.elapsed() < Duration::from_secs(5) {
            out.extend(loader.poll());
            std::thread::sleep(Duration::from_millis(10));
        }
        out
    }

    #[test]
    fn decodes_png() {
        let img = decode_icon(&png_bytes()).unwrap();
        assert_eq!(img.size, [2, 2]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode_icon(b"<html>not an icon</html>").is_err());
    }

    #[test]
    fn requests_are_deduplicated() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut loader = FaviconLoader::spawn(
            StubSource {
                calls: calls.clone(),
                body: Some(png_bytes()),
            },
            None,
        );
        assert!(loader.request("https://a.example", "icon-a"));
        assert!(!loader.request("https://a.example", "icon-a"));
        let results = wait_for(&mut loader, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].card_url, "https://a.example");
        assert!(results[0].image.is_ok());
        assert_eq!(calls.lock().unwrap().as_slice(), ["icon-a".to_string()]);
    }

    #[test]
    fn fetch_failure_is_reported() {
        let mut loader = FaviconLoader::spawn(
            StubSource {
                calls: Arc::new(Mutex::new(Vec::new())),
                body: None,
            },
            None,
        );
        loader.request("https://b.example", "icon-b");
        let results = wait_for(&mut loader, 1);
        assert_eq!(results.len(), 1);
        assert!(results[0].image.is_err());
    }

    #[test]
    fn stopped_worker_reports_failure() {
        let (tx, worker_rx) = channel::<FaviconRequest>();
        drop(worker_rx);
        let (_res_tx, rx) = channel();
        let mut loader = FaviconLoader {
            tx,
            rx,
            requested: HashSet::new(),
            undelivered: Vec::new(),
        };
        assert!(loader.request("https://c.example", "icon-c"));
        let results = loader.poll();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].card_url, "https://c.example");
        assert!(results[0].image.is_err());
        assert!(loader.poll().is_empty());
    }
}
