//! In-memory browsing host.
//!
//! Serves recorded HTML snapshots by URL. Every page owns a list of
//! snapshots; each scroll advances to the next one (staying on the last),
//! which is how lazily loaded grids are replayed. Unknown URLs answer 404.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Deserialize;

use super::{Bridge, Browser, Page, Response};
use crate::error::{Error, Result};
use crate::template::Template;

#[derive(Debug, Clone)]
struct Recording {
    status: u16,
    snapshots: Vec<String>,
}

#[derive(Debug, Default)]
struct State {
    recordings: BTreeMap<String, Recording>,
    opened: usize,
    closed: usize,
    visits: Vec<String>,
    scrolls: usize,
    bridges: BTreeMap<String, Bridge>,
}

impl State {
    fn lookup(&self, url: &str) -> Option<&Recording> {
        let trimmed = url.trim_end_matches('/');
        self.recordings
            .get(url)
            .or_else(|| self.recordings.get(trimmed))
            .or_else(|| self.recordings.get(&format!("{trimmed}/")))
    }
}

/// Browser that replays recorded pages.
#[derive(Debug, Clone, Default)]
pub struct FixtureBrowser {
    state: Rc<RefCell<State>>,
}

impl FixtureBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `snapshots` at `url` with `status`.
    #[must_use]
    pub fn with_page(self, url: &str, status: u16, snapshots: Vec<String>) -> Self {
        self.state
            .borrow_mut()
            .recordings
            .insert(url.to_string(), Recording { status, snapshots });
        self
    }

    /// Serve a single snapshot at `url` with status 200.
    #[must_use]
    pub fn with_html(self, url: &str, html: impl Into<String>) -> Self {
        self.with_page(url, 200, vec![html.into()])
    }

    /// Pages opened so far.
    #[must_use]
    pub fn opened_pages(&self) -> usize {
        self.state.borrow().opened
    }

    /// Pages closed so far.
    #[must_use]
    pub fn closed_pages(&self) -> usize {
        self.state.borrow().closed
    }

    /// URLs navigated to, in order.
    #[must_use]
    pub fn visits(&self) -> Vec<String> {
        self.state.borrow().visits.clone()
    }

    /// Scroll requests across all pages.
    #[must_use]
    pub fn scrolls(&self) -> usize {
        self.state.borrow().scrolls
    }

    /// Invoke a bridge function registered by any page.
    #[must_use]
    pub fn call_bridge(&self, name: &str, arg: &str) -> Option<String> {
        let bridge = self.state.borrow().bridges.get(name).copied();
        bridge.map(|f| f(arg))
    }

    /// Load a template and recorded pages from a manifest file.
    ///
    /// Snapshot paths are relative to the manifest's directory.
    pub fn from_manifest(path: &Path) -> Result<(Template, Self)> {
        let text = read(path)?;
        let manifest: Manifest =
            serde_json::from_str(&text).map_err(|e| Error::BrowserError(format!("{}: {e}", path.display())))?;
        manifest.template.validate()?;

        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let mut browser = Self::new();
        for page in manifest.pages {
            let snapshots = page
                .snapshots
                .iter()
                .map(|file| read(&dir.join(file)))
                .collect::<Result<Vec<_>>>()?;
            browser = browser.with_page(&page.url, page.status, snapshots);
        }
        Ok((manifest.template, browser))
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    template: Template,
    pages: Vec<ManifestPage>,
}

#[derive(Debug, Deserialize)]
struct ManifestPage {
    url: String,
    #[serde(default = "ok_status")]
    status: u16,
    snapshots: Vec<PathBuf>,
}

fn ok_status() -> u16 {
    200
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::BrowserError(format!("{}: {e}", path.display())))
}

impl Browser for FixtureBrowser {
    fn new_page(&self) -> Result<Box<dyn Page>> {
        self.state.borrow_mut().opened += 1;
        Ok(Box::new(FixturePage {
            state: Rc::clone(&self.state),
            url: "about:blank".to_string(),
            snapshots: Vec::new(),
            index: 0,
        }))
    }
}

struct FixturePage {
    state: Rc<RefCell<State>>,
    url: String,
    snapshots: Vec<String>,
    index: usize,
}

impl Page for FixturePage {
    fn goto(&mut self, url: &str) -> Result<Response> {
        let mut state = self.state.borrow_mut();
        state.visits.push(url.to_string());
        self.url = url.to_string();
        self.index = 0;

        match state.lookup(url).cloned() {
            Some(recording) => {
                self.snapshots = recording.snapshots;
                Ok(Response { status: recording.status })
            }
            None => {
                self.snapshots = Vec::new();
                Ok(Response { status: 404 })
            }
        }
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn content(&self) -> Result<String> {
        Ok(self.snapshots.get(self.index).cloned().unwrap_or_default())
    }

    fn expose_function(&mut self, name: &str, bridge: Bridge) -> Result<()> {
        self.state.borrow_mut().bridges.insert(name.to_string(), bridge);
        Ok(())
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.state.borrow_mut().scrolls += 1;
        if self.index + 1 < self.snapshots.len() {
            self.index += 1;
        }
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.state.borrow_mut().closed += 1;
        Ok(())
    }
}
