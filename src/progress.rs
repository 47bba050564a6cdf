//! Progress reporting.
//!
//! A `Reporter` is handed to every stage of a crawl instead of sharing a
//! global spinner. Events go to `tracing`; a silent reporter drops
//! everything except failures.

use crate::selector::SelectorSet;

/// Progress sink passed explicitly into each component.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    silent: bool,
}

impl Reporter {
    #[must_use]
    pub const fn new(silent: bool) -> Self {
        Self { silent }
    }

    /// A reporter that only surfaces failures.
    #[must_use]
    pub const fn silent() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub const fn is_silent(&self) -> bool {
        self.silent
    }

    /// A stage is starting.
    pub fn start(&self, stage: &str) {
        if !self.silent {
            tracing::info!(stage, "started");
        }
    }

    /// A stage finished.
    pub fn succeed(&self, stage: &str) {
        if !self.silent {
            tracing::info!(stage, "done");
        }
    }

    pub fn info(&self, message: &str) {
        if !self.silent {
            tracing::info!("{message}");
        }
    }

    /// A stage failed. Reported even when silent.
    pub fn fail(&self, stage: &str, error: &crate::Error) {
        tracing::error!(stage, %error, "failed");
    }

    /// Dump a discovered selector set at debug level.
    pub fn selectors(&self, scope: &str, selectors: &SelectorSet) {
        if self.silent {
            return;
        }
        for (field, selector) in selectors.iter() {
            tracing::debug!(scope, field = field.as_str(), selector, "discovered selector");
        }
    }
}
