//! Asset readiness tracking.
//!
//! URLs are opaque; the hosting environment loads them and reports back.
//! Pending and failed assets both degrade to "render less" (a placeholder or
//! a blank area), never to an error.

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum AssetState {
    Pending,
    Ready,
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct AssetTracker {
    states: BTreeMap<String, AssetState>,
}

impl AssetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a URL. Idempotent; re-tracking never resets readiness.
    pub fn track(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        self.states
            .entry(url.to_string())
            .or_insert(AssetState::Pending);
    }

    pub fn mark_ready(&mut self, url: &str) {
        if let Some(state) = self.states.get_mut(url) {
            *state = AssetState::Ready;
        }
    }

    pub fn mark_failed(&mut self, url: &str) {
        if let Some(state) = self.states.get_mut(url) {
            *state = AssetState::Failed;
        }
    }

    /// Untracked URLs read as pending.
    pub fn state(&self, url: &str) -> AssetState {
        self.states
            .get(url)
            .copied()
            .unwrap_or(AssetState::Pending)
    }

    /// True when every URL in `urls` is ready. Gates first paint of views
    /// that need a complete texture set.
    pub fn all_ready<'a>(&self, urls: impl IntoIterator<Item = &'a str>) -> bool {
        urls.into_iter()
            .all(|u| self.state(u) == AssetState::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untracked_reads_as_pending() {
        let t = AssetTracker::new();
        assert_eq!(t.state("nope.png"), AssetState::Pending);
    }

    #[test]
    fn readiness_gates_a_full_set() {
        let urls = ["a.png", "b.png", "c.png"];
        let mut t = AssetTracker::new();
        for u in urls {
            t.track(u);
        }
        assert!(!t.all_ready(urls));

        t.mark_ready("a.png");
        t.mark_ready("b.png");
        assert!(!t.all_ready(urls));

        t.mark_ready("c.png");
        assert!(t.all_ready(urls));
    }

    #[test]
    fn failure_is_terminal_but_not_fatal() {
        let mut t = AssetTracker::new();
        t.track("x.png");
        t.mark_failed("x.png");
        assert_eq!(t.state("x.png"), AssetState::Failed);
        assert!(!t.all_ready(["x.png"]));
    }

    #[test]
    fn retracking_does_not_reset_state() {
        let mut t = AssetTracker::new();
        t.track("x.png");
        t.mark_ready("x.png");
        t.track("x.png");
        assert_eq!(t.state("x.png"), AssetState::Ready);
    }

    #[test]
    fn empty_urls_are_ignored() {
        let mut t = AssetTracker::new();
        t.track("");
        assert!(t.all_ready(std::iter::empty::<&str>()));
    }
}
