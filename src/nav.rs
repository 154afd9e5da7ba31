//! Navigation highlighting and sticky-header visibility.
//!
//! [`SectionTracker`] consumes batches of section visibility observations
//! (the shape an intersection observer reports) and derives the active
//! navigation target. [`ScrollHide`] decides whether the header is hidden
//! from successive scroll offsets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Offsets at or above the top of the page up to this value always show the header.
pub const HIDE_THRESHOLD: f64 = 80.0;

/// Minimum scroll movement before the header changes direction.
pub const HYSTERESIS: f64 = 6.0;

/// One visibility report for a page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionObservation {
    pub id: String,
    /// Visible fraction of the section, `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
    /// Distance of the section's top boundary from the viewport's top edge.
    pub top: f64,
}

/// What the navigation bar should highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveTarget {
    /// An in-page section, by id.
    Section(String),
    /// No observable sections: the current route path.
    Route(String),
}

impl ActiveTarget {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Section(id) => id,
            Self::Route(path) => path,
        }
    }
}

#[derive(Debug, Default)]
pub struct SectionTracker {
    /// Registered section ids, in page order.
    sections: Vec<String>,
    latest: HashMap<String, SectionObservation>,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            latest: HashMap::new(),
            active: None,
        }
    }

    /// Apply an observation batch and return the active section, if any.
    ///
    /// Batches may only contain the sections whose visibility changed; the
    /// last report of every other section is kept. Reports for ids that were
    /// never registered are ignored.
    pub fn observe(&mut self, batch: &[SectionObservation]) -> Option<&str> {
        for observation in batch {
            if self.sections.contains(&observation.id) {
                self.latest
                    .insert(observation.id.clone(), observation.clone());
            }
        }

        if let Some(id) = self.most_visible().or_else(|| self.nearest()) {
            self.active = Some(id);
        }
        self.active.as_deref()
    }

    /// Active target for the given route.
    pub fn active(&self, route: &str) -> ActiveTarget {
        match (&self.active, self.sections.is_empty()) {
            (Some(id), false) => ActiveTarget::Section(id.clone()),
            _ => ActiveTarget::Route(route.to_string()),
        }
    }

    fn ordered(&self) -> impl Iterator<Item = &SectionObservation> {
        self.sections.iter().filter_map(|id| self.latest.get(id))
    }

    /// Intersecting section with the highest ratio. Ties go to the earlier section.
    fn most_visible(&self) -> Option<String> {
        let mut best: Option<&SectionObservation> = None;
        for observation in self.ordered().filter(|o| o.is_intersecting) {
            if best.map_or(true, |b| observation.ratio > b.ratio) {
                best = Some(observation);
            }
        }
        best.map(|o| o.id.clone())
    }

    /// Section whose top boundary is closest to the viewport edge.
    fn nearest(&self) -> Option<String> {
        let mut best: Option<&SectionObservation> = None;
        for observation in self.ordered() {
            if best.map_or(true, |b| observation.top.abs() < b.top.abs()) {
                best = Some(observation);
            }
        }
        best.map(|o| o.id.clone())
    }
}

/// Header hide/show state driven by scroll offsets.
#[derive(Debug, Default)]
pub struct ScrollHide {
    /// Offset at the last show/hide decision.
    committed: f64,
    /// Offset of the previous `update` call.
    last_observed: f64,
    hidden: bool,
    menu_open: bool,
}

impl ScrollHide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// While the mobile menu is open the header stays visible.
    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
        if open {
            self.hidden = false;
        }
    }

    /// Feed the current scroll offset; returns whether the header is hidden.
    pub fn update(&mut self, offset: f64) -> bool {
        let previous = std::mem::replace(&mut self.last_observed, offset);

        if self.menu_open || offset <= HIDE_THRESHOLD {
            self.hidden = false;
            self.committed = offset;
            return self.hidden;
        }

        // A scroll up larger than the hysteresis since the previous sample
        // always shows the header. Otherwise movement accumulates against the
        // last committed offset, so slow scrolling still flips eventually.
        let delta = offset - self.committed;
        if previous - offset > HYSTERESIS {
            self.hidden = false;
            self.committed = offset;
        } else if delta.abs() >= HYSTERESIS {
            self.hidden = delta > 0.0;
            self.committed = offset;
        }
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(id: &str, ratio: f64, top: f64) -> SectionObservation {
        SectionObservation {
            id: id.to_string(),
            ratio,
            is_intersecting: ratio > 0.0,
            top,
        }
    }

    #[test]
    fn picks_highest_ratio() {
        let mut tracker = SectionTracker::new(["about", "projects", "contact"]);
        let active = tracker.observe(&[seen("about", 0.2, -300.0), seen("projects", 0.7, 120.0)]);
        assert_eq!(active, Some("projects"));
    }

    #[test]
    fn keeps_reports_from_earlier_batches() {
        let mut tracker = SectionTracker::new(["about", "projects"]);
        tracker.observe(&[seen("about", 0.9, 0.0), seen("projects", 0.1, 500.0)]);
        let active = tracker.observe(&[seen("projects", 0.4, 300.0)]);
        assert_eq!(active, Some("about"));
    }

    #[test]
    fn falls_back_to_nearest_boundary() {
        let mut tracker = SectionTracker::new(["about", "projects"]);
        let active = tracker.observe(&[seen("about", 0.0, -900.0), seen("projects", 0.0, 40.0)]);
        assert_eq!(active, Some("projects"));
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let mut tracker = SectionTracker::new(["about"]);
        assert_eq!(tracker.observe(&[seen("footer", 1.0, 0.0)]), None);
    }

    #[test]
    fn route_used_without_sections() {
        let mut tracker = SectionTracker::new(Vec::<String>::new());
        tracker.observe(&[seen("about", 1.0, 0.0)]);
        assert_eq!(tracker.active("/blog"), ActiveTarget::Route("/blog".to_string()));
    }

    #[test]
    fn header_hides_when_scrolling_down() {
        let mut hide = ScrollHide::new();
        for offset in [0.0, 50.0, 100.0, 150.0, 200.0] {
            hide.update(offset);
        }
        assert!(hide.is_hidden());
    }

    #[test]
    fn header_shows_after_scrolling_up_past_hysteresis() {
        let mut hide = ScrollHide::new();
        hide.update(300.0);
        assert!(hide.is_hidden());
        assert!(!hide.update(300.0 - HYSTERESIS - 1.0));
    }

    #[test]
    fn jitter_below_hysteresis_does_not_flip() {
        let mut hide = ScrollHide::new();
        hide.update(300.0);
        assert!(hide.update(297.0));
        assert!(hide.update(299.5));
    }

    #[test]
    fn scroll_up_from_previous_sample_shows_header() {
        let mut hide = ScrollHide::new();
        assert!(hide.update(300.0));
        // Below the hysteresis from 300, so nothing is committed.
        assert!(hide.update(304.0));
        // 7px up from the previous sample even though only 3px from 300.
        assert!(!hide.update(297.0));
    }

    #[test]
    fn slow_scroll_down_still_hides() {
        let mut hide = ScrollHide::new();
        let mut offset = HIDE_THRESHOLD;
        hide.update(offset);
        while offset < HIDE_THRESHOLD + 20.0 {
            offset += 1.0;
            hide.update(offset);
        }
        assert!(hide.is_hidden());
    }

    #[test]
    fn never_hidden_near_top() {
        let mut hide = ScrollHide::new();
        hide.update(400.0);
        assert!(!hide.update(HIDE_THRESHOLD));
    }

    #[test]
    fn open_menu_keeps_header_visible() {
        let mut hide = ScrollHide::new();
        hide.set_menu_open(true);
        assert!(!hide.update(500.0));
        assert!(!hide.update(900.0));
    }
}
