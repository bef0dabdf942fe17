//! Active-section tracking.
//!
//! Models a viewport-intersection watcher over the page headings. The watcher
//! is connected with the heading ids it observes and receives intersection
//! entries, either directly (from a host that already computes them) or via
//! [`SectionTracker::on_scroll`], which derives the entries from heading
//! positions the way an intersection observer reports them: only headings whose
//! intersection state changed since the previous update produce an entry.
//!
//! Whichever heading most recently reported as intersecting becomes active.
//! Headings leaving the zone never clear the active id.

use std::collections::HashSet;

/// Fraction of the viewport excluded from the top of the intersection zone.
const TOP_MARGIN: f64 = 0.20;

/// Fraction of the viewport excluded from the bottom of the intersection zone.
const BOTTOM_MARGIN: f64 = 0.35;

/// The part of the viewport in which a heading counts as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionZone {
    /// Fraction of the viewport height cut from the top.
    pub top_margin: f64,
    /// Fraction of the viewport height cut from the bottom.
    pub bottom_margin: f64,
}

impl Default for IntersectionZone {
    fn default() -> Self {
        Self {
            top_margin: TOP_MARGIN,
            bottom_margin: BOTTOM_MARGIN,
        }
    }
}

impl IntersectionZone {
    /// Zone bounds `(top, bottom)` in viewport coordinates.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        (
            viewport_height * self.top_margin,
            viewport_height * (1.0 - self.bottom_margin),
        )
    }

    /// Whether a box spanning `top..bottom` (viewport coordinates) overlaps the zone.
    pub fn intersects(&self, viewport_height: f64, top: f64, bottom: f64) -> bool {
        let (zone_top, zone_bottom) = self.bounds(viewport_height);
        top < zone_bottom && bottom > zone_top
    }
}

/// Position of a heading relative to the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingRect {
    /// Heading anchor id.
    pub id: String,
    /// Top edge, relative to the viewport top.
    pub top: f64,
    /// Bottom edge, relative to the viewport top.
    pub bottom: f64,
}

/// A change in a heading's intersection state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionEntry {
    /// Heading anchor id.
    pub id: String,
    /// Whether the heading is now inside the zone.
    pub is_intersecting: bool,
}

/// Tracks which heading is the active section.
///
/// The tracker only reacts while connected. [`observe`](Self::observe)
/// (re)connects it to a set of heading ids and [`disconnect`](Self::disconnect)
/// stops observation; dropping the tracker disconnects it.
#[derive(Debug, Default)]
pub struct SectionTracker {
    zone: IntersectionZone,
    observed: Vec<String>,
    connected: bool,
    intersecting: HashSet<String>,
    active: Option<String>,
}

impl SectionTracker {
    /// Create a disconnected tracker with the default zone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a disconnected tracker with a custom zone.
    pub fn with_zone(zone: IntersectionZone) -> Self {
        Self {
            zone,
            observed: Vec::new(),
            connected: false,
            intersecting: HashSet::new(),
            active: None,
        }
    }

    /// The intersection zone in use.
    pub fn zone(&self) -> IntersectionZone {
        self.zone
    }

    /// Start observing the given heading ids, replacing any previous set.
    ///
    /// Intersection history is reset so the next scroll update reports every
    /// heading currently in the zone. The active id is kept.
    pub fn observe<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.observed = ids.into_iter().map(Into::into).collect();
        self.intersecting.clear();
        self.connected = true;
        tracing::trace!(count = self.observed.len(), "Observing headings");
    }

    /// Stop observing all headings.
    pub fn disconnect(&mut self) {
        if self.connected {
            tracing::trace!(count = self.observed.len(), "Disconnecting heading observer");
        }
        self.observed.clear();
        self.intersecting.clear();
        self.connected = false;
    }

    /// Whether the tracker is currently observing.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Observed heading ids in registration order.
    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    /// The currently active heading id.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Apply a batch of intersection entries.
    ///
    /// Entries for headings that are not observed are ignored. When several
    /// entries in the batch are intersecting, the last one wins.
    pub fn on_entries(&mut self, entries: &[IntersectionEntry]) {
        if !self.connected {
            return;
        }
        for entry in entries {
            if !self.is_observed(&entry.id) {
                continue;
            }
            if entry.is_intersecting {
                self.intersecting.insert(entry.id.clone());
                self.active = Some(entry.id.clone());
            } else {
                self.intersecting.remove(&entry.id);
            }
        }
    }

    /// Recompute intersections from heading positions after a scroll.
    ///
    /// Produces entries only for headings whose intersection state changed,
    /// in the order given, and applies them. Returns the produced entries.
    pub fn on_scroll(
        &mut self,
        viewport_height: f64,
        rects: &[HeadingRect],
    ) -> Vec<IntersectionEntry> {
        if !self.connected {
            return Vec::new();
        }
        let entries: Vec<IntersectionEntry> = rects
            .iter()
            .filter(|rect| self.is_observed(&rect.id))
            .filter_map(|rect| {
                let now = self.zone.intersects(viewport_height, rect.top, rect.bottom);
                let before = self.intersecting.contains(&rect.id);
                (now != before).then(|| IntersectionEntry {
                    id: rect.id.clone(),
                    is_intersecting: now,
                })
            })
            .collect();
        self.on_entries(&entries);
        entries
    }

    fn is_observed(&self, id: &str) -> bool {
        self.observed.iter().any(|observed| observed == id)
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: &str, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            id: id.to_owned(),
            is_intersecting,
        }
    }

    fn rect(id: &str, top: f64) -> HeadingRect {
        HeadingRect {
            id: id.to_owned(),
            top,
            bottom: top + 30.0,
        }
    }

    #[test]
    fn test_zone_bounds_exclude_top_and_bottom_margins() {
        let zone = IntersectionZone::default();
        assert_eq!(zone.bounds(1000.0), (200.0, 650.0));
    }

    #[test]
    fn test_zone_intersection() {
        let zone = IntersectionZone::default();
        assert!(zone.intersects(1000.0, 300.0, 330.0));
        assert!(zone.intersects(1000.0, 180.0, 210.0));
        assert!(!zone.intersects(1000.0, 100.0, 150.0));
        assert!(!zone.intersects(1000.0, 700.0, 730.0));
        assert!(!zone.intersects(1000.0, 650.0, 680.0));
    }

    #[test]
    fn test_entries_ignored_while_disconnected() {
        let mut tracker = SectionTracker::new();
        tracker.on_entries(&[entry("intro", true)]);
        assert_eq!(tracker.active_id(), None);
    }

    #[test]
    fn test_last_intersecting_entry_wins() {
        let mut tracker = SectionTracker::new();
        tracker.observe(["intro", "setup", "usage"]);
        tracker.on_entries(&[entry("intro", true), entry("setup", true), entry("usage", false)]);
        assert_eq!(tracker.active_id(), Some("setup"));
    }

    #[test]
    fn test_leaving_zone_keeps_active_id() {
        let mut tracker = SectionTracker::new();
        tracker.observe(["intro"]);
        tracker.on_entries(&[entry("intro", true)]);
        tracker.on_entries(&[entry("intro", false)]);
        assert_eq!(tracker.active_id(), Some("intro"));
    }

    #[test]
    fn test_unobserved_ids_are_ignored() {
        let mut tracker = SectionTracker::new();
        tracker.observe(["intro"]);
        tracker.on_entries(&[entry("elsewhere", true)]);
        assert_eq!(tracker.active_id(), None);
    }

    #[test]
    fn test_scroll_reports_only_changes() {
        let mut tracker = SectionTracker::new();
        tracker.observe(["intro", "setup"]);

        let first = tracker.on_scroll(1000.0, &[rect("intro", 250.0), rect("setup", 900.0)]);
        assert_eq!(first, vec![entry("intro", true)]);
        assert_eq!(tracker.active_id(), Some("intro"));

        // intro stays in the zone, setup enters: setup is the only change
        let second = tracker.on_scroll(1000.0, &[rect("intro", 220.0), rect("setup", 400.0)]);
        assert_eq!(second, vec![entry("setup", true)]);
        assert_eq!(tracker.active_id(), Some("setup"));

        // setup leaves again; intro is still intersecting but unchanged
        let third = tracker.on_scroll(1000.0, &[rect("intro", 220.0), rect("setup", 900.0)]);
        assert_eq!(third, vec![entry("setup", false)]);
        assert_eq!(tracker.active_id(), Some("setup"));
    }

    #[test]
    fn test_disconnect_stops_updates() {
        let mut tracker = SectionTracker::new();
        tracker.observe(["intro"]);
        tracker.disconnect();
        assert!(!tracker.is_connected());
        assert!(tracker.on_scroll(1000.0, &[rect("intro", 300.0)]).is_empty());
        assert_eq!(tracker.active_id(), None);
    }

    #[test]
    fn test_reobserve_reports_current_intersections_again() {
        let mut tracker = SectionTracker::new();
        tracker.observe(["intro"]);
        tracker.on_scroll(1000.0, &[rect("intro", 300.0)]);
        tracker.observe(["intro"]);
        let entries = tracker.on_scroll(1000.0, &[rect("intro", 300.0)]);
        assert_eq!(entries, vec![entry("intro", true)]);
    }
}
