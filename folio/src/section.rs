use std::{cell::RefCell, collections::HashSet, fmt, rc::Rc};

use anyhow::Result;
use tracing::debug;

use crate::listener::{Emitter, Subscription};

// pixels the viewport is considered "into" the next section before the highlight moves
pub const DEFAULT_ACTIVATION_LEAD: f64 = 100.0;

// a named, measurable stretch of the page
//
// the height is read through the provider on every computation rather than cached, since
// sections grow once images and fonts load.  a provider returning None (element not
// mounted) or garbage contributes zero
pub struct NamedRegion {
    key: String,
    height: Box<dyn Fn() -> Option<f64>>,
}

impl NamedRegion {
    pub fn new<F>(key: impl Into<String>, height: F) -> Self
    where
        F: Fn() -> Option<f64> + 'static,
    {
        NamedRegion {
            key: key.into(),
            height: Box::new(height),
        }
    }

    pub fn fixed(key: impl Into<String>, height: f64) -> Self {
        NamedRegion::new(key, move || Some(height))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn height(&self) -> f64 {
        match (self.height)() {
            Some(height) if height.is_finite() && height > 0.0 => height,
            _ => 0.0,
        }
    }
}

impl fmt::Debug for NamedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedRegion")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

// decides which region the viewport is over, for navigation highlighting
//
// a tracker always holds at least one region, so there is always an active key
#[derive(Debug)]
pub struct ActiveSectionTracker {
    regions: Vec<NamedRegion>,
    active: usize,
}

impl ActiveSectionTracker {
    pub fn new(regions: Vec<NamedRegion>) -> Result<Self> {
        validate_regions(&regions)?;

        Ok(ActiveSectionTracker { regions, active: 0 })
    }

    // replace the tracked regions; on error the previous configuration is kept
    pub fn configure(&mut self, regions: Vec<NamedRegion>) -> Result<()> {
        validate_regions(&regions)?;

        self.regions = regions;
        self.active = 0;

        debug!(keys = ?self.keys().collect::<Vec<_>>(), "configured section tracker");
        Ok(())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(NamedRegion::key)
    }

    pub fn active_key(&self) -> &str {
        self.regions[self.active].key()
    }

    pub fn compute_active_key(&self, scroll_offset: f64, activation_lead: f64) -> &str {
        self.regions[self.active_index(scroll_offset, activation_lead)].key()
    }

    // recompute and remember; returns the key only when the highlight moved
    pub fn on_scroll(&mut self, scroll_offset: f64, activation_lead: f64) -> Option<&str> {
        let index = self.active_index(scroll_offset, activation_lead);
        if index == self.active {
            return None;
        }

        self.active = index;
        Some(self.regions[index].key())
    }

    // the first region whose cumulative height (inclusive) reaches the lead-adjusted
    // offset, or the last region once we have scrolled past all of them
    fn active_index(&self, scroll_offset: f64, activation_lead: f64) -> usize {
        let position = scroll_offset + activation_lead;

        let mut accumulated = 0.0;
        for (index, region) in self.regions.iter().enumerate() {
            accumulated += region.height();
            if accumulated >= position {
                return index;
            }
        }

        self.regions.len() - 1
    }
}

fn validate_regions(regions: &[NamedRegion]) -> Result<()> {
    if regions.is_empty() {
        return Err(anyhow::Error::msg("section tracker needs at least one region"));
    }

    let mut seen = HashSet::new();
    for region in regions {
        if !seen.insert(region.key()) {
            return Err(anyhow::Error::msg(format!(
                "duplicate section key: {}",
                region.key()
            )));
        }
    }

    Ok(())
}

// a source of vertical scroll notifications, carrying the current offset
pub trait ScrollSource {
    fn watch(&self, on_scroll: Box<dyn FnMut(f64)>) -> Option<Subscription>;
}

// recompute the active section on every scroll notification until the returned
// subscription is released
pub fn track_scroll<S, F>(
    tracker: Rc<RefCell<ActiveSectionTracker>>,
    source: &S,
    activation_lead: f64,
    mut on_change: F,
) -> Subscription
where
    S: ScrollSource + ?Sized,
    F: FnMut(&str) + 'static,
{
    let watched = source.watch(Box::new(move |scroll_offset: f64| {
        let Ok(mut tracker) = tracker.try_borrow_mut() else {
            debug!("section tracker busy, skipping scroll notification");
            return;
        };

        if let Some(key) = tracker.on_scroll(scroll_offset, activation_lead) {
            on_change(key);
        }
    }));

    watched.unwrap_or_else(Subscription::inert)
}

// a scroll position driven by hand, for tests and non-browser hosts
#[derive(Clone, Default)]
pub struct ManualScroll {
    scrolls: Emitter<f64>,
}

impl ManualScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to(&self, offset: f64) {
        self.scrolls.emit(offset);
    }

    pub fn watcher_count(&self) -> usize {
        self.scrolls.listener_count()
    }
}

impl ScrollSource for ManualScroll {
    fn watch(&self, on_scroll: Box<dyn FnMut(f64)>) -> Option<Subscription> {
        Some(self.scrolls.subscribe(on_scroll))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn page() -> Vec<NamedRegion> {
        vec![
            NamedRegion::fixed("home", 100.0),
            NamedRegion::fixed("about", 200.0),
            NamedRegion::fixed("portfolio", 150.0),
        ]
    }

    #[test]
    fn boundary_table() {
        let tracker = ActiveSectionTracker::new(page()).unwrap();

        let cases = [
            (0.0, "home"),
            (150.0, "about"),
            (400.0, "portfolio"),
            (10000.0, "portfolio"),
        ];

        for (offset, expected) in cases {
            assert_eq!(
                tracker.compute_active_key(offset, DEFAULT_ACTIVATION_LEAD),
                expected,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn exact_boundaries_are_inclusive() {
        let tracker = ActiveSectionTracker::new(page()).unwrap();

        assert_eq!(tracker.compute_active_key(0.0, 100.0), "home");
        assert_eq!(tracker.compute_active_key(0.5, 100.0), "about");
        assert_eq!(tracker.compute_active_key(200.0, 100.0), "about");
        assert_eq!(tracker.compute_active_key(200.5, 100.0), "portfolio");
    }

    #[test]
    fn negative_offset_stays_on_first() {
        let tracker = ActiveSectionTracker::new(page()).unwrap();

        assert_eq!(tracker.compute_active_key(-400.0, DEFAULT_ACTIVATION_LEAD), "home");
    }

    #[test]
    fn unmeasured_regions_count_as_zero() {
        let tracker = ActiveSectionTracker::new(vec![
            NamedRegion::new("home", || None),
            NamedRegion::fixed("about", 300.0),
            NamedRegion::new("portfolio", || Some(f64::NAN)),
            NamedRegion::new("contact", || Some(-50.0)),
        ])
        .unwrap();

        assert_eq!(tracker.compute_active_key(0.0, 100.0), "about");
        assert_eq!(tracker.compute_active_key(250.0, 100.0), "contact");
    }

    #[test]
    fn nothing_measured_yet_means_last_region() {
        let tracker = ActiveSectionTracker::new(vec![
            NamedRegion::new("home", || None),
            NamedRegion::new("about", || None),
        ])
        .unwrap();

        assert_eq!(tracker.compute_active_key(0.0, 100.0), "about");
    }

    #[test]
    fn heights_are_read_live() {
        let height = Rc::new(Cell::new(50.0));
        let tracker = {
            let height = Rc::clone(&height);
            ActiveSectionTracker::new(vec![
                NamedRegion::new("home", move || Some(height.get())),
                NamedRegion::fixed("about", 500.0),
            ])
            .unwrap()
        };

        assert_eq!(tracker.compute_active_key(20.0, 100.0), "about");

        height.set(400.0);
        assert_eq!(tracker.compute_active_key(20.0, 100.0), "home");
    }

    #[test]
    fn on_scroll_reports_only_changes() {
        let mut tracker = ActiveSectionTracker::new(page()).unwrap();
        assert_eq!(tracker.active_key(), "home");

        assert_eq!(tracker.on_scroll(0.0, 100.0), None);
        assert_eq!(tracker.on_scroll(150.0, 100.0), Some("about"));
        assert_eq!(tracker.on_scroll(160.0, 100.0), None);
        assert_eq!(tracker.active_key(), "about");
        assert_eq!(tracker.on_scroll(0.0, 100.0), Some("home"));
    }

    #[test]
    fn rejects_empty_and_duplicate_regions() {
        assert!(ActiveSectionTracker::new(Vec::new()).is_err());

        let mut tracker = ActiveSectionTracker::new(page()).unwrap();
        let err = tracker
            .configure(vec![
                NamedRegion::fixed("home", 1.0),
                NamedRegion::fixed("home", 2.0),
            ])
            .unwrap_err();

        assert!(err.to_string().contains("home"));
        assert_eq!(
            tracker.keys().collect::<Vec<_>>(),
            vec!["home", "about", "portfolio"]
        );
    }

    #[test]
    fn reconfigure_discards_previous_state() {
        let mut tracker = ActiveSectionTracker::new(page()).unwrap();
        tracker.on_scroll(10000.0, 100.0);
        assert_eq!(tracker.active_key(), "portfolio");

        tracker
            .configure(vec![
                NamedRegion::fixed("intro", 300.0),
                NamedRegion::fixed("details", 300.0),
            ])
            .unwrap();

        assert_eq!(tracker.active_key(), "intro");
        assert_eq!(tracker.keys().collect::<Vec<_>>(), vec!["intro", "details"]);
        assert_eq!(tracker.compute_active_key(10000.0, 100.0), "details");
    }

    #[test]
    fn track_scroll_follows_every_notification() {
        let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(page()).unwrap()));
        let scroll = ManualScroll::new();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));

        let binding = {
            let seen = Rc::clone(&seen);
            track_scroll(Rc::clone(&tracker), &scroll, 100.0, move |key| {
                seen.borrow_mut().push(key.to_owned())
            })
        };

        scroll.scroll_to(150.0);
        scroll.scroll_to(180.0);
        scroll.scroll_to(400.0);
        scroll.scroll_to(0.0);

        assert_eq!(*seen.borrow(), vec!["about", "portfolio", "home"]);
        assert_eq!(tracker.borrow().active_key(), "home");

        binding.unsubscribe();
        assert_eq!(scroll.watcher_count(), 0);

        scroll.scroll_to(400.0);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn dropping_the_binding_detaches() {
        let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(page()).unwrap()));
        let scroll = ManualScroll::new();

        {
            let _binding = track_scroll(Rc::clone(&tracker), &scroll, 100.0, |_| {});
            assert_eq!(scroll.watcher_count(), 1);
        }

        assert_eq!(scroll.watcher_count(), 0);
    }
}
