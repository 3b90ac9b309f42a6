//! Viewport-entry triggers for section reveals.
//!
//! The browser may report intersection changes many times; only the first
//! time a section crosses its threshold counts. For the contact section that
//! first instant is also the anchor of the anti-automation timer.

use chrono::{DateTime, Utc};
use tracing::debug;

/// Sections of the page in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Cuisine,
    Services,
    Gallery,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Cuisine,
        Section::Services,
        Section::Gallery,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Element id used as the in-page anchor.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Cuisine => "cuisine",
            Section::Services => "services",
            Section::Gallery => "gallery",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Header navigation label key, for sections linked from the header.
    pub fn nav_key(&self) -> Option<&'static str> {
        match self {
            Section::About => Some("nav.story"),
            Section::Cuisine => Some("nav.cuisine"),
            Section::Services => Some("nav.services"),
            Section::Gallery => Some("nav.gallery"),
            Section::Contact => Some("nav.contact"),
            Section::Hero | Section::Testimonials => None,
        }
    }

    /// Visible fraction at which the section reveals itself.
    pub fn reveal_threshold(&self) -> f32 {
        match self {
            Section::Cuisine | Section::Gallery => 0.1,
            _ => 0.2,
        }
    }

    pub fn reveal_trigger(&self) -> RevealTrigger {
        RevealTrigger::new(self.reveal_threshold())
    }
}

/// Header links in display order: `(href, label key)`.
pub fn nav_links() -> Vec<(String, &'static str)> {
    Section::ALL
        .iter()
        .filter_map(|section| {
            section
                .nav_key()
                .map(|key| (format!("#{}", section.anchor()), key))
        })
        .collect()
}

/// Fires once, the first time the observed ratio reaches the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    threshold: f32,
    revealed_at: Option<DateTime<Utc>>,
}

impl RevealTrigger {
    /// `threshold` is clamped to `0.0..=1.0`.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed_at: None,
        }
    }

    /// Feed an intersection ratio. Returns `true` only on the first entry.
    pub fn observe(&mut self, ratio: f32, now: DateTime<Utc>) -> bool {
        if self.revealed_at.is_some() || ratio < self.threshold || ratio <= 0.0 {
            return false;
        }
        debug!(ratio, threshold = self.threshold, "Section entered view");
        self.revealed_at = Some(now);
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub fn revealed_at(&self) -> Option<DateTime<Utc>> {
        self.revealed_at
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let mut trigger = RevealTrigger::new(0.2);
        assert!(!trigger.observe(0.1, t0()));
        assert!(!trigger.is_revealed());

        assert!(trigger.observe(0.2, t0()));
        assert_eq!(trigger.revealed_at(), Some(t0()));
    }

    #[test]
    fn test_first_entry_is_authoritative() {
        let mut trigger = RevealTrigger::new(0.2);
        assert!(trigger.observe(0.5, t0()));

        let later = t0() + Duration::seconds(30);
        assert!(!trigger.observe(0.0, later));
        assert!(!trigger.observe(0.9, later));
        assert_eq!(trigger.revealed_at(), Some(t0()));
    }

    #[test]
    fn test_zero_ratio_never_fires() {
        let mut trigger = RevealTrigger::new(0.0);
        assert!(!trigger.observe(0.0, t0()));
        assert!(trigger.observe(0.01, t0()));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealTrigger::new(4.0).threshold(), 1.0);
        assert_eq!(RevealTrigger::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_section_thresholds_in_range() {
        for section in Section::ALL {
            let threshold = section.reveal_threshold();
            assert!((0.1..=0.2).contains(&threshold), "{:?}", section);
        }
        assert_eq!(Section::Contact.reveal_threshold(), 0.2);
    }

    #[test]
    fn test_nav_links_order() {
        let links = nav_links();
        let hrefs: Vec<_> = links.iter().map(|(href, _)| href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["#about", "#cuisine", "#services", "#gallery", "#contact"]
        );
        assert_eq!(links[0].1, "nav.story");
    }
}
