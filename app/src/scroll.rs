// src/scroll.rs
//
// Scroll-driven reveal of the stacked landing sections.
// Every section range is half-open [lo, hi): at p == lo the section is still
// fully below the fold (100), at p == hi it is fully revealed (0).

use crate::config::{RevealPolicy, NAV_THRESHOLD_VIEWPORTS, SCROLL_SPAN_VIEWPORTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Classes,
    Schedule,
    Pricing,
    Footer,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Classes,
        Section::Schedule,
        Section::Pricing,
        Section::Footer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Classes => "classes",
            Section::Schedule => "schedule",
            Section::Pricing => "pricing",
            Section::Footer => "footer",
        }
    }

    /// Sections reachable through `#hash` links and the nav buttons.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        match anchor.trim_start_matches('#') {
            "classes" => Some(Section::Classes),
            "schedule" => Some(Section::Schedule),
            "pricing" => Some(Section::Pricing),
            _ => None,
        }
    }

    pub fn range(self, policy: &RevealPolicy) -> (f64, f64) {
        match self {
            Section::Classes => policy.classes,
            Section::Schedule => policy.schedule,
            Section::Pricing => policy.pricing,
            Section::Footer => policy.footer,
        }
    }
}

/// Normalised scroll position in [0, 1].
pub fn progress(scroll_offset: f64, viewport_height: f64) -> f64 {
    if viewport_height.is_nan() || viewport_height <= 0.0 || !scroll_offset.is_finite() {
        return 0.0;
    }
    let span = viewport_height * SCROLL_SPAN_VIEWPORTS;
    (scroll_offset / span).clamp(0.0, 1.0)
}

/// Vertical offset (percent of viewport) of a section whose reveal spans `range`.
pub fn reveal_offset(p: f64, (lo, hi): (f64, f64)) -> f64 {
    if p <= lo {
        100.0
    } else if p >= hi {
        0.0
    } else {
        100.0 - ((p - lo) / (hi - lo)) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionOffsets {
    pub classes: f64,
    pub schedule: f64,
    pub pricing: f64,
    pub footer: f64,
}

impl Default for SectionOffsets {
    fn default() -> Self {
        Self::from_progress(0.0, &RevealPolicy::default())
    }
}

impl SectionOffsets {
    pub fn from_progress(p: f64, policy: &RevealPolicy) -> Self {
        Self {
            classes: reveal_offset(p, policy.classes),
            schedule: reveal_offset(p, policy.schedule),
            pricing: reveal_offset(p, policy.pricing),
            footer: reveal_offset(p, policy.footer),
        }
    }

    pub fn get(&self, section: Section) -> f64 {
        match section {
            Section::Classes => self.classes,
            Section::Schedule => self.schedule,
            Section::Pricing => self.pricing,
            Section::Footer => self.footer,
        }
    }

    /// The section currently sliding, if any.
    pub fn transitioning(&self) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|s| {
                let v = self.get(*s);
                v > 0.0 && v < 100.0
            })
    }
}

pub fn nav_visible(previous: f64, current: f64, viewport_height: f64) -> bool {
    current < previous && current > viewport_height * NAV_THRESHOLD_VIEWPORTS
}

/// Remembers the last offset so scroll direction can be derived per event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NavTracker {
    previous: f64,
}

impl NavTracker {
    pub fn observe(&mut self, current: f64, viewport_height: f64) -> bool {
        let visible = nav_visible(self.previous, current, viewport_height);
        self.previous = current;
        visible
    }
}

/// Everything the landing page needs from one scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollFrame {
    pub progress: f64,
    pub offsets: SectionOffsets,
    pub show_nav: bool,
}

impl ScrollFrame {
    pub fn observe(
        tracker: &mut NavTracker,
        scroll_offset: f64,
        viewport_height: f64,
        policy: &RevealPolicy,
    ) -> Self {
        let p = progress(scroll_offset, viewport_height);
        Self {
            progress: p,
            offsets: SectionOffsets::from_progress(p, policy),
            show_nav: tracker.observe(scroll_offset, viewport_height),
        }
    }
}

impl ScrollFrame {
    /// Recompute progress and offsets after a viewport change. Nav visibility
    /// only follows scroll direction, so it is carried over.
    pub fn reflow(self, scroll_offset: f64, viewport_height: f64, policy: &RevealPolicy) -> Self {
        let p = progress(scroll_offset, viewport_height);
        Self {
            progress: p,
            offsets: SectionOffsets::from_progress(p, policy),
            show_nav: self.show_nav,
        }
    }
}

/// Scroll offset at which `section` has just finished sliding in.
pub fn scroll_target(section: Section, viewport_height: f64, policy: &RevealPolicy) -> f64 {
    let (_, hi) = section.range(policy);
    viewport_height.max(0.0) * SCROLL_SPAN_VIEWPORTS * hi
}
