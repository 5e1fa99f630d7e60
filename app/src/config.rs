// src/config.rs
use serde::{Deserialize, Serialize};

/// Local storage key holding the profile picture data URL.
pub const PROFILE_PICTURE_KEY: &str = "profilePicture";

/// Total scrollable distance of the landing page, in viewport heights.
pub const SCROLL_SPAN_VIEWPORTS: f64 = 4.0;

/// The sticky nav only shows once the user is past this fraction of the first viewport.
pub const NAV_THRESHOLD_VIEWPORTS: f64 = 0.5;

/// Delay before honouring a `#section` hash on first load.
pub const HASH_SCROLL_DELAY_MS: u32 = 100;

/// Class cards visible at once in the carousel.
pub const CAROUSEL_PAGE: usize = 4;

/// Progress sub-ranges for the four stacked sections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealPolicy {
    pub classes: (f64, f64),
    pub schedule: (f64, f64),
    pub pricing: (f64, f64),
    pub footer: (f64, f64),
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            classes: (0.0, 0.33),
            schedule: (0.33, 0.66),
            pricing: (0.66, 0.90),
            footer: (0.90, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadPolicy {
    pub mime_prefix: String,
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            mime_prefix: "image/".into(),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_ranges_are_contiguous() {
        let p = RevealPolicy::default();
        assert_eq!(p.classes.0, 0.0);
        assert_eq!(p.classes.1, p.schedule.0);
        assert_eq!(p.schedule.1, p.pricing.0);
        assert_eq!(p.pricing.1, p.footer.0);
        assert_eq!(p.footer.1, 1.0);
    }

    #[test]
    fn upload_policy_round_trips_from_json() {
        let p: UploadPolicy =
            serde_json::from_str(r#"{"mime_prefix":"image/","max_bytes":1024}"#).unwrap();
        assert_eq!(p.max_bytes, 1024);
        assert_eq!(UploadPolicy::default().max_bytes, 5_242_880);
    }
}
