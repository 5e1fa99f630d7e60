// src/carousel.rs
use crate::config::CAROUSEL_PAGE;

/// Number of distinct slide positions for `cards` cards.
pub fn stops(cards: usize) -> usize {
    cards.saturating_sub(CAROUSEL_PAGE).max(1)
}

pub fn next_slide(current: usize, cards: usize) -> usize {
    (current + 1) % stops(cards)
}

pub fn prev_slide(current: usize, cards: usize) -> usize {
    let n = stops(cards);
    (current % n + n - 1) % n
}

/// Horizontal translation of the track, in percent.
pub fn track_offset(current: usize) -> f64 {
    current as f64 * (100.0 / CAROUSEL_PAGE as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_cards_have_four_stops() {
        assert_eq!(stops(8), 4);
        assert_eq!(next_slide(3, 8), 0);
        assert_eq!(prev_slide(0, 8), 3);
        assert_eq!(next_slide(1, 8), 2);
    }

    #[test]
    fn short_lists_never_move() {
        for cards in 0..=5 {
            assert_eq!(stops(cards), 1);
            assert_eq!(next_slide(0, cards), 0);
            assert_eq!(prev_slide(0, cards), 0);
        }
    }

    #[test]
    fn offset_is_a_quarter_per_slide() {
        assert_eq!(track_offset(0), 0.0);
        assert_eq!(track_offset(2), 50.0);
    }
}
