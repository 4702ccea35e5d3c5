//! Scroll-triggered reveal, modelled on intersection-observer semantics.
//!
//! The root is the viewport with `bottom_margin` pixels trimmed off its
//! bottom edge. An element is revealed once the fraction of its height
//! inside that root reaches `threshold`. Reveals are sticky.

use std::collections::BTreeSet;

use crate::config::PortfolioConfig;

/// Class every revealable element starts with
pub const FADE_IN_CLASS: &str = "fade-in";
/// Class string of an element that has been revealed
pub const REVEALED_CLASS: &str = "fade-in visible";

/// Element box relative to the viewport (as from `getBoundingClientRect`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub top: f64,
    pub height: f64,
}

/// Intersection threshold and root margin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealRule {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl RevealRule {
    /// Rule for fade-in elements
    pub fn fade_in(config: &PortfolioConfig) -> Self {
        Self {
            threshold: config.reveal.threshold,
            bottom_margin: config.reveal.bottom_margin,
        }
    }

    /// Rule that starts the statistics counters (no root margin)
    pub fn counters(config: &PortfolioConfig) -> Self {
        Self {
            threshold: config.reveal.counter_threshold,
            bottom_margin: 0.0,
        }
    }

    /// Fraction of `rect` inside the trimmed viewport, in `0.0..=1.0`.
    pub fn visible_fraction(&self, rect: ViewportRect, viewport_height: f64) -> f64 {
        let root_bottom = viewport_height - self.bottom_margin;

        if rect.height <= 0.0 {
            let inside = rect.top >= 0.0 && rect.top <= root_bottom;
            return if inside { 1.0 } else { 0.0 };
        }

        let top = rect.top.max(0.0);
        let bottom = (rect.top + rect.height).min(root_bottom);
        ((bottom - top).max(0.0) / rect.height).min(1.0)
    }

    pub fn intersects(&self, rect: ViewportRect, viewport_height: f64) -> bool {
        let fraction = self.visible_fraction(rect, viewport_height);
        fraction > 0.0 && fraction >= self.threshold
    }
}

/// Remembers which elements have been revealed.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    rule: RevealRule,
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    pub fn new(rule: RevealRule) -> Self {
        Self {
            rule,
            revealed: BTreeSet::new(),
        }
    }

    /// Check one element. Returns `true` only the first time it reveals.
    pub fn observe(&mut self, id: &str, rect: ViewportRect, viewport_height: f64) -> bool {
        if self.revealed.contains(id) || !self.rule.intersects(rect, viewport_height) {
            return false;
        }
        self.revealed.insert(id.to_string());
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Class string for a revealable element
    pub fn class(&self, id: &str) -> &'static str {
        if self.is_revealed(id) {
            REVEALED_CLASS
        } else {
            FADE_IN_CLASS
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: RevealRule = RevealRule {
        threshold: 0.1,
        bottom_margin: 50.0,
    };

    fn rect(top: f64, height: f64) -> ViewportRect {
        ViewportRect { top, height }
    }

    #[test]
    fn test_fraction_respects_bottom_margin() {
        // Viewport 800, root bottom 750; element 100 tall starting at 700
        assert_eq!(FADE.visible_fraction(rect(700.0, 100.0), 800.0), 0.5);
        // Entirely in the trimmed strip
        assert_eq!(FADE.visible_fraction(rect(760.0, 30.0), 800.0), 0.0);
    }

    #[test]
    fn test_fraction_above_viewport() {
        assert_eq!(FADE.visible_fraction(rect(-200.0, 100.0), 800.0), 0.0);
        assert_eq!(FADE.visible_fraction(rect(-50.0, 100.0), 800.0), 0.5);
    }

    #[test]
    fn test_threshold() {
        // 9px of 100 visible
        assert!(!FADE.intersects(rect(741.0, 100.0), 800.0));
        // 10px of 100 visible
        assert!(FADE.intersects(rect(740.0, 100.0), 800.0));
    }

    #[test]
    fn test_zero_height_element() {
        assert!(FADE.intersects(rect(100.0, 0.0), 800.0));
        assert!(!FADE.intersects(rect(900.0, 0.0), 800.0));
    }

    #[test]
    fn test_reveal_is_sticky() {
        let mut tracker = RevealTracker::new(FADE);
        assert_eq!(tracker.class("about"), "fade-in");

        assert!(!tracker.observe("about", rect(900.0, 200.0), 800.0));
        assert!(tracker.observe("about", rect(300.0, 200.0), 800.0));
        assert!(!tracker.observe("about", rect(300.0, 200.0), 800.0));

        // Scrolled back out of view: still revealed
        assert!(!tracker.observe("about", rect(2000.0, 200.0), 800.0));
        assert!(tracker.is_revealed("about"));
        assert_eq!(tracker.class("about"), "fade-in visible");
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn test_counter_rule_needs_half() {
        let config = PortfolioConfig::default();
        let rule = RevealRule::counters(&config);
        assert!(!rule.intersects(rect(701.0, 200.0), 800.0));
        assert!(rule.intersects(rect(700.0, 200.0), 800.0));
        assert!(rule.intersects(rect(600.0, 200.0), 800.0));
    }
}
