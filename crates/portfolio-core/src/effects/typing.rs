//! Hero typing effect.
//!
//! Types a phrase one character at a time, pauses, deletes it, then
//! moves to the next phrase, wrapping around forever.

use std::time::Duration;

use crate::config::TypingConfig;

/// One frame of the effect: text to show and how long to wait before
/// the next frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

impl TypingFrame {
    /// Delay in whole milliseconds, for browser timers
    pub fn delay_ms(&self) -> u32 {
        crate::timing::timer_ms(self.delay)
    }
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    deleting: bool,
    typing: Duration,
    deleting_speed: Duration,
    pause: Duration,
}

impl Typewriter {
    /// Build from config. Empty phrases are dropped; returns `None` when
    /// nothing is left to type.
    pub fn from_config(config: &TypingConfig) -> Option<Self> {
        let phrases: Vec<String> = config
            .phrases
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect();
        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
            typing: Duration::from_millis(u64::from(config.typing_ms)),
            deleting_speed: Duration::from_millis(u64::from(config.deleting_ms)),
            pause: Duration::from_millis(u64::from(config.pause_ms)),
        })
    }

    /// Index of the phrase currently being typed or deleted
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance one character.
    pub fn tick(&mut self) -> TypingFrame {
        let current = &self.phrases[self.phrase];
        let len = current.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = current.chars().take(self.chars).collect();

        let mut delay = if self.deleting {
            self.deleting_speed
        } else {
            self.typing
        };

        if !self.deleting && self.chars == len {
            delay = self.pause;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }

        TypingFrame { text, delay }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(phrases: &[&str]) -> TypingConfig {
        TypingConfig {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            ..TypingConfig::default()
        }
    }

    fn frame(text: &str, ms: u64) -> TypingFrame {
        TypingFrame {
            text: text.to_string(),
            delay: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_type_pause_delete_advance() {
        let mut tw = Typewriter::from_config(&config(&["ab", "c"])).unwrap();

        assert_eq!(tw.tick(), frame("a", 100));
        assert_eq!(tw.tick(), frame("ab", 2000));
        assert!(tw.is_deleting());
        assert_eq!(tw.tick(), frame("a", 50));
        assert_eq!(tw.tick(), frame("", 50));
        assert_eq!(tw.phrase_index(), 1);

        assert_eq!(tw.tick(), frame("c", 2000));
        assert_eq!(tw.tick(), frame("", 50));
        // Wrapped back to the first phrase
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.tick(), frame("a", 100));
    }

    #[test]
    fn test_frame_delay_for_timers() {
        let mut tw = Typewriter::from_config(&config(&["ab"])).unwrap();
        assert_eq!(tw.tick().delay_ms(), 100);
        assert_eq!(tw.tick().delay_ms(), 2000);
        assert_eq!(tw.tick().delay_ms(), 50);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::from_config(&config(&["né"])).unwrap();
        assert_eq!(tw.tick().text, "n");
        assert_eq!(tw.tick().text, "né");
    }

    #[test]
    fn test_empty_phrases_are_skipped() {
        assert!(Typewriter::from_config(&config(&[])).is_none());
        assert!(Typewriter::from_config(&config(&["", ""])).is_none());

        let mut tw = Typewriter::from_config(&config(&["", "x"])).unwrap();
        assert_eq!(tw.tick(), frame("x", 2000));
    }

    #[test]
    fn test_default_phrases_cycle() {
        let mut tw = Typewriter::from_config(&TypingConfig::default()).unwrap();
        let first = "IT Student & Developer";
        let mut last = String::new();
        for _ in 0..first.len() {
            last = tw.tick().text;
        }
        assert_eq!(last, first);
    }
}
