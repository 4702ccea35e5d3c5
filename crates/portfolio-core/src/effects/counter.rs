//! Statistics count-up animation.
//!
//! A label such as `"15+"` or `"100%"` animates from zero to its leading
//! number in fixed increments, keeping its suffix on every frame.

/// Count-up frames for one statistic. Iterating yields every label to
/// display; the last item is always the exact target.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    suffix: &'static str,
    finished: bool,
}

impl CountUp {
    /// Parse a label's leading integer and suffix.
    ///
    /// Returns `None` when the label does not start with a number; such
    /// labels are left as they are.
    pub fn parse(label: &str, steps: u32) -> Option<Self> {
        let trimmed = label.trim_start();
        let digits: &str = {
            let end = trimmed
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(trimmed.len());
            &trimmed[..end]
        };
        let target: u64 = digits.parse().ok()?;

        let suffix = match (label.contains('+'), label.contains('%')) {
            (true, true) => "+%",
            (true, false) => "+",
            (false, true) => "%",
            (false, false) => "",
        };

        Some(Self {
            target,
            increment: target as f64 / f64::from(steps.max(1)),
            current: 0.0,
            suffix,
            finished: false,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// The label shown once the animation is over
    pub fn final_label(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        if self.current < self.target as f64 {
            self.current += self.increment;
            // Float drift can push the running value past the target
            let shown = (self.current.ceil() as u64).min(self.target);
            Some(format!("{}{}", shown, self.suffix))
        } else {
            self.finished = true;
            Some(self.final_label())
        }
    }
}
