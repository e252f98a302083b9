//! Simulated upload progress.
//!
//! The browser `fetch` transport exposes no upload telemetry, so the progress
//! bar is driven by a timer instead. Values produced here are cosmetic and
//! non-authoritative: they say nothing about bytes actually sent.
//!
//! INVARIANTS
//! ==========
//! The value never decreases and never exceeds 100. Ticks stop at the ceiling;
//! only `finish` moves the bar past it.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Upper bound of the progress bar.
pub const COMPLETE: u8 = 100;

/// Timer-driven progress value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedProgress {
    value: u8,
    step: u8,
    ceiling: u8,
}

impl Default for SimulatedProgress {
    fn default() -> Self {
        Self::new(5, 90)
    }
}

impl SimulatedProgress {
    /// Start at zero, advancing `step` per tick up to `ceiling`.
    #[must_use]
    pub fn new(step: u8, ceiling: u8) -> Self {
        Self { value: 0, step: step.max(1), ceiling: ceiling.min(COMPLETE) }
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// True once ticking can no longer move the bar.
    #[must_use]
    pub fn at_ceiling(&self) -> bool {
        self.value >= self.ceiling
    }

    /// Advance one step. Returns whether the timer should keep running.
    pub fn tick(&mut self) -> bool {
        if self.at_ceiling() {
            return false;
        }
        self.value = self.value.saturating_add(self.step).min(self.ceiling);
        !self.at_ceiling()
    }

    /// Snap to 100 once the response has arrived.
    pub fn finish(&mut self) {
        self.value = COMPLETE;
    }

    /// CSS width for the fill element.
    #[must_use]
    pub fn css_width(&self) -> String {
        format!("{}%", self.value)
    }
}
