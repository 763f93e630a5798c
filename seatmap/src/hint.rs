// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Text of the usage hint.
pub const HINT_TEXT: &str = "Scroll to zoom • Drag to pan • Arrow keys pan • +/- zoom • F fit • 0 reset";

/// A self-dismissing overlay timer driven by a host clock.
///
/// Times are offsets from any epoch the host likes, as long as it is the same
/// one for every call.
///
/// ```
/// use core::time::Duration;
/// use seatmap::HintTimer;
///
/// let mut hint = HintTimer::new(Duration::from_millis(2500));
/// hint.arm(Duration::ZERO);
/// assert!(hint.is_visible());
/// assert!(!hint.advance(Duration::from_millis(2499)));
/// assert!(hint.advance(Duration::from_millis(2500)));
/// assert!(!hint.is_visible());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintTimer {
    duration: Duration,
    deadline: Option<Duration>,
    visible: bool,
}

impl HintTimer {
    /// A hidden, disarmed timer.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
            visible: false,
        }
    }

    /// Shows the hint and schedules its dismissal `duration` after `now`.
    pub fn arm(&mut self, now: Duration) {
        self.visible = true;
        self.deadline = Some(now.saturating_add(self.duration));
    }

    /// Dismisses the hint if its deadline has passed.
    ///
    /// Returns `true` only on the call that dismisses it.
    pub fn advance(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// Disarms the timer; the hint stays as it is.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Hides the hint and disarms the timer.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.deadline = None;
    }

    /// Whether the hint is showing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// When the hint will be dismissed, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// The hint text while visible.
    #[must_use]
    pub fn text(&self) -> Option<&'static str> {
        self.visible.then_some(HINT_TEXT)
    }
}
