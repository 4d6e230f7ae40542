//! Swipe gesture recognition and the slide-out transition.

/// Displacement limits for a back swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold {
    /// Horizontal movement to the right must exceed this.
    pub min_dx: f64,
    /// Vertical movement (either direction) must stay below this.
    pub max_dy: f64,
}

impl SwipeThreshold {
    /// Limits measured in terminal cells.
    pub fn cells() -> Self {
        Self {
            min_dx: 8.0,
            max_dy: 3.0,
        }
    }
}

impl Default for SwipeThreshold {
    /// Limits measured in touch pixels.
    fn default() -> Self {
        Self {
            min_dx: 80.0,
            max_dy: 100.0,
        }
    }
}

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Rightward swipe: navigate back.
    Back,
}

/// Tracks a press and classifies the release.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    threshold: SwipeThreshold,
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    /// Create a tracker with the given limits.
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Record where a touch or drag began.
    pub fn start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Classify the gesture ending at `(x, y)`.
    pub fn end(&mut self, x: f64, y: f64) -> Option<Swipe> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = (y - start_y).abs();

        (dx > self.threshold.min_dx && dy < self.threshold.max_dy).then_some(Swipe::Back)
    }

    /// Forget a pending press.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Slide-out animation that runs before a swipe's back navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOut {
    elapsed: u16,
    duration: u16,
}

impl SlideOut {
    /// Start a transition lasting `duration` ticks.
    pub fn new(duration: u16) -> Self {
        Self {
            elapsed: 0,
            duration,
        }
    }

    /// Advance one tick. Returns true once the transition has finished.
    pub fn tick(&mut self) -> bool {
        self.elapsed = self.elapsed.saturating_add(1).min(self.duration);
        self.is_done()
    }

    /// Whether the transition has finished.
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Completed fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            1.0
        } else {
            f64::from(self.elapsed) / f64::from(self.duration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_swipe_is_back() {
        let mut tracker = SwipeTracker::default();
        tracker.start(10.0, 200.0);
        assert_eq!(tracker.end(110.0, 210.0), Some(Swipe::Back));
    }

    #[test]
    fn short_or_steep_or_leftward_is_ignored() {
        let mut tracker = SwipeTracker::default();

        tracker.start(0.0, 0.0);
        assert_eq!(tracker.end(80.0, 0.0), None);

        tracker.start(0.0, 0.0);
        assert_eq!(tracker.end(200.0, -100.0), None);

        tracker.start(200.0, 0.0);
        assert_eq!(tracker.end(0.0, 0.0), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::new(SwipeThreshold::cells());
        assert_eq!(tracker.end(50.0, 0.0), None);

        tracker.start(0.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.end(50.0, 0.0), None);
    }

    #[test]
    fn press_is_consumed_by_release() {
        let mut tracker = SwipeTracker::new(SwipeThreshold::cells());
        tracker.start(0.0, 5.0);
        assert_eq!(tracker.end(12.0, 6.0), Some(Swipe::Back));
        assert_eq!(tracker.end(30.0, 6.0), None);
    }

    #[test]
    fn slide_out_finishes_after_duration() {
        let mut slide = SlideOut::new(3);
        assert!(!slide.tick());
        assert!(!slide.tick());
        assert!(slide.tick());
        assert!(slide.is_done());
        assert_eq!(slide.progress(), 1.0);
    }

    #[test]
    fn zero_length_slide_is_done() {
        let slide = SlideOut::new(0);
        assert!(slide.is_done());
        assert_eq!(slide.progress(), 1.0);
    }
}
