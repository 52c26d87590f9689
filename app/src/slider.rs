//! View state for the image slider: the active slide, swipe recognition and
//! autoplay options. Everything here is pure so it can be driven from
//! signals and tested without a browser.

use core::time::Duration;

/// Horizontal travel, in CSS pixels, a touch must exceed to count as a swipe.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;
pub const DEFAULT_AUTO_SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Active slide index over a fixed number of images. Navigation wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    active: usize,
    count: usize,
}

impl SliderState {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn next(&mut self) {
        if self.count > 0 {
            self.active = (self.active + 1) % self.count;
        }
    }

    pub fn prev(&mut self) {
        if self.count > 0 {
            self.active = (self.active + self.count - 1) % self.count;
        }
    }

    /// Jumps to `index`. Indices outside the sequence are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.active = index;
        }
    }

    /// One-based position, e.g. `"2 / 5"`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.active + 1, self.count)
    }

    pub fn apply(&mut self, swipe: SwipeDirection) {
        match swipe {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.prev(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left: advance.
    Left,
    /// Finger moved left-to-right: go back.
    Right,
}

impl SwipeDirection {
    /// `distance` is `start - end`; the threshold is exclusive.
    #[must_use]
    pub fn classify(distance: f64) -> Option<Self> {
        if distance > MIN_SWIPE_DISTANCE {
            Some(Self::Left)
        } else if distance < -MIN_SWIPE_DISTANCE {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// Records the horizontal start and last position of one touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start: Option<f64>,
    end: Option<f64>,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64) {
        self.start = Some(x);
        self.end = None;
    }

    pub fn move_to(&mut self, x: f64) {
        self.end = Some(x);
    }

    /// Ends the gesture and resets the tracker. A touch that never moved is
    /// not a swipe.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let gesture = self.start.zip(self.end);
        *self = Self::default();
        let (start, end) = gesture?;
        SwipeDirection::classify(start - end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderOptions {
    pub auto_slide: bool,
    pub auto_slide_interval: Duration,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            auto_slide: false,
            auto_slide_interval: DEFAULT_AUTO_SLIDE_INTERVAL,
        }
    }
}

impl SliderOptions {
    #[must_use]
    pub fn autoplay(interval: Duration) -> Self {
        Self {
            auto_slide: true,
            auto_slide_interval: interval,
        }
    }

    /// The autoplay period, if autoplay is on. A zero interval means the default.
    #[must_use]
    pub fn autoplay_period(&self) -> Option<Duration> {
        self.auto_slide.then(|| {
            if self.auto_slide_interval.is_zero() {
                DEFAULT_AUTO_SLIDE_INTERVAL
            } else {
                self.auto_slide_interval
            }
        })
    }
}

/// What the autoplay timer is armed for. The timer is cancelled and re-armed
/// whenever the key changes (a slide change or new options), and none runs for
/// `None`: autoplay off, or nothing to cycle through.
#[must_use]
pub fn autoplay_key(options: &SliderOptions, state: &SliderState) -> Option<(Duration, usize)> {
    if state.count() < 2 {
        return None;
    }
    options.autoplay_period().map(|period| (period, state.active()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_start() {
        let mut state = SliderState::new(3);
        state.next();
        state.next();
        assert_eq!(state.active(), 2);
        state.next();
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut state = SliderState::new(4);
        state.prev();
        assert_eq!(state.active(), 3);
        state.prev();
        assert_eq!(state.active(), 2);
    }

    #[test]
    fn n_steps_return_to_start() {
        for count in 1..=7 {
            let mut state = SliderState::new(count);
            state.select(count / 2);
            let start = state.active();
            for _ in 0..count {
                state.next();
            }
            assert_eq!(state.active(), start, "count = {count}");
        }
    }

    #[test]
    fn single_image_navigation_stays_put() {
        let mut state = SliderState::new(1);
        state.next();
        assert_eq!(state.active(), 0);
        state.prev();
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn empty_slider_does_not_panic() {
        let mut state = SliderState::new(0);
        state.next();
        state.prev();
        state.select(0);
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut state = SliderState::new(3);
        state.select(2);
        assert!(state.is_active(2));
        state.select(3);
        assert!(state.is_active(2));
    }

    #[test]
    fn counter_label_is_one_based() {
        let mut state = SliderState::new(5);
        assert_eq!(state.counter_label(), "1 / 5");
        state.prev();
        assert_eq!(state.counter_label(), "5 / 5");
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        assert_eq!(SwipeDirection::classify(50.0), None);
        assert_eq!(SwipeDirection::classify(-50.0), None);
        assert_eq!(SwipeDirection::classify(51.0), Some(SwipeDirection::Left));
        assert_eq!(SwipeDirection::classify(-51.0), Some(SwipeDirection::Right));
        assert_eq!(SwipeDirection::classify(0.0), None);
    }

    #[test]
    fn tracker_reports_and_resets() {
        let mut tracker = SwipeTracker::default();
        tracker.start(300.0);
        tracker.move_to(200.0);
        assert_eq!(tracker.finish(), Some(SwipeDirection::Left));
        assert_eq!(tracker, SwipeTracker::default());
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let mut tracker = SwipeTracker::default();
        tracker.start(10.0);
        tracker.move_to(200.0);
        tracker.start(120.0);
        // The new gesture never moved; the previous end must not leak in.
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn gesture_starting_at_zero_counts() {
        let mut tracker = SwipeTracker::default();
        tracker.start(0.0);
        tracker.move_to(80.0);
        assert_eq!(tracker.finish(), Some(SwipeDirection::Right));
    }

    #[test]
    fn swipes_drive_the_slider() {
        let mut state = SliderState::new(3);
        state.apply(SwipeDirection::Right);
        assert_eq!(state.active(), 2);
        state.apply(SwipeDirection::Left);
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn autoplay_period() {
        assert_eq!(SliderOptions::default().autoplay_period(), None);
        assert_eq!(
            SliderOptions::autoplay(Duration::from_millis(1500)).autoplay_period(),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(
            SliderOptions::autoplay(Duration::ZERO).autoplay_period(),
            Some(DEFAULT_AUTO_SLIDE_INTERVAL)
        );
    }

    #[test]
    fn autoplay_rearms_on_slide_change() {
        let options = SliderOptions::autoplay(Duration::from_millis(3000));
        let mut state = SliderState::new(3);
        let armed = autoplay_key(&options, &state);
        assert_eq!(armed, Some((Duration::from_millis(3000), 0)));

        state.next();
        assert_ne!(autoplay_key(&options, &state), armed);

        // A select to the active slide keeps the running countdown.
        let current = autoplay_key(&options, &state);
        state.select(1);
        assert_eq!(autoplay_key(&options, &state), current);
    }

    #[test]
    fn autoplay_rearms_on_option_change() {
        let state = SliderState::new(3);
        let slow = autoplay_key(&SliderOptions::autoplay(Duration::from_millis(8000)), &state);
        let fast = autoplay_key(&SliderOptions::autoplay(Duration::from_millis(2000)), &state);
        assert_ne!(slow, fast);
        assert_eq!(autoplay_key(&SliderOptions::default(), &state), None);
    }

    #[test]
    fn autoplay_needs_two_slides() {
        let options = SliderOptions::autoplay(Duration::from_millis(1000));
        assert_eq!(autoplay_key(&options, &SliderState::new(0)), None);
        assert_eq!(autoplay_key(&options, &SliderState::new(1)), None);
    }
}
