//! Testimonial carousel rotation logic
//!
//! `RotationController` owns the current index into a fixed, non-empty list
//! and the autoplay flag. Autoplay is driven by a logical clock: the UI
//! feeds elapsed time through [`RotationController::advance`] and the
//! controller turns every full interval into one step forward.
//!
//! Two playback modes exist:
//! - `Playing`: elapsed time accumulates and advances the index
//! - `Paused`: elapsed time is discarded
//!
//! Leaving `Paused` re-arms the clock, so the first automatic step after a
//! resume happens one full interval later.

use std::num::NonZeroUsize;
use std::time::Duration;

/// Delay between automatic advances
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Carousel errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("Index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Autoplay interval must be greater than zero")]
    ZeroInterval,
}

/// Playback mode of the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Playing,
    Paused,
}

/// Snapshot of the mutable carousel state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationState {
    pub current_index: usize,
    pub autoplay_enabled: bool,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            current_index: 0,
            autoplay_enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationController {
    len: NonZeroUsize,
    state: RotationState,
    interval: Duration,
    /// Time accumulated since the autoplay clock was last armed
    since_armed: Duration,
}

impl RotationController {
    /// Controller over `len` items using the default autoplay interval
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            state: RotationState::default(),
            interval: AUTOPLAY_INTERVAL,
            since_armed: Duration::ZERO,
        }
    }

    pub fn with_interval(len: NonZeroUsize, interval: Duration) -> Result<Self, CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            interval,
            ..Self::new(len)
        })
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn mode(&self) -> PlaybackMode {
        if self.state.autoplay_enabled {
            PlaybackMode::Playing
        } else {
            PlaybackMode::Paused
        }
    }

    pub fn is_autoplay_enabled(&self) -> bool {
        self.state.autoplay_enabled
    }

    pub fn next(&mut self) {
        self.step_forward(1);
    }

    pub fn previous(&mut self) {
        let len = self.len();
        self.state.current_index = (self.state.current_index + len - 1) % len;
    }

    /// Jump straight to `index`. Out-of-range indices leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.state.current_index = index;
        Ok(())
    }

    /// Pointer entered the carousel. Returns `true` on a Playing -> Paused transition.
    pub fn pause(&mut self) -> bool {
        if !self.state.autoplay_enabled {
            return false;
        }
        self.state.autoplay_enabled = false;
        self.since_armed = Duration::ZERO;
        true
    }

    /// Pointer left the carousel. Returns `true` on a Paused -> Playing transition.
    pub fn resume(&mut self) -> bool {
        if self.state.autoplay_enabled {
            return false;
        }
        self.state.autoplay_enabled = true;
        self.since_armed = Duration::ZERO;
        true
    }

    /// Feed `elapsed` time into the autoplay clock.
    ///
    /// Returns the number of automatic steps taken. Always 0 while paused.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if !self.state.autoplay_enabled {
            return 0;
        }

        let total = self.since_armed.as_nanos() + elapsed.as_nanos();
        let period = self.interval.as_nanos();
        let ticks = total / period;
        let remainder = total % period;

        // remainder < period, which itself came from a Duration
        self.since_armed = Duration::from_nanos(remainder as u64);

        let steps = (ticks % self.len() as u128) as usize;
        self.step_forward(steps);
        usize::try_from(ticks).unwrap_or(usize::MAX)
    }

    /// Time left before the next automatic step, or `None` while paused
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.state
            .autoplay_enabled
            .then(|| self.interval.saturating_sub(self.since_armed))
    }

    fn step_forward(&mut self, steps: usize) {
        self.state.current_index = (self.state.current_index + steps % self.len()) % self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(len: usize) -> RotationController {
        RotationController::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let c = controller(5);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_autoplay_enabled());
        assert_eq!(c.mode(), PlaybackMode::Playing);
        assert_eq!(c.state(), RotationState::default());
        assert_eq!(c.until_next_tick(), Some(AUTOPLAY_INTERVAL));
    }

    #[test]
    fn test_next_wraps() {
        let mut c = controller(3);
        c.next();
        c.next();
        assert_eq!(c.current_index(), 2);
        c.next();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps() {
        let mut c = controller(5);
        c.previous();
        assert_eq!(c.current_index(), 4);
        c.previous();
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut c = controller(1);
        c.next();
        c.previous();
        assert_eq!(c.advance(Duration::from_secs(60)), 12);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_go_to() {
        let mut c = controller(5);
        c.go_to(3).unwrap();
        assert_eq!(c.current_index(), 3);

        let err = c.go_to(5).unwrap_err();
        assert_eq!(err, CarouselError::IndexOutOfRange { index: 5, len: 5 });
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_navigation_keeps_mode() {
        let mut c = controller(4);
        c.pause();
        c.next();
        c.previous();
        c.go_to(2).unwrap();
        assert_eq!(c.mode(), PlaybackMode::Paused);

        c.resume();
        c.next();
        assert_eq!(c.mode(), PlaybackMode::Playing);
    }

    #[test]
    fn test_pause_resume_report_transitions() {
        let mut c = controller(2);
        assert!(!c.resume());
        assert!(c.pause());
        assert!(!c.pause());
        assert!(c.resume());
        assert!(!c.resume());
    }

    #[test]
    fn test_advance_partial_interval() {
        let mut c = controller(5);
        assert_eq!(c.advance(Duration::from_millis(4999)), 0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.until_next_tick(), Some(Duration::from_millis(1)));

        assert_eq!(c.advance(Duration::from_millis(1)), 1);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.until_next_tick(), Some(AUTOPLAY_INTERVAL));
    }

    #[test]
    fn test_advance_carries_remainder() {
        let mut c = controller(5);
        assert_eq!(c.advance(Duration::from_millis(7500)), 1);
        assert_eq!(c.advance(Duration::from_millis(2500)), 1);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_paused_discards_time() {
        let mut c = controller(5);
        c.advance(Duration::from_millis(3000));
        c.pause();
        assert_eq!(c.advance(Duration::from_secs(3600)), 0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.until_next_tick(), None);
    }

    #[test]
    fn test_manual_navigation_does_not_rearm() {
        let mut c = controller(5);
        c.advance(Duration::from_millis(4000));
        c.go_to(3).unwrap();
        assert_eq!(c.advance(Duration::from_millis(1000)), 1);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn test_custom_interval() {
        let len = NonZeroUsize::new(3).unwrap();
        let mut c = RotationController::with_interval(len, Duration::from_millis(100)).unwrap();
        assert_eq!(c.interval(), Duration::from_millis(100));
        assert_eq!(c.advance(Duration::from_millis(250)), 2);
        assert_eq!(c.current_index(), 2);

        assert_eq!(
            RotationController::with_interval(len, Duration::ZERO),
            Err(CarouselError::ZeroInterval)
        );
    }

    #[test]
    fn test_huge_elapsed_time() {
        let mut c = controller(5);
        // 7 full intervals past a whole number of laps
        let elapsed = AUTOPLAY_INTERVAL * (5 * 1_000 + 7);
        c.advance(elapsed);
        assert_eq!(c.current_index(), 2);
    }
}
