//! Browser timers for the landing page
//!
//! Both helpers are inert during server rendering: intervals never arm and
//! delayed callbacks are dropped without running.

use std::time::Duration;

use leptos::prelude::*;

use crate::core::PlaybackMode;

#[cfg(feature = "hydrate")]
type IntervalHandle = gloo_timers::callback::Interval;

#[cfg(not(feature = "hydrate"))]
type IntervalHandle = ();

/// Holds at most one live timer handle.
///
/// Dropping a handle cancels its timer, so replacing or clearing the slot
/// is all the cancellation there is.
#[derive(Debug)]
pub struct TimerSlot<H> {
    handle: Option<H>,
    armed: u64,
}

impl<H> TimerSlot<H> {
    pub fn new() -> Self {
        Self {
            handle: None,
            armed: 0,
        }
    }

    /// Install `handle`, dropping the previous one first.
    pub fn arm(&mut self, handle: H) {
        self.handle = None;
        self.handle = Some(handle);
        self.armed += 1;
    }

    pub fn disarm(&mut self) {
        self.handle = None;
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Number of handles installed so far
    pub fn times_armed(&self) -> u64 {
        self.armed
    }

    /// Match the carousel's playback mode: every `Playing` installs a fresh
    /// handle from `start`, `Paused` drops the current one.
    pub fn sync(&mut self, mode: PlaybackMode, start: impl FnOnce() -> H) {
        match mode {
            PlaybackMode::Playing => self.arm(start()),
            PlaybackMode::Paused => self.disarm(),
        }
    }
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot owned by the current reactive owner; cleared when the owner is
/// cleaned up.
fn owned_slot<H: 'static>() -> StoredValue<TimerSlot<H>, LocalStorage> {
    let slot = StoredValue::new_local(TimerSlot::new());
    on_cleanup(move || {
        slot.try_update_value(|slot| slot.disarm());
    });
    slot
}

/// Repeating timer owned by the component that created it.
#[derive(Clone, Copy)]
pub struct RepeatingTimer {
    slot: StoredValue<TimerSlot<IntervalHandle>, LocalStorage>,
}

impl RepeatingTimer {
    pub fn new() -> Self {
        Self { slot: owned_slot() }
    }

    /// Fire `callback` every `period` while `mode` is `Playing`.
    ///
    /// Each call with `Playing` replaces the running interval; `Paused`
    /// cancels it.
    pub fn sync(&self, mode: PlaybackMode, period: Duration, callback: impl FnMut() + 'static) {
        self.slot
            .try_update_value(|slot| slot.sync(mode, || start_interval(period, callback)));
    }
}

impl Default for RepeatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
fn start_interval(period: Duration, callback: impl FnMut() + 'static) -> IntervalHandle {
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::callback::Interval::new(millis, callback)
}

#[cfg(not(feature = "hydrate"))]
fn start_interval(period: Duration, callback: impl FnMut() + 'static) -> IntervalHandle {
    let _ = (period, callback);
}

/// Run `callback` once after `delay_ms`.
///
/// There is no cancellation handle. Callers must make the callback a no-op
/// once their state is gone (e.g. via `try_update` on a disposed signal).
pub fn run_after(delay_ms: u32, callback: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            callback();
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::num::NonZeroUsize;
    use std::rc::Rc;

    use crate::core::RotationController;

    /// Stand-in for an interval: counts how many times it was dropped
    struct CountedHandle {
        id: u32,
        drops: Rc<Cell<u32>>,
    }

    impl Drop for CountedHandle {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn counter() -> Rc<Cell<u32>> {
        Rc::new(Cell::new(0))
    }

    fn handle(id: u32, drops: &Rc<Cell<u32>>) -> CountedHandle {
        CountedHandle {
            id,
            drops: Rc::clone(drops),
        }
    }

    #[test]
    fn test_playing_arms_slot() {
        let drops = counter();
        let mut slot = TimerSlot::new();
        let rotation = RotationController::new(NonZeroUsize::new(5).unwrap());

        slot.sync(rotation.mode(), || handle(1, &drops));

        assert!(slot.is_armed());
        assert_eq!(slot.times_armed(), 1);
        assert_eq!(drops.get(), 0);
    }

    #[test]
    fn test_pause_disarms_slot() {
        let drops = counter();
        let mut slot = TimerSlot::new();
        let mut rotation = RotationController::new(NonZeroUsize::new(5).unwrap());
        slot.sync(rotation.mode(), || handle(1, &drops));

        rotation.pause();
        slot.sync(rotation.mode(), || handle(2, &drops));

        assert!(!slot.is_armed());
        assert_eq!(drops.get(), 1);
        // No new handle was created while paused
        assert_eq!(slot.times_armed(), 1);
    }

    #[test]
    fn test_resume_installs_fresh_handle() {
        let drops = counter();
        let mut slot = TimerSlot::new();
        let mut rotation = RotationController::new(NonZeroUsize::new(5).unwrap());
        slot.sync(rotation.mode(), || handle(1, &drops));

        rotation.pause();
        slot.sync(rotation.mode(), || handle(2, &drops));
        rotation.resume();
        slot.sync(rotation.mode(), || handle(3, &drops));

        assert!(slot.is_armed());
        assert_eq!(slot.handle.as_ref().map(|h| h.id), Some(3));
        assert_eq!(slot.times_armed(), 2);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_rearm_drops_previous_handle() {
        let drops = counter();
        let mut slot = TimerSlot::new();

        slot.arm(handle(1, &drops));
        slot.arm(handle(2, &drops));

        assert_eq!(drops.get(), 1);
        assert_eq!(slot.handle.as_ref().map(|h| h.id), Some(2));
    }

    #[test]
    fn test_owner_cleanup_drops_handle() {
        let drops = counter();
        let owner = Owner::new();
        let slot = owner.with(owned_slot::<CountedHandle>);

        slot.update_value(|slot| slot.arm(handle(1, &drops)));
        assert_eq!(drops.get(), 0);

        owner.cleanup();
        assert_eq!(drops.get(), 1);
    }
}
