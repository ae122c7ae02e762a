//! Deterministic scheduler driven by a virtual clock.
//!
//! Nothing fires until the test calls [`ManualScheduler::advance`]. Timers due
//! at or before the new time fire in due order (ties in scheduling order).
//!
//! # Example
//!
//! ```ignore
//! let scheduler = ManualScheduler::new();
//! scheduler.schedule_once(Duration::from_millis(2000), task)?;
//! scheduler.advance(Duration::from_millis(1999)); // not yet
//! scheduler.advance(Duration::from_millis(1));    // fires
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use super::TaskSlot;
use crate::ports::{ScheduledTask, Scheduler, SchedulerError, TimerHandle};

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<(Duration, u64), TaskSlot>,
}

/// Scheduler whose time only moves when told to.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Arc<Mutex<Timeline>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Timers scheduled and neither fired nor cancelled.
    pub fn pending_count(&self) -> usize {
        self.lock()
            .pending
            .values()
            .filter(|slot| !slot.is_empty())
            .count()
    }

    /// Moves the clock forward by `by`, firing every timer that comes due.
    ///
    /// Callbacks run without the internal lock held, so they may schedule
    /// further timers; those fire too if they fall within the window.
    pub fn advance(&self, by: Duration) {
        let target = self.lock().now + by;

        loop {
            let due = {
                let mut timeline = self.lock();
                let next = timeline
                    .pending
                    .keys()
                    .next()
                    .copied()
                    .filter(|(at, _)| *at <= target);
                match next {
                    Some(key) => {
                        timeline.now = key.0;
                        timeline.pending.remove(&key)
                    }
                    None => None,
                }
            };

            match due {
                Some(slot) => slot.fire(),
                None => break,
            }
        }

        self.lock().now = target;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Timeline> {
        self.timeline.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(
        &self,
        delay: Duration,
        task: ScheduledTask,
    ) -> Result<Box<dyn TimerHandle>, SchedulerError> {
        let slot = TaskSlot::new(task);
        let mut timeline = self.lock();
        let key = (timeline.now + delay, timeline.next_seq);
        timeline.next_seq += 1;
        timeline.pending.insert(key, slot.clone());

        Ok(Box::new(ManualTimerHandle { slot }))
    }
}

struct ManualTimerHandle {
    slot: TaskSlot,
}

impl TimerHandle for ManualTimerHandle {
    fn cancel(&self) {
        drop(self.slot.take());
    }

    fn is_finished(&self) -> bool {
        self.slot.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> ScheduledTask) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let make = {
            let log = Arc::clone(&log);
            move |label: &'static str| -> ScheduledTask {
                let log = Arc::clone(&log);
                Box::new(move || log.lock().unwrap().push(label))
            }
        };
        (log, make)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_exactly_at_due_time() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule_once(ms(2000), task("clear")).unwrap();

        scheduler.advance(ms(1999));
        assert!(log.lock().unwrap().is_empty());

        scheduler.advance(ms(1));
        assert_eq!(*log.lock().unwrap(), vec!["clear"]);
        assert_eq!(scheduler.now(), ms(2000));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn fires_in_due_order_then_schedule_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule_once(ms(30), task("c")).unwrap();
        scheduler.schedule_once(ms(10), task("a")).unwrap();
        scheduler.schedule_once(ms(30), task("d")).unwrap();
        scheduler.schedule_once(ms(20), task("b")).unwrap();

        scheduler.advance(ms(100));
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn cancelled_timer_is_skipped() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        let handle = scheduler.schedule_once(ms(10), task("gone")).unwrap();
        assert_eq!(scheduler.pending_count(), 1);
        handle.cancel();
        assert!(handle.is_finished());
        assert_eq!(scheduler.pending_count(), 0);

        scheduler.advance(ms(50));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn callbacks_may_schedule_more_work() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let follow_up = task("second");

        let inner = scheduler.clone();
        let first: ScheduledTask = Box::new(move || {
            inner.schedule_once(ms(5), follow_up).unwrap();
        });
        scheduler.schedule_once(ms(10), first).unwrap();

        scheduler.advance(ms(14));
        assert!(log.lock().unwrap().is_empty());
        scheduler.advance(ms(1));
        assert_eq!(*log.lock().unwrap(), vec!["second"]);
    }
}
