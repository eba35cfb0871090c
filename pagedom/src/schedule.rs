use std::time::Duration;

use crate::page::Page;

/// Fixed cadence of the scheduler. Every pending counter and timer is
/// advanced in the same tick, so the whole set can be cancelled as a
/// unit instead of leaking per-element timers.
pub const TICK: Duration = Duration::from_millis(30);

/// Number of equal steps a counter takes from zero to its final value.
pub const COUNTER_STEPS: u32 = 50;

#[derive(Debug)]
struct CounterAnim {
    target: String,
    final_value: i64,
    current: f64,
    step: f64,
    done: bool,
}

struct Timer {
    remaining: Duration,
    action: Box<dyn FnOnce(&mut Page)>,
}

/// Coordinated tick scheduler for all timed page work.
#[derive(Default)]
pub struct Scheduler {
    counters: Vec<CounterAnim>,
    timers: Vec<Timer>,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scheduler({} counters, {} timers)",
            self.counters.len(),
            self.timers.len()
        )
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate the element's text from zero to `final_value` in
    /// [`COUNTER_STEPS`] equal increments, one per tick. Intermediate
    /// frames show the floored running value; the last frame snaps to
    /// the exact final value.
    pub fn animate_counter(&mut self, target: &str, final_value: i64) {
        let step = final_value as f64 / f64::from(COUNTER_STEPS);
        log::debug!("[schedule] counter for {target}: 0 -> {final_value} (step {step})");
        self.counters.push(CounterAnim {
            target: target.to_string(),
            final_value,
            current: 0.0,
            step,
            done: false,
        });
    }

    /// Run a one-shot action once `delay` has elapsed.
    pub fn after(&mut self, delay: Duration, action: impl FnOnce(&mut Page) + 'static) {
        self.timers.push(Timer {
            remaining: delay,
            action: Box::new(action),
        });
    }

    pub fn has_pending(&self) -> bool {
        !self.counters.is_empty() || !self.timers.is_empty()
    }

    /// Drop every pending counter and timer, e.g. when navigating away.
    pub fn cancel_all(&mut self) {
        self.counters.clear();
        self.timers.clear();
    }

    pub(crate) fn tick(&mut self, page: &mut Page) {
        for counter in &mut self.counters {
            counter.current += counter.step;
            let Some(stat) = page.document.find_mut(&counter.target) else {
                // Element left the tree mid-animation; retire the counter.
                counter.done = true;
                continue;
            };
            if counter.current >= counter.final_value as f64 {
                stat.set_text(counter.final_value.to_string());
                counter.done = true;
            } else {
                stat.set_text((counter.current.floor() as i64).to_string());
            }
        }
        self.counters.retain(|c| !c.done);

        let mut i = 0;
        while i < self.timers.len() {
            self.timers[i].remaining = self.timers[i].remaining.saturating_sub(TICK);
            if self.timers[i].remaining.is_zero() {
                let timer = self.timers.remove(i);
                (timer.action)(page);
            } else {
                i += 1;
            }
        }
    }

    /// Fold another scheduler's pending work into this one.
    pub(crate) fn absorb(&mut self, other: Scheduler) {
        self.counters.extend(other.counters);
        self.timers.extend(other.timers);
    }
}
