//! Timers and cancellable scheduled tasks.
//!
//! A [`ScheduledTask`] owns at most one pending callback. Scheduling again
//! supersedes whatever was pending, and `cancel` drops it. Superseded
//! timers still wake up but find their ticket stale and do nothing.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use super::platform;

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u64::from(u32::MAX)) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Proof that a callback was scheduled under a particular generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct ScheduledTask {
    generation: Rc<Cell<u64>>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate anything pending and hand out a fresh ticket.
    pub fn arm(&self) -> Ticket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }

    pub fn cancel(&self) {
        self.arm();
    }

    /// Run `callback` after `delay_ms` unless superseded or cancelled first.
    pub fn schedule(&self, delay_ms: u64, callback: impl FnOnce() + 'static) {
        let pending = self.delayed(delay_ms, callback);
        platform::spawn_future(async move {
            pending.await;
        });
    }

    /// Run `tick` every `period_ms` until superseded or cancelled.
    pub fn schedule_repeating(&self, period_ms: u64, tick: impl FnMut() + 'static) {
        let pending = self.repeating(period_ms, tick);
        platform::spawn_future(pending);
    }

    /// The future behind [`schedule`](Self::schedule). Arms immediately;
    /// resolves to whether the callback ran.
    pub fn delayed(
        &self,
        delay_ms: u64,
        callback: impl FnOnce() + 'static,
    ) -> impl Future<Output = bool> + 'static {
        let ticket = self.arm();
        let task = self.clone();
        async move {
            sleep_ms(delay_ms).await;
            if task.is_current(ticket) {
                callback();
                true
            } else {
                false
            }
        }
    }

    fn repeating(
        &self,
        period_ms: u64,
        mut tick: impl FnMut() + 'static,
    ) -> impl Future<Output = ()> + 'static {
        let ticket = self.arm();
        let task = self.clone();
        async move {
            loop {
                sleep_ms(period_ms).await;
                if !task.is_current(ticket) {
                    break;
                }
                tick();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearming_invalidates_previous_ticket() {
        let task = ScheduledTask::new();
        let first = task.arm();
        assert!(task.is_current(first));
        let second = task.arm();
        assert!(!task.is_current(first));
        assert!(task.is_current(second));
        task.cancel();
        assert!(!task.is_current(second));
    }

    #[test]
    fn clones_share_generation() {
        let task = ScheduledTask::new();
        let ticket = task.arm();
        task.clone().cancel();
        assert!(!task.is_current(ticket));
    }

    #[tokio::test]
    async fn reschedule_replaces_pending() {
        let task = ScheduledTask::new();
        let fired = Rc::new(Cell::new(0u32));

        let f1 = fired.clone();
        let first = task.delayed(30, move || f1.set(f1.get() + 1));
        let f2 = fired.clone();
        let second = task.delayed(10, move || f2.set(f2.get() + 10));

        let (first_ran, second_ran) = futures::join!(first, second);
        assert!(!first_ran);
        assert!(second_ran);
        assert_eq!(fired.get(), 10);
    }

    #[tokio::test]
    async fn cancelled_task_never_fires() {
        let task = ScheduledTask::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let pending = task.delayed(5, move || flag.set(true));
        task.cancel();
        assert!(!pending.await);
        assert!(!fired.get());
    }
}
