//! Leptos bindings: feed a route id signal into the state machines and run
//! their scheduled steps on browser timers.
//!
//! The effects only forward ids; the navigate/sleep/commit sequence lives in
//! `step_stack`/`finish_stack` and their retention twins, which take the
//! sleep as a parameter.

use std::future::Future;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::movement::{Movement, PanelSlot};
use crate::retained::{RetainCommand, RetainedId};
use crate::stack::{Generation, PageStack, StackCommand};

/// Reactive view of a running page stack
#[derive(Clone, Copy)]
pub struct PageStackSignals {
    pub movement: Memo<Movement>,
    pub settled: Memo<Option<u32>>,
    /// Ids on screen with their slots; key by id to keep panels mounted
    pub panels: Memo<Vec<(u32, PanelSlot)>>,
}

fn timeout_ms(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

fn browser_sleep(delay: Duration) -> TimeoutFuture {
    TimeoutFuture::new(timeout_ms(delay))
}

/// Feed `target` into the stack. Returns the commit to run later, if any.
fn step_stack(stack: RwSignal<PageStack>, target: Option<u32>) -> Option<(Generation, Duration)> {
    match stack.try_update(|stack| stack.navigate(target))? {
        StackCommand::ScheduleCommit { generation, delay } => Some((generation, delay)),
        StackCommand::Settled => None,
    }
}

/// Wait out the slide, then settle. The owning view may be gone by then.
async fn finish_stack<F, Fut>(stack: RwSignal<PageStack>, generation: Generation, delay: Duration, sleep: F)
where
    F: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    sleep(delay).await;
    stack.try_update(|stack| stack.commit(generation));
}

fn step_retained(retained: RwSignal<RetainedId>, shown: Option<u32>) -> Option<(Generation, Duration)> {
    match retained.try_update(|retained| retained.show(shown))? {
        RetainCommand::ScheduleClear { generation, delay } => Some((generation, delay)),
        RetainCommand::Kept => None,
    }
}

async fn finish_retained<F, Fut>(retained: RwSignal<RetainedId>, generation: Generation, delay: Duration, sleep: F)
where
    F: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    sleep(delay).await;
    retained.try_update(|retained| retained.clear(generation));
}

/// Drive a [`PageStack`] from `id`
pub fn use_page_stack(id: Signal<Option<u32>>, delay: Duration) -> PageStackSignals {
    let stack = RwSignal::new(PageStack::new(id.get_untracked(), delay));

    Effect::new(move |_| {
        let target = id.get();
        log::debug!("route id changed {:?}", target);
        if let Some((generation, delay)) = step_stack(stack, target) {
            spawn_local(finish_stack(stack, generation, delay, browser_sleep));
        }
    });

    PageStackSignals {
        movement: Memo::new(move |_| stack.with(|s| s.movement())),
        settled: Memo::new(move |_| stack.with(|s| s.settled())),
        panels: Memo::new(move |_| stack.with(|s| s.visible_panels())),
    }
}

/// Follow `id`, but hold on to the last `Some` for `delay` after it goes away
pub fn use_retained_id(id: Signal<Option<u32>>, delay: Duration) -> Memo<Option<u32>> {
    let retained = RwSignal::new(RetainedId::new(id.get_untracked(), delay));

    Effect::new(move |_| {
        if let Some((generation, delay)) = step_retained(retained, id.get()) {
            spawn_local(finish_retained(retained, generation, delay, browser_sleep));
        }
    });

    Memo::new(move |_| retained.with(|r| r.current()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{ready, Ready};
    use std::pin::pin;
    use std::sync::{Arc, Mutex};
    use std::task::{Context, Poll, Wake, Waker};

    const DELAY: Duration = Duration::from_millis(400);

    struct NoopWake;

    impl Wake for NoopWake {
        fn wake(self: Arc<Self>) {}
    }

    /// Run a future whose sleeps resolve immediately
    fn run<F: Future<Output = ()>>(fut: F) {
        let waker = Waker::from(Arc::new(NoopWake));
        let mut cx = Context::from_waker(&waker);
        let mut fut = pin!(fut);
        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(()));
    }

    fn recording_sleep(log: Arc<Mutex<Vec<Duration>>>) -> impl FnOnce(Duration) -> Ready<()> {
        move |delay| {
            log.lock().unwrap().push(delay);
            ready(())
        }
    }

    #[test]
    fn test_stack_settles_after_one_delay() {
        let stack = RwSignal::new(PageStack::new(Some(3), DELAY));
        let (generation, delay) = step_stack(stack, Some(5)).expect("slide scheduled");
        assert_eq!(stack.with_untracked(|s| s.movement()), Movement::Next);

        let slept = Arc::new(Mutex::new(Vec::new()));
        run(finish_stack(stack, generation, delay, recording_sleep(slept.clone())));

        assert_eq!(*slept.lock().unwrap(), vec![DELAY]);
        assert_eq!(stack.with_untracked(|s| s.movement()), Movement::Static);
        assert_eq!(stack.with_untracked(|s| s.settled()), Some(5));
    }

    #[test]
    fn test_superseded_timer_does_not_settle() {
        let stack = RwSignal::new(PageStack::new(Some(5), DELAY));
        let (first, delay) = step_stack(stack, Some(4)).expect("slide scheduled");
        let (second, _) = step_stack(stack, Some(2)).expect("slide scheduled");

        run(finish_stack(stack, first, delay, |_| ready(())));
        assert_eq!(stack.with_untracked(|s| s.movement()), Movement::Prev);
        assert_eq!(stack.with_untracked(|s| s.settled()), Some(5));

        run(finish_stack(stack, second, delay, |_| ready(())));
        assert_eq!(stack.with_untracked(|s| s.movement()), Movement::Static);
        assert_eq!(stack.with_untracked(|s| s.settled()), Some(2));
    }

    #[test]
    fn test_index_route_schedules_nothing() {
        let stack = RwSignal::new(PageStack::new(Some(5), DELAY));
        assert_eq!(step_stack(stack, None), None);
        assert_eq!(stack.with_untracked(|s| s.movement()), Movement::Static);
        assert_eq!(stack.with_untracked(|s| s.settled()), None);
    }

    #[test]
    fn test_retained_id_clears_after_delay() {
        let retained = RwSignal::new(RetainedId::new(Some(5), DELAY));
        let (generation, delay) = step_retained(retained, None).expect("clear scheduled");
        assert_eq!(retained.with_untracked(|r| r.current()), Some(5));

        run(finish_retained(retained, generation, delay, |_| ready(())));
        assert_eq!(retained.with_untracked(|r| r.current()), None);
    }
}
