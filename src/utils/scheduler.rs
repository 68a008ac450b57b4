use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::animation::Animated;
use crate::error::AnimationError;

/// ~30 frames per second is plenty for slow color fades.
pub const FRAME_INTERVAL_MS: u32 = 33;

pub type Tick = Box<dyn FnMut(f64)>;

/// Keeps a repeating tick alive. Dropping it cancels the tick.
pub struct Subscription {
    _guard: Box<dyn Any>,
}

impl Subscription {
    pub fn new(guard: impl Any) -> Self {
        Self { _guard: Box::new(guard) }
    }
}

/// Runs `tick` every `period_ms` with the milliseconds elapsed since the
/// subscription started.
pub trait FrameScheduler {
    fn every(&self, period_ms: u32, tick: Tick) -> Result<Subscription, AnimationError>;
}

/// Explicit cancel handle for one running animation.
pub struct AnimationHandle {
    subscription: Option<Subscription>,
}

impl AnimationHandle {
    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn cancel(&mut self) {
        self.subscription.take();
    }
}

pub fn start<A>(
    animation: A,
    scheduler: &dyn FrameScheduler,
    mut on_frame: impl FnMut(A::Value) + 'static
) -> Result<AnimationHandle, AnimationError>
    where A: Animated + 'static
{
    let subscription = scheduler.every(
        FRAME_INTERVAL_MS,
        Box::new(move |elapsed| on_frame(animation.sample(elapsed)))
    )?;
    Ok(AnimationHandle { subscription: Some(subscription) })
}

struct TaskGuard(Task);

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Browser scheduler: a Dioxus task sleeping on a timer between frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskScheduler;

impl FrameScheduler for TaskScheduler {
    fn every(&self, period_ms: u32, mut tick: Tick) -> Result<Subscription, AnimationError> {
        if period_ms == 0 {
            return Err(AnimationError::Scheduler("frame period must be positive".to_string()));
        }
        let task = spawn(async move {
            let started = js_sys::Date::now();
            loop {
                TimeoutFuture::new(period_ms).await;
                tick(js_sys::Date::now() - started);
            }
        });
        Ok(Subscription::new(TaskGuard(task)))
    }
}

/// Scheduler shared through context; tests swap in a manual one.
#[derive(Clone)]
pub struct SchedulerHandle(pub Rc<dyn FrameScheduler>);

impl Default for SchedulerHandle {
    fn default() -> Self {
        Self(Rc::new(TaskScheduler))
    }
}

/// Starts `build`'s animation for the lifetime of the calling component.
/// Returns the error instead when it cannot start so the caller can fall
/// back to a static render.
pub fn use_animation<A>(
    build: impl FnOnce() -> Result<A, AnimationError>
) -> Result<ReadOnlySignal<A::Value>, AnimationError>
    where A: Animated + 'static
{
    let scheduler = try_use_context::<SchedulerHandle>().unwrap_or_default();

    let running = use_hook(move || {
        let started = build().and_then(|animation| {
            let mut frame = Signal::new(animation.sample(0.0));
            let handle = start(animation, scheduler.0.as_ref(), move |value| {
                if let Ok(mut slot) = frame.try_write() {
                    *slot = value;
                }
            })?;
            Ok((frame, Rc::new(RefCell::new(handle))))
        });
        if let Err(err) = &started {
            log::error!("Animation error: {}", err);
        }
        started
    });

    let teardown = running.clone();
    use_drop(move || {
        if let Ok((_, handle)) = teardown {
            handle.borrow_mut().cancel();
        }
    });

    running.map(|(frame, _)| ReadOnlySignal::new(frame))
}
