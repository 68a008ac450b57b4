use std::cell::{ Cell, RefCell };
use std::collections::HashSet;
use std::rc::{ Rc, Weak };

use futures::channel::oneshot;

use crate::error::{ AnimationError, DeliveryError };
use crate::services::{ ContactMessage, EmailSender };
use crate::utils::scheduler::{ FrameScheduler, Subscription, Tick };
use crate::utils::SectionId;

#[derive(Default)]
struct Slots {
    next_id: usize,
    clock: f64,
    ticks: Vec<(usize, f64, Tick)>,
}

/// Frame scheduler driven by hand. Every live subscription is tracked so a
/// test can assert nothing was left running.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    slots: Rc<RefCell<Slots>>,
}

struct Release {
    id: usize,
    slots: Weak<RefCell<Slots>>,
}

impl Drop for Release {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().ticks.retain(|(id, _, _)| *id != self.id);
        }
    }
}

impl ManualScheduler {
    pub fn active(&self) -> usize {
        self.slots.borrow().ticks.len()
    }

    pub fn advance(&self, ms: f64) {
        let mut slots = self.slots.borrow_mut();
        slots.clock += ms;
        let now = slots.clock;
        for (_, started, tick) in slots.ticks.iter_mut() {
            tick(now - *started);
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn every(&self, _period_ms: u32, tick: Tick) -> Result<Subscription, AnimationError> {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        let started = slots.clock;
        slots.ticks.push((id, started, tick));
        Ok(Subscription::new(Release { id, slots: Rc::downgrade(&self.slots) }))
    }
}

/// Scheduler that refuses to run anything.
#[derive(Clone, Copy, Default)]
pub struct BrokenScheduler;

impl FrameScheduler for BrokenScheduler {
    fn every(&self, _period_ms: u32, _tick: Tick) -> Result<Subscription, AnimationError> {
        Err(AnimationError::Scheduler("no animation frames in this environment".to_string()))
    }
}

/// Viewport double: knows which anchors exist and records every reveal.
#[derive(Clone, Default)]
pub struct RecordingViewport {
    present: HashSet<String>,
    revealed: Rc<RefCell<Vec<String>>>,
}

impl RecordingViewport {
    pub fn with_all_sections() -> Self {
        Self {
            present: SectionId::ALL.iter().map(|section| section.anchor().to_string()).collect(),
            revealed: Rc::default(),
        }
    }

    pub fn without(mut self, anchor: &str) -> Self {
        self.present.remove(anchor);
        self
    }

    pub fn revealed(&self) -> Vec<String> {
        self.revealed.borrow().clone()
    }
}

impl crate::utils::scroll::Viewport for RecordingViewport {
    fn reveal(&self, anchor: &str) -> bool {
        if !self.present.contains(anchor) {
            return false;
        }
        self.revealed.borrow_mut().push(anchor.to_string());
        true
    }
}

/// Email collaborator double with a fixed outcome, optionally held back
/// until the test releases it.
pub struct ScriptedSender {
    outcome: Result<(), DeliveryError>,
    gate: RefCell<Option<oneshot::Receiver<Result<(), DeliveryError>>>>,
    calls: Cell<usize>,
    last: RefCell<Option<ContactMessage>>,
}

impl ScriptedSender {
    pub fn succeeding() -> Self {
        Self::with_outcome(Ok(()))
    }

    pub fn failing(error: DeliveryError) -> Self {
        Self::with_outcome(Err(error))
    }

    pub fn gated() -> (Self, oneshot::Sender<Result<(), DeliveryError>>) {
        let (release, gate) = oneshot::channel();
        let sender = Self::with_outcome(Ok(()));
        *sender.gate.borrow_mut() = Some(gate);
        (sender, release)
    }

    fn with_outcome(outcome: Result<(), DeliveryError>) -> Self {
        Self { outcome, gate: RefCell::new(None), calls: Cell::new(0), last: RefCell::new(None) }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_message(&self) -> Option<ContactMessage> {
        self.last.borrow().clone()
    }
}

impl EmailSender for ScriptedSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(message.clone());

        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(gate) => gate.await.unwrap_or_else(|_| Err(DeliveryError::Network("gate dropped".to_string()))),
            None => self.outcome.clone(),
        }
    }
}
