//! Skill notifications
//!
//! Fire-and-forget events for presentation and audio layers. Every mutator
//! also returns the same data, so a sink is optional.

use std::fmt;
use std::sync::mpsc::Sender;

use crate::combat::{ActiveBuff, SkillOutcome};
use crate::progression::SkillLeveled;

/// Something that happened to a character's skills
#[derive(Debug, Clone, PartialEq)]
pub enum SkillEvent {
    SkillUsed { skill_id: String, outcome: SkillOutcome },
    BuffApplied(ActiveBuff),
    BuffExpired(ActiveBuff),
    SkillLeveled(SkillLeveled),
    SkillsReset { sp_refunded: u32 },
    SkillTreeLoaded { skills: usize },
}

/// Receiver of skill events
pub trait EventSink {
    fn emit(&mut self, event: SkillEvent);
}

impl EventSink for Sender<SkillEvent> {
    fn emit(&mut self, event: SkillEvent) {
        // A dropped receiver just means nobody is listening
        let _ = self.send(event);
    }
}

/// Sink backed by a closure
pub struct CallbackSink<F: FnMut(SkillEvent)>(pub F);

impl<F: FnMut(SkillEvent)> EventSink for CallbackSink<F> {
    fn emit(&mut self, event: SkillEvent) {
        (self.0)(event)
    }
}

/// Optional sink owned by a ledger or runtime
#[derive(Default)]
pub(crate) struct Notifier {
    sink: Option<Box<dyn EventSink>>,
}

impl Notifier {
    pub(crate) fn new(sink: Option<Box<dyn EventSink>>) -> Self {
        Self { sink }
    }

    pub(crate) fn set(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    pub(crate) fn emit(&mut self, event: SkillEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink.emit(event);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier").field("attached", &self.sink.is_some()).finish()
    }
}
