//! Page stack state machine.
//!
//! A route change to another item starts a slide (`Next` or `Prev`) and
//! schedules a commit. The commit settles the new id and snaps back to
//! `Static`. Every change bumps the generation, so a commit scheduled for an
//! older change is ignored when it fires.

use std::time::Duration;

use crate::movement::{Movement, PanelSlot};

/// Token identifying which change a scheduled commit belongs to
pub type Generation = u64;

/// What the caller must do after feeding a change into the stack
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackCommand {
    /// The stack already settled; nothing to schedule
    Settled,
    /// Call [`PageStack::commit`] with `generation` once `delay` has elapsed
    ScheduleCommit { generation: Generation, delay: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingCommit {
    target: u32,
    generation: Generation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageStack {
    settled: Option<u32>,
    movement: Movement,
    pending: Option<PendingCommit>,
    generation: Generation,
    delay: Duration,
}

impl PageStack {
    pub fn new(initial: Option<u32>, delay: Duration) -> Self {
        Self {
            settled: initial,
            movement: Movement::Static,
            pending: None,
            generation: 0,
            delay,
        }
    }

    /// Feed a new route id into the stack
    pub fn navigate(&mut self, target: Option<u32>) -> StackCommand {
        match (self.settled, target) {
            (Some(from), Some(to)) if from != to => {
                self.generation += 1;
                // Direction is relative to what is on screen, not to a pending target.
                self.movement = Movement::between(from, to);
                self.pending = Some(PendingCommit {
                    target: to,
                    generation: self.generation,
                });
                log::debug!("page stack sliding {:?} from {} to {}", self.movement, from, to);
                StackCommand::ScheduleCommit {
                    generation: self.generation,
                    delay: self.delay,
                }
            }
            _ => {
                self.settle(target);
                StackCommand::Settled
            }
        }
    }

    /// Finish the slide started by `generation`. Returns false for stale commits.
    pub fn commit(&mut self, generation: Generation) -> bool {
        match self.pending {
            Some(pending) if pending.generation == generation => {
                log::debug!("page stack settled at {} after animation", pending.target);
                self.settled = Some(pending.target);
                self.movement = Movement::Static;
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    fn settle(&mut self, target: Option<u32>) {
        self.generation += 1;
        self.settled = target;
        self.movement = Movement::Static;
        self.pending = None;
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn settled(&self) -> Option<u32> {
        self.settled
    }

    pub fn pending_target(&self) -> Option<u32> {
        self.pending.map(|p| p.target)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Ids rendered in the previous, current and next slots
    pub fn panels(&self) -> [Option<u32>; 3] {
        match self.settled {
            Some(id) => [
                id.checked_sub(1).filter(|prev| *prev > 0),
                Some(id),
                id.checked_add(1),
            ],
            None => [None; 3],
        }
    }

    /// Ids on screen with their slots, in left-to-right order
    pub fn visible_panels(&self) -> Vec<(u32, PanelSlot)> {
        let [prev, current, next] = self.panels();
        [(prev, PanelSlot::Prev), (current, PanelSlot::Current), (next, PanelSlot::Next)]
            .into_iter()
            .filter_map(|(id, slot)| id.map(|id| (id, slot)))
            .collect()
    }
}
