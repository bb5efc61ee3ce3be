//! Keeps the last shown id alive while the detail view slides out.

use std::time::Duration;

use crate::stack::Generation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetainCommand {
    Kept,
    /// Call [`RetainedId::clear`] with `generation` once `delay` has elapsed
    ScheduleClear { generation: Generation, delay: Duration },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetainedId {
    current: Option<u32>,
    pending_clear: Option<Generation>,
    generation: Generation,
    delay: Duration,
}

impl RetainedId {
    pub fn new(initial: Option<u32>, delay: Duration) -> Self {
        Self {
            current: initial,
            pending_clear: None,
            generation: 0,
            delay,
        }
    }

    pub fn show(&mut self, id: Option<u32>) -> RetainCommand {
        self.generation += 1;
        match id {
            Some(id) => {
                self.current = Some(id);
                self.pending_clear = None;
                RetainCommand::Kept
            }
            None if self.current.is_some() => {
                self.pending_clear = Some(self.generation);
                RetainCommand::ScheduleClear {
                    generation: self.generation,
                    delay: self.delay,
                }
            }
            None => RetainCommand::Kept,
        }
    }

    /// Drop the retained id unless something was shown since `generation`.
    pub fn clear(&mut self, generation: Generation) -> bool {
        if self.pending_clear == Some(generation) {
            self.current = None;
            self.pending_clear = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<u32> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(400);

    #[test]
    fn test_show_keeps_id_immediately() {
        let mut retained = RetainedId::new(None, DELAY);
        assert_eq!(retained.show(Some(3)), RetainCommand::Kept);
        assert_eq!(retained.current(), Some(3));
    }

    #[test]
    fn test_hiding_clears_after_delay() {
        let mut retained = RetainedId::new(Some(3), DELAY);
        let RetainCommand::ScheduleClear { generation, delay } = retained.show(None) else {
            panic!("expected a scheduled clear");
        };
        assert_eq!(delay, DELAY);
        // Still visible while the detail view slides away.
        assert_eq!(retained.current(), Some(3));

        assert!(retained.clear(generation));
        assert_eq!(retained.current(), None);
    }

    #[test]
    fn test_reopening_before_clear_keeps_new_id() {
        let mut retained = RetainedId::new(Some(3), DELAY);
        let RetainCommand::ScheduleClear { generation, .. } = retained.show(None) else {
            panic!("expected a scheduled clear");
        };
        retained.show(Some(8));

        assert!(!retained.clear(generation));
        assert_eq!(retained.current(), Some(8));
    }

    #[test]
    fn test_hiding_when_empty_does_nothing() {
        let mut retained = RetainedId::new(None, DELAY);
        assert_eq!(retained.show(None), RetainCommand::Kept);
        assert_eq!(retained.current(), None);
    }
}
