//! Navigation triggers from buttons, keys, pagination, timer and resize.

use tracing::debug;

use crate::carousel::Carousel;
use crate::stage::Stage;

/// Input that may move the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Next button
    Next,
    /// Previous button
    Prev,
    /// Direct index navigation
    Goto(usize),
    /// Direct jump by a signed number of items
    Move(isize),
    /// Key press, by key code
    Key(u16),
    /// Pagination entry clicked
    Paginate(usize),
    /// Viewport resized
    Resize,
    /// Auto-advance timer fired
    Tick,
}

impl<S: Stage> Carousel<S> {
    /// Route a trigger to its navigation operation. Returns whether a
    /// transition started.
    pub fn dispatch(&mut self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Next | Trigger::Tick => self.next(),
            Trigger::Prev => self.prev(),
            Trigger::Goto(index) | Trigger::Paginate(index) => self.goto_index(index),
            Trigger::Move(delta) => self.move_by(delta),
            Trigger::Key(code) => self.key(code),
            Trigger::Resize => {
                self.resize();
                false
            }
        }
    }

    fn key(&mut self, code: u16) -> bool {
        if !self.config.keys {
            return false;
        }

        let mut started = false;
        if self.config.prev_key.contains(code) {
            started |= self.prev();
        }
        if self.config.next_key.contains(code) {
            started |= self.next();
        }
        if !started {
            debug!("Key {} did not start a transition", code);
        }
        started
    }
}
