//! Navigation operations: `next`, `prev`, `move_by`, `goto_index` and the
//! chain executor that serializes step-by-step jumps.

use tracing::debug;

use crate::carousel::{Carousel, Finish, Motion, Phase};
use crate::chain::Step;
use crate::events::Lifecycle;
use crate::stage::Stage;

impl<S: Stage> Carousel<S> {
    /// Slide one item forward. Returns whether a transition started.
    pub fn next(&mut self) -> bool {
        self.step(Step::Next, Finish::Sync)
    }

    /// Slide one item backward. Returns whether a transition started.
    pub fn prev(&mut self) -> bool {
        self.step(Step::Prev, Finish::Sync)
    }

    /// Jump `delta` items in one animation, using temporary clones to cover
    /// the edge of the strip. `±1` is a single step.
    pub fn move_by(&mut self, delta: isize) -> bool {
        let count = self.items.len();
        if count <= 1 || !self.is_initialized() {
            debug!("Skip call to move(), nothing to navigate");
            return false;
        }

        // Whole turns leave the index unchanged
        let delta = delta % count as isize;
        match delta {
            0 => return false,
            1 => return self.step(Step::Next, Finish::Sync),
            -1 => return self.step(Step::Prev, Finish::Sync),
            _ => {}
        }

        if self.is_animating() {
            debug!("Skip call to move(), already animating!");
            return false;
        }

        let distance = delta.unsigned_abs();
        let width = self.geometry.item_width;
        let len = self.strip.len();

        if delta > 0 {
            let tail = self.positions.last().unwrap_or(0.0);
            let heads: Vec<usize> = self.strip.iter().take(distance).map(|s| s.item).collect();
            for (i, item) in heads.into_iter().enumerate() {
                self.strip.push_clone_back(item, tail + (i + 1) as f64 * width);
            }
        } else {
            let head = self.positions.first().unwrap_or(0.0);
            let tails: Vec<usize> = (0..distance)
                .filter_map(|i| len.checked_sub(i + 1))
                .filter_map(|slot| self.strip.get(slot).map(|s| s.item))
                .collect();
            debug!("Cloning and prepending {} items to the beginning", tails.len());
            for (i, item) in tails.into_iter().enumerate() {
                self.strip.push_clone_front(item, head - (i + 1) as f64 * width);
            }
        }

        self.emit(Lifecycle::Before);

        let sign = if delta > 0 { -1.0 } else { 1.0 };
        let shift = sign * (distance - 1) as f64 * width;
        debug!("Move {}", delta);
        self.start(Motion::Jump(delta), Finish::Sync, shift);
        true
    }

    /// Navigate to `index` (clamped to the item range). Adjacent targets take
    /// a single step; distant ones either run a chain of steps or jump,
    /// depending on `step_by_step`.
    pub fn goto_index(&mut self, index: usize) -> bool {
        let count = self.items.len();
        if count <= 1 || !self.is_initialized() {
            return false;
        }

        let target = index.min(count - 1);

        if let Phase::Animating(flight) = &self.phase {
            return match (flight.finish, flight.motion) {
                (Finish::Chain, Motion::Step(step)) => {
                    self.reroute_chain(step, target);
                    true
                }
                _ => {
                    debug!("Skip call to goto_index({}), already animating!", index);
                    false
                }
            };
        }

        self.chain.clear();
        let delta = target as isize - self.current as isize;

        match delta {
            0 => false,
            1 => self.next(),
            -1 => self.prev(),
            _ if self.config.step_by_step => {
                let step = if delta > 0 { Step::Next } else { Step::Prev };
                self.chain.enqueue_many(step, delta.unsigned_abs());
                // Only the departing caption fades; intermediate steps stay quiet
                self.hide_caption();
                self.run_chain()
            }
            _ => self.move_by(delta),
        }
    }

    /// Replace the steps queued behind the in-flight chained `step` with the
    /// route from where that step lands to `target`
    fn reroute_chain(&mut self, step: Step, target: usize) {
        let count = self.items.len() as isize;
        let landing = match step {
            Step::Next => (self.current as isize + 1).rem_euclid(count),
            Step::Prev => (self.current as isize - 1).rem_euclid(count),
        };
        let delta = target as isize - landing;

        self.chain.clear();
        if delta != 0 {
            let step = if delta > 0 { Step::Next } else { Step::Prev };
            self.chain.enqueue_many(step, delta.unsigned_abs());
        }
        debug!(
            "Chain rerouted from {} to {}, {} steps pending",
            landing,
            target,
            self.chain.len()
        );
    }

    /// Pop and start the next chained step, or finish the chain with a
    /// single caption/indicator/after sync once it is empty.
    pub(crate) fn run_chain(&mut self) -> bool {
        match self.chain.pop() {
            Some(step) => {
                if self.step(step, Finish::Chain) {
                    true
                } else {
                    debug!("Chained {} rejected, abandoning chain", step);
                    self.chain.clear();
                    self.settle_ui();
                    false
                }
            }
            None => {
                self.settle_ui();
                false
            }
        }
    }

    fn step(&mut self, step: Step, finish: Finish) -> bool {
        if self.items.len() <= 1 || !self.is_initialized() {
            debug!("Skip call to {}(), nothing to navigate", step);
            return false;
        }
        if self.is_animating() {
            debug!("Skip call to {}() method, already animating!", step);
            return false;
        }

        self.emit(Lifecycle::Before);
        let shift = step.sign() * self.geometry.item_width;
        self.start(Motion::Step(step), finish, shift);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::SliderConfig;
    use crate::events::Lifecycle;
    use crate::item::Item;
    use crate::stage::{InstantStage, StageCall};
    use crate::Carousel;

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(i, format!("slide {}", i)).with_caption(format!("caption {}", i)))
            .collect()
    }

    fn carousel(n: usize, config: SliderConfig) -> Carousel<InstantStage> {
        let mut carousel = Carousel::new(items(n), config, InstantStage::new(200.0, 100.0));
        carousel.init();
        carousel
    }

    fn record(carousel: &mut Carousel<InstantStage>, kind: Lifecycle) -> Rc<RefCell<Vec<usize>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        carousel.on(kind, Box::new(move |index, _| sink.borrow_mut().push(index)));
        log
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut c = carousel(5, SliderConfig::default());
        assert!(c.prev());
        c.pump();
        assert_eq!(c.current_index(), 4);
        assert!(c.next());
        c.pump();
        assert!(c.next());
        c.pump();
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_second_request_while_animating_is_rejected() {
        let mut c = carousel(5, SliderConfig::default());
        let before = record(&mut c, Lifecycle::Before);
        let after = record(&mut c, Lifecycle::After);

        assert!(c.next());
        assert!(c.is_animating());
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.move_by(3));
        assert!(!c.goto_index(4));

        assert_eq!(c.pump(), 1);
        assert_eq!(c.current_index(), 1);
        assert_eq!(before.borrow().as_slice(), &[0]);
        assert_eq!(after.borrow().as_slice(), &[1]);
        assert_eq!(c.stage().animation_count(), 1);
    }

    #[test]
    fn test_step_restores_rest_positions() {
        let mut c = carousel(5, SliderConfig::default());
        let rest = c.positions().as_slice().to_vec();
        let order = c.strip().items();

        c.next();
        c.pump();
        assert_eq!(c.strip().items(), vec![4, 0, 1, 2, 3]);
        assert_eq!(c.stage().offsets(), rest.as_slice());

        c.prev();
        c.pump();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.strip().items(), order);
        assert_eq!(c.strip().offsets(), rest);
    }

    #[test]
    fn test_step_shifts_every_slot_by_item_width() {
        let mut c = carousel(5, SliderConfig::default());
        c.stage_mut().take_calls();
        c.next();
        let calls = c.stage_mut().take_calls();
        assert!(calls.contains(&StageCall::Animate {
            ticket: 0,
            tracks: 5,
            shift: -100.0
        }));
    }

    #[test]
    fn test_move_clones_and_retires() {
        let mut c = carousel(5, SliderConfig::default());
        let rest = c.positions().as_slice().to_vec();
        c.stage_mut().take_calls();

        assert!(c.move_by(3));
        // 3 clones appended while in flight
        assert_eq!(c.strip().len(), 8);
        assert_eq!(c.strip().clone_count(), 3);
        assert!(c.stage().calls().contains(&StageCall::Animate {
            ticket: 0,
            tracks: 8,
            shift: -200.0
        }));

        c.pump();
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.strip().len(), 5);
        assert_eq!(c.strip().clone_count(), 0);
        assert_eq!(c.strip().offsets(), rest);
        // centered slot holds the new current item
        assert_eq!(c.strip().slot_of(3), Some(2));
    }

    #[test]
    fn test_move_backward_normalizes_index() {
        let mut c = carousel(5, SliderConfig::default());
        assert!(c.move_by(-3));
        assert_eq!(c.strip().clone_count(), 3);
        // clones of the tail slots continue the ring backwards
        assert_eq!(&c.strip().items()[..3], &[0, 1, 2]);
        c.pump();
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.strip().slot_of(2), Some(2));
    }

    #[test]
    fn test_move_zero_and_whole_turns_are_noops() {
        let mut c = carousel(5, SliderConfig::default());
        assert!(!c.move_by(0));
        assert!(!c.move_by(5));
        assert!(!c.move_by(-10));
        assert!(!c.is_animating());
    }

    #[test]
    fn test_move_unit_delegates_to_step() {
        let mut c = carousel(5, SliderConfig::default());
        assert!(c.move_by(-1));
        assert_eq!(c.strip().clone_count(), 0);
        c.pump();
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn test_goto_step_by_step_runs_chain() {
        let config = SliderConfig {
            step_by_step: true,
            ..SliderConfig::default()
        };
        let mut c = carousel(5, config);
        let before = record(&mut c, Lifecycle::Before);
        let after = record(&mut c, Lifecycle::After);

        assert!(c.goto_index(3));
        assert_eq!(c.pending_steps(), 2);
        c.pump();

        assert_eq!(c.current_index(), 3);
        assert_eq!(before.borrow().as_slice(), &[0, 1, 2]);
        assert_eq!(after.borrow().as_slice(), &[3]);
        assert_eq!(c.stage().animation_count(), 3);
        assert!(!c.is_animating());
    }

    #[test]
    fn test_chain_hides_and_shows_caption_once() {
        let config = SliderConfig {
            step_by_step: true,
            navigation: Some(".pager".into()),
            ..SliderConfig::default()
        };
        let mut c = carousel(5, config);
        c.stage_mut().take_calls();

        c.goto_index(3);
        c.pump();

        let calls = c.stage_mut().take_calls();
        let hides: Vec<_> = calls
            .iter()
            .filter(|call| matches!(call, StageCall::HideCaption(_)))
            .collect();
        let shows: Vec<_> = calls
            .iter()
            .filter(|call| matches!(call, StageCall::ShowCaption(_)))
            .collect();
        assert_eq!(hides, vec![&StageCall::HideCaption(0)]);
        assert_eq!(shows, vec![&StageCall::ShowCaption(3)]);
        assert_eq!(calls.last(), Some(&StageCall::MarkIndicator(3)));
    }

    fn held(n: usize, config: SliderConfig) -> Carousel<InstantStage> {
        let mut carousel = Carousel::new(items(n), config, InstantStage::holding(200.0, 100.0));
        carousel.init();
        carousel
    }

    fn drain(c: &mut Carousel<InstantStage>) {
        while c.is_animating() {
            c.stage_mut().release();
            c.pump();
        }
    }

    #[test]
    fn test_goto_during_chain_reroutes_it() {
        let config = SliderConfig {
            step_by_step: true,
            ..SliderConfig::default()
        };
        let mut c = held(6, config);
        let after = record(&mut c, Lifecycle::After);

        assert!(c.goto_index(3));
        assert_eq!(c.pending_steps(), 2);
        // first step lands on 1, four more to reach 5
        assert!(c.goto_index(5));
        assert_eq!(c.pending_steps(), 4);

        drain(&mut c);
        assert_eq!(c.current_index(), 5);
        assert_eq!(after.borrow().as_slice(), &[5]);
        assert_eq!(c.stage().animation_count(), 5);
    }

    #[test]
    fn test_goto_during_chain_can_turn_back() {
        let config = SliderConfig {
            step_by_step: true,
            ..SliderConfig::default()
        };
        let mut c = held(6, config);
        let after = record(&mut c, Lifecycle::After);

        assert!(c.goto_index(4));
        // in-flight step lands on 1, which is already the target
        assert!(c.goto_index(1));
        assert_eq!(c.pending_steps(), 0);

        drain(&mut c);
        assert_eq!(c.current_index(), 1);
        assert_eq!(after.borrow().as_slice(), &[1]);
    }

    #[test]
    fn test_goto_during_single_step_keeps_it() {
        let mut c = held(6, SliderConfig::default());
        assert!(c.next());
        assert!(!c.goto_index(4));
        drain(&mut c);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_goto_clamps_out_of_range() {
        let mut c = carousel(5, SliderConfig::default());
        assert!(c.goto_index(42));
        c.pump();
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn test_goto_current_is_noop() {
        let mut c = carousel(5, SliderConfig::default());
        c.goto_index(3);
        c.pump();
        let before = record(&mut c, Lifecycle::Before);
        let after = record(&mut c, Lifecycle::After);

        assert!(!c.goto_index(3));
        assert!(before.borrow().is_empty());
        assert!(after.borrow().is_empty());
    }

    #[test]
    fn test_single_item_never_navigates() {
        let mut c = carousel(1, SliderConfig::default());
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.move_by(2));
        assert!(!c.goto_index(0));
        assert_eq!(c.stage().animation_count(), 0);
    }

    #[test]
    fn test_uninitialized_carousel_ignores_navigation() {
        let mut c = Carousel::new(items(3), SliderConfig::default(), InstantStage::new(200.0, 100.0));
        assert!(!c.next());
        assert!(!c.goto_index(2));
    }
}
