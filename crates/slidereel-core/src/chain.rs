//! Strictly sequential queue of single-step navigations.

use std::collections::VecDeque;
use std::fmt;

/// Single-step navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

impl Step {
    /// Direction of travel in item widths (next moves the strip left)
    pub fn sign(&self) -> f64 {
        match self {
            Step::Next => -1.0,
            Step::Prev => 1.0,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => f.write_str("next"),
            Step::Prev => f.write_str("prev"),
        }
    }
}

/// FIFO of pending steps. The carousel pops one step at a time and only
/// pops again from the join of the previous step, so steps never overlap.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    steps: VecDeque<Step>,
}

impl Chain {
    pub fn enqueue(&mut self, step: Step) {
        self.steps.push_back(step);
    }

    /// Queue `count` copies of `step`
    pub fn enqueue_many(&mut self, step: Step, count: usize) {
        for _ in 0..count {
            self.enqueue(step);
        }
    }

    pub fn pop(&mut self) -> Option<Step> {
        self.steps.pop_front()
    }

    /// Drop every pending step; a step already in flight still completes
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
