//! Countdown join over the per-slot sub-animations of one transition.

use tokio::sync::mpsc;

/// Identifies one transition; completions carrying another ticket are stale
pub type Ticket = u64;

/// Sent by the stage when the sub-animation of one slot has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackDone {
    pub ticket: Ticket,
    pub slot: usize,
}

pub type CompletionSender = mpsc::UnboundedSender<TrackDone>;
pub type CompletionReceiver = mpsc::UnboundedReceiver<TrackDone>;

/// Create the completion channel shared by a carousel and its stage
pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    mpsc::unbounded_channel()
}

/// Result of reporting one finished track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// Counted; other tracks are still running
    Pending(usize),
    /// Last track arrived; run the join
    Released,
    /// Unknown slot or already reported
    Ignored,
}

/// Counts down once per distinct slot and releases when every slot reported
#[derive(Debug, Clone)]
pub struct Countdown {
    arrived: Vec<bool>,
    remaining: usize,
}

impl Countdown {
    pub fn new(tracks: usize) -> Self {
        Self {
            arrived: vec![false; tracks],
            remaining: tracks,
        }
    }

    pub fn arrive(&mut self, slot: usize) -> Arrival {
        match self.arrived.get_mut(slot) {
            Some(seen) if !*seen => {
                *seen = true;
                self.remaining -= 1;
                if self.remaining == 0 {
                    Arrival::Released
                } else {
                    Arrival::Pending(self.remaining)
                }
            }
            _ => Arrival::Ignored,
        }
    }
}
