//! Rendering host collaborator.
//!
//! A [`Stage`] measures the mask and items, runs slide animations and shows
//! captions and the pagination marker. The carousel never touches visual
//! elements directly.

use std::time::Duration;

use tracing::warn;

use crate::barrier::{CompletionSender, Ticket, TrackDone};
use crate::strip::Strip;

/// Sub-animation of a single strip slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub slot: usize,
    pub item: usize,
    pub from: f64,
    pub to: f64,
}

/// One transition: every slot moves by the same distance over `duration`
#[derive(Debug, Clone)]
pub struct Animation {
    pub ticket: Ticket,
    pub tracks: Vec<Track>,
    pub duration: Duration,
    done: CompletionSender,
}

impl Animation {
    pub fn new(
        ticket: Ticket,
        tracks: Vec<Track>,
        duration: Duration,
        done: CompletionSender,
    ) -> Self {
        Self {
            ticket,
            tracks,
            duration,
            done,
        }
    }

    /// Report that the track of `slot` reached its target
    pub fn finish(&self, slot: usize) {
        let report = TrackDone {
            ticket: self.ticket,
            slot,
        };
        if self.done.send(report).is_err() {
            warn!("Failed to report finished track: carousel dropped");
        }
    }

    pub fn finish_all(&self) {
        for track in &self.tracks {
            self.finish(track.slot);
        }
    }
}

pub trait Stage {
    /// Outer width of the visible mask
    fn mask_width(&self) -> f64;

    /// Outer width of a single item
    fn item_width(&self) -> f64;

    /// Start every track of `animation`; each finished track is reported
    /// through [`Animation::finish`]
    fn animate(&mut self, animation: Animation);

    /// Place every slot at its current offset without animating
    fn settle(&mut self, strip: &Strip);

    fn show_caption(&mut self, item: usize);

    fn hide_caption(&mut self, item: usize);

    /// Clear every pagination marker and set the one for `index`
    fn mark_indicator(&mut self, index: usize);
}

/// Calls recorded by [`InstantStage`]
#[derive(Debug, Clone, PartialEq)]
pub enum StageCall {
    Animate { ticket: Ticket, tracks: usize, shift: f64 },
    Settle(Vec<f64>),
    ShowCaption(usize),
    HideCaption(usize),
    MarkIndicator(usize),
}

/// Headless stage with fixed widths.
///
/// By default every animation completes as soon as it starts; a holding
/// stage keeps animations running until [`InstantStage::release`].
#[derive(Debug, Clone)]
pub struct InstantStage {
    mask_width: f64,
    item_width: f64,
    hold: bool,
    running: Vec<Animation>,
    offsets: Vec<f64>,
    calls: Vec<StageCall>,
}

impl InstantStage {
    pub fn new(mask_width: f64, item_width: f64) -> Self {
        Self {
            mask_width,
            item_width,
            hold: false,
            running: Vec::new(),
            offsets: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Stage whose animations only finish on [`InstantStage::release`]
    pub fn holding(mask_width: f64, item_width: f64) -> Self {
        Self {
            hold: true,
            ..Self::new(mask_width, item_width)
        }
    }

    pub fn set_mask_width(&mut self, width: f64) {
        self.mask_width = width;
    }

    pub fn set_item_width(&mut self, width: f64) {
        self.item_width = width;
    }

    /// Finish every held animation
    pub fn release(&mut self) {
        for animation in self.running.drain(..) {
            animation.finish_all();
        }
    }

    /// Number of animations started but not yet finished
    pub fn running(&self) -> usize {
        self.running.len()
    }

    /// Offsets last placed by `settle`
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    pub fn calls(&self) -> &[StageCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<StageCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn animation_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, StageCall::Animate { .. }))
            .count()
    }
}

impl Stage for InstantStage {
    fn mask_width(&self) -> f64 {
        self.mask_width
    }

    fn item_width(&self) -> f64 {
        self.item_width
    }

    fn animate(&mut self, animation: Animation) {
        let shift = animation
            .tracks
            .first()
            .map(|t| t.to - t.from)
            .unwrap_or(0.0);
        self.calls.push(StageCall::Animate {
            ticket: animation.ticket,
            tracks: animation.tracks.len(),
            shift,
        });
        if self.hold {
            self.running.push(animation);
        } else {
            animation.finish_all();
        }
    }

    fn settle(&mut self, strip: &Strip) {
        self.offsets = strip.offsets();
        self.calls.push(StageCall::Settle(self.offsets.clone()));
    }

    fn show_caption(&mut self, item: usize) {
        self.calls.push(StageCall::ShowCaption(item));
    }

    fn hide_caption(&mut self, item: usize) {
        self.calls.push(StageCall::HideCaption(item));
    }

    fn mark_indicator(&mut self, index: usize) {
        self.calls.push(StageCall::MarkIndicator(index));
    }
}
