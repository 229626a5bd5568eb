//! Terminal stage: measures the mask in cells and animates cards with the
//! slide animator.

use std::time::{Duration, Instant};

use slidereel_core::{Animation, EasingType, Stage, Strip};
use tracing::debug;

use crate::tween::{SlideAnimator, TrackFrame};

/// Caption fade duration
const DEFAULT_FADE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionState {
    Hidden,
    FadingIn(Instant),
    Shown,
    FadingOut(Instant),
}

impl CaptionState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, CaptionState::Hidden)
    }

    pub fn is_fading(&self) -> bool {
        matches!(self, CaptionState::FadingIn(_) | CaptionState::FadingOut(_))
    }
}

#[derive(Debug)]
pub struct TerminalStage {
    mask_width: u16,
    item_width: u16,
    animator: SlideAnimator,
    /// Rest layout from the last settle
    rest: Vec<TrackFrame>,
    captions: Vec<CaptionState>,
    active_indicator: Option<usize>,
    fade: Duration,
}

impl TerminalStage {
    pub fn new(item_width: u16, easing: EasingType) -> Self {
        Self {
            mask_width: 0,
            item_width,
            animator: SlideAnimator::new(easing),
            rest: Vec::new(),
            captions: Vec::new(),
            active_indicator: None,
            fade: DEFAULT_FADE,
        }
    }

    /// Returns whether the width changed
    pub fn set_mask_width(&mut self, width: u16) -> bool {
        if self.mask_width == width {
            return false;
        }
        debug!("Mask width {} -> {}", self.mask_width, width);
        self.mask_width = width;
        true
    }

    pub fn mask_cells(&self) -> u16 {
        self.mask_width
    }

    pub fn item_cells(&self) -> u16 {
        self.item_width
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Whether anything on screen is still moving or fading
    pub fn needs_redraw(&self) -> bool {
        self.is_animating() || self.captions.iter().any(CaptionState::is_fading)
    }

    /// Advance animations to now. Call before pumping the carousel so a
    /// finished transition is joined before the next draw.
    pub fn update(&mut self) -> bool {
        self.advance(Instant::now())
    }

    pub fn advance(&mut self, now: Instant) -> bool {
        let finished = self.animator.update(now);
        for state in &mut self.captions {
            *state = match *state {
                CaptionState::FadingIn(start) if now.saturating_duration_since(start) >= self.fade => {
                    CaptionState::Shown
                }
                CaptionState::FadingOut(start) if now.saturating_duration_since(start) >= self.fade => {
                    CaptionState::Hidden
                }
                other => other,
            };
        }
        finished
    }

    /// Cards to draw: interpolated while a transition runs, else the rest layout
    pub fn cards(&self) -> Vec<TrackFrame> {
        if self.animator.is_animating() {
            self.animator.frame()
        } else {
            self.rest.clone()
        }
    }

    /// Captions start visible until told otherwise
    pub fn caption(&self, item: usize) -> CaptionState {
        self.captions
            .get(item)
            .copied()
            .unwrap_or(CaptionState::Shown)
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.active_indicator
    }

    fn caption_slot(&mut self, item: usize) -> &mut CaptionState {
        if self.captions.len() <= item {
            self.captions.resize(item + 1, CaptionState::Shown);
        }
        &mut self.captions[item]
    }
}

impl Stage for TerminalStage {
    fn mask_width(&self) -> f64 {
        f64::from(self.mask_width)
    }

    fn item_width(&self) -> f64 {
        f64::from(self.item_width)
    }

    fn animate(&mut self, animation: Animation) {
        debug!(
            "Animating {} tracks over {:?}",
            animation.tracks.len(),
            animation.duration
        );
        self.animator.start(animation, Instant::now());
    }

    fn settle(&mut self, strip: &Strip) {
        self.rest = strip
            .iter()
            .enumerate()
            .map(|(slot, s)| TrackFrame {
                slot,
                item: s.item,
                offset: s.offset,
            })
            .collect();
    }

    fn show_caption(&mut self, item: usize) {
        let now = Instant::now();
        let state = self.caption_slot(item);
        if *state != CaptionState::Shown {
            *state = CaptionState::FadingIn(now);
        }
    }

    fn hide_caption(&mut self, item: usize) {
        // A caption never drawn disappears without fading
        if item >= self.captions.len() {
            *self.caption_slot(item) = CaptionState::Hidden;
            return;
        }
        let now = Instant::now();
        let state = self.caption_slot(item);
        if *state != CaptionState::Hidden {
            *state = CaptionState::FadingOut(now);
        }
    }

    fn mark_indicator(&mut self, index: usize) {
        self.active_indicator = Some(index);
    }
}
