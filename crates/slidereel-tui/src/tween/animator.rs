//! Slide animator: interpolates the tracks of one carousel transition
//!
//! Call `start()` when the carousel hands over an animation, then `update()`
//! every frame. Once the duration has elapsed every track is reported as
//! finished, which lets the carousel run its join on the next pump.

use std::time::Instant;

use slidereel_core::{Animation, EasingType};
use tracing::debug;

use super::easing::EasingTypeExt;
use super::timing::{is_complete, lerp, progress};

/// Interpolated position of one slot in the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFrame {
    pub slot: usize,
    pub item: usize,
    pub offset: f64,
}

#[derive(Debug)]
struct Running {
    animation: Animation,
    start: Instant,
    eased: f64,
}

impl Running {
    fn finish(self) {
        self.animation.finish_all();
    }
}

#[derive(Debug)]
pub struct SlideAnimator {
    running: Option<Running>,
    easing: EasingType,
}

impl Default for SlideAnimator {
    fn default() -> Self {
        Self::new(EasingType::default())
    }
}

impl SlideAnimator {
    pub fn new(easing: EasingType) -> Self {
        Self {
            running: None,
            easing,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Begin running `animation`. A transition still running is completed first.
    pub fn start(&mut self, animation: Animation, now: Instant) {
        if let Some(previous) = self.running.take() {
            debug!(
                "Transition {} superseded, completing it",
                previous.animation.ticket
            );
            previous.finish();
        }
        self.running = Some(Running {
            animation,
            start: now,
            eased: 0.0,
        });
    }

    /// Advance to `now`. Returns true when the running transition finished.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(running) = self.running.as_mut() else {
            return false;
        };

        let duration = running.animation.duration;
        if is_complete(running.start, now, duration) {
            if let Some(done) = self.running.take() {
                done.finish();
            }
            return true;
        }

        running.eased = self.easing.apply(progress(running.start, now, duration));
        false
    }

    /// Interpolated slot positions, empty when nothing is running
    pub fn frame(&self) -> Vec<TrackFrame> {
        let Some(running) = self.running.as_ref() else {
            return Vec::new();
        };
        running
            .animation
            .tracks
            .iter()
            .map(|track| TrackFrame {
                slot: track.slot,
                item: track.item,
                offset: lerp(track.from, track.to, running.eased),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use slidereel_core::Track;
    use tokio::sync::mpsc;

    fn animation(
        ticket: u64,
        duration_ms: u64,
    ) -> (Animation, mpsc::UnboundedReceiver<slidereel_core::TrackDone>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let tracks = (0..3)
            .map(|slot| Track {
                slot,
                item: slot,
                from: slot as f64 * 10.0,
                to: slot as f64 * 10.0 - 10.0,
            })
            .collect();
        (
            Animation::new(ticket, tracks, Duration::from_millis(duration_ms), tx),
            rx,
        )
    }

    #[test]
    fn test_interpolates_then_reports_every_track() {
        let mut animator = SlideAnimator::new(EasingType::Linear);
        let (anim, mut rx) = animation(7, 100);
        let start = Instant::now();
        animator.start(anim, start);

        assert!(!animator.update(start + Duration::from_millis(50)));
        let frame = animator.frame();
        assert_eq!(frame.len(), 3);
        assert!((frame[1].offset - 5.0).abs() < 0.001);
        assert!(rx.try_recv().is_err());

        assert!(animator.update(start + Duration::from_millis(100)));
        assert!(!animator.is_animating());
        assert!(animator.frame().is_empty());
        let mut slots: Vec<usize> = Vec::new();
        while let Ok(done) = rx.try_recv() {
            assert_eq!(done.ticket, 7);
            slots.push(done.slot);
        }
        assert_eq!(slots, vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_update() {
        let mut animator = SlideAnimator::default();
        let (anim, mut rx) = animation(1, 0);
        let now = Instant::now();
        animator.start(anim, now);
        assert!(animator.update(now));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_superseded_transition_is_completed() {
        let mut animator = SlideAnimator::default();
        let (first, mut first_rx) = animation(1, 500);
        let (second, _second_rx) = animation(2, 500);
        let now = Instant::now();
        animator.start(first, now);
        animator.start(second, now);
        assert_eq!(first_rx.try_recv().unwrap().ticket, 1);
        assert!(animator.is_animating());
    }
}
