//! Time helpers for slide animations

use std::time::{Duration, Instant};

/// Fraction of `duration` elapsed since `start`, clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two offsets
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Frame interval for the given frame rate
pub fn frame_interval(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_millis(1000 / fps as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(-100.0, 100.0, 0.0) + 100.0).abs() < 0.001);
        assert!(lerp(-100.0, 100.0, 0.5).abs() < 0.001);
        assert!((lerp(-100.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let d = Duration::from_millis(200);
        assert!((progress(start, start + Duration::from_millis(50), d) - 0.25).abs() < 0.001);
        assert!((progress(start, start + Duration::from_secs(1), d) - 1.0).abs() < 0.001);
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
        assert!(is_complete(start, start + d, d));
        assert!(!is_complete(start, start + Duration::from_millis(199), d));
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(50), Duration::from_millis(20));
        assert_eq!(frame_interval(0), Duration::from_millis(16));
    }
}
