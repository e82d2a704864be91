use serde::{Deserialize, Serialize};

use crate::core::{Easing, lerp};

/// Fixed-duration eased animation of the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl ScrollTween {
    #[must_use]
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1.0),
            easing,
        }
    }

    #[must_use]
    pub fn from(self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn to(self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn is_done(self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    #[must_use]
    pub fn sample(self, now_ms: f64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        lerp(self.from, self.to, self.easing.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollTween;
    use crate::core::Easing;

    #[test]
    fn tween_starts_at_origin_and_lands_exactly() {
        let tween = ScrollTween::new(80.0, 100.0, 1_000.0, 400.0, Easing::Power2Out);
        assert_eq!(tween.sample(1_000.0), 80.0);
        assert!(tween.sample(1_200.0) > 90.0);
        assert_eq!(tween.sample(1_400.0), 100.0);
        assert!(tween.is_done(1_400.0));
    }

    #[test]
    fn zero_duration_is_bumped_to_one_millisecond() {
        let tween = ScrollTween::new(0.0, 10.0, 0.0, 0.0, Easing::Linear);
        assert!(!tween.is_done(0.0));
        assert!(tween.is_done(1.0));
    }
}
