use serde::{Deserialize, Serialize};

#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic Hermite easing `3t² - 2t³` on `t` clamped to `[0, 1]`.
///
/// Zero slope at both ends, so chained segments meet without a velocity kink.
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Easing curves used by scroll animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    Smoothstep,
    /// Quadratic deceleration.
    #[default]
    Power2Out,
    /// Cubic acceleration into cubic deceleration.
    Power3InOut,
}

impl Easing {
    /// Maps linear time `t` to eased progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        match self {
            Self::Linear => t,
            Self::Smoothstep => smoothstep(t),
            Self::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power3InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Easing, smoothstep};

    #[test]
    fn every_curve_pins_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Smoothstep,
            Easing::Power2Out,
            Easing::Power3InOut,
        ] {
            assert!(easing.apply(0.0).abs() <= 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() <= 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn smoothstep_is_symmetric_around_midpoint() {
        assert!((smoothstep(0.5) - 0.5).abs() <= 1e-12);
        assert!((smoothstep(0.25) + smoothstep(0.75) - 1.0).abs() <= 1e-12);
        assert_eq!(smoothstep(-1.0), 0.0);
        assert_eq!(smoothstep(2.0), 1.0);
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::Power2Out.apply(0.3) > 0.3);
        assert!(Easing::Power3InOut.apply(0.25) < 0.25);
        assert!(Easing::Power3InOut.apply(0.75) > 0.75);
    }
}
