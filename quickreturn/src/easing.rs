/// Easing curves for footer slide animations.
///
/// All curves are plain polynomials so they stay available without `std`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Samples the curve at `t` in `[0, 1]`.
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

impl Default for Easing {
    /// The stock quick-return curve: accelerate out, decelerate in.
    fn default() -> Self {
        Self::EaseInOutCubic
    }
}
