/// Interpolation curve mapping linear time fraction to value fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Fast start, slow end: `1 - (1 - t)^(2·factor)`.
    ///
    /// `Decelerate(1.0)` is the classic quadratic ease-out.
    Decelerate(f32),
}

impl Easing {
    /// Quadratic ease-out, the default curve for slide transitions.
    pub const DECELERATE: Easing = Easing::Decelerate(1.0);

    /// Apply the curve to a normalized time fraction. Input is clamped to `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Easing::Linear => t,
            Easing::Decelerate(factor) => {
                if factor == 1.0 {
                    1.0 - (1.0 - t) * (1.0 - t)
                } else {
                    1.0 - (1.0 - t).powf(2.0 * factor)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 3] = [Easing::Linear, Easing::DECELERATE, Easing::Decelerate(1.5)];

    #[test]
    fn endpoints_are_fixed() {
        for e in CURVES {
            assert_eq!(e.apply(0.0), 0.0, "{e:?}");
            assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for e in CURVES {
            assert_eq!(e.apply(-1.0), 0.0, "{e:?}");
            assert_eq!(e.apply(2.0), 1.0, "{e:?}");
            assert_eq!(e.apply(f32::NAN), 0.0, "{e:?}");
        }
    }

    #[test]
    fn decelerate_leads_linear() {
        assert_eq!(Easing::DECELERATE.apply(0.5), 0.75);
        assert!(Easing::DECELERATE.apply(0.25) > Easing::Linear.apply(0.25));
    }

    #[test]
    fn curves_are_monotonic() {
        for e in CURVES {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = e.apply(i as f32 / 100.0);
                assert!(v >= prev, "{e:?} decreased at step {i}");
                prev = v;
            }
        }
    }
}
