/// Logistic activation used by both layers of the network.
///
/// No clamping is applied to the exponent. In `f64`, `exp(-x)` saturates to
/// `inf` or `0` instead of producing NaN, so the result degrades to exactly
/// `0.0` or `1.0` only for `|x|` beyond roughly 36.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    /// `s(x) · (1 - s(x))`.
    ///
    /// The training code evaluates this on activation values (outputs of
    /// `function`), not on pre-activation sums.
    pub fn derivative(x: f64) -> f64 {
        let fx = Sigmoid::function(x);
        fx * (1.0 - fx)
    }

    pub fn apply(v: &[f64]) -> Vec<f64> {
        v.iter().map(|&x| Sigmoid::function(x)).collect()
    }

    pub fn derivative_vec(v: &[f64]) -> Vec<f64> {
        v.iter().map(|&x| Sigmoid::derivative(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(Sigmoid::function(0.0), 0.5);
        assert_eq!(Sigmoid::derivative(0.0), 0.25);
        assert!(Sigmoid::function(-800.0) >= 0.0);
        assert!(Sigmoid::function(800.0) <= 1.0);
    }

    proptest! {
        #[test]
        fn function_is_strictly_inside_unit_interval(x in -30.0f64..30.0) {
            let y = Sigmoid::function(x);
            prop_assert!(y > 0.0 && y < 1.0);
        }

        #[test]
        fn derivative_is_positive_and_bounded(x in -30.0f64..30.0) {
            let d = Sigmoid::derivative(x);
            prop_assert!(d > 0.0 && d <= 0.25);
        }
    }
}
