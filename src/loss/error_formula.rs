use serde::{Serialize, Deserialize};

/// Selects how the per-sample scalar error that gates weight updates is
/// computed.
///
/// - `TargetMinusError`: `Σ|target[i] - output_error[i]| / 2`, where
///   `output_error = output - target`. This is the historical formula and
///   the default. For the true class the term is `2 - output`, so the value
///   never drops below `0.5` and every sample passes a `0.1` threshold.
/// - `TargetMinusOutput`: `Σ|target[i] - output[i]| / 2`, the plain L1
///   distance. With this formula well-classified samples are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorFormula {
    #[default]
    TargetMinusError,
    TargetMinusOutput,
}

impl ErrorFormula {
    pub fn error(self, target: &[f64], output: &[f64], output_error: &[f64]) -> f64 {
        assert_eq!(target.len(), output.len(), "target and output lengths differ");
        assert_eq!(target.len(), output_error.len(), "target and error lengths differ");

        let other = match self {
            ErrorFormula::TargetMinusError => output_error,
            ErrorFormula::TargetMinusOutput => output,
        };
        target
            .iter()
            .zip(other.iter())
            .map(|(t, x)| (t - x).abs())
            .sum::<f64>()
            / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::subtract;

    #[test]
    fn literal_formula_mixes_target_and_error() {
        let target = [1.0, 0.0, 0.0];
        let output = [0.9, 0.1, 0.2];
        let err = subtract(&output, &target);
        // |1 - (-0.1)| + |0 - 0.1| + |0 - 0.2| = 1.4
        let e = ErrorFormula::TargetMinusError.error(&target, &output, &err);
        assert!((e - 0.7).abs() < 1e-12);
    }

    #[test]
    fn literal_formula_never_below_half() {
        let target = [0.0, 1.0, 0.0];
        let output = [0.0, 1.0, 0.0];
        let err = subtract(&output, &target);
        assert_eq!(ErrorFormula::TargetMinusError.error(&target, &output, &err), 0.5);
    }

    #[test]
    fn l1_formula_is_zero_for_perfect_output() {
        let target = [0.0, 0.0, 1.0];
        let err = subtract(&target, &target);
        assert_eq!(ErrorFormula::TargetMinusOutput.error(&target, &target, &err), 0.0);

        let output = [0.1, 0.2, 0.6];
        let err = subtract(&output, &target);
        let e = ErrorFormula::TargetMinusOutput.error(&target, &output, &err);
        assert!((e - 0.35).abs() < 1e-12);
    }
}
