use serde::{Serialize, Deserialize};
use std::fmt;

/// Shape class assigned to a sample.
///
/// Serialized in upper case (`"CIRCLE"`, `"SQUARE"`, `"TRIANGLE"`), which is
/// the form the HTTP front end accepts and returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShapeLabel {
    Circle,
    Square,
    Triangle,
}

/// The one place that ties labels to output slots. One-hot encoding and
/// arg-max decoding both go through this table, so variant declaration order
/// has no effect on the network's outputs.
const SLOTS: [(ShapeLabel, usize); ShapeLabel::COUNT] = [
    (ShapeLabel::Circle, 0),
    (ShapeLabel::Square, 1),
    (ShapeLabel::Triangle, 2),
];

impl ShapeLabel {
    pub const COUNT: usize = 3;

    /// All labels in slot order.
    pub const ALL: [ShapeLabel; ShapeLabel::COUNT] =
        [ShapeLabel::Circle, ShapeLabel::Square, ShapeLabel::Triangle];

    pub fn slot(self) -> usize {
        SLOTS
            .iter()
            .find(|(label, _)| *label == self)
            .map(|(_, slot)| *slot)
            .unwrap_or_else(|| unreachable!("every label has a slot"))
    }

    pub fn from_slot(slot: usize) -> Option<ShapeLabel> {
        SLOTS.iter().find(|(_, s)| *s == slot).map(|(label, _)| *label)
    }

    /// One-hot target vector of length `ShapeLabel::COUNT`.
    pub fn one_hot(self) -> Vec<f64> {
        let mut v = vec![0.0; ShapeLabel::COUNT];
        v[self.slot()] = 1.0;
        v
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeLabel::Circle => "CIRCLE",
            ShapeLabel::Square => "SQUARE",
            ShapeLabel::Triangle => "TRIANGLE",
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::argmax;

    #[test]
    fn one_hot_round_trips_through_argmax() {
        for label in ShapeLabel::ALL {
            let encoded = label.one_hot();
            assert_eq!(encoded.iter().sum::<f64>(), 1.0);
            assert_eq!(argmax(&encoded), label.slot());
            assert_eq!(ShapeLabel::from_slot(argmax(&encoded)), Some(label));
        }
    }

    #[test]
    fn slots_are_distinct_and_dense() {
        let mut slots: Vec<usize> = ShapeLabel::ALL.iter().map(|l| l.slot()).collect();
        slots.sort();
        assert_eq!(slots, (0..ShapeLabel::COUNT).collect::<Vec<_>>());
        assert_eq!(ShapeLabel::from_slot(ShapeLabel::COUNT), None);
    }

    #[test]
    fn serializes_upper_case() {
        assert_eq!(serde_json::to_string(&ShapeLabel::Triangle).unwrap(), "\"TRIANGLE\"");
        let parsed: ShapeLabel = serde_json::from_str("\"SQUARE\"").unwrap();
        assert_eq!(parsed, ShapeLabel::Square);
    }
}
