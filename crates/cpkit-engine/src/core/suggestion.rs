use serde::{Deserialize, Serialize};

/// Advisory category derived from the CPK values of both axes.
///
/// | Category     | Condition                                   |
/// |--------------|---------------------------------------------|
/// | `Excellent`  | both `>= 1.67`                              |
/// | `Good`       | both in `[1.33, 1.67)`                      |
/// | `Poor`       | either in `[0.67, 1.0)`                     |
/// | `Inadequate` | either `< 0.67`                             |
///
/// Conditions are checked in that order and the first match wins. Pairs that
/// match none of them (for example a CPK between 1.0 and 1.33) have no
/// category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum Suggestion {
    Excellent,
    Good,
    Poor,
    Inadequate,
}

impl Suggestion {
    pub const EXCELLENT_MIN: f64 = 1.67;
    pub const GOOD_MIN: f64 = 1.33;
    pub const ADEQUATE_MIN: f64 = 1.0;
    pub const POOR_MIN: f64 = 0.67;

    /// Classifies a pair of CPK values, returning `None` when no category applies.
    #[must_use]
    pub fn classify(cpk_x: f64, cpk_y: f64) -> Option<Self> {
        let good = |cpk: f64| (Self::GOOD_MIN..Self::EXCELLENT_MIN).contains(&cpk);
        let poor = |cpk: f64| (Self::POOR_MIN..Self::ADEQUATE_MIN).contains(&cpk);

        if cpk_x >= Self::EXCELLENT_MIN && cpk_y >= Self::EXCELLENT_MIN {
            Some(Self::Excellent)
        } else if good(cpk_x) && good(cpk_y) {
            Some(Self::Good)
        } else if poor(cpk_x) || poor(cpk_y) {
            Some(Self::Poor)
        } else if cpk_x < Self::POOR_MIN || cpk_y < Self::POOR_MIN {
            Some(Self::Inadequate)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excellent_requires_both_axes() {
        assert_eq!(Suggestion::classify(1.67, 2.5), Some(Suggestion::Excellent));
        assert_eq!(Suggestion::classify(2.0, 1.66), None);
    }

    #[test]
    fn test_good_requires_both_axes_in_band() {
        assert_eq!(Suggestion::classify(1.33, 1.5), Some(Suggestion::Good));
        assert_eq!(Suggestion::classify(1.669, 1.4), Some(Suggestion::Good));
        assert_eq!(Suggestion::classify(1.5, 1.2), None);
    }

    #[test]
    fn test_poor_when_either_axis_in_band() {
        assert_eq!(Suggestion::classify(0.67, 3.0), Some(Suggestion::Poor));
        assert_eq!(Suggestion::classify(2.0, 0.99), Some(Suggestion::Poor));
    }

    #[test]
    fn test_poor_takes_precedence_over_inadequate() {
        assert_eq!(Suggestion::classify(0.8, 0.1), Some(Suggestion::Poor));
    }

    #[test]
    fn test_inadequate_when_either_axis_low() {
        assert_eq!(Suggestion::classify(0.5, 2.0), Some(Suggestion::Inadequate));
        assert_eq!(Suggestion::classify(1.2, -0.3), Some(Suggestion::Inadequate));
        assert_eq!(Suggestion::classify(0.0, 0.0), Some(Suggestion::Inadequate));
    }

    #[test]
    fn test_gap_between_one_and_good_has_no_category() {
        assert_eq!(Suggestion::classify(1.0, 1.0), None);
        assert_eq!(Suggestion::classify(1.2, 1.32), None);
        assert_eq!(Suggestion::classify(1.1, 1.8), None);
    }
}
