//! Recommendation Ranker

use crate::model::Recommendation;

/// Order by confidence, highest first.
///
/// Stable: equal confidences keep generation order, which is the only
/// tie-break.
pub fn rank(mut strategies: Vec<Recommendation>) -> Vec<Recommendation> {
    strategies.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    strategies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RiskLevel, StrategyType};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn rec(id: &str, confidence: Decimal) -> Recommendation {
        Recommendation::new(id, id, StrategyType::Balanced, RiskLevel::Medium, dec!(0.1), confidence, 10)
    }

    #[test]
    fn test_descending_confidence() {
        let out = rank(vec![rec("a", dec!(0.65)), rec("b", dec!(0.92)), rec("c", dec!(0.78))]);
        let ids: Vec<_> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let out = rank(vec![
            rec("first", dec!(0.75)),
            rec("top", dec!(0.9)),
            rec("second", dec!(0.750)),
            rec("third", dec!(0.75)),
        ]);
        let ids: Vec<_> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
