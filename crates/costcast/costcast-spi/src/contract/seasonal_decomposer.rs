//! Trait for seasonal decomposition

use crate::model::CostPoint;

/// Trait for deriving per-period multiplicative factors from a dated
/// cost history
pub trait SeasonalDecomposer: Send + Sync {
    /// Compute `periods` multiplicative factors. Implementations return a
    /// uniform factor array when the history is too short to decompose.
    fn factors(&self, points: &[CostPoint], periods: usize) -> Vec<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Mock implementation: always uniform factors
    struct UniformDecomposer;

    impl SeasonalDecomposer for UniformDecomposer {
        fn factors(&self, _points: &[CostPoint], periods: usize) -> Vec<f64> {
            vec![1.0; periods]
        }
    }

    /// Mock implementation: factor proportional to period index
    struct RampDecomposer;

    impl SeasonalDecomposer for RampDecomposer {
        fn factors(&self, points: &[CostPoint], periods: usize) -> Vec<f64> {
            if points.len() < periods * 2 {
                return vec![1.0; periods];
            }
            (1..=periods).map(|i| i as f64).collect()
        }
    }

    fn history(n: usize) -> Vec<CostPoint> {
        (0..n)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
                    + chrono::Days::new(i as u64 * 30);
                CostPoint::new(date, 100.0)
            })
            .collect()
    }

    #[test]
    fn test_uniform_decomposer() {
        let decomposer = UniformDecomposer;
        let factors = decomposer.factors(&history(30), 12);

        assert_eq!(factors.len(), 12);
        assert!(factors.iter().all(|&f| f == 1.0));
    }

    #[test]
    fn test_ramp_decomposer_insufficient_data() {
        let decomposer = RampDecomposer;
        let factors = decomposer.factors(&history(10), 12);

        assert_eq!(factors, vec![1.0; 12]);
    }

    #[test]
    fn test_ramp_decomposer_sufficient_data() {
        let decomposer = RampDecomposer;
        let factors = decomposer.factors(&history(30), 4);

        assert_eq!(factors, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_decomposer_as_trait_object() {
        let decomposer: Box<dyn SeasonalDecomposer> = Box::new(UniformDecomposer);
        assert_eq!(decomposer.factors(&[], 3), vec![1.0; 3]);
    }

    #[test]
    fn test_decomposer_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<UniformDecomposer>();
        assert_sync::<RampDecomposer>();
    }
}
