use serde::{
    Deserialize,
    Serialize
};

use super::curvetype::CurveType;
use super::rounding::Rounding;

fn default_steepness() -> f64 {
    1.5
}

fn default_mid_point() -> i64 {
    2000
}

/// Immutable description of a rank-to-rate curve. Built by an admin form,
/// optionally persisted under a name, and consumed by `evaluate`.
///
/// The bounds are not required to be ordered: `min_output > max_output`
/// yields an inverted range and `min_output == max_output` a constant one.
/// No field is validated here; degenerate configurations (a zero
/// population, for instance) propagate NaN or infinity to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    curve_type: CurveType,
    min_output: f64,
    max_output: f64,
    #[serde(default = "default_steepness")]
    steepness: f64,
    #[serde(default = "default_mid_point")]
    mid_point: i64,
    total_population: i64,
    rounding: Rounding
}

impl CurveConfig {
    pub fn new(curve_type: CurveType,
               min_output: f64,
               max_output: f64,
               steepness: f64,
               mid_point: i64,
               total_population: i64,
               rounding: Rounding) -> CurveConfig {
        CurveConfig {
            curve_type,
            min_output,
            max_output,
            steepness,
            mid_point,
            total_population,
            rounding
        }
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    pub fn min_output(&self) -> f64 {
        self.min_output
    }

    pub fn max_output(&self) -> f64 {
        self.max_output
    }

    pub fn steepness(&self) -> f64 {
        self.steepness
    }

    pub fn mid_point(&self) -> i64 {
        self.mid_point
    }

    pub fn total_population(&self) -> i64 {
        self.total_population
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Evaluates the curve at `rank` and applies the rounding policy.
    ///
    /// Pure and stateless. Ranks outside [1, total_population] are not
    /// rejected; the shape formulas extrapolate.
    pub fn evaluate(&self, rank: i64) -> f64 {
        let normalized_value = self.curve_type.normalized_value(
            rank,
            self.steepness,
            self.mid_point,
            self.total_population
        );
        let raw_output = self.min_output + normalized_value * (self.max_output - self.min_output);
        self.rounding.apply(raw_output)
    }
}

#[cfg(test)]
mod tests {
    use super::CurveConfig;
    use super::super::curvetype::CurveType;
    use super::super::rounding::Rounding;

    fn linear_5_to_95() -> CurveConfig {
        CurveConfig::new(CurveType::Linear, 5.0, 95.0, 1.5, 2000, 4000, Rounding::Whole)
    }

    #[test]
    fn linear_rank_one_rounds_to_max() {
        // normalized rank 0.00025, raw output 94.9775
        assert_eq!(linear_5_to_95().evaluate(1), 95.0);
    }

    #[test]
    fn linear_last_rank_hits_min() {
        assert_eq!(linear_5_to_95().evaluate(4000), 5.0);
    }

    #[test]
    fn exponential_midpoint_raw_output() {
        let config = CurveConfig::new(
            CurveType::Exponential, 1.0, 100.0, 2.0, 2000, 4000, Rounding::None);
        assert!((config.evaluate(2000) - 25.75).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_mid_point_is_halfway() {
        let config = CurveConfig::new(
            CurveType::Sigmoid, 0.0, 100.0, 1.5, 2000, 4000, Rounding::None);
        assert_eq!(config.evaluate(2000), 50.0);
    }

    #[test]
    fn linear_and_exponential_are_non_increasing() {
        for curve_type in [CurveType::Linear, CurveType::Exponential] {
            let config = CurveConfig::new(
                curve_type, 1.0, 100.0, 2.0, 2000, 4000, Rounding::None);
            let mut previous = config.evaluate(1);
            for rank in (100..=4000).step_by(100) {
                let value = config.evaluate(rank);
                assert!(value <= previous, "{:?} increased at rank {}", curve_type, rank);
                previous = value;
            }
        }
    }

    #[test]
    fn equal_bounds_give_constant_output() {
        for curve_type in [CurveType::Linear,
                           CurveType::Exponential,
                           CurveType::Logarithmic,
                           CurveType::Sigmoid] {
            let config = CurveConfig::new(
                curve_type, 42.0, 42.0, 1.5, 2000, 4000, Rounding::None);
            for rank in [1, 1000, 2000, 4000] {
                assert_eq!(config.evaluate(rank), 42.0);
            }
        }
    }

    #[test]
    fn inverted_bounds_are_non_decreasing() {
        let config = CurveConfig::new(
            CurveType::Linear, 95.0, 5.0, 1.5, 2000, 4000, Rounding::Whole);
        assert_eq!(config.evaluate(1), 5.0);
        assert_eq!(config.evaluate(4000), 95.0);
    }

    #[test]
    fn exponential_past_population_propagates_nan() {
        let config = CurveConfig::new(
            CurveType::Exponential, 1.0, 100.0, 1.5, 2000, 4000, Rounding::None);
        assert!(config.evaluate(4400).is_nan());
    }

    #[test]
    fn zero_population_yields_non_finite_output() {
        let config = CurveConfig::new(
            CurveType::Linear, 5.0, 95.0, 1.5, 2000, 0, Rounding::None);
        assert!(!config.evaluate(1).is_finite());
    }

    #[test]
    fn rounding_policy_applies_to_the_final_output() {
        // a degenerate range pins the raw output at 33.456 for every rank
        let make = |rounding| CurveConfig::new(
            CurveType::Linear, 33.456, 33.456, 1.5, 2000, 4000, rounding);
        assert_eq!(make(Rounding::Whole).evaluate(100), 33.0);
        assert_eq!(make(Rounding::OneDecimal).evaluate(100), 33.5);
        assert_eq!(make(Rounding::TwoDecimal).evaluate(100), 33.46);
        assert_eq!(make(Rounding::None).evaluate(100), 33.456);
    }

    #[test]
    fn missing_shape_fields_fall_back_to_form_defaults() {
        let config: CurveConfig = serde_json::from_str(r#"{
            "curve_type": "linear",
            "min_output": 5,
            "max_output": 95,
            "total_population": 4000,
            "rounding": "whole"
        }"#).unwrap();
        assert_eq!(config.steepness(), 1.5);
        assert_eq!(config.mid_point(), 2000);
    }
}
