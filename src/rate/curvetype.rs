use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    Linear,
    Exponential,
    Logarithmic,
    Sigmoid
}

impl CurveType {
    /// Maps a rank onto the curve's normalized value, roughly in [0, 1]
    /// with 1 at the rarest rank and 0 at the most common.
    ///
    /// Out-of-range ranks extrapolate with the same formulas; no clamping
    /// is performed. The exponential shape returns NaN when the rank
    /// exceeds the population and the steepness is non-integral, since the
    /// base of the power turns negative.
    pub fn normalized_value(&self,
                            rank: i64,
                            steepness: f64,
                            mid_point: i64,
                            total_population: i64) -> f64 {
        let normalized_rank = rank as f64 / total_population as f64;
        match self {
            CurveType::Linear => 1.0 - normalized_rank,
            CurveType::Exponential => (1.0 - normalized_rank).powf(steepness),
            CurveType::Logarithmic => {
                if normalized_rank == 0.0 {
                    1.0
                } else {
                    (1.0 + (1.0 - normalized_rank + 0.1).log10()).max(0.0)
                }
            },
            CurveType::Sigmoid => {
                let x = (rank - mid_point) as f64 / (total_population as f64 / 4.0);
                1.0 / (1.0 + (steepness * x).exp())
            }
        }
    }
}
