use super::curveconfig::CurveConfig;

/// Rank spacing of the sample table the admin screens render.
pub const PREVIEW_STEP: i64 = 200;

pub struct PreviewRow {
    rank: i64,
    value: f64
}

impl PreviewRow {
    pub fn new(rank: i64, value: f64) -> PreviewRow {
        PreviewRow { rank, value }
    }

    pub fn rank(&self) -> i64 {
        self.rank
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Ranks sampled for a preview table: rank 1, then every `step` ranks up
/// to and including `total_population` when it falls on the grid.
pub fn preview_ranks(total_population: i64, step: i64) -> Vec<i64> {
    let step = step.max(1);
    let mut ranks = vec![1];
    let mut rank = step;
    while rank <= total_population {
        ranks.push(rank);
        rank += step;
    }
    ranks
}

/// Evaluates `config` over the standard preview grid.
pub fn preview(config: &CurveConfig) -> Vec<PreviewRow> {
    preview_ranks(config.total_population(), PREVIEW_STEP)
        .into_iter()
        .map(|rank| PreviewRow::new(rank, config.evaluate(rank)))
        .collect()
}
