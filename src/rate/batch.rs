use super::curveconfig::CurveConfig;
use crate::math::round::round;

/// Rank assumed for an entity whose rarity rank was never indexed, when no
/// curve configuration is active either.
const FALLBACK_MID_RANK: i64 = 2000;

/// One member of the ranked population a configuration gets applied to.
/// The rank is optional because freshly indexed entities may not have
/// been ranked yet.
#[derive(Debug, Clone)]
pub struct RankedEntity {
    asset_id: String,
    rank: Option<i64>
}

impl RankedEntity {
    pub fn new(asset_id: String, rank: Option<i64>) -> RankedEntity {
        RankedEntity { asset_id, rank }
    }

    pub fn asset_id(&self) -> &String {
        &self.asset_id
    }

    pub fn rank(&self) -> Option<i64> {
        self.rank
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedRate {
    asset_id: String,
    rate: f64
}

impl AppliedRate {
    pub fn new(asset_id: String, rate: f64) -> AppliedRate {
        AppliedRate { asset_id, rate }
    }

    pub fn asset_id(&self) -> &String {
        &self.asset_id
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Applies a configuration across a population, one evaluation per entity.
/// Entities without a rank are treated as sitting mid-population.
pub fn apply(config: &CurveConfig, entities: &[RankedEntity]) -> Vec<AppliedRate> {
    entities
        .iter()
        .map(|entity| {
            let rank = entity.rank().unwrap_or(config.total_population() / 2);
            AppliedRate::new(entity.asset_id().to_owned(), config.evaluate(rank))
        })
        .collect()
}

/// Rates used when no configuration is active: a fixed linear scale from
/// 100 at rank 1 down to a floor of 10, rounded to two decimals.
pub fn default_rates(entities: &[RankedEntity]) -> Vec<AppliedRate> {
    entities
        .iter()
        .map(|entity| {
            let rank = entity.rank().unwrap_or(FALLBACK_MID_RANK);
            let rate = (100.0 - (rank - 1) as f64 * 0.0225).max(10.0);
            AppliedRate::new(entity.asset_id().to_owned(), round(rate, 2))
        })
        .collect()
}
