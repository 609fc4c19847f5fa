use chrono::{
    DateTime,
    Utc
};
use serde::{
    Deserialize,
    Serialize
};
use uuid::Uuid;

use crate::objectwithuuid::ObjectWithUUID;
use super::curveconfig::CurveConfig;

/// A named, persisted curve configuration. At most one save per store is
/// the current one, the configuration live entities are rated with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSave {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    name: String,
    config: CurveConfig,
    #[serde(default)]
    is_current: bool,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    updated_at: DateTime<Utc>
}

impl RateSave {
    pub fn new(name: String, config: CurveConfig) -> RateSave {
        let now = Utc::now();
        RateSave {
            id: Uuid::new_v4(),
            name,
            config,
            is_current: false,
            created_at: now,
            updated_at: now
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn is_current(&self) -> bool {
        self.is_current
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub(crate) fn set_config(&mut self, config: CurveConfig) {
        self.config = config;
        self.updated_at = Utc::now();
    }

    pub(crate) fn set_current(&mut self, is_current: bool) {
        self.is_current = is_current;
    }
}

impl ObjectWithUUID for RateSave {
    fn uuid(&self) -> &Uuid {
        &self.id
    }
}
