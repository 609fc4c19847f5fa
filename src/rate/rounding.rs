use serde::{
    Deserialize,
    Serialize
};

use crate::math::round::round;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Rounding {
    #[serde(rename = "whole")]
    Whole,
    #[serde(rename = "1decimal")]
    OneDecimal,
    #[serde(rename = "2decimal")]
    TwoDecimal,
    #[serde(rename = "none")]
    None
}

impl Rounding {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::Whole => round(value, 0),
            Rounding::OneDecimal => round(value, 1),
            Rounding::TwoDecimal => round(value, 2),
            Rounding::None => value
        }
    }
}
