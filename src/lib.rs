pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod savemanager;
}

pub mod math {
    pub mod round;
}

pub mod objectwithuuid;

pub mod rate {
    pub mod batch;
    pub mod curveconfig;
    pub mod curvetype;
    pub mod preview;
    pub mod ratesave;
    pub mod rounding;
}
