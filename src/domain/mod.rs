// Domain layer: models and ports. No network or parsing code here.

pub mod model;
pub mod ports;
