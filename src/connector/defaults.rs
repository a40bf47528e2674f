//! Default sizes for connector decoration (scene units)

pub const ARROW_SIZE: f64 = 10.0;
