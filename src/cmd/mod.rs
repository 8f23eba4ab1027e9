pub mod chart;
pub mod keys;
pub mod series;
