pub mod charts;
pub mod error;
pub mod index;
pub mod navigator;
pub mod params;
pub mod report;
pub mod session;
pub mod settings;
// cmd and reports belong to the binary (see main.rs).
