pub mod generator;
pub mod report;
