pub mod figure;
pub mod predict;
pub mod report;
