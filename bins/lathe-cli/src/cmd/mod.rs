pub mod report;
pub mod stage;
