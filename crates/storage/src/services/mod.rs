pub mod awards;
pub mod candidates;
pub mod dashboard;
pub mod integrity;
pub mod ranking;
