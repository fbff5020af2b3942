pub mod awards;
pub mod candidates;
pub mod catalog;
pub mod dashboard;
pub mod integrity;
pub mod rankings;
