pub mod award;
pub mod candidate;
pub mod catalog;
pub mod common;
pub mod dashboard;
pub mod integrity;
pub mod ranking;
