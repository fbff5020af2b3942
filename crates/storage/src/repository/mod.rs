pub mod award;
pub mod candidate;
pub mod catalog;
pub mod integrity;
