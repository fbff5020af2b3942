pub mod award_entry;
pub mod candidate;
pub mod category;
pub mod program;

pub use award_entry::{AwardEntry, NewAward};
pub use candidate::Candidate;
pub use category::Category;
pub use program::Program;
