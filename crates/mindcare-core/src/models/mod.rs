pub mod analysis;
pub mod scores;
pub mod severity;
