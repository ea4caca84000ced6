pub mod creation;
pub mod matching;
pub mod query;
