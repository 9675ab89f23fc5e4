pub mod matches;
pub mod teams;
pub mod tournaments;

pub use matches::UpsertMatch;
