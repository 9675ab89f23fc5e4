//! Bracket domain: the fixed slot layout, the flat frontend format and the
//! read/write workflows over the repositories.

pub mod format;
pub mod positions;
pub mod service;

pub use format::{FormatError, MatchInput};
pub use positions::{Round, POSITION_CODES};
pub use service::{read_bracket, save_bracket, SaveBracketParams, SaveSummary};
