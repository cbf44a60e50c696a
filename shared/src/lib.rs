pub mod error;
pub mod models;
pub mod summary;
pub mod tally;
pub mod viewer;

pub use error::{ErrorResponse, VoteError};
pub use models::*;
pub use summary::{decode_summary, decode_summary_str};
pub use tally::summarize;
pub use viewer::{Viewer, VIEWER_HEADER};
