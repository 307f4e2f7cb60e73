pub mod api;
pub mod outcome;
pub mod view;

pub use outcome::UploadOutcome;
pub use view::{QuoteRefreshButton, UploadHistory, UploadModal};
