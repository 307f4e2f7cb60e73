pub mod response;

pub use response::{QuoteRefreshResponse, UploadHistoryResponse, UploadResponse};
