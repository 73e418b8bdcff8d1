pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod outcome;
pub mod storage;
pub mod url_model;

pub use error::FetchError;
pub use fetcher::fetch_all;
pub use http::{CurlTransport, HttpResponse, Transport};
pub use outcome::{Outcome, Summary};
