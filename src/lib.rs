//! Forward remote file URLs to the internal gateway, which uploads them to
//! object storage.
//!
//! ```no_run
//! use oss_upload_forwarder::{FileType, GatewayConfig, UploadForwarder};
//!
//! # async fn run() {
//! let forwarder = UploadForwarder::new(GatewayConfig::from_env());
//! let url = forwarder
//!     .forward_upload("https://cdn.example.com/a.png", None, None, Some(FileType::Image))
//!     .await;
//! // `url` is the storage URL, or the original URL if the upload wasn't confirmed
//! # }
//! ```

pub mod api_contracts;
pub mod config;
pub mod error;
pub mod logging;
pub mod upload_forwarder;


pub use api_contracts::{FileType, UploadFromUrlRequest, UploadFromUrlResponse};
pub use config::{GatewayConfig, DEFAULT_GATEWAY_URL, DEFAULT_TIMEOUT, GATEWAY_URL_ENV};
pub use error::ForwardError;
pub use upload_forwarder::{forward_upload, UploadForwarder};
