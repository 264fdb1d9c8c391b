//! Fatura app shell: wires the pure submission core to the upload engine.
//!
//! The UI host embeds [`SubmissionController`], forwards file picks and
//! "Back to Upload" clicks to it, calls [`SubmissionController::pump`] from
//! its event loop and renders the view models it publishes.
mod controller;

pub use controller::SubmissionController;
pub use fatura_engine::UploadSettings;
pub use fatura_logging::{initialize, LogDestination};
