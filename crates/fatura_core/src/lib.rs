//! Fatura core: pure submission state machine and view-model projection.
mod effect;
mod error;
mod invoice;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{ErrorKind, ErrorReport};
pub use invoice::{InvoiceExtractionResult, InvoiceFile, InvoiceLineItem, TaxValue};
pub use msg::Msg;
pub use state::{AppState, SubmissionState, UploadId};
pub use update::update;
pub use view_model::{InvoiceRow, InvoiceView, SubmissionView, COLUMNS};
