use fatura_core::{ErrorReport, InvoiceExtractionResult, UploadId};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Delivered exactly once per enqueued upload, success or failure.
    UploadCompleted {
        upload_id: UploadId,
        result: Result<InvoiceExtractionResult, ErrorReport>,
    },
}
