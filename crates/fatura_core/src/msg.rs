use crate::{ErrorReport, InvoiceExtractionResult, InvoiceFile, UploadId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked a file in the upload surface (`None` when the dialog was
    /// dismissed without a selection).
    FileChosen(Option<InvoiceFile>),
    /// Engine completion for an upload. Exactly one fires per submission.
    UploadFinished {
        upload_id: UploadId,
        result: Result<InvoiceExtractionResult, ErrorReport>,
    },
    /// User clicked "Back to Upload".
    BackToUploadClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
