use crate::view_model::{self, SubmissionView};
use crate::{ErrorReport, InvoiceExtractionResult};

/// Sequence number for one accepted submission. Completions carry it back so
/// a response for a superseded submission can be discarded.
pub type UploadId = u64;

/// The single submission slot. Exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting {
        upload_id: UploadId,
    },
    Succeeded(InvoiceExtractionResult),
    Failed(ErrorReport),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    submission: SubmissionState,
    next_upload_id: UploadId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn view(&self) -> SubmissionView {
        view_model::project(&self.submission)
    }

    /// Returns whether a transition happened since the last call and clears
    /// the flag. The shell uses this to coalesce observer notifications.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting { .. })
    }

    pub(crate) fn current_upload(&self) -> Option<UploadId> {
        match self.submission {
            SubmissionState::Submitting { upload_id } => Some(upload_id),
            _ => None,
        }
    }

    /// Allocates the next upload id and moves the slot to `Submitting`,
    /// dropping any previous result or failure report.
    pub(crate) fn begin_submission(&mut self) -> UploadId {
        self.next_upload_id += 1;
        let upload_id = self.next_upload_id;
        self.submission = SubmissionState::Submitting { upload_id };
        self.dirty = true;
        upload_id
    }

    pub(crate) fn complete(&mut self, result: Result<InvoiceExtractionResult, ErrorReport>) {
        self.submission = match result {
            Ok(extraction) => SubmissionState::Succeeded(extraction),
            Err(report) => SubmissionState::Failed(report),
        };
        self.dirty = true;
    }

    /// Back to the upload form. Only terminal states can be reset; from
    /// `Idle` or `Submitting` this is a no-op.
    pub(crate) fn reset(&mut self) {
        if matches!(
            self.submission,
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
        ) {
            self.submission = SubmissionState::Idle;
            self.dirty = true;
        }
    }
}
