use std::sync::mpsc;

use fatura_core::{update, AppState, Effect, InvoiceFile, Msg, SubmissionView};
use fatura_engine::{EngineEvent, UploadHandle, UploadSettings};
use fatura_logging::{fatura_info, fatura_warn};

/// Drives one invoice submission at a time: owns the state machine, executes
/// effects on the upload engine and republishes view models to observers.
///
/// All state mutation happens on the thread calling into this type; the
/// engine only talks back through its event channel, drained by `pump`.
pub struct SubmissionController {
    state: AppState,
    engine: UploadHandle,
    view_tx: mpsc::Sender<SubmissionView>,
    view_rx: Option<mpsc::Receiver<SubmissionView>>,
}

impl SubmissionController {
    pub fn new(settings: UploadSettings) -> Self {
        let (view_tx, view_rx) = mpsc::channel();
        Self {
            state: AppState::new(),
            engine: UploadHandle::new(settings),
            view_tx,
            view_rx: Some(view_rx),
        }
    }

    /// Observer channel: one view model per state transition, delivered in
    /// transition order. Can be taken once.
    pub fn updates(&mut self) -> Option<mpsc::Receiver<SubmissionView>> {
        self.view_rx.take()
    }

    /// Submit a picked file. `None` (dialog dismissed without a selection)
    /// and picks made while a submission is in flight are ignored.
    pub fn submit(&mut self, file: Option<InvoiceFile>) {
        if let Some(file) = &file {
            // The picker filters on the advertised media type already; a
            // non-image here means the host wired its filter wrong.
            if !file.is_image() {
                fatura_warn!(
                    "selected file {} has non-image media type {}",
                    file.file_name,
                    file.media_type
                );
            }
        }
        self.dispatch(Msg::FileChosen(file));
    }

    /// Back to the upload form; only meaningful from a terminal state.
    pub fn reset(&mut self) {
        self.dispatch(Msg::BackToUploadClicked);
    }

    /// Current projection of the submission slot.
    pub fn view(&self) -> SubmissionView {
        self.state.view()
    }

    /// Drains pending engine events into the state machine. The host calls
    /// this from its event loop.
    pub fn pump(&mut self) {
        while let Some(event) = self.engine.try_recv() {
            let EngineEvent::UploadCompleted { upload_id, result } = event;
            if let Err(report) = &result {
                fatura_warn!("upload {} failed: {}", upload_id, report.message);
            }
            self.dispatch(Msg::UploadFinished { upload_id, result });
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        self.state = state;

        self.run_effects(effects);

        if changed {
            let _ = self.view_tx.send(self.state.view());
        }
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::UploadInvoice { upload_id, file } => {
                    fatura_info!(
                        "UploadInvoice upload_id={} file={} bytes={}",
                        upload_id,
                        file.file_name,
                        file.bytes.len()
                    );
                    self.engine.enqueue(upload_id, file);
                }
            }
        }
    }
}
