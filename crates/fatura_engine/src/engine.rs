use std::sync::{mpsc, Arc};
use std::thread;

use fatura_core::{InvoiceFile, UploadId};
use fatura_logging::fatura_error;

use crate::upload::{ReqwestUploader, UploadSettings, Uploader};
use crate::EngineEvent;

enum EngineCommand {
    Enqueue { upload_id: UploadId, file: InvoiceFile },
}

/// Bridge between the synchronous shell and the async upload path.
///
/// Commands go in over a channel consumed by a dedicated thread owning a
/// tokio runtime; exactly one `UploadCompleted` event comes back per
/// enqueued upload. There is no cancellation: the request timeout is the
/// only way a stuck upload resolves.
pub struct UploadHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl UploadHandle {
    pub fn new(settings: UploadSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let uploader = Arc::new(ReqwestUploader::new(settings));

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    fatura_error!("upload runtime failed to start: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let uploader = uploader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(uploader.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn enqueue(&self, upload_id: UploadId, file: InvoiceFile) {
        let _ = self.cmd_tx.send(EngineCommand::Enqueue { upload_id, file });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    uploader: &dyn Uploader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Enqueue { upload_id, file } => {
            let result = uploader.upload(upload_id, &file).await;
            let _ = event_tx.send(EngineEvent::UploadCompleted { upload_id, result });
        }
    }
}
