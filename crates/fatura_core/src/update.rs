use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen(None) => Vec::new(),
        Msg::FileChosen(Some(file)) => {
            // At most one submission in flight: a second pick while busy is
            // ignored rather than queued or cancelling the first. The guard
            // runs synchronously, before any suspension point.
            if state.is_submitting() {
                return (state, Vec::new());
            }
            let upload_id = state.begin_submission();
            vec![Effect::UploadInvoice { upload_id, file }]
        }
        Msg::UploadFinished { upload_id, result } => {
            // A completion whose upload id no longer matches the slot is
            // stale (the submission was reset and possibly restarted while
            // the request was in flight) and must not be applied.
            if state.current_upload() == Some(upload_id) {
                state.complete(result);
            }
            Vec::new()
        }
        Msg::BackToUploadClicked => {
            state.reset();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
