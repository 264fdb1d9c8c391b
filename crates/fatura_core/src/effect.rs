use crate::{InvoiceFile, UploadId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    UploadInvoice {
        upload_id: UploadId,
        file: InvoiceFile,
    },
}
