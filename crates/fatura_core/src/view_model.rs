use crate::{InvoiceExtractionResult, SubmissionState};

/// Column labels in the fixed display order: reference, description, unit,
/// quantity, unit price, net value, tax, gross value.
pub const COLUMNS: [&str; 8] = [
    "Nr Kartele",
    "Përshkrimi",
    "Njësia",
    "Sasia",
    "Çmimi",
    "Vlera pa TVSH",
    "TVSH",
    "Vlera me TVSH",
];

/// What the rendering layer sees. A pure function of the submission slot;
/// nothing here is cached or mutated by the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionView {
    /// True while a request is in flight (busy indicator).
    pub busy: bool,
    /// Failure message to surface inline next to the upload control.
    pub error: Option<String>,
    /// Present only after a successful extraction. `None` here is "no
    /// result yet", distinct from a result with zero items.
    pub invoice: Option<InvoiceView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceView {
    pub columns: [&'static str; 8],
    /// One row per line item, in service order.
    pub rows: Vec<InvoiceRow>,
    /// Raw recognized text, verbatim (whitespace preserved). `None` when
    /// empty so the audit block is not rendered at all.
    pub raw_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    /// Cell text in `COLUMNS` order.
    pub cells: [String; 8],
}

pub(crate) fn project(submission: &SubmissionState) -> SubmissionView {
    match submission {
        SubmissionState::Idle => SubmissionView::default(),
        SubmissionState::Submitting { .. } => SubmissionView {
            busy: true,
            ..SubmissionView::default()
        },
        SubmissionState::Failed(report) => SubmissionView {
            error: Some(report.message.clone()),
            ..SubmissionView::default()
        },
        SubmissionState::Succeeded(result) => SubmissionView {
            invoice: Some(invoice_view(result)),
            ..SubmissionView::default()
        },
    }
}

fn invoice_view(result: &InvoiceExtractionResult) -> InvoiceView {
    let rows = result
        .items
        .iter()
        .map(|item| InvoiceRow {
            cells: [
                item.reference.clone(),
                item.description.clone(),
                item.unit.clone(),
                format_quantity(item.quantity),
                format_amount(item.unit_price),
                format_amount(item.net_value),
                item.tax
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                format_amount(item.gross_value),
            ],
        })
        .collect();

    InvoiceView {
        columns: COLUMNS,
        rows,
        raw_text: (!result.raw_text.is_empty()).then(|| result.raw_text.clone()),
    }
}

fn format_quantity(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn format_amount(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}
