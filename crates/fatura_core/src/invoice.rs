use std::fmt;

use serde::Deserialize;

/// One billed row of an invoice, as extracted by the backend.
///
/// Wire keys follow the backend contract (Albanian column labels). Every
/// value field is defaulted because the extractor emits `null` for cells it
/// could not parse; a display record has to stay total over that.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceLineItem {
    /// Card/reference number.
    #[serde(rename = "nr_kartele", default, deserialize_with = "null_to_default")]
    pub reference: String,
    /// Item description; non-ASCII text is expected.
    #[serde(rename = "pershkrimi", default, deserialize_with = "null_to_default")]
    pub description: String,
    /// Unit of measure.
    #[serde(rename = "njesia", default, deserialize_with = "null_to_default")]
    pub unit: String,
    #[serde(rename = "sasia", default)]
    pub quantity: Option<f64>,
    #[serde(rename = "cmimi", default)]
    pub unit_price: Option<f64>,
    /// Net value before tax.
    #[serde(rename = "vlera_pa_tvsh", default)]
    pub net_value: Option<f64>,
    /// Tax rate or amount; the backend sends either a number or a display
    /// string such as "18%".
    #[serde(rename = "tvsh", default)]
    pub tax: Option<TaxValue>,
    /// Gross value including tax.
    #[serde(rename = "vlera_me_tvsh", default)]
    pub gross_value: Option<f64>,
}

/// Maps an explicit wire `null` to the field's default; `#[serde(default)]`
/// alone only covers a missing key.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tax cell as the backend reports it: a numeric amount or a preformatted
/// display string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TaxValue {
    Amount(f64),
    Text(String),
}

impl fmt::Display for TaxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxValue::Amount(value) => write!(f, "{value:.2}"),
            TaxValue::Text(text) => f.write_str(text),
        }
    }
}

/// Structured extraction result for one submitted invoice image.
///
/// `items` keeps the service order; nothing in this crate re-sorts it. Both
/// fields default so the type is total over every payload shape the backend
/// has been observed to send (items missing, raw text only).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InvoiceExtractionResult {
    #[serde(default)]
    pub items: Vec<InvoiceLineItem>,
    /// Raw recognized text, shown verbatim next to the parsed table.
    #[serde(default)]
    pub raw_text: String,
}

/// A file handle as delivered by the upload surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceFile {
    pub file_name: String,
    /// Advertised media type, e.g. `image/png`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl InvoiceFile {
    /// Whether the advertised media type is an image. The file picker uses
    /// this as its filter; no content inspection happens anywhere.
    pub fn is_image(&self) -> bool {
        self.media_type
            .split(';')
            .next()
            .unwrap_or(&self.media_type)
            .trim()
            .starts_with("image/")
    }
}
