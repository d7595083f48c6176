use serde::{Deserialize, Serialize};
use strum::EnumString;

/// The `Format` enum represents the output formats the tool supports.
///
/// `Csv` is the raw payload as fetched, `Json` is the converted nested
/// document.  Parsing is strict lowercase on purpose: the upstream contract
/// only names `csv` and `json` and anything else must be rejected, not
/// guessed at.
///
#[derive(
    Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq, strum::Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// Raw payload, as fetched
    #[default]
    Csv,
    /// Indented JSON array with nested objects
    Json,
}
