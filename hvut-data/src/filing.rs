//! JSON loader for a complete filing: the filer record plus its vehicles.
//!
//! Every field has a default, so a partial document loads and the missing
//! pieces surface later as validation errors.
//!
//! ```json
//! {
//!   "filer": {
//!     "business_name": "Ridgeline Hauling LLC",
//!     "ein": "12-3456789",
//!     "payment_method": "eftps"
//!   },
//!   "vehicles": [
//!     { "vin": "1HGCM82633A004352", "weight_category": "C", "first_use_month": "202507" }
//!   ]
//! }
//! ```

use std::path::Path;

use hvut_core::Filing;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum FilingLoadError {
    #[error("invalid filing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read filing file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

pub fn load_from_str(input: &str) -> Result<Filing, FilingLoadError> {
    let filing: Filing = serde_json::from_str(input)?;
    debug!(vehicles = filing.vehicles.len(), "parsed filing JSON");
    Ok(filing)
}

pub fn load_from_file(path: &Path) -> Result<Filing, FilingLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FilingLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
