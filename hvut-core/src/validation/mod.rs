//! Submission checks run before payment and filing.
//!
//! The rules mirror the e-file business rules for Form 2290 and run in a
//! fixed order; only the first failure is reported. Expected bad input is
//! never an `Err` from the calculators, only from here.
//!
//! # Example
//!
//! ```
//! use hvut_core::{FilingEngine, FilerRecord, RateTables, ValidationConfig, ValidationError};
//!
//! let engine = FilingEngine::new(RateTables::irs(), ValidationConfig::default());
//! let filer = FilerRecord {
//!     ein: "99-9999999".to_string(),
//!     ..Default::default()
//! };
//! let computation = engine.compute(&[]);
//!
//! let result = engine
//!     .validator()
//!     .validate(&filer, &[], &computation, Some("token"));
//!
//! assert_eq!(result, Err(ValidationError::BusinessNameRequired));
//! ```

mod error;
mod format;
mod rules;

use tracing::debug;

pub use error::ValidationError;
pub use rules::MAX_ADDRESS_LEN;

use crate::config::ValidationConfig;
use crate::engine::FilingComputation;
use crate::models::{FilerRecord, Vehicle};

/// Everything a rule may look at.
pub(crate) struct ValidationContext<'a> {
    pub filer: &'a FilerRecord,
    pub vehicles: &'a [Vehicle],
    pub computation: &'a FilingComputation,
    pub captcha_token: Option<&'a str>,
    pub config: &'a ValidationConfig,
}

/// Runs the ordered rule list.
#[derive(Debug, Clone, Copy)]
pub struct ValidationEngine<'a> {
    config: &'a ValidationConfig,
}

impl<'a> ValidationEngine<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the first rule `filer` and `vehicles` break, or `Ok(())`.
    ///
    /// `computation` must come from the same vehicle list; the credit and
    /// payment rules read its totals and per-vehicle results.
    pub fn validate(
        &self,
        filer: &FilerRecord,
        vehicles: &[Vehicle],
        computation: &FilingComputation,
        captcha_token: Option<&str>,
    ) -> Result<(), ValidationError> {
        let ctx = ValidationContext {
            filer,
            vehicles,
            computation,
            captcha_token,
            config: self.config,
        };

        for (name, rule) in rules::RULES {
            if let Err(error) = rule(&ctx) {
                debug!(rule = name, %error, "submission rejected");
                return Err(error);
            }
        }
        Ok(())
    }
}
