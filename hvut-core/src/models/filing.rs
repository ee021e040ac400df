use serde::{Deserialize, Serialize};

use crate::models::{FilerRecord, Vehicle};

/// Input to the engine: the filer section plus the vehicle schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filing {
    pub filer: FilerRecord,
    pub vehicles: Vec<Vehicle>,
}
