use serde::{Deserialize, Serialize};

/// Where the engine is running. Only production requires a CAPTCHA token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Local,
    Testing,
}

impl Environment {
    pub fn waives_captcha(&self) -> bool {
        matches!(self, Self::Local | Self::Testing)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "local" | "localhost" | "development" | "dev" => Some(Self::Local),
            "testing" | "test" => Some(Self::Testing),
            _ => None,
        }
    }
}

/// Settings that change how submissions are validated.
///
/// | field         | default      | effect                                   |
/// |---------------|--------------|------------------------------------------|
/// | `environment` | `production` | `local`/`testing` skip the CAPTCHA check |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub environment: Environment,
}
