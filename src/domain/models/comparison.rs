use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GenerationParams;
use crate::domain::ClientError;

pub const DEFAULT_RESTRICTED_MAX_TOKENS: u32 = 150;
pub const DEFAULT_STOP_SEQUENCE: &str = "[END]";
pub const DEFAULT_FORMAT_INSTRUCTION: &str = "\
Answer briefly: at most three short bullet points, no introduction and no \
conclusion. Write [END] on its own line when the answer is complete.";

/// Which of the two side-by-side requests a set of parameters belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    Unrestricted,
    Restricted,
}

impl ComparisonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Unrestricted => "unrestricted",
            ComparisonMode::Restricted => "restricted",
        }
    }
}

impl FromStr for ComparisonMode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unrestricted" | "free" => Ok(ComparisonMode::Unrestricted),
            "restricted" | "limited" => Ok(ComparisonMode::Restricted),
            unknown => Err(ClientError::invalid_input(format!(
                "unknown comparison mode '{unknown}' (expected 'unrestricted' or 'restricted')"
            ))),
        }
    }
}

impl std::fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted generation parameters for both comparison modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSettings {
    unrestricted: GenerationParams,
    restricted: GenerationParams,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            unrestricted: GenerationParams::new(),
            restricted: GenerationParams::new()
                .with_max_tokens(DEFAULT_RESTRICTED_MAX_TOKENS)
                .with_stop(vec![DEFAULT_STOP_SEQUENCE.to_string()])
                .with_format_instruction(DEFAULT_FORMAT_INSTRUCTION),
        }
    }
}

impl ComparisonSettings {
    pub fn new(unrestricted: GenerationParams, restricted: GenerationParams) -> Self {
        Self {
            unrestricted,
            restricted,
        }
    }

    /// Stored parameters for `mode`, as saved.
    pub fn mode(&self, mode: ComparisonMode) -> &GenerationParams {
        match mode {
            ComparisonMode::Unrestricted => &self.unrestricted,
            ComparisonMode::Restricted => &self.restricted,
        }
    }

    pub fn mode_mut(&mut self, mode: ComparisonMode) -> &mut GenerationParams {
        match mode {
            ComparisonMode::Unrestricted => &mut self.unrestricted,
            ComparisonMode::Restricted => &mut self.restricted,
        }
    }

    /// Parameters ready to send for `mode`. A cleared stop list stays
    /// cleared; nothing is substituted for it.
    pub fn params_for(&self, mode: ComparisonMode) -> GenerationParams {
        self.mode(mode).normalized()
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        self.unrestricted.validate()?;
        self.restricted.validate()
    }
}

/// Outcome of one side-by-side run. Each side succeeds or fails on its own.
#[derive(Debug)]
pub struct Comparison {
    unrestricted: Result<String, ClientError>,
    restricted: Result<String, ClientError>,
    restricted_params: GenerationParams,
}

impl Comparison {
    pub fn new(
        unrestricted: Result<String, ClientError>,
        restricted: Result<String, ClientError>,
        restricted_params: GenerationParams,
    ) -> Self {
        Self {
            unrestricted,
            restricted,
            restricted_params,
        }
    }

    pub fn unrestricted(&self) -> &Result<String, ClientError> {
        &self.unrestricted
    }

    pub fn restricted(&self) -> &Result<String, ClientError> {
        &self.restricted
    }

    pub fn restricted_params(&self) -> &GenerationParams {
        &self.restricted_params
    }
}
