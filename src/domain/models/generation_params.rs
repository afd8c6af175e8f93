use serde::{Deserialize, Serialize};

use crate::domain::ClientError;

/// Per-request generation controls.
///
/// Every field is independently optional. A field left as `None` is omitted
/// from the outgoing request entirely, so "not set" never turns into a
/// provider-side default of `0` or `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
    /// Sent as a system message ahead of the user prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    format_instruction: Option<String>,
}

impl GenerationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_frequency_penalty(mut self, penalty: f64) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    pub fn with_presence_penalty(mut self, penalty: f64) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_format_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.format_instruction = Some(instruction.into());
        self
    }

    pub fn set_max_tokens(&mut self, max_tokens: Option<u32>) {
        self.max_tokens = max_tokens;
    }

    pub fn set_stop(&mut self, stop: Option<Vec<String>>) {
        self.stop = stop;
    }

    pub fn set_temperature(&mut self, temperature: Option<f64>) {
        self.temperature = temperature;
    }

    pub fn set_top_p(&mut self, top_p: Option<f64>) {
        self.top_p = top_p;
    }

    pub fn set_top_k(&mut self, top_k: Option<u32>) {
        self.top_k = top_k;
    }

    pub fn set_frequency_penalty(&mut self, penalty: Option<f64>) {
        self.frequency_penalty = penalty;
    }

    pub fn set_presence_penalty(&mut self, penalty: Option<f64>) {
        self.presence_penalty = penalty;
    }

    pub fn set_seed(&mut self, seed: Option<i64>) {
        self.seed = seed;
    }

    pub fn set_format_instruction(&mut self, instruction: Option<String>) {
        self.format_instruction = instruction;
    }

    pub fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    pub fn stop(&self) -> Option<&[String]> {
        self.stop.as_deref()
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn top_p(&self) -> Option<f64> {
        self.top_p
    }

    pub fn top_k(&self) -> Option<u32> {
        self.top_k
    }

    pub fn frequency_penalty(&self) -> Option<f64> {
        self.frequency_penalty
    }

    pub fn presence_penalty(&self) -> Option<f64> {
        self.presence_penalty
    }

    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    pub fn format_instruction(&self) -> Option<&str> {
        self.format_instruction.as_deref()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Drops values that would only produce noise on the wire: blank stop
    /// entries, an empty stop list and a blank format instruction.
    pub fn normalized(&self) -> Self {
        let mut params = self.clone();

        params.stop = params.stop.take().and_then(|stops| {
            let kept: Vec<String> = stops.into_iter().filter(|s| !s.is_empty()).collect();
            (!kept.is_empty()).then_some(kept)
        });

        params.format_instruction = params
            .format_instruction
            .take()
            .filter(|instruction| !instruction.trim().is_empty());

        params
    }

    /// Range checks for values the provider would reject anyway.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.max_tokens == Some(0) {
            return Err(ClientError::invalid_input("max_tokens must be positive"));
        }
        if let Some(top_p) = self.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(ClientError::invalid_input(format!(
                    "top_p must be within [0, 1], got {top_p}"
                )));
            }
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ClientError::invalid_input(format!(
                    "temperature must be within [0, 2], got {temperature}"
                )));
            }
        }
        for (name, value) in [
            ("frequency_penalty", self.frequency_penalty),
            ("presence_penalty", self.presence_penalty),
        ] {
            if let Some(value) = value {
                if !(-2.0..=2.0).contains(&value) {
                    return Err(ClientError::invalid_input(format!(
                        "{name} must be within [-2, 2], got {value}"
                    )));
                }
            }
        }
        Ok(())
    }
}
