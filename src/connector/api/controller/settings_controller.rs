use anyhow::Result;

use crate::application::SettingsUpdate;
use crate::cli::ParamArgs;
use crate::domain::{ClientError, ComparisonMode, ComparisonSettings, GenerationParams};

use super::super::Container;

pub struct SettingsController<'a> {
    container: &'a Container,
}

impl<'a> SettingsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn settings(
        &self,
        mode: ComparisonMode,
        params: ParamArgs,
        unset: Vec<String>,
        reset: bool,
    ) -> Result<String> {
        let use_case = self.container.settings_use_case();

        let settings = if reset {
            use_case.reset().await?
        } else {
            let update = build_update(&params, &unset)?;
            if update.is_empty() {
                use_case.load().await?
            } else {
                use_case.update(mode, update).await?
            }
        };

        Ok(self.format_settings(&settings))
    }

    fn format_settings(&self, settings: &ComparisonSettings) -> String {
        let mut output = String::from("Comparison settings\n===================\n");
        for mode in [ComparisonMode::Unrestricted, ComparisonMode::Restricted] {
            output.push_str(&format!("{}:\n", mode));
            output.push_str(&format_params(settings.mode(mode)));
        }
        output.push_str(&format!("Model:    {}\n", self.container.model()));
        output.push_str(&format!("Base URL: {}\n", self.container.base_url()));
        if self.container.memory_storage() {
            output.push_str("Storage:  in memory");
        } else {
            output.push_str(&format!("Data Dir: {}", self.container.data_dir()));
        }
        output
    }
}

fn build_update(params: &ParamArgs, unset: &[String]) -> Result<SettingsUpdate, ClientError> {
    let mut update = SettingsUpdate {
        max_tokens: params.max_tokens.map(Some),
        stop: (!params.stop.is_empty()).then(|| Some(params.stop.clone())),
        temperature: params.temperature.map(Some),
        top_p: params.top_p.map(Some),
        top_k: params.top_k.map(Some),
        frequency_penalty: params.frequency_penalty.map(Some),
        presence_penalty: params.presence_penalty.map(Some),
        seed: params.seed.map(Some),
        format_instruction: params.format_instruction.clone().map(Some),
    };

    for field in unset {
        let previous = match field.replace('-', "_").as_str() {
            "max_tokens" => update.max_tokens.replace(None).map(|v| v.is_some()),
            "stop" => update.stop.replace(None).map(|v| v.is_some()),
            "temperature" => update.temperature.replace(None).map(|v| v.is_some()),
            "top_p" => update.top_p.replace(None).map(|v| v.is_some()),
            "top_k" => update.top_k.replace(None).map(|v| v.is_some()),
            "frequency_penalty" => update.frequency_penalty.replace(None).map(|v| v.is_some()),
            "presence_penalty" => update.presence_penalty.replace(None).map(|v| v.is_some()),
            "seed" => update.seed.replace(None).map(|v| v.is_some()),
            "format_instruction" => update.format_instruction.replace(None).map(|v| v.is_some()),
            unknown => {
                return Err(ClientError::invalid_input(format!(
                    "unknown settings field '{unknown}'"
                )))
            }
        };
        // Only a value given by a flag conflicts; a repeated --unset is fine.
        if previous == Some(true) {
            return Err(ClientError::invalid_input(format!(
                "'{field}' cannot be both set and unset"
            )));
        }
    }

    Ok(update)
}

fn format_params(params: &GenerationParams) -> String {
    let mut lines = Vec::new();
    if let Some(v) = params.max_tokens() {
        lines.push(format!("  max_tokens:         {v}"));
    }
    if let Some(v) = params.stop() {
        lines.push(format!("  stop:               {v:?}"));
    }
    if let Some(v) = params.temperature() {
        lines.push(format!("  temperature:        {v}"));
    }
    if let Some(v) = params.top_p() {
        lines.push(format!("  top_p:              {v}"));
    }
    if let Some(v) = params.top_k() {
        lines.push(format!("  top_k:              {v}"));
    }
    if let Some(v) = params.frequency_penalty() {
        lines.push(format!("  frequency_penalty:  {v}"));
    }
    if let Some(v) = params.presence_penalty() {
        lines.push(format!("  presence_penalty:   {v}"));
    }
    if let Some(v) = params.seed() {
        lines.push(format!("  seed:               {v}"));
    }
    if let Some(v) = params.format_instruction() {
        lines.push(format!("  format_instruction: {v}"));
    }
    if lines.is_empty() {
        lines.push("  (provider defaults)".to_string());
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
