use anyhow::Result;

use crate::domain::{ClientError, Comparison, GenerationParams};

use super::super::Container;

pub struct CompareController<'a> {
    container: &'a Container,
}

impl<'a> CompareController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn compare(&self, prompt: String) -> Result<String> {
        let use_case = self.container.compare_use_case();
        let comparison = use_case.execute(&prompt).await?;
        Ok(self.format_comparison(&comparison))
    }

    fn format_comparison(&self, comparison: &Comparison) -> String {
        let mut output = String::from("Unrestricted:\n");
        output.push_str(&render_reply(comparison.unrestricted()));
        output.push_str("\n\n");
        output.push_str(&format!(
            "Restricted ({}):\n",
            describe_limits(comparison.restricted_params())
        ));
        output.push_str(&render_reply(comparison.restricted()));
        output
    }
}

fn render_reply(reply: &Result<String, ClientError>) -> String {
    match reply {
        Ok(text) => text.clone(),
        Err(e) => format!("Error: {e}"),
    }
}

fn describe_limits(params: &GenerationParams) -> String {
    let mut parts = Vec::new();
    if params.format_instruction().is_some() {
        parts.push("format".to_string());
    }
    if let Some(max_tokens) = params.max_tokens() {
        parts.push(format!("max {max_tokens} tokens"));
    }
    if let Some(stop) = params.stop() {
        parts.push(format!("stop={}", stop.join(", ")));
    }
    if parts.is_empty() {
        return "no limits configured".to_string();
    }
    parts.join(", ")
}
