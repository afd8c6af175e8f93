use anyhow::Result;

use crate::cli::ParamArgs;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn chat(&self, prompt: String, params: ParamArgs) -> Result<String> {
        let use_case = self.container.send_use_case();
        let reply = use_case.execute(&prompt, Some(params.to_params())).await?;
        Ok(reply)
    }
}
