use anyhow::Result;

use super::super::Container;

pub struct KeyController<'a> {
    container: &'a Container,
}

impl<'a> KeyController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn set_key(&self, key: String) -> Result<String> {
        self.container.credential_use_case().save(&key).await?;
        Ok("API key saved.".to_string())
    }

    pub async fn status(&self) -> Result<String> {
        let stored = self.container.credential_use_case().exists().await?;
        Ok(if stored {
            "API key: stored".to_string()
        } else {
            "API key: not set (use `set-key <KEY>`)".to_string()
        })
    }

    pub async fn clear(&self) -> Result<String> {
        self.container.credential_use_case().clear().await?;
        Ok("API key removed.".to_string())
    }
}
