use anyhow::Result;
use crate::utils::app_config::AppConfig;

pub trait ActionProcessor<Output> {
    async fn process(&self, app_config: &AppConfig) -> Result<Output>;
}
