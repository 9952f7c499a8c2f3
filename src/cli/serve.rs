//! HTTP API server command handler

use crate::config::UserConfig;
use anyhow::Result;

/// Run the API server on a fresh runtime
pub fn run(bind: Option<&str>) -> Result<()> {
    let config = UserConfig::load()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(crate::server::run(&config, bind))
}
