use anyhow::Result;
use exitcode::ExitCode;

use super::GlobalOptions;
use crate::chat::ChatSession;

pub async fn run_chat(options: &GlobalOptions) -> Result<ExitCode> {
    let config = options.resolve()?;
    log::info!("Starting chat session against {}", config.api_url);

    let mut session = ChatSession::new(config);
    session.run().await?;
    Ok(exitcode::OK)
}
