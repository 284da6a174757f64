use anyhow::Result;

use super::open_translator;
use crate::chat::{ChatSession, SessionConfig};
use crate::config::ResolveOptions;

pub struct ChatOptions {
    pub model: Option<String>,
    pub proxy: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let translator = open_translator()?;
    let config = SessionConfig {
        overrides: ResolveOptions {
            model: options.model,
            proxy: options.proxy,
        },
        raw: false,
    };

    let mut session = ChatSession::new(config, translator);
    session.run().await
}
