// config.rs
use crate::rewriter::DEFAULT_MIRROR_HOST;
use serde::Deserialize;
use tokio::io::AsyncReadExt;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub bot_token: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_mirror_host")]
    pub mirror_host: String,
    /// Post fixed links as an embed carrying the sender's name and avatar.
    /// When off, the fixed text is sent as a plain message.
    #[serde(default = "enabled")]
    pub reply_with_embed: bool,
    /// Needs the Manage Messages permission; skipped quietly without it.
    #[serde(default = "enabled")]
    pub suppress_original_embeds: bool,
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_mirror_host() -> String {
    DEFAULT_MIRROR_HOST.to_string()
}

fn enabled() -> bool {
    true
}

impl Config {
    pub async fn load() -> Result<Self, crate::error::Error> {
        let mut file = tokio::fs::File::open("config.toml").await?;
        let mut contents = String::new();
        AsyncReadExt::read_to_string(&mut file, &mut contents).await?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, crate::error::Error> {
        toml::from_str(contents).map_err(Into::into)
    }
}
