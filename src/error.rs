use poise::serenity_prelude;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serenity error: {0}")]
    Serenity(#[from] serenity_prelude::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mirror host: {0:?}")]
    InvalidMirrorHost(String),
}
