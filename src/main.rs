// main.rs
mod commands;
mod config;
mod error;
mod events;
mod link_fixer;
mod rewriter;

use crate::config::Config;
use crate::error::Error;
use crate::rewriter::Rewriter;
use poise::serenity_prelude as serenity;
use serenity::GatewayIntents;
use std::sync::Arc;
use tracing::Level;

#[derive(Clone)]
pub struct Data {
    pub config: Arc<Config>,
    pub rewriter: Rewriter,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = Config::load().await?;
    let rewriter = Rewriter::new(&config.mirror_host)?;
    tracing::info!("Rewriting Twitter links to {}", rewriter.mirror_host());

    let data = Data {
        config: Arc::new(config.clone()),
        rewriter,
    };

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::get_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix.clone()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handle_event(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.bot_token, GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT)
        .framework(framework)
        .await?;

    client.start_autosharded().await.map_err(Error::from)
}
