// events.rs
use crate::error::Error;
use crate::link_fixer;
use crate::Data;
use poise::serenity_prelude::{Context, FullEvent};
use poise::FrameworkContext;

pub async fn handle_event(
    ctx: &Context,
    event: &FullEvent,
    framework: FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            tracing::info!("Logged in as {}", data_about_bot.user.name);
        }
        FullEvent::Message { new_message } => {
            link_fixer::handle_message(ctx, framework, data, new_message).await?;
        }
        _ => {}
    }
    Ok(())
}
