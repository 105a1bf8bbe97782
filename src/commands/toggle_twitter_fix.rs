// commands/toggle_twitter_fix.rs
use crate::error::Error;
use crate::Data;

type Context<'a> = poise::Context<'a, Data, Error>;

#[derive(Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Per-server switches need persistent storage, which this bot doesn't have.
    Unsupported,
}

impl ToggleOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ToggleOutcome::Unsupported => {
                "This feature would require a database to store server preferences!"
            }
        }
    }
}

pub fn toggle() -> ToggleOutcome {
    ToggleOutcome::Unsupported
}

/// Toggle automatic Twitter URL fixing for this server (Admin only)
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    category = "Links"
)]
pub async fn toggletwitterfix(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(toggle().message()).await?;
    Ok(())
}
