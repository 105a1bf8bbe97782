use crate::error::Error;
use crate::rewriter::Rewriter;
use crate::Data;
use async_trait::async_trait;
use poise::serenity_prelude::{
    Context, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, EditMessage, Message,
};
use poise::FrameworkContext;

pub const TWITTER_BLUE: u32 = 0x1DA1F2;
pub const FOOTER_TEXT: &str = "Twitter URLs converted to fxtwitter for better previews";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub display_name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Copy)]
pub struct InboundMessage<'a> {
    pub content: &'a str,
    pub from_bot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Ignored,
    NoLinks,
    Fixed,
}

/// What gets sent back to the channel for a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedPost {
    Embed {
        description: String,
        color: u32,
        author: Author,
        footer: &'static str,
    },
    Plain(String),
}

impl FixedPost {
    pub fn new(author: &Author, rewritten: &str, with_embed: bool) -> Self {
        if with_embed {
            FixedPost::Embed {
                description: rewritten.to_string(),
                color: TWITTER_BLUE,
                author: author.clone(),
                footer: FOOTER_TEXT,
            }
        } else {
            FixedPost::Plain(rewritten.to_string())
        }
    }

    fn into_message(self) -> CreateMessage {
        match self {
            FixedPost::Embed {
                description,
                color,
                author,
                footer,
            } => {
                let embed = CreateEmbed::new()
                    .description(description)
                    .color(color)
                    .author(CreateEmbedAuthor::new(author.display_name).icon_url(author.avatar_url))
                    .footer(CreateEmbedFooter::new(footer));
                CreateMessage::new().embed(embed)
            }
            FixedPost::Plain(content) => CreateMessage::new().content(content),
        }
    }
}

/// Where fixed links get posted back to.
#[async_trait]
pub trait LinkFixChannel: Send + Sync {
    /// Only asked for once a message is known to need fixing; may hit the API.
    async fn author(&self) -> Author;

    async fn post_fixed(&self, post: FixedPost) -> Result<(), Error>;

    async fn suppress_original_embeds(&self) -> Result<(), Error>;
}

pub async fn observe<C>(
    channel: &C,
    rewriter: &Rewriter,
    message: InboundMessage<'_>,
    with_embed: bool,
    suppress_embeds: bool,
) -> Result<Observation, Error>
where
    C: LinkFixChannel + ?Sized,
{
    if message.from_bot || message.content.is_empty() {
        return Ok(Observation::Ignored);
    }

    let result = rewriter.rewrite(message.content);
    if !result.changed {
        return Ok(Observation::NoLinks);
    }

    let author = channel.author().await;
    channel
        .post_fixed(FixedPost::new(&author, &result.rewritten_text, with_embed))
        .await?;

    if suppress_embeds {
        // Cosmetic only; missing Manage Messages is expected in many guilds.
        if let Err(e) = channel.suppress_original_embeds().await {
            tracing::debug!("Could not suppress original embeds: {}", e);
        }
    }

    Ok(Observation::Fixed)
}

struct DiscordChannel<'a> {
    ctx: &'a Context,
    message: &'a Message,
}

#[async_trait]
impl LinkFixChannel for DiscordChannel<'_> {
    async fn author(&self) -> Author {
        match self.message.member(self.ctx).await {
            Ok(member) => Author {
                display_name: member.display_name().to_string(),
                avatar_url: member.face(),
            },
            Err(e) => {
                tracing::debug!("Falling back to user profile for {}: {}", self.message.author.id, e);
                let nick = self.message.member.as_ref().and_then(|m| m.nick.clone());
                Author {
                    display_name: nick
                        .unwrap_or_else(|| self.message.author.display_name().to_string()),
                    avatar_url: self.message.author.face(),
                }
            }
        }
    }

    async fn post_fixed(&self, post: FixedPost) -> Result<(), Error> {
        self.message
            .channel_id
            .send_message(&self.ctx.http, post.into_message())
            .await?;
        Ok(())
    }

    async fn suppress_original_embeds(&self) -> Result<(), Error> {
        let mut original = self.message.clone();
        original
            .edit(self.ctx, EditMessage::new().suppress_embeds(true))
            .await?;
        Ok(())
    }
}

pub async fn handle_message(
    ctx: &Context,
    _framework: FrameworkContext<'_, Data, Error>,
    data: &Data,
    message: &Message,
) -> Result<(), Error> {
    let inbound = InboundMessage {
        content: &message.content,
        from_bot: message.author.bot,
    };
    let channel = DiscordChannel { ctx, message };

    let observation = observe(
        &channel,
        &data.rewriter,
        inbound,
        data.config.reply_with_embed,
        data.config.suppress_original_embeds,
    )
    .await?;

    if observation == Observation::Fixed {
        tracing::info!(
            "Fixed Twitter links in message {} (channel {})",
            message.id,
            message.channel_id
        );
    }

    Ok(())
}
