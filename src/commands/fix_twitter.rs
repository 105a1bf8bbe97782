// commands/fix_twitter.rs
use crate::error::Error;
use crate::link_fixer::TWITTER_BLUE;
use crate::rewriter::Rewriter;
use crate::Data;
use poise::serenity_prelude::CreateEmbed;
use poise::CreateReply;

type Context<'a> = poise::Context<'a, Data, Error>;

#[derive(Debug, PartialEq, Eq)]
pub enum FixReply {
    MissingInput,
    NoLinks,
    Fixed { original: String, fixed: String },
}

pub fn fix_reply(rewriter: &Rewriter, input: Option<&str>) -> FixReply {
    let Some(text) = input.filter(|text| !text.trim().is_empty()) else {
        return FixReply::MissingInput;
    };

    let result = rewriter.rewrite(text);
    if result.changed {
        FixReply::Fixed {
            original: result.original_text,
            fixed: result.rewritten_text,
        }
    } else {
        FixReply::NoLinks
    }
}

/// Manually convert a Twitter URL to fxtwitter URL
#[poise::command(prefix_command, slash_command, aliases("fx"), category = "Links")]
pub async fn fixtwitter(
    ctx: Context<'_>,
    #[description = "Text containing Twitter URLs"]
    #[rest]
    url: Option<String>,
) -> Result<(), Error> {
    match fix_reply(&ctx.data().rewriter, url.as_deref()) {
        FixReply::MissingInput => {
            ctx.say("Please provide a Twitter URL to convert!").await?;
        }
        FixReply::NoLinks => {
            ctx.say("No Twitter URLs found in the provided text!").await?;
        }
        FixReply::Fixed { original, fixed } => {
            let embed = CreateEmbed::new()
                .title("Twitter URL Fixed!")
                .description(format!("**Original:** {}\n**Fixed:** {}", original, fixed))
                .color(TWITTER_BLUE);
            ctx.send(CreateReply::default().embed(embed)).await?;
        }
    }

    Ok(())
}
