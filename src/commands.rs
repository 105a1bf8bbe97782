// commands.rs
mod fix_twitter;
mod help;
mod toggle_twitter_fix;

use crate::error::Error;
use crate::Data;

pub fn get_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        fix_twitter::fixtwitter(),
        toggle_twitter_fix::toggletwitterfix(),
        help::help(),
    ]
}
