use super::roll::format_error;
use super::roll::scan;
use super::utils::send_reply;
use super::utils::PREFIX_SIGIL;
use fudgeroll_lib::dice::Critic;
use fudgeroll_lib::solver::Options;
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::event::ResumedEvent;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use serenity::model::prelude::ReactionType;
use serenity::prelude::Context;
use serenity::prelude::EventHandler;
use std::collections::HashSet;
use tracing::debug;
use tracing::error;
use tracing::info;

const TWEMOJI_MIN: &str = "🥶";
const TWEMOJI_MAX: &str = "🤩";

pub(crate) struct Handler {
    pub(crate) options: Options,
    /// Where unexpected failures are reported
    pub(crate) operator: Option<ChannelId>,
}

impl Handler {
    async fn report(&self, ctx: &Context, msg: &Message, token: &str, why: &str) {
        error!("Failed to solve `{}` from `{}`: {}", token, msg.author.name, why);
        if let Some(operator) = self.operator {
            let report = format!(
                "**failure** solving `{}` for **{}** in <#{}>\n{}",
                token, msg.author.name, msg.channel_id, why
            );
            if let Err(why) = operator.say(&ctx.http, report).await {
                error!("Could not reach operator channel: {:?}", why);
            }
        }
    }

    async fn react_to_critics(ctx: &Context, msg: &Message, critics: &HashSet<Critic>) {
        for critic in critics.iter() {
            let twemoji = match critic {
                Critic::Max => TWEMOJI_MAX,
                Critic::Min => TWEMOJI_MIN,
                Critic::Not => continue,
            };
            if let Err(why) = msg
                .react(ctx, ReactionType::Unicode(twemoji.to_string()))
                .await
            {
                debug!("Could not react to roll: {:?}", why);
            }
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || msg.content.starts_with(PREFIX_SIGIL) {
            return;
        }
        let found = scan(&msg.content, &self.options);
        for (token, failure) in found.unexpected.iter() {
            self.report(&ctx, &msg, token, &format_error(failure)).await;
        }
        let reply = match found.reply() {
            Some(reply) => reply,
            None => return,
        };
        if msg.guild_id.is_none() {
            debug!("Rolling in direct message with `{}`", msg.author.name);
        }
        match send_reply(&ctx, &msg, &reply).await {
            Ok(sent) => Self::react_to_critics(&ctx, &sent, &found.critics).await,
            Err(why) => self.report(&ctx, &msg, &msg.content, &format!("{:?}", why)).await,
        }
    }

    async fn ready(&self, _: Context, ready: Ready) {
        info!(
            "Connected as `{}` in {} guilds",
            ready.user.name,
            ready.guilds.len()
        );
        if self.operator.is_none() {
            info!("No operator channel, failures are only logged");
        }
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        debug!("Resumed");
    }
}
