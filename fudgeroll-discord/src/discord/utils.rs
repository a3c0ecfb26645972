use serenity::model::prelude::Message;
use serenity::prelude::Context;
use std::borrow::Cow;

pub const PREFIX_SIGIL: &str = "!";

/// Discord refuses longer messages
pub const MAX_MESSAGE_LEN: usize = 2000;

const ELLIPSIS: &str = "…";

/// Cut `text` on a char boundary so it fits in one message
pub fn fit_message(text: &str) -> Cow<'_, str> {
    if text.chars().count() <= MAX_MESSAGE_LEN {
        return Cow::Borrowed(text);
    }
    let keep = MAX_MESSAGE_LEN - ELLIPSIS.chars().count();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Reply with a ping in guilds, plainly in direct messages
pub async fn send_reply(
    ctx: &Context,
    msg: &Message,
    reply: &str,
) -> Result<Message, serenity::Error> {
    let reply = fit_message(reply);
    if msg.guild_id.is_some() {
        msg.reply_ping(ctx, reply).await
    } else {
        msg.channel_id.say(&ctx.http, reply).await
    }
}
