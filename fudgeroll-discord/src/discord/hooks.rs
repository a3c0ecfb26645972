use serenity::framework::standard::macros::hook;
use serenity::framework::standard::CommandResult;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::error;
use tracing::info;
use tracing::warn;

#[hook]
pub(crate) async fn before(_ctx: &Context, msg: &Message, command: &str) -> bool {
    info!("Got command `{}` by user `{}`", command, msg.author.name);
    true
}

#[hook]
pub(crate) async fn after(_ctx: &Context, _msg: &Message, command: &str, result: CommandResult) {
    match result {
        Ok(()) => info!("Processed command `{}`", command),
        Err(why) => error!("Command `{}` returned error `{:?}`", command, why),
    }
}

#[hook]
pub(crate) async fn unknown_command(_ctx: &Context, _msg: &Message, unknown: &str) {
    warn!("Could not find command named `{}`", unknown);
}
