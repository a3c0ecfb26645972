mod command;
mod handler;
mod hooks;
mod roll;
pub(crate) mod utils;

use crate::cli::Args;
use command::*;
use handler::*;
use hooks::*;
use serenity::client::bridge::gateway::ShardManager;
use serenity::framework::standard::StandardFramework;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use serenity::prelude::GatewayIntents;
use serenity::prelude::Mutex;
use serenity::prelude::TypeMapKey;
use serenity::Client;
use std::collections::HashSet;
use std::env;
use std::sync::Arc;
use tracing::warn;
use tracing_unwrap::ResultExt;
use utils::PREFIX_SIGIL;

const TOKEN_VAR: &str = "DISCORD_TOKEN";
const OPERATOR_CHANNEL_VAR: &str = "OPERATOR_CHANNEL_ID";

pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<Mutex<ShardManager>>;
}

/// Channel receiving unexpected evaluation failures, if configured
fn operator_channel() -> Option<ChannelId> {
    let raw = env::var(OPERATOR_CHANNEL_VAR).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(id) => Some(ChannelId(id)),
        Err(_) => {
            warn!("Env var `{}` is not a channel id: `{}`", OPERATOR_CHANNEL_VAR, raw);
            None
        }
    }
}

pub async fn run(args: &Args) {
    if dotenv::dotenv().is_err() {
        warn!("No `.env` file, reading the environment only");
    }

    let token = env::var(TOKEN_VAR).expect_or_log("Env var `DISCORD_TOKEN`");

    let http = Http::new(&token);

    let (owners, _bot_id) = http
        .get_current_application_info()
        .await
        .map(|info| {
            let mut owners = HashSet::new();
            owners.insert(info.owner.id);
            (owners, info.id)
        })
        .expect_or_log("Could not access app info");

    let framework = StandardFramework::new()
        .configure(|c| c.owners(owners).prefix(PREFIX_SIGIL))
        .before(before)
        .after(after)
        .unrecognised_command(unknown_command)
        .group(&meta::META_GROUP);

    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler {
        options: args.solver_options(),
        operator: operator_channel(),
    };

    let mut client = Client::builder(&token, intents)
        .framework(framework)
        .event_handler(handler)
        .await
        .expect_or_log("Error creating client");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
    }

    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect_or_log("Could not register Ctrl+C handler");
        shard_manager.lock().await.shutdown_all().await;
    });

    client.start().await.expect_or_log("Client error");
}
