//! Minimal bot that posts one paginated message and drives it from gateway
//! reaction events.
//!
//! Requires `DISCORD_TOKEN` and `DEMO_CHANNEL_ID` in the environment.

use std::env;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::id::Id;

use rusty_paginator::{
    ControlScheme, PageSet, Paginator, SessionConfig, TwilightTransport, navigation_event,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let token = env::var("DISCORD_TOKEN")?;
    let channel_id = env::var("DEMO_CHANNEL_ID")?.parse::<u64>()?;

    let http = Arc::new(Client::new(token.clone()));
    let bot_user = http.current_user().await?.model().await?;

    let intents = Intents::GUILDS | Intents::GUILD_MESSAGE_REACTIONS;
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    let (event_tx, event_rx) = mpsc::channel(64);

    let pages = PageSet::text(vec![
        "Welcome! This is page {current_page} of {total_pages}.".to_owned(),
        "React with the arrows to navigate ({current_page}/{total_pages}).".to_owned(),
        "Last one ({current_page}/{total_pages}).".to_owned(),
    ])?;

    let config = SessionConfig {
        auto_fill_index: true,
        ..SessionConfig::default()
    };

    let transport = TwilightTransport::new(Arc::clone(&http), event_rx);
    let mut paginator = Paginator::new(
        transport,
        Id::new(channel_id),
        bot_user.id,
        pages,
        ControlScheme::extended(),
        config,
    )?;

    let session = tokio::spawn(async move {
        if let Err(source) = paginator.run().await {
            error!(?source, "pagination session failed");
        }
    });

    info!("demo paginator is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        // Forward reaction changes to the session; everything else is noise.
        if let Some(nav) = navigation_event(&event)
            && event_tx.send(nav).await.is_err()
        {
            // The session ended and dropped its receiver.
            break;
        }
    }

    session.await?;
    Ok(())
}
