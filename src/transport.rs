//! Transport abstraction over the chat platform, plus the twilight-http
//! implementation used in production.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::Instant;
use twilight_http::Client;
use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker},
};

use crate::event::NavigationEvent;
use crate::page::RenderedPage;

/// Identity of the message a session renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

/// Everything a pagination session needs from the chat platform.
#[async_trait]
pub trait Transport: Send {
    /// Post the first rendered page and return a handle to the created
    /// message.
    async fn send_page(
        &mut self,
        channel_id: Id<ChannelMarker>,
        page: &RenderedPage,
    ) -> anyhow::Result<MessageHandle>;

    /// Attach one navigation control symbol to the message.
    async fn add_control(&mut self, message: &MessageHandle, symbol: &str) -> anyhow::Result<()>;

    /// Replace the displayed page in place.
    async fn edit_page(
        &mut self,
        message: &MessageHandle,
        page: &RenderedPage,
    ) -> anyhow::Result<()>;

    /// Remove all attached control symbols.
    async fn clear_controls(&mut self, message: &MessageHandle) -> anyhow::Result<()>;

    /// Delete the message entirely.
    async fn delete_message(&mut self, message: &MessageHandle) -> anyhow::Result<()>;

    /// Wait for the next raw navigation event, up to the deadline.
    ///
    /// This is the session's only suspension point. Returns `None` when the
    /// deadline elapses or the event source has closed; dropping the
    /// returned future cancels the wait.
    async fn next_event(&mut self, deadline: Instant) -> Option<NavigationEvent>;
}

/// Production transport backed by a twilight HTTP client and a gateway-fed
/// event channel.
///
/// The caller's gateway loop converts `ReactionAdd`/`ReactionRemove` events
/// with [`crate::navigation_event`] and pushes them into the channel; no
/// filtering is needed on the sending side.
pub struct TwilightTransport {
    http: Arc<Client>,
    events: mpsc::Receiver<NavigationEvent>,
}

impl TwilightTransport {
    /// Create a transport from a shared HTTP client and an event receiver.
    pub fn new(http: Arc<Client>, events: mpsc::Receiver<NavigationEvent>) -> Self {
        Self { http, events }
    }
}

#[async_trait]
impl Transport for TwilightTransport {
    async fn send_page(
        &mut self,
        channel_id: Id<ChannelMarker>,
        page: &RenderedPage,
    ) -> anyhow::Result<MessageHandle> {
        let request = self.http.create_message(channel_id);

        let message = match page {
            RenderedPage::Text(content) => request.content(content).await?.model().await?,
            RenderedPage::Embed(embed) => {
                request
                    .embeds(std::slice::from_ref(embed))
                    .await?
                    .model()
                    .await?
            }
        };

        Ok(MessageHandle {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn add_control(&mut self, message: &MessageHandle, symbol: &str) -> anyhow::Result<()> {
        self.http
            .create_reaction(
                message.channel_id,
                message.message_id,
                &RequestReactionType::Unicode { name: symbol },
            )
            .await?;

        Ok(())
    }

    async fn edit_page(
        &mut self,
        message: &MessageHandle,
        page: &RenderedPage,
    ) -> anyhow::Result<()> {
        let request = self
            .http
            .update_message(message.channel_id, message.message_id);

        match page {
            RenderedPage::Text(content) => {
                request.content(Some(content.as_str())).await?;
            }
            RenderedPage::Embed(embed) => {
                request.embeds(Some(std::slice::from_ref(embed))).await?;
            }
        }

        Ok(())
    }

    async fn clear_controls(&mut self, message: &MessageHandle) -> anyhow::Result<()> {
        self.http
            .delete_all_reactions(message.channel_id, message.message_id)
            .await?;

        Ok(())
    }

    async fn delete_message(&mut self, message: &MessageHandle) -> anyhow::Result<()> {
        self.http
            .delete_message(message.channel_id, message.message_id)
            .await?;

        Ok(())
    }

    async fn next_event(&mut self, deadline: Instant) -> Option<NavigationEvent> {
        tokio::time::timeout_at(deadline, self.events.recv())
            .await
            .ok()
            .flatten()
    }
}
