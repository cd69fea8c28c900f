//! Pagination session state machine and its event loop.

use std::time::Duration;

use tokio::time::Instant;
use tracing::error;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, UserMarker},
};

use crate::DEFAULT_TIMEOUT_SECS;
use crate::controls::{ControlScheme, Movement};
use crate::error::PaginationError;
use crate::event::{EventFilter, UserRestriction};
use crate::page::PageSet;
use crate::transport::{MessageHandle, Transport};

/// Lifecycle of a pagination session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, initial render not posted yet.
    AwaitingStart,
    /// Posted and accepting navigation events.
    Active,
    /// Terminal. No further mutation is accepted.
    Stopped,
}

/// Tunable behavior for one pagination session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Inactivity window. The timer restarts after every admitted event.
    pub timeout: Duration,
    /// Page shown when the session starts. Must be within the page set.
    pub start_index: usize,
    /// Remove the control symbols when the session stops.
    pub auto_clear_controls: bool,
    /// Delete the whole message when the session stops. Takes precedence
    /// over `auto_clear_controls`.
    pub auto_delete_message: bool,
    /// Substitute `{current_page}`/`{total_pages}` placeholders at render
    /// time.
    pub auto_fill_index: bool,
    /// Which users may drive the session.
    pub restriction: UserRestriction,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            start_index: 0,
            auto_clear_controls: true,
            auto_delete_message: false,
            auto_fill_index: false,
            restriction: UserRestriction::Anyone,
        }
    }
}

/// One running pagination instance bound to one displayed message.
///
/// The session is strictly sequential: one event is processed at a time, so
/// the index never mutates concurrently. Independent sessions on distinct
/// messages share no state.
pub struct Paginator<T: Transport> {
    transport: T,
    pages: PageSet,
    scheme: ControlScheme,
    config: SessionConfig,
    channel_id: Id<ChannelMarker>,
    bot_user_id: Id<UserMarker>,
    index: usize,
    state: SessionState,
    message: Option<MessageHandle>,
}

impl<T: Transport> Paginator<T> {
    /// Create a session over a page set and control scheme.
    ///
    /// Fails with [`PaginationError::InvalidConfiguration`] when the timeout
    /// is zero or the start index is outside the page set.
    pub fn new(
        transport: T,
        channel_id: Id<ChannelMarker>,
        bot_user_id: Id<UserMarker>,
        pages: PageSet,
        scheme: ControlScheme,
        config: SessionConfig,
    ) -> Result<Self, PaginationError> {
        if config.timeout.is_zero() {
            return Err(PaginationError::InvalidConfiguration(
                "session timeout must be positive".to_owned(),
            ));
        }

        if config.start_index >= pages.len() {
            return Err(PaginationError::InvalidConfiguration(format!(
                "start index {} out of range for {} pages",
                config.start_index,
                pages.len()
            )));
        }

        Ok(Self {
            transport,
            index: config.start_index,
            state: SessionState::AwaitingStart,
            message: None,
            pages,
            scheme,
            config,
            channel_id,
            bot_user_id,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current 0-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Handle of the rendered message, once the session has started.
    pub fn message(&self) -> Option<MessageHandle> {
        self.message
    }

    /// Post the first page, attach the control symbols, and begin accepting
    /// events.
    ///
    /// A send failure is fatal and propagates; a failed control attachment
    /// is logged and the remaining symbols are still attached.
    pub async fn start(&mut self) -> Result<(), PaginationError> {
        if self.state != SessionState::AwaitingStart {
            return Err(PaginationError::InvalidState { state: self.state });
        }

        let page = self.pages.render(self.index, self.config.auto_fill_index)?;
        let handle = self
            .transport
            .send_page(self.channel_id, &page)
            .await
            .map_err(PaginationError::Transport)?;

        for symbol in self.scheme.symbols() {
            if let Err(source) = self.transport.add_control(&handle, symbol).await {
                error!(?source, symbol = %symbol, "failed to attach pagination control");
            }
        }

        self.message = Some(handle);
        self.state = SessionState::Active;

        Ok(())
    }

    /// Apply one movement. Returns whether the index (and therefore the
    /// message) changed; a movement already at its boundary is a no-op with
    /// no transport call.
    ///
    /// The index moves before the edit is attempted and is not rolled back
    /// when the edit fails.
    pub async fn apply(&mut self, movement: Movement) -> Result<bool, PaginationError> {
        if self.state != SessionState::Active {
            return Err(PaginationError::InvalidState { state: self.state });
        }

        let candidate = candidate_index(movement, self.index, self.pages.len());
        if candidate == self.index {
            return Ok(false);
        }

        self.index = candidate;
        let page = self.pages.render(self.index, self.config.auto_fill_index)?;

        let Some(message) = self.message else {
            return Err(PaginationError::InvalidState { state: self.state });
        };

        self.transport
            .edit_page(&message, &page)
            .await
            .map_err(PaginationError::Transport)?;

        Ok(true)
    }

    /// Stop the session. Idempotent; the configured cleanup runs at most
    /// once, and its transport errors are logged and swallowed.
    pub async fn stop(&mut self) {
        if self.state == SessionState::Stopped {
            return;
        }

        let was_active = self.state == SessionState::Active;
        self.state = SessionState::Stopped;

        let Some(message) = self.message else {
            return;
        };

        if !was_active {
            return;
        }

        if self.config.auto_delete_message {
            if let Err(source) = self.transport.delete_message(&message).await {
                error!(?source, "failed to delete paginated message during cleanup");
            }
        } else if self.config.auto_clear_controls {
            if let Err(source) = self.transport.clear_controls(&message).await {
                error!(?source, "failed to clear pagination controls during cleanup");
            }
        }
    }

    /// Drive the session to completion: start, process navigation events
    /// until the inactivity timeout elapses, then stop.
    ///
    /// The timeout restarts after every admitted event; rejected events do
    /// not extend it. A failed message edit is logged and the session keeps
    /// waiting.
    pub async fn run(&mut self) -> Result<(), PaginationError> {
        self.start().await?;

        let Some(message) = self.message else {
            return Err(PaginationError::InvalidState { state: self.state });
        };

        let filter = EventFilter::new(
            self.bot_user_id,
            message.message_id,
            self.config.restriction.clone(),
            self.scheme.symbols().to_vec(),
        );

        loop {
            let deadline = Instant::now() + self.config.timeout;

            let admitted = loop {
                match self.transport.next_event(deadline).await {
                    Some(event) if filter.admits(&event) => break Some(event),
                    Some(_) => continue,
                    None => break None,
                }
            };

            let Some(event) = admitted else {
                self.stop().await;
                return Ok(());
            };

            let Some(movement) = self.scheme.movement_for(&event.symbol) else {
                continue;
            };

            match self.apply(movement).await {
                Ok(_) => {}
                Err(PaginationError::Transport(source)) => {
                    error!(?source, "failed to edit paginated message, session continues");
                }
                Err(other) => return Err(other),
            }
        }
    }
}

/// Candidate index for a movement, clamped to the valid range.
fn candidate_index(movement: Movement, index: usize, len: usize) -> usize {
    let last = len - 1;

    match movement {
        Movement::First => 0,
        Movement::Previous => index.saturating_sub(1),
        Movement::Next => (index + 1).min(last),
        Movement::Last => last,
    }
}
