//! Reaction-driven pagination sessions for twilight Discord bots.
//!
//! A [`Paginator`] posts one page of a [`PageSet`] to a channel, attaches
//! navigation reactions from a [`ControlScheme`], and edits the message in
//! place as users add or remove those reactions. A session ends after a
//! period of inactivity and then clears its controls or deletes the message,
//! depending on its [`SessionConfig`].
//!
//! The platform is reached only through the [`Transport`] trait;
//! [`TwilightTransport`] is the production implementation over
//! `twilight-http` plus a gateway-fed event channel.

/// Default inactivity timeout for reaction pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

mod controls;
mod error;
mod event;
mod page;
mod session;
mod transport;

pub use controls::{ControlScheme, DEFAULT_EXTENDED_SYMBOLS, DEFAULT_SYMBOLS, Movement};
pub use error::PaginationError;
pub use event::{EventFilter, NavigationEvent, ReactionAction, UserRestriction, navigation_event};
pub use page::{
    CURRENT_PAGE_PLACEHOLDER, Page, PageSet, RenderedPage, TOTAL_PAGES_PLACEHOLDER,
};
pub use session::{Paginator, SessionConfig, SessionState};
pub use transport::{MessageHandle, Transport, TwilightTransport};
