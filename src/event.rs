//! Inbound navigation events and per-session admission filtering.

use std::collections::HashSet;

use twilight_model::channel::message::EmojiReactionType;
use twilight_model::gateway::GatewayReaction;
use twilight_model::gateway::event::Event;
use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

/// Whether a control symbol was added to or removed from the message.
///
/// Both directions carry the same navigation intent: removing a previous
/// selection before making a new one is normal bot-UI usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionAction {
    Added,
    Removed,
}

/// A raw reaction change on some message, before session filtering.
#[derive(Debug, Clone)]
pub struct NavigationEvent {
    pub user_id: Id<UserMarker>,
    pub message_id: Id<MessageMarker>,
    pub symbol: String,
    pub action: ReactionAction,
}

/// Which users may drive a pagination session.
#[derive(Debug, Clone, Default)]
pub enum UserRestriction {
    /// Any user except the bot itself.
    #[default]
    Anyone,
    /// Exactly one authorized user.
    Single(Id<UserMarker>),
    /// Any member of the authorized set.
    Set(HashSet<Id<UserMarker>>),
}

impl UserRestriction {
    fn allows(&self, user_id: Id<UserMarker>) -> bool {
        match self {
            Self::Anyone => true,
            Self::Single(allowed) => *allowed == user_id,
            Self::Set(allowed) => allowed.contains(&user_id),
        }
    }
}

/// Predicate deciding whether an inbound event belongs to one session.
#[derive(Debug, Clone)]
pub struct EventFilter {
    bot_user_id: Id<UserMarker>,
    message_id: Id<MessageMarker>,
    restriction: UserRestriction,
    symbols: Vec<String>,
}

impl EventFilter {
    /// Build a filter for one session's message, user restriction, and
    /// enabled symbol set.
    pub fn new(
        bot_user_id: Id<UserMarker>,
        message_id: Id<MessageMarker>,
        restriction: UserRestriction,
        symbols: Vec<String>,
    ) -> Self {
        Self {
            bot_user_id,
            message_id,
            restriction,
            symbols,
        }
    }

    /// Whether this event should drive the session.
    ///
    /// Rejects events originated by the bot itself (the bot's own control
    /// attachment echoes back through the gateway), events for other
    /// messages, events from unauthorized users, and symbols outside the
    /// active scheme.
    pub fn admits(&self, event: &NavigationEvent) -> bool {
        if event.user_id == self.bot_user_id {
            return false;
        }

        if event.message_id != self.message_id {
            return false;
        }

        if !self.restriction.allows(event.user_id) {
            return false;
        }

        self.symbols.iter().any(|symbol| *symbol == event.symbol)
    }
}

/// Convert a gateway event into a [`NavigationEvent`], if it is a reaction
/// change. Everything else maps to `None`.
pub fn navigation_event(event: &Event) -> Option<NavigationEvent> {
    match event {
        Event::ReactionAdd(reaction) => from_reaction(&reaction.0, ReactionAction::Added),
        Event::ReactionRemove(reaction) => from_reaction(&reaction.0, ReactionAction::Removed),
        _ => None,
    }
}

fn from_reaction(reaction: &GatewayReaction, action: ReactionAction) -> Option<NavigationEvent> {
    let symbol = match &reaction.emoji {
        EmojiReactionType::Unicode { name } => name.clone(),
        EmojiReactionType::Custom { name, .. } => name.clone()?,
    };

    Some(NavigationEvent {
        user_id: reaction.user_id,
        message_id: reaction.message_id,
        symbol,
        action,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: u64 = 1;
    const OWNER: u64 = 7;
    const OTHER: u64 = 8;
    const MESSAGE: u64 = 99;

    fn make_event(user_id: u64, message_id: u64, symbol: &str) -> NavigationEvent {
        NavigationEvent {
            user_id: Id::new(user_id),
            message_id: Id::new(message_id),
            symbol: symbol.to_owned(),
            action: ReactionAction::Added,
        }
    }

    fn make_filter(restriction: UserRestriction) -> EventFilter {
        EventFilter::new(
            Id::new(BOT),
            Id::new(MESSAGE),
            restriction,
            vec!["⬅️".to_owned(), "➡️".to_owned()],
        )
    }

    #[test]
    fn test_admits_matching_event() {
        let filter = make_filter(UserRestriction::Anyone);
        assert!(filter.admits(&make_event(OWNER, MESSAGE, "➡️")));
    }

    #[test]
    fn test_rejects_self_originated_event() {
        let filter = make_filter(UserRestriction::Anyone);
        assert!(!filter.admits(&make_event(BOT, MESSAGE, "➡️")));
    }

    #[test]
    fn test_rejects_other_message() {
        let filter = make_filter(UserRestriction::Anyone);
        assert!(!filter.admits(&make_event(OWNER, MESSAGE + 1, "➡️")));
    }

    #[test]
    fn test_rejects_symbol_outside_scheme() {
        let filter = make_filter(UserRestriction::Anyone);
        assert!(!filter.admits(&make_event(OWNER, MESSAGE, "⏩")));
    }

    #[test]
    fn test_single_user_restriction() {
        let filter = make_filter(UserRestriction::Single(Id::new(OWNER)));
        assert!(filter.admits(&make_event(OWNER, MESSAGE, "⬅️")));
        assert!(!filter.admits(&make_event(OTHER, MESSAGE, "⬅️")));
    }

    #[test]
    fn test_user_set_restriction() {
        let allowed = HashSet::from([Id::new(OWNER), Id::new(OTHER)]);
        let filter = make_filter(UserRestriction::Set(allowed));
        assert!(filter.admits(&make_event(OWNER, MESSAGE, "⬅️")));
        assert!(filter.admits(&make_event(OTHER, MESSAGE, "⬅️")));
        assert!(!filter.admits(&make_event(OTHER + 1, MESSAGE, "⬅️")));
    }

    #[test]
    fn test_remove_action_admitted_like_add() {
        let filter = make_filter(UserRestriction::Anyone);
        let mut event = make_event(OWNER, MESSAGE, "➡️");
        event.action = ReactionAction::Removed;
        assert!(filter.admits(&event));
    }
}
