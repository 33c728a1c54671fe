use serde::{Deserialize, Serialize};

/// Events API request body.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEnvelope {
    /// Endpoint ownership check, answered with the challenge.
    UrlVerification {
        /// Value to echo back.
        challenge: String,
    },
    /// Wrapped event.
    EventCallback {
        /// Unique delivery ID, stable across retries.
        #[serde(default)]
        event_id: String,
        /// Inner event.
        event: SlackEvent,
    },
    /// Anything else.
    #[serde(other)]
    Unsupported,
}

/// Inner event of an `event_callback`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEvent {
    /// A reaction was added to an item.
    ReactionAdded(SlackReactionAddedEvent),
    /// A message was posted.
    Message(SlackMessageEvent),
    /// Any other event type.
    #[serde(other)]
    Unsupported,
}

/// `reaction_added` event.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SlackReactionAddedEvent {
    /// Reacting user.
    pub user: String,
    /// Reaction name, without colons.
    pub reaction: String,
    /// Reacted item.
    pub item: SlackReactionItem,
}

/// Item targeted by a reaction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackReactionItem {
    /// A message in a conversation.
    Message {
        /// Conversation ID.
        channel: String,
        /// Message timestamp.
        ts: String,
    },
    /// Files and file comments.
    #[serde(other)]
    Unsupported,
}

/// `message` event.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct SlackMessageEvent {
    /// Conversation ID.
    #[serde(default)]
    pub channel: String,
    /// Author, missing on bot messages.
    #[serde(default)]
    pub user: Option<String>,
    /// Message text.
    #[serde(default)]
    pub text: String,
    /// Message timestamp.
    #[serde(default)]
    pub ts: String,
    /// Subtype (edits, joins, bot messages).
    #[serde(default)]
    pub subtype: Option<String>,
}
