//! Slack types.

mod events;
mod message;

pub use events::{
    SlackEnvelope, SlackEvent, SlackMessageEvent, SlackReactionAddedEvent, SlackReactionItem,
};
pub use message::SlackMessage;
