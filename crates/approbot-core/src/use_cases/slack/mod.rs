pub(crate) mod handle_message_event;
pub(crate) mod handle_reaction_event;
pub(crate) mod handle_slack_event;

pub use handle_message_event::HandleMessageEventInterface;
pub use handle_reaction_event::HandleReactionEventInterface;
pub use handle_slack_event::HandleSlackEventInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    handle_message_event::MockHandleMessageEventInterface,
    handle_reaction_event::MockHandleReactionEventInterface,
    handle_slack_event::MockHandleSlackEventInterface,
};
