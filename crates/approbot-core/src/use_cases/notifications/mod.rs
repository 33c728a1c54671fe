pub(crate) mod messages;
pub(crate) mod notify_user;

pub use notify_user::NotifyUserInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::notify_user::MockNotifyUserInterface;
