/// Work the host performs on behalf of `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin sending `Msg::Tick` once per second.
    StartTicker,
    /// Stop the one-second ticker before the next tick fires.
    CancelTicker,
    /// Show a message to the user.
    Alert(String),
    /// Hand the share link to the user (clipboard, terminal).
    PublishShareLink { url: String },
}
