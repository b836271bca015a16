use async_trait::async_trait;

/// Outcome reported by a command once its business operation has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Success,
}

impl CommandResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Handles one kind of command.
///
/// Handlers receive their collaborators through their constructor, so a
/// handler can be composed with any port implementation without changing it.
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Send + 'static,
{
    type Output: Send;
    type Error: Send;

    async fn handle(&self, command: C) -> Result<Self::Output, Self::Error>;
}
