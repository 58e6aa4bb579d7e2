use anyhow::Result;

/// Routing collaborator. The wizard only asks to leave or to start over at home.
#[async_trait::async_trait]
pub trait NavigationPort: Send + Sync {
    async fn go_back(&self) -> Result<()>;

    /// Replace the whole navigation history with the home view.
    async fn reset_to_home(&self) -> Result<()>;
}
