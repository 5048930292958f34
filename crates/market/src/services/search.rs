//! Search keyword recording contract.

use crate::db::RepositoryError;

/// Records a search keyword for popularity tracking.
///
/// The recorder is a fire-and-forget collaborator: the store service logs
/// and swallows failures so a broken counter never fails a search.
#[async_trait::async_trait]
pub trait KeywordRecorder: Send + Sync {
    /// Bump the popularity counter for `keyword`.
    async fn record(&self, keyword: &str) -> Result<(), RepositoryError>;
}
