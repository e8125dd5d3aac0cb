use crate::types::AnalysisResult;
use crate::Result;

/// A collaborator that can analyze text for plagiarism.
///
/// The production implementation talks to the remote service over HTTP;
/// tests substitute canned backends.
#[async_trait::async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult>;
}
