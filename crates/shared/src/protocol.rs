use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DocumentId;

/// A stored document as the server returns it. Server-assigned fields
/// (`id`, `tenant_id`, `created_at`) are read-only to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub tenant_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub content: String,
}

/// One page of search results in the server's page envelope. Rebuilt on
/// every request; nothing is cached client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    pub content: Vec<DocumentRecord>,
    pub total_pages: u32,
    pub total_elements: u64,
    /// Zero-based index of this page.
    pub number: u32,
}

impl SearchResultPage {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Error payload the server attaches to non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Liveness probe response from `/actuator/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status == "UP"
    }
}
