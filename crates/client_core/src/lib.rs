use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    domain::{DocumentId, TenantId},
    error::ClientError,
    protocol::{CreateDocumentRequest, DocumentRecord, ErrorBody, HealthStatus, SearchResultPage},
};
use tracing::{debug, warn};

pub mod action;
pub mod health;
pub mod view;

pub use action::{ActionController, ActionState, DocumentForm, SearchController};
pub use health::{spawn_health_monitor, HealthView};

const TENANT_HEADER: &str = "X-Tenant-Id";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// HTTP client for the document search service.
///
/// Every tenant-scoped call attaches the tenant as the `X-Tenant-Id` header;
/// the health probe is the one endpoint that goes out without it. Outcomes
/// are normalized into [`ClientError`] so callers never handle a raw
/// transport error.
pub struct DocumentClient {
    http: Client,
    server_url: String,
}

impl DocumentClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            server_url,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Creates a document for the tenant. The server assigns the id and
    /// creation timestamp and echoes the stored record back on 201.
    pub async fn create_document(
        &self,
        tenant: &TenantId,
        title: &str,
        content: &str,
    ) -> Result<DocumentRecord, ClientError> {
        let request = self
            .http
            .post(format!("{}/documents", self.server_url))
            .header(TENANT_HEADER, tenant.as_str())
            .json(&CreateDocumentRequest {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            });
        self.execute("create_document", request).await
    }

    /// Searches the tenant's documents. `page` is zero-based. A blank query
    /// fails validation locally; no request is issued.
    pub async fn search(
        &self,
        tenant: &TenantId,
        query: &str,
        page: u32,
        size: u32,
    ) -> Result<SearchResultPage, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::validation("search query must not be empty"));
        }
        let request = self
            .http
            .get(format!("{}/search", self.server_url))
            .header(TENANT_HEADER, tenant.as_str())
            .query(&[
                ("q", query),
                ("page", &page.to_string()),
                ("size", &size.to_string()),
            ]);
        self.execute("search", request).await
    }

    pub async fn get_document(
        &self,
        tenant: &TenantId,
        id: DocumentId,
    ) -> Result<DocumentRecord, ClientError> {
        let request = self
            .http
            .get(format!("{}/documents/{}", self.server_url, id.0))
            .header(TENANT_HEADER, tenant.as_str());
        self.execute("get_document", request).await
    }

    /// Deletes the tenant's document. Success is a 204 with no body.
    pub async fn delete_document(
        &self,
        tenant: &TenantId,
        id: DocumentId,
    ) -> Result<(), ClientError> {
        let request = self
            .http
            .delete(format!("{}/documents/{}", self.server_url, id.0))
            .header(TENANT_HEADER, tenant.as_str());
        self.dispatch("delete_document", request).await?;
        Ok(())
    }

    /// Probes `/actuator/health`. `Ok` carries whatever status the server
    /// reported ("UP" meaning healthy); `Err(Transport)` means the server
    /// was unreachable.
    pub async fn check_health(&self) -> Result<HealthStatus, ClientError> {
        let request = self.http.get(format!("{}/actuator/health", self.server_url));
        self.execute("check_health", request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.dispatch(operation, request).await?;
        let status = response.status();
        response.json().await.map_err(|err| {
            warn!(operation, %err, "response body did not match the expected shape");
            ClientError::api(status.as_u16(), "invalid response body from server")
        })
    }

    async fn dispatch(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        debug!(operation, "dispatching request");
        let response = request.send().await.map_err(|err| {
            warn!(operation, %err, "transport failure");
            ClientError::transport(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let err = read_api_error(status, response).await;
            warn!(operation, status = status.as_u16(), %err, "server rejected request");
            return Err(err);
        }
        Ok(response)
    }
}

/// Reads the server's `{"error": ...}` body, falling back to a generic
/// message naming the status when the body is missing or unparsable.
async fn read_api_error(status: StatusCode, response: Response) -> ClientError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {status}"),
    };
    ClientError::api(status.as_u16(), message)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
