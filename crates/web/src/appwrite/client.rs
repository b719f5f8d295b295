use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::Serialize;

use wayfarer_core::{AccountId, AuthSession, Identity, NewUserProfile, Page, UserProfile};

use super::query::Query;
use crate::config::AppwriteConfig;
use crate::services::{AccountService, BackendError, ProfileStore};

/// Document id placeholder that lets the store assign a unique id.
const UNIQUE_ID: &str = "unique()";

/// Client for the Appwrite REST API.
///
/// Cheaply cloneable via `Arc`; construct once from configuration.
#[derive(Clone)]
pub struct AppwriteClient {
    inner: Arc<AppwriteClientInner>,
}

struct AppwriteClientInner {
    client: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
    users_collection_id: String,
}

impl AppwriteClient {
    /// Create a new Appwrite API client.
    #[must_use]
    pub fn new(config: &AppwriteConfig) -> Self {
        Self {
            inner: Arc::new(AppwriteClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint.clone(),
                project_id: config.project_id.clone(),
                api_key: config.api_key.expose_secret().to_string(),
                database_id: config.database_id.clone(),
                users_collection_id: config.users_collection_id.clone(),
            }),
        }
    }

    /// Build an account-scoped request authenticated with the session token.
    fn account_request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<reqwest::RequestBuilder, BackendError> {
        let token = token.ok_or(BackendError::Unauthenticated)?;
        Ok(self
            .inner
            .client
            .request(method, format!("{}{path}", self.inner.endpoint))
            .header("X-Appwrite-Project", &self.inner.project_id)
            .header("X-Appwrite-Session", token))
    }

    /// Build a document-store request authenticated with the server API key.
    fn documents_request(&self, method: Method) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.inner.endpoint, self.inner.database_id, self.inner.users_collection_id
        );
        self.inner
            .client
            .request(method, url)
            .header("X-Appwrite-Project", &self.inner.project_id)
            .header("X-Appwrite-Key", &self.inner.api_key)
    }

    /// Map a non-success response to a typed error.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthenticated);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn list_documents(&self, queries: &[Query]) -> Result<Page<UserProfile>, BackendError> {
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|query| ("queries[]", query.to_wire()))
            .collect();

        let response = self
            .documents_request(Method::GET)
            .query(&params)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }
}

#[async_trait]
impl AccountService for AppwriteClient {
    async fn current_identity(&self, token: Option<&str>) -> Result<Identity, BackendError> {
        let response = self
            .account_request(Method::GET, "/account", token)?
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn current_session(&self, token: Option<&str>) -> Result<AuthSession, BackendError> {
        let response = self
            .account_request(Method::GET, "/account/sessions/current", token)?
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_current_session(&self, token: Option<&str>) -> Result<(), BackendError> {
        let response = self
            .account_request(Method::DELETE, "/account/sessions/current", token)?
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    fn oauth_login_url(&self, success_url: &str, failure_url: &str) -> Option<String> {
        Some(format!(
            "{}/account/sessions/oauth2/google?project={}&success={}&failure={}",
            self.inner.endpoint,
            urlencoding::encode(&self.inner.project_id),
            urlencoding::encode(success_url),
            urlencoding::encode(failure_url)
        ))
    }
}

#[async_trait]
impl ProfileStore for AppwriteClient {
    async fn find_by_account(
        &self,
        account_id: &AccountId,
        fields: Option<&[&str]>,
    ) -> Result<Page<UserProfile>, BackendError> {
        let mut queries = vec![Query::equal("accountId", account_id.as_str())];
        if let Some(fields) = fields {
            queries.push(Query::select(fields.iter().copied()));
        }
        self.list_documents(&queries).await
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Page<UserProfile>, BackendError> {
        self.list_documents(&[Query::limit(limit), Query::offset(offset)])
            .await
    }

    async fn create(&self, profile: NewUserProfile) -> Result<UserProfile, BackendError> {
        #[derive(Serialize)]
        struct CreateDocument<'a> {
            #[serde(rename = "documentId")]
            document_id: &'a str,
            data: &'a NewUserProfile,
        }

        let body = CreateDocument {
            document_id: UNIQUE_ID,
            data: &profile,
        };

        let response = self
            .documents_request(Method::POST)
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }
}
