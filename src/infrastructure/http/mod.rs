pub mod authorizer;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::error::{AppError, AppResult, normalize};
use crate::domain::services::session::SessionService;

use authorizer::RequestAuthorizer;

/// Thin JSON client over the bank REST backend.
///
/// Every request goes through the authorizer, and every failure through
/// [`normalize`].
pub struct ApiClient {
    client: Client,
    base_url: String,
    authorizer: RequestAuthorizer,
}

impl ApiClient {
    pub fn new(
        config: &ApiConfig,
        sessions: Arc<dyn SessionService>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorizer: RequestAuthorizer::new(sessions),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.send(self.client.get(self.url(path))).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let response = self
            .send(self.client.get(self.url(path)).query(query))
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// Posts `body` and ignores whatever the backend answers on success.
    pub async fn post_discard<B>(&self, path: &str, body: &B) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.client.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.client.put(self.url(path)).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// `PUT` with an empty JSON object, used for state transitions.
    pub async fn put_empty(&self, path: &str) -> AppResult<()> {
        self.send(self.client.put(self.url(path)).json(&serde_json::json!({})))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }

    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let mut request = builder.build()?;
        self.authorizer.authorize(&mut request);

        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(%method, %url, "sending request");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                let error = AppError::from(error);
                tracing::error!(%method, %url, kind = ?error.kind, trace = ?error.trace, "request failed");
                return Err(error);
            }
        };

        let status = response.status();

        if status.is_success() {
            tracing::info!(%method, %url, status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let error = normalize(Some(status), &body);

        if status == StatusCode::FORBIDDEN {
            tracing::warn!(%method, %url, "access forbidden, the token may be expired or the role insufficient");
        }

        tracing::error!(%method, %url, status = status.as_u16(), message = %error.message, "request rejected");

        Err(error)
    }
}

/// Abandons `future` once `ceiling` has elapsed.
pub async fn bounded<T, F>(ceiling: Duration, future: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    tokio::time::timeout(ceiling, future).await?
}
