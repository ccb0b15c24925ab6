use crate::config::ClientConfig;
use crate::utils::error::{ClientError, Result};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Per-call overrides layered on top of the client's default headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Thin JSON-over-HTTP wrapper bound to one base URL.
///
/// Every call concatenates `base_url + path` verbatim, sends
/// `Content-Type: application/json` unless the caller overrides it, and
/// decodes the response body as JSON. Non-2xx statuses become
/// [`ClientError::Http`]. There is no retry and no timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
    client: Client,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: &RequestOptions) -> Result<T> {
        self.request(Method::GET, path, None, options).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, options: &RequestOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.request(Method::POST, path, Some(body), options).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, options: &RequestOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.request(Method::PUT, path, Some(body), options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        self.request(Method::DELETE, path, None, options).await
    }

    /// Default headers first, then configured extras, then the caller's; later inserts win.
    fn build_headers(&self, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, header_value("User-Agent", &self.config.user_agent)?);

        if let Some(token) = &self.config.bearer_token {
            headers.insert(
                AUTHORIZATION,
                header_value("Authorization", &format!("Bearer {}", token))?,
            );
        }

        let extras = self
            .config
            .headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(options.headers().iter().map(|(k, v)| (k.as_str(), v.as_str())));

        for (name, value) in extras {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ClientError::InvalidHeader {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value(name, value)?);
        }

        Ok(headers)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        options: &RequestOptions,
    ) -> Result<T> {
        let url = self.url(path);
        let headers = self.build_headers(options)?;

        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("API request failed: {} {}: {}", method, url, e);
                return Err(ClientError::Transport(e));
            }
        };

        let status = response.status();
        tracing::debug!("{} {} -> {}", method, url, status);

        if !status.is_success() {
            let err = ClientError::Http {
                status: status.as_u16(),
            };
            tracing::error!("API request failed: {} {}: {}", method, url, err);
            return Err(err);
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("API request failed reading body: {} {}: {}", method, url, e);
                return Err(ClientError::Transport(e));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!("API request failed parsing body: {} {}: {}", method, url, e);
            ClientError::Parse(e)
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(ClientError::Encode)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
