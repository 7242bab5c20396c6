use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use url::{Url, form_urlencoded};

use crate::client::K1ngError;

const API_KEY_FIELD: &str = "api_key";
const API_PASS_FIELD: &str = "api_pass";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP reply returned by [`Core::consume`].
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`Core`].
///
/// Use this when you need a request timeout or a custom user-agent; otherwise
/// [`Core::new`] is enough.
pub struct CoreBuilder {
    host_url: String,
    api_key: String,
    api_pass: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CoreBuilder {
    /// Create a builder with no timeout/user-agent override.
    pub fn new(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> Self {
        Self {
            host_url: host_url.into(),
            api_key: api_key.into(),
            api_pass: api_pass.into(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Parse the host URL and build a [`Core`].
    pub fn build(self) -> Result<Core, K1ngError> {
        let url = clean_url(&self.host_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| K1ngError::Transport(Box::new(err)))?;

        Ok(Core {
            url,
            api_key: self.api_key,
            api_pass: self.api_pass,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Authenticated HTTP channel to a K1NG host.
///
/// Holds the host URL (query string and fragment removed) and the API
/// credentials. Immutable after construction, so one instance can be shared
/// between several [`Sms`](crate::Sms) builders through an `Arc`.
pub struct Core {
    url: Url,
    api_key: String,
    api_pass: String,
    http: Arc<dyn HttpTransport>,
}

impl Core {
    /// Parse `host_url` and create a core with the default HTTP client.
    ///
    /// Errors:
    /// - [`K1ngError::InvalidUrl`] when `host_url` is not an absolute URL.
    pub fn new(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> Result<Self, K1ngError> {
        CoreBuilder::new(host_url, api_key, api_pass).build()
    }

    /// Start building a core with custom HTTP settings.
    pub fn builder(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> CoreBuilder {
        CoreBuilder::new(host_url, api_key, api_pass)
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        host_url: &str,
        api_key: &str,
        api_pass: &str,
        http: Arc<dyn HttpTransport>,
    ) -> Result<Self, K1ngError> {
        Ok(Self {
            url: clean_url(host_url)?,
            api_key: api_key.to_owned(),
            api_pass: api_pass.to_owned(),
            http,
        })
    }

    /// Host URL without trailing `/`, `?` or `#`.
    pub fn base_url(&self) -> String {
        self.url
            .as_str()
            .trim_end_matches(['/', '?', '#'])
            .to_owned()
    }

    /// Call `endpoint` (relative to [`Core::base_url`]) with the credentials
    /// appended to `params`.
    ///
    /// `GET` sends the parameters as a query string, `POST` as an url-encoded
    /// form body.
    ///
    /// Errors:
    /// - [`K1ngError::UnsupportedMethod`] for any other method (no request is made),
    /// - [`K1ngError::Transport`] when the HTTP call itself fails.
    pub async fn consume(
        &self,
        method: Method,
        endpoint: &str,
        mut params: Vec<(String, String)>,
    ) -> Result<HttpResponse, K1ngError> {
        let url = format!("{}/{}", self.base_url(), endpoint);
        params.push((API_KEY_FIELD.to_owned(), self.api_key.clone()));
        params.push((API_PASS_FIELD.to_owned(), self.api_pass.clone()));

        tracing::debug!(%method, %url, params = params.len(), "calling K1NG API");

        let response = match method {
            Method::GET => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(params.iter())
                    .finish();
                self.http.get(&format!("{url}?{query}")).await
            }
            Method::POST => self.http.post_form(&url, params).await,
            other => return Err(K1ngError::UnsupportedMethod(other)),
        }
        .map_err(K1ngError::Transport)?;

        tracing::debug!(status = response.status, %url, "K1NG API responded");
        Ok(response)
    }
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("url", &self.url.as_str())
            .field("api_key", &self.api_key)
            .field("api_pass", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn clean_url(host_url: &str) -> Result<Url, K1ngError> {
    let mut url = Url::parse(host_url)?;
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
