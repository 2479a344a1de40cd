//! HTTP client for the droplet listing endpoint

use std::time::Duration;

use dropshell_core::prelude::*;
use reqwest::StatusCode;
use url::Url;

use crate::auth::{ApiCredential, Authenticator};
use crate::protocol::{ApiErrorBody, DropletsPage, DropletsResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.digitalocean.com";

/// Largest `per_page` the API accepts
pub const MAX_PAGE_SIZE: u32 = 200;

const DROPLETS_PATH: &str = "/v2/droplets";

/// Connection options for [`DropletsClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Paginated client for `GET /v2/droplets`
///
/// The credential is acquired once, when the client is built, so a missing
/// token surfaces before any UI is drawn.
#[derive(Debug, Clone)]
pub struct DropletsClient {
    http: reqwest::Client,
    endpoint: Url,
    credential: ApiCredential,
    timeout: Duration,
}

impl DropletsClient {
    pub fn new<A>(options: ClientOptions, authenticator: &A) -> Result<Self>
    where
        A: Authenticator + ?Sized,
    {
        let credential = authenticator.authenticate()?;

        let base = Url::parse(&options.base_url)
            .map_err(|e| Error::config(format!("invalid API base URL {}: {e}", options.base_url)))?;
        let endpoint = base
            .join(DROPLETS_PATH)
            .map_err(|e| Error::config(format!("invalid API base URL {}: {e}", options.base_url)))?;

        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(concat!("dropshell/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint,
            credential,
            timeout: options.timeout,
        })
    }

    /// URL for one page of the listing
    pub fn page_url(&self, page: u32, page_size: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &page_size.to_string());
        url
    }

    /// Fetch one page of raw droplet records
    ///
    /// No retries: every failure goes straight back to the caller.
    pub async fn list_droplets(&self, page: u32, page_size: u32) -> Result<DropletsPage> {
        if page == 0 || page_size == 0 {
            return Err(Error::config(format!(
                "page and page size must be at least 1 (got page={page}, per_page={page_size})"
            )));
        }

        let url = self.page_url(page, page_size.min(MAX_PAGE_SIZE));
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .bearer_auth(self.credential.token())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::api(format!("request timed out after {:?}", self.timeout))
                } else {
                    Error::api(e.to_string())
                }
            })?;

        let status = response.status();
        debug!("Response status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| Error::api(format!("failed to read response body: {e}")))?;

        check_status(status, &body)?;

        let decoded: DropletsResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Malformed droplet listing: {e}");
            Error::api(format!("malformed droplet listing: {e}"))
        })?;

        let page = DropletsPage::from(decoded);
        debug!(
            "Fetched {} droplets (last_page={})",
            page.droplets.len(),
            page.last_page
        );
        Ok(page)
    }
}

/// Map a non-2xx status onto the fetch error taxonomy
fn check_status(status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    if status == StatusCode::UNAUTHORIZED {
        warn!("API rejected the access token");
        return Err(Error::Unauthenticated);
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|err| err.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });

    warn!("API returned {status}: {message}");
    Err(Error::api_status(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthenticator;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn authenticator(token: &'static str) -> MockAuthenticator {
        let mut auth = MockAuthenticator::new();
        auth.expect_authenticate()
            .times(1)
            .returning(move || Ok(ApiCredential::new(token)));
        auth
    }

    /// Serve exactly one canned HTTP response and hand back the request head
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{addr}"), handle)
    }

    fn client(base_url: String) -> DropletsClient {
        DropletsClient::new(
            ClientOptions {
                base_url,
                timeout: Duration::from_secs(5),
            },
            &authenticator("dop_v1_test"),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_credential_fails_construction() {
        let mut auth = MockAuthenticator::new();
        auth.expect_authenticate()
            .returning(|| Err(Error::missing_credential("DIGITALOCEAN_ACCESS_TOKEN")));

        let err = DropletsClient::new(ClientOptions::default(), &auth).unwrap_err();
        assert!(matches!(err, Error::MissingCredential { .. }));
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = DropletsClient::new(
            ClientOptions {
                base_url: "not a url".to_string(),
                timeout: Duration::from_secs(1),
            },
            &authenticator("t"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_page_url() {
        let client = client(DEFAULT_BASE_URL.to_string());
        assert_eq!(
            client.page_url(3, 4).as_str(),
            "https://api.digitalocean.com/v2/droplets?page=3&per_page=4"
        );
    }

    #[test]
    fn test_check_status_unauthorized() {
        let err = check_status(StatusCode::UNAUTHORIZED, "{}").unwrap_err();
        assert!(matches!(err, Error::Unauthenticated));
    }

    #[test]
    fn test_check_status_uses_api_message() {
        let err = check_status(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"id": "too_many_requests", "message": "API Rate limit exceeded."}"#,
        )
        .unwrap_err();
        match err {
            Error::ApiStatus { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "API Rate limit exceeded.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_status_without_body_message() {
        let err = check_status(StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap_err();
        assert!(matches!(err, Error::ApiStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_list_droplets_sends_bearer_and_query() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"droplets": [{"id": 1, "name": "web", "region": {"slug": "fra1"},
                "networks": {"v4": [{"ip_address": "203.0.113.5", "type": "public"}]}}],
                "links": {"pages": {"next": "https://api.digitalocean.com/v2/droplets?page=2"}}}"#,
        )
        .await;

        let page = client(base).list_droplets(1, 4).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /v2/droplets?page=1&per_page=4 HTTP/1.1"));
        assert!(request
            .to_ascii_lowercase()
            .contains("authorization: bearer dop_v1_test"));
        assert_eq!(page.droplets.len(), 1);
        assert!(!page.last_page);
    }

    #[tokio::test]
    async fn test_list_droplets_unauthorized() {
        let (base, server) = serve_once(
            "401 Unauthorized",
            r#"{"id": "unauthorized", "message": "Unable to authenticate you"}"#,
        )
        .await;

        let err = client(base).list_droplets(1, 4).await.unwrap_err();
        server.await.unwrap();
        assert!(matches!(err, Error::Unauthenticated));
    }

    #[tokio::test]
    async fn test_list_droplets_malformed_body() {
        let (base, server) = serve_once("200 OK", "not json").await;

        let err = client(base).list_droplets(1, 4).await.unwrap_err();
        server.await.unwrap();
        assert!(matches!(err, Error::Api { .. }));
    }

    #[tokio::test]
    async fn test_zero_page_rejected_without_request() {
        let client = client(DEFAULT_BASE_URL.to_string());
        let err = client.list_droplets(0, 4).await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
