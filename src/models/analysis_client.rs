use anyhow::Context;
use reqwest::{Client, Url, header::HeaderValue};

use crate::Credentials;
use crate::init_tracing;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";

/// A client for the SecureNexus analysis service.
///
/// Holds one HTTP connection pool and the resolved base URL. Endpoint paths
/// are joined relative to the base, so a base such as
/// `https://host/api/` keeps its `/api` prefix.
///
/// # Example
///
/// ```no_run
/// use rusty_scan_runner::{AnalysisClient, Mode, ViewModel};
///
/// # async fn demo() -> anyhow::Result<()> {
/// let client = AnalysisClient::new("http://127.0.0.1:8080/", None, false)?;
/// let mut view = ViewModel::new().with_input(Mode::Code, "eval(input())");
/// client.run_analysis(Mode::Code, &mut view).await;
/// println!("{}", view.result_html());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AnalysisClient {
    pub(crate) http: Client,
    pub(crate) base_url: Url,
    pub(crate) authorization: Option<HeaderValue>,
}

impl AnalysisClient {
    /// Create a new client.
    ///
    /// * `base_url` - where the service is mounted; a trailing slash is added
    ///   when missing
    /// * `credentials` - optional API key sent as a bearer token
    /// * `enable_logs` - install the stderr tracing subscriber
    pub fn new(
        base_url: &str,
        credentials: Option<Credentials>,
        enable_logs: bool,
    ) -> anyhow::Result<Self> {
        if enable_logs {
            init_tracing();
        }

        let authorization = credentials
            .as_ref()
            .map(Credentials::authorization)
            .transpose()
            .context("API key is not a valid header value")?;

        let http = Client::builder()
            .user_agent(concat!("rusty-scan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: normalize_base(base_url)?,
            authorization,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

fn normalize_base(base_url: &str) -> anyhow::Result<Url> {
    let mut url =
        Url::parse(base_url.trim()).with_context(|| format!("Invalid base URL: '{base_url}'"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("Base URL cannot carry paths: '{base_url}'");
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
