use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

/// API key for deployments that sit behind an authenticating proxy.
///
/// The key is sent as a bearer token and never appears in `Debug` output
/// or logs.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub api_key: SecretString,
}

impl Credentials {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key: SecretString::from(api_key),
        }
    }

    /// `Bearer <key>`, marked sensitive so reqwest redacts it.
    pub fn authorization(&self) -> anyhow::Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}
