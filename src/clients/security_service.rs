use reqwest::{
    Client, Url,
    header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::info;

use crate::error::DispatchError;
use crate::models::{AnalysisReply, ModeRoute, ScanReport};
use crate::utils::{DEFAULT_REPORT_FILENAME, attachment_filename, is_pdf};

/// POSTs `{<request key>: input}` to the route's endpoint and decodes the reply.
///
/// A non-success status is returned as [`DispatchError::Status`] without
/// reading the body. PDF replies become a [`ScanReport`]; anything else is
/// parsed as JSON regardless of its declared content type.
pub async fn submit_analysis(
    client: &Client,
    base_url: &Url,
    authorization: Option<&HeaderValue>,
    route: &ModeRoute,
    input: &str,
) -> Result<AnalysisReply, DispatchError> {
    let url = base_url.join(route.relative_endpoint())?;

    let mut request = client
        .post(url)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .json(&route.request_body(input));
    if let Some(auth) = authorization {
        request = request.header(AUTHORIZATION, auth.clone());
    }

    let response = request.send().await?;
    let status = response.status();

    info!(
        endpoint = route.endpoint,
        status_code = status.as_u16(),
        "Analysis response received"
    );

    if !status.is_success() {
        return Err(DispatchError::Status(status));
    }

    if let Some(filename) = report_filename(response.headers()) {
        let bytes = response.bytes().await?;
        info!(
            endpoint = route.endpoint,
            filename = filename.as_str(),
            size = bytes.len(),
            "Scan report downloaded"
        );
        return Ok(AnalysisReply::Report(ScanReport {
            filename,
            bytes: bytes.to_vec(),
        }));
    }

    let bytes = response.bytes().await?;
    let payload = serde_json::from_slice(&bytes)?;
    Ok(AnalysisReply::Json(payload))
}

fn header_str<'a>(headers: &'a HeaderMap, name: reqwest::header::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// `Some(filename)` when the response carries a PDF report.
fn report_filename(headers: &HeaderMap) -> Option<String> {
    if !is_pdf(header_str(headers, CONTENT_TYPE)) {
        return None;
    }
    Some(
        attachment_filename(header_str(headers, CONTENT_DISPOSITION))
            .unwrap_or_else(|| DEFAULT_REPORT_FILENAME.to_string()),
    )
}
