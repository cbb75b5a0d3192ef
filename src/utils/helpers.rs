use serde_json::Value;

pub const DEFAULT_REPORT_FILENAME: &str = "SecureNexus_Scan_Report.pdf";

/// Two-space indented JSON, matching what the service's web page shows.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn is_pdf(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/pdf"))
}

/// The `filename` parameter of a `Content-Disposition` header, if any.
/// Directory components are dropped so the name is safe to write locally.
pub fn attachment_filename(content_disposition: Option<&str>) -> Option<String> {
    content_disposition?
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("filename"))
        .and_then(|(_, value)| value.trim().trim_matches('"').rsplit(['/', '\\']).next())
        .filter(|name| !matches!(*name, "" | "." | ".."))
        .map(str::to_string)
}
