use httpmock::MockServer;
use rusty_scan_runner::{
    AnalysisClient, AnalysisReply, Credentials, DispatchError, Mode, ResultState, ViewModel,
};

fn client(server: &MockServer) -> AnalysisClient {
    AnalysisClient::new(&server.base_url(), None, false).expect("client")
}

#[tokio::test]
async fn code_analysis_renders_markdown() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST")
                .path("/analyze")
                .header("content-type", "application/json")
                .json_body_partial(r#"{"code":"eval(input())"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"analysis":"**Critical**\n- uses eval\n- no validation\n```python\neval(x)\n```"}"#);
        })
        .await;

    let mut view = ViewModel::new().with_input(Mode::Code, "  eval(input())\n");
    client(&server).run_analysis(Mode::Code, &mut view).await;

    mock.assert_async().await;
    assert_eq!(
        view.result_html(),
        "<h3>Result:</h3><strong>Critical</strong><br><ul><li>uses eval</li><li>no validation</li></ul><br><pre class=\"code-block\">python\neval(x)</pre>"
    );
}

#[tokio::test]
async fn phishing_check_reads_result_field() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST")
                .path("/phishing-check")
                .json_body_partial(r#"{"message":"Your account is locked"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"result":"Likely <phishing>"}"#);
        })
        .await;

    let mut view = ViewModel::new().with_input(Mode::Phishing, "Your account is locked");
    client(&server).run_analysis(Mode::Phishing, &mut view).await;

    mock.assert_async().await;
    assert_eq!(view.result_html(), "<h3>Result:</h3>Likely &lt;phishing&gt;");
}

#[tokio::test]
async fn web_scan_pretty_prints_alerts() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST")
                .path("/scan-web")
                .json_body_partial(r#"{"url":"https://example.com"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"alerts":[{"alert":"Missing CSP"}]}"#);
        })
        .await;

    let mut view = ViewModel::new().with_input(Mode::Web, "https://example.com");
    client(&server).run_analysis(Mode::Web, &mut view).await;

    mock.assert_async().await;
    assert_eq!(
        view.result_html(),
        "<h3>Result:</h3>[<br>  {<br>    &quot;alert&quot;: &quot;Missing CSP&quot;<br>  }<br>]"
    );
}

#[tokio::test]
async fn empty_code_input_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"analysis":"should not be shown"}"#);
        })
        .await;

    let mut view = ViewModel::new().with_input(Mode::Code, "   \n\t");
    client(&server).run_analysis(Mode::Code, &mut view).await;

    assert_eq!(mock.hits_async().await, 0);
    assert_eq!(view.result(), &ResultState::Prompt("Please paste some code first."));
    assert_eq!(view.result_html(), "Please paste some code first.");
}

#[tokio::test]
async fn missing_field_counts_as_empty() {
    let server = MockServer::start_async().await;
    let mut view = ViewModel::new();
    client(&server).run_analysis(Mode::Web, &mut view).await;
    assert_eq!(view.result_html(), "Please enter a website URL.");

    let err = client(&server).dispatch(Mode::Phishing, "").await.unwrap_err();
    assert!(matches!(err, DispatchError::EmptyInput(Mode::Phishing)));
}

#[tokio::test]
async fn server_error_shows_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST").path("/analyze");
            then.status(500).body("boom");
        })
        .await;

    let mut view = ViewModel::new().with_input(Mode::Code, "print(1)");
    client(&server).run_analysis(Mode::Code, &mut view).await;

    mock.assert_async().await;
    assert!(view.result_html().contains("Error: 500"));
    assert_eq!(view.result_html(), "Error: 500 Internal Server Error");
    assert_eq!(view.result().label(), "failed");
}

#[tokio::test]
async fn error_field_is_shown_when_result_missing() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("POST").path("/phishing-check");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"error":"model unavailable"}"#);
        })
        .await;

    let mut view = ViewModel::new().with_input(Mode::Phishing, "hi");
    client(&server).run_analysis(Mode::Phishing, &mut view).await;

    assert_eq!(view.result_html(), "<h3>Result:</h3>Error: model unavailable");
}

#[tokio::test]
async fn invalid_json_is_a_request_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("POST").path("/analyze");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let mut view = ViewModel::new().with_input(Mode::Code, "x = 1");
    client(&server).run_analysis(Mode::Code, &mut view).await;

    let html = view.result_html();
    assert!(html.starts_with("Request failed: "), "{html}");
    assert!(!html.contains('<'));
}

#[tokio::test]
async fn unreachable_service_is_a_request_failure() {
    // Nothing listens on port 9 (discard) on test machines.
    let client = AnalysisClient::new("http://127.0.0.1:9/", None, false).expect("client");
    let mut view = ViewModel::new().with_input(Mode::Web, "https://example.com");
    client.run_analysis(Mode::Web, &mut view).await;

    assert!(view.result_html().starts_with("Request failed: "));
}

#[tokio::test]
async fn pdf_reply_becomes_report() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("POST").path("/scan-web");
            then.status(200)
                .header("content-type", "application/pdf")
                .header(
                    "content-disposition",
                    r#"attachment; filename="SecureNexus_Scan_Report.pdf""#,
                )
                .body("%PDF-1.4 fake");
        })
        .await;

    let mut view = ViewModel::new().with_input(Mode::Web, "https://example.com");
    client(&server).run_analysis(Mode::Web, &mut view).await;

    assert_eq!(
        view.result_html(),
        "<h3>Result:</h3>Scan report received: SecureNexus_Scan_Report.pdf (13 bytes)"
    );
    let report = view.take_report().expect("report");
    assert_eq!(report.bytes, b"%PDF-1.4 fake");
}

#[tokio::test]
async fn base_url_prefix_is_kept() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST").path("/api/analyze");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"analysis":"ok"}"#);
        })
        .await;

    let client = AnalysisClient::new(&server.url("/api"), None, false).expect("client");
    let reply = client.dispatch(Mode::Code, "print(1)").await.expect("reply");

    mock.assert_async().await;
    assert_eq!(reply, AnalysisReply::Json(serde_json::json!({ "analysis": "ok" })));
}

#[tokio::test]
async fn api_key_is_sent_as_bearer() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST")
                .path("/analyze")
                .header("authorization", "Bearer secret-key");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"analysis":"authorized"}"#);
        })
        .await;

    let creds = Credentials::new("secret-key".to_string());
    let client = AnalysisClient::new(&server.base_url(), Some(creds), false).expect("client");
    let mut view = ViewModel::new().with_input(Mode::Code, "x");
    client.run_analysis(Mode::Code, &mut view).await;

    mock.assert_async().await;
    assert_eq!(view.result_html(), "<h3>Result:</h3>authorized");
}

#[tokio::test]
async fn unknown_mode_name_is_reported() {
    let server = MockServer::start_async().await;
    let mut view = ViewModel::new().with_input(Mode::Code, "x");
    client(&server).run_analysis_by_name("sql", &mut view).await;
    assert_eq!(view.result_html(), "Invalid test type.");
}

#[tokio::test]
async fn later_run_overwrites_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("POST").path("/analyze");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"analysis":"first"}"#);
        })
        .await;

    let client = client(&server);
    let mut view = ViewModel::new().with_input(Mode::Code, "x");
    client.run_analysis(Mode::Code, &mut view).await;
    assert_eq!(view.result_html(), "<h3>Result:</h3>first");

    client.run_analysis(Mode::Phishing, &mut view).await;
    assert_eq!(view.result_html(), "Please paste the email or message.");
}
