use data_analyst_ui::api::{
    ANALYSE_PATH, AnalyseRequest, ApiError, check_status, endpoint_for, prompt_from_input,
};
use data_analyst_ui::markdown;
use data_analyst_ui::outcome::{FAILURE_MESSAGE, LOADING_MESSAGE, Outcome, settle, settle_with};
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn successful_response_renders_sanitized_markdown() {
    let text = "## Revenue\n\n| region | total |\n|---|---|\n| emea | **42** |";
    let outcome = settle(Ok(text.to_string()));
    assert_eq!(outcome, Outcome::Rendered(markdown::render(text)));

    match outcome {
        Outcome::Rendered(html) => {
            assert!(html.contains("<h2>Revenue</h2>"));
            assert!(html.contains("<table>"));
            assert!(html.contains("<strong>42</strong>"));
        }
        other => panic!("expected rendered html, got {other:?}"),
    }
}

#[wasm_bindgen_test]
fn non_success_status_shows_failure_message() {
    let err = check_status(502).expect_err("502 is a failure");
    assert_eq!(err, ApiError::Status(502));

    let outcome = settle(Err(err));
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(outcome.message(), Some(FAILURE_MESSAGE));
}

#[wasm_bindgen_test]
fn network_failure_shows_failure_message_and_reports_error() {
    let mut reported = None;
    let outcome = settle_with(
        Err(ApiError::Network("Failed to fetch".to_string())),
        |e| reported = Some(e.to_string()),
    );

    assert_eq!(outcome.message(), Some(FAILURE_MESSAGE));
    assert_eq!(reported.as_deref(), Some("network error: Failed to fetch"));
}

#[wasm_bindgen_test]
fn success_does_not_report() {
    let mut reported = false;
    let outcome = settle_with(Ok("plain".to_string()), |_| reported = true);
    assert!(!reported);
    assert_eq!(outcome.message(), None);
}

#[wasm_bindgen_test]
fn only_2xx_statuses_succeed() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    assert_eq!(check_status(304), Err(ApiError::Status(304)));
    assert_eq!(check_status(400), Err(ApiError::Status(400)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
}

#[wasm_bindgen_test]
fn loading_outcome_has_loading_message() {
    assert_eq!(Outcome::Loading.message(), Some(LOADING_MESSAGE));
}

#[wasm_bindgen_test]
fn request_body_is_prompt_object() {
    let body = serde_json::to_value(AnalyseRequest { prompt: "top 5 products" }).unwrap();
    assert_eq!(body, serde_json::json!({"prompt": "top 5 products"}));
}

#[wasm_bindgen_test]
fn prompt_is_trimmed_before_sending() {
    let prompt = prompt_from_input("  total sales by region \n");
    assert_eq!(prompt, "total sales by region");
    let body = serde_json::to_value(AnalyseRequest { prompt: &prompt }).unwrap();
    assert_eq!(body, serde_json::json!({"prompt": "total sales by region"}));
}

#[wasm_bindgen_test]
fn endpoint_is_relative_unless_base_given() {
    assert_eq!(endpoint_for(None), ANALYSE_PATH);
    assert_eq!(endpoint_for(Some("  ")), ANALYSE_PATH);
    assert_eq!(
        endpoint_for(Some("https://api.example.com/")),
        "https://api.example.com/api/dataAnalyst/analyse"
    );
}

#[wasm_bindgen_test]
fn markdown_strips_script_tags() {
    let rendered = markdown::render(r#"<script>alert("xss")</script>"#);
    assert!(!rendered.contains("<script"));
    assert!(!rendered.contains("alert"));
}

#[wasm_bindgen_test]
fn markdown_strips_event_handlers_and_javascript_links() {
    let rendered = markdown::render(
        "<img src=\"x.png\" onerror=\"alert(1)\">\n\n[click](javascript:alert(1))",
    );
    assert!(!rendered.contains("onerror"));
    assert!(!rendered.contains("javascript:"));
    assert!(rendered.contains("click"));
}

#[wasm_bindgen_test]
fn markdown_keeps_safe_formatting() {
    let rendered = markdown::render("~~old~~ *new* `code`");
    assert!(rendered.contains("<del>old</del>"));
    assert!(rendered.contains("<em>new</em>"));
    assert!(rendered.contains("<code>code</code>"));
}
