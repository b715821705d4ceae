use data_analyst_ui::app::AnalystPage;
use data_analyst_ui::markdown;
use data_analyst_ui::outcome::{FAILURE_MESSAGE, LOADING_MESSAGE, Outcome};
use data_analyst_ui::state::AnalystState;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{HtmlElement, HtmlFormElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Page mounted into its own container, with the state it reads from.
struct Mounted {
    container: HtmlElement,
    state: AnalystState,
}

impl Mounted {
    fn new() -> Self {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let container: HtmlElement = document
            .create_element("div")
            .expect("create container")
            .unchecked_into();
        document
            .body()
            .expect("body")
            .append_child(&container)
            .expect("attach container");

        let state = AnalystState::new();
        let handle = leptos::mount::mount_to(container.clone(), move || {
            provide_context(state);
            view! { <AnalystPage/> }
        });
        // Keep the page mounted for the rest of the test run.
        std::mem::forget(handle);

        Self { container, state }
    }

    fn find<T: JsCast>(&self, selector: &str) -> T {
        self.container
            .query_selector(selector)
            .expect("valid selector")
            .unwrap_or_else(|| panic!("{selector} not rendered"))
            .unchecked_into()
    }

    fn response_box_display(&self) -> String {
        self.find::<HtmlElement>("#responseBox")
            .style()
            .get_property_value("display")
            .expect("display property")
    }

    fn response_text(&self) -> HtmlElement {
        self.find("#responseText")
    }
}

/// Let queued render effects run.
async fn settle_dom() {
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
async fn response_box_hidden_until_first_submission() {
    let page = Mounted::new();
    settle_dom().await;

    assert_eq!(page.response_box_display(), "none");
    let _: HtmlTextAreaElement = page.find("#promptForm #prompt");
}

#[wasm_bindgen_test]
async fn loading_state_shows_box_and_loading_text() {
    let page = Mounted::new();
    page.state.start_loading();
    settle_dom().await;

    assert_eq!(page.response_box_display(), "block");
    let text = page.response_text();
    assert_eq!(text.text_content().as_deref(), Some(LOADING_MESSAGE));
    assert!(text.class_list().contains("response-loading"));
}

#[wasm_bindgen_test]
async fn rendered_outcome_injects_sanitized_html() {
    let page = Mounted::new();
    let answer = "1. Executive Summary\n\n**Sales rose** <script>alert(1)</script>";
    page.state.finish(Outcome::Rendered(markdown::render(answer)));
    settle_dom().await;

    assert_eq!(page.response_box_display(), "block");
    let html = page.response_text().inner_html();
    assert_eq!(html, markdown::render(answer));
    assert!(html.contains("<strong>Sales rose</strong>"));
    assert!(!html.contains("alert"));
}

#[wasm_bindgen_test]
async fn failed_outcome_shows_failure_text() {
    let page = Mounted::new();
    page.state.finish(Outcome::Failed);
    settle_dom().await;

    assert_eq!(page.response_box_display(), "block");
    let text = page.response_text();
    assert_eq!(text.text_content().as_deref(), Some(FAILURE_MESSAGE));
    assert!(text.class_list().contains("response-failed"));
}

#[wasm_bindgen_test]
async fn submitting_form_reads_prompt_and_reports_failed_request() {
    let page = Mounted::new();

    let prompt: HtmlTextAreaElement = page.find("#prompt");
    prompt.set_value("  total sales by region \n");
    let form: HtmlFormElement = page.find("#promptForm");
    form.request_submit().expect("submit form");

    // The test server has no analyse route, so the request ends non-2xx.
    for _ in 0..100 {
        if page.state.outcome.get_untracked() == Some(Outcome::Failed) {
            break;
        }
        TimeoutFuture::new(20).await;
    }
    settle_dom().await;

    assert_eq!(page.state.outcome.get_untracked(), Some(Outcome::Failed));
    assert_eq!(page.response_box_display(), "block");
    assert_eq!(
        page.response_text().text_content().as_deref(),
        Some(FAILURE_MESSAGE)
    );
}
