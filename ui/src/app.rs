use crate::components::prompt_form::PromptForm;
use crate::components::response_box::ResponseBox;
use crate::state::AnalystState;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AnalystState::new());
    view! { <AnalystPage/> }
}

/// The page body. Expects an `AnalystState` in context.
#[component]
pub fn AnalystPage() -> impl IntoView {
    view! {
        <style>{STYLES}</style>
        <main class="app">
            <header class="app-header">
                <h1>"Data Analyst"</h1>
            </header>
            <PromptForm/>
            <ResponseBox/>
        </main>
    }
}

const STYLES: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    body {
        background: #1a1a2e;
        color: #e0e0e0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        min-height: 100vh;
    }

    .app {
        display: flex;
        flex-direction: column;
        gap: 16px;
        max-width: 900px;
        margin: 0 auto;
        padding: 16px;
    }

    .app-header {
        padding-bottom: 12px;
        border-bottom: 1px solid #2a2a4a;
    }

    .app-header h1 {
        font-size: 1.1rem;
        font-weight: 600;
        color: #8888cc;
    }

    .prompt-form {
        display: flex;
        flex-direction: column;
        gap: 8px;
    }

    .prompt-form label {
        color: #aaaadd;
        font-size: 0.9rem;
    }

    .prompt-input {
        background: #222240;
        color: #e0e0e0;
        border: 1px solid #3a3a5a;
        border-radius: 8px;
        padding: 10px 12px;
        font-family: inherit;
        font-size: 0.95rem;
        resize: vertical;
        outline: none;
    }

    .prompt-input:focus {
        border-color: #5a5a8a;
    }

    .analyse-button {
        align-self: flex-end;
        background: #3a5aaa;
        color: #e0e8ff;
        border: none;
        border-radius: 8px;
        padding: 10px 20px;
        font-size: 0.95rem;
        cursor: pointer;
    }

    .analyse-button:hover {
        background: #4a6abb;
    }

    .response-box {
        background: #2a2a3e;
        border-radius: 12px;
        padding: 14px 18px;
        line-height: 1.5;
        word-wrap: break-word;
    }

    .response-loading {
        color: #8888cc;
        animation: pulse 1s ease-in-out infinite;
    }

    .response-failed {
        color: #ff8888;
    }

    .response-text p,
    .response-text ul,
    .response-text ol,
    .response-text table {
        margin: 0.5em 0;
    }

    .response-text ul,
    .response-text ol {
        padding-left: 1.4em;
    }

    .response-text table {
        border-collapse: collapse;
    }

    .response-text th,
    .response-text td {
        border: 1px solid #3a3a5a;
        padding: 4px 8px;
    }

    .response-text pre {
        background: #111122;
        padding: 10px;
        border-radius: 6px;
        overflow-x: auto;
    }

    .response-text code {
        font-family: "JetBrains Mono", "Fira Code", monospace;
        font-size: 0.9em;
    }

    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.3; }
    }
"#;
