use crate::outcome::Outcome;
use crate::state::AnalystState;
use leptos::prelude::*;

#[component]
pub fn ResponseBox() -> impl IntoView {
    let state = use_context::<AnalystState>().expect("AnalystState in context");

    let display = move || if state.is_visible() { "block" } else { "none" };

    let content = move || match state.outcome.get() {
        Some(Outcome::Rendered(html)) => view! {
            <div id="responseText" class="response-text" inner_html=html></div>
        }
        .into_any(),
        Some(other) => {
            let class = if other == Outcome::Failed {
                "response-text response-failed"
            } else {
                "response-text response-loading"
            };
            let text = other.message().unwrap_or_default();
            view! {
                <div id="responseText" class=class>{text}</div>
            }
            .into_any()
        }
        None => view! { <div id="responseText" class="response-text"></div> }.into_any(),
    };

    view! {
        <section id="responseBox" class="response-box" style:display=display>
            {content}
        </section>
    }
}
