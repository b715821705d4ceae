use crate::api;
use crate::outcome;
use crate::state::AnalystState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn PromptForm() -> impl IntoView {
    let state = use_context::<AnalystState>().expect("AnalystState in context");
    let prompt_ref: NodeRef<leptos::html::Textarea> = NodeRef::new();

    // Each submission gets its own request; earlier ones are not cancelled.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let prompt = match prompt_ref.get() {
            Some(el) => api::prompt_from_input(&el.value()),
            None => return,
        };

        state.start_loading();

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::analyse(&prompt).await;
            state.finish(outcome::settle(result));
        });
    };

    view! {
        <form id="promptForm" class="prompt-form" on:submit=on_submit>
            <label for="prompt">"What should the analyst look at?"</label>
            <textarea
                id="prompt"
                name="prompt"
                class="prompt-input"
                rows="6"
                placeholder="Paste data or describe the analysis you need..."
                node_ref=prompt_ref
            ></textarea>
            <button type="submit" class="analyse-button">
                "Analyse"
            </button>
        </form>
    }
}
