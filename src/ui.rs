use crate::api::{get_recommendation, log_health};
use crate::form::{Effect, FormAction, FormState, Status};
use crate::theme::APP_CSS;
use crate::views::results::{ERROR_ID, RESULTS_ID};
use crate::views::{ErrorBanner, LoadingBanner, QueryForm, ResultsCard};
use dioxus::prelude::*;
use tracing::debug;

/// Lets the freshly rendered section mount before it is scrolled to.
const SCROLL_DELAY_MS: u32 = 100;

#[component]
pub fn App() -> Element {
    let state = use_signal(FormState::new);

    use_effect(|| {
        spawn(log_health());
    });

    rsx! {
        style { dangerous_inner_html: APP_CSS }
        AppHeader {}
        div { class: "container",
            p { class: "lead",
                "This empirical recommendation system predicts the most appropriate empirical antibiotics for patients, using only the provided medical context."
            }
            QueryForm { state }
            StatusPanel { state }
            AppFooter {}
        }
    }
}

/// Applies `action` to the form and carries out whatever effect it asks for.
pub fn dispatch(mut state: Signal<FormState>, action: FormAction) {
    let effect = state.with_mut(|form| form.apply(action));
    run_effect(state, effect);
}

fn run_effect(state: Signal<FormState>, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::Send(query) => {
            spawn(async move {
                let result = get_recommendation(&query).await;
                dispatch(state, FormAction::Resolved(result));
            });
        }
        Effect::ScrollToResults => scroll_into_view(RESULTS_ID, "start"),
        Effect::ScrollToError => scroll_into_view(ERROR_ID, "center"),
    }
}

fn scroll_into_view(element_id: &'static str, block: &'static str) {
    let script = format!(
        r#"setTimeout(() => {{
    const el = document.getElementById("{element_id}");
    if (el) {{ el.scrollIntoView({{ behavior: "smooth", block: "{block}" }}); }}
}}, {SCROLL_DELAY_MS});"#
    );
    run_script(script, "scroll");
}

/// Runs a DOM script in the page without waiting on it.
pub fn run_script(script: String, purpose: &'static str) {
    spawn(async move {
        if let Err(err) = document::eval(&script).await {
            debug!(purpose, error = ?err, "page script failed");
        }
    });
}

#[component]
fn StatusPanel(state: Signal<FormState>) -> Element {
    match state.read().status() {
        Status::Idle => rsx! {},
        Status::Loading => rsx! { LoadingBanner {} },
        Status::Failed(message) => rsx! { ErrorBanner { message: message.clone() } },
        Status::Answered(answer) => rsx! { ResultsCard { answer: answer.clone() } },
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        header { class: "app-header",
            div {
                h1 { class: "app-title", "SPARS" }
                div { class: "app-subtitle", "Surveillance-Powered Antimicrobial Recommendation System" }
            }
            div { class: "app-sources",
                strong { "AMR Surveillance Databases from: " }
                "GSK • Pfizer ATLAS • Johnson & Johnson • Paratek • Shionogi • Venatorx • Innoviva • Venus Remedies"
            }
        }
    }
}

#[component]
fn AppFooter() -> Element {
    rsx! {
        p { class: "footer",
            "Powered by the Vivli AMR Data Catalogue and your custom medical knowledge base."
        }
    }
}
