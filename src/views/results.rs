use crate::format::format_recommendation;
use dioxus::prelude::*;

pub const RESULTS_ID: &str = "resultsSection";
pub const ERROR_ID: &str = "errorState";

#[component]
pub fn LoadingBanner() -> Element {
    rsx! {
        div { class: "alert alert-info", role: "status",
            span { class: "spinner", aria_hidden: "true" }
            span { class: "visually-hidden", "Loading..." }
            "Consulting medical knowledge base..."
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { id: ERROR_ID, class: "alert alert-danger", role: "alert", "{message}" }
    }
}

#[component]
pub fn ResultsCard(answer: String) -> Element {
    // Every server-supplied span is escaped by the formatter
    let content_html = format_recommendation(&answer);
    rsx! {
        div { id: RESULTS_ID, class: "card",
            div { class: "card-header",
                h5 { class: "card-title", "Recommendation" }
            }
            div { class: "card-body",
                div { class: "recommendation-content", dangerous_inner_html: "{content_html}" }
            }
        }
    }
}
