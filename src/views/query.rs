use crate::form::{EditKey, FormAction, FormState};
use crate::theme::query_input_style;
use crate::ui::{dispatch, run_script};
use dioxus::events::Key;
use dioxus::prelude::*;

pub const QUERY_INPUT_ID: &str = "clinicalQuery";
pub const MIN_INPUT_HEIGHT_PX: u32 = 150;

/// Resizes the textarea to its content, never below `MIN_INPUT_HEIGHT_PX`.
pub fn autogrow_script(element_id: &str) -> String {
    format!(
        r#"const el = document.getElementById("{element_id}");
if (el) {{
    el.style.height = "auto";
    el.style.height = Math.max(el.scrollHeight, {MIN_INPUT_HEIGHT_PX}) + "px";
}}"#
    )
}

/// Maps a key press inside the form to a controller action.
///
/// `shortcut` is true when Ctrl or Cmd is held.
pub fn key_action(key: &Key, shortcut: bool, placeholder: bool) -> Option<FormAction> {
    match key {
        Key::Enter if shortcut => Some(FormAction::Submit),
        Key::Escape => Some(FormAction::Clear),
        Key::Character(_) if placeholder => Some(FormAction::KeyPress(EditKey::Character)),
        Key::Backspace if placeholder => Some(FormAction::KeyPress(EditKey::Backspace)),
        Key::Delete if placeholder => Some(FormAction::KeyPress(EditKey::Delete)),
        _ => None,
    }
}

#[component]
pub fn QueryForm(state: Signal<FormState>) -> Element {
    let form = state();
    let input_class = if form.is_invalid() {
        "form-control is-invalid"
    } else {
        "form-control"
    };

    rsx! {
        div { class: "card",
            div { class: "card-body",
                form {
                    onsubmit: move |ev| ev.prevent_default(),
                    onkeydown: move |ev| {
                        let modifiers = ev.modifiers();
                        let shortcut = modifiers.ctrl() || modifiers.meta();
                        let placeholder = state.peek().is_placeholder();
                        if let Some(action) = key_action(&ev.key(), shortcut, placeholder) {
                            if matches!(action, FormAction::Submit | FormAction::Clear) {
                                ev.prevent_default();
                            }
                            dispatch(state, action);
                        }
                    },
                    label { class: "form-label", r#for: QUERY_INPUT_ID,
                        "Enter your clinical question or patient scenario:"
                    }
                    textarea {
                        id: QUERY_INPUT_ID,
                        class: input_class,
                        rows: "6",
                        style: query_input_style(form.is_placeholder()),
                        readonly: form.is_placeholder(),
                        value: "{form.display_text()}",
                        onfocus: move |_| dispatch(state, FormAction::Focus),
                        ontouchstart: move |_| dispatch(state, FormAction::Focus),
                        onblur: move |_| dispatch(state, FormAction::Blur),
                        oninput: move |ev| {
                            dispatch(state, FormAction::Input(ev.value()));
                            run_script(autogrow_script(QUERY_INPUT_ID), "autogrow");
                        },
                    }
                    if form.is_invalid() {
                        if let Some(message) = form.error() {
                            div { class: "invalid-feedback", "{message}" }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: form.submit_disabled(),
                        onclick: move |_| dispatch(state, FormAction::Submit),
                        if form.is_loading() {
                            span { class: "spinner", aria_hidden: "true" }
                        }
                        "{form.submit_label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autogrow_targets_input_with_minimum_height() {
        let script = autogrow_script(QUERY_INPUT_ID);
        assert!(script.contains(r#"getElementById("clinicalQuery")"#));
        assert!(script.contains("Math.max(el.scrollHeight, 150)"));
    }

    #[test]
    fn ctrl_enter_submits() {
        assert!(matches!(key_action(&Key::Enter, true, false), Some(FormAction::Submit)));
        assert!(key_action(&Key::Enter, false, false).is_none());
    }

    #[test]
    fn escape_clears_in_any_mode() {
        assert!(matches!(key_action(&Key::Escape, false, true), Some(FormAction::Clear)));
        assert!(matches!(key_action(&Key::Escape, false, false), Some(FormAction::Clear)));
    }

    #[test]
    fn editing_keys_only_matter_in_placeholder_mode() {
        assert!(matches!(
            key_action(&Key::Character("a".into()), false, true),
            Some(FormAction::KeyPress(EditKey::Character))
        ));
        assert!(matches!(
            key_action(&Key::Delete, false, true),
            Some(FormAction::KeyPress(EditKey::Delete))
        ));
        assert!(key_action(&Key::Character("a".into()), false, false).is_none());
        assert!(key_action(&Key::Tab, false, true).is_none());
    }
}
