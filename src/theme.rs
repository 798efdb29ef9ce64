pub const PLACEHOLDER_COLOR: &str = "#6c757d";
pub const TEXT_COLOR: &str = "#333";

/// Inline style for the query textarea; placeholder mode is muted and italic.
pub fn query_input_style(placeholder: bool) -> String {
    let (color, font_style) = if placeholder {
        (PLACEHOLDER_COLOR, "italic")
    } else {
        (TEXT_COLOR, "normal")
    };
    format!("color: {color}; font-style: {font_style}; min-height: 120px; resize: vertical;")
}

pub const APP_CSS: &str = r#"
:root {
    --color-bg: #f4f6f9;
    --color-surface: #ffffff;
    --color-primary: #0d6efd;
    --color-primary-dark: #0b5ed7;
    --color-text: #333333;
    --color-muted: #6c757d;
    --color-border: #dee2e6;
    --color-danger: #dc3545;
    --color-danger-bg: #f8d7da;
    --color-info-bg: #cff4fc;
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--color-bg); color: var(--color-text); font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; line-height: 1.5; }
.app-header { position: sticky; top: 0; z-index: 10; background: var(--color-surface); border-bottom: 1px solid var(--color-border); box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06); padding: 0.75rem 1.5rem; display: flex; flex-wrap: wrap; gap: 0.5rem 2rem; align-items: center; justify-content: space-between; }
.app-title { margin: 0; font-size: 1.25rem; font-weight: 700; color: var(--color-primary); }
.app-subtitle { color: var(--color-muted); font-size: 0.85rem; }
.app-sources { color: var(--color-muted); font-size: 0.8rem; max-width: 40rem; }
.container { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
.lead { text-align: center; color: var(--color-muted); font-size: 1.1rem; margin-bottom: 1.5rem; }
.card { background: var(--color-surface); border-radius: 0.5rem; box-shadow: 0 0.5rem 1rem rgba(0, 0, 0, 0.08); margin-top: 1.5rem; }
.card-header { padding: 0.75rem 1.25rem; border-bottom: 1px solid var(--color-border); background: #f8f9fa; border-radius: 0.5rem 0.5rem 0 0; }
.card-title { margin: 0; font-size: 1.1rem; }
.card-body { padding: 1.5rem; }
.form-label { display: block; font-weight: 700; margin-bottom: 0.5rem; }
.form-control { display: block; width: 100%; padding: 0.75rem 1rem; font-size: 1.1rem; font-family: inherit; border: 1px solid var(--color-border); border-radius: 0.375rem; }
.form-control:focus { outline: none; border-color: var(--color-primary); box-shadow: 0 0 0 0.2rem rgba(13, 110, 253, 0.2); }
.form-control.is-invalid { border-color: var(--color-danger); }
.invalid-feedback { color: var(--color-danger); font-size: 0.875rem; margin-top: 0.25rem; }
.btn-primary { display: block; width: 100%; margin-top: 1.5rem; padding: 0.75rem 1rem; font-size: 1.1rem; color: #ffffff; background: var(--color-primary); border: none; border-radius: 0.375rem; cursor: pointer; transition: transform 0.15s ease, background 0.15s ease; }
.btn-primary:hover:not(:disabled) { background: var(--color-primary-dark); transform: translateY(-2px); }
.btn-primary:disabled { opacity: 0.65; cursor: not-allowed; }
.alert { margin-top: 1.5rem; padding: 1rem 1.25rem; border-radius: 0.375rem; }
.alert-info { background: var(--color-info-bg); text-align: center; }
.alert-danger { background: var(--color-danger-bg); color: #842029; }
.spinner { display: inline-block; width: 1rem; height: 1rem; margin-right: 0.5rem; vertical-align: -0.125em; border: 0.15em solid currentColor; border-right-color: transparent; border-radius: 50%; animation: spin 0.75s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.recommendation-content { line-height: 1.7; }
.mb-2 { margin-bottom: 0.5rem; }
.mb-3 { margin-bottom: 1rem; }
.mb-4 { margin-bottom: 1.5rem; }
.border-top { border-top: 1px solid var(--color-border); }
.pt-3 { padding-top: 1rem; }
.source-item { padding: 0.35rem 0.75rem; margin-bottom: 0.35rem; background: #f8f9fa; border-left: 3px solid var(--color-primary); font-size: 0.9rem; }
.footer { margin-top: 3rem; padding-top: 1rem; border-top: 1px solid var(--color-border); text-align: center; color: var(--color-muted); font-size: 0.85rem; }
.visually-hidden { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); }
"#;
