use super::*;

#[test]
fn empty_document_uses_every_fallback() {
    let content: NotFoundContent = serde_json::from_str("{}").unwrap();
    let view = content.resolve();
    assert_eq!(view, NotFoundView::default());
    assert_eq!(view.code, FALLBACK_CODE);
    assert_eq!(view.title, FALLBACK_TITLE);
    assert_eq!(view.button_href, "/");
    assert_eq!(view.button_label, FALLBACK_BUTTON_LABEL);
}

#[test]
fn full_document_overrides_everything() {
    let content: NotFoundContent = serde_json::from_str(
        r#"{
            "code": "404",
            "title": "Lost?",
            "subtitle": "Nothing here",
            "description": "Try the home page.",
            "button": {"href": "/home", "label": "Go home"}
        }"#,
    )
    .unwrap();
    let view = content.resolve();
    assert_eq!(view.title, "Lost?");
    assert_eq!(view.subtitle, "Nothing here");
    assert_eq!(view.description, "Try the home page.");
    assert_eq!(view.button_href, "/home");
    assert_eq!(view.button_label, "Go home");
}

#[test]
fn numeric_code_is_accepted() {
    let content: NotFoundContent = serde_json::from_str(r#"{"code": 410}"#).unwrap();
    assert_eq!(content.resolve().code, "410");
}

#[test]
fn partial_button_falls_back_per_field() {
    let content: NotFoundContent = serde_json::from_str(r#"{"button": {"label": "Home"}}"#).unwrap();
    let view = content.resolve();
    assert_eq!(view.button_label, "Home");
    assert_eq!(view.button_href, FALLBACK_BUTTON_HREF);
}

#[test]
fn blank_strings_fall_back() {
    let content: NotFoundContent = serde_json::from_str(r#"{"title": "   ", "code": null}"#).unwrap();
    let view = content.resolve();
    assert_eq!(view.title, FALLBACK_TITLE);
    assert_eq!(view.code, FALLBACK_CODE);
}

#[test]
fn unknown_fields_are_ignored() {
    let content: NotFoundContent = serde_json::from_str(r#"{"title": "X", "theme": "dark"}"#).unwrap();
    assert_eq!(content.resolve().title, "X");
}
