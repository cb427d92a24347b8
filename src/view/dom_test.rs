use super::*;

// =============================================================================
// Element
// =============================================================================

#[test]
fn set_attribute_replaces_in_place() {
    let mut el = Element::new("option").attr("value", "a").attr("class", "x");
    el.set_attribute("value", "b");
    assert_eq!(el.attribute("value"), Some("b"));
    assert_eq!(el.to_html(), r#"<option value="b" class="x"></option>"#);
}

#[test]
fn text_content_concatenates_descendants() {
    let el = Element::new("optgroup")
        .child(Element::new("option").text("One"))
        .child(Element::new("option").text("Two"));
    assert_eq!(el.text_content(), "OneTwo");
    assert_eq!(el.child_elements().count(), 2);
}

#[test]
fn to_html_escapes_text_and_attributes() {
    let el = Element::new("optgroup")
        .attr("label", r#"Fish & "Chips""#)
        .child(Element::new("option").attr("value", "<b>").text("<b>'s"));
    assert_eq!(
        el.to_html(),
        r#"<optgroup label="Fish &amp; &quot;Chips&quot;"><option value="&lt;b&gt;">&lt;b&gt;&#39;s</option></optgroup>"#
    );
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("Community Service"), "Community Service");
}

// =============================================================================
// SelectElement
// =============================================================================

fn sample_select() -> SelectElement {
    let mut select = SelectElement::new().attr("id", "point-category");
    select.append_child(
        Element::new("optgroup")
            .attr("label", "Social")
            .child(Element::new("option").attr("value", "Mixer").text("Mixer")),
    );
    select.append_child(
        Element::new("optgroup")
            .attr("label", "Service")
            .child(Element::new("option").attr("value", "Mixer").text("Mixer"))
            .child(Element::new("option").attr("value", "Food Drive").text("Food Drive")),
    );
    select
}

#[test]
fn empty_clears_children_and_value() {
    let mut select = sample_select();
    select.set_value(Some("Mixer".into()));

    select.empty();
    assert_eq!(select.option_groups().count(), 0);
    assert_eq!(select.value(), None);
    assert_eq!(select.to_html(), r#"<select id="point-category"></select>"#);
}

#[test]
fn selected_option_finds_first_match() {
    let mut select = sample_select();
    select.set_value(Some("Mixer".into()));

    let option = select.selected_option().unwrap();
    assert_eq!(option.text_content(), "Mixer");
    assert_eq!(select.to_html().matches(" selected").count(), 1);
    assert!(select.to_html().contains(r#"<optgroup label="Social"><option value="Mixer" selected>"#));
}

#[test]
fn value_without_matching_option_is_kept() {
    let mut select = sample_select();
    select.set_value(Some("Nope".into()));

    assert_eq!(select.value(), Some("Nope"));
    assert!(select.selected_option().is_none());
    assert!(!select.to_html().contains(" selected"));
}
