//! Integration tests for compound selector building.
//!
//! These tests exercise the ordering and cardinality rules through the
//! public API only.

use css_selector_builder::{
    Category, Css, SelectorBuilder, SelectorError, SelectorResult, Stringify,
};

/// Apply one category call to a builder.
fn apply(builder: SelectorBuilder, category: Category) -> SelectorResult<SelectorBuilder> {
    let value = "x";
    match category {
        Category::Element => builder.set_element(value),
        Category::Id => builder.set_id(value),
        Category::Class => builder.add_class(value),
        Category::Attribute => builder.add_attribute(value),
        Category::PseudoClass => builder.add_pseudo_class(value),
        Category::PseudoElement => builder.set_pseudo_element(value),
    }
}

#[test]
fn test_id_with_two_classes() {
    let css = Css::new();
    let selector = css
        .id("main")
        .add_class("container")
        .and_then(|b| b.add_class("editable"))
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let css = Css::new();
    let selector = css
        .element("a")
        .add_attribute(r#"href$=".png""#)
        .and_then(|b| b.add_pseudo_class("focus"))
        .unwrap();
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_element_after_id_is_order_violation() {
    let css = Css::new();
    let selector = css
        .element("div")
        .set_id("main")
        .and_then(|b| b.add_class("container"))
        .and_then(|b| b.add_class("draggable"))
        .unwrap();
    assert_eq!(selector.stringify(), "div#main.container.draggable");

    let err = selector.set_element("table").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::OrderViolation {
            category: Category::Element,
            ..
        }
    ));
}

#[test]
fn test_every_earlier_category_after_later_fails() {
    for later in Category::ALL {
        for earlier in Category::ALL.iter().copied().filter(|c| *c < later) {
            let builder = apply(SelectorBuilder::new(), later).unwrap();
            let err = apply(builder, earlier).unwrap_err();
            assert_eq!(
                err,
                SelectorError::OrderViolation {
                    category: earlier,
                    later,
                },
                "{} after {}",
                earlier,
                later
            );
        }
    }
}

#[test]
fn test_every_earlier_then_later_succeeds() {
    for later in Category::ALL {
        for earlier in Category::ALL.iter().copied().filter(|c| *c < later) {
            let builder = apply(SelectorBuilder::new(), earlier).unwrap();
            let builder = apply(builder, later).unwrap();
            assert!(builder.has(earlier));
            assert!(builder.has(later));
        }
    }
}

#[test]
fn test_singletons_reject_second_value() {
    for category in Category::ALL.iter().copied().filter(|c| c.is_singleton()) {
        let builder = apply(SelectorBuilder::new(), category).unwrap();
        let err = apply(builder, category).unwrap_err();
        assert_eq!(err, SelectorError::DuplicateCategory { category });
    }
}

#[test]
fn test_repeatable_categories_accept_many_values() {
    for category in Category::ALL.iter().copied().filter(|c| !c.is_singleton()) {
        let builder = (0..3)
            .try_fold(SelectorBuilder::new(), |b, _| apply(b, category))
            .unwrap();
        assert_eq!(builder.category(category).len(), 3);
    }
}

#[test]
fn test_classes_not_deduplicated() {
    let selector = css_selector_builder::class("a")
        .add_class("b")
        .and_then(|b| b.add_class("a"))
        .unwrap();
    assert_eq!(selector.stringify(), ".a.b.a");
}

#[test]
fn test_pseudo_element_blocks_attribute() {
    let err = css_selector_builder::element("p")
        .set_pseudo_element("after")
        .and_then(|b| b.add_attribute("title"))
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            category: Category::Attribute,
            later: Category::PseudoElement,
        }
    );
}

#[test]
fn test_stringify_is_idempotent() {
    let selector = css_selector_builder::pseudo_class("hover")
        .add_pseudo_class("focus-visible")
        .and_then(|b| b.set_pseudo_element("marker"))
        .unwrap();
    let first = selector.stringify();
    assert_eq!(first, ":hover:focus-visible::marker");
    assert_eq!(selector.stringify(), first);
    assert_eq!(selector.to_string(), first);
}

#[test]
fn test_failed_call_reports_message() {
    let err = css_selector_builder::class("a").set_id("late").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("id cannot follow class"));
    assert!(message.contains("element, id, class, attribute, pseudo-class, pseudo-element"));
}
