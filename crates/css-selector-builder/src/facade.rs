//! Entry points for building selectors.

use crate::builder::SelectorBuilder;
use crate::category::Category;
use crate::combinator::{self, CompositeSelector, Stringify};

/// Start a selector from a single fragment.
///
/// A fresh builder holding one value can never fail the order or duplicate
/// checks, so the factories return the builder directly.
fn start(category: Category, value: impl AsRef<str>) -> SelectorBuilder {
    log::trace!("starting selector with {} {:?}", category, value.as_ref());
    SelectorBuilder::starting_with(category, value.as_ref())
}

/// Start a selector with an element (type) selector.
pub fn element(value: impl AsRef<str>) -> SelectorBuilder {
    start(Category::Element, value)
}

/// Start a selector with an ID selector.
pub fn id(value: impl AsRef<str>) -> SelectorBuilder {
    start(Category::Id, value)
}

/// Start a selector with a class selector.
pub fn class(value: impl AsRef<str>) -> SelectorBuilder {
    start(Category::Class, value)
}

/// Start a selector with an attribute selector.
pub fn attr(value: impl AsRef<str>) -> SelectorBuilder {
    start(Category::Attribute, value)
}

/// Start a selector with a pseudo-class.
pub fn pseudo_class(value: impl AsRef<str>) -> SelectorBuilder {
    start(Category::PseudoClass, value)
}

/// Start a selector with a pseudo-element.
pub fn pseudo_element(value: impl AsRef<str>) -> SelectorBuilder {
    start(Category::PseudoElement, value)
}

/// Selector facade.
///
/// Every factory call returns an independent builder. The facade only keeps
/// the last [`Css::combine`] result, which [`Css::stringify`] renders.
///
/// ```rust
/// use css_selector_builder::{combinator, Css, Stringify};
///
/// let mut css = Css::new();
/// let button = css.element("button").add_class("primary").unwrap();
/// let form = css.id("signup");
/// let combined = css.combine(&form, combinator::DESCENDANT, &button);
///
/// assert_eq!(combined.stringify(), "#signup   button.primary");
/// assert_eq!(css.stringify(), "#signup   button.primary");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Css {
    last_combined: Option<CompositeSelector>,
}

impl Css {
    /// Create a new facade.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a selector with an element (type) selector.
    pub fn element(&self, value: impl AsRef<str>) -> SelectorBuilder {
        element(value)
    }

    /// Start a selector with an ID selector.
    pub fn id(&self, value: impl AsRef<str>) -> SelectorBuilder {
        id(value)
    }

    /// Start a selector with a class selector.
    pub fn class(&self, value: impl AsRef<str>) -> SelectorBuilder {
        class(value)
    }

    /// Start a selector with an attribute selector.
    pub fn attr(&self, value: impl AsRef<str>) -> SelectorBuilder {
        attr(value)
    }

    /// Start a selector with a pseudo-class.
    pub fn pseudo_class(&self, value: impl AsRef<str>) -> SelectorBuilder {
        pseudo_class(value)
    }

    /// Start a selector with a pseudo-element.
    pub fn pseudo_element(&self, value: impl AsRef<str>) -> SelectorBuilder {
        pseudo_element(value)
    }

    /// Join two selectors with a combinator and remember the result.
    pub fn combine<L, R>(&mut self, left: &L, symbol: &str, right: &R) -> CompositeSelector
    where
        L: Stringify + ?Sized,
        R: Stringify + ?Sized,
    {
        let composite = combinator::combine(left, symbol, right);
        self.last_combined = Some(composite.clone());
        composite
    }

    /// Last combined selector, if any.
    pub fn last_combined(&self) -> Option<&CompositeSelector> {
        self.last_combined.as_ref()
    }
}

impl Stringify for Css {
    /// Render the last combined selector, or an empty string.
    fn stringify(&self) -> String {
        self.last_combined
            .as_ref()
            .map(Stringify::stringify)
            .unwrap_or_default()
    }
}
