//! Fluent builder for compound selectors.
//!
//! A [`SelectorBuilder`] accumulates fragments per [`Category`] and rejects
//! calls that would produce a selector out of CSS order or with a repeated
//! element, id or pseudo-element.

use crate::category::{Category, CATEGORY_COUNT};
use crate::combinator::Stringify;
use crate::error::{SelectorError, SelectorResult};

/// Builder for a single compound selector such as `a#nav.item[href]:hover`.
///
/// Every mutator consumes the builder and hands it back on success, so calls
/// chain with `?`:
///
/// ```rust
/// use css_selector_builder::{SelectorBuilder, SelectorResult, Stringify};
///
/// fn nav_link() -> SelectorResult<String> {
///     let selector = SelectorBuilder::new()
///         .set_element("a")?
///         .add_class("nav")?
///         .add_pseudo_class("hover")?;
///     Ok(selector.stringify())
/// }
///
/// assert_eq!(nav_link().unwrap(), "a.nav:hover");
/// ```
///
/// With the `serde` feature the builder (de)serializes as a
/// `CompoundRequest`, so deserialized builders pass the same checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::request::CompoundRequest",
        into = "crate::request::CompoundRequest"
    )
)]
pub struct SelectorBuilder {
    slots: [Vec<String>; CATEGORY_COUNT],
}

impl SelectorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn starting_with(category: Category, value: &str) -> Self {
        let mut builder = Self::default();
        builder.slots[category.index()].push(category.format(value));
        builder
    }

    /// Set the element (type) selector.
    pub fn set_element(self, value: impl AsRef<str>) -> SelectorResult<Self> {
        self.push(Category::Element, value)
    }

    /// Set the ID selector.
    pub fn set_id(self, value: impl AsRef<str>) -> SelectorResult<Self> {
        self.push(Category::Id, value)
    }

    /// Append a class selector.
    pub fn add_class(self, value: impl AsRef<str>) -> SelectorResult<Self> {
        self.push(Category::Class, value)
    }

    /// Append an attribute selector. The value is wrapped in brackets as-is,
    /// so `href$=".png"` renders as `[href$=".png"]`.
    pub fn add_attribute(self, value: impl AsRef<str>) -> SelectorResult<Self> {
        self.push(Category::Attribute, value)
    }

    /// Append a pseudo-class.
    pub fn add_pseudo_class(self, value: impl AsRef<str>) -> SelectorResult<Self> {
        self.push(Category::PseudoClass, value)
    }

    /// Set the pseudo-element.
    pub fn set_pseudo_element(self, value: impl AsRef<str>) -> SelectorResult<Self> {
        self.push(Category::PseudoElement, value)
    }

    /// Add a value to the given category.
    ///
    /// Fails with [`SelectorError::OrderViolation`] if a later category
    /// already holds a value, then with [`SelectorError::DuplicateCategory`]
    /// if `category` is a singleton that is already set.
    pub fn push(mut self, category: Category, value: impl AsRef<str>) -> SelectorResult<Self> {
        self.check_order(category)?;

        if category.is_singleton() && self.has(category) {
            log::debug!("rejected second {} {:?}", category, value.as_ref());
            return Err(SelectorError::DuplicateCategory { category });
        }

        let fragment = category.format(value.as_ref());
        log::trace!("appending {} fragment {:?}", category, fragment);
        self.slots[category.index()].push(fragment);
        Ok(self)
    }

    /// Formatted fragments held by one category, in call order.
    pub fn category(&self, category: Category) -> &[String] {
        &self.slots[category.index()]
    }

    /// Check whether a category holds any value.
    pub fn has(&self, category: Category) -> bool {
        !self.slots[category.index()].is_empty()
    }

    /// Check whether no fragment has been added yet.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    // Later categories are scanned from the end so the reported one is the
    // furthest along in the selector.
    fn check_order(&self, category: Category) -> SelectorResult<()> {
        match category.later().iter().rev().find(|c| self.has(**c)) {
            Some(&later) => {
                log::debug!("rejected {} after {}", category, later);
                Err(SelectorError::OrderViolation { category, later })
            }
            None => Ok(()),
        }
    }
}

impl Stringify for SelectorBuilder {
    fn stringify(&self) -> String {
        self.slots.iter().flatten().map(String::as_str).collect()
    }
}

impl std::fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fragment in self.slots.iter().flatten() {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
