//! Selector fragment categories.
//!
//! A compound selector is made of up to six kinds of fragments which must
//! appear in this order:
//!
//! ```text
//! element #id .class [attribute] :pseudo-class ::pseudo-element
//! ```

/// Number of selector categories.
pub const CATEGORY_COUNT: usize = 6;

/// Kind of fragment in a compound selector, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Type selector, e.g. `div`.
    Element,
    /// ID selector, e.g. `#main`.
    Id,
    /// Class selector, e.g. `.container`.
    Class,
    /// Attribute selector, e.g. `[href]`.
    Attribute,
    /// Pseudo-class, e.g. `:hover`.
    PseudoClass,
    /// Pseudo-element, e.g. `::before`.
    PseudoElement,
}

impl Category {
    /// All categories in rendering order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Element,
        Category::Id,
        Category::Class,
        Category::Attribute,
        Category::PseudoClass,
        Category::PseudoElement,
    ];

    /// Position of this category in rendering order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this category accepts at most one value per selector.
    pub const fn is_singleton(self) -> bool {
        matches!(
            self,
            Category::Element | Category::Id | Category::PseudoElement
        )
    }

    /// Categories that must not hold a value when this one is targeted.
    pub fn later(self) -> &'static [Category] {
        &ORDER[self.index() + 1..]
    }

    /// Text placed before and after a raw value.
    pub const fn affixes(self) -> (&'static str, &'static str) {
        match self {
            Category::Element => ("", ""),
            Category::Id => ("#", ""),
            Category::Class => (".", ""),
            Category::Attribute => ("[", "]"),
            Category::PseudoClass => (":", ""),
            Category::PseudoElement => ("::", ""),
        }
    }

    /// Render a raw value as a fragment of this category.
    pub fn format(self, value: &str) -> String {
        let (prefix, suffix) = self.affixes();
        format!("{}{}{}", prefix, value, suffix)
    }

    /// Recover the raw value from a fragment produced by [`Category::format`].
    pub fn unformat(self, fragment: &str) -> &str {
        let (prefix, suffix) = self.affixes();
        fragment
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(suffix))
            .unwrap_or(fragment)
    }

    /// Human readable name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Element => "element",
            Category::Id => "id",
            Category::Class => "class",
            Category::Attribute => "attribute",
            Category::PseudoClass => "pseudo-class",
            Category::PseudoElement => "pseudo-element",
        }
    }
}

static ORDER: [Category; CATEGORY_COUNT] = Category::ALL;

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
