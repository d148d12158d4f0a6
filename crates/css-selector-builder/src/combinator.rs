//! Combining selectors with relational operators.
//!
//! [`combine`] joins two rendered selectors as `left SYMBOL right`. The
//! symbol is not restricted to the four CSS combinators; the constants in
//! this module cover the common ones.
//!
//! ```rust
//! use css_selector_builder::{combinator, element, Stringify};
//!
//! let list = element("ul");
//! let item = element("li");
//! let nested = combinator::combine(&list, combinator::CHILD, &item);
//! assert_eq!(nested.stringify(), "ul > li");
//! ```

/// Anything that renders to selector text.
pub trait Stringify {
    /// Render the selector text.
    fn stringify(&self) -> String;
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

/// Descendant combinator. Rendered between single spaces, so it yields
/// three spaces: `div   p`.
pub const DESCENDANT: &str = " ";
/// Child combinator.
pub const CHILD: &str = ">";
/// Adjacent sibling combinator.
pub const ADJACENT_SIBLING: &str = "+";
/// General sibling combinator.
pub const GENERAL_SIBLING: &str = "~";

/// Two selectors joined by a combinator.
///
/// Operands are rendered when the composite is created, so later changes to
/// an operand builder do not affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositeSelector {
    left: String,
    symbol: String,
    right: String,
}

impl CompositeSelector {
    /// Create a composite from already rendered operands.
    pub fn new(
        left: impl Into<String>,
        symbol: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            symbol: symbol.into(),
            right: right.into(),
        }
    }

    /// Rendered left operand.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Combinator symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Rendered right operand.
    pub fn right(&self) -> &str {
        &self.right
    }
}

/// Join two selectors with a combinator symbol.
pub fn combine<L, R>(left: &L, symbol: &str, right: &R) -> CompositeSelector
where
    L: Stringify + ?Sized,
    R: Stringify + ?Sized,
{
    let composite = CompositeSelector::new(left.stringify(), symbol, right.stringify());
    log::trace!("combined into {:?}", composite.stringify());
    composite
}

impl Stringify for CompositeSelector {
    fn stringify(&self) -> String {
        format!("{} {} {}", self.left, self.symbol, self.right)
    }
}

impl std::fmt::Display for CompositeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.symbol, self.right)
    }
}

// =============================================================================
// Tests
// =============================================================================
