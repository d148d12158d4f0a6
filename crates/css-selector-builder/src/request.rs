//! Selector construction from plain data.
//!
//! A [`SelectorRequest`] describes a selector as data, typically loaded from
//! JSON, and is turned into a builder or composite with
//! [`SelectorRequest::build`].
//!
//! ```rust
//! use css_selector_builder::{SelectorRequest, Stringify};
//!
//! let json = r#"{
//!     "left": { "element": "nav" },
//!     "combinator": ">",
//!     "right": { "element": "a", "classes": ["active"] }
//! }"#;
//!
//! let request: SelectorRequest = serde_json::from_str(json).unwrap();
//! assert_eq!(request.build().unwrap().stringify(), "nav > a.active");
//! ```

use crate::builder::SelectorBuilder;
use crate::category::Category;
use crate::combinator::{self, CompositeSelector, Stringify};
use crate::error::{SelectorError, SelectorResult};

/// Request to build a compound selector.
///
/// Fields are applied in category order, so building a compound request
/// never violates ordering or cardinality.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompoundRequest {
    /// Element (type) selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// ID selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Class names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Attribute selectors, without brackets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Pseudo-classes, without the leading colon.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pseudo_classes: Vec<String>,
    /// Pseudo-element, without the leading colons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo_element: Option<String>,
}

impl CompoundRequest {
    /// Build the selector described by this request.
    pub fn build(&self) -> SelectorResult<SelectorBuilder> {
        let mut builder = SelectorBuilder::new();
        if let Some(value) = &self.element {
            builder = builder.set_element(value)?;
        }
        if let Some(value) = &self.id {
            builder = builder.set_id(value)?;
        }
        for value in &self.classes {
            builder = builder.add_class(value)?;
        }
        for value in &self.attributes {
            builder = builder.add_attribute(value)?;
        }
        for value in &self.pseudo_classes {
            builder = builder.add_pseudo_class(value)?;
        }
        if let Some(value) = &self.pseudo_element {
            builder = builder.set_pseudo_element(value)?;
        }
        Ok(builder)
    }
}

impl TryFrom<CompoundRequest> for SelectorBuilder {
    type Error = SelectorError;

    fn try_from(request: CompoundRequest) -> SelectorResult<Self> {
        request.build()
    }
}

impl From<SelectorBuilder> for CompoundRequest {
    fn from(builder: SelectorBuilder) -> Self {
        let values = |category: Category| -> Vec<String> {
            builder
                .category(category)
                .iter()
                .map(|fragment| category.unformat(fragment).to_string())
                .collect()
        };
        let single = |category: Category| values(category).into_iter().next();

        Self {
            element: single(Category::Element),
            id: single(Category::Id),
            classes: values(Category::Class),
            attributes: values(Category::Attribute),
            pseudo_classes: values(Category::PseudoClass),
            pseudo_element: single(Category::PseudoElement),
        }
    }
}

/// Two selectors joined by a combinator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombinedRequest {
    /// Left operand.
    pub left: Box<SelectorRequest>,
    /// Combinator symbol, e.g. `>`.
    pub combinator: String,
    /// Right operand.
    pub right: Box<SelectorRequest>,
}

/// Request to build a selector, either compound or combined.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SelectorRequest {
    /// Two selectors joined by a combinator.
    Combined(CombinedRequest),
    /// A single compound selector.
    Compound(CompoundRequest),
}

impl SelectorRequest {
    /// Create a combined request.
    pub fn combined(
        left: SelectorRequest,
        combinator: impl Into<String>,
        right: SelectorRequest,
    ) -> Self {
        Self::Combined(CombinedRequest {
            left: Box::new(left),
            combinator: combinator.into(),
            right: Box::new(right),
        })
    }

    /// Build the selector described by this request.
    pub fn build(&self) -> SelectorResult<BuiltSelector> {
        match self {
            Self::Compound(compound) => compound.build().map(BuiltSelector::Compound),
            Self::Combined(combined) => {
                let left = combined.left.build()?;
                let right = combined.right.build()?;
                let composite = combinator::combine(&left, &combined.combinator, &right);
                Ok(BuiltSelector::Composite(composite))
            }
        }
    }
}

impl From<CompoundRequest> for SelectorRequest {
    fn from(compound: CompoundRequest) -> Self {
        Self::Compound(compound)
    }
}

/// Result of building a [`SelectorRequest`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltSelector {
    /// A compound selector.
    Compound(SelectorBuilder),
    /// A combined selector.
    Composite(CompositeSelector),
}

impl Stringify for BuiltSelector {
    fn stringify(&self) -> String {
        match self {
            Self::Compound(builder) => builder.stringify(),
            Self::Composite(composite) => composite.stringify(),
        }
    }
}

impl std::fmt::Display for BuiltSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compound(builder) => write!(f, "{}", builder),
            Self::Composite(composite) => write!(f, "{}", composite),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
