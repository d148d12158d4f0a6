//! # css-selector-builder
//!
//! A Rust library for building CSS selectors with a fluent API.
//!
//! This crate provides:
//! - **Selector Builder**: Assemble compound selectors part by part, with the
//!   CSS ordering and "only once" rules checked on every call
//! - **Combinators**: Join built selectors into `left SYMBOL right` chains of
//!   any depth
//! - **Requests** (`serde` feature): Describe selectors as data and build them
//!
//! ## Usage
//!
//! ```rust
//! use css_selector_builder::{combinator, element, id, Stringify};
//!
//! # fn main() -> css_selector_builder::SelectorResult<()> {
//! let main = id("main").add_class("container")?.add_class("editable")?;
//! assert_eq!(main.stringify(), "#main.container.editable");
//!
//! let link = element("a")
//!     .add_attribute(r#"href$=".png""#)?
//!     .add_pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let nested = combinator::combine(&main, combinator::CHILD, &link);
//! assert_eq!(nested.stringify(), r#"#main.container.editable > a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Selector Order
//!
//! | Position | Category | Rendered | Repeatable |
//! |----------|----------|----------|------------|
//! | 1 | element | `div` | No |
//! | 2 | id | `#main` | No |
//! | 3 | class | `.box` | Yes |
//! | 4 | attribute | `[href]` | Yes |
//! | 5 | pseudo-class | `:hover` | Yes |
//! | 6 | pseudo-element | `::before` | No |
//!
//! A call targeting a category that comes before one already set fails with
//! [`SelectorError::OrderViolation`]. Setting a non-repeatable category twice
//! fails with [`SelectorError::DuplicateCategory`].
//!
//! ## Feature Flags
//!
//! - `serde` - Enables `SelectorRequest` and serialization of all selector types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builder;
mod category;
pub mod combinator;
mod error;
mod facade;
#[cfg(feature = "serde")]
mod request;

pub use builder::SelectorBuilder;
pub use category::{Category, CATEGORY_COUNT};
pub use combinator::{combine, CompositeSelector, Stringify};
pub use error::{SelectorError, SelectorResult};
pub use facade::{attr, class, element, id, pseudo_class, pseudo_element, Css};
#[cfg(feature = "serde")]
pub use request::{BuiltSelector, CombinedRequest, CompoundRequest, SelectorRequest};
