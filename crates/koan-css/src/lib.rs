//! CSS selector construction.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Ordering: `element#id.class[attr]:pseudo-class::pseudo-element`
//!   - At most one type selector, ID, and pseudo-element per compound
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Joining two built selectors with ` `, `>`, `+` or `~`
//!
//! # Not Implemented
//!
//! - Selector parsing and matching; selectors are only built and stringified
//!
//! # Example
//! ```
//! use koan_css::selector::{combine, element, id};
//!
//! let heading = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(heading.stringify(), "#main.container.editable");
//!
//! let link = element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let pair = combine(&element("div")?.id("main")?, "+", &element("span")?);
//! assert_eq!(pair.stringify(), "div#main + span");
//! # Ok::<(), koan_css::selector::SelectorError>(())
//! ```

/// CSS selector builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{Combinator, PartKind, SelectorBuilder, SelectorError};
