//! CSS selector building
//!
//! This module assembles selector strings part by part per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), rejecting parts
//! that would produce an ill-formed compound selector:
//!
//! ```text
//! element#id.class[attr]:pseudoClass::pseudoElement
//!           \----/\----/\----------/
//!           may occur several times
//! ```

mod combinator;

use std::fmt;

use koan_common::warning::warn_once;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

pub use combinator::Combinator;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kinds of simple selector a compound selector is built from, in the
/// order they must appear. The derived `Ord` is that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `span`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 4 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl PartKind {
    /// Whether at most one part of this kind may appear in a compound selector.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Append `value` to `out`, wrapped in this kind's punctuation.
    fn write(self, out: &mut String, value: &str) {
        match self {
            Self::Element => out.push_str(value),
            Self::Id => {
                out.push('#');
                out.push_str(value);
            }
            Self::Class => {
                out.push('.');
                out.push_str(value);
            }
            Self::Attribute => {
                out.push('[');
                out.push_str(value);
                out.push(']');
            }
            Self::PseudoClass => {
                out.push(':');
                out.push_str(value);
            }
            Self::PseudoElement => {
                out.push_str("::");
                out.push_str(value);
            }
        }
    }
}

/// A part was rejected by the builder.
///
/// The builder that produced the error is consumed; start a new one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id, or pseudo-element part.
    #[error("element, id, and pseudo-element must each occur at most once in a selector")]
    DuplicatePart {
        /// The repeated kind.
        kind: PartKind,
    },

    /// A part that must come before one already added.
    #[error(
        "selector parts must be arranged in order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// The kind being added.
        kind: PartKind,
        /// The latest kind already present.
        after: PartKind,
    },
}

/// Accumulates selector parts into a string.
///
/// Every part method consumes the builder and hands it back on success, so
/// calls chain with `?`:
///
/// ```
/// use koan_css::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .element("p")?
///     .pseudo_element("first-line")?;
/// assert_eq!(selector.to_string(), "p::first-line");
/// # Ok::<(), koan_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// The selector text so far.
    output: String,
    /// Kinds of the parts added to this builder, in insertion order.
    parts: Vec<PartKind>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: String::new(),
            parts: Vec::new(),
        }
    }

    /// Append a type selector: `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] if an element part is already present or any
    /// other part has been added.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::Element, value)
    }

    /// Append an ID selector: `#value`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] if an id is already present or a part that
    /// must follow the id has been added.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::Id, value)
    }

    /// Append a class selector: `.value`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Order`] if an attribute, pseudo-class or
    /// pseudo-element has been added.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::Class, value)
    }

    /// Append an attribute selector: `[value]`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Order`] if a pseudo-class or pseudo-element
    /// has been added.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::Attribute, value)
    }

    /// Append a pseudo-class: `:value`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Order`] if a pseudo-element has been added.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element: `::value`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if a pseudo-element is
    /// already present.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::PseudoElement, value)
    }

    /// The selector text built so far.
    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.output
    }

    /// Kinds of the parts added to this builder, in insertion order.
    ///
    /// Empty for a builder produced by [`combine`].
    #[must_use]
    pub fn parts(&self) -> &[PartKind] {
        &self.parts
    }

    fn push(mut self, kind: PartKind, value: &str) -> Result<Self, SelectorError> {
        self.check(kind)?;
        kind.write(&mut self.output, value);
        self.parts.push(kind);
        Ok(self)
    }

    /// Check that a part of `kind` may be appended.
    fn check(&self, kind: PartKind) -> Result<(), SelectorError> {
        // STEP 1: Element, id and pseudo-element occur at most once.
        if kind.is_unique() && self.parts.contains(&kind) {
            return Err(SelectorError::DuplicatePart { kind });
        }

        // STEP 2: Kinds never decrease, so the last one is the latest in order.
        match self.parts.last() {
            Some(&after) if after > kind => Err(SelectorError::Order { kind, after }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

/// Start a selector with a type selector: `value`.
///
/// # Errors
///
/// Never fails on a fresh builder; returns `Result` so chains can use `?` throughout.
pub fn element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(value)
}

/// Start a selector with an ID selector: `#value`.
///
/// # Errors
///
/// Never fails on a fresh builder; returns `Result` so chains can use `?` throughout.
pub fn id(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(value)
}

/// Start a selector with a class selector: `.value`.
///
/// # Errors
///
/// Never fails on a fresh builder; returns `Result` so chains can use `?` throughout.
pub fn class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(value)
}

/// Start a selector with an attribute selector: `[value]`.
///
/// # Errors
///
/// Never fails on a fresh builder; returns `Result` so chains can use `?` throughout.
pub fn attr(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attr(value)
}

/// Start a selector with a pseudo-class: `:value`.
///
/// # Errors
///
/// Never fails on a fresh builder; returns `Result` so chains can use `?` throughout.
pub fn pseudo_class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Start a selector with a pseudo-element: `::value`.
///
/// # Errors
///
/// Never fails on a fresh builder; returns `Result` so chains can use `?` throughout.
pub fn pseudo_element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(value)
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Join two selectors as `first + " " + combinator + " " + second`.
///
/// The combinator token is used verbatim; anything other than ` `, `>`, `+`
/// or `~` is reported with a warning. The result carries only the joined
/// text: its part history is empty, so further parts are checked as if it
/// were a fresh builder.
#[must_use]
pub fn combine(
    first: &SelectorBuilder,
    combinator: &str,
    second: &SelectorBuilder,
) -> SelectorBuilder {
    if Combinator::from_token(combinator).is_none() {
        warn_once("CSS", &format!("unknown combinator {combinator:?}"));
    }

    SelectorBuilder {
        output: format!("{first} {combinator} {second}"),
        parts: Vec::new(),
    }
}

/// [`combine`] with a typed [`Combinator`].
#[must_use]
pub fn combine_with(
    first: &SelectorBuilder,
    combinator: Combinator,
    second: &SelectorBuilder,
) -> SelectorBuilder {
    combine(first, combinator.token(), second)
}
