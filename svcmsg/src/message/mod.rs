//! Localised message formatting.
//!
//! Templates use `{$name}` placeholders, the form translators see in
//! extracted message files. [`format`] compiles a template and substitutes
//! named arguments in one step; [`Template`] keeps the compiled form for
//! reuse, and [`MessageBuilder`] authors templates whose placeholder names
//! come from the same [`PlaceholderNamer`] used to bind call-site values.
//!
//! Entity handling only touches literal template text. Argument values are
//! always inserted exactly as supplied.

mod arguments;
mod descriptor;
mod entities;
mod error;
mod names;
mod template;

pub use arguments::Arguments;
pub use descriptor::{ArgumentSlot, Message, MessageBuilder};
pub use entities::decode_entities;
pub use error::{FormatError, SyntaxErrorKind};
pub use names::{PlaceholderNamer, RESERVED_NAMES, canonicalize_names};
pub use template::{Segment, Template};

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How HTML character entities in literal template text are treated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscapeMode {
    /// Literal text is emitted unchanged, entities included.
    #[default]
    PreserveEntities,
    /// Named and numeric entities in literal text are decoded.
    UnescapeEntities,
}

impl EscapeMode {
    /// Processes one literal segment according to the mode.
    #[must_use]
    pub fn apply(self, literal: &str) -> Cow<'_, str> {
        match self {
            Self::PreserveEntities => Cow::Borrowed(literal),
            Self::UnescapeEntities => decode_entities(literal),
        }
    }
}

/// Per-call formatting options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Entity handling for literal text.
    pub escape_mode: EscapeMode,
}

impl FormatOptions {
    /// Options with the given escape mode.
    #[must_use]
    pub const fn new(escape_mode: EscapeMode) -> Self {
        Self { escape_mode }
    }

    /// Options that decode entities in literal text.
    #[must_use]
    pub const fn unescaped() -> Self {
        Self::new(EscapeMode::UnescapeEntities)
    }
}

impl From<EscapeMode> for FormatOptions {
    fn from(escape_mode: EscapeMode) -> Self {
        Self::new(escape_mode)
    }
}

/// Compiles `template` and substitutes `arguments`.
///
/// # Errors
///
/// Returns [`FormatError::Syntax`] for a malformed placeholder and
/// [`FormatError::UnboundPlaceholder`] when the template names an argument
/// missing from `arguments`.
///
/// # Examples
///
/// ```rust
/// use svcmsg::{Arguments, FormatOptions, format};
///
/// let args = Arguments::from([("arg", "A"), ("arg1", "B")]);
/// let text = format("{$arg}&amp;{$arg1}", &args, FormatOptions::unescaped())?;
/// assert_eq!(text, "A&B");
/// # Ok::<_, svcmsg::FormatError>(())
/// ```
pub fn format(
    template: &str,
    arguments: &Arguments,
    options: FormatOptions,
) -> Result<String, FormatError> {
    Template::parse(template)?.render(arguments, options)
}
