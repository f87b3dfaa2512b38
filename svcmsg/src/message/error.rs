//! Failures raised while compiling or rendering message templates.

use thiserror::Error;

/// Errors produced by the message formatter.
///
/// None of these are transient: formatting the same inputs again fails the
/// same way, and no partial output is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template contains a malformed `{$name}` placeholder.
    #[error("malformed placeholder at byte {position}: {kind}")]
    Syntax {
        /// Byte offset of the offending `{$` in the template source.
        position: usize,
        /// What was wrong with the placeholder.
        kind: SyntaxErrorKind,
    },

    /// The template references a name with no bound argument.
    #[error("placeholder '{name}' has no bound argument")]
    UnboundPlaceholder {
        /// Placeholder name as it appears in the template.
        name: String,
    },

    /// Positional values did not match the arguments a message declares.
    #[error("message expects {expected} argument(s) but {actual} were supplied")]
    ArgumentCount {
        /// Number of arguments the message declares.
        expected: usize,
        /// Number of values supplied by the caller.
        actual: usize,
    },
}

/// Detail for [`FormatError::Syntax`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// `{$` was never closed by `}`.
    #[error("unterminated placeholder")]
    Unterminated,

    /// The text between `{$` and `}` is not a valid placeholder name.
    #[error("invalid placeholder name '{0}'")]
    InvalidName(String),

    /// Literal message text contains the `{$` marker and would be read back
    /// as a placeholder.
    #[error("literal text contains the placeholder marker '{{$'")]
    ReservedSequence,
}
