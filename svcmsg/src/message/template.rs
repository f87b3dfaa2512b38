//! Parsing and rendering of `{$name}` message templates.

use std::collections::BTreeSet;
use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use super::names::is_valid_name;
use super::{Arguments, FormatError, FormatOptions, SyntaxErrorKind};

/// One piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output, subject to the escape mode.
    Literal(String),
    /// Slot replaced verbatim by the argument with this name.
    Placeholder(String),
}

/// A compiled message template.
///
/// Parsing happens once; [`Template::render`] can then be called with
/// different arguments and options. Adjacent literal text is always merged
/// into a single segment.
///
/// # Examples
///
/// ```rust
/// use svcmsg::{Arguments, FormatOptions, Template};
///
/// let template: Template = "Tests run: {$arg}, Failures: {$arg1}".parse()?;
/// let args = Arguments::from([("arg", "12"), ("arg1", "0")]);
/// assert_eq!(
///     template.render(&args, FormatOptions::default())?,
///     "Tests run: 12, Failures: 0"
/// );
/// # Ok::<_, svcmsg::FormatError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Compiles `source` into segments.
    ///
    /// `{$name}` introduces a placeholder. Any other `{`, `}` or `$` is plain
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Syntax`] when a `{$` is never closed or encloses
    /// an invalid name.
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            let opens_placeholder = ch == '{' && chars.peek().is_some_and(|&(_, next)| next == '$');
            if !opens_placeholder {
                literal.push(ch);
                continue;
            }
            chars.next();
            let name = read_name(&mut chars).ok_or(FormatError::Syntax {
                position,
                kind: SyntaxErrorKind::Unterminated,
            })?;
            if !is_valid_name(&name) {
                return Err(FormatError::Syntax {
                    position,
                    kind: SyntaxErrorKind::InvalidName(name),
                });
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns the compiled segments in template order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Lists placeholder names in order of first appearance, without
    /// duplicates.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Substitutes `arguments` into the template.
    ///
    /// Placeholder values are copied verbatim. Literal text is processed by
    /// the escape mode in `options`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnboundPlaceholder`] for the first placeholder
    /// without a bound argument. No partial output is produced.
    pub fn render(&self, arguments: &Arguments, options: FormatOptions) -> Result<String, FormatError> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(&options.escape_mode.apply(text)),
                Segment::Placeholder(name) => {
                    let value =
                        arguments
                            .get(name)
                            .ok_or_else(|| FormatError::UnboundPlaceholder {
                                name: name.clone(),
                            })?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }
}

impl FromStr for Template {
    type Err = FormatError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder(name) => write!(f, "{{${name}}}")?,
            }
        }
        Ok(())
    }
}

fn read_name(chars: &mut Peekable<CharIndices<'_>>) -> Option<String> {
    let mut name = String::new();
    for (_, ch) in chars.by_ref() {
        if ch == '}' {
            return Some(name);
        }
        name.push(ch);
    }
    None
}
