//! Message descriptors: a template plus the arguments it declares.
//!
//! A [`Message`] is what extraction tooling hands to translators and what
//! generated code formats at runtime. Placeholder names are assigned once by
//! the builder, so the template text and the positional argument binding can
//! never disagree.

use super::names::PlaceholderNamer;
use super::{Arguments, FormatError, FormatOptions, Segment, SyntaxErrorKind, Template};

/// Handle to an argument declared on a [`MessageBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSlot {
    name: String,
}

impl ArgumentSlot {
    /// Canonical placeholder name assigned to the argument.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Authors a [`Message`].
///
/// # Examples
///
/// ```rust
/// use svcmsg::{FormatOptions, MessageBuilder};
///
/// let mut builder = MessageBuilder::new("MSG_test7");
/// let first = builder.argument("_arg");
/// let second = builder.argument("_arg1");
/// builder
///     .description("test7")
///     .placeholder(&first)
///     .text("&amp;")
///     .placeholder(&second);
/// let message = builder.build()?;
///
/// assert_eq!(message.template_source(), "{$arg}&amp;{$arg1}");
/// assert_eq!(message.format(["A", "B"], FormatOptions::unescaped())?, "A&B");
/// # Ok::<_, svcmsg::FormatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    id: String,
    description: Option<String>,
    namer: PlaceholderNamer,
    arguments: Vec<String>,
    segments: Vec<Segment>,
}

impl MessageBuilder {
    /// Starts a message with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            namer: PlaceholderNamer::new(),
            arguments: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Sets the translator-facing description.
    pub fn description(&mut self, text: impl Into<String>) -> &mut Self {
        self.description = Some(text.into());
        self
    }

    /// Declares the next positional argument and returns its slot.
    pub fn argument(&mut self, natural: &str) -> ArgumentSlot {
        let name = self.namer.assign(natural);
        self.arguments.push(name.clone());
        ArgumentSlot { name }
    }

    /// Appends literal text.
    pub fn text(&mut self, literal: &str) -> &mut Self {
        if let Some(Segment::Literal(previous)) = self.segments.last_mut() {
            previous.push_str(literal);
        } else if !literal.is_empty() {
            self.segments.push(Segment::Literal(literal.to_owned()));
        }
        self
    }

    /// Appends a placeholder for a declared argument.
    pub fn placeholder(&mut self, slot: &ArgumentSlot) -> &mut Self {
        self.segments.push(Segment::Placeholder(slot.name.clone()));
        self
    }

    /// Finishes the message.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnboundPlaceholder`] when a placeholder uses a
    /// slot that this builder did not declare, and [`FormatError::Syntax`]
    /// with [`SyntaxErrorKind::ReservedSequence`] when literal text contains
    /// `{$`, which would be read back as a placeholder.
    pub fn build(&self) -> Result<Message, FormatError> {
        let mut offset = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    if let Some(index) = text.find("{$") {
                        return Err(FormatError::Syntax {
                            position: offset + index,
                            kind: SyntaxErrorKind::ReservedSequence,
                        });
                    }
                    offset += text.len();
                }
                Segment::Placeholder(name) => {
                    if !self.namer.is_assigned(name) {
                        return Err(FormatError::UnboundPlaceholder { name: name.clone() });
                    }
                    offset += name.len() + 3;
                }
            }
        }
        Ok(Message {
            id: self.id.clone(),
            description: self.description.clone(),
            arguments: self.arguments.clone(),
            template: Template::from_segments(self.segments.clone()),
        })
    }
}

/// A compiled message with its declared arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    description: Option<String>,
    arguments: Vec<String>,
    template: Template,
}

impl Message {
    /// Message identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Translator-facing description, when one was given.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Canonical argument names in declaration order.
    #[must_use]
    pub fn argument_names(&self) -> &[String] {
        &self.arguments
    }

    /// The compiled template.
    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }

    /// Template text in `{$name}` form.
    #[must_use]
    pub fn template_source(&self) -> String {
        self.template.to_string()
    }

    /// Binds positional `values` to the declared argument names.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::ArgumentCount`] when the number of values
    /// differs from the number of declared arguments.
    pub fn bind<I, V>(&self, values: I) -> Result<Arguments, FormatError>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let supplied: Vec<String> = values.into_iter().map(Into::into).collect();
        if supplied.len() != self.arguments.len() {
            return Err(FormatError::ArgumentCount {
                expected: self.arguments.len(),
                actual: supplied.len(),
            });
        }
        Ok(self.arguments.iter().cloned().zip(supplied).collect())
    }

    /// Binds positional `values` and renders the message.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::bind`] and [`Template::render`] failures.
    pub fn format<I, V>(&self, values: I, options: FormatOptions) -> Result<String, FormatError>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.template.render(&self.bind(values)?, options)
    }

    /// Replaces the template with a translated one.
    ///
    /// Translations may reorder, repeat, or drop placeholders but may not
    /// introduce names the message does not declare.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Syntax`] when the translation is malformed and
    /// [`FormatError::UnboundPlaceholder`] when it references an undeclared
    /// name.
    pub fn translate(&self, translated: &str) -> Result<Self, FormatError> {
        let template = Template::parse(translated)?;
        if let Some(unknown) = template
            .placeholders()
            .into_iter()
            .find(|name| !self.arguments.iter().any(|declared| declared == name))
        {
            return Err(FormatError::UnboundPlaceholder {
                name: unknown.to_owned(),
            });
        }
        tracing::debug!(id = %self.id, "applied message translation");
        Ok(Self {
            template,
            ..self.clone()
        })
    }
}
