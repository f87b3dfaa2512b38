//! Sample services used to exercise registries in tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Minimal pluggable capability.
pub trait Greeter: Send + Sync {
    /// Language tag of the implementation.
    fn language(&self) -> &'static str;

    /// Produces a greeting for `name`.
    fn greet(&self, name: &str) -> String;
}

/// Boxed greeter, the usual registry service type in tests.
pub type BoxedGreeter = Box<dyn Greeter>;

/// English greeter.
#[derive(Debug, Default, Clone, Copy)]
pub struct English;

impl Greeter for English {
    fn language(&self) -> &'static str {
        "en"
    }

    fn greet(&self, name: &str) -> String {
        format!("Hello, {name}!")
    }
}

/// French greeter.
#[derive(Debug, Default, Clone, Copy)]
pub struct French;

impl Greeter for French {
    fn language(&self) -> &'static str {
        "fr"
    }

    fn greet(&self, name: &str) -> String {
        format!("Bonjour, {name} !")
    }
}

/// Shared counter recording how often a factory ran.
#[derive(Debug, Default, Clone)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Wraps `make` so every invocation is counted.
    pub fn counted<S, F>(&self, make: F) -> impl Fn() -> S + Send + Sync + 'static
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.0);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            make()
        }
    }
}

/// Factory producing an [`English`] greeter.
#[must_use]
pub fn english() -> BoxedGreeter {
    Box::new(English)
}

/// Factory producing a [`French`] greeter.
#[must_use]
pub fn french() -> BoxedGreeter {
    Box::new(French)
}
