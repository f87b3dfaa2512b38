//! Runtime support for pluggable services and translated messages.
//!
//! The crate offers two independent pieces:
//!
//! * [`ServiceRegistry`] maps a [`Namespace`] to a factory, deriving a
//!   collision-resistant [`RegistryKey`] for storage and resolving a
//!   configurable default namespace.
//! * [`format`] and [`Template`] compile `{$name}` message templates against
//!   an [`Arguments`] map, optionally decoding HTML entities found in the
//!   literal template text.
//!
//! [`RuntimeConfig`] layers defaults, an optional TOML file, and `SVCMSG_`
//! environment variables so the default service can be pinned at deployment
//! time without touching call sites.

mod config;
mod error;
pub mod message;
pub mod registry;

pub use config::{CONFIG_PATH_ENV, DEFAULT_SERVICE_ENV, ENV_PREFIX, RuntimeConfig};
pub use error::{SvcMsgError, SvcMsgResult};
pub use message::{
    ArgumentSlot, Arguments, EscapeMode, FormatError, FormatOptions, Message, MessageBuilder,
    PlaceholderNamer, Segment, SyntaxErrorKind, Template, canonicalize_names, decode_entities,
    format,
};
pub use registry::{
    BUILTIN_DEFAULT_NAMESPACE, Factory, KEY_SUFFIX, Namespace, RegistryError, RegistryKey,
    ServiceRegistry,
};
