//! Result format registry for query results.
//!
//! Formats are contributed by plugins, each filling in a
//! [`FormatFactoryBuilder`] with names, a label, MIME types with quality
//! values, syntax URIs and whichever hooks it implements:
//!
//! * a [`Sniffer`] that scores a content sample,
//! * a [`ResultsWriter`] and/or [`ResultsReader`],
//! * [`FormatterHooks`] for per-formatter setup and teardown.
//!
//! The [`FormatRegistry`] keeps factories in registration order. The first one
//! is the default format. Lookups match names, syntax URIs or MIME types
//! exactly, and [`FormatRegistry::guess_format_name`] scores every format
//! against partial evidence about some content.
//!
//! A [`Formatter`] is one live instance of a format. It borrows its factory,
//! so the registry cannot be dropped while formatters exist.
//!
//! # Plugins
//!
//! ```ignore
//! use tessera_formats::{FormatFactoryBuilder, FormatPlugin, RegistrationError};
//!
//! fn register_tsv(builder: &mut FormatFactoryBuilder) -> Result<(), RegistrationError> {
//!     builder
//!         .name("tsv")
//!         .label("Tab Separated Values")
//!         .mime_type("text/tab-separated-values", 10)
//!         .writer(TsvWriter);
//!     Ok(())
//! }
//!
//! tessera_formats::inventory::submit! {
//!     FormatPlugin::new("tsv", 0, register_tsv)
//! }
//! ```

mod config;
mod description;
mod error;
mod factory;
mod flags;
mod formatter;
mod plugin;
mod registry;
mod results;
mod sniff;

pub use config::FormatsConfig;
pub use description::{DECISIVE_QUALITY, FormatDescription, MimeTypeQ};
pub use error::{ConfigError, FormatError, HookError, Operation, RegistrationError};
pub use factory::{
	FormatFactory, FormatFactoryBuilder, FormatterContext, FormatterHooks, ResultsReader, ResultsWriter, Sniffer,
};
pub use flags::FormatFlags;
pub use formatter::Formatter;
pub use inventory;
pub use plugin::FormatPlugin;
pub use registry::{FormatQuery, FormatRegistry};
pub use results::{ResultSet, Row, RowBuffer, RowSource, Term, Variables};
pub use sniff::{DEFAULT_SNIFF_WINDOW, SniffEvidence, SniffProbe, identifier_suffix};
