//! XSD literal datatypes.
//!
//! This crate covers the scalar side of literal handling:
//!
//! * [`LiteralType`]: type tags and the numeric promotion lattice
//! * [`check`]: lexical form validators per primitive
//! * [`format`]: canonical lexical forms for numeric values
//! * [`XsdTable`]: datatype URI ↔ type tag mapping
//!
//! The table is owned by the process-wide context; validators and formatters
//! are free functions and need no setup.

pub mod check;
mod datetime;
mod error;
pub mod format;
mod literal_type;
mod table;

pub use check::{LexicalCheck, datatype_check, validate};
pub use datetime::check_datetime;
pub use error::XsdError;
pub use format::{format_double, format_float, format_integer};
pub use literal_type::{IntegerSubtype, LiteralType};
pub use table::{XSD_NAMESPACE, XsdTable};
