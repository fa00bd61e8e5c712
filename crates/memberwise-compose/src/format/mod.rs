//! Format combinator engine.
//!
//! String output is assembled from two small pieces: a [`Writer`] is a
//! deferred chunk of output with a distinguished empty value, and a
//! [`Formatter`] is a pure function from a value to a `Writer`. Object,
//! sequence, and mapping representations are all composed from the same
//! combinator set, driven entirely by style configuration.

mod formatter;
mod mapping;
mod object;
mod sequence;
mod style;
mod writer;


pub use formatter::{collect, default_format, unless_null, unless_null_or, Formatter, ValueFormatter};
pub use mapping::MappingFormat;
pub use object::ObjectFormat;
pub use sequence::SequenceFormat;
pub use style::{Enclosure, MappingStyle, ObjectStyle, SequenceStyle};
pub use writer::Writer;
