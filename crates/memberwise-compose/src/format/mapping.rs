//! Key/value mapping formatting.

use memberwise_core::MemberValue;

use super::formatter::{default_format, ValueFormatter};
use super::style::MappingStyle;
use super::writer::Writer;

/// A configurable key/value mapping formatter.
///
/// The key position is always emitted; only the value side participates in
/// null handling.
pub struct MappingFormat {
    style: MappingStyle,
    key_formatter: ValueFormatter,
    value_formatter: ValueFormatter,
}

impl MappingFormat {
    /// Creates a mapping formatter with the given style and the native
    /// rendering on both positions.
    pub fn new(style: MappingStyle) -> Self {
        MappingFormat {
            style,
            key_formatter: default_format(),
            value_formatter: default_format(),
        }
    }

    /// Replaces the key formatter.
    pub fn with_key_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.key_formatter = formatter;
        self
    }

    /// Replaces the value formatter.
    pub fn with_value_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.value_formatter = formatter;
        self
    }

    /// The style in effect.
    pub fn style(&self) -> &MappingStyle {
        &self.style
    }

    /// Formats a sequence of key/value pairs, in iteration order.
    pub fn format<'a, K, V, I>(&self, pairs: I) -> String
    where
        K: MemberValue,
        V: MemberValue,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        let style = &self.style;
        let mut parts = Vec::new();
        for (key, value) in pairs {
            let key = key as &dyn MemberValue;
            let value = value as &dyn MemberValue;
            let value_writer = if value.is_null() {
                if !style.include_nulls {
                    continue;
                }
                Writer::text("null")
            } else {
                self.value_formatter.apply(value).enclose(
                    &style.value_enclosure.prefix,
                    &style.value_enclosure.suffix,
                )
            };
            let part = self
                .key_formatter
                .apply(key)
                .enclose(&style.key_enclosure.prefix, &style.key_enclosure.suffix)
                .concat(Writer::text(&style.key_value_separator))
                .concat(value_writer)
                .enclose(&style.pair_enclosure.prefix, &style.pair_enclosure.suffix);
            parts.push(part);
        }
        Writer::join(parts, &style.pair_separator)
            .enclose(
                &style.collection_enclosure.prefix,
                &style.collection_enclosure.suffix,
            )
            .finish()
    }
}

impl Default for MappingFormat {
    fn default() -> Self {
        Self::new(MappingStyle::default())
    }
}
