//! Sequence formatting over index/value positions.

use memberwise_core::MemberValue;

use super::formatter::{default_format, ValueFormatter};
use super::style::SequenceStyle;
use super::writer::Writer;

/// A configurable sequence formatter.
///
/// Reuses the object-format pieces against index/value positions: the index
/// is optional, each position has its own enclosure, and absent items are
/// dropped entirely unless the style asks for the `null` literal.
pub struct SequenceFormat {
    style: SequenceStyle,
    value_formatter: ValueFormatter,
}

impl SequenceFormat {
    /// Creates a sequence formatter with the given style and the native
    /// value rendering.
    pub fn new(style: SequenceStyle) -> Self {
        SequenceFormat {
            style,
            value_formatter: default_format(),
        }
    }

    /// Replaces the per-item value formatter.
    pub fn with_value_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.value_formatter = formatter;
        self
    }

    /// The style in effect.
    pub fn style(&self) -> &SequenceStyle {
        &self.style
    }

    /// Formats a sequence of items.
    pub fn format<'a, T, I>(&self, items: I) -> String
    where
        T: MemberValue,
        I: IntoIterator<Item = &'a T>,
    {
        let style = &self.style;
        let mut parts = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            let item = item as &dyn MemberValue;
            let value_writer = if item.is_null() {
                if !style.include_nulls {
                    continue;
                }
                Writer::text("null")
            } else {
                self.value_formatter.apply(item).enclose(
                    &style.value_enclosure.prefix,
                    &style.value_enclosure.suffix,
                )
            };
            let mut part = Writer::empty();
            if style.include_index {
                part = part
                    .concat(Writer::text(index.to_string()).enclose(
                        &style.index_enclosure.prefix,
                        &style.index_enclosure.suffix,
                    ))
                    .concat(Writer::text(&style.index_value_separator));
            }
            part = part
                .concat(value_writer)
                .enclose(&style.item_enclosure.prefix, &style.item_enclosure.suffix);
            parts.push(part);
        }
        Writer::join(parts, &style.item_separator)
            .enclose(
                &style.collection_enclosure.prefix,
                &style.collection_enclosure.suffix,
            )
            .finish()
    }
}

impl Default for SequenceFormat {
    fn default() -> Self {
        Self::new(SequenceStyle::default())
    }
}
