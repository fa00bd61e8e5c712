//! Style configuration for the composed formats.
//!
//! Every separator and enclosure is optional: empty strings are no-ops,
//! never errors. Density toggles are independent booleans.

/// A prefix/suffix pair written around a position's output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Enclosure {
    /// Text written before the position.
    pub prefix: String,
    /// Text written after the position.
    pub suffix: String,
}

impl Enclosure {
    /// No enclosure.
    pub fn none() -> Self {
        Enclosure::default()
    }

    /// Distinct prefix and suffix.
    pub fn of(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Enclosure {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The same text on both sides.
    pub fn quotes(quote: impl Into<String>) -> Self {
        let quote = quote.into();
        Enclosure {
            prefix: quote.clone(),
            suffix: quote,
        }
    }
}

/// Style for whole-object formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStyle {
    /// Separator between members.
    pub member_separator: String,
    /// Separator between a member's name and its value.
    pub name_value_separator: String,
    /// Enclosure around member names.
    pub name_enclosure: Enclosure,
    /// Enclosure around member values.
    pub value_enclosure: Enclosure,
    /// Enclosure around the joined member body.
    pub body_enclosure: Enclosure,
    /// Insert a line break before each member.
    pub member_per_line: bool,
    /// Emit the member name before its value.
    pub include_member_name: bool,
    /// Prefix the output with the type name.
    pub include_class_name: bool,
    /// Emit members whose current value is absent as the literal `null`
    /// instead of omitting them.
    pub include_nulls: bool,
}

impl Default for ObjectStyle {
    fn default() -> Self {
        ObjectStyle {
            member_separator: ", ".to_string(),
            name_value_separator: ": ".to_string(),
            name_enclosure: Enclosure::none(),
            value_enclosure: Enclosure::none(),
            body_enclosure: Enclosure::none(),
            member_per_line: false,
            include_member_name: true,
            include_class_name: false,
            include_nulls: false,
        }
    }
}

/// Style for sequence formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStyle {
    /// Separator between items.
    pub item_separator: String,
    /// Separator between an item's index and its value.
    pub index_value_separator: String,
    /// Enclosure around the item index.
    pub index_enclosure: Enclosure,
    /// Enclosure around the item value.
    pub value_enclosure: Enclosure,
    /// Enclosure around each whole item.
    pub item_enclosure: Enclosure,
    /// Enclosure around the whole sequence.
    pub collection_enclosure: Enclosure,
    /// Emit the item index before its value; off by default.
    pub include_index: bool,
    /// Emit absent items as the literal `null` instead of dropping them.
    pub include_nulls: bool,
}

impl Default for SequenceStyle {
    fn default() -> Self {
        SequenceStyle {
            item_separator: ", ".to_string(),
            index_value_separator: ": ".to_string(),
            index_enclosure: Enclosure::none(),
            value_enclosure: Enclosure::none(),
            item_enclosure: Enclosure::none(),
            collection_enclosure: Enclosure::of("[", "]"),
            include_index: false,
            include_nulls: false,
        }
    }
}

/// Style for key/value mapping formatting. Unlike a sequence index, the key
/// position is always emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingStyle {
    /// Separator between pairs.
    pub pair_separator: String,
    /// Separator between a key and its value.
    pub key_value_separator: String,
    /// Enclosure around keys.
    pub key_enclosure: Enclosure,
    /// Enclosure around values.
    pub value_enclosure: Enclosure,
    /// Enclosure around each whole pair.
    pub pair_enclosure: Enclosure,
    /// Enclosure around the whole mapping.
    pub collection_enclosure: Enclosure,
    /// Emit pairs with an absent value as the literal `null` instead of
    /// dropping the pair.
    pub include_nulls: bool,
}

impl Default for MappingStyle {
    fn default() -> Self {
        MappingStyle {
            pair_separator: ", ".to_string(),
            key_value_separator: ": ".to_string(),
            key_enclosure: Enclosure::none(),
            value_enclosure: Enclosure::none(),
            pair_enclosure: Enclosure::none(),
            collection_enclosure: Enclosure::of("{", "}"),
            include_nulls: false,
        }
    }
}
