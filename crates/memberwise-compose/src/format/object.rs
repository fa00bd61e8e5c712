//! Whole-object formatting composed from per-member formatters.

use std::any::Any;
use std::marker::PhantomData;

use crate::registry::{same_operations, Operation};

use super::formatter::{Formatter, ValueFormatter};
use super::style::ObjectStyle;
use super::writer::Writer;

/// A built whole-object formatter.
///
/// Captures a frozen operation sequence and a style at build time and
/// composes them into one formatter over the target type. Immutable and
/// freely shareable across threads.
pub struct ObjectFormat<O> {
    operations: Vec<Operation<ValueFormatter>>,
    style: ObjectStyle,
    type_name: &'static str,
    body: Formatter<O>,
    _target: PhantomData<fn(&O)>,
}

impl<O: 'static> ObjectFormat<O> {
    /// Creates a formatter over an already resolved operation sequence.
    pub fn new(
        operations: Vec<Operation<ValueFormatter>>,
        style: ObjectStyle,
        type_name: &'static str,
    ) -> Self {
        let body = compose(&operations, &style, type_name);
        ObjectFormat {
            operations,
            style,
            type_name,
            body,
            _target: PhantomData,
        }
    }

    /// Formats an object.
    pub fn format(&self, target: &O) -> String {
        self.writer(target).finish()
    }

    /// Formats a possibly absent object; an absent one is the literal
    /// `null`, the body is never invoked for it.
    pub fn format_opt(&self, target: Option<&O>) -> String {
        match target {
            Some(target) => self.format(target),
            None => "null".to_string(),
        }
    }

    /// The deferred output for an object.
    pub fn writer(&self, target: &O) -> Writer {
        self.body.apply(target)
    }

    /// The resolved operations this format closes over.
    pub fn operations(&self) -> &[Operation<ValueFormatter>] {
        &self.operations
    }

    /// The style in effect.
    pub fn style(&self) -> &ObjectStyle {
        &self.style
    }

    /// The type name used by the class-name prefix.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<O: 'static> PartialEq for ObjectFormat<O> {
    fn eq(&self, other: &Self) -> bool {
        same_operations(&self.operations, &other.operations, Formatter::ptr_eq)
    }
}

fn compose<O: 'static>(
    operations: &[Operation<ValueFormatter>],
    style: &ObjectStyle,
    type_name: &'static str,
) -> Formatter<O> {
    let members: Vec<Formatter<O>> = operations
        .iter()
        .map(|op| member_formatter(op, style))
        .collect();
    let separator = style.member_separator.clone();
    let body_prefix = style.body_enclosure.prefix.clone();
    let body_suffix = style.body_enclosure.suffix.clone();
    let class_name = if style.include_class_name { type_name } else { "" };
    Formatter::of(move |target: &O| {
        let joined = Writer::join(members.iter().map(|member| member.apply(target)), &separator);
        Writer::text(class_name).concat(joined.enclose(&body_prefix, &body_suffix))
    })
}

fn member_formatter<O: 'static>(
    op: &Operation<ValueFormatter>,
    style: &ObjectStyle,
) -> Formatter<O> {
    let member = op.member().clone();
    let value_formatter = op.function().clone().enclose(
        style.value_enclosure.prefix.clone(),
        style.value_enclosure.suffix.clone(),
    );
    let head = {
        // Line break and name are fixed per member; precompute the writer.
        let mut head = Writer::empty();
        if style.member_per_line {
            head = head.concat(Writer::text("\n"));
        }
        if style.include_member_name {
            head = head
                .concat(
                    Writer::text(member.name())
                        .enclose(&style.name_enclosure.prefix, &style.name_enclosure.suffix),
                )
                .concat(Writer::text(&style.name_value_separator));
        }
        head
    };
    let include_nulls = style.include_nulls;
    Formatter::of(move |target: &O| {
        let value = member.value(target as &dyn Any).filter(|value| !value.is_null());
        let value_writer = match value {
            Some(value) => value_formatter.apply(value),
            // Absent values are dropped entirely unless the density flag
            // asks for the literal.
            None if include_nulls => Writer::text("null"),
            None => return Writer::empty(),
        };
        head.clone().concat(value_writer)
    })
}
