//! Builder for whole-object string formatters.

use std::marker::PhantomData;

use memberwise_compose::{
    default_format, Enclosure, Formatter, ObjectFormat, ObjectStyle, OperationRegistry,
    ValueFormatter,
};
use memberwise_core::{MemberDescriptor, MemberValue, Members, Result, TypeKey};

use super::typed_member;

/// Configures and builds an [`ObjectFormat`] over `O`.
pub struct FormatBuilder<O: Members> {
    registry: OperationRegistry<ValueFormatter>,
    style: ObjectStyle,
    _target: PhantomData<fn(&O)>,
}

impl<O: Members> FormatBuilder<O> {
    /// Creates an empty builder with the default style.
    pub fn new() -> Self {
        FormatBuilder {
            registry: OperationRegistry::new(),
            style: ObjectStyle::default(),
            _target: PhantomData,
        }
    }

    /// Appends every inspectable member of `O` with the native rendering.
    /// Idempotent set union, same as the other builders.
    pub fn append_public_members(mut self) -> Self {
        self.registry
            .append_members(O::members(), |_| default_format());
        self
    }

    /// Appends only the members carrying the given marker tag.
    pub fn append_members_tagged(mut self, tag: &str) -> Self {
        self.registry
            .append_members(O::members_tagged(tag), |_| default_format());
        self
    }

    /// Appends one externally built member descriptor.
    pub fn append_member(mut self, member: MemberDescriptor) -> Self {
        self.registry.append_members([member], |_| default_format());
        self
    }

    /// Pins a typed rendering to the named member.
    pub fn format_member_with<T, F>(mut self, name: &str, render: F) -> Result<Self>
    where
        T: MemberValue,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let member = typed_member::<O, T>(name)?;
        self.registry.set_member_fn(member, erase_format(render));
        Ok(self)
    }

    /// Registers a rendering for every member of the exact value type `T`.
    pub fn format_type_with<T, F>(mut self, render: F) -> Self
    where
        T: MemberValue,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.registry
            .set_type_fn(TypeKey::of::<T>(), erase_format(render));
        self
    }

    /// Registers a rendering for every sequence-valued member.
    pub fn format_sequences_with(mut self, formatter: ValueFormatter) -> Self {
        self.registry.set_type_fn(TypeKey::AnySequence, formatter);
        self
    }

    /// Registers a catch-all rendering; the least specific override.
    pub fn format_any_with(mut self, formatter: ValueFormatter) -> Self {
        self.registry.set_type_fn(TypeKey::AnyValue, formatter);
        self
    }

    /// Replaces the whole style at once.
    pub fn with_style(mut self, style: ObjectStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the separator between members.
    pub fn with_member_separator(mut self, separator: impl Into<String>) -> Self {
        self.style.member_separator = separator.into();
        self
    }

    /// Sets the separator between a member's name and its value.
    pub fn with_name_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.style.name_value_separator = separator.into();
        self
    }

    /// Sets the enclosure around member names.
    pub fn with_name_enclosure(mut self, enclosure: Enclosure) -> Self {
        self.style.name_enclosure = enclosure;
        self
    }

    /// Sets the enclosure around member values.
    pub fn with_value_enclosure(mut self, enclosure: Enclosure) -> Self {
        self.style.value_enclosure = enclosure;
        self
    }

    /// Sets the enclosure around the joined member body.
    pub fn with_body_enclosure(mut self, enclosure: Enclosure) -> Self {
        self.style.body_enclosure = enclosure;
        self
    }

    /// Inserts a line break before each member.
    pub fn with_member_per_line(mut self, enabled: bool) -> Self {
        self.style.member_per_line = enabled;
        self
    }

    /// Emits the member name before its value.
    pub fn with_member_names(mut self, enabled: bool) -> Self {
        self.style.include_member_name = enabled;
        self
    }

    /// Prefixes the output with the type name.
    pub fn with_class_name(mut self, enabled: bool) -> Self {
        self.style.include_class_name = enabled;
        self
    }

    /// Emits absent members as the literal `null` instead of dropping them.
    pub fn with_nulls(mut self, enabled: bool) -> Self {
        self.style.include_nulls = enabled;
        self
    }

    /// Snapshots the current configuration into an immutable formatter.
    pub fn build(&self) -> ObjectFormat<O> {
        tracing::debug!(
            target_type = O::type_name(),
            members = self.registry.len(),
            type_overrides = self.registry.type_override_count(),
            "built object format"
        );
        ObjectFormat::new(
            self.registry.resolve().collect(),
            self.style.clone(),
            O::type_name(),
        )
    }
}

impl<O: Members> Default for FormatBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}

fn erase_format<T, F>(render: F) -> ValueFormatter
where
    T: MemberValue,
    F: Fn(&T) -> String + Send + Sync + 'static,
{
    Formatter::map(move |value: &dyn MemberValue| {
        match value.as_any().downcast_ref::<T>() {
            Some(value) => render(value),
            None => value.render(),
        }
    })
}
