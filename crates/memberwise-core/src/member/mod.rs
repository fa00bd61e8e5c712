//! Member descriptors and the member collection seam.
//!
//! A [`MemberDescriptor`] is the runtime identity of one inspectable member:
//! owner, name, value type, and a type-erased accessor that pulls the current
//! value out of an instance. Descriptors are created once at collection time
//! and shared read-only with every function composed over them.
//!
//! The [`Members`] trait is the collection entry point. It is normally
//! implemented by the `#[derive(Members)]` macro, which plays the role a
//! reflection API plays in languages that have one; hand-written
//! implementations are equally valid and are what the fixture crates use.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::value::{MemberValue, TypeKey};


/// Erased member accessor: given an instance, yields the member's current
/// value, or `None` when the value is absent.
pub type Accessor =
    Arc<dyn for<'a> Fn(&'a dyn Any) -> Option<&'a dyn MemberValue> + Send + Sync>;

/// Describes one inspectable member of a type at runtime.
///
/// Identity is the `(value type, member name)` pair; the owner type is
/// deliberately excluded so that an override registered through a typed
/// lookup matches the same member discovered through enumeration.
#[derive(Clone)]
pub struct MemberDescriptor {
    owner: &'static str,
    name: &'static str,
    value_type: TypeId,
    value_type_name: &'static str,
    is_sequence: bool,
    tags: &'static [&'static str],
    accessor: Accessor,
    default_value: Option<Arc<dyn MemberValue>>,
}

impl MemberDescriptor {
    /// Creates a descriptor for a member whose value is always present.
    pub fn required<O, T, F>(name: &'static str, get: F) -> Self
    where
        O: 'static,
        T: MemberValue,
        F: for<'a> Fn(&'a O) -> &'a T + Send + Sync + 'static,
    {
        let accessor: Accessor = Arc::new(move |target: &dyn Any| {
            target
                .downcast_ref::<O>()
                .map(|owner| get(owner) as &dyn MemberValue)
        });
        Self::new::<O, T>(name, accessor)
    }

    /// Creates a descriptor for a member whose value may be absent.
    pub fn optional<O, T, F>(name: &'static str, get: F) -> Self
    where
        O: 'static,
        T: MemberValue,
        F: for<'a> Fn(&'a O) -> Option<&'a T> + Send + Sync + 'static,
    {
        let accessor: Accessor = Arc::new(move |target: &dyn Any| {
            target
                .downcast_ref::<O>()
                .and_then(|owner| get(owner).map(|value| value as &dyn MemberValue))
        });
        Self::new::<O, T>(name, accessor)
    }

    fn new<O: 'static, T: MemberValue>(name: &'static str, accessor: Accessor) -> Self {
        MemberDescriptor {
            owner: short_type_name(std::any::type_name::<O>()),
            name,
            value_type: TypeId::of::<T>(),
            value_type_name: std::any::type_name::<T>(),
            is_sequence: false,
            tags: &[],
            accessor,
            default_value: None,
        }
    }

    /// Flags the member value as an ordered multi-element container.
    pub fn sequence(mut self) -> Self {
        self.is_sequence = true;
        self
    }

    /// Sets the marker tags carried by the member.
    pub fn with_tags(mut self, tags: &'static [&'static str]) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the value assumed when the accessor yields absent.
    ///
    /// # Panics
    ///
    /// Panics when the default's type is not the member's value type; a
    /// mismatched default would otherwise dodge every typed override at
    /// invocation time.
    pub fn with_default(mut self, value: impl MemberValue) -> Self {
        assert_eq!(
            value.as_any().type_id(),
            self.value_type,
            "default for `{}` must be `{}`, got `{}`",
            self.name,
            self.value_type_name,
            value.type_name(),
        );
        self.default_value = Some(Arc::new(value));
        self
    }

    /// Owner type name (short form).
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Member name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `TypeId` of the member's value type.
    pub fn value_type(&self) -> TypeId {
        self.value_type
    }

    /// Full name of the member's value type.
    pub fn value_type_name(&self) -> &'static str {
        self.value_type_name
    }

    /// Whether the member value is an ordered container.
    pub fn is_sequence(&self) -> bool {
        self.is_sequence
    }

    /// Marker tags carried by the member.
    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }

    /// Whether the member carries the given marker tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| *candidate == tag)
    }

    /// Whether a type-override key applies to this member.
    pub fn accepts(&self, key: TypeKey) -> bool {
        match key {
            TypeKey::Exact(id) => id == self.value_type,
            TypeKey::AnySequence => self.is_sequence,
            TypeKey::AnyValue => true,
        }
    }

    /// Reads the member's current value from `target`, falling back to the
    /// configured default when the accessor yields absent.
    ///
    /// A `target` of the wrong runtime type reads as absent; the composed
    /// functions are generic over the owner type, so that cannot happen
    /// through the public surface.
    pub fn value<'a>(&'a self, target: &'a dyn Any) -> Option<&'a dyn MemberValue> {
        (self.accessor)(target)
            .or_else(|| self.default_value.as_deref())
    }
}

impl PartialEq for MemberDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.value_type == other.value_type && self.name == other.name
    }
}

impl Eq for MemberDescriptor {}

impl std::hash::Hash for MemberDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value_type.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Debug for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("owner", &self.owner)
            .field("name", &self.name)
            .field("value_type", &self.value_type_name)
            .field("is_sequence", &self.is_sequence)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Enumerates a type's inspectable members.
pub trait Members: Sized + 'static {
    /// Short name of the type, as shown by the class-name formatter flag.
    fn type_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// All inspectable members, in declaration order.
    fn members() -> Vec<MemberDescriptor>;

    /// Members carrying the given marker tag, in declaration order.
    fn members_tagged(tag: &str) -> Vec<MemberDescriptor> {
        Self::members()
            .into_iter()
            .filter(|member| member.has_tag(tag))
            .collect()
    }

    /// Looks up one member by name.
    fn member(name: &str) -> Option<MemberDescriptor> {
        Self::members().into_iter().find(|member| member.name() == name)
    }
}

/// Strips the module path from a full type name.
pub fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}
