//! Type-erased member values.
//!
//! Every value a builder can compare, hash, or format passes through the
//! [`MemberValue`] trait. The trait carries the native behaviors for the
//! value's own type (equality, deterministic hash, string rendering) so the
//! engine never needs to reimplement per-primitive algorithms, plus the
//! structural views the composers care about: whether the value is an
//! ordered multi-element container and whether it represents an absent
//! (`None`) value.

use std::any::{Any, TypeId};

#[cfg(test)]
mod tests;

/// Default accumulator seed for combined hash codes.
pub const DEFAULT_SEED: u64 = 0;
/// Default per-member multiplier for combined hash codes.
pub const DEFAULT_STEP: u64 = 397;

/// A type-erased member value with native per-type behaviors.
///
/// Implemented for the primitive leaves, `String`, `Vec<T>` (an ordered
/// container) and `Option<T>` (a nullable element). Custom value types
/// implement this directly to participate in the default behaviors.
pub trait MemberValue: Any + Send + Sync {
    /// Upcasts to `Any` for downcasting in typed overrides.
    fn as_any(&self) -> &dyn Any;

    /// Full type name of the value.
    fn type_name(&self) -> &'static str;

    /// Native equality against another erased value.
    ///
    /// Values of a different runtime type are never equal.
    fn native_eq(&self, other: &dyn MemberValue) -> bool;

    /// Native hash of the value, deterministic across processes.
    fn native_hash(&self) -> u64;

    /// Native string rendering of the value.
    fn render(&self) -> String;

    /// Element view when the value is an ordered multi-element container.
    fn as_sequence(&self) -> Option<Vec<&dyn MemberValue>> {
        None
    }

    /// Whether the value represents an absent (`None`) value.
    fn is_null(&self) -> bool {
        false
    }
}

/// FNV-1a over a byte slice; the deterministic string hash used by the
/// native hash implementations.
pub fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}

macro_rules! leaf_value {
    ($($ty:ty => |$v:ident| $hash:expr),* $(,)?) => {
        $(
            impl MemberValue for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn type_name(&self) -> &'static str {
                    std::any::type_name::<$ty>()
                }

                fn native_eq(&self, other: &dyn MemberValue) -> bool {
                    other
                        .as_any()
                        .downcast_ref::<$ty>()
                        .is_some_and(|other| other == self)
                }

                fn native_hash(&self) -> u64 {
                    let $v = self;
                    $hash
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

leaf_value! {
    bool => |v| u64::from(*v),
    char => |v| u64::from(*v as u32),
    i8 => |v| *v as i64 as u64,
    i16 => |v| *v as i64 as u64,
    i32 => |v| *v as i64 as u64,
    i64 => |v| *v as u64,
    isize => |v| *v as i64 as u64,
    u8 => |v| u64::from(*v),
    u16 => |v| u64::from(*v),
    u32 => |v| u64::from(*v),
    u64 => |v| *v,
    usize => |v| *v as u64,
    f32 => |v| u64::from(v.to_bits()),
    f64 => |v| v.to_bits(),
    String => |v| fnv1a(v.as_bytes()),
    &'static str => |v| fnv1a(v.as_bytes()),
}

impl<T: MemberValue> MemberValue for Option<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Option<T>>()
    }

    fn native_eq(&self, other: &dyn MemberValue) -> bool {
        match other.as_any().downcast_ref::<Option<T>>() {
            Some(other) => match (self, other) {
                (None, None) => true,
                (Some(a), Some(b)) => a.native_eq(b),
                _ => false,
            },
            None => false,
        }
    }

    fn native_hash(&self) -> u64 {
        match self {
            Some(value) => value.native_hash(),
            None => 0,
        }
    }

    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "null".to_string(),
        }
    }

    fn as_sequence(&self) -> Option<Vec<&dyn MemberValue>> {
        self.as_ref().and_then(|value| value.as_sequence())
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: MemberValue> MemberValue for Vec<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Vec<T>>()
    }

    fn native_eq(&self, other: &dyn MemberValue) -> bool {
        other.as_any().downcast_ref::<Vec<T>>().is_some_and(|other| {
            self.len() == other.len()
                && self.iter().zip(other.iter()).all(|(a, b)| a.native_eq(b))
        })
    }

    fn native_hash(&self) -> u64 {
        self.iter().fold(DEFAULT_SEED, |acc, element| {
            acc ^ element.native_hash().wrapping_mul(DEFAULT_STEP)
        })
    }

    fn render(&self) -> String {
        let parts: Vec<String> = self.iter().map(MemberValue::render).collect();
        parts.join(", ")
    }

    fn as_sequence(&self) -> Option<Vec<&dyn MemberValue>> {
        Some(self.iter().map(|element| element as &dyn MemberValue).collect())
    }
}

/// Key for an entry in a type-override table.
///
/// `Exact` matches one concrete value type; `AnySequence` matches every
/// member flagged as an ordered container; `AnyValue` matches everything.
/// Specificity orders the three kinds so that, when several registered keys
/// match one member, the most specific registration wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKey {
    /// A concrete value type.
    Exact(TypeId),
    /// Any ordered multi-element container.
    AnySequence,
    /// Any value whatsoever.
    AnyValue,
}

impl TypeKey {
    /// Key for the concrete type `T`.
    pub fn of<T: 'static>() -> Self {
        TypeKey::Exact(TypeId::of::<T>())
    }

    /// How specific this key is; higher wins at resolution time.
    pub fn specificity(self) -> usize {
        match self {
            TypeKey::Exact(_) => 2,
            TypeKey::AnySequence => 1,
            TypeKey::AnyValue => 0,
        }
    }
}
