//! The formatter combinator algebra.

use std::sync::Arc;

use memberwise_core::MemberValue;

use super::writer::Writer;

/// A pure function from a value to a [`Writer`].
pub struct Formatter<T: ?Sized>(Arc<dyn Fn(&T) -> Writer + Send + Sync>);

/// Formatter over an erased member value; the function type stored in a
/// format operation registry.
pub type ValueFormatter = Formatter<dyn MemberValue>;

impl<T: ?Sized> Clone for Formatter<T> {
    fn clone(&self) -> Self {
        Formatter(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + 'static> Formatter<T> {
    /// Wraps an arbitrary function as a formatter.
    pub fn of(f: impl Fn(&T) -> Writer + Send + Sync + 'static) -> Self {
        Formatter(Arc::new(f))
    }

    /// Ignores the input and writes nothing.
    pub fn empty() -> Self {
        Formatter::of(|_| Writer::empty())
    }

    /// Ignores the input and writes fixed text; empty text writes nothing.
    pub fn constant(text: impl Into<String>) -> Self {
        let writer = Writer::text(text);
        Formatter::of(move |_| writer.clone())
    }

    /// Applies `f` to the input and writes the result.
    pub fn map(f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Formatter::of(move |value| Writer::text(f(value)))
    }

    /// Applies the formatter to a value.
    pub fn apply(&self, value: &T) -> Writer {
        (self.0)(value)
    }

    /// Adapts this formatter to another input type by projecting first.
    pub fn wrap<A: ?Sized + 'static>(
        self,
        project: impl for<'a> Fn(&'a A) -> &'a T + Send + Sync + 'static,
    ) -> Formatter<A> {
        Formatter::of(move |outer| self.apply(project(outer)))
    }

    /// Like [`Formatter::wrap`] through a nullable projection; `absent`
    /// handles the inputs the projection rejects.
    pub fn wrap_opt<A: ?Sized + 'static>(
        self,
        project: impl for<'a> Fn(&'a A) -> Option<&'a T> + Send + Sync + 'static,
        absent: Formatter<A>,
    ) -> Formatter<A> {
        Formatter::of(move |outer| match project(outer) {
            Some(inner) => self.apply(inner),
            None => absent.apply(outer),
        })
    }

    /// Writes `prefix`, then this formatter's output, then `suffix`.
    pub fn enclose(self, prefix: impl Into<String>, suffix: impl Into<String>) -> Formatter<T> {
        let prefix = prefix.into();
        let suffix = suffix.into();
        Formatter::of(move |value| self.apply(value).enclose(&prefix, &suffix))
    }

    /// Concatenates this formatter's output with `other`'s on the same input.
    pub fn add(self, other: Formatter<T>) -> Formatter<T> {
        Formatter::of(move |value| self.apply(value).concat(other.apply(value)))
    }

    /// Concatenates the outputs of every formatter on the same input.
    pub fn sum(parts: Vec<Formatter<T>>) -> Formatter<T> {
        Formatter::of(move |value| {
            parts
                .iter()
                .fold(Writer::empty(), |writer, part| writer.concat(part.apply(value)))
        })
    }

    /// Chooses a branch per input value.
    pub fn when(
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        positive: Formatter<T>,
        negative: Formatter<T>,
    ) -> Formatter<T> {
        Formatter::of(move |value| {
            if predicate(value) {
                positive.apply(value)
            } else {
                negative.apply(value)
            }
        })
    }

    /// Function identity; used for structural comparison of composed
    /// formats.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Maps `item` over every element and joins non-empty outputs with
/// `separator`. An element whose formatter yields empty output contributes
/// no separator.
pub fn collect<T: 'static>(item: Formatter<T>, separator: impl Into<String>) -> Formatter<Vec<T>> {
    let separator = separator.into();
    Formatter::of(move |elements: &Vec<T>| {
        Writer::join(elements.iter().map(|element| item.apply(element)), &separator)
    })
}

/// Null-input branch defaulting to the literal text `null`.
pub fn unless_null<T: 'static>(positive: Formatter<T>) -> Formatter<Option<T>> {
    unless_null_or(positive, Formatter::constant("null"))
}

/// Null-input branch with an explicit negative formatter.
pub fn unless_null_or<T: 'static>(
    positive: Formatter<T>,
    negative: Formatter<Option<T>>,
) -> Formatter<Option<T>> {
    Formatter::of(move |value: &Option<T>| match value {
        Some(inner) => positive.apply(inner),
        None => negative.apply(value),
    })
}

/// The implicit per-member formatter: the value's native rendering.
pub fn default_format() -> ValueFormatter {
    Formatter::of(|value: &dyn MemberValue| Writer::text(value.render()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_ignores_input() {
        let f: Formatter<i32> = Formatter::constant("x");
        assert_eq!(f.apply(&1).finish(), "x");
        assert_eq!(f.apply(&2).finish(), "x");
    }

    #[test]
    fn test_empty_constant_writes_nothing() {
        let f: Formatter<i32> = Formatter::constant("");
        assert!(f.apply(&1).is_empty());
    }

    #[test]
    fn test_map_and_enclose() {
        let f: Formatter<i32> = Formatter::map(|v: &i32| v.to_string()).enclose("[", "]");
        assert_eq!(f.apply(&7).finish(), "[7]");
    }

    #[test]
    fn test_wrap_projects_input() {
        struct Holder {
            label: String,
        }
        let inner: Formatter<String> = Formatter::map(|s: &String| s.clone());
        let f: Formatter<Holder> = inner.wrap(|holder: &Holder| &holder.label);
        let holder = Holder {
            label: "hi".to_string(),
        };
        assert_eq!(f.apply(&holder).finish(), "hi");
    }

    #[test]
    fn test_add_concatenates_on_same_input() {
        let f = Formatter::<i32>::constant("a").add(Formatter::constant("b"));
        assert_eq!(f.apply(&0).finish(), "ab");
    }

    #[test]
    fn test_sum_concatenates_all() {
        let f = Formatter::<i32>::sum(vec![
            Formatter::constant("a"),
            Formatter::empty(),
            Formatter::constant("c"),
        ]);
        assert_eq!(f.apply(&0).finish(), "ac");
    }

    #[test]
    fn test_when_branches_per_value() {
        let f = Formatter::when(
            |v: &i32| *v >= 0,
            Formatter::constant("+"),
            Formatter::constant("-"),
        );
        assert_eq!(f.apply(&1).finish(), "+");
        assert_eq!(f.apply(&-1).finish(), "-");
    }

    #[test]
    fn test_unless_null_defaults_to_literal_null() {
        let f = unless_null(Formatter::map(|s: &String| s.clone()));
        assert_eq!(f.apply(&Some("x".to_string())).finish(), "x");
        assert_eq!(f.apply(&None).finish(), "null");
    }

    #[test]
    fn test_unless_null_or_custom_negative() {
        let f = unless_null_or(
            Formatter::map(|s: &String| s.clone()),
            Formatter::empty(),
        );
        assert!(f.apply(&None).is_empty());
    }

    #[test]
    fn test_collect_drops_empty_items_without_separator() {
        let item = unless_null_or(
            Formatter::map(|s: &String| s.clone()).enclose("'", "'"),
            Formatter::empty(),
        );
        let f = collect(item, ",");
        let values = vec![Some("a".to_string()), None, Some("b".to_string())];
        assert_eq!(f.apply(&values).finish(), "'a','b'");
    }
}
