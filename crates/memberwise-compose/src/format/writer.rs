//! Deferred, composable output chunks.

/// A deferred append-to-output operation.
///
/// The empty writer is the identity element of concatenation and is
/// recognized specially: joins skip empty parts so a separator never
/// appears next to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Writer(Option<String>);

impl Writer {
    /// The empty writer.
    pub fn empty() -> Self {
        Writer(None)
    }

    /// A writer emitting fixed text; empty text yields the empty writer.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Writer(None)
        } else {
            Writer(Some(text))
        }
    }

    /// Whether this writer emits nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Sequential concatenation.
    pub fn concat(self, other: Writer) -> Writer {
        match (self.0, other.0) {
            (a, None) => Writer(a),
            (None, b) => Writer(b),
            (Some(mut a), Some(b)) => {
                a.push_str(&b);
                Writer(Some(a))
            }
        }
    }

    /// Joins non-empty parts with `separator`.
    pub fn join(parts: impl IntoIterator<Item = Writer>, separator: &str) -> Writer {
        let mut joined = Writer::empty();
        for part in parts {
            if part.is_empty() {
                continue;
            }
            joined = if joined.is_empty() {
                part
            } else {
                joined.concat(Writer::text(separator)).concat(part)
            };
        }
        joined
    }

    /// Writes `prefix`, then this writer, then `suffix`. Empty affixes are
    /// no-ops; the body being empty does not suppress the affixes.
    pub fn enclose(self, prefix: &str, suffix: &str) -> Writer {
        Writer::text(prefix).concat(self).concat(Writer::text(suffix))
    }

    /// Appends the deferred output to `out`.
    pub fn write_to(&self, out: &mut String) {
        if let Some(text) = &self.0 {
            out.push_str(text);
        }
    }

    /// Materializes the output.
    pub fn finish(self) -> String {
        self.0.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_identity_for_concat() {
        let w = Writer::text("x").concat(Writer::empty());
        assert_eq!(w.finish(), "x");
        let w = Writer::empty().concat(Writer::text("x"));
        assert_eq!(w.finish(), "x");
    }

    #[test]
    fn test_empty_text_collapses_to_empty() {
        assert!(Writer::text("").is_empty());
        assert_eq!(Writer::text(""), Writer::empty());
    }

    #[test]
    fn test_join_skips_empty_parts() {
        let parts = vec![
            Writer::text("a"),
            Writer::empty(),
            Writer::text("b"),
            Writer::empty(),
        ];
        assert_eq!(Writer::join(parts, ",").finish(), "a,b");
    }

    #[test]
    fn test_join_of_all_empty_is_empty() {
        let parts = vec![Writer::empty(), Writer::empty()];
        assert!(Writer::join(parts, ",").is_empty());
    }

    #[test]
    fn test_enclose_keeps_affixes_around_empty_body() {
        assert_eq!(Writer::empty().enclose("'", "'").finish(), "''");
        assert_eq!(Writer::text("x").enclose("<", ">").finish(), "<x>");
        assert_eq!(Writer::text("x").enclose("", "").finish(), "x");
    }

    #[test]
    fn test_write_to_appends() {
        let mut out = String::from(">> ");
        Writer::text("done").write_to(&mut out);
        assert_eq!(out, ">> done");
    }
}
