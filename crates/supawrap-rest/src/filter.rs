//! Formatters for PostgREST filter values.
//!
//! The generic `get`/`patch` methods pass filter maps through unmodified, so
//! callers supply operator-prefixed values. These helpers produce them:
//! `filter::eq("1")` renders `"eq.1"`, giving `column=eq.1` on the wire.

/// `column = value`
pub fn eq(value: impl AsRef<str>) -> String {
    format!("eq.{}", value.as_ref())
}

/// `column != value`
pub fn neq(value: impl AsRef<str>) -> String {
    format!("neq.{}", value.as_ref())
}

/// `column > value`
pub fn gt(value: impl AsRef<str>) -> String {
    format!("gt.{}", value.as_ref())
}

/// `column >= value`
pub fn gte(value: impl AsRef<str>) -> String {
    format!("gte.{}", value.as_ref())
}

/// `column < value`
pub fn lt(value: impl AsRef<str>) -> String {
    format!("lt.{}", value.as_ref())
}

/// `column <= value`
pub fn lte(value: impl AsRef<str>) -> String {
    format!("lte.{}", value.as_ref())
}

/// `column LIKE pattern` (use `*` as the wildcard)
pub fn like(pattern: impl AsRef<str>) -> String {
    format!("like.{}", pattern.as_ref())
}

/// `column ILIKE pattern` (case-insensitive)
pub fn ilike(pattern: impl AsRef<str>) -> String {
    format!("ilike.{}", pattern.as_ref())
}

/// `column IS value` (`null`, `true`, `false`)
pub fn is(value: impl AsRef<str>) -> String {
    format!("is.{}", value.as_ref())
}

/// `column IN (values...)`
pub fn in_list<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({})", joined)
}
