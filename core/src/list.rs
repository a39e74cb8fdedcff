//! Attribute-value list tokenizer.
//!
//! Conditional-processing attribute values are flat lists whose items are
//! separated by ASCII whitespace and/or commas. Blank or separator-only
//! input yields an empty sequence, never an error; the caller decides what
//! an empty list means.

/// Split an attribute value into its list tokens.
///
/// Separators are commas and ASCII whitespace. Runs of separators collapse,
/// so the iterator never yields an empty token. Tokens borrow from `value`;
/// nothing is allocated.
///
/// # Example
///
/// ```
/// use svitch::split_list;
///
/// let tokens: Vec<&str> = split_list("en,  fr\tde").collect();
/// assert_eq!(tokens, ["en", "fr", "de"]);
/// assert_eq!(split_list(" ,, ").count(), 0);
/// ```
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
}
