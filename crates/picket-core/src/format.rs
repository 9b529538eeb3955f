//! Picker-notation format translation.
//!
//! Picker formats are the compact token strings understood by the client
//! widget (`yyyy-mm-dd`, `hh:ii P`, ...). Parsing and formatting on the Rust
//! side go through [`jiff::fmt::strtime`], so the translator rewrites picker
//! tokens into strftime-style specifiers.

/// Picker token to strftime specifier table, ordered longest token first.
///
/// Ordering matters: matching scans this table top to bottom at every input
/// position, so `yyyy` must be tried before `yy` and `mm` before `m`.
const TOKEN_TABLE: &[(&str, &str)] = &[
    ("yyyy", "%Y"),
    ("yyy", "%y"),
    ("MM", "%B"),
    ("mm", "%m"),
    ("dd", "%d"),
    ("hh", "%H"),
    ("ii", "%M"),
    ("ss", "%S"),
    ("yy", "%y"),
    ("M", "%b"),
    ("m", "%-m"),
    ("d", "%-d"),
    ("P", "%p"),
    ("p", "%P"),
];

/// Translates a picker-notation format string into jiff's strftime syntax.
///
/// The substitution is a single simultaneous pass: each position of the input
/// is consumed exactly once, either as the longest matching picker token or
/// as a literal character. Output of a substitution is never re-matched, so
/// `"mm"` becomes `"%m"` and not two unpadded months.
///
/// Characters outside the token alphabet pass through unchanged. A literal
/// `%` is emitted as `%%` so it stays a literal under the native syntax.
///
/// # Examples
///
/// ```rust
/// use picket_core::format::to_native_format;
///
/// assert_eq!(to_native_format("yyyy-mm-dd"), "%Y-%m-%d");
/// assert_eq!(to_native_format("hh:ii"), "%H:%M");
/// ```
pub fn to_native_format(picker: &str) -> String {
    let mut native = String::with_capacity(picker.len() * 2);
    let mut rest = picker;

    'scan: while !rest.is_empty() {
        for (token, specifier) in TOKEN_TABLE {
            if let Some(tail) = rest.strip_prefix(token) {
                native.push_str(specifier);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        match chars.next() {
            Some('%') => native.push_str("%%"),
            Some(c) => native.push(c),
            None => break,
        }
        rest = chars.as_str();
    }

    native
}
