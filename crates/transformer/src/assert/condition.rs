//! Lexical rewriting of implicit-receiver conditions.
//!
//! A condition such as `.length() > 3` omits the value it tests. The receiver
//! is marked by a `.` with no identifier or closing bracket on its left. This
//! is a pattern match over the text, not a parser: anything outside the
//! pattern class is copied unchanged, malformed conditions included.

/// Substitutes every implicit receiver in `condition` with `variable`.
///
/// Two passes, in order:
///
/// 1. A lone `.` (no word character on either side) becomes `variable`,
///    e.g. `. % 2 == 0` becomes `self % 2 == 0`.
/// 2. A `.` at the start of the text, or preceded by a character that is
///    neither a word character nor one of `)`, `]`, `}`, becomes
///    `variable.`, e.g. `.length() > 3` becomes `self.length() > 3`.
///
/// Qualified accesses like `other.length()` and chained calls like
/// `a().b()` are left untouched, so an explicit condition is returned as is.
pub fn normalize_condition(condition: &str, variable: &str) -> String {
    let condition = replace_dots(condition, variable, is_lone_dot);
    replace_dots(&condition, &format!("{}.", variable), is_receiver_dot)
}

fn replace_dots(
    text: &str,
    replacement: &str,
    matches: impl Fn(Option<char>, Option<char>) -> bool,
) -> String {
    let chars = text.chars().collect::<Vec<_>>();
    let mut output = String::with_capacity(text.len());

    for (idx, &c) in chars.iter().enumerate() {
        let prev = idx.checked_sub(1).map(|idx| chars[idx]);
        let next = chars.get(idx + 1).copied();
        if c == '.' && matches(prev, next) {
            output.push_str(replacement);
        } else {
            output.push(c);
        }
    }

    output
}

#[inline]
fn is_word(c: Option<char>) -> bool {
    matches!(c, Some(c) if c.is_ascii_alphanumeric() || c == '_')
}

fn is_lone_dot(prev: Option<char>, next: Option<char>) -> bool {
    !is_word(prev) && !is_word(next)
}

fn is_receiver_dot(prev: Option<char>, _next: Option<char>) -> bool {
    match prev {
        None => true,
        Some(')' | ']' | '}') => false,
        prev => !is_word(prev),
    }
}
