use graphassert_template::{and, iff, not, parens, quote, raw, reference, Expression};

use super::condition::normalize_condition;

pub const DEFAULT_MESSAGE: &str = "Input assertion error";
pub const DEFAULT_ERROR_TYPE: &str = "AssertionError";

/// Template path of a mutation input field.
#[inline]
pub fn input_reference(field_name: &str) -> String {
    format!("$ctx.args.input.{}", field_name)
}

/// Builds the guard raising an assertion error when `field_name` is present,
/// non-null and fails `condition`.
///
/// The null check comes first in a short-circuiting `&&`, so absent and null
/// values never reach the condition.
pub fn build_validation(
    field_name: &str,
    condition: &str,
    message: Option<&str>,
    error_type: Option<&str>,
) -> Expression {
    let value = input_reference(field_name);
    let normalized = normalize_condition(condition, &value);

    iff(
        and([
            not(raw(format!("$util.isNull({})", value))),
            not(parens(raw(normalized))),
        ]),
        reference(format!(
            "util.error({}, {}, null, {{\n  \"type\": \"assertion\",\n  \"condition\": {},\n  \"fieldName\": {},\n  \"fieldValue\": {value},\n  \"fieldClass\": {value}.getClass()\n}})",
            quote(message.unwrap_or(DEFAULT_MESSAGE)),
            quote(error_type.unwrap_or(DEFAULT_ERROR_TYPE)),
            quote(condition),
            quote(field_name),
            value = value,
        )),
    )
}

/// Label of the comment block wrapping one assertion.
pub fn block_name(field_name: &str, condition: &str) -> String {
    format!("Assert validation for \"{}\" ({})", field_name, condition)
}
