//! Config text helpers.

/// Expand `${VAR}` references with values from the process environment.
///
/// Unknown variables expand to an empty string. A reference must close on
/// the same line; an unterminated `${` is kept as written, so the rest of
/// the document is never swallowed.
pub fn expand_env_vars(input: &str) -> String {
    let mut expanded = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find(['}', '\n']) {
            Some(end) if after[end..].starts_with('}') => {
                if let Ok(value) = std::env::var(&after[..end]) {
                    expanded.push_str(&value);
                }
                rest = &after[end + 1..];
            }
            _ => {
                expanded.push_str("${");
                rest = after;
            }
        }
    }

    expanded.push_str(rest);
    expanded
}
