//! Directive call scanner.
//!
//! Recognises `$name(arg, arg, ...)` inside otherwise opaque SQL. Arguments
//! cannot contain parentheses: the first `)` always closes the call.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

/// Pattern for directive calls (e.g., `$__timeGroup(ts, '5m')`)
static DIRECTIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([_a-zA-Z0-9]+)\(([^)]*)\)").unwrap());

/// Text substituted for a call that failed to evaluate.
///
/// Never reaches callers, the whole expansion fails instead.
pub const FAILURE_MARKER: &str = "macro_error()";

/// A directive call found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveCall<'a> {
    /// Directive name without the leading `$`.
    pub name: &'a str,
    /// Everything between the parentheses, untrimmed.
    pub raw_args: &'a str,
    /// Byte range of the whole call in the template.
    pub span: Range<usize>,
}

impl<'a> DirectiveCall<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        // Both groups are mandatory in the pattern.
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        Self {
            name: caps.get(1).map_or("", |m| m.as_str()),
            raw_args: caps.get(2).map_or("", |m| m.as_str()),
            span: whole,
        }
    }

    /// Arguments split on `,` with surrounding whitespace trimmed.
    ///
    /// An empty argument string yields a single empty argument.
    pub fn args(&self) -> Vec<&'a str> {
        self.raw_args.split(',').map(str::trim).collect()
    }
}

/// Find every directive call in `sql`, left to right.
pub fn find_directives(sql: &str) -> Vec<DirectiveCall<'_>> {
    DIRECTIVE_PATTERN
        .captures_iter(sql)
        .map(|caps| DirectiveCall::from_captures(&caps))
        .collect()
}

/// Replace every directive call in `sql` with the result of `eval`.
///
/// Calls are evaluated left to right, all of them, even after a failure.
/// The first error is returned; later errors are dropped and no partial
/// output escapes.
pub fn replace_directives<E, F>(sql: &str, mut eval: F) -> Result<String, E>
where
    F: FnMut(&DirectiveCall<'_>) -> Result<String, E>,
{
    let mut first_error: Option<E> = None;
    let mut result = String::with_capacity(sql.len());
    let mut last = 0;

    for caps in DIRECTIVE_PATTERN.captures_iter(sql) {
        let call = DirectiveCall::from_captures(&caps);
        result.push_str(&sql[last..call.span.start]);

        match eval(&call) {
            Ok(text) => result.push_str(&text),
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
                result.push_str(FAILURE_MARKER);
            }
        }

        last = call.span.end;
    }
    result.push_str(&sql[last..]);

    match first_error {
        Some(err) => Err(err),
        None => Ok(result),
    }
}
