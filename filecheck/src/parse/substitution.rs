use std::sync::OnceLock;

use crate::common::*;

fn line_substitution_regex() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| {
        Regex::new(r"\$\{LINE(?::(?<op>[+-])(?<offset>[0-9]+))?\}")
            .unwrap_or_else(|err| panic!("invalid line substitution pattern: {err}"))
    })
}

/// Expand line substitutions in the text of a pattern written at `location`.
///
/// * `${LINE}` becomes the line number of the directive
/// * `${LINE:+N}` becomes the line number of the directive plus `N`
/// * `${LINE:-N}` becomes the line number of the directive minus `N`
///
/// `span` is the span of `pattern` in the check file, and is used to point
/// at the offending substitution if it cannot be expanded.
pub fn expand_line_substitutions<'a>(
    pattern: &'a str,
    location: &SourceLocation,
    span: SourceSpan,
) -> ParseResult<Cow<'a, str>> {
    let regex = line_substitution_regex();
    if !regex.is_match(pattern) {
        return Ok(Cow::Borrowed(pattern));
    }

    let mut expanded = String::with_capacity(pattern.len());
    let mut last = 0;
    for captures in regex.captures_iter(pattern) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let invalid = |reason: String| ParserError::InvalidSubstitution {
            location: location.clone(),
            span: SourceSpan::from(span.offset() + whole.start()..span.offset() + whole.end()),
            reason,
        };

        let line = match (captures.name("op"), captures.name("offset")) {
            (Some(op), Some(offset)) => {
                let offset = offset.as_str().parse::<usize>().map_err(|err| {
                    invalid(format!("'{}' is not a valid line offset: {err}", offset.as_str()))
                })?;
                if op.as_str() == "+" {
                    location.line.checked_add(offset).ok_or_else(|| {
                        invalid(format!("line offset {offset} is too large"))
                    })?
                } else {
                    match location.line.checked_sub(offset) {
                        Some(line) if line > 0 => line,
                        _ => {
                            return Err(invalid(format!(
                                "line {} minus {offset} would precede the first line of the file",
                                location.line
                            )))
                        }
                    }
                }
            }
            _ => location.line,
        };

        expanded.push_str(&pattern[last..whole.start()]);
        expanded.push_str(&line.to_string());
        last = whole.end();
    }
    expanded.push_str(&pattern[last..]);

    log::debug!("{location}: expanded pattern '{pattern}' to '{expanded}'");
    Ok(Cow::Owned(expanded))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn expand(pattern: &str, line: usize) -> ParseResult<String> {
        let location = SourceLocation::new(FileName::from("test.c"), line);
        expand_line_substitutions(pattern, &location, SourceSpan::from(100..100 + pattern.len()))
            .map(Cow::into_owned)
    }

    #[test]
    fn line_substitution_test() {
        assert_eq!(expand("line ${LINE}$", 12).unwrap(), "line 12$");
        assert_eq!(expand("${LINE:+2} and ${LINE:-2}", 10).unwrap(), "12 and 8");
        assert_eq!(expand("no substitutions", 10).unwrap(), "no substitutions");
        assert_eq!(expand("${LINES}", 10).unwrap(), "${LINES}");
    }

    #[test]
    fn line_substitution_before_start_of_file_test() {
        let err = expand("foo ${LINE:-3}", 3).unwrap_err();
        match err {
            ParserError::InvalidSubstitution { span, location, .. } => {
                assert_eq!(span, SourceSpan::from(104..114));
                assert_eq!(location.line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(expand("foo ${LINE:-2}", 3).unwrap(), "foo 1");
    }
}
