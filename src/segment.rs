//! Classification of single route-path segments.

/// A dynamic route parameter parsed out of one segment.
///
/// `deep` distinguishes the catch-all form `[...name]`, which consumes every
/// remaining segment at request time, from the single-segment form `[name]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DynamicSegment<'a> {
    /// Parameter name, without brackets and without the `...` marker.
    pub name: &'a str,
    /// Whether this is the catch-all form `[...name]`.
    pub deep: bool,
}

/// Extract the group name from a segment of the form `(name)`.
///
/// The segment must be wrapped in one pair of parentheses anchored to both
/// segment boundaries. Only the outermost pair is stripped: `((foobar))`
/// yields `(foobar)`, and inner parentheses, balanced or not, stay part of
/// the name (`(foo(,bar)` yields `foo(,bar`). Content starting with `[` is
/// reserved for shared dynamic segments and does not match.
pub fn group_name(segment: &str) -> Option<&str> {
    let content = segment.strip_prefix('(')?.strip_suffix(')')?;
    if content.is_empty() || content.starts_with('[') || content.contains('/') {
        return None;
    }
    Some(content)
}

/// Extract the group name from an array group segment of the form `(a,b)`.
///
/// Like [`group_name`], but the content must hold a comma at parenthesis
/// depth zero, i.e. the group names multiple aliases for one route slot.
/// A comma inside nested parentheses does not count: `((foo),(bar))`
/// matches with name `(foo),(bar)`, while `((foo,bar))` does not match.
pub fn array_group_name(segment: &str) -> Option<&str> {
    group_name(segment).filter(|content| has_top_level_comma(content))
}

/// Check for a comma outside all nested parentheses.
///
/// Depth saturates at zero, so a stray closing paren cannot hide a later
/// comma.
fn has_top_level_comma(content: &str) -> bool {
    let mut depth = 0usize;
    for ch in content.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return true,
            _ => (),
        }
    }
    false
}

/// Classify a segment as a dynamic route parameter.
///
/// `[name]` matches as a single-segment parameter, `[...name]` as a deep
/// (catch-all) parameter. The double-bracketed optional forms `[[name]]`
/// and `[[...name]]` are reserved syntax and match neither rule.
pub fn match_dynamic(segment: &str) -> Option<DynamicSegment<'_>> {
    if let Some(name) = segment
        .strip_prefix("[...")
        .and_then(|rest| rest.strip_suffix(']'))
    {
        if !name.is_empty() && !name.contains('/') {
            return Some(DynamicSegment { name, deep: true });
        }
    }

    let name = segment.strip_prefix('[')?.strip_suffix(']')?;
    if name.is_empty() || name.contains(['[', ']']) {
        return None;
    }
    Some(DynamicSegment { name, deep: false })
}

#[test]
fn group_segments() {
    assert_eq!(group_name("(foobar)"), Some("foobar"));
    assert_eq!(group_name("(foo,bar)"), Some("foo,bar"));
    assert_eq!(group_name("((foobar))"), Some("(foobar)"));
    assert_eq!(group_name("(...foobar)"), Some("...foobar"));
    assert_eq!(group_name("(foo bar)"), Some("foo bar"));
    assert_eq!(group_name("(foo(,bar)"), Some("foo(,bar"));

    assert_eq!(group_name("foobar"), None);
    assert_eq!(group_name(""), None);
    assert_eq!(group_name("()"), None);
    assert_eq!(group_name("(foobar"), None);
    assert_eq!(group_name("foobar)"), None);
    assert_eq!(group_name("pre(foobar)"), None);
    assert_eq!(group_name("(foobar)post"), None);
    assert_eq!(group_name("([foobar])"), None);
    assert_eq!(group_name("(foo/bar)"), None);
    assert_eq!(group_name("[foobar]"), None);
}

#[test]
fn array_group_segments() {
    assert_eq!(array_group_name("(foo,bar)"), Some("foo,bar"));
    assert_eq!(array_group_name("(foo,bar,baz)"), Some("foo,bar,baz"));
    assert_eq!(array_group_name("((foo),(bar))"), Some("(foo),(bar)"));
    assert_eq!(array_group_name("((foo),bar)"), Some("(foo),bar"));

    assert_eq!(array_group_name("(foobar)"), None);
    assert_eq!(array_group_name("((foobar))"), None);
    assert_eq!(array_group_name("(...foobar)"), None);
    // the only comma sits inside nested parens
    assert_eq!(array_group_name("((foo,bar))"), None);
    assert_eq!(array_group_name("(foo(,bar)"), None);
    assert_eq!(array_group_name("([foo,bar])"), None);
    assert_eq!(array_group_name("[foo,bar]"), None);
}

#[test]
fn dynamic_segments() {
    assert_eq!(
        match_dynamic("[foobar]"),
        Some(DynamicSegment {
            name: "foobar",
            deep: false
        })
    );
    assert_eq!(
        match_dynamic("[...foobar]"),
        Some(DynamicSegment {
            name: "foobar",
            deep: true
        })
    );

    assert_eq!(match_dynamic("[[foobar]]"), None);
    assert_eq!(match_dynamic("[[...foobar]]"), None);
    assert_eq!(match_dynamic("foobar"), None);
    assert_eq!(match_dynamic("(foobar)"), None);
    assert_eq!(match_dynamic("[]"), None);
    assert_eq!(match_dynamic("[foobar"), None);
    assert_eq!(match_dynamic("foobar]"), None);
}
