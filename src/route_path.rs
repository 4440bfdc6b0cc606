//! Operations over whole route paths.

use crate::segment::{array_group_name, group_name};

/// Find the first group segment in `path` and return its name.
///
/// Segments are scanned left to right. Parentheses that are not anchored to
/// both boundaries of a segment never match, so `pre(foo)/bar` has no group
/// while `(foo)/bar` does.
pub fn match_group(path: &str) -> Option<&str> {
    path.split('/').find_map(group_name)
}

/// Find the last group segment in `path` and return its name.
///
/// Segments are scanned right to left, so consecutive group segments
/// resolve to the one closest to the end of the path.
pub fn match_last_group(path: &str) -> Option<&str> {
    path.split('/').rev().find_map(group_name)
}

/// Find the first array group segment in `path` and return its name.
///
/// Group segments without a top-level comma are skipped rather than ending
/// the scan, and once an array group is found, later candidates are never
/// consulted. Unlike [`match_last_group`] this always scans left to right.
pub fn match_array_group(path: &str) -> Option<&str> {
    path.split('/').find_map(array_group_name)
}

/// Remove every group segment from `path`.
///
/// Group segments organize route files without appearing in the final route
/// URL. The relative order of the remaining segments is preserved, as is a
/// leading `/` while any non-group segment remains. A path consisting only
/// of group segments collapses to the empty string.
pub fn strip_group_segments(path: &str) -> String {
    path.split('/')
        .filter(|segment| group_name(segment).is_none())
        .collect::<Vec<_>>()
        .join("/")
}

/// Strip every repeated leading `./` and `../` from `path`.
pub fn strip_dot_prefixes(mut path: &str) -> &str {
    loop {
        match path.strip_prefix("./").or_else(|| path.strip_prefix("../")) {
            Some(rest) => path = rest,
            None => return path,
        }
    }
}

/// Strip the file extension from the final segment of `path`.
///
/// Only the last dot-suffix is removed, so `a.test.tsx` becomes `a.test`.
/// A dot at the very start of the final segment is part of the name, not an
/// extension separator, so hidden files keep theirs.
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |slash| slash + 1);
    match path[name_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..name_start + dot],
        _ => path,
    }
}

/// Normalize a relative file path into its route name.
///
/// This is [`strip_extension`] composed over [`strip_dot_prefixes`]: the
/// repeated `./` / `../` prefixes and the trailing extension go away, while
/// group and dynamic syntax passes through untouched. Every input produces
/// a name; there is no failure case.
pub fn name_from_file_path(path: &str) -> &str {
    strip_extension(strip_dot_prefixes(path))
}

#[test]
fn matches_first_group() {
    assert_eq!(match_group("[[...foobar]]"), None);
    assert_eq!(match_group("[[foobar]]"), None);
    assert_eq!(match_group("[...foobar]"), None);
    assert_eq!(match_group("[foobar]"), None);
    assert_eq!(match_group("(foobar)"), Some("foobar"));
    assert_eq!(match_group("(foo,bar)"), Some("foo,bar"));
    assert_eq!(match_group("((foobar))"), Some("(foobar)"));
    assert_eq!(match_group("(...foobar)"), Some("...foobar"));
    assert_eq!(match_group("foobar"), None);
    assert_eq!(match_group("leading/foobar"), None);
    assert_eq!(match_group("leading/(foobar)"), Some("foobar"));
    assert_eq!(match_group("leading/((foobar))"), Some("(foobar)"));
    assert_eq!(match_group("leading/(...foobar)"), Some("...foobar"));
    assert_eq!(match_group("leading/(foo,bar)"), Some("foo,bar"));
    assert_eq!(match_group("leading/foobar/trailing"), None);
    assert_eq!(match_group("leading/(foobar)/trailing"), Some("foobar"));
    assert_eq!(match_group("leading/((foobar))/trailing"), Some("(foobar)"));
    assert_eq!(
        match_group("leading/(...foobar)/trailing"),
        Some("...foobar")
    );
    assert_eq!(match_group("leading/(foo,bar)/trailing)"), Some("foo,bar"));
    assert_eq!(
        match_group("leading/(foo,bar)/(fruit,apple)"),
        Some("foo,bar")
    );
    assert_eq!(match_group("leading/(foo bar)/trailing"), Some("foo bar"));
}

#[test]
fn matches_last_group() {
    assert_eq!(match_last_group("[[...foobar]]"), None);
    assert_eq!(match_last_group("[[foobar]]"), None);
    assert_eq!(match_last_group("[...foobar]"), None);
    assert_eq!(match_last_group("[foobar]"), None);
    assert_eq!(match_last_group("(foobar)"), Some("foobar"));
    assert_eq!(match_last_group("(foo,bar)"), Some("foo,bar"));
    assert_eq!(match_last_group("((foobar))"), Some("(foobar)"));
    assert_eq!(match_last_group("(...foobar)"), Some("...foobar"));
    assert_eq!(match_last_group("foobar"), None);
    assert_eq!(match_last_group("leading/foobar"), None);
    assert_eq!(match_last_group("(leading)/(foobar)"), Some("foobar"));
    assert_eq!(match_last_group("(leading)/((foobar))"), Some("(foobar)"));
    assert_eq!(match_last_group("(leading)/(...foobar)"), Some("...foobar"));
    assert_eq!(match_last_group("(leading)/(foo,bar)"), Some("foo,bar"));
    assert_eq!(
        match_last_group("(leading)/foobar/trailing"),
        Some("leading")
    );
    assert_eq!(
        match_last_group("(leading)/(foobar)/trailing"),
        Some("foobar")
    );
    assert_eq!(
        match_last_group("(leading)/((foobar))/trailing"),
        Some("(foobar)")
    );
    assert_eq!(
        match_last_group("(leading)/(...foobar)/trailing"),
        Some("...foobar")
    );
    assert_eq!(
        match_last_group("(leading)/(foo,bar)/trailing)"),
        Some("foo,bar")
    );
    assert_eq!(
        match_last_group("(leading)/(foo,bar)/(fruit,apple)"),
        Some("fruit,apple")
    );
    // parens not anchored to the segment boundary never match
    assert_eq!(
        match_last_group("(leading)/(foo,bar)/preceding(fruit,apple)"),
        Some("foo,bar")
    );
    assert_eq!(
        match_last_group("(leading)/(foo,bar)/preceding(fruit,apple)trailing"),
        Some("foo,bar")
    );
    // a slash splits would-be group content into two non-group segments
    assert_eq!(match_last_group("leading/(app)/(foo/,bar)"), Some("app"));
    // an unbalanced inner paren is a literal character of the name
    assert_eq!(
        match_last_group("leading/(app)/(foo(,bar)"),
        Some("foo(,bar")
    );
    assert_eq!(
        match_last_group("leading/(app)/(foo(,bar)/trailing"),
        Some("foo(,bar")
    );
    assert_eq!(
        match_last_group("leading/(foo bar)/trailing"),
        Some("foo bar")
    );
}

#[test]
fn matches_array_group() {
    assert_eq!(match_array_group("[[...foobar]]"), None);
    assert_eq!(match_array_group("[[foobar]]"), None);
    assert_eq!(match_array_group("[...foobar]"), None);
    assert_eq!(match_array_group("[foobar]"), None);
    assert_eq!(match_array_group("foobar"), None);
    assert_eq!(match_array_group("leading/foobar"), None);
    assert_eq!(match_array_group("leading/foobar/trailing"), None);

    // single-name groups do not qualify
    assert_eq!(match_array_group("(foobar)"), None);
    assert_eq!(match_array_group("((foobar))"), None);
    assert_eq!(match_array_group("(...foobar)"), None);
    assert_eq!(match_array_group("leading/(foobar)"), None);
    assert_eq!(match_array_group("leading/((foobar))"), None);
    assert_eq!(match_array_group("leading/(...foobar)"), None);
    assert_eq!(match_array_group("leading/(foobar)/trailing"), None);
    assert_eq!(match_array_group("leading/((foobar))/trailing"), None);
    assert_eq!(match_array_group("leading/(...foobar)/trailing"), None);
    assert_eq!(match_array_group("(leading)/foobar"), None);
    assert_eq!(match_array_group("(leading)/(foobar)"), None);
    assert_eq!(match_array_group("(leading)/((foobar))"), None);
    assert_eq!(match_array_group("(leading)/(...foobar)"), None);
    assert_eq!(match_array_group("(leading)/foobar/trailing"), None);
    assert_eq!(match_array_group("(leading)/(foobar)/trailing"), None);
    assert_eq!(match_array_group("(leading)/((foobar))/trailing"), None);
    assert_eq!(match_array_group("(leading)/(...foobar)/trailing"), None);

    assert_eq!(match_array_group("(foo,bar)"), Some("foo,bar"));
    assert_eq!(match_array_group("leading/(foo,bar)"), Some("foo,bar"));
    assert_eq!(
        match_array_group("leading/(foo,bar)/trailing)"),
        Some("foo,bar")
    );
    assert_eq!(
        match_array_group("leading/((foo),(bar))/trailing)"),
        Some("(foo),(bar)")
    );
    assert_eq!(
        match_array_group("leading/(foo,bar)/(fruit,apple)"),
        Some("foo,bar")
    );
    // comma-less groups are skipped, not blocking
    assert_eq!(match_array_group("(leading)/(foo,bar)"), Some("foo,bar"));
    assert_eq!(
        match_array_group("(leading)/(foo,bar)/trailing)"),
        Some("foo,bar")
    );
    assert_eq!(
        match_array_group("(leading)/((foo),(bar))/trailing)"),
        Some("(foo),(bar)")
    );
}

#[test]
fn array_group_takes_the_first_comma_group() {
    assert_eq!(
        match_array_group("(leading)/(foo,bar)/(fruit,apple)"),
        Some("foo,bar")
    );
    assert_eq!(
        match_array_group("(leading)/((foo),bar)/(fruit,apple)"),
        Some("(foo),bar")
    );
    assert_eq!(
        match_array_group("(leading)/(foo,bar)/((fruit),apple)"),
        Some("foo,bar")
    );
    // while the right-to-left scan picks the other end
    assert_eq!(
        match_last_group("(leading)/(foo,bar)/(fruit,apple)"),
        Some("fruit,apple")
    );
}

#[test]
fn first_and_last_group_agree_on_group_free_paths() {
    for path in [
        "",
        "foobar",
        "leading/foobar",
        "leading/foobar/trailing",
        "[dyn]/[...rest]",
        "([foobar])/trailing",
    ] {
        assert_eq!(match_group(path), None, "path: {path:?}");
        assert_eq!(match_last_group(path), None, "path: {path:?}");
    }
}

#[test]
fn strips_group_segments() {
    assert_eq!(
        strip_group_segments("/[[...foobar]]/(foo)/bar/[bax]/(other)"),
        "/[[...foobar]]/bar/[bax]"
    );
    assert_eq!(strip_group_segments("(foo)/(bar)"), "");
    assert_eq!(strip_group_segments("/(foo)/bar"), "/bar");
    assert_eq!(
        strip_group_segments("(app)/settings/(sub)/profile"),
        "settings/profile"
    );
    // reserved shared-dynamic groups are not group segments
    assert_eq!(strip_group_segments("a/([b])/c"), "a/([b])/c");
    assert_eq!(strip_group_segments("plain/path"), "plain/path");
    assert_eq!(strip_group_segments(""), "");
}

#[test]
fn strip_group_segments_is_idempotent() {
    for path in [
        "/[[...foobar]]/(foo)/bar/[bax]/(other)",
        "(foo)/(bar)",
        "leading/(app)/(foo(,bar)",
        "(a)/((b))/(c,d)",
        "plain/path/with.ext",
        "",
    ] {
        let once = strip_group_segments(path);
        assert_eq!(strip_group_segments(&once), once, "path: {path:?}");
    }
}

#[test]
fn route_names_from_file_paths() {
    assert_eq!(name_from_file_path("./pages/home.tsx"), "pages/home");
    assert_eq!(name_from_file_path("../pages/home.js"), "pages/home");
    assert_eq!(name_from_file_path("./(home).jsx"), "(home)");
    assert_eq!(
        name_from_file_path("../../../(pages)/[any]/[...home].ts"),
        "(pages)/[any]/[...home]"
    );
    // only the last dot-suffix goes away
    assert_eq!(
        name_from_file_path("pages/home.test.tsx"),
        "pages/home.test"
    );
    assert_eq!(name_from_file_path("pages/home"), "pages/home");
    assert_eq!(name_from_file_path(""), "");
}

#[test]
fn dot_prefix_stripping() {
    assert_eq!(strip_dot_prefixes("./foo"), "foo");
    assert_eq!(strip_dot_prefixes("../foo"), "foo");
    assert_eq!(strip_dot_prefixes(".././../foo"), "foo");
    assert_eq!(strip_dot_prefixes("foo/./bar"), "foo/./bar");
    assert_eq!(strip_dot_prefixes(".hidden/foo"), ".hidden/foo");
    assert_eq!(strip_dot_prefixes(".../foo"), ".../foo");
    assert_eq!(strip_dot_prefixes("./"), "");
}

#[test]
fn extension_stripping() {
    assert_eq!(strip_extension("pages/home.tsx"), "pages/home");
    assert_eq!(strip_extension("home.test.tsx"), "home.test");
    assert_eq!(strip_extension("pages/home"), "pages/home");
    assert_eq!(strip_extension("pages.d/home"), "pages.d/home");
    assert_eq!(strip_extension("[...home].ts"), "[...home]");
    // a leading dot is part of the name, not an extension separator
    assert_eq!(strip_extension(".gitignore"), ".gitignore");
    assert_eq!(strip_extension("conf/.env"), "conf/.env");
    assert_eq!(strip_extension(""), "");
}
