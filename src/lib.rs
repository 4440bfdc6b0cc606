//! Route path segment classification.
//!
//! This implements the segment syntax used by file-system based routers, where
//! the path of a route file encodes how it is served. `(group)` segments
//! organize files without appearing in the final URL, and `(a,b)` array groups
//! serve one file under several such groups. `[name]` and `[...name]` segments
//! declare dynamic route parameters, with the double-bracketed optional forms
//! reserved. The operations here classify and rewrite such paths and never
//! fail; input that does not match simply yields `None`.
//!
//! Here's a rather long matching example:
//!
//! ```
//! # use routepatterns::*;
//! let files = [
//!     "./(app)/index.tsx",
//!     "./(app)/settings/profile.tsx",
//!     "./(marketing,shop)/pricing.tsx",
//!     "./blog/[slug].tsx",
//!     "./docs/[...path].tsx",
//!     "./legal/[[...rest]].tsx",
//! ];
//!
//! // route names drop the leading `./` and the extension, nothing else:
//! let names: Vec<&str> = files.iter().copied().map(name_from_file_path).collect();
//! assert_eq!(names, [
//!     "(app)/index",
//!     "(app)/settings/profile",
//!     "(marketing,shop)/pricing",
//!     "blog/[slug]",
//!     "docs/[...path]",
//!     "legal/[[...rest]]",
//! ]);
//!
//! // group segments organize files without showing up in the URL:
//! assert_eq!(match_group(names[0]), Some("app"));
//! assert_eq!(strip_group_segments(names[1]), "settings/profile");
//!
//! // array groups serve one file under several group names at once:
//! assert_eq!(match_array_group(names[2]), Some("marketing,shop"));
//! assert_eq!(match_array_group(names[0]), None);
//!
//! // dynamic segments declare route parameters:
//! assert_eq!(match_dynamic("[slug]"), Some(DynamicSegment { name: "slug", deep: false }));
//! assert_eq!(match_dynamic("[...path]"), Some(DynamicSegment { name: "path", deep: true }));
//! // the double-bracketed optional form is reserved and matches neither way:
//! assert_eq!(match_dynamic("[[...rest]]"), None);
//! ```

mod route_path;
mod segment;

#[doc(inline)]
pub use route_path::{
    match_array_group, match_group, match_last_group, name_from_file_path, strip_dot_prefixes,
    strip_extension, strip_group_segments,
};

#[doc(inline)]
pub use segment::{DynamicSegment, array_group_name, group_name, match_dynamic};
