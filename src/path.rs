//! Safe lookup of dotted property paths such as `"user.address.city"`.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::value::{is_object_like, member};

lazy_static! {
    static ref EMPTY_OBJECT: Value = Value::Object(Map::new());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyPath {
    #[default]
    EmptyObject,
    Root,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PathOptions {
    pub empty_path: EmptyPath,
}

pub fn lookup_path<'a>(path: &str, root: &'a Value) -> Option<Cow<'a, Value>> {
    lookup_path_with(path, root, PathOptions::default())
}

/// Walks `path` through `root`, one dot-separated segment at a time.
///
/// Returns `None` as soon as a segment is missing or the current value is a
/// primitive that cannot be indexed. A present `null` at the last segment is
/// returned as `Some(Value::Null)`.
pub fn lookup_path_with<'a>(
    path: &str,
    root: &'a Value,
    options: PathOptions,
) -> Option<Cow<'a, Value>> {
    if path.is_empty() {
        return Some(match options.empty_path {
            EmptyPath::EmptyObject => Cow::Borrowed(&*EMPTY_OBJECT),
            EmptyPath::Root => Cow::Borrowed(root),
        });
    }

    let mut current = Cow::Borrowed(root);
    for segment in path.split('.') {
        current = match current {
            Cow::Borrowed(value) if is_object_like(value) => member(value, segment)?,
            // owned members are array lengths, which are numbers
            _ => return None,
        };
    }
    Some(current)
}
