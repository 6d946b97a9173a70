//! Column-name comparison and the set-like name view.
//!
//! MySQL matches unquoted identifiers case-insensitively; a lookup name
//! wrapped in backticks is matched case-sensitively instead. The directory
//! sorts its columns by name once at construction so every lookup is a
//! binary search under these rules rather than a linear scan.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Comparator over column names.
///
/// Must be a total order, deterministic and side-effect-free; `Equal` means
/// the two strings name the same column for lookup purposes. The default is
/// [`identifier_compare`]; substitute it when the session negotiates
/// different identifier collation rules.
pub type NameCompare = fn(&str, &str) -> Ordering;

/// Default identifier comparison: byte-wise with ASCII case folding.
///
/// Non-ASCII bytes compare verbatim.
pub fn identifier_compare(left: &str, right: &str) -> Ordering {
    let left = left.as_bytes();
    let right = right.as_bytes();
    let min = left.len().min(right.len());

    for i in 0..min {
        let l = left[i].to_ascii_lowercase();
        let r = right[i].to_ascii_lowercase();

        if l != r {
            return l.cmp(&r);
        }
    }

    left.len().cmp(&right.len())
}

/// Search `sorted_names` for a lookup name.
///
/// `sorted_names` must be non-decreasing under `compare`, produced by a
/// stable sort over the declaration order. On a hit, returns the position
/// of the first entry of the equal run, which therefore belongs to the
/// lowest-ordinal column among duplicates. A backtick-quoted name is
/// unwrapped and matched byte-exactly within the equal run. Empty names
/// never match.
pub(crate) fn search(sorted_names: &[String], name: &str, compare: NameCompare) -> Option<usize> {
    let (target, exact) = unquote(name);

    if target.is_empty() {
        return None;
    }

    let hit = sorted_names
        .binary_search_by(|probe| compare(probe, target))
        .ok()?;

    // Rewind to the start of the equal run for a deterministic answer.
    let mut first = hit;
    while first > 0 && compare(&sorted_names[first - 1], target) == Ordering::Equal {
        first -= 1;
    }

    if !exact {
        return Some(first);
    }

    let mut i = first;
    while i < sorted_names.len() && compare(&sorted_names[i], target) == Ordering::Equal {
        if sorted_names[i] == target {
            return Some(i);
        }
        i += 1;
    }

    None
}

/// Strip one pair of backticks, flagging the name as a case-sensitive match.
fn unquote(name: &str) -> (&str, bool) {
    let bytes = name.as_bytes();

    if bytes.len() >= 2 && bytes[0] == b'`' && bytes[bytes.len() - 1] == b'`' {
        (&name[1..name.len() - 1], true)
    } else {
        (name, false)
    }
}

/// Set-like view over the column names of one result set.
///
/// Iteration yields names in declaration order, duplicates included, so
/// positions line up with the directory's ordinals. Membership tests run
/// against the sorted view with the directory's comparator.
#[derive(Clone)]
pub struct ColumnNameSet {
    origin_names: Arc<[String]>,
    sorted_names: Arc<[String]>,
    compare: NameCompare,
}

impl ColumnNameSet {
    /// Build the view from parallel declaration-order and sorted name arrays.
    ///
    /// For a single-column result both arrays may be the same allocation.
    pub(crate) fn new(
        origin_names: Arc<[String]>,
        sorted_names: Arc<[String]>,
        compare: NameCompare,
    ) -> Self {
        debug_assert_eq!(origin_names.len(), sorted_names.len());

        Self {
            origin_names,
            sorted_names,
            compare,
        }
    }

    /// Number of names, one per column (duplicates included).
    pub fn len(&self) -> usize {
        self.origin_names.len()
    }

    /// Check if there are no names. Always false for a built directory.
    pub fn is_empty(&self) -> bool {
        self.origin_names.is_empty()
    }

    /// Test membership under the identifier-comparison rules.
    pub fn contains(&self, name: &str) -> bool {
        search(&self.sorted_names, name, self.compare).is_some()
    }

    /// Iterate names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origin_names.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ColumnNameSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.origin_names
            .iter()
            .map(String::as_str as fn(&String) -> &str)
    }
}

impl fmt::Debug for ColumnNameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
