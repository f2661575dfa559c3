//! Pass 2: sorted name index -- case-insensitive lexical ordering of a
//! catalog's names, with binary-search lookup by rank.
//!
//! Ranks and positions on this public surface are 1-based, and 0 means
//! "not found". [`NameIndex::lookup`] is the 0-based form used internally.

use std::cmp::Ordering;

/// Compare two names ignoring ASCII case.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.to_ascii_uppercase()))
}

/// Sort `list` case-insensitively in place and return the index array:
/// entry `k - 1` holds the 1-based original position of the name now at
/// rank `k`.
pub fn setup_and_sort(list: &mut [String]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..list.len()).collect();
    order.sort_by(|&a, &b| cmp_ignore_case(&list[a], &list[b]));
    let sorted: Vec<String> = order.iter().map(|&i| list[i].clone()).collect();
    list.clone_from_slice(&sorted);
    order.into_iter().map(|i| i + 1).collect()
}

/// Binary search a case-insensitively sorted list for `name`.
///
/// Returns the 1-based rank, or 0 when absent. If `list` is not sorted the
/// search may miss present names; it never panics.
pub fn find_item_in_sorted_list<S: AsRef<str>>(name: &str, list: &[S]) -> usize {
    let mut lo = 0usize;
    let mut hi = list.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp_ignore_case(list[mid].as_ref(), name) {
            Ordering::Equal => return mid + 1,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    0
}

/// Linear case-insensitive search. Returns the 1-based position, or 0.
pub fn find_item_in_list<I>(name: &str, list: I) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    list.into_iter()
        .position(|item| item.as_ref().eq_ignore_ascii_case(name))
        .map_or(0, |p| p + 1)
}

/// A sorted view of a catalog's names plus the rank -> position map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    sorted: Vec<String>,
    positions: Vec<usize>,
}

impl NameIndex {
    pub fn build<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut sorted: Vec<String> = names.into_iter().map(|n| n.as_ref().to_owned()).collect();
        let positions = setup_and_sort(&mut sorted);
        NameIndex { sorted, positions }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn sorted_names(&self) -> &[String] {
        &self.sorted
    }

    /// 1-based rank of `name`, or 0.
    pub fn rank(&self, name: &str) -> usize {
        find_item_in_sorted_list(name, &self.sorted)
    }

    /// 1-based original position of the name at 1-based `rank`, or 0.
    pub fn original_position(&self, rank: usize) -> usize {
        match rank.checked_sub(1) {
            Some(k) => self.positions.get(k).copied().unwrap_or(0),
            None => 0,
        }
    }

    /// 0-based position of `name` in the owning catalog.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.original_position(self.rank(name)).checked_sub(1)
    }
}
