//! Row-set combinators for line-level boolean queries.
//!
//! Results keep the iteration order of their first operand and never repeat a
//! row; membership checks go through roaring bitmaps.

use crate::index::types::Row;
use roaring::RoaringBitmap;

pub fn row_set(rows: &[Row]) -> RoaringBitmap {
    rows.iter().copied().collect()
}

/// Rows of `first` that appear in every one of `others`
pub fn intersect_ordered(first: &[Row], others: &[RoaringBitmap]) -> Vec<Row> {
    let mut seen = RoaringBitmap::new();
    first
        .iter()
        .copied()
        .filter(|&row| others.iter().all(|set| set.contains(row)))
        .filter(|&row| seen.insert(row))
        .collect()
}

/// Concatenation of `lists` without repeats, in first-seen order
pub fn union_ordered<I>(lists: I) -> Vec<Row>
where
    I: IntoIterator<Item = Vec<Row>>,
{
    let mut seen = RoaringBitmap::new();
    let mut out = Vec::new();
    for list in lists {
        for row in list {
            if seen.insert(row) {
                out.push(row);
            }
        }
    }
    out
}

/// Rows of `rows` not present in `excluded`
pub fn subtract(rows: Vec<Row>, excluded: &[Row]) -> Vec<Row> {
    if excluded.is_empty() {
        return rows;
    }
    let excluded = row_set(excluded);
    rows.into_iter().filter(|&row| !excluded.contains(row)).collect()
}
