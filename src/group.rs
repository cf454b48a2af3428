//! Grouping rows under their related character.

use crate::table::Row;

use indexmap::IndexMap;

/// Rows sharing one related character, in sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub rows: Vec<Row>,
}

/// How rows are ordered before grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Stable sort on stroke count first.
    ByStrokes,
    FileOrder,
}

/// Stable sort by stroke count; ties keep their file order.
pub fn sort_by_strokes(rows: &mut [Row]) {
    rows.sort_by_key(|row| row.strokes);
}

/// Group rows by key. Groups come out in first-occurrence order of their key.
pub fn group_rows(rows: Vec<Row>) -> Vec<Group> {
    let mut groups: IndexMap<String, Vec<Row>> = IndexMap::new();
    for row in rows {
        groups.entry(row.key.clone()).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|(key, rows)| Group { key, rows })
        .collect()
}

/// Apply `ordering`, then group.
pub fn arrange(mut rows: Vec<Row>, ordering: Ordering) -> Vec<Group> {
    if ordering == Ordering::ByStrokes {
        sort_by_strokes(&mut rows);
    }
    group_rows(rows)
}
