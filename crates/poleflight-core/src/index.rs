//! Grouping of photo records by pole id.

use std::collections::HashMap;

use crate::models::PhotoRecord;

/// Photo records grouped by pole id, each group in input order.
///
/// Photos sharing a pole id accumulate; nothing is overwritten.
#[derive(Debug, Clone, Default)]
pub struct PhotoIndex<'a> {
    by_pole: HashMap<&'a str, Vec<&'a PhotoRecord>>,
}

impl<'a> PhotoIndex<'a> {
    pub fn build(photos: &'a [PhotoRecord]) -> Self {
        let mut by_pole: HashMap<&'a str, Vec<&'a PhotoRecord>> = HashMap::new();
        for photo in photos {
            by_pole.entry(photo.pole_id.as_str()).or_default().push(photo);
        }
        Self { by_pole }
    }

    /// Photos for `pole_id`, empty if the pole has none.
    pub fn photos_for(&self, pole_id: &str) -> &[&'a PhotoRecord] {
        self.by_pole.get(pole_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, pole_id: &str) -> bool {
        self.by_pole.contains_key(pole_id)
    }

    /// Number of distinct pole ids.
    pub fn pole_count(&self) -> usize {
        self.by_pole.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pole.is_empty()
    }
}
