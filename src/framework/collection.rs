//! Collection-valued field helpers shared by every generated record.
//!
//! Sequences and maps are always copied on the way in, so the record never
//! shares storage with caller-owned containers. Reads hand out a borrow of the
//! live storage.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::framework::ModelError;

/// Copies a caller-owned slice into fresh storage.
pub fn copy_of<T: Clone>(values: &[T]) -> Vec<T> {
    values.to_vec()
}

/// Appends to the sequence if one is present, otherwise initializes a new one
/// sized to the input.
///
/// An empty input on an absent field still leaves the field present (and empty).
pub fn append_or_init<T>(slot: &mut Option<Vec<T>>, values: impl IntoIterator<Item = T>) {
    let values = values.into_iter();
    match slot {
        Some(existing) => existing.extend(values),
        None => {
            let mut fresh = Vec::with_capacity(values.size_hint().0);
            fresh.extend(values);
            *slot = Some(fresh);
        }
    }
}

/// Replaces the map with a copy of the given entries.
pub fn replace_entries<V>(
    slot: &mut Option<BTreeMap<String, V>>,
    entries: impl IntoIterator<Item = (String, V)>,
) {
    *slot = Some(entries.into_iter().collect());
}

/// Inserts one entry, creating the map if absent.
///
/// Fails with [`ModelError::DuplicateKey`] if `key` is already present; the map
/// is left unchanged in that case.
pub fn insert_entry<V>(
    slot: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), ModelError> {
    match slot.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(occupied) => Err(ModelError::DuplicateKey {
            field,
            key: occupied.key().clone(),
        }),
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_or_init_creates_then_appends() {
        let mut slot: Option<Vec<u32>> = None;
        append_or_init(&mut slot, [1]);
        append_or_init(&mut slot, [2, 3]);
        assert_eq!(slot, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_append_or_init_with_nothing_marks_present() {
        let mut slot: Option<Vec<u32>> = None;
        append_or_init(&mut slot, []);
        assert_eq!(slot, Some(vec![]));
    }

    #[test]
    fn test_copy_of_is_detached() {
        let mut source = vec!["a".to_string()];
        let copy = copy_of(&source);
        source.push("b".to_string());
        assert_eq!(copy, vec!["a".to_string()]);
    }

    #[test]
    fn test_insert_entry_rejects_duplicates() {
        let mut slot: Option<BTreeMap<String, i32>> = None;
        insert_entry(&mut slot, "scores", "k".into(), 1).unwrap();

        let err = insert_entry(&mut slot, "scores", "k".into(), 2).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "scores",
                key: "k".into()
            }
        );
        assert_eq!(slot.unwrap().get("k"), Some(&1));
    }
}
