use std::fmt;
use std::fmt::Display;

use crate::dictionary_error::{DictionaryError, Result};
use crate::key::Key;
use crate::merge::{merge_entries, next_integer_key};
use crate::value::Value;

pub type EntryMap = indexmap::IndexMap<Key, Value>;

/// Capability for anything that can supply an ordered set of key/value pairs
/// for bulk import. Sources that cannot (plain scalars, `Nil`) fail with
/// [`DictionaryError::InvalidSource`].
pub trait EntrySource {
    fn try_entries(&self) -> Result<EntryMap>;
}

/// Insertion-ordered dictionary keyed by strings or integers.
///
/// Iteration order is insertion order. Overwriting an existing key keeps its
/// position; removing and re-adding a key moves it to the end. A read-only
/// dictionary rejects every mutation with [`DictionaryError::ReadOnly`],
/// checked before anything is touched.
///
/// Instances are owned values: sharing happens through explicit `Clone`, and
/// two clones never observe each other's mutations. Not thread-safe by
/// itself; concurrent mutation must be serialized by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedDictionary {
    entries: EntryMap,
    read_only: bool,
}

impl OrderedDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from any ordered key/value source, optionally
    /// freezing it once the initial data is in place.
    pub fn from_source<S: EntrySource + ?Sized>(source: &S, read_only: bool) -> Result<Self> {
        let mut dictionary = Self::new();

        dictionary.copy_from(source)?;
        dictionary.read_only = read_only;

        Ok(dictionary)
    }

    pub(crate) fn from_entries(entries: EntryMap) -> Self {
        Self {
            entries,
            read_only: false,
        }
    }

    pub fn item_at(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Inserts `value` at `key`, or appends it under a fresh integer index
    /// when no key is given. Existing keys keep their position; new keys go
    /// to the end.
    pub fn add(&mut self, key: Option<Key>, value: Value) -> Result<()> {
        self.ensure_mutable()?;

        let key = key.unwrap_or_else(|| Key::Number(next_integer_key(&self.entries)));
        self.entries.insert(key, value);

        Ok(())
    }

    pub fn append(&mut self, value: Value) -> Result<()> {
        self.add(None, value)
    }

    /// Removes the entry at `key` and returns its previous value, preserving
    /// the order of the remaining entries. Removing an absent key is not an
    /// error.
    pub fn remove(&mut self, key: &Key) -> Result<Option<Value>> {
        self.ensure_mutable()?;

        Ok(self.entries.shift_remove(key))
    }

    /// Removes every entry, one `remove` per key over a snapshot of the
    /// current key set.
    pub fn clear(&mut self) -> Result<()> {
        for key in self.keys() {
            self.remove(&key)?;
        }

        Ok(())
    }

    /// Presence test. A key holding `Nil` still counts as present.
    pub fn contains(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the current keys in storage order.
    pub fn keys(&self) -> Vec<Key> {
        self.entries.keys().cloned().collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Read view of the underlying ordered map.
    pub fn as_map(&self) -> &EntryMap {
        &self.entries
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Makes the dictionary read-only for the rest of its lifetime.
    pub fn freeze(&mut self) {
        self.read_only = true;
    }

    /// Replaces the current contents with every pair of `source`, inserted
    /// one by one in source order. Plain insertion: integer keys collide and
    /// overwrite like any other key, with no append special case.
    pub fn copy_from<S: EntrySource + ?Sized>(&mut self, source: &S) -> Result<()> {
        self.ensure_mutable()?;

        let incoming = source.try_entries()?;

        self.clear()?;

        for (key, value) in incoming {
            self.add(Some(key), value)?;
        }

        Ok(())
    }

    /// Merges `source` into the current contents.
    ///
    /// The non-recursive form inserts every pair over the existing entries,
    /// overwriting on conflict. The recursive form materializes the source
    /// fully and replaces the entry set with the merged result: integer keys
    /// append on collision, nested containers at shared string keys merge
    /// structurally.
    pub fn merge_with<S: EntrySource + ?Sized>(&mut self, source: &S, recursive: bool) -> Result<()> {
        // The recursive path swaps storage wholesale rather than going
        // through `add`, so the guard has to sit up front for both paths.
        self.ensure_mutable()?;

        let incoming = source.try_entries()?;

        if recursive {
            self.entries = merge_entries(&self.entries, &incoming);
        } else {
            for (key, value) in incoming {
                self.entries.insert(key, value);
            }
        }

        Ok(())
    }

    fn ensure_mutable(&self) -> Result<()> {
        if self.read_only {
            Err(DictionaryError::ReadOnly)
        } else {
            Ok(())
        }
    }
}

impl Display for OrderedDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ {} }}",
            self.entries
                .iter()
                .map(|(key, value)| match key {
                    Key::String(key) => format!("\"{}\": {}", key, value),
                    Key::Number(key) => format!("{}: {}", key, value),
                })
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl<'a> IntoIterator for &'a OrderedDictionary {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Key, Value)> for OrderedDictionary {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl EntrySource for OrderedDictionary {
    fn try_entries(&self) -> Result<EntryMap> {
        Ok(self.entries.clone())
    }
}

impl EntrySource for EntryMap {
    fn try_entries(&self) -> Result<EntryMap> {
        Ok(self.clone())
    }
}

impl EntrySource for [(Key, Value)] {
    fn try_entries(&self) -> Result<EntryMap> {
        Ok(self.iter().cloned().collect())
    }
}

impl EntrySource for Vec<(Key, Value)> {
    fn try_entries(&self) -> Result<EntryMap> {
        self.as_slice().try_entries()
    }
}

impl EntrySource for Value {
    fn try_entries(&self) -> Result<EntryMap> {
        match self {
            Value::Dictionary(dictionary) => dictionary.try_entries(),
            Value::List(items) => Ok(items
                .iter()
                .enumerate()
                .map(|(index, item)| (Key::Number(index as i64), item.clone()))
                .collect()),
            value => Err(DictionaryError::InvalidSource {
                found: value.kind(),
            }),
        }
    }
}
