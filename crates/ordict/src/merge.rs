use crate::dictionary::{EntryMap, OrderedDictionary};
use crate::key::Key;
use crate::value::Value;

/// Index used for append semantics: one past the largest non-negative
/// integer key, or zero when there is none. Negative keys never take part.
pub(crate) fn next_integer_key(entries: &EntryMap) -> i64 {
    entries
        .keys()
        .filter_map(|key| match key {
            Key::Number(index) if *index >= 0 => Some(*index),
            _ => None,
        })
        .max()
        .map(|index| index + 1)
        .unwrap_or(0)
}

/// Merges `incoming` into a copy of `base`, pair by pair in iteration order.
/// Neither operand is mutated.
///
/// Integer keys carry list-like semantics: a key already present in the
/// accumulator appends the incoming value under a fresh index instead of
/// overwriting, while an absent key is written as-is. String keys carry
/// dictionary-like identity: when both sides hold containers of the same
/// shape at an existing key they merge structurally (dictionaries recurse,
/// lists concatenate); everything else overwrites.
pub(crate) fn merge_entries(base: &EntryMap, incoming: &EntryMap) -> EntryMap {
    let mut merged = base.clone();

    for (key, value) in incoming {
        match key {
            Key::Number(_) => {
                if merged.contains_key(key) {
                    merged.insert(Key::Number(next_integer_key(&merged)), value.clone());
                } else {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Key::String(_) => {
                let combined = match (merged.get(key), value) {
                    (Some(Value::Dictionary(existing)), Value::Dictionary(incoming_dict)) => {
                        let entries = merge_entries(existing.as_map(), incoming_dict.as_map());
                        Value::Dictionary(OrderedDictionary::from_entries(entries))
                    }
                    (Some(Value::List(existing)), Value::List(incoming_items)) => {
                        let mut items = existing.clone();
                        items.extend(incoming_items.iter().cloned());
                        Value::List(items)
                    }
                    _ => value.clone(),
                };

                merged.insert(key.clone(), combined);
            }
        }
    }

    merged
}
