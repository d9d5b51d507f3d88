use ordict::{Key, OrderedDictionary, Value};





/// Ordered snapshot of a dictionary's entries, for assertions where key
/// order matters (map equality alone ignores it).
pub fn pairs(dictionary: &OrderedDictionary) -> Vec<(Key, Value)> {
    dictionary
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Builds an `OrderedDictionary` from `key => value` pairs, converting both
/// sides through `From`.
#[macro_export]
macro_rules! dict {
    () => {
        ordict::OrderedDictionary::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut dictionary = ordict::OrderedDictionary::new();

        $(
            dictionary
                .add(Some(ordict::Key::from($key)), ordict::Value::from($value))
                .unwrap();
        )+

        dictionary
    }};
}

#[macro_export]
macro_rules! merge_tests {
    ($($name:ident: $base:expr, $incoming:expr, $recursive:expr => $expected:expr),+ $(,)?) => {
        $(
            #[rstest::rstest]
            fn $name() {
                let mut base = $base;

                base.merge_with(&$incoming, $recursive).unwrap();

                assert_eq!($crate::pairs(&base), $crate::pairs(&$expected));
            }
        )*
    };
}
