use thiserror::Error;

use crate::value::ValueType;

pub type Result<T> = std::result::Result<T, DictionaryError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DictionaryError {
    #[error("dictionary is read-only and cannot be modified")]
    ReadOnly,

    #[error("value of type '{}' is not a valid key/value source", .found.to_string())]
    InvalidSource { found: ValueType },
}
