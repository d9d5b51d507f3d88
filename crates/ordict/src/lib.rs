mod dictionary;
mod dictionary_error;
mod key;
mod merge;
mod value;

pub use dictionary::*;
pub use dictionary_error::*;
pub use key::*;
pub use value::*;
