// silaba-core: shared building blocks for Portuguese syllable separation.

pub mod character;
pub mod error;
pub mod letter;

pub use error::{WordError, validate_word};
pub use letter::{Letter, Role, classify};
