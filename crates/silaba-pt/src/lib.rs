// silaba-pt: rule-based syllable separation for Portuguese.
//
// `separate("transpiração")` gives `["trans", "pi", "ra", "ção"]`. Every
// syllable is a slice of the input, so concatenating them reproduces the
// word exactly.

pub(crate) mod portuguese;
pub mod separator;

pub use separator::nucleus::{HiatusRule, NucleusKind};
pub use separator::onset::OnsetRule;
pub use separator::{
    Boundary, BoundaryRule, Syllabification, insert_separators, separate, separate_checked,
    syllable_count, syllable_pattern,
};
pub use silaba_core::WordError;
