// Portuguese language data shared by the separator stages.

pub(crate) mod constants;
