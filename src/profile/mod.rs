// Word-frequency profiles — tokenizing documents and building their
// top-K relative frequency maps.

pub mod builder;
pub mod frequency;
pub mod normalize;
pub mod traits;
