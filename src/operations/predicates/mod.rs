mod equivalence;
mod vocabulary;

pub use equivalence::*;
pub use vocabulary::*;
