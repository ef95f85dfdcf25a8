mod formula;
mod formula_error;
mod label;
mod operator;


pub use formula::*;
pub use formula_error::*;
pub use label::*;
pub use operator::*;
