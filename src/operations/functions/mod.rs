mod evaluation;
mod formula_depth_function;
mod number_of_nodes_function;
mod operators;
mod variables;

pub use evaluation::*;
pub use formula_depth_function::*;
pub use number_of_nodes_function::*;
pub use operators::*;
pub use variables::*;
