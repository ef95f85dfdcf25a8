mod implies_false;
mod implies_not;
mod nand;
mod not_and;
mod not_and_or;
mod reduction_config;
mod substitution;

pub use implies_false::*;
pub use implies_not::*;
pub use nand::*;
pub use not_and::*;
pub use not_and_or::*;
pub use reduction_config::*;
pub use substitution::*;
