mod assignment;

pub use assignment::*;
