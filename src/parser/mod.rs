mod formula_parser;

#[cfg(test)]
mod formula_parser_test;

pub use formula_parser::parse;
