pub mod literal;
pub mod clause;
pub mod formula;
pub mod assignment;
