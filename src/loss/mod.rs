pub mod error_formula;

pub use error_formula::ErrorFormula;
