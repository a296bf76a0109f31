/// Team dataset loading and validation.
pub mod teams;
/// Record validation rules.
pub mod validation;
