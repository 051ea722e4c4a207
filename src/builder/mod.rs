//! Builder API for ergonomic gate construction.
//!
//! Provides a fluent builder for configuring and creating gate machines, and
//! a macro for declaring phase enums with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::GateBuilder;
