//! testsdk: a sample SDK for mobile bindings
//!
//! Everything re-exported from the crate root is part of the public surface a
//! mobile host sees through the binding layer in [`ffi`]. Items that stay
//! `pub(crate)` are deliberately kept off that surface.

pub mod commands;
pub mod computation;
pub mod config;
pub mod error;
pub mod ffi;
pub mod greeting;
pub mod math_result;
pub mod saved_value;
pub mod surface;

pub use computation::{print_result, Computation, RESULT_LABEL};
pub use error::SdkError;
pub use greeting::{say_hello, TITLE};
pub use math_result::{math_result_pointer, MathResult};
pub use saved_value::{retrieve_val, save_val};
