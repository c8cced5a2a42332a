//! The binding boundary.
//!
//! `exports` is the flat, primitive-typed API the binding generator wraps.
//! `MathResult` objects cross it as opaque handles managed by `handles`.
//! With the `jni` feature, `jni` provides the matching JVM entry points.

pub mod exports;
pub mod handles;
#[cfg(feature = "jni")]
pub mod jni;

/// Kotlin package the JNI entry points in `jni` are compiled for.
pub const JNI_PACKAGE: &str = "com.example.testsdk";

/// Kotlin class the JNI entry points in `jni` are compiled for.
pub const JNI_CLASS: &str = "Testsdk";

/// Source of the export layer, inspected by [`crate::surface`].
pub const EXPORTS_SOURCE: &str = include_str!("exports.rs");

/// Source of the interface declarations, inspected by [`crate::surface`].
pub const INTERFACES_SOURCE: &str = include_str!("../computation.rs");
