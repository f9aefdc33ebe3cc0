//! Semantic model types.
//!
//! This module contains the value objects produced while reading a class
//! diagram and consumed by the stub emitter.
//!
//! # Pipeline Position
//!
//! ```text
//! UMLet document (.uxf)
//!     ↓ read
//! DiagramDocument (raw class-node labels)
//!     ↓ node grammar
//! ClassDescriptor (+ raw method lines)
//!     ↓ signature parser
//! MethodDescriptor
//!     ↓ path plan + render + export
//! Stub file
//! ```
//!
//! # Organization
//!
//! - [`document`] - [`DiagramDocument`]
//! - [`class`] - [`ClassDescriptor`]
//! - [`method`] - [`MethodDescriptor`], [`Parameter`]

pub mod class;
pub mod document;
pub mod method;

pub use class::*;
pub use document::*;
pub use method::*;

/// UML visibility markers (public, private, protected, package) that may
/// prefix attribute and method names. They have no Python counterpart.
pub const VISIBILITY_MARKERS: &[char] = &['+', '-', '#', '~'];
