//! Umlstub Core Types and Definitions
//!
//! This crate provides the foundational types shared by the umlstub
//! workspace. It includes:
//!
//! - **Data types**: The parameter/return type vocabulary ([`datatype::DataType`])
//! - **Semantic**: Descriptors for documents, classes and methods ([`semantic`] module)
//! - **Package paths**: Dotted package path planning ([`package::PathPlan`])

pub mod datatype;
pub mod package;
pub mod semantic;
