//! phpdoc-stubgen: generates PHP stub declarations from the phpdoc
//! DocBook XML documentation sources.
//!
//! The pipeline walks a phpdoc checkout, extracts classes, functions,
//! constants and variables from the heterogeneous reference documents,
//! merges them into an in-memory registry, and renders a single
//! `phpfunctions.php` file with PHPDoc comments attached to every
//! declaration.  The generated file is consumed by IDE indexers that
//! need stub definitions for PHP's built-in symbols.

pub mod assemble;
pub mod comment;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generator;
pub mod registry;
pub mod types;
pub mod validate;
pub mod walker;

pub use error::Error;
