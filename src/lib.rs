//! Describe a directory tree as plain text, one path per line, and create it on disk.
//!
//! A line ending in a path separator is a folder, any other non-blank line is an empty file:
//!
//! ```text
//! src/
//! src/main.rs
//! docs/guide.md
//! ```
//!
//! [`parser::parse_paths`] turns such a listing into a [`parser::PathList`] and
//! [`materialize::materialize`] creates it under a base directory. The [`api`] module wraps both
//! in the create / accept / reject actions, run against an injected [`host::Host`].
pub mod api;
pub mod config;
pub mod document;
pub mod errors;
pub mod host;
pub mod lens;
pub mod materialize;
pub mod parser;
mod preview;
mod prompt;
mod utils;
