//! Client plumbing for the `schemagen` binary.
//!
//! Loading the vocabulary document (from disk or over HTTP), looking up the
//! vocabulary's release label, and preparing the output directory. The
//! generation itself lives in `schemagen-codegen`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod source;
pub mod workspace;
