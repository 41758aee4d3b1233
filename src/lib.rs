//! regaddr-cli library
//!
//! This crate provides the core functionality for the `regaddr-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is one linear pipeline over a GenICam device-profile XML
//! document, organized into modules:
//!
//! - [`document`] - Loads an XML file into an owned element tree and provides
//!   namespace-insensitive tag matching helpers
//! - [`extractor`] - Walks the tree twice: once for `<Group Comment="RegAddr">`
//!   integer definitions, once for inline `<Address>` children
//! - [`exporter`] - Sorts the extracted records and writes the CSV address map
//! - [`cli`] - Command-line interface orchestrating the pipeline
//! - [`config`] - Resolved run configuration, optionally loaded from TOML
//! - [`models`] - The `AddressRecord` row type and its extraction source
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use regaddr_cli::{config::ResolvedConfig, document, extractor, exporter, errors::AppResult};
//! use std::path::Path;
//!
//! # fn example() -> AppResult<()> {
//! let config = ResolvedConfig::default();
//! let root = document::load_document(Path::new("profile.xml"))?;
//! let records = extractor::extract_records(&root, &config);
//! let rows = exporter::write_csv(records, Path::new("regaddr.csv"))?;
//! println!("Wrote {rows} rows");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod document;
pub mod errors;
pub mod exporter;
pub mod extractor;
pub mod models;
