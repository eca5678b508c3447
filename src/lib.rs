//! Podiff - incremental translation extraction for gettext catalogs
//!
//! Podiff rewrites each `.po` file under a directory so that it holds
//! only the entries whose translations are new or changed relative to
//! the same file on another git branch. Translators and release
//! tooling use it to isolate incremental translation work per file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, driver loop, reporting)
//! - `catalog`: `.po` data model with parser and serializer
//! - `diff`: Core diff algorithm between two parsed catalogs
//! - `revision`: Access to file content on another git revision
//! - `scanner`: Recursive discovery of catalog files

pub mod catalog;
pub mod cli;
pub mod diff;
pub mod revision;
pub mod scanner;
