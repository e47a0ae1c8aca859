//! # libmangler
//!
//! Initialism-aware identifier name mangling.
//!
//! This library converts arbitrary free-form text into well-formed
//! identifiers and human-readable labels. Names are split into words by a
//! single-pass scanner that recognizes registered initialisms (`HTTP`,
//! `ID`, `IPv4`) with longest-match, pluralization-aware boundaries, then
//! rendered in the requested convention: exported and unexported Go
//! identifiers, snake_case file names, kebab-case command names,
//! human-readable labels, and lowerCamelCase JSON property names.
//!
//! ## Example
//!
//! ```rust
//! use libmangler::prelude::*;
//!
//! let mangler = NameMangler::new();
//! assert_eq!("FindThingByID", mangler.to_go_name("find thing by id"));
//! assert_eq!("find-thing-by-id", mangler.to_command_name("FindThingByID"));
//!
//! let custom = NameMangler::builder()
//!     .additional_initialisms(["ELB"])
//!     .build();
//! assert_eq!("elbHTTPLoadBalancer", custom.to_var_name("ELBHTTPLoadBalancer"));
//! ```
//!
//! Free functions over a process-wide default mangler are available for
//! one-off conversions: [`to_go_name`], [`to_file_name`], and friends.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod lexeme;
pub mod mangler;
pub mod splitter;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use index::{default_initialisms, InitialismIndex, PluralForm};
pub use lexeme::Lexeme;
pub use mangler::{
    add_initialisms, camelize, to_command_name, to_file_name, to_go_name, to_human_name_lower,
    to_human_name_title, to_json_name, to_var_name, NameMangler, NameManglerBuilder,
};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::index::{default_initialisms, InitialismIndex, PluralForm};
    pub use crate::lexeme::Lexeme;
    pub use crate::mangler::{
        add_initialisms, camelize, to_command_name, to_file_name, to_go_name,
        to_human_name_lower, to_human_name_title, to_json_name, to_var_name, NameMangler,
        NameManglerBuilder,
    };
    pub use crate::splitter::pool::LexemePool;
}
