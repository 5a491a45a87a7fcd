//! Walk native Rust types and generate usable Avro schemas.
//!
//! A type takes part in derivation by implementing [`Reflect`], which hands
//! the walker a [`TypeDescriptor`] of its shape. Primitives and standard
//! containers implement it here; structs get it from `#[derive(Reflect)]`.
//!
//! # Overview
//!
//! The main components are:
//!
//! - [`generate`] / [`generate_with`] - Render a value's schema and list its records
//! - [`derive`] - Typed entry point returning the [`Schema`] tree itself
//! - [`Walker`] - Kind dispatch and record handling over a [`Registry`]
//! - [`Schema`] - The derived tree and its JSON rendering
//! - [`NotSupported`] - The single error: a shape Avro cannot express
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use navro::Reflect;
//!
//! #[derive(Reflect)]
//! struct Tree {
//!     label: String,
//!     #[avro(tag = "kids")]
//!     children: Vec<Tree>,
//!     meta: HashMap<String, i64>,
//! }
//!
//! let derivation = navro::derive::<Tree>(&navro::Options::default())?;
//! assert_eq!(
//!     derivation.render(false),
//!     r#"{"type":"record","name":"Tree","fields":[{"name":"label","type":"string"},{"name":"kids","type":{"type":"array","items":"Tree"}},{"name":"meta","type":{"type":"map","values":"long"}}]}"#
//! );
//! # Ok::<(), navro::NotSupported>(())
//! ```

extern crate self as navro;

pub mod descriptor;
pub mod error;
pub mod generate;
pub mod options;
pub mod reflect;
pub mod registry;
pub mod schema;
pub mod telemetry;
pub mod walker;

pub use descriptor::{DescriptorFn, FieldDescriptor, Kind, TypeDescriptor, generic_record_name};
pub use error::{NotSupported, Result};
pub use generate::{Derivation, derive, generate, generate_with};
pub use options::{DEFAULT_TAG_KEY, Options};
pub use reflect::Reflect;
pub use registry::Registry;
pub use schema::{Field, RecordSchema, Schema};
pub use telemetry::{TelemetryInitError, init_tracing, init_tracing_with};
pub use walker::{Walker, derive_schema};

#[cfg(feature = "derive")]
pub use navro_derive::Reflect;
