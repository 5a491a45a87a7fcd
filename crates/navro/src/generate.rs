//! Top-level entry points.

use indexmap::IndexSet;
use tracing::debug;

use crate::error::Result;
use crate::options::Options;
use crate::reflect::Reflect;
use crate::registry::Registry;
use crate::schema::{RecordSchema, Schema};
use crate::walker::Walker;

/// Result of one derivation: the root schema plus every record it defines.
#[derive(Debug)]
pub struct Derivation {
    pub schema: Schema,
    pub registry: Registry,
}

impl Derivation {
    /// Names of all records reachable from the root.
    pub fn record_names(&self) -> IndexSet<String> {
        self.registry.record_names()
    }

    /// Definition behind a [`Schema::Recursive`] reference.
    pub fn resolve(&self, name: &str) -> Option<&RecordSchema> {
        self.registry.resolve(name)
    }

    pub fn render(&self, pretty: bool) -> String {
        self.schema.render(pretty)
    }
}

/// Derive the schema of `T` without needing a value.
#[tracing::instrument(
    name = "navro.derive",
    level = "debug",
    skip(options),
    fields(root = std::any::type_name::<T>(), tag_key = %options.tag_key)
)]
pub fn derive<T: Reflect + ?Sized>(options: &Options) -> Result<Derivation> {
    let mut registry = Registry::new();
    let schema =
        Walker::with_tag_key(&mut registry, &options.tag_key).derive(&T::type_descriptor())?;
    debug!(records = registry.len(), "schema derived");
    Ok(Derivation { schema, registry })
}

/// Render the Avro schema of `value`'s type and list the records it defines.
///
/// Only the type matters; the value's contents are never read.
///
/// ```
/// use navro::Reflect;
///
/// #[derive(Reflect)]
/// struct Pointer {
///     #[avro(tag = "in")]
///     input: Option<i64>,
/// }
///
/// let (schema, names) = navro::generate(&Pointer { input: None })?;
/// assert_eq!(
///     schema,
///     r#"{"type":"record","name":"Pointer","fields":[{"name":"in","default":null,"type":["null","long"]}]}"#
/// );
/// assert!(names.contains("Pointer"));
/// # Ok::<(), navro::NotSupported>(())
/// ```
pub fn generate<T: Reflect + ?Sized>(value: &T) -> Result<(String, IndexSet<String>)> {
    generate_with(value, &Options::default())
}

/// [`generate`] with explicit options.
#[tracing::instrument(name = "navro.generate", level = "debug", skip_all, fields(pretty = options.pretty))]
pub fn generate_with<T: Reflect + ?Sized>(
    _value: &T,
    options: &Options,
) -> Result<(String, IndexSet<String>)> {
    let derivation = derive::<T>(options)?;
    let rendered = derivation.render(options.pretty);
    debug!(bytes = rendered.len(), "schema rendered");
    Ok((rendered, derivation.record_names()))
}
