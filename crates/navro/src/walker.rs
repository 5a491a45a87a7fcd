//! Type walker: turns a [`TypeDescriptor`] into a [`Schema`].
//!
//! Dispatch is on the descriptor's [`Kind`]. Records go through the
//! [`Registry`]: a record's name is marked before its fields are walked, so
//! any later occurrence of the same name, including one nested inside the
//! record itself, becomes a [`Schema::Recursive`] reference instead of
//! another expansion.

use tracing::trace;

use crate::descriptor::{DescriptorFn, FieldDescriptor, Kind, TypeDescriptor};
use crate::error::{NotSupported, Result};
use crate::options::DEFAULT_TAG_KEY;
use crate::registry::Registry;
use crate::schema::{Field, RecordSchema, Schema};

/// Depth-first schema derivation over one registry.
pub struct Walker<'a> {
    registry: &'a mut Registry,
    tag_key: &'a str,
}

impl<'a> Walker<'a> {
    /// A walker that names fields from the `avro` tag.
    pub fn new(registry: &'a mut Registry) -> Self {
        Self::with_tag_key(registry, DEFAULT_TAG_KEY)
    }

    pub fn with_tag_key(registry: &'a mut Registry, tag_key: &'a str) -> Self {
        Self { registry, tag_key }
    }

    /// Derive the schema of `descriptor`. The first unsupported shape aborts
    /// the walk.
    pub fn derive(&mut self, descriptor: &TypeDescriptor) -> Result<Schema> {
        match &descriptor.kind {
            Kind::Invalid => Ok(Schema::Null),
            Kind::Bool => Ok(Schema::Boolean),
            Kind::Int8 | Kind::Uint8 | Kind::Int16 | Kind::Uint16 | Kind::Int32 => Ok(Schema::Int),
            // u32 does not fit Avro's signed int; isize/usize may be 64 bits wide.
            Kind::Uint32 | Kind::Int64 | Kind::Uint64 | Kind::Int | Kind::Uint => Ok(Schema::Long),
            Kind::String => Ok(Schema::String),
            Kind::Float32 => Ok(Schema::Float),
            Kind::Float64 => Ok(Schema::Double),
            Kind::Array { elem, len } => {
                trace!(ty = descriptor.type_name, len, "fixed-length array, length not kept");
                self.derive_sequence(*elem)
            }
            Kind::Sequence { elem } => self.derive_sequence(*elem),
            Kind::Map { key, value } => self.derive_map(*key, *value),
            Kind::Record { fields } => {
                self.derive_record(&descriptor.name, descriptor.type_name, fields)
            }
            Kind::Optional { referent } => {
                let inner = self.derive(&referent())?;
                // Avro forbids a union directly inside a union.
                if inner.is_nullable() {
                    return Ok(inner);
                }
                Ok(Schema::nullable(inner))
            }
            kind @ (Kind::Int128
            | Kind::Uint128
            | Kind::Char
            | Kind::Dynamic
            | Kind::Function
            | Kind::Channel) => Err(NotSupported::Kind { kind: kind.name() }),
        }
    }

    fn derive_sequence(&mut self, elem: DescriptorFn) -> Result<Schema> {
        let elem = elem();
        if elem.kind.is_byte() {
            return Ok(Schema::Bytes);
        }
        let items = self.derive(&elem)?;
        Ok(Schema::Array(Box::new(items)))
    }

    fn derive_map(&mut self, key: DescriptorFn, value: DescriptorFn) -> Result<Schema> {
        let key = key();
        if !key.kind.is_string() {
            return Err(NotSupported::MapKey { key: key.type_name });
        }
        let values = self.derive(&value())?;
        Ok(Schema::Map(Box::new(values)))
    }

    fn derive_record(
        &mut self,
        name: &str,
        type_name: &'static str,
        fields: &[FieldDescriptor],
    ) -> Result<Schema> {
        if !self.registry.mark_record(name, type_name)? {
            trace!(record = name, "record already registered, emitting reference");
            return Ok(Schema::Recursive(name.to_string()));
        }
        trace!(record = name, fields = fields.len(), "record registered");

        let mut record = RecordSchema::new(name);
        for field in fields {
            let Some(ty) = field.ty else {
                trace!(record = name, field = field.ident, "skipping hidden field");
                continue;
            };
            let schema = self.derive(&ty())?;
            record
                .fields
                .push(Field::new(field.schema_name(self.tag_key), schema));
        }

        self.registry.complete_record(record.clone());
        Ok(Schema::Record(record))
    }
}

/// Derive with a caller-supplied registry and the default tag key.
pub fn derive_schema(descriptor: &TypeDescriptor, registry: &mut Registry) -> Result<Schema> {
    Walker::new(registry).derive(descriptor)
}
