//! Type descriptors: the introspection facility the walker reads.
//!
//! Rust has no runtime reflection, so every type that takes part in schema
//! derivation describes its own shape through [`Reflect`](crate::Reflect).
//! The description is a [`TypeDescriptor`]: a name plus a structural
//! [`Kind`]. Nested types are referenced through [`DescriptorFn`] pointers
//! rather than built eagerly, which keeps the descriptor of a
//! self-referential type finite.
//!
//! # Example
//!
//! ```
//! use navro::{FieldDescriptor, Reflect, TypeDescriptor};
//!
//! struct Node {
//!     value: i64,
//!     children: Vec<Node>,
//! }
//!
//! impl Reflect for Node {
//!     fn type_descriptor() -> TypeDescriptor {
//!         TypeDescriptor::record::<Self>(
//!             "Node",
//!             vec![
//!                 FieldDescriptor::new("value", <i64 as Reflect>::type_descriptor),
//!                 FieldDescriptor::new("children", <Vec<Node> as Reflect>::type_descriptor),
//!             ],
//!         )
//!     }
//! }
//! # let _ = Node { value: 0, children: Vec::new() };
//! ```

use std::borrow::Cow;

/// Lazily produces the descriptor of a nested type.
pub type DescriptorFn = fn() -> TypeDescriptor;

/// Structural category of a type.
#[derive(Debug, Clone)]
pub enum Kind {
    /// No type at all, e.g. `()`.
    Invalid,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Platform-width signed integer (`isize`).
    Int,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    /// Platform-width unsigned integer (`usize`).
    Uint,
    Int128,
    Uint128,
    Float32,
    Float64,
    Char,
    String,
    /// Fixed-size sequence.
    Array { elem: DescriptorFn, len: usize },
    /// Growable sequence.
    Sequence { elem: DescriptorFn },
    /// Keyed mapping.
    Map { key: DescriptorFn, value: DescriptorFn },
    /// Composite type with named fields, in declaration order.
    Record { fields: Vec<FieldDescriptor> },
    /// A value that may be absent.
    Optional { referent: DescriptorFn },
    /// A slot whose concrete type is only known at runtime.
    Dynamic,
    Function,
    Channel,
}

impl Kind {
    /// Category name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int8 => "i8",
            Kind::Int16 => "i16",
            Kind::Int32 => "i32",
            Kind::Int64 => "i64",
            Kind::Int => "isize",
            Kind::Uint8 => "u8",
            Kind::Uint16 => "u16",
            Kind::Uint32 => "u32",
            Kind::Uint64 => "u64",
            Kind::Uint => "usize",
            Kind::Int128 => "i128",
            Kind::Uint128 => "u128",
            Kind::Float32 => "f32",
            Kind::Float64 => "f64",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Array { .. } => "array",
            Kind::Sequence { .. } => "sequence",
            Kind::Map { .. } => "map",
            Kind::Record { .. } => "record",
            Kind::Optional { .. } => "optional",
            Kind::Dynamic => "dynamic",
            Kind::Function => "function",
            Kind::Channel => "channel",
        }
    }

    /// Whether this kind is a single unsigned byte.
    pub fn is_byte(&self) -> bool {
        matches!(self, Kind::Uint8)
    }

    /// Whether this kind is textual.
    pub fn is_string(&self) -> bool {
        matches!(self, Kind::String)
    }
}

/// Name and kind of one type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Record name for record kinds, `std::any::type_name` otherwise.
    pub name: Cow<'static, str>,
    /// `std::any::type_name` of the described type. Two records may share a
    /// name only when they share this as well.
    pub type_name: &'static str,
    pub kind: Kind,
}

impl TypeDescriptor {
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            type_name: name,
            kind,
        }
    }

    /// Descriptor for a non-record type, named after `T`.
    pub fn of<T: ?Sized>(kind: Kind) -> Self {
        Self::new(std::any::type_name::<T>(), kind)
    }

    /// Descriptor for the record type `T`.
    pub fn record<T: ?Sized>(
        name: impl Into<Cow<'static, str>>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: std::any::type_name::<T>(),
            kind: Kind::Record { fields },
        }
    }

    /// Short spelling of this type inside a generic record name.
    ///
    /// Records contribute their record name; containers spell out what they
    /// hold, so `Vec<String>` becomes `array_string`.
    pub fn instance_name(&self) -> String {
        match &self.kind {
            Kind::Record { .. } => self.name.to_string(),
            Kind::Array { elem, .. } | Kind::Sequence { elem } => {
                format!("array_{}", elem().instance_name())
            }
            Kind::Map { value, .. } => format!("map_{}", value().instance_name()),
            Kind::Optional { referent } => format!("optional_{}", referent().instance_name()),
            kind => kind.name().to_string(),
        }
    }
}

/// Record name of one instantiation of a generic struct: `base`, then the
/// [`instance_name`](TypeDescriptor::instance_name) of every type argument,
/// joined with `_`.
///
/// ```
/// use navro::{DescriptorFn, Reflect, generic_record_name};
///
/// let args: [DescriptorFn; 2] = [
///     <i64 as Reflect>::type_descriptor,
///     <Vec<String> as Reflect>::type_descriptor,
/// ];
/// assert_eq!(generic_record_name("Pair", &args), "Pair_i64_array_string");
/// ```
pub fn generic_record_name(base: &str, args: &[DescriptorFn]) -> String {
    let mut name = base.to_string();
    for arg in args {
        name.push('_');
        name.push_str(&arg().instance_name());
    }
    name
}

/// One declared field of a record type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The identifier as declared in Rust.
    pub ident: &'static str,
    /// Serialization tags as `(key, value)` pairs.
    pub tags: Vec<(&'static str, &'static str)>,
    /// Descriptor of the field's type; `None` for hidden fields.
    pub ty: Option<DescriptorFn>,
}

impl FieldDescriptor {
    /// A visible field.
    pub fn new(ident: &'static str, ty: DescriptorFn) -> Self {
        Self {
            ident,
            tags: Vec::new(),
            ty: Some(ty),
        }
    }

    /// A field hidden from introspection. The walker skips it.
    pub fn hidden(ident: &'static str) -> Self {
        Self {
            ident,
            tags: Vec::new(),
            ty: None,
        }
    }

    /// Attach a tag under `key`. A later tag with the same key wins.
    pub fn with_tag(mut self, key: &'static str, value: &'static str) -> Self {
        self.tags.retain(|(existing, _)| *existing != key);
        self.tags.push((key, value));
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.ty.is_none()
    }

    /// Raw tag value stored under `key`.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| *value)
    }

    /// Name this field takes in a schema: the first comma-segment of the tag
    /// under `tag_key`, otherwise the declared identifier.
    pub fn schema_name(&self, tag_key: &str) -> &'static str {
        match self.tag(tag_key) {
            Some(value) => value.split(',').next().unwrap_or(value),
            None => self.ident,
        }
    }
}
