//! Avro schema tree produced by the walker.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// One node of a derived Avro schema.
///
/// Every node owns its children, except [`Schema::Recursive`], which only
/// names a record whose definition lives elsewhere in the tree (and in the
/// [`Registry`](crate::Registry) of the derivation that produced it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    Null,
    Boolean,
    Int,
    Long,
    String,
    Float,
    Double,
    Bytes,
    Array(Box<Schema>),
    /// Map with string keys.
    Map(Box<Schema>),
    Record(RecordSchema),
    Union(Vec<Schema>),
    /// Reference to an already defined record, by name.
    Recursive(String),
}

impl Schema {
    /// `["null", inner]`, the shape every optional value takes.
    pub fn nullable(inner: Schema) -> Self {
        Schema::Union(vec![Schema::Null, inner])
    }

    /// Type name of a primitive node, `None` for complex ones.
    pub fn primitive_name(&self) -> Option<&'static str> {
        match self {
            Schema::Null => Some("null"),
            Schema::Boolean => Some("boolean"),
            Schema::Int => Some("int"),
            Schema::Long => Some("long"),
            Schema::String => Some("string"),
            Schema::Float => Some("float"),
            Schema::Double => Some("double"),
            Schema::Bytes => Some("bytes"),
            _ => None,
        }
    }

    /// Whether this is a union whose first branch is `null`.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Schema::Union(variants) if matches!(variants.first(), Some(Schema::Null)))
    }

    /// JSON form used when the schema is nested inside another one:
    /// primitives are bare type names, references are bare record names.
    pub fn to_json_value(&self) -> Value {
        match self {
            Schema::Null => json!("null"),
            Schema::Boolean => json!("boolean"),
            Schema::Int => json!("int"),
            Schema::Long => json!("long"),
            Schema::String => json!("string"),
            Schema::Float => json!("float"),
            Schema::Double => json!("double"),
            Schema::Bytes => json!("bytes"),
            Schema::Array(items) => json!({
                "type": "array",
                "items": items.to_json_value(),
            }),
            Schema::Map(values) => json!({
                "type": "map",
                "values": values.to_json_value(),
            }),
            Schema::Record(record) => record.to_json_value(),
            Schema::Union(variants) => {
                Value::Array(variants.iter().map(Schema::to_json_value).collect())
            }
            Schema::Recursive(name) => json!(name),
        }
    }

    /// JSON form of a top-level schema: primitives are spelled out as
    /// `{"type": name}`, everything else matches [`Schema::to_json_value`].
    pub fn to_root_json_value(&self) -> Value {
        match self.primitive_name() {
            Some(name) => json!({ "type": name }),
            None => self.to_json_value(),
        }
    }

    /// Render the top-level schema as JSON text.
    pub fn render(&self, pretty: bool) -> String {
        let value = self.to_root_json_value();
        if pretty {
            format!("{value:#}")
        } else {
            value.to_string()
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(f.alternate()))
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

/// A named record and its fields, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<Field>,
}

impl RecordSchema {
    /// A record with no fields yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn to_json_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!("record"));
        obj.insert("name".to_string(), json!(&self.name));
        let fields: Vec<Value> = self.fields.iter().map(Field::to_json_value).collect();
        obj.insert("fields".to_string(), Value::Array(fields));
        Value::Object(obj)
    }
}

/// A named, typed member of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
}

impl Field {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// Nullable fields carry `"default": null` so readers can omit them.
    pub fn to_json_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".to_string(), json!(&self.name));
        if self.schema.is_nullable() {
            obj.insert("default".to_string(), Value::Null);
        }
        obj.insert("type".to_string(), self.schema.to_json_value());
        Value::Object(obj)
    }
}
