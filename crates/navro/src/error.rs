//! Error types for schema derivation.

use thiserror::Error;

/// A type graph navro cannot express in Avro.
///
/// This is the only error derivation produces. The first unsupported shape
/// found anywhere in the type graph aborts the whole walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotSupported {
    /// Avro map keys are always strings.
    #[error("Do not support map with non-string key (found `{key}`)")]
    MapKey { key: &'static str },

    /// A kind with no Avro counterpart (dynamic values, functions, channels, ...).
    #[error("{kind} will not be supported")]
    Kind { kind: &'static str },

    /// Two distinct Rust types derive the same record name.
    #[error("record name `{name}` is claimed by both `{first}` and `{second}`")]
    NameCollision {
        name: String,
        first: &'static str,
        second: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, NotSupported>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_message() {
        let err = NotSupported::MapKey { key: "i32" };
        assert_eq!(
            err.to_string(),
            "Do not support map with non-string key (found `i32`)"
        );
    }

    #[test]
    fn test_kind_message() {
        let err = NotSupported::Kind { kind: "channel" };
        assert_eq!(err.to_string(), "channel will not be supported");
    }

    #[test]
    fn test_name_collision_message() {
        let err = NotSupported::NameCollision {
            name: "Item".to_string(),
            first: "orders::Item",
            second: "stock::Item",
        };
        assert_eq!(
            err.to_string(),
            "record name `Item` is claimed by both `orders::Item` and `stock::Item`"
        );
    }
}
