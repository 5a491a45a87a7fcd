//! Per-derivation table of record types discovered during a walk.

use indexmap::{IndexMap, IndexSet};

use crate::error::{NotSupported, Result};
use crate::schema::RecordSchema;

#[derive(Debug)]
struct Entry {
    type_name: &'static str,
    record: Option<RecordSchema>,
}

/// Records seen by one derivation, keyed by name, in discovery order.
///
/// A name is marked before the walker descends into the record's fields and
/// completed once they are all derived. A second encounter of a marked name,
/// finished or not, becomes a [`Schema::Recursive`](crate::Schema::Recursive)
/// reference. Never share one registry between derivations.
#[derive(Debug, Default)]
pub struct Registry {
    records: IndexMap<String, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `name` for the Rust type `type_name`.
    ///
    /// Returns `Ok(false)` if the same type already holds the name, and
    /// [`NotSupported::NameCollision`] if a different type does.
    pub fn mark_record(&mut self, name: &str, type_name: &'static str) -> Result<bool> {
        match self.records.get(name) {
            Some(entry) if entry.type_name == type_name => Ok(false),
            Some(entry) => Err(NotSupported::NameCollision {
                name: name.to_string(),
                first: entry.type_name,
                second: type_name,
            }),
            None => {
                self.records.insert(
                    name.to_string(),
                    Entry {
                        type_name,
                        record: None,
                    },
                );
                Ok(true)
            }
        }
    }

    /// Store the finished definition of a previously marked record.
    /// Unmarked names are ignored.
    pub fn complete_record(&mut self, record: RecordSchema) {
        if let Some(entry) = self.records.get_mut(record.name.as_str()) {
            entry.record = Some(record);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// The finished definition behind `name`, if its derivation completed.
    pub fn resolve(&self, name: &str) -> Option<&RecordSchema> {
        self.records.get(name).and_then(|entry| entry.record.as_ref())
    }

    /// Every record name seen, in discovery order.
    pub fn record_names(&self) -> IndexSet<String> {
        self.records.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
