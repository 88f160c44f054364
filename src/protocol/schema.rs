//! Record schemas and value coercion
//!
//! A record exposes its fields to the decoder through [`FieldSlot`]: an
//! enum with one variant per value kind, each carrying a mutable borrow of
//! the destination field. The slot is both the field's declared kind and
//! its setter, so coercion is a single exhaustive match and an unknown
//! kind cannot exist at runtime.

use crate::error::{MpdError, Result};

/// The semantic value kinds a schema field may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    SignedInt,
    UnsignedInt,
    Boolean,
    Float,
    UnsignedPair,
}

impl ValueKind {
    /// Human-readable kind name, used in coercion errors
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::SignedInt => "signed integer",
            ValueKind::UnsignedInt => "unsigned integer",
            ValueKind::Boolean => "boolean",
            ValueKind::Float => "float",
            ValueKind::UnsignedPair => "unsigned pair",
        }
    }
}

/// A writable view of one record field
pub enum FieldSlot<'a> {
    Text(&'a mut String),
    SignedInt(&'a mut i64),
    UnsignedInt(&'a mut u64),
    Boolean(&'a mut bool),
    Float(&'a mut f64),
    UnsignedPair(&'a mut [u64; 2]),
}

impl FieldSlot<'_> {
    /// The declared kind of the field behind this slot
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldSlot::Text(_) => ValueKind::Text,
            FieldSlot::SignedInt(_) => ValueKind::SignedInt,
            FieldSlot::UnsignedInt(_) => ValueKind::UnsignedInt,
            FieldSlot::Boolean(_) => ValueKind::Boolean,
            FieldSlot::Float(_) => ValueKind::Float,
            FieldSlot::UnsignedPair(_) => ValueKind::UnsignedPair,
        }
    }

    /// Coerce `value` per the slot's kind and write it into the field.
    ///
    /// Coercion is total for the declared kind or fails with
    /// [`MpdError::Coercion`] naming the field and the raw value; the field
    /// keeps its previous contents on failure.
    pub fn store(self, field: &str, value: &str) -> Result<()> {
        let kind = self.kind();
        match self {
            FieldSlot::Text(slot) => {
                *slot = value.to_string();
            }
            FieldSlot::SignedInt(slot) => {
                *slot = value
                    .parse()
                    .map_err(|_| coercion_error(field, value, kind))?;
            }
            FieldSlot::UnsignedInt(slot) => {
                *slot = value
                    .parse()
                    .map_err(|_| coercion_error(field, value, kind))?;
            }
            FieldSlot::Boolean(slot) => {
                *slot = match value {
                    "0" | "false" => false,
                    "1" | "true" => true,
                    _ => return Err(coercion_error(field, value, kind)),
                };
            }
            FieldSlot::Float(slot) => {
                *slot = value
                    .parse()
                    .map_err(|_| coercion_error(field, value, kind))?;
            }
            FieldSlot::UnsignedPair(slot) => {
                let (first, second) = value
                    .split_once(':')
                    .ok_or_else(|| coercion_error(field, value, kind))?;
                // Exactly two halves; a second colon is malformed.
                if second.contains(':') {
                    return Err(coercion_error(field, value, kind));
                }
                let first = first
                    .parse()
                    .map_err(|_| coercion_error(field, value, kind))?;
                let second = second
                    .parse()
                    .map_err(|_| coercion_error(field, value, kind))?;
                *slot = [first, second];
            }
        }
        Ok(())
    }
}

/// A response record the decoder can populate
///
/// Implementations are plain structs constructed zero-valued via `Default`
/// immediately before each command and never reused across commands.
pub trait Record: Default {
    /// Look up the slot for a mapped field identifier.
    ///
    /// Returns `None` when the schema does not model the field; the decoder
    /// skips such lines (forward compatibility with newer daemons).
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>>;
}

/// Commands whose response carries no field lines (`ping`, `password`)
/// decode into the unit record.
impl Record for () {
    fn slot(&mut self, _field: &str) -> Option<FieldSlot<'_>> {
        None
    }
}

fn coercion_error(field: &str, value: &str, kind: ValueKind) -> MpdError {
    MpdError::Coercion {
        field: field.to_string(),
        value: value.to_string(),
        kind: kind.name(),
    }
}
