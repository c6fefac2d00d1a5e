//! GraphQL scalar to TypeScript mappings.
//!
//! # Built-in Table
//!
//! | GraphQL Scalar | TypeScript |
//! |----------------|------------|
//! | `Int`, `Float` | `number` |
//! | `String` | `string` |
//! | `Boolean` | `boolean` |
//! | `ID` (input) | `string \| number` |
//! | `ID` (output) | `string` |
//! | `DateTime` | `Date \| string` |
//! | anything else | `string` |
//!
//! `ID` is the only scalar whose mapping depends on whether it is read or
//! written, which is why it is declared twice (`ID_Input` / `ID_Output`).

use std::collections::HashMap;

/// Name of the identifier scalar.
pub const ID_SCALAR: &str = "ID";

/// Fallback for scalars with no known mapping.
pub const FALLBACK_SCALAR: &str = "string";

/// Names of the scalars every GraphQL schema defines.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Whether a scalar value is being read from or written to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Field results
    Output,
    /// Arguments and input object fields
    Input,
}

impl Position {
    /// Suffix applied to the identifier scalar in this position.
    pub fn id_suffix(&self) -> &'static str {
        match self {
            Position::Output => "_Output",
            Position::Input => "_Input",
        }
    }
}

/// Maps scalar names to TypeScript type expressions.
#[derive(Debug, Clone, Default)]
pub struct ScalarMapper {
    /// Custom mappings (scalar name -> TypeScript type)
    overrides: HashMap<String, String>,
}

impl ScalarMapper {
    /// Create a mapper with only the built-in table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with custom scalar mappings.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Add a custom scalar mapping.
    pub fn add_override(&mut self, scalar: impl Into<String>, ts_type: impl Into<String>) {
        self.overrides.insert(scalar.into(), ts_type.into());
    }

    /// Map a scalar name to its TypeScript type for output positions.
    pub fn map_scalar(&self, name: &str) -> &str {
        self.map_scalar_at(name, Position::Output)
    }

    /// Map a scalar name to its TypeScript type for the given position.
    ///
    /// Overrides never apply to `ID`; its mapping is fixed by position.
    pub fn map_scalar_at(&self, name: &str, position: Position) -> &str {
        if name == ID_SCALAR {
            return map_id(position);
        }
        if let Some(mapped) = self.overrides.get(name) {
            return mapped;
        }
        builtin(name).unwrap_or(FALLBACK_SCALAR)
    }

    /// Single-token primitive for `Int`, `Float`, `String` and `Boolean`.
    ///
    /// These are the scalars that can be inlined at a type-reference leaf
    /// without changing how a surrounding `[]` binds.
    pub fn primitive(&self, name: &str) -> Option<&'static str> {
        match name {
            "Int" | "Float" => Some("number"),
            "String" => Some("string"),
            "Boolean" => Some("boolean"),
            _ => None,
        }
    }
}

fn map_id(position: Position) -> &'static str {
    match position {
        Position::Input => "string | number",
        Position::Output => "string",
    }
}

fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "Int" | "Float" => Some("number"),
        "String" => Some("string"),
        "Boolean" => Some("boolean"),
        "DateTime" => Some("Date | string"),
        _ => None,
    }
}
