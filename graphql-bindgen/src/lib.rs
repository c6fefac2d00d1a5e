//! # graphql-bindgen
//!
//! Generates TypeScript binding declarations from a GraphQL schema.
//!
//! ## Overview
//!
//! Given a [`Schema`] (built by hand or loaded from an introspection result),
//! the generator produces a single TypeScript module containing:
//!
//! - one declaration per named type (interfaces, input shapes, unions, enums,
//!   scalar aliases),
//! - a `BindingInstance` interface with a call signature per root field,
//! - an exported `Binding` class built with `makeBindingClass`,
//! - the schema itself, printed as SDL into a `typeDefs` constant.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphql_bindgen::schema::{FieldDefinition, ObjectType, TypeRef};
//! use graphql_bindgen::{generate_code, GenerateOptions, Schema};
//!
//! let schema = Schema::builder()
//!     .object(ObjectType::new("Query").with_field(FieldDefinition::new(
//!         "hello",
//!         TypeRef::non_null(TypeRef::named("String")),
//!     )))
//!     .query_type("Query")
//!     .build();
//!
//! let output = generate_code(&GenerateOptions::new(&schema, "schema.json", "binding.ts"));
//! assert!(output.contains("hello: (args, info, context) => Promise<string>"));
//! ```
//!
//! ## Type Mapping
//!
//! | GraphQL | TypeScript (output) | TypeScript (input) |
//! |---------|---------------------|--------------------|
//! | `T!` | `T` | `T` |
//! | `T` (field) | `field?: T` | `field?: T` |
//! | `[T]` | `T[]` | `T[] \| T` |
//! | `ID` | `ID_Output` | `ID_Input` |
//! | `String` | `string` | `string` |
//! | `Int`, `Float` | `number` | `number` |
//! | `Boolean` | `boolean` | `boolean` |
//!
//! Custom scalars keep their name at use sites and are declared as aliases
//! (`export type DateTime = Date | string`). See [`generator::scalar`].

pub mod error;
pub mod generator;
pub mod introspection;
pub mod printer;
pub mod schema;

pub use error::{SchemaError, SchemaResult};
pub use generator::{
    generate_code, BindingGenerator, DeclarationOrder, GenerateOptions, GeneratorConfig,
};
pub use printer::print_schema;
pub use schema::{OperationKind, Schema, TypeDefinition, TypeRef};
