//! Integration tests for graphql-bindgen.
//!
//! These tests run the full pipeline (introspection loading, declaration and
//! operation rendering, document assembly) against small realistic schemas.

use graphql_bindgen::schema::{
    EnumType, FieldDefinition, InputObjectType, InputValue, InterfaceType, ObjectType, ScalarType,
    TypeRef,
};
use graphql_bindgen::{
    generate_code, print_schema, BindingGenerator, DeclarationOrder, GenerateOptions,
    GeneratorConfig, Schema, SchemaError,
};

fn non_null(ty: TypeRef) -> TypeRef {
    TypeRef::non_null(ty)
}

fn named(name: &str) -> TypeRef {
    TypeRef::named(name)
}

/// Users, a mutation, an enum and no subscription root.
fn user_schema() -> Schema {
    Schema::builder()
        .object(
            ObjectType::new("Query")
                .with_field(FieldDefinition::new(
                    "users",
                    non_null(TypeRef::list(non_null(named("User")))),
                ))
                .with_field(
                    FieldDefinition::new("user", named("User"))
                        .with_arg(InputValue::new("id", non_null(named("ID")))),
                ),
        )
        .object(
            ObjectType::new("Mutation").with_field(
                FieldDefinition::new("createUser", non_null(named("User")))
                    .with_arg(InputValue::new("input", non_null(named("UserInput")))),
            ),
        )
        .object(
            ObjectType::new("User")
                .with_description("A registered user")
                .implements("Node")
                .with_field(FieldDefinition::new("id", non_null(named("ID"))))
                .with_field(FieldDefinition::new("name", named("String")))
                .with_field(FieldDefinition::new(
                    "tags",
                    TypeRef::list(non_null(named("String"))),
                ))
                .with_field(FieldDefinition::new("role", non_null(named("Role")))),
        )
        .interface(
            InterfaceType::new("Node").with_field(FieldDefinition::new("id", non_null(named("ID")))),
        )
        .input_object(
            InputObjectType::new("UserInput")
                .with_field(FieldDefinition::new("name", non_null(named("String"))))
                .with_field(FieldDefinition::new(
                    "tags",
                    TypeRef::list(non_null(named("String"))),
                )),
        )
        .enumeration(EnumType::new("Role", ["ADMIN", "USER"]))
        .scalar(ScalarType::new("ID"))
        .scalar(ScalarType::new("String"))
        .query_type("Query")
        .mutation_type("Mutation")
        .build()
}

fn generate(schema: &Schema) -> String {
    generate_code(&GenerateOptions::new(
        schema,
        "schema.json",
        "src/generated/binding.ts",
    ))
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_user_fields() {
    let output = generate(&user_schema());
    assert!(output.contains("  id: ID_Output\n"));
    assert!(output.contains("  name?: string\n"));
    assert!(output.contains("  tags?: string[]\n"));
}

#[test]
fn test_create_user_mutation() {
    let output = generate(&user_schema());
    assert!(output.contains("    createUser: (args, info, context) => Promise<User>\n"));
}

#[test]
fn test_role_enum() {
    let output = generate(&user_schema());
    assert!(output.contains("export type Role = 'ADMIN' |\n  'USER'"));
}

#[test]
fn test_missing_subscription_root() {
    let output = generate(&user_schema());
    assert!(output.contains("  subscription: {}\n"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let schema = user_schema();
    assert_eq!(generate(&schema), generate(&schema));
}

#[test]
fn test_name_ordering() {
    let schema = user_schema();
    let options = GenerateOptions::new(&schema, "schema.json", "binding.ts");
    let output = BindingGenerator::new(
        GeneratorConfig::default().with_declaration_order(DeclarationOrder::Name),
    )
    .generate(&options);

    let position = |needle: &str| output.find(needle).unwrap();
    assert!(position("export type ID_Input") < position("export interface Node"));
    assert!(position("export interface Node") < position("export type Role"));
    assert!(position("export type Role") < position("export type String"));
    assert!(position("export type String") < position("export interface User "));
    assert!(position("export interface User ") < position("export type UserInput"));
}

// =============================================================================
// Full Document
// =============================================================================

#[test]
fn test_full_document() {
    insta::assert_snapshot!(generate(&user_schema()), @r#"
    // Code generated by graphql-bindgen. DO NOT EDIT.
    // Schema: schema.json
    // Binding: src/generated/binding.ts

    import { makeBindingClass } from 'graphql-binding'

    export interface BindingInstance {
      query: {
        users: (args, info, context) => Promise<User[]>
        user: (args, info, context) => Promise<User | null>
      }
      mutation: {
        createUser: (args, info, context) => Promise<User>
      }
      subscription: {}
    }

    export interface BindingConstructor<T> {
      new(...args: any[]): T
    }

    export const Binding = makeBindingClass<BindingConstructor<BindingInstance>>({ typeDefs: () => typeDefs })

    /**
     * Types
     */

    export type Role = 'ADMIN' |
      'USER'

    export type UserInput = {
      name: string
      tags?: string[] | string
    }

    export interface Node {
      id: ID_Output
    }

    /*
     * A registered user
     */
    export interface User extends Node {
      id: ID_Output
      name?: string
      tags?: string[]
      role: Role
    }

    export type ID_Input = string | number
    export type ID_Output = string

    export type String = string

    /**
     * Type Defs
     */

    const typeDefs = `type Query {
      users: [User!]!
      user(id: ID!): User
    }

    type Mutation {
      createUser(input: UserInput!): User!
    }

    """A registered user"""
    type User implements Node {
      id: ID!
      name: String
      tags: [String!]
      role: Role!
    }

    interface Node {
      id: ID!
    }

    input UserInput {
      name: String!
      tags: [String!]
    }

    enum Role {
      ADMIN
      USER
    }
    `
    "#);
}

#[test]
fn test_type_defs_are_escaped() {
    let schema = Schema::builder()
        .object(
            ObjectType::new("Query").with_field(
                FieldDefinition::new("price", named("String"))
                    .with_description("Formatted as `${amount}`"),
            ),
        )
        .query_type("Query")
        .build();

    let output = generate(&schema);
    assert!(output.contains("\"\"\"Formatted as \\`\\${amount}\\`\"\"\""));
}

// =============================================================================
// Introspection Pipeline
// =============================================================================

const INTROSPECTION: &str = r#"{
  "data": {
    "__schema": {
      "queryType": { "name": "Query" },
      "mutationType": null,
      "subscriptionType": null,
      "types": [
        {
          "kind": "OBJECT",
          "name": "Query",
          "fields": [
            {
              "name": "post",
              "args": [{ "name": "id", "type": { "kind": "NON_NULL", "name": null, "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null } }, "defaultValue": null }],
              "type": { "kind": "OBJECT", "name": "Post", "ofType": null },
              "isDeprecated": false,
              "deprecationReason": null
            }
          ],
          "interfaces": []
        },
        {
          "kind": "OBJECT",
          "name": "Post",
          "fields": [
            { "name": "title", "args": [], "type": { "kind": "NON_NULL", "name": null, "ofType": { "kind": "SCALAR", "name": "String", "ofType": null } }, "isDeprecated": false },
            { "name": "publishedAt", "args": [], "type": { "kind": "SCALAR", "name": "DateTime", "ofType": null }, "isDeprecated": false }
          ],
          "interfaces": []
        },
        { "kind": "SCALAR", "name": "DateTime", "description": "ISO-8601 timestamp" },
        { "kind": "SCALAR", "name": "String" },
        { "kind": "OBJECT", "name": "__Schema", "fields": [], "interfaces": [] }
      ]
    }
  }
}"#;

#[test]
fn test_generate_from_introspection() {
    let schema = Schema::from_introspection_json(INTROSPECTION).unwrap();
    let output = generate(&schema);

    assert!(output.contains("    post: (args, info, context) => Promise<Post | null>\n"));
    assert!(output.contains("export interface Post {\n  title: string\n  publishedAt?: DateTime\n}"));
    assert!(output.contains("/*\n * ISO-8601 timestamp\n */\nexport type DateTime = Date | string"));
    assert!(!output.contains("__Schema"));
}

#[test]
fn test_printed_introspection_schema() {
    let schema = Schema::from_introspection_json(INTROSPECTION).unwrap();
    assert_eq!(
        print_schema(&schema),
        "type Query {\n  post(id: ID!): Post\n}\n\n\
         type Post {\n  title: String!\n  publishedAt: DateTime\n}\n\n\
         \"\"\"ISO-8601 timestamp\"\"\"\nscalar DateTime\n"
    );
}

#[test]
fn test_missing_schema_is_an_error() {
    let err = Schema::from_introspection_json(r#"{ "data": {} }"#).unwrap_err();
    assert!(matches!(err, SchemaError::MissingSchema));
}
