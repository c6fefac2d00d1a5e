//! Property-based tests for graphql-bindgen.
//!
//! Properties tested:
//! - Property 1: Non-null wrappers are consumed
//! - Property 2: Output lists append `[]`
//! - Property 3: Input lists accept a single element
//! - Property 4: `ID` is suffixed at any wrapping depth
//! - Property 5: Field optionality follows nullability
//! - Property 6: Generation is deterministic
//! - Property 7: Declaration order is stable within a kind

use proptest::prelude::*;

use graphql_bindgen::generator::{ordered_types, ScalarMapper, TypeRenderer};
use graphql_bindgen::schema::{EnumType, FieldDefinition, ObjectType, UnionType};
use graphql_bindgen::{generate_code, DeclarationOrder, GenerateOptions, Schema, TypeRef};

// =============================================================================
// Generators for property tests
// =============================================================================

/// Generate a type name that is not a built-in scalar.
fn arb_type_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,10}".prop_filter("not a built-in scalar", |name| {
        !matches!(name.as_str(), "ID" | "String" | "Int" | "Float" | "Boolean")
    })
}

/// Generate a wrapped type reference around an arbitrary leaf.
fn arb_type_ref() -> impl Strategy<Value = TypeRef> {
    let leaf = prop_oneof![
        arb_type_name().prop_map(TypeRef::Named),
        Just(TypeRef::named("ID")),
        Just(TypeRef::named("String")),
        Just(TypeRef::named("Int")),
    ];
    leaf.prop_recursive(4, 8, 1, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeRef::list),
            inner
                .prop_filter("non-null cannot wrap non-null", |t| !t.is_non_null())
                .prop_map(TypeRef::non_null),
        ]
    })
}

/// Wrap a reference in `depth` alternating list/non-null layers.
fn wrap(mut ty: TypeRef, depth: usize) -> TypeRef {
    for i in 0..depth {
        ty = if i % 2 == 0 {
            TypeRef::non_null(ty)
        } else {
            TypeRef::list(ty)
        };
    }
    ty
}

fn output(ty: &TypeRef) -> String {
    let scalars = ScalarMapper::new();
    TypeRenderer::new(&scalars, true).render_output_type(ty)
}

fn input(ty: &TypeRef) -> String {
    let scalars = ScalarMapper::new();
    TypeRenderer::new(&scalars, true).render_input_type(ty)
}

fn unwrap_non_null(ty: TypeRef) -> TypeRef {
    match ty {
        TypeRef::NonNull(inner) => *inner,
        other => other,
    }
}

// =============================================================================
// Type-Reference Properties
// =============================================================================

proptest! {
    /// Property 1: rendering ignores a non-null wrapper.
    #[test]
    fn prop_non_null_is_consumed(ty in arb_type_ref()) {
        let ty = unwrap_non_null(ty);
        let wrapped = TypeRef::non_null(ty.clone());
        prop_assert_eq!(output(&wrapped), output(&ty));
        prop_assert_eq!(input(&wrapped), input(&ty));
    }

    /// Property 2: an output list is its element followed by `[]`.
    #[test]
    fn prop_output_list_appends_brackets(ty in arb_type_ref()) {
        let list = TypeRef::list(ty.clone());
        prop_assert_eq!(output(&list), format!("{}[]", output(&ty)));
    }

    /// Property 3: an input list is `inner[] | inner`.
    #[test]
    fn prop_input_list_accepts_element(ty in arb_type_ref()) {
        let list = TypeRef::list(ty.clone());
        let inner = input(&ty);
        prop_assert_eq!(input(&list), format!("{}[] | {}", inner, inner));
    }

    /// Property 4: `ID` carries its position suffix at every depth.
    #[test]
    fn prop_id_suffix_at_any_depth(depth in 0usize..6) {
        let ty = wrap(TypeRef::named("ID"), depth);
        let out = output(&ty);
        let inp = input(&ty);
        prop_assert!(out.starts_with("ID_Output"));
        prop_assert!(!out.contains("ID_Input"));
        prop_assert!(inp.starts_with("ID_Input"));
        prop_assert!(!inp.contains("ID_Output"));
    }

    /// Property 5: a field line carries `?` exactly when its type is nullable.
    #[test]
    fn prop_optional_marker(ty in arb_type_ref()) {
        let schema = Schema::builder()
            .object(ObjectType::new("Holder").with_field(FieldDefinition::new("value", ty.clone())))
            .build();
        let generated = generate_code(&GenerateOptions::new(&schema, "in", "out"));

        let expected = if ty.is_non_null() {
            format!("\n  value: {}\n", output(&ty))
        } else {
            format!("\n  value?: {}\n", output(&ty))
        };
        prop_assert!(generated.contains(&expected));
    }
}

// =============================================================================
// Document Properties
// =============================================================================

proptest! {
    /// Property 6: the same schema always produces the same bytes.
    #[test]
    fn prop_generation_is_deterministic(
        names in prop::collection::btree_set(arb_type_name(), 1..8)
    ) {
        let mut builder = Schema::builder();
        for name in &names {
            builder = builder.object(
                ObjectType::new(name).with_field(FieldDefinition::new("id", TypeRef::named("ID"))),
            );
        }
        let schema = builder.build();
        let options = GenerateOptions::new(&schema, "schema.json", "binding.ts");

        prop_assert_eq!(generate_code(&options), generate_code(&options));
    }

    /// Property 7: kind ordering keeps schema order within each kind.
    #[test]
    fn prop_kind_order_is_stable(
        names in prop::collection::btree_set(arb_type_name(), 2..10)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut builder = Schema::builder();
        for (i, name) in names.iter().enumerate().rev() {
            builder = match i % 3 {
                0 => builder.object(ObjectType::new(name)),
                1 => builder.enumeration(EnumType::new(name, ["A"])),
                _ => builder.union(UnionType::new(name, ["A"])),
            };
        }
        let schema = builder.build();

        let ordered: Vec<&str> = ordered_types(&schema, DeclarationOrder::Kind)
            .iter()
            .map(|t| t.name())
            .collect();

        let schema_order: Vec<&str> = schema.types().map(|t| t.name()).collect();
        for kind in ["Enum", "Object", "Union"] {
            let in_output: Vec<&str> = ordered
                .iter()
                .copied()
                .filter(|name| schema.get_type(name).map(|t| t.kind().as_str()) == Some(kind))
                .collect();
            let in_schema: Vec<&str> = schema_order
                .iter()
                .copied()
                .filter(|name| schema.get_type(name).map(|t| t.kind().as_str()) == Some(kind))
                .collect();
            prop_assert_eq!(in_output, in_schema);
        }

        let kinds: Vec<&str> = ordered
            .iter()
            .filter_map(|name| schema.get_type(name).map(|t| t.kind().as_str()))
            .collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        prop_assert_eq!(kinds, sorted);
    }
}
