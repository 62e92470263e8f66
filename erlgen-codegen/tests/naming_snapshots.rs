//! Snapshot tests for names resolved from a petstore-style schema.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fmt::Write;

use erlgen_codegen::{
    NameResolver, NamingSession, OperationMeta, Role, TypeMapper, post_process_operations,
};
use erlgen_core::TypeRef;
use erlgen_manifest::Manifest;

const MODELS: &[&str] = &["Pet", "Category", "order-item", "catch", "ApiResponse"];
const FIELDS: &[&str] = &["id", "category", "photo-urls", "end", "2nd_owner"];
const PARAMS: &[&str] = &["petId", "api_key", "when"];
const OPERATIONS: &[&str] = &["addPet", "receive", "find-by-tags"];
const APIS: &[&str] = &["pet", "store"];

/// Resolve every schema name the way a template pass would and render one
/// line per name.
fn render_names(session: &mut NamingSession) -> String {
    let mut out = String::new();
    for raw in MODELS {
        let name = session.resolve(raw, Role::ModelName);
        let file = session.resolve(raw, Role::ModelFilename);
        writeln!(out, "model {raw} -> {name} ({file})").unwrap();
    }
    for raw in FIELDS {
        let name = session.resolve(raw, Role::Variable);
        writeln!(out, "field {raw} -> {name}").unwrap();
    }
    for raw in PARAMS {
        let name = session.resolve(raw, Role::Parameter);
        writeln!(out, "param {raw} -> {name}").unwrap();
    }
    for raw in OPERATIONS {
        let name = session.resolve(raw, Role::OperationId);
        writeln!(out, "op {raw} -> {name}").unwrap();
    }
    for raw in APIS {
        let name = session.resolve(raw, Role::ApiName);
        let file = session.resolve(raw, Role::ApiFilename);
        writeln!(out, "api {raw} -> {name} ({file})").unwrap();
    }
    out
}

#[test]
fn test_petstore_names() {
    let mut session = NamingSession::default();
    let out = render_names(&mut session);

    insta::assert_snapshot!(out.trim_end(), @r"
    model Pet -> Pet (pet)
    model Category -> Category (category)
    model order-item -> OrderItem (order_item)
    model catch -> ModelCatch (model_catch)
    model ApiResponse -> ApiResponse (api_response)
    field id -> id
    field category -> category
    field photo-urls -> photoUrls
    field end -> end_
    field 2nd_owner -> var2ndOwner_
    param petId -> PetId
    param api_key -> ApiKey
    param when -> When_
    op addPet -> addPet
    op receive -> callReceive
    op find-by-tags -> findByTags
    api pet -> PetApi (pet_api)
    api store -> StoreApi (store_api)
    ");
}

#[test]
fn test_petstore_warnings() {
    let mut session = NamingSession::default();
    render_names(&mut session);

    let warnings: Vec<String> = session.warnings().map(|d| d.to_string()).collect();
    insta::assert_snapshot!(warnings.join("\n"), @r"
    warning: catch (reserved word) cannot be used as a model name. Renamed to ModelCatch
    warning: catch (reserved word) cannot be used as a model filename. Renamed to model_catch
    warning: end (reserved word) cannot be used as a variable name. Renamed to end_
    warning: 2nd_owner cannot start with a digit when used as a variable name. Renamed to var2ndOwner_
    warning: when (reserved word) cannot be used as a parameter name. Renamed to When_
    warning: receive (reserved word) cannot be used as a method name. Renamed to callReceive
    ");
}

#[test]
fn test_petstore_names_with_manifest_affixes() {
    let manifest: Manifest = r#"
        [package]
        name = "petstore"

        [models]
        prefix = "ps"
    "#
    .parse()
    .expect("Failed to parse manifest");
    let mut session = NamingSession::from_manifest(&manifest);

    assert_eq!(session.resolve("Pet", Role::ModelName), "PsPet");
    assert_eq!(session.resolve("catch", Role::ModelFilename), "ps_catch");
    // fields and operations ignore model affixes
    assert_eq!(session.resolve("Pet", Role::Variable), "pet");
    assert!(!session.has_warnings());
}

#[test]
fn test_petstore_type_declarations() {
    let mut session = NamingSession::default();
    let cases = [
        (TypeRef::array(TypeRef::primitive("string")), "[string()]"),
        (TypeRef::map(TypeRef::primitive("integer")), "#{string() => integer()}"),
        (TypeRef::model("Category"), "Category"),
        (TypeRef::array(TypeRef::model("catch")), "[ModelCatch]"),
        (TypeRef::primitive("DateTime"), "calendar:datetime()"),
        (
            TypeRef::map(TypeRef::array(TypeRef::model("order-item"))),
            "#{string() => [OrderItem]}",
        ),
    ];

    for (ty, expected) in cases {
        assert_eq!(session.type_declaration(&ty).unwrap(), expected, "{ty}");
    }
    assert_eq!(session.warning_count(), 1);
}

#[test]
fn test_type_graph_from_json() {
    let ty: TypeRef = serde_json::from_str(
        r#"{"kind": "map", "of": {"kind": "array", "of": {"kind": "primitive", "of": "integer"}}}"#,
    )
    .expect("Failed to parse type graph");

    let mapper = erlgen_codegen::ErlangTypeMapper::default();
    assert_eq!(mapper.map_type(&ty).unwrap(), "#{string() => [integer()]}");
}

#[test]
fn test_operations_pass() {
    let mut session = NamingSession::default();
    let operations: Vec<OperationMeta> = [("addPet", "POST"), ("receive", "GET"), ("find-by-tags", "Get")]
        .into_iter()
        .map(|(raw, method)| {
            OperationMeta::new(session.resolve(raw, Role::OperationId), method, "/pet")
        })
        .collect();

    let processed = post_process_operations(operations);
    let rendered: Vec<String> = processed
        .iter()
        .map(|op| format!("{} {}", op.http_method, op.operation_id))
        .collect();
    assert_eq!(rendered, ["post addPet", "get callReceive", "get findByTags"]);
    assert_eq!(post_process_operations(processed.clone()), processed);
}

#[test]
fn test_resolution_is_thread_independent() {
    let resolver = NameResolver::default();
    let names: Vec<&str> = MODELS.iter().chain(FIELDS).chain(OPERATIONS).copied().collect();

    let sequential: Vec<String> = names
        .iter()
        .map(|raw| resolver.identifier(raw, Role::ModelName))
        .collect();

    let resolver = &resolver;
    let parallel: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|&raw| scope.spawn(move || resolver.identifier(raw, Role::ModelName)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
