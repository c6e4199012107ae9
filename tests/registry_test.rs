use apigraph::config::ResolverConfig;
use apigraph::declaration::TypeDescriptor;
use apigraph::errors::ApiGraphError;
use apigraph::registry::{EndPointRegistry, ResolutionContext, TypeRegistry};
use apigraph::types::*;
use apigraph::typing::Type;

fn setup_types() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register("int", TypeId::Builtin(BuiltinId(0))).unwrap();
    registry.register("string", TypeId::Builtin(BuiltinId(1))).unwrap();
    registry.register("PaginatedList", TypeId::Class(ClassId(0))).unwrap();
    registry.register("Repository", TypeId::Class(ClassId(1))).unwrap();
    registry
        .register("Permissions", TypeId::Structure(StructureId(0)))
        .unwrap();
    registry
}

#[test]
fn test_type_lookup_returns_registered_identity() {
    let registry = setup_types();
    assert_eq!(registry.len(), 5);
    assert!(!registry.is_empty());
    assert_eq!(registry.get("Repository").unwrap(), TypeId::Class(ClassId(1)));
    assert_eq!(
        registry.get("Permissions").unwrap(),
        TypeId::Structure(StructureId(0))
    );
    assert!(registry.contains("int"));
    assert!(!registry.contains("Int"));
}

#[test]
fn test_repeated_lookups_yield_same_identity() {
    let registry = setup_types();
    let first = registry.resolve(&TypeDescriptor::scalar("Repository")).unwrap();
    let second = registry.resolve(&TypeDescriptor::scalar("Repository")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_type_is_rejected() {
    let mut registry = setup_types();
    let err = registry
        .register("Repository", TypeId::Class(ClassId(7)))
        .unwrap_err();
    assert!(
        matches!(err, ApiGraphError::DuplicateSymbol { ref kind, ref name } if kind == "type" && name == "Repository"),
        "got {err:?}"
    );
    // The first registration stays in place.
    assert_eq!(registry.get("Repository").unwrap(), TypeId::Class(ClassId(1)));
}

#[test]
fn test_unknown_type_is_unresolved() {
    let registry = setup_types();
    let err = registry.get("Organization").unwrap_err();
    assert!(matches!(err, ApiGraphError::UnresolvedSymbol { ref kind, .. } if kind == "type"));
    assert!(err.to_string().contains("Organization"));
}

#[test]
fn test_resolve_composite_descriptors() {
    let registry = setup_types();

    let list = registry
        .resolve(&TypeDescriptor::list_of(
            "PaginatedList",
            TypeDescriptor::scalar("Repository"),
        ))
        .unwrap();
    assert_eq!(
        list,
        Type::LinearCollection {
            container: Box::new(Type::Named(TypeId::Class(ClassId(0)))),
            content: Box::new(Type::Named(TypeId::Class(ClassId(1)))),
        }
    );

    let union = registry
        .resolve(&TypeDescriptor::Union {
            union: vec![
                TypeDescriptor::scalar("Repository"),
                TypeDescriptor::scalar("int"),
            ],
        })
        .unwrap();
    assert_eq!(
        union.underlying_types(),
        vec![TypeId::Class(ClassId(1)), TypeId::Builtin(BuiltinId(0))]
    );
}

#[test]
fn test_composite_with_unknown_member_fails() {
    let registry = setup_types();
    let err = registry
        .resolve(&TypeDescriptor::list_of(
            "PaginatedList",
            TypeDescriptor::scalar("Gist"),
        ))
        .unwrap_err();
    assert!(matches!(err, ApiGraphError::UnresolvedSymbol { ref name, .. } if name == "Gist"));
}

#[test]
fn test_end_point_ids_are_sequential() {
    let mut registry = EndPointRegistry::new();
    let a = registry.register(EndPointKey::new("GET", "/user")).unwrap();
    let b = registry
        .register(EndPointKey::new("PATCH", "/user"))
        .unwrap();
    assert_eq!(a, EndPointId(0));
    assert_eq!(b, EndPointId(1));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.key(b), Some(&EndPointKey::new("PATCH", "/user")));
}

#[test]
fn test_end_point_lookup_by_identifier() {
    let mut registry = EndPointRegistry::new();
    let id = registry
        .register(EndPointKey::new("GET", "/repos/:owner/:repo"))
        .unwrap();
    assert_eq!(
        registry.get_by_identifier("GET /repos/:owner/:repo").unwrap(),
        id
    );
    assert_eq!(
        registry
            .get(&EndPointKey::new("GET", "/repos/:owner/:repo"))
            .unwrap(),
        id
    );

    let err = registry
        .get_by_identifier("DELETE /repos/:owner/:repo")
        .unwrap_err();
    assert!(matches!(err, ApiGraphError::UnresolvedSymbol { ref kind, .. } if kind == "endpoint"));
}

#[test]
fn test_duplicate_end_point_is_rejected() {
    let mut registry = EndPointRegistry::new();
    registry.register(EndPointKey::new("GET", "/user")).unwrap();
    let err = registry
        .register(EndPointKey::new("GET", "/user"))
        .unwrap_err();
    assert!(
        matches!(err, ApiGraphError::DuplicateSymbol { ref kind, ref name } if kind == "endpoint" && name == "GET /user"),
        "got {err:?}"
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_context_class_lookup_rejects_non_classes() {
    let mut context = ResolutionContext::new(&ResolverConfig::default());
    context.types.register("int", TypeId::Builtin(BuiltinId(0))).unwrap();
    context
        .types
        .register("Repository", TypeId::Class(ClassId(3)))
        .unwrap();

    assert_eq!(context.class("Repository").unwrap(), ClassId(3));
    assert!(matches!(
        context.class("int"),
        Err(ApiGraphError::InvalidDeclaration { .. })
    ));
    assert!(matches!(
        context.class("Gist"),
        Err(ApiGraphError::UnresolvedSymbol { .. })
    ));
}
