use apigraph::config::ResolverConfig;
use apigraph::declaration::{RawOrigin, RawParameter, TypeDescriptor};
use apigraph::errors::ApiGraphError;
use apigraph::registry::ResolutionContext;
use apigraph::resolution::inference::{infer_parameter_type, reference_parameter};
use apigraph::types::*;
use apigraph::typing::Type;

const INT: TypeId = TypeId::Builtin(BuiltinId(0));
const STRING: TypeId = TypeId::Builtin(BuiltinId(1));
const STRING_PAIR: TypeId = TypeId::Builtin(BuiltinId(2));
const REPOSITORY: TypeId = TypeId::Class(ClassId(0));

fn setup_context() -> ResolutionContext {
    let mut context = ResolutionContext::new(&ResolverConfig::default());
    context.types.register("int", INT).unwrap();
    context.types.register("string", STRING).unwrap();
    context.types.register("(string, string)", STRING_PAIR).unwrap();
    context.types.register("Repository", REPOSITORY).unwrap();
    context
}

fn origin(attribute: &str) -> RawOrigin {
    RawOrigin {
        type_name: "Repository".to_string(),
        attribute: attribute.to_string(),
    }
}

fn inferred_parameter(name: &str, attribute: &str) -> RawParameter {
    RawParameter {
        name: name.to_string(),
        ty: None,
        origin: Some(origin(attribute)),
        optional: false,
    }
}

#[test]
fn test_id_origin_accepts_object_or_integer() {
    let context = setup_context();
    let ty = infer_parameter_type(&context, &origin("id")).unwrap();
    assert_eq!(
        ty,
        Type::Union(vec![Type::Named(REPOSITORY), Type::Named(INT)])
    );
}

#[test]
fn test_full_name_origin_accepts_object_integer_or_pair() {
    let context = setup_context();
    let ty = infer_parameter_type(&context, &origin("full_name")).unwrap();
    assert_eq!(
        ty,
        Type::Union(vec![
            Type::Named(REPOSITORY),
            Type::Named(INT),
            Type::Named(STRING_PAIR),
        ])
    );
}

#[test]
fn test_other_origin_accepts_object_or_string() {
    let context = setup_context();
    for attribute in ["login", "name", "sha"] {
        let ty = infer_parameter_type(&context, &origin(attribute)).unwrap();
        assert_eq!(
            ty,
            Type::Union(vec![Type::Named(REPOSITORY), Type::Named(STRING)]),
            "origin attribute {attribute}"
        );
    }
}

#[test]
fn test_origin_type_must_be_registered() {
    let context = setup_context();
    let raw = RawOrigin {
        type_name: "Team".to_string(),
        attribute: "id".to_string(),
    };
    let err = infer_parameter_type(&context, &raw).unwrap_err();
    assert!(matches!(err, ApiGraphError::UnresolvedSymbol { ref name, .. } if name == "Team"));
}

#[test]
fn test_inferred_parameter_records_origin() {
    let context = setup_context();
    let parameter =
        reference_parameter(&context, &inferred_parameter("repo", "full_name"), "Github.get_repo")
            .unwrap();
    assert_eq!(parameter.name(), "repo");
    assert_eq!(parameter.origin(), Some("full_name"));
    assert!(!parameter.is_optional());
    assert_eq!(parameter.ty().underlying_types(), vec![REPOSITORY, INT, STRING_PAIR]);
}

#[test]
fn test_declared_type_wins_over_origin() {
    let context = setup_context();
    let raw = RawParameter {
        ty: Some(TypeDescriptor::scalar("int")),
        optional: true,
        ..inferred_parameter("repo", "full_name")
    };
    let parameter = reference_parameter(&context, &raw, "Github.get_repo").unwrap();
    assert_eq!(parameter.ty(), &Type::Named(INT));
    assert_eq!(parameter.ty().as_named(), Some(INT));
    assert_eq!(parameter.origin(), None);
    assert!(parameter.is_optional());
}

#[test]
fn test_parameter_without_type_or_origin_is_invalid() {
    let context = setup_context();
    let raw = RawParameter {
        name: "repo".to_string(),
        ty: None,
        origin: None,
        optional: false,
    };
    let err = reference_parameter(&context, &raw, "Github.get_repo").unwrap_err();
    match err {
        ApiGraphError::InvalidDeclaration { message } => {
            assert!(message.contains("repo"));
            assert!(message.contains("Github.get_repo"));
        }
        other => panic!("expected InvalidDeclaration, got {other:?}"),
    }
}
