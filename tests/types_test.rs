use apigraph::declaration::TypeDescriptor;
use apigraph::errors::ApiGraphError;
use apigraph::graph::value::{Value, ValueKind};
use apigraph::types::*;

#[test]
fn factory_category_as_str_roundtrip() {
    for category in [FactoryCategory::Attribute, FactoryCategory::Method] {
        let s = category.as_str();
        let parsed = FactoryCategory::from_str(s)
            .unwrap_or_else(|| panic!("failed to parse FactoryCategory from '{}'", s));
        assert_eq!(category, parsed, "roundtrip failed for FactoryCategory::{}", s);
    }
}

#[test]
fn factory_category_from_str_unknown_returns_none() {
    assert!(FactoryCategory::from_str("constructor").is_none());
    assert!(FactoryCategory::from_str("").is_none());
}

#[test]
fn value_kind_as_str_roundtrip() {
    let kinds = vec![
        ValueKind::Attribute,
        ValueKind::EndPoint,
        ValueKind::Parameter,
        ValueKind::RepositoryOwner,
        ValueKind::RepositoryName,
    ];

    for kind in kinds {
        let s = kind.as_str();
        let parsed =
            ValueKind::from_str(s).unwrap_or_else(|| panic!("failed to parse ValueKind from '{}'", s));
        assert_eq!(kind, parsed, "roundtrip failed for ValueKind::{}", s);
    }
}

#[test]
fn value_kind_from_str_unknown_returns_none() {
    assert!(ValueKind::from_str("CallbackValue").is_none());
    assert!(ValueKind::from_str("Attribute").is_none());
}

#[test]
fn value_reports_consumed_parameter() {
    let parameter = Value::Parameter {
        parameter: "sort".to_string(),
    };
    assert_eq!(parameter.kind(), ValueKind::Parameter);
    assert_eq!(parameter.parameter(), Some("sort"));
    assert_eq!(parameter.repository(), None);

    let owner = Value::RepositoryOwner {
        repository: "repo".to_string(),
    };
    assert_eq!(owner.parameter(), None);
    assert_eq!(owner.repository(), Some("repo"));

    assert_eq!(Value::EndPoint.parameter(), None);
    assert_eq!(Value::EndPoint.repository(), None);
}

#[test]
fn factory_category_matches_variant() {
    assert_eq!(
        Factory::Attribute(AttributeId(3)).category(),
        FactoryCategory::Attribute
    );
    assert_eq!(Factory::Method(MethodId(0)).category(), FactoryCategory::Method);
}

#[test]
fn type_category_as_str() {
    assert_eq!(TypeCategory::Class.as_str(), "class");
    assert_eq!(TypeCategory::Struct.as_str(), "struct");
}

#[test]
fn attributed_id_converts_to_type_id() {
    let class: TypeId = AttributedId::Class(ClassId(2)).into();
    assert_eq!(class, TypeId::Class(ClassId(2)));
    assert_eq!(class.as_attributed(), Some(AttributedId::Class(ClassId(2))));

    let structure: TypeId = AttributedId::Structure(StructureId(1)).into();
    assert!(structure.is_attributed());

    let builtin = TypeId::Builtin(BuiltinId(0));
    assert!(!builtin.is_attributed());
    assert_eq!(builtin.as_attributed(), None);
}

#[test]
fn end_point_key_parse() {
    let key = EndPointKey::parse("GET /repos/:owner/:repo").unwrap();
    assert_eq!(key.verb, "GET");
    assert_eq!(key.url, "/repos/:owner/:repo");
    assert_eq!(key.to_string(), "GET /repos/:owner/:repo");

    let padded = EndPointKey::parse("  PATCH   /user ").unwrap();
    assert_eq!(padded, EndPointKey::new("PATCH", "/user"));
}

#[test]
fn end_point_key_parse_rejects_missing_url() {
    for bad in ["GET", "", "   "] {
        let err = EndPointKey::parse(bad).unwrap_err();
        assert!(
            matches!(err, ApiGraphError::InvalidDeclaration { .. }),
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn end_point_keys_order_by_url_then_verb() {
    let mut keys = vec![
        EndPointKey::new("PATCH", "/user"),
        EndPointKey::new("GET", "/users/:username"),
        EndPointKey::new("GET", "/user"),
        EndPointKey::new("DELETE", "/user/emails"),
    ];
    keys.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    let ordered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    assert_eq!(
        ordered,
        vec![
            "GET /user",
            "PATCH /user",
            "DELETE /user/emails",
            "GET /users/:username",
        ]
    );
}

#[test]
fn url_template_rewrites_named_parameters() {
    assert_eq!(url_template("/repos/:owner/:repo"), "/repos/{owner}/{repo}");
    assert_eq!(
        url_template("/repos/:owner/:repo/git/refs/:ref"),
        "/repos/{owner}/{repo}/git/refs/{ref}"
    );
    assert_eq!(url_template("/user"), "/user");
}

#[test]
fn url_template_leaves_unrecognized_colons() {
    assert_eq!(url_template("/a/:/b"), "/a/:/b");
    assert_eq!(url_template("/a/:Owner"), "/a/:Owner");
    assert_eq!(url_template("/a/:name_x"), "/a/{name}_x");
}

#[test]
fn type_descriptor_from_json() {
    let scalar: TypeDescriptor = serde_json::from_str("\"Repository\"").unwrap();
    assert_eq!(scalar, TypeDescriptor::scalar("Repository"));

    let list: TypeDescriptor =
        serde_json::from_str(r#"{"container": "PaginatedList", "content": "Repository"}"#).unwrap();
    assert_eq!(
        list,
        TypeDescriptor::list_of("PaginatedList", TypeDescriptor::scalar("Repository"))
    );
    assert_eq!(list.to_string(), "PaginatedList[Repository]");

    let mapping: TypeDescriptor =
        serde_json::from_str(r#"{"container": "dict", "key": "string", "value": "int"}"#).unwrap();
    assert_eq!(mapping.to_string(), "dict[string, int]");

    let union: TypeDescriptor =
        serde_json::from_str(r#"{"union": ["Repository", "int"]}"#).unwrap();
    assert_eq!(union.to_string(), "Repository | int");
}
