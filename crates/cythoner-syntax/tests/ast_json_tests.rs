//! Deserialization of parser JSON into the syntax tree.

use cythoner_syntax::{
    Arguments, CmpOperator, Expr, Literal, Module, Operator, StmtKind, SyntaxError, parse_json,
};
use serde_json::json;

fn module(body: serde_json::Value) -> Module {
    serde_json::from_value(json!({ "_type": "Module", "body": body, "type_ignores": [] }))
        .expect("valid module")
}

fn name(id: &str) -> serde_json::Value {
    json!({ "_type": "Name", "id": id, "ctx": { "_type": "Load" } })
}

#[test]
fn test_assignment_keeps_position() {
    let tree = module(json!([{
        "_type": "Assign",
        "lineno": 3,
        "col_offset": 4,
        "targets": [name("x")],
        "value": { "_type": "Constant", "value": { "kind": "int", "value": "1" } },
    }]));

    let stmt = &tree.body[0];
    assert_eq!(stmt.lineno, 3);
    assert_eq!(stmt.col_offset, 4);
    let StmtKind::Assign { targets, value } = &stmt.kind else {
        panic!("expected assignment, got {:?}", stmt.kind);
    };
    assert_eq!(targets[0].as_name(), Some("x"));
    assert_eq!(
        value,
        &Expr::Constant {
            value: Literal::Int("1".to_string())
        }
    );
}

#[test]
fn test_unknown_statement_kind_is_unsupported() {
    let tree = module(json!([{
        "_type": "ClassDef",
        "lineno": 1,
        "col_offset": 0,
        "name": "Point",
        "bases": [],
        "body": [{ "_type": "Pass", "lineno": 2, "col_offset": 4 }],
    }]));

    assert_eq!(tree.body[0].kind, StmtKind::Unsupported);
    assert_eq!(tree.body[0].lineno, 1);
}

#[test]
fn test_unknown_expression_kind_is_unsupported() {
    let tree = module(json!([{
        "_type": "Expr",
        "lineno": 1,
        "col_offset": 0,
        "value": { "_type": "Lambda", "args": {}, "body": name("x") },
    }]));

    let StmtKind::Expr { value } = &tree.body[0].kind else {
        panic!("expected expression statement");
    };
    assert_eq!(value, &Expr::Unsupported);
}

#[test]
fn test_unmapped_operator_fails_to_load() {
    let text = json!({
        "_type": "Module",
        "body": [{
            "_type": "Expr",
            "lineno": 1,
            "col_offset": 0,
            "value": {
                "_type": "BinOp",
                "left": name("a"),
                "op": { "_type": "MatMult" },
                "right": name("b"),
            },
        }],
    })
    .to_string();

    let err = parse_json(&text).expect_err("MatMult has no symbol");
    assert!(matches!(err, SyntaxError::Json(_)));
}

#[test]
fn test_every_operator_kind_deserializes() {
    for op in Operator::ALL {
        let tag = format!("{op:?}");
        let parsed: Operator = serde_json::from_value(json!({ "_type": tag })).unwrap();
        assert_eq!(parsed, op);
    }
    for op in CmpOperator::ALL {
        let tag = format!("{op:?}");
        let parsed: CmpOperator = serde_json::from_value(json!({ "_type": tag })).unwrap();
        assert_eq!(parsed, op);
    }
}

#[test]
fn test_literal_kinds() {
    let cases = [
        (json!({ "kind": "str", "value": "hi" }), Literal::Str("hi".into())),
        (json!({ "kind": "float", "value": "1.5" }), Literal::Float("1.5".into())),
        (json!({ "kind": "bool", "value": true }), Literal::Bool(true)),
        (json!({ "kind": "none", "value": null }), Literal::None),
        (json!({ "kind": "ellipsis", "value": null }), Literal::Ellipsis),
        (json!({ "kind": "bytes", "value": "b'x'" }), Literal::Bytes("b'x'".into())),
    ];
    for (value, expected) in cases {
        let literal: Literal = serde_json::from_value(value).unwrap();
        assert_eq!(literal, expected);
    }
}

#[test]
fn test_function_definition_fields() {
    let tree = module(json!([{
        "_type": "FunctionDef",
        "lineno": 1,
        "col_offset": 0,
        "name": "scale",
        "args": {
            "_type": "arguments",
            "posonlyargs": [],
            "args": [
                { "_type": "arg", "arg": "x", "annotation": name("int") },
                { "_type": "arg", "arg": "k", "annotation": null },
            ],
            "vararg": null,
            "kwonlyargs": [],
            "kw_defaults": [],
            "kwarg": null,
            "defaults": [{ "_type": "Constant", "value": { "kind": "int", "value": "2" } }],
        },
        "body": [{ "_type": "Pass", "lineno": 2, "col_offset": 4 }],
        "decorator_list": [],
        "returns": name("int"),
        "type_comment": null,
    }]));

    let StmtKind::FunctionDef(def) = &tree.body[0].kind else {
        panic!("expected function definition");
    };
    assert_eq!(def.name, "scale");
    assert_eq!(def.returns.as_ref().and_then(Expr::as_name), Some("int"));

    let params: Vec<_> = def
        .args
        .positional()
        .map(|(arg, default)| (arg.arg.as_str(), default.is_some()))
        .collect();
    assert_eq!(params, vec![("x", false), ("k", true)]);
    assert_eq!(def.body[0].col_offset, 4);
}

#[test]
fn test_relative_import_without_module() {
    let tree = module(json!([{
        "_type": "ImportFrom",
        "lineno": 1,
        "col_offset": 0,
        "module": null,
        "names": [
            { "_type": "alias", "name": "foo", "asname": null },
            { "_type": "alias", "name": "bar", "asname": null },
        ],
        "level": 1,
    }]));

    let StmtKind::ImportFrom { module, names, level } = &tree.body[0].kind else {
        panic!("expected import-from");
    };
    assert_eq!(module, &None);
    assert_eq!(names.len(), 2);
    assert_eq!(*level, Some(1));
}

#[test]
fn test_keyword_only_defaults_align() {
    let args: Arguments = serde_json::from_value(json!({
        "_type": "arguments",
        "posonlyargs": [],
        "args": [],
        "vararg": { "_type": "arg", "arg": "rest", "annotation": null },
        "kwonlyargs": [
            { "_type": "arg", "arg": "a", "annotation": null },
            { "_type": "arg", "arg": "b", "annotation": null },
        ],
        "kw_defaults": [null, { "_type": "Constant", "value": { "kind": "int", "value": "3" } }],
        "kwarg": { "_type": "arg", "arg": "kw", "annotation": null },
        "defaults": [],
    }))
    .unwrap();

    assert_eq!(args.vararg.as_ref().map(|arg| arg.arg.as_str()), Some("rest"));
    assert_eq!(args.kwarg.as_ref().map(|arg| arg.arg.as_str()), Some("kw"));
    let keyword_only: Vec<_> = args
        .keyword_only()
        .map(|(arg, default)| (arg.arg.as_str(), default.is_some()))
        .collect();
    assert_eq!(keyword_only, vec![("a", false), ("b", true)]);
}
