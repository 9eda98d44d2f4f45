//! JSON builders shaped like the parser's output.

#![allow(dead_code)]

use cythoner_emitter::{Printer, PrinterOptions};
use cythoner_syntax::{Module, Stmt};
use serde_json::{Value, json};

pub fn name(id: &str) -> Value {
    json!({ "_type": "Name", "id": id, "ctx": { "_type": "Load" } })
}

pub fn int(value: i64) -> Value {
    json!({ "_type": "Constant", "value": { "kind": "int", "value": value.to_string() } })
}

pub fn string(value: &str) -> Value {
    json!({ "_type": "Constant", "value": { "kind": "str", "value": value } })
}

pub fn call(func: Value, args: Vec<Value>) -> Value {
    json!({ "_type": "Call", "func": func, "args": args, "keywords": [] })
}

pub fn attribute(value: Value, attr: &str) -> Value {
    json!({ "_type": "Attribute", "value": value, "attr": attr })
}

pub fn binop(left: Value, op: &str, right: Value) -> Value {
    json!({ "_type": "BinOp", "left": left, "op": { "_type": op }, "right": right })
}

pub fn compare(left: Value, ops: &[&str], comparators: Vec<Value>) -> Value {
    let ops: Vec<Value> = ops.iter().map(|op| json!({ "_type": op })).collect();
    json!({ "_type": "Compare", "left": left, "ops": ops, "comparators": comparators })
}

/// A statement node of kind `kind` at `lineno`/`col_offset` with `fields`.
pub fn stmt(kind: &str, lineno: u32, col_offset: u32, fields: Value) -> Value {
    let mut node = json!({ "_type": kind, "lineno": lineno, "col_offset": col_offset });
    if let (Some(node), Some(fields)) = (node.as_object_mut(), fields.as_object()) {
        for (key, value) in fields {
            node.insert(key.clone(), value.clone());
        }
    }
    node
}

pub fn pass(lineno: u32, col_offset: u32) -> Value {
    stmt("Pass", lineno, col_offset, json!({}))
}

pub fn expr_stmt(lineno: u32, col_offset: u32, value: Value) -> Value {
    stmt("Expr", lineno, col_offset, json!({ "value": value }))
}

pub fn assign(lineno: u32, col_offset: u32, target: &str, value: Value) -> Value {
    stmt(
        "Assign",
        lineno,
        col_offset,
        json!({ "targets": [name(target)], "value": value }),
    )
}

pub fn ret(lineno: u32, col_offset: u32, value: Value) -> Value {
    stmt("Return", lineno, col_offset, json!({ "value": value }))
}

pub fn param(arg: &str, annotation: Option<&str>) -> Value {
    json!({ "_type": "arg", "arg": arg, "annotation": annotation.map(name) })
}

pub fn function(
    lineno: u32,
    col_offset: u32,
    fn_name: &str,
    params: Vec<Value>,
    returns: Option<&str>,
    decorators: Vec<Value>,
    body: Vec<Value>,
) -> Value {
    stmt(
        "FunctionDef",
        lineno,
        col_offset,
        json!({
            "name": fn_name,
            "args": {
                "_type": "arguments",
                "posonlyargs": [],
                "args": params,
                "kwonlyargs": [],
                "kw_defaults": [],
                "defaults": [],
            },
            "body": body,
            "decorator_list": decorators,
            "returns": returns.map(name),
        }),
    )
}

pub fn class_def(lineno: u32, col_offset: u32) -> Value {
    stmt(
        "ClassDef",
        lineno,
        col_offset,
        json!({ "name": "Point", "bases": [], "body": [pass(lineno + 1, col_offset + 4)] }),
    )
}

pub fn to_stmt(node: Value) -> Stmt {
    serde_json::from_value(node).expect("valid statement")
}

pub fn to_module(body: Vec<Value>) -> Module {
    serde_json::from_value(json!({ "_type": "Module", "body": body, "type_ignores": [] }))
        .expect("valid module")
}

/// Render a single statement with default options.
pub fn render(node: Value) -> String {
    Printer::default()
        .render_statement(&to_stmt(node))
        .expect("render succeeds")
        .expect("statement is supported")
}

pub fn lenient() -> Printer {
    Printer::new(PrinterOptions {
        skip_unsupported: true,
    })
}
