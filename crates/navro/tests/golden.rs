use std::collections::HashMap;

use expect_test::expect;
use navro::{Options, Reflect, derive, generate};

#[derive(Reflect)]
struct AnotherType {
    list: Vec<String>,
    bits: Vec<u8>,
    fix: [i64; 3],
    arraymap: Vec<HashMap<String, i64>>,
}

#[derive(Reflect)]
struct SomeMore {
    name: String,
}

#[derive(Reflect)]
struct SomeType {
    num: i64,
    amap: HashMap<String, i64>,
    another: AnotherType,
    some_more: SomeMore,
    arraystr: Vec<SomeMore>,
}

#[derive(Reflect)]
struct Pointer {
    r#in: Option<i64>,
}

#[derive(Reflect)]
struct StructPointer {
    #[avro(tag = "P")]
    p: Vec<Option<Pointer>>,
    #[avro(tag = "PND")]
    pnd: Option<Pointer>,
}

#[derive(Reflect)]
struct TreeNode {
    value: i64,
    children: Vec<TreeNode>,
    parent: Option<Box<TreeNode>>,
}

fn render<T: Reflect>() -> String {
    derive::<T>(&Options::default())
        .expect("derive failed")
        .render(false)
}

#[test]
fn schema_snapshot_pointer_pretty() {
    let (schema, _) = navro::generate_with(
        &Pointer { r#in: None },
        &Options::new().with_pretty(true),
    )
    .expect("generate failed");

    expect![[r#"{
  "type": "record",
  "name": "Pointer",
  "fields": [
    {
      "name": "in",
      "default": null,
      "type": [
        "null",
        "long"
      ]
    }
  ]
}"#]]
    .assert_eq(&schema);
}

#[test]
fn schema_snapshot_struct_pointer() {
    expect![[r#"{"type":"record","name":"StructPointer","fields":[{"name":"P","type":{"type":"array","items":["null",{"type":"record","name":"Pointer","fields":[{"name":"in","default":null,"type":["null","long"]}]}]}},{"name":"PND","default":null,"type":["null","Pointer"]}]}"#]]
    .assert_eq(&render::<StructPointer>());
}

#[test]
fn schema_snapshot_collections() {
    expect![[r#"{"type":"record","name":"AnotherType","fields":[{"name":"list","type":{"type":"array","items":"string"}},{"name":"bits","type":"bytes"},{"name":"fix","type":{"type":"array","items":"long"}},{"name":"arraymap","type":{"type":"array","items":{"type":"map","values":"long"}}}]}"#]]
    .assert_eq(&render::<AnotherType>());
}

#[test]
fn schema_snapshot_nested_records() {
    expect![[r#"{"type":"record","name":"SomeType","fields":[{"name":"num","type":"long"},{"name":"amap","type":{"type":"map","values":"long"}},{"name":"another","type":{"type":"record","name":"AnotherType","fields":[{"name":"list","type":{"type":"array","items":"string"}},{"name":"bits","type":"bytes"},{"name":"fix","type":{"type":"array","items":"long"}},{"name":"arraymap","type":{"type":"array","items":{"type":"map","values":"long"}}}]}},{"name":"some_more","type":{"type":"record","name":"SomeMore","fields":[{"name":"name","type":"string"}]}},{"name":"arraystr","type":{"type":"array","items":"SomeMore"}}]}"#]]
    .assert_eq(&render::<SomeType>());
}

#[test]
fn schema_snapshot_self_referential() {
    expect![[r#"{"type":"record","name":"TreeNode","fields":[{"name":"value","type":"long"},{"name":"children","type":{"type":"array","items":"TreeNode"}},{"name":"parent","default":null,"type":["null","TreeNode"]}]}"#]]
    .assert_eq(&render::<TreeNode>());
}

#[test]
fn schema_snapshot_primitive_roots() {
    let rendered = [
        generate("some string").expect("string").0,
        generate(&10i64).expect("long").0,
        generate(&0.48f64).expect("double").0,
        generate(&vec![1i64, 2, 3]).expect("array").0,
    ]
    .join("\n");

    expect![[r#"{"type":"string"}
{"type":"long"}
{"type":"double"}
{"type":"array","items":"long"}"#]]
    .assert_eq(&rendered);
}
