//! Demonstration and stress binary for the Amalgam merge-clone engine.

use std::time::Instant;

use amalgam_merge::{clone_object, merge_objects};
use amalgam_value::{from_json, Callable, Pattern, Record, Value, ValueMap, ValueSet};
use chrono::Utc;
use serde_json::json;

fn banner(title: &str) {
    println!();
    println!("============================================================");
    println!("  {title}");
    println!("============================================================");
}

fn main() {
    demo_record_merge();
    demo_sets_and_maps();
    demo_clone_independence();
    stress_pass();
    println!();
    println!("done");
}

fn demo_record_merge() {
    banner("RECORD MERGE");

    let defaults = from_json(&json!({
        "host": "localhost",
        "port": 8080,
        "limits": {"connections": 10, "timeout": 30},
    }));
    let defaults_record = defaults.as_record().unwrap();
    defaults_record.insert("started", Utc::now());
    defaults_record.insert(
        "host_pattern",
        Value::Pattern(Pattern::new(r"^[a-z0-9.-]+$").unwrap()),
    );
    defaults_record.insert(
        "greet",
        Value::Callable(Callable::new(|args| match args.first() {
            Some(Value::Text(name)) => Value::Text(format!("hello, {name}")),
            _ => Value::Null,
        })),
    );

    let overrides = from_json(&json!({
        "port": 9090,
        "verbose": true,
    }));

    let merged = merge_objects(&[defaults, overrides]).unwrap();
    println!("merged config: {merged}");

    let greeting = merged
        .as_record()
        .unwrap()
        .get("greet")
        .unwrap()
        .as_callable()
        .unwrap()
        .invoke(&[Value::from("amalgam")]);
    println!("callable survived the merge: {greeting}");
}

fn demo_sets_and_maps() {
    banner("SET UNION AND MAP UNION");

    let set1: ValueSet = [1, 2, 3].map(Value::from).into_iter().collect();
    let set2: ValueSet = [3, 4, 5].map(Value::from).into_iter().collect();
    let union = merge_objects(&[Value::Set(set1), Value::Set(set2)]).unwrap();
    println!("{{1, 2, 3}} + {{3, 4, 5}} = {union}");

    let john = Record::new();
    john.insert("name", "John Doe");
    let lily = Record::new();
    lily.insert("name", "Lily Bush");

    let roles1 = ValueMap::new();
    roles1.insert(Value::Record(john.clone()), "admin");
    let roles2 = ValueMap::new();
    roles2.insert(Value::Record(john.clone()), "owner");
    roles2.insert(Value::Record(lily), "editor");

    let roles = merge_objects(&[Value::Map(roles1), Value::Map(roles2)]).unwrap();
    println!("merged roles: {roles}");
    println!(
        "lookup by the original key handle: {:?}",
        roles.as_map().unwrap().get(&Value::Record(john))
    );
}

fn demo_clone_independence() {
    banner("CLONE INDEPENDENCE");

    let nested = Record::new();
    nested.insert("last", "Bodoni");
    let person = Record::new();
    person.insert("name", Value::Record(nested.clone()));

    let cloned = clone_object(&Value::Record(person.clone()));
    nested.insert("last", "Anderson");

    println!("source after mutation: {}", Value::Record(person));
    println!("clone, unaffected:     {cloned}");
}

fn stress_pass() {
    banner("STRESS PASS");

    // wide: two records with many colliding properties
    let wide_a = Record::new();
    let wide_b = Record::new();
    for i in 0..10_000 {
        wide_a.insert(format!("key_{i}"), i);
        wide_b.insert(format!("key_{i}"), i * 2);
    }
    let start = Instant::now();
    let merged = merge_objects(&[Value::Record(wide_a), Value::Record(wide_b)]).unwrap();
    println!(
        "wide merge: {} properties in {:?}",
        merged.as_record().unwrap().len(),
        start.elapsed()
    );

    // deep: a chain of nested records
    let mut chain = Value::from(0);
    for _ in 0..500 {
        let level = Record::new();
        level.insert("next", chain);
        chain = Value::Record(level);
    }
    let start = Instant::now();
    let cloned = clone_object(&chain);
    println!("deep clone of a 500-level chain in {:?}", start.elapsed());
    drop(cloned);

    // cyclic: a ring of records, cloned without hanging
    let first = Record::new();
    let mut prev = first.clone();
    for i in 0..1_000 {
        let node = Record::new();
        node.insert("id", i);
        prev.insert("next", Value::Record(node.clone()));
        prev = node;
    }
    prev.insert("next", Value::Record(first.clone()));
    let start = Instant::now();
    let cloned = clone_object(&Value::Record(first));
    println!("clone of a 1000-node ring in {:?}", start.elapsed());
    drop(cloned);
}
