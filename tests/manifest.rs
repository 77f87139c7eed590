// wordcount-plugin — Manifest sanity checks
//
// `plugin.json` is consumed by the host's plugin loader, not by this crate,
// so the only guarantee we can give is that it stays well-formed and keeps
// declaring the tool the binary implements.

use serde_json::Value;

fn manifest() -> Value {
    let raw = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/plugin.json"))
        .expect("plugin.json missing");
    serde_json::from_str(&raw).expect("plugin.json is not valid JSON")
}

#[test]
fn test_manifest_declares_word_count_tool() {
    let manifest = manifest();
    let plugins = manifest["plugins"].as_array().expect("plugins array");
    assert_eq!(plugins.len(), 1);

    let plugin = &plugins[0];
    assert_eq!(plugin["name"], "word_count");
    assert_eq!(plugin["type"], "script");
    assert_eq!(plugin["command"], "wordcount-plugin");
    assert!(!plugin["description"].as_str().unwrap_or("").is_empty());
}

#[test]
fn test_manifest_schema_requires_file() {
    let manifest = manifest();
    let schema_text = manifest["plugins"][0]["parameters"]
        .as_str()
        .expect("parameters is a JSON-schema string");

    let schema: Value = serde_json::from_str(schema_text).expect("embedded schema parses");
    assert_eq!(schema["type"], "object");
    assert!(schema["properties"]["file"].is_object());
    assert!(schema["properties"]["ignore_case"].is_object());
    assert!(schema["properties"]["pattern"].is_object());

    let required = schema["required"].as_array().expect("required array");
    assert_eq!(required, &vec![Value::from("file")]);
}
