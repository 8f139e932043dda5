//! End-to-end tests of the public API over realistic selections.

use textops_core::{
    Delims, EmptyLines, RemoveWs, Trim, hex_dump, instances, normalize, number_lines,
    remove_empty_lines, remove_ws, translate, trim,
};

const COMMENTED_CONFIG: &str = r#"
// Build configuration.
{
    "name": "widget", // display name
    "sizes": [1, 2, 3,],
    /* Dimensions are in dots.
       Negative values are invalid. */
    "width": 609,
    "height": 406,
}
"#;

#[test]
fn normalize_full_config_round_trip() {
    let out = normalize(COMMENTED_CONFIG, 4).expect("config should normalize");
    let v: serde_json::Value = serde_json::from_str(&out).expect("output is strict JSON");

    // Data survives.
    assert_eq!(v["name"], "widget");
    assert_eq!(v["sizes"], serde_json::json!([1, 2, 3]));
    assert_eq!(v["width"], 609);
    assert_eq!(v["height"], 406);

    // All three comments survive as synthetic members, uniquely keyed.
    let obj = v.as_object().unwrap();
    let comment_keys: Vec<&String> = obj.keys().filter(|k| k.starts_with("//")).collect();
    assert_eq!(comment_keys.len(), 3, "output was: {out}");

    // And the result is a fixed point.
    let again = normalize(&out, 4).unwrap();
    assert_eq!(out, again);
}

#[test]
fn normalize_error_points_into_the_selection() {
    // A missing value, several lines into the selection.
    let input = "{\n  \"a\": 1,\n  \"b\": ,\n}";
    let err = normalize(input, 4).unwrap_err();

    let original: Vec<char> = input.chars().collect();
    assert_eq!(original[err.position], ',', "position should hit the comma");

    let rendered = err.to_string();
    assert!(rendered.starts_with("Json Error: "));
    assert!(rendered.contains("---------here----------"));
}

#[test]
fn cleanup_pipeline() {
    let messy = "  fn main()   {  \n\n\n\t\tprintln!(\"hi\");   \n}\n";
    let trimmed = trim(messy, Trim::Trailing);
    let squeezed = remove_empty_lines(&trimmed, EmptyLines::RemoveAll);
    assert_eq!(squeezed, "  fn main()   {\n\t\tprintln!(\"hi\");\n}\n");

    let flat = remove_ws(&squeezed, RemoveWs::Normalize);
    assert_eq!(flat, " fn main() {\n\t\tprintln!(\"hi\");\n}\n");
}

#[test]
fn translate_and_instances_agree_on_positions() {
    let text = "ok\nbad\u{1F30B}here\tend";
    let t = translate(text, &Delims::default());
    assert_eq!(t.text, "ok\nbad<<CP1F30B>>hereTABend\n");
    assert_eq!(t.unicode.len(), 1);
    assert_eq!(t.control.len(), 1);

    let found = instances(text, 100);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].to_string(), "line:2 col:4 val:0x1F30B");
    assert_eq!(found[1].to_string(), "line:2 col:9 val:TAB");
}

#[test]
fn hex_dump_then_number_lines() {
    let dump = hex_dump("0123456789abcdef0123456789abcdef01");
    let numbered = number_lines(&dump);
    let lines: Vec<&str> = numbered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("1 0x0000"));
    assert!(lines[2].starts_with("3 0x0020"));
}
