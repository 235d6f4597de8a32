pub fn code_fixture() -> &'static str {
    return r#"fn greet(name: &str) -> String {
    return format!("Hello, {name}!");
}

fn main() {
    println!("{}", greet("world"));
}
"#;
}

pub fn diff_fixture() -> (&'static str, &'static str) {
    let old_text = r#"{
  "name": "viewer",
  "private": false
}
"#;
    let new_text = r#"{
  "name": "viewer",
  "private": true,
  "version": "1.0.0"
}
"#;

    return (old_text, new_text);
}
