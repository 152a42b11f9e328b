//! Manifest checks: the native build of `site` stays free of browser bindings.
//!
//! Browser crates are optional and only switched on by `hydrate`. That
//! includes the canvas half of `particles`, whose field and core the pure
//! hero code uses natively.

use std::fs;

fn manifest() -> String {
    fs::read_to_string("Cargo.toml").unwrap_or_else(|err| panic!("read Cargo.toml from the crate root: {err}"))
}

fn dependency_line<'a>(manifest: &'a str, name: &str) -> Option<&'a str> {
    let prefix = format!("{name} = ");
    manifest.lines().find(|line| line.starts_with(&prefix))
}

#[test]
fn particles_is_pulled_in_without_its_canvas_half() {
    let manifest = manifest();
    let Some(line) = dependency_line(&manifest, "particles") else {
        panic!("particles dependency missing");
    };
    assert!(line.contains("default-features = false"), "particles must opt out of defaults: {line}");
}

#[test]
fn hydrate_enables_the_particle_canvas() {
    assert!(manifest().contains("\"particles/canvas\""));
}

#[test]
fn browser_bindings_are_optional() {
    let manifest = manifest();
    for name in ["wasm-bindgen", "web-sys", "js-sys", "gloo-timers", "console_log"] {
        let Some(line) = dependency_line(&manifest, name) else {
            panic!("{name} dependency missing");
        };
        assert!(line.contains("optional = true"), "{name} must be optional: {line}");
    }
}
