// Host-side tests for the DOM contract constants and the backdrop shader.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

const BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

fn is_css_ident(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with(|c: char| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[test]
fn mount_ids_are_distinct_css_identifiers() {
    assert!(is_css_ident(BACKDROP_MOUNT_ID));
    assert!(is_css_ident(CAROUSEL_ID));
    assert_ne!(BACKDROP_MOUNT_ID, CAROUSEL_ID);
}

#[test]
fn generated_class_names_are_distinct() {
    let classes = [
        BACKDROP_CANVAS_CLASS,
        CAROUSEL_STRIP_CLASS,
        CAROUSEL_ITEM_CLASS,
        DRAGGING_CLASS,
    ];
    for (i, a) in classes.iter().enumerate() {
        assert!(is_css_ident(a), "bad class {a}");
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn backdrop_canvas_sits_behind_content_and_ignores_pointer() {
    assert!(BACKDROP_CANVAS_STYLE.contains("position:fixed"));
    assert!(BACKDROP_CANVAS_STYLE.contains("pointer-events:none"));
    assert!(BACKDROP_CANVAS_STYLE.contains("z-index:-"));
    assert!(BACKDROP_CANVAS_STYLE.contains("width:100vw"));
    assert!(BACKDROP_CANVAS_STYLE.contains("height:100vh"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn surface_is_never_zero_sized() {
    assert!(MIN_SURFACE_PX >= 1);
}

#[test]
fn shader_declares_pipeline_entry_points() {
    for entry in ["fn vs_particle", "fn vs_solid", "fn fs_main"] {
        assert!(BACKDROP_WGSL.contains(entry), "missing {entry}");
    }
    assert_eq!(BACKDROP_WGSL.matches("@vertex").count(), 2);
    assert_eq!(BACKDROP_WGSL.matches("@fragment").count(), 1);
}

#[test]
fn shader_uniform_block_matches_host_layout() {
    // three mat4 followed by three vec4, in upload order
    let start = BACKDROP_WGSL
        .find("struct SceneUniforms")
        .expect("uniform struct");
    let body = &BACKDROP_WGSL[start..];
    let end = body.find("};").expect("struct end");
    let fields: Vec<&str> = body[..end]
        .lines()
        .map(str::trim)
        .filter(|l| l.ends_with(',') && !l.starts_with("//"))
        .collect();
    assert_eq!(
        fields,
        [
            "projection: mat4x4<f32>,",
            "view: mat4x4<f32>,",
            "particle_model: mat4x4<f32>,",
            "fog: vec4<f32>,",
            "solid: vec4<f32>,",
            "particle: vec4<f32>,",
        ]
    );
}
