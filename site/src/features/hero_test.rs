#![allow(clippy::float_cmp)]

use particles::engine::AnimatorCore;

use super::*;

#[test]
fn host_surface_matches_layout_box() {
    let size = host_surface(800, 600);
    assert_eq!(size.width, 800.0);
    assert_eq!(size.height, 600.0);
}

#[test]
fn collapsed_host_gives_empty_surface() {
    assert!(host_surface(0, 0).is_empty());
    assert!(host_surface(-4, 10).is_empty());
}

#[test]
fn missing_hero_mounts_nothing() {
    let host: Option<(i32, i32)> = None;
    let core = AnimatorCore::attach(host.map(|(w, h)| host_surface(w, h)), 7);
    assert!(core.is_none());
}

#[test]
fn present_hero_sizes_animator_to_host() {
    let core = AnimatorCore::attach(Some(host_surface(1280, 720)), 7);
    let Some(core) = core else {
        panic!("hero present, animator expected");
    };
    assert_eq!(core.bounds(), SurfaceSize::new(1280.0, 720.0));
}

#[test]
fn window_resize_to_smaller_host_keeps_particles_inside() {
    let Some(mut core) = AnimatorCore::attach(Some(host_surface(800, 600)), 3) else {
        panic!("animator expected");
    };
    core.resize(host_surface(400, 300));
    core.resize(host_surface(400, 300));
    assert_eq!(core.bounds(), SurfaceSize::new(400.0, 300.0));
    core.tick();
    assert!(core.field.all_within_bounds());
}

#[test]
fn typing_style_hides_overflow_and_draws_caret() {
    assert!(TYPING_STYLE.contains(&("overflow", "hidden")));
    assert!(TYPING_STYLE.iter().any(|(name, value)| *name == "border-right" && value.contains("#149ddd")));
}
