// Host-side tests for canvas style strings.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use starfield_core::Color;
use style::*;

#[test]
fn alpha_quantizes_to_bytes() {
    assert_eq!(quantize_alpha(0.0), 0);
    assert_eq!(quantize_alpha(1.0), 255);
    assert_eq!(quantize_alpha(0.5), 128);
    assert_eq!(quantize_alpha(-3.0), 0);
    assert_eq!(quantize_alpha(7.0), 255);
    assert_eq!(quantize_alpha(f32::NAN), 0);
}

#[test]
fn rgba_strings_match_css_syntax() {
    assert_eq!(rgba(Color::rgb(0, 206, 209), 255), "rgba(0, 206, 209, 1.000)");
    assert_eq!(rgba(Color::BLACK, 0), "rgba(0, 0, 0, 0.000)");
}

#[test]
fn cache_reuses_strings_per_quantized_alpha() {
    let mut cache = StyleCache::new();
    assert!(cache.is_empty());
    let a = cache.get(Color::WHITE, 0.5).to_owned();
    let b = cache.get(Color::WHITE, 0.501).to_owned();
    assert_eq!(a, b);
    assert_eq!(cache.len(), 1);
    cache.get(Color::WHITE, 0.9);
    cache.get(Color::BLACK, 0.9);
    assert_eq!(cache.len(), 3);
}
