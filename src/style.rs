// CSS colour strings for canvas fill/stroke styles.
//
// Every draw call needs a `rgba(...)` string; alphas are quantized to 256
// levels so the strings can be cached per colour instead of formatted per
// particle per frame.
use fnv::FnvHashMap;
use starfield_core::Color;

#[inline]
pub fn quantize_alpha(alpha: f32) -> u8 {
    if alpha.is_nan() {
        return 0;
    }
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn rgba(color: Color, alpha: u8) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        color.r,
        color.g,
        color.b,
        alpha as f32 / 255.0
    )
}

#[derive(Default)]
pub struct StyleCache {
    entries: FnvHashMap<(Color, u8), String>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, color: Color, alpha: f32) -> &str {
        let key = (color, quantize_alpha(alpha));
        self.entries
            .entry(key)
            .or_insert_with(|| rgba(key.0, key.1))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
