//! Color sources.

use std::sync::Mutex;

use postgen_core::{application::ports::ColorSource, domain::HexColor};
use rand::Rng;

/// Uniformly random 24-bit colors from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomColorSource;

impl RandomColorSource {
    pub fn new() -> Self {
        Self
    }
}

impl ColorSource for RandomColorSource {
    fn next_color(&self) -> HexColor {
        HexColor::from_rgb(rand::thread_rng().gen_range(0..=HexColor::MAX))
    }
}

/// Hands out the given colors in order, repeating the last one.
#[derive(Debug)]
pub struct FixedColorSource {
    colors: Mutex<Vec<HexColor>>,
    last: HexColor,
}

impl FixedColorSource {
    pub fn new(colors: impl IntoIterator<Item = HexColor>) -> Self {
        let mut colors: Vec<HexColor> = colors.into_iter().collect();
        let last = colors.last().copied().unwrap_or_default();
        colors.reverse();
        Self {
            colors: Mutex::new(colors),
            last,
        }
    }

    pub fn single(color: HexColor) -> Self {
        Self::new([color])
    }
}

impl ColorSource for FixedColorSource {
    fn next_color(&self) -> HexColor {
        self.colors
            .lock()
            .ok()
            .and_then(|mut colors| colors.pop())
            .unwrap_or(self.last)
    }
}
