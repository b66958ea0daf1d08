// src/font_config.rs

// Text is rendered with a font embedded in the binary, so plots look the same
// on every machine and no system font lookup is needed.

use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};

use crate::error::{Error, Result};

/// Embedded sans-serif font at compile time
pub static BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

/// Family name every chart element asks plotters for
pub const FONT_FAMILY: &str = "sans-serif";

static REGISTRATION: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Registers the bundled font with plotters. Only the first call does any work.
pub fn register_bundled_fonts() -> Result<()> {
    REGISTRATION
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, BUNDLED_FONT_BYTES)
                .map_err(|_| "bundled font rejected".to_string())
        })
        .clone()
        .map_err(Error::Font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_font_is_truetype() {
        assert!(BUNDLED_FONT_BYTES.len() > 1024);
        assert_eq!(&BUNDLED_FONT_BYTES[0..4], &[0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_register_is_idempotent() {
        register_bundled_fonts().unwrap();
        register_bundled_fonts().unwrap();
    }
}
