// src/viewer.rs

//! Blocking display of a rendered chart.

use crate::error::{Error, Result};

/// Shows a rendered RGB image and returns only once the user has closed it.
pub trait PlotViewer {
    fn show(&self, title: &str, rgb: &[u8], width: u32, height: u32) -> Result<()>;
}

/// Packs RGB triplets into the 0RGB words window framebuffers expect.
pub fn rgb_to_0rgb(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect()
}

fn check_buffer(rgb: &[u8], width: u32, height: u32) -> Result<()> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(Error::viewer(format!(
            "image buffer holds {} bytes, expected {} for {}x{}",
            rgb.len(),
            expected,
            width,
            height
        )));
    }
    Ok(())
}

/// Native window; closes on the window's close button or Escape.
#[cfg(feature = "window")]
#[derive(Debug, Default)]
pub struct WindowViewer;

#[cfg(feature = "window")]
impl PlotViewer for WindowViewer {
    fn show(&self, title: &str, rgb: &[u8], width: u32, height: u32) -> Result<()> {
        use minifb::{Key, Window, WindowOptions};

        check_buffer(rgb, width, height)?;
        let (w, h) = (width as usize, height as usize);
        let pixels = rgb_to_0rgb(rgb);

        let mut window = Window::new(title, w, h, WindowOptions::default())
            .map_err(|e| Error::viewer(e.to_string()))?;
        window.set_target_fps(30);

        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&pixels, w, h)
                .map_err(|e| Error::viewer(e.to_string()))?;
        }
        Ok(())
    }
}

/// Stand-in used when the crate is built without the `window` feature.
#[derive(Debug, Default)]
pub struct UnavailableViewer;

impl PlotViewer for UnavailableViewer {
    fn show(&self, _title: &str, rgb: &[u8], width: u32, height: u32) -> Result<()> {
        check_buffer(rgb, width, height)?;
        Err(Error::viewer(
            "built without the `window` feature; rerun with --no-show or --png",
        ))
    }
}

/// The viewer used by the binary.
pub fn default_viewer() -> Box<dyn PlotViewer> {
    #[cfg(feature = "window")]
    {
        Box::new(WindowViewer)
    }
    #[cfg(not(feature = "window"))]
    {
        Box::new(UnavailableViewer)
    }
}
