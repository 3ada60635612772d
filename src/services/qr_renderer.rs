//! QR Generation Façade for QR Baghdad.
//!
//! Delegates symbol encoding to the `qrcode` crate and draws an RGBA image
//! with the configured colors and pixel size. The most recently rendered
//! image is the current artifact, available for download until superseded.

use std::path::{Path, PathBuf};

use chrono::Local;
use image::{Rgba, RgbaImage};
use qrcode::QrCode;

use crate::types::errors::RenderError;
use crate::types::settings::QrSettings;

/// The most recently rendered QR image.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub text: String,
    pub image: RgbaImage,
}

/// Trait defining the rendering façade.
pub trait QrRendererTrait {
    fn render(&mut self, text: &str, settings: &QrSettings) -> Result<(), RenderError>;
    fn current(&self) -> Option<&Artifact>;
    fn download(&self, dir: &Path) -> Result<PathBuf, RenderError>;
}

/// Parses a `#rrggbb` hex string into an RGBA pixel.
pub fn parse_hex_color(color: &str) -> Result<Rgba<u8>, RenderError> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| RenderError::InvalidColor(color.to_string()))?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RenderError::InvalidColor(color.to_string()));
    }
    let r = u8::from_str_radix(&hex[0..2], 16)
        .map_err(|_| RenderError::InvalidColor(color.to_string()))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .map_err(|_| RenderError::InvalidColor(color.to_string()))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .map_err(|_| RenderError::InvalidColor(color.to_string()))?;
    Ok(Rgba([r, g, b, 255]))
}

/// Renderer holding the current artifact.
pub struct QrRenderer {
    current: Option<Artifact>,
}

impl QrRenderer {
    pub fn new() -> Self {
        Self { current: None }
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRendererTrait for QrRenderer {
    /// Renders `text` into an RGBA image using `settings`.
    ///
    /// Empty input (after trimming) and encoder failures are surfaced as
    /// errors; in both cases the previous artifact is left untouched, so no
    /// partial or corrupt image is ever visible.
    fn render(&mut self, text: &str, settings: &QrSettings) -> Result<(), RenderError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RenderError::EmptyInput);
        }

        let dark = parse_hex_color(&settings.dark_color)?;
        let light = parse_hex_color(&settings.light_color)?;

        let code =
            QrCode::new(text.as_bytes()).map_err(|e| RenderError::EncodingFailed(e.to_string()))?;

        let rendered = code
            .render::<Rgba<u8>>()
            .min_dimensions(settings.size, settings.size)
            .dark_color(dark)
            .light_color(light)
            .quiet_zone(true)
            .build();

        // The module grid rounds up; scale back to the exact requested size.
        let image = if rendered.dimensions() == (settings.size, settings.size) {
            rendered
        } else {
            image::imageops::resize(
                &rendered,
                settings.size,
                settings.size,
                image::imageops::FilterType::Nearest,
            )
        };

        self.current = Some(Artifact {
            text: text.to_string(),
            image,
        });
        Ok(())
    }

    fn current(&self) -> Option<&Artifact> {
        self.current.as_ref()
    }

    /// Writes the current artifact into `dir` as `qr-code-YYYY-MM-DD.png`
    /// and returns the path. Fails with `NoArtifact` if nothing has been
    /// rendered yet.
    fn download(&self, dir: &Path) -> Result<PathBuf, RenderError> {
        let artifact = self.current.as_ref().ok_or(RenderError::NoArtifact)?;

        std::fs::create_dir_all(dir).map_err(|e| RenderError::IoError(e.to_string()))?;
        let filename = format!("qr-code-{}.png", Local::now().format("%Y-%m-%d"));
        let path = dir.join(filename);
        artifact
            .image
            .save(&path)
            .map_err(|e| RenderError::IoError(e.to_string()))?;
        Ok(path)
    }
}

/// Seam for the external barcode-detection capability.
///
/// Camera capture and frame-by-frame detection are owned by the host
/// environment; the application only consumes zero-or-one decoded strings
/// per frame. When no detector is available, scanning is reported as
/// unsupported.
pub trait BarcodeDetector {
    fn detect(&self, frame: &RgbaImage) -> Option<String>;
}
