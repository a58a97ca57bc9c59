use qrcode::{Color, QrCode, render::svg};

use crate::error::Result;

const SVG_MIN_DIMENSION: u32 = 200;

/// Dark/light module grid of an encoded QR code, quiet zone excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    pub fn encode(data: &str) -> Result<Self> {
        let code = QrCode::new(data.as_bytes())?;
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();

        Ok(Self {
            width: code.width(),
            modules,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }
}

/// SVG markup of the QR code for `data`, as embedded in card data
pub fn render_svg(data: &str) -> Result<String> {
    let code = QrCode::new(data.as_bytes())?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(SVG_MIN_DIMENSION, SVG_MIN_DIMENSION)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(image)
}
