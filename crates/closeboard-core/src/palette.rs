use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Half-transparent fill.
    pub fn background(self) -> String {
        format!("rgba({}, {}, {}, 0.5)", self.r, self.g, self.b)
    }

    pub fn border(self) -> String {
        format!("rgba({}, {}, {}, 1)", self.r, self.g, self.b)
    }
}

/// Fill and border colors attached to one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesColor {
    pub background: String,
    pub border: String,
}

impl From<Rgb> for SeriesColor {
    fn from(rgb: Rgb) -> Self {
        Self {
            background: rgb.background(),
            border: rgb.border(),
        }
    }
}

const DASHBOARD_COLORS: [Rgb; 5] = [
    Rgb::new(75, 192, 192),
    Rgb::new(54, 162, 235),
    Rgb::new(153, 102, 255),
    Rgb::new(255, 206, 86),
    Rgb::new(255, 99, 132),
];

/// Ordered, non-empty list of colors assigned by index.
///
/// Assignment wraps around, so every index has a color and the same index
/// always gets the same one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ValidationError> {
        if colors.is_empty() {
            return Err(ValidationError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn rgb(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    pub fn color(&self, index: usize) -> SeriesColor {
        self.rgb(index).into()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DASHBOARD_COLORS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_css_rgba() {
        let color = Palette::default().color(0);
        assert_eq!(color.background, "rgba(75, 192, 192, 0.5)");
        assert_eq!(color.border, "rgba(75, 192, 192, 1)");
    }

    #[test]
    fn assignment_wraps_around() {
        let palette = Palette::default();
        assert_eq!(palette.rgb(5), palette.rgb(0));
        assert_eq!(palette.rgb(7), palette.rgb(2));
        assert_ne!(palette.rgb(0), palette.rgb(1));
    }

    #[test]
    fn rejects_empty_palette() {
        assert_eq!(Palette::new(Vec::new()), Err(ValidationError::EmptyPalette));
    }
}
