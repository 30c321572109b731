//! Font description.
//!
//! [`Font`] is a pure value object: it names a face and size but performs no
//! measurement or shaping itself. Measurement is the job of the host's
//! [`TextMetrics`](crate::metrics::TextMetrics) implementation.

/// A font family, either a concrete face name or a generic fallback class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

/// Font weight on the usual 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font slant style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A font selection: family, size and style attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    /// Size in pixels.
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Create a new font with the given family and pixel size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Replace the font family.
    pub fn set_family(&mut self, family: FontFamily) {
        self.family = family;
    }

    /// The font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Replace the font size in pixels.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    /// The font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Set weight using builder pattern.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// The font slant style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Set style using builder pattern.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        // A 10px monospace face, the conventional default for code-like input.
        Self::new(FontFamily::Monospace, 10.0)
    }
}
