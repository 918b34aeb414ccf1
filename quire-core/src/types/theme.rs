//! Visual theme settings stored with a book

use serde::{Deserialize, Serialize};

/// Typography and colour settings for a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub font_family: String,

    /// Base font size in pixels
    pub font_size: u32,

    pub line_height: f32,

    pub paragraph_spacing: f32,

    pub text_color: String,

    pub background_color: String,

    pub accent_color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_font_family: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "Georgia, serif".to_string(),
            font_size: 16,
            line_height: 1.6,
            paragraph_spacing: 1.2,
            text_color: "#333333".to_string(),
            background_color: "#ffffff".to_string(),
            accent_color: "#4361ee".to_string(),
            header_font_family: Some("Poppins, sans-serif".to_string()),
        }
    }
}

impl Theme {
    /// Merge the fields present in `patch`
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(font_family) = patch.font_family {
            self.font_family = font_family;
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size;
        }
        if let Some(line_height) = patch.line_height {
            self.line_height = line_height;
        }
        if let Some(paragraph_spacing) = patch.paragraph_spacing {
            self.paragraph_spacing = paragraph_spacing;
        }
        if let Some(text_color) = patch.text_color {
            self.text_color = text_color;
        }
        if let Some(background_color) = patch.background_color {
            self.background_color = background_color;
        }
        if let Some(accent_color) = patch.accent_color {
            self.accent_color = accent_color;
        }
        if let Some(header_font_family) = patch.header_font_family {
            self.header_font_family = Some(header_font_family);
        }
    }
}

/// Partial theme update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub line_height: Option<f32>,
    pub paragraph_spacing: Option<f32>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub accent_color: Option<String>,
    pub header_font_family: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.font_family, "Georgia, serif");
        assert_eq!(theme.font_size, 16);
        assert_eq!(theme.accent_color, "#4361ee");
    }

    #[test]
    fn test_theme_patch() {
        let mut theme = Theme::default();
        theme.apply(ThemePatch {
            font_size: Some(18),
            accent_color: Some("#000000".to_string()),
            ..ThemePatch::default()
        });
        assert_eq!(theme.font_size, 18);
        assert_eq!(theme.accent_color, "#000000");
        assert_eq!(theme.text_color, "#333333");
    }
}
