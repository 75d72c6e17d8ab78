use crossterm::style::Color;

use super::render::LineStyle;

pub const BRIGHT_GREEN: Color = Color::Rgb {
    r: 0x3C,
    g: 0xCE,
    b: 0x92,
};
pub const BRIGHT_PURPLE: Color = Color::Rgb {
    r: 0x93,
    g: 0x70,
    b: 0xDB,
};

/// Trait for mapping rendered line styles to terminal styling
pub trait AsTermStyle {
    fn foreground_color(&self) -> Option<Color>;
    fn is_bold(&self) -> bool;
}

impl AsTermStyle for LineStyle {
    fn foreground_color(&self) -> Option<Color> {
        match self {
            LineStyle::SelectedItem => Some(BRIGHT_GREEN),
            LineStyle::Hint => Some(BRIGHT_PURPLE),
            LineStyle::NoMatches => Some(Color::Red),
            LineStyle::FilterPrompt => Some(Color::White),
            LineStyle::Title | LineStyle::Item | LineStyle::Blank => None,
        }
    }

    fn is_bold(&self) -> bool {
        matches!(
            self,
            LineStyle::Title | LineStyle::SelectedItem | LineStyle::FilterPrompt
        )
    }
}
