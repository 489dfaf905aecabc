use crossterm::style::Color as CrosstermColor;

const DARK_GREY: CrosstermColor = CrosstermColor::Rgb {
    r: 96,
    g: 96,
    b: 96,
};

const LIGHT_GREY: CrosstermColor = CrosstermColor::Rgb {
    r: 159,
    g: 159,
    b: 159,
};

const DROPDOWN: CrosstermColor = CrosstermColor::Rgb {
    r: 40,
    g: 44,
    b: 52,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Brand,
    Highlight,
    GrayyedText,
    LightGrayyedText,
    InvertedText,
    InvertedBackground,
    Dropdown,
    Error,
    Success,
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> CrosstermColor {
        match color {
            Color::Brand => CrosstermColor::Cyan,
            Color::Highlight => CrosstermColor::Yellow,
            Color::GrayyedText => DARK_GREY,
            Color::LightGrayyedText => LIGHT_GREY,
            Color::InvertedText => CrosstermColor::Black,
            Color::InvertedBackground => CrosstermColor::White,
            Color::Dropdown => DROPDOWN,
            Color::Error => CrosstermColor::Red,
            Color::Success => CrosstermColor::Green,
        }
    }
}

impl Color {
    pub fn focus_or_important(focus: bool) -> Self {
        if focus {
            Self::Highlight
        } else {
            Self::InvertedBackground
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_or_important_converts_more_than_once() {
        let color = Color::focus_or_important(true);

        let first: CrosstermColor = color.into();
        let second: CrosstermColor = color.into();

        assert_eq!(first, CrosstermColor::Yellow);
        assert_eq!(first, second);
        assert_eq!(Color::focus_or_important(false), Color::InvertedBackground);
    }
}
