use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw hex palette for the shell chrome.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) dim_black: String,
    pub(crate) dim_blue: String,
    pub(crate) dim_white: String,
    pub(crate) dim_foreground: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            // DIM COLORS
            dim_black: String::from("#0F1115"),
            dim_blue: String::from("#2F638F"),
            dim_white: String::from("#6C7385"),
            dim_foreground: String::from("#6B7280"),
        }
    }
}

/// Palette resolved into iced colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_blue: Color,
    pub(crate) dim_white: Color,
    pub(crate) dim_foreground: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            blue: parse_hex_color(&p.blue),
            dim_black: parse_hex_color(&p.dim_black),
            dim_blue: parse_hex_color(&p.dim_blue),
            dim_white: parse_hex_color(&p.dim_white),
            dim_foreground: parse_hex_color(&p.dim_foreground),
        }
    }
}

/// Global application theme shared by every chrome widget.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("default"),
            iced_palette: IcedColorPalette::from(&ColorPalette::default()),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

fn parse_hex_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or_else(|_| {
        log::warn!("invalid palette color {value}, using black");
        Color::BLACK
    })
}

#[cfg(test)]
mod tests {
    use super::{ColorPalette, IcedColorPalette, parse_hex_color};

    #[test]
    fn given_default_palette_when_resolved_then_colors_match_hex() {
        let palette = IcedColorPalette::from(&ColorPalette::default());

        assert_eq!(palette.blue, iced::Color::from_rgb8(0x4F, 0xA6, 0xED));
        assert_eq!(
            palette.dim_black,
            iced::Color::from_rgb8(0x0F, 0x11, 0x15)
        );
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_black_is_used() {
        assert_eq!(parse_hex_color("not-a-color"), iced::Color::BLACK);
    }
}
