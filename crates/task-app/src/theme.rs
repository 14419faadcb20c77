/*
[INPUT]:  Theme preference from config/CLI and the terminal's COLORFGBG hint
[OUTPUT]: Resolved light or dark palette and derived ratatui styles
[POS]:    View layer - theming
[UPDATE]: When palette colors or detection rules change
*/

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Requested theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the terminal background
    #[default]
    Auto,
    Light,
    Dark,
}

/// Resolved appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub appearance: Appearance,
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub danger: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            appearance: Appearance::Light,
            background: Color::Rgb(0xf5, 0xf5, 0xf5),
            card: Color::Rgb(0xff, 0xff, 0xff),
            text: Color::Rgb(0x00, 0x00, 0x00),
            subtext: Color::Rgb(0x66, 0x66, 0x66),
            accent: Color::Rgb(0x00, 0x7a, 0xff),
            danger: Color::Rgb(0xe5, 0x39, 0x35),
        }
    }

    pub fn dark() -> Self {
        Self {
            appearance: Appearance::Dark,
            background: Color::Rgb(0x12, 0x12, 0x12),
            card: Color::Rgb(0x1e, 0x1e, 0x1e),
            text: Color::Rgb(0xff, 0xff, 0xff),
            subtext: Color::Rgb(0xaa, 0xaa, 0xaa),
            accent: Color::Rgb(0x00, 0x7a, 0xff),
            danger: Color::Rgb(0xe5, 0x39, 0x35),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    /// Resolve a mode, reading `COLORFGBG` for `Auto`
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Auto => {
                let hint = std::env::var("COLORFGBG").ok();
                Self::for_appearance(detect_appearance(hint.as_deref()))
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.text).bg(self.card)
    }

    pub fn subtext(&self) -> Style {
        Style::default().fg(self.subtext)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// White on accent, used for buttons and key hints
    pub fn button(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn danger(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.subtext)
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

/// Read the background index from an rxvt-style `COLORFGBG` value ("fg;bg" or "fg;x;bg").
///
/// Background 7 and 9..=15 are light; everything else, including a missing or
/// unparsable hint, is dark.
pub fn detect_appearance(colorfgbg: Option<&str>) -> Appearance {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(7) | Some(9..=15) => Appearance::Light,
        _ => Appearance::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Appearance::Dark)]
    #[case(Some("15;0"), Appearance::Dark)]
    #[case(Some("0;15"), Appearance::Light)]
    #[case(Some("0;7"), Appearance::Light)]
    #[case(Some("15;default;0"), Appearance::Dark)]
    #[case(Some("0;default;15"), Appearance::Light)]
    #[case(Some("garbage"), Appearance::Dark)]
    fn test_detect_appearance(#[case] hint: Option<&str>, #[case] expected: Appearance) {
        assert_eq!(detect_appearance(hint), expected);
    }

    #[test]
    fn test_explicit_modes_ignore_terminal() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), Palette::light());
        assert_eq!(Palette::for_mode(ThemeMode::Dark), Palette::dark());
    }

    #[test]
    fn test_palettes_share_accent_and_danger() {
        let light = Palette::light();
        let dark = Palette::dark();
        assert_eq!(light.accent, dark.accent);
        assert_eq!(light.danger, dark.danger);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn test_theme_mode_serde() {
        let mode: ThemeMode = serde_yaml::from_str("dark").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(serde_yaml::to_string(&ThemeMode::Auto).unwrap().trim(), "auto");
    }
}
