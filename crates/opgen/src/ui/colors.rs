use std::io::IsTerminal;

use clap::{ValueEnum, builder::styling::Ansi256Color};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// What a piece of terminal output is, independent of the palette it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Timestamp,
  Primary,
  Accent,
  Info,
  Success,
  Label,
  Value,
  Error,
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

pub trait IntoComfyColor {
  fn into(self) -> ComfyColor;
}

impl IntoComfyColor for Color {
  fn into(self) -> ComfyColor {
    match self {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(val) => ComfyColor::AnsiValue(val),
      Color::Black => ComfyColor::Black,
      Color::White => ComfyColor::White,
      _ => ComfyColor::Reset,
    }
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  pub const fn color(&self, role: Role) -> Color {
    if !self.enabled {
      return Color::Reset;
    }

    let (r, g, b) = match (self.theme, role) {
      (Theme::Dark, Role::Timestamp | Role::Info | Role::Success) => (118, 166, 166),
      (Theme::Dark, Role::Primary) => (191, 126, 4),
      (Theme::Dark, Role::Accent) => (166, 84, 55),
      (Theme::Dark, Role::Label) => (217, 164, 4),
      (Theme::Dark, Role::Value) => (242, 211, 56),
      (Theme::Dark, Role::Error) => (224, 90, 72),
      (Theme::Light, Role::Timestamp) => (92, 62, 38),
      (Theme::Light, Role::Primary) => (70, 42, 25),
      (Theme::Light, Role::Accent) => (211, 99, 70),
      (Theme::Light, Role::Info) => (40, 111, 170),
      (Theme::Light, Role::Success) => (34, 142, 90),
      (Theme::Light, Role::Label) => (176, 103, 66),
      (Theme::Light, Role::Value) => (199, 146, 76),
      (Theme::Light, Role::Error) => (178, 34, 34),
    };

    Color::Rgb { r, g, b }
  }

  const fn to_clap(color: Color) -> Option<clap::builder::styling::Color> {
    use clap::builder::styling::{Color as ClapColor, RgbColor};

    match color {
      Color::AnsiValue(val) => Some(ClapColor::Ansi256(Ansi256Color(val))),
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      _ => None,
    }
  }

  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Style, Styles};

    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(
        Style::new()
          .bold()
          .underline()
          .fg_color(Self::to_clap(colors.color(Role::Label))),
      )
      .usage(Style::new().bold().fg_color(Self::to_clap(colors.color(Role::Label))))
      .literal(Style::new().fg_color(Self::to_clap(colors.color(Role::Success))))
      .placeholder(Style::new().fg_color(Self::to_clap(colors.color(Role::Info))))
      .error(Style::new().bold().fg_color(Self::to_clap(colors.color(Role::Error))))
      .valid(Style::new().fg_color(Self::to_clap(colors.color(Role::Success))))
      .invalid(Style::new().bold().fg_color(Self::to_clap(colors.color(Role::Accent))))
  }
}

/// Whether output written to `stream` should be colored.
pub fn colors_enabled(mode: ColorMode, stream: &impl IsTerminal) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => stream.is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  Theme::Dark
}
