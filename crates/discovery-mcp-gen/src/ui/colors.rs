use std::io::IsTerminal;

use clap::ValueEnum;
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

/// What a piece of output means; the palette maps each role to a color per theme.
#[derive(Debug, Clone, Copy)]
enum Role {
  Timestamp,
  Primary,
  Accent,
  Info,
  Success,
  Label,
  Value,
}

impl Role {
  const fn rgb(self, theme: Theme) -> (u8, u8, u8) {
    match (self, theme) {
      (Self::Timestamp | Self::Info | Self::Success, Theme::Dark) => (118, 166, 166),
      (Self::Timestamp, Theme::Light) => (92, 62, 38),
      (Self::Primary, Theme::Dark) => (191, 126, 4),
      (Self::Primary, Theme::Light) => (70, 42, 25),
      (Self::Accent, Theme::Dark) => (166, 84, 55),
      (Self::Accent, Theme::Light) => (211, 99, 70),
      (Self::Info, Theme::Light) => (40, 111, 170),
      (Self::Success, Theme::Light) => (34, 142, 90),
      (Self::Label, Theme::Dark) => (217, 164, 4),
      (Self::Label, Theme::Light) => (176, 103, 66),
      (Self::Value, Theme::Dark) => (242, 211, 56),
      (Self::Value, Theme::Light) => (199, 146, 76),
    }
  }
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
      Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
      _ => ComfyColor::Reset,
    }
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn color(&self, role: Role) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    let (r, g, b) = role.rgb(self.theme);
    Color::Rgb { r, g, b }
  }

  pub const fn timestamp(&self) -> Color {
    self.color(Role::Timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.color(Role::Primary)
  }

  pub const fn accent(&self) -> Color {
    self.color(Role::Accent)
  }

  pub const fn info(&self) -> Color {
    self.color(Role::Info)
  }

  pub const fn success(&self) -> Color {
    self.color(Role::Success)
  }

  pub const fn label(&self) -> Color {
    self.color(Role::Label)
  }

  pub const fn value(&self) -> Color {
    self.color(Role::Value)
  }

  pub fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Color as ClapColor, RgbColor, Style, Styles};

    let style = |role: Role| {
      let (r, g, b) = role.rgb(Theme::Dark);
      Style::new().fg_color(Some(ClapColor::Rgb(RgbColor(r, g, b))))
    };

    Styles::styled()
      .header(style(Role::Label).bold().underline())
      .usage(style(Role::Label).bold())
      .literal(style(Role::Success))
      .placeholder(style(Role::Info))
      .error(style(Role::Accent).bold())
      .valid(style(Role::Success))
      .invalid(style(Role::Accent).bold())
  }
}

/// Progress goes to stderr, so that is the stream whose terminal-ness decides `auto`.
pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stderr().is_terminal(),
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
