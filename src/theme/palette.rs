use ratatui::style::Color;

/// The named colors a theme is built from. A strict subset of the usual
/// Catppuccin role names, covering only what this UI draws.
pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub surface0: Color,
    pub surface2: Color,
    pub overlay1: Color,
    pub blue: Color,
    pub teal: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub red: Color,
    pub mauve: Color,
}
