use ratatui::style::Color;

use crate::{
    cli::ColorArg,
    domain::metrics::{ComfortLevel, ProbabilityKind},
};

mod capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
    Monochrome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub capability: ColorCapability,
    pub surface: Color,
    pub popup_surface: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub focus_border: Color,
    pub popup_border: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_hot: Color,
}

type Rgb = (u8, u8, u8);

struct Seeds {
    surface: Rgb,
    popup_surface: Rgb,
    accent: Rgb,
    text: Rgb,
    muted_text: Rgb,
    border: Rgb,
    focus_border: Rgb,
    popup_border: Rgb,
    info: Rgb,
    success: Rgb,
    warning: Rgb,
    danger: Rgb,
    temp_cold: Rgb,
    temp_mild: Rgb,
    temp_hot: Rgb,
}

const SEEDS: Seeds = Seeds {
    surface: (14, 22, 38),
    popup_surface: (28, 40, 64),
    accent: (102, 204, 255),
    text: (232, 238, 245),
    muted_text: (150, 162, 180),
    border: (70, 96, 130),
    focus_border: (255, 206, 84),
    popup_border: (255, 206, 84),
    info: (96, 170, 255),
    success: (110, 220, 140),
    warning: (255, 196, 60),
    danger: (255, 96, 96),
    temp_cold: (120, 190, 255),
    temp_mild: (130, 220, 150),
    temp_hot: (255, 120, 80),
};

impl Theme {
    #[must_use]
    pub fn for_mode(mode: ColorArg) -> Self {
        Self::for_capability(detect_color_capability(mode))
    }

    #[must_use]
    pub fn for_capability(capability: ColorCapability) -> Self {
        let c = |rgb: Rgb| quantize(Color::Rgb(rgb.0, rgb.1, rgb.2), capability);
        Self {
            capability,
            surface: c(SEEDS.surface),
            popup_surface: c(SEEDS.popup_surface),
            accent: c(SEEDS.accent),
            text: c(SEEDS.text),
            muted_text: c(SEEDS.muted_text),
            border: c(SEEDS.border),
            focus_border: c(SEEDS.focus_border),
            popup_border: c(SEEDS.popup_border),
            info: c(SEEDS.info),
            success: c(SEEDS.success),
            warning: c(SEEDS.warning),
            danger: c(SEEDS.danger),
            temp_cold: c(SEEDS.temp_cold),
            temp_mild: c(SEEDS.temp_mild),
            temp_hot: c(SEEDS.temp_hot),
        }
    }
}

pub fn detect_color_capability(mode: ColorArg) -> ColorCapability {
    let term = std::env::var("TERM").ok();
    let colorterm = std::env::var("COLORTERM").ok();
    let no_color = std::env::var("NO_COLOR").ok();
    capability::detect_color_capability_from(
        mode,
        term.as_deref(),
        colorterm.as_deref(),
        no_color.as_deref(),
    )
}

#[must_use]
pub fn kind_color(theme: &Theme, kind: ProbabilityKind) -> Color {
    match kind {
        ProbabilityKind::Danger => theme.danger,
        ProbabilityKind::Info => theme.info,
    }
}

#[must_use]
pub fn comfort_color(theme: &Theme, level: ComfortLevel) -> Color {
    match level {
        ComfortLevel::VeryComfortable | ComfortLevel::Comfortable => theme.success,
        ComfortLevel::Uncomfortable => theme.warning,
        ComfortLevel::VeryUncomfortable => theme.danger,
    }
}

#[must_use]
pub fn temp_color(theme: &Theme, temp: f64) -> Color {
    if temp < 12.0 {
        theme.temp_cold
    } else if temp <= 26.0 {
        theme.temp_mild
    } else {
        theme.temp_hot
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::Monochrome, _) => Color::Reset,
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => nearest_basic16((r, g, b)),
        (_, c) => c,
    }
}

const BASIC16: [(Color, Rgb); 16] = [
    (Color::Black, (0, 0, 0)),
    (Color::Red, (170, 0, 0)),
    (Color::Green, (0, 170, 0)),
    (Color::Yellow, (170, 85, 0)),
    (Color::Blue, (0, 0, 170)),
    (Color::Magenta, (170, 0, 170)),
    (Color::Cyan, (0, 170, 170)),
    (Color::Gray, (170, 170, 170)),
    (Color::DarkGray, (85, 85, 85)),
    (Color::LightRed, (255, 85, 85)),
    (Color::LightGreen, (85, 255, 85)),
    (Color::LightYellow, (255, 255, 85)),
    (Color::LightBlue, (85, 85, 255)),
    (Color::LightMagenta, (255, 85, 255)),
    (Color::LightCyan, (85, 255, 255)),
    (Color::White, (255, 255, 255)),
];

fn nearest_basic16(rgb: Rgb) -> Color {
    let distance = |other: Rgb| {
        let d = |a: u8, b: u8| (i32::from(a) - i32::from(b)).pow(2);
        d(rgb.0, other.0) + d(rgb.1, other.1) + d(rgb.2, other.2)
    };
    BASIC16
        .iter()
        .min_by_key(|(_, reference)| distance(*reference))
        .map_or(Color::Reset, |(color, _)| *color)
}

#[cfg(test)]
mod tests;
