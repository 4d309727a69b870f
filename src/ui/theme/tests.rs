use super::capability::detect_color_capability_from;
use super::*;

#[test]
fn detect_color_capability_respects_mode_and_env_overrides() {
    let cases = [
        (
            ColorArg::Auto,
            Some("xterm-256color"),
            Some("truecolor"),
            Some(""),
            ColorCapability::TrueColor,
        ),
        (
            ColorArg::Auto,
            Some("xterm-256color"),
            Some("truecolor"),
            Some("1"),
            ColorCapability::Monochrome,
        ),
        (
            ColorArg::Always,
            Some("xterm-256color"),
            Some("24bit"),
            Some("1"),
            ColorCapability::TrueColor,
        ),
        (
            ColorArg::Auto,
            Some("xterm-direct"),
            None,
            None,
            ColorCapability::TrueColor,
        ),
        (
            ColorArg::Auto,
            Some("screen-256color"),
            None,
            None,
            ColorCapability::Xterm256,
        ),
        (ColorArg::Auto, Some("dumb"), None, None, ColorCapability::Basic16),
        (
            ColorArg::Never,
            Some("xterm-256color"),
            Some("truecolor"),
            None,
            ColorCapability::Monochrome,
        ),
    ];

    for (mode, term, colorterm, no_color, expected) in cases {
        let capability = detect_color_capability_from(mode, term, colorterm, no_color);
        assert_eq!(capability, expected, "{mode:?} {term:?} {colorterm:?} {no_color:?}");
    }
}

#[test]
fn monochrome_theme_uses_terminal_defaults() {
    let theme = Theme::for_capability(ColorCapability::Monochrome);
    assert_eq!(theme.danger, Color::Reset);
    assert_eq!(theme.accent, Color::Reset);
    assert_eq!(theme.surface, Color::Reset);
}

#[test]
fn danger_and_info_stay_distinct_at_every_depth() {
    for capability in [
        ColorCapability::TrueColor,
        ColorCapability::Xterm256,
        ColorCapability::Basic16,
    ] {
        let theme = Theme::for_capability(capability);
        assert_ne!(
            kind_color(&theme, ProbabilityKind::Danger),
            kind_color(&theme, ProbabilityKind::Info),
            "{capability:?}"
        );
        assert_ne!(theme.text, theme.surface, "{capability:?}");
    }
}

#[test]
fn quantize_basic16_picks_nearest_named_colour() {
    assert_eq!(
        quantize(Color::Rgb(10, 10, 10), ColorCapability::Basic16),
        Color::Black
    );
    assert_eq!(
        quantize(Color::Rgb(250, 250, 250), ColorCapability::Basic16),
        Color::White
    );
    assert_eq!(
        quantize(Color::Rgb(255, 96, 96), ColorCapability::Basic16),
        Color::LightRed
    );
    assert_eq!(
        quantize(Color::Rgb(0, 160, 10), ColorCapability::Basic16),
        Color::Green
    );
}

#[test]
fn quantize_xterm256_maps_into_cube() {
    assert_eq!(
        quantize(Color::Rgb(255, 0, 0), ColorCapability::Xterm256),
        Color::Indexed(196)
    );
    let color = Color::Rgb(123, 45, 67);
    assert_eq!(quantize(color, ColorCapability::TrueColor), color);
}

#[test]
fn comfort_and_temperature_colours_follow_bands() {
    let theme = Theme::for_capability(ColorCapability::TrueColor);
    assert_eq!(comfort_color(&theme, ComfortLevel::Comfortable), theme.success);
    assert_eq!(comfort_color(&theme, ComfortLevel::Uncomfortable), theme.warning);
    assert_eq!(
        comfort_color(&theme, ComfortLevel::VeryUncomfortable),
        theme.danger
    );
    assert_eq!(temp_color(&theme, 5.0), theme.temp_cold);
    assert_eq!(temp_color(&theme, 20.0), theme.temp_mild);
    assert_eq!(temp_color(&theme, 32.0), theme.temp_hot);
}
