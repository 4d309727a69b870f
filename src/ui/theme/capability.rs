use super::ColorCapability;
use crate::cli::ColorArg;

pub(super) fn detect_color_capability_from(
    mode: ColorArg,
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> ColorCapability {
    if colour_disabled(mode, no_color) {
        return ColorCapability::Monochrome;
    }
    if term.is_some_and(|value| value.eq_ignore_ascii_case("dumb")) && mode != ColorArg::Always {
        return ColorCapability::Basic16;
    }
    if supports_truecolor(colorterm, term) {
        ColorCapability::TrueColor
    } else if term.unwrap_or_default().to_lowercase().contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

fn colour_disabled(mode: ColorArg, no_color: Option<&str>) -> bool {
    mode == ColorArg::Never
        || (mode == ColorArg::Auto && no_color.is_some_and(|value| !value.is_empty()))
}

fn supports_truecolor(colorterm: Option<&str>, term: Option<&str>) -> bool {
    [colorterm, term]
        .into_iter()
        .flatten()
        .map(str::to_lowercase)
        .any(|value| {
            value.contains("truecolor") || value.contains("24bit") || value.ends_with("direct")
        })
}
