//! Provider display treatment
//!
//! Provider names are open strings, not a closed enumeration: the form offers
//! a known list (plus "Other"), but grouping and color lookup must handle any
//! value and fall back to a default treatment for unrecognized providers.

use ratatui::style::Color;

/// Providers offered by the entry form, in display order
pub const KNOWN_PROVIDERS: &[&str] = &[
    "OpenAI",
    "Anthropic",
    "Google",
    "Microsoft",
    "Midjourney",
    "GitHub",
    "Replicate",
    "Stability AI",
    "Other",
];

/// Fixed chart palette, cycled by slice index when providers exceed its size
pub const CHART_PALETTE: &[Color] = &[
    Color::Green,
    Color::LightRed,
    Color::Blue,
    Color::Cyan,
    Color::Magenta,
    Color::White,
    Color::LightMagenta,
    Color::LightBlue,
];

/// Look up the display color for a provider name
///
/// Unknown providers get the default accent color.
pub fn provider_color(provider: &str) -> Color {
    match provider {
        "OpenAI" => Color::Green,
        "Anthropic" => Color::LightRed,
        "Google" => Color::Blue,
        "Microsoft" => Color::Cyan,
        "Midjourney" => Color::Magenta,
        "GitHub" => Color::White,
        "Replicate" => Color::LightMagenta,
        "Stability AI" => Color::LightBlue,
        _ => Color::Cyan,
    }
}

/// Palette color for a chart slice at the given index
pub fn palette_color(index: usize) -> Color {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_provider_color() {
        assert_eq!(provider_color("OpenAI"), Color::Green);
        assert_eq!(provider_color("Anthropic"), Color::LightRed);
    }

    #[test]
    fn test_unknown_provider_falls_back() {
        assert_eq!(provider_color("Acme AI"), Color::Cyan);
        assert_eq!(provider_color(""), Color::Cyan);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), CHART_PALETTE[0]);
        assert_eq!(palette_color(CHART_PALETTE.len()), CHART_PALETTE[0]);
        assert_eq!(palette_color(CHART_PALETTE.len() + 2), CHART_PALETTE[2]);
    }
}
