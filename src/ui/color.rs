use colored::{Color, Colorize};

/// Applies configured color codes to text.
///
/// A disabled painter passes text through untouched, which keeps output clean
/// when stdout is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// No-op painter
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, code: &str, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }

        match parse_color(code) {
            Some(color) => text.color(color).to_string(),
            None => {
                log::debug!("Unknown color code '{}', printing uncolored", code);
                text.to_string()
            }
        }
    }
}

/// Parse `#rrggbb`, `#rgb` or a named color such as `"bright blue"`
pub fn parse_color(code: &str) -> Option<Color> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }

    match code.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => code.parse::<Color>().ok(),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();

    let (r, g, b) = match hex.len() {
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
        // #abc is shorthand for #aabbcc
        3 => (
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        ),
        _ => return None,
    };

    Some(Color::TrueColor { r, g, b })
}
