//! Parsing and normalization of CSS literal values (colors, lengths, shadows).

use tokenbridge_core::constants::REM_PX;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance in RGB space, in `[0, 441.67]`.
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse `#rgb` or `#rrggbb` (case-insensitive).
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = s.trim().strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |hi: u8, lo: u8| -> Option<u8> {
        let pair = [hi, lo];
        u8::from_str_radix(std::str::from_utf8(&pair).ok()?, 16).ok()
    };
    let b = digits.as_bytes();
    match b.len() {
        3 => Some(Rgb::new(
            channel(b[0], b[0])?,
            channel(b[1], b[1])?,
            channel(b[2], b[2])?,
        )),
        6 => Some(Rgb::new(
            channel(b[0], b[1])?,
            channel(b[2], b[3])?,
            channel(b[4], b[5])?,
        )),
        _ => None,
    }
}

/// Normalize a hex color to uppercase 6-digit `#RRGGBB`.
pub fn normalize_hex(s: &str) -> Option<String> {
    parse_hex(s).map(|rgb| rgb.to_hex())
}

/// Canonical lookup key for a hex literal: lowercase 6-digit form.
pub fn hex_key(s: &str) -> Option<String> {
    normalize_hex(s).map(|h| h.to_ascii_lowercase())
}

/// An `rgb()`/`rgba()` color. `alpha` is `None` for `rgb()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: Option<f64>,
}

/// Parse `rgba(r, g, b, a)` or `rgb(r, g, b)` with integer channels.
pub fn parse_rgba(s: &str) -> Option<Rgba> {
    let s = s.trim();
    let lower = s.to_ascii_lowercase();
    let (inner, has_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = lower.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    let alpha = if has_alpha {
        let a = parts[3].parse::<f64>().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        Some(a)
    } else {
        None
    };
    Some(Rgba {
        rgb: Rgb::new(r, g, b),
        alpha,
    })
}

/// Parse any supported color literal into RGB, discarding alpha.
pub fn parse_color(s: &str) -> Option<Rgb> {
    parse_hex(s).or_else(|| parse_rgba(s).map(|c| c.rgb))
}

/// Strip all whitespace, lowercase. Used as the key for `rgba()` literals.
pub fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Convert a length to pixels. Accepts `px`, `rem`, and bare numbers (px).
pub fn to_px(s: &str) -> Option<f64> {
    let s = s.trim();
    let (number, scale) = if let Some(n) = s.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = s.strip_suffix("rem") {
        (n, REM_PX)
    } else {
        (s, 1.0)
    };
    let value = number.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value * scale)
}

/// Render a pixel count the way CSS authors write it (`4px`, `2.5px`).
pub fn format_px(px: f64) -> String {
    if px.fract() == 0.0 {
        format!("{}px", px as i64)
    } else {
        format!("{px}px")
    }
}

/// Canonical text form of a shadow: collapsed whitespace, `", "` after
/// commas, no padding inside parentheses, lowercase.
pub fn normalize_shadow(s: &str) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ',' => {
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
                out.push_str(", ");
            }
            '(' => {
                out.push('(');
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            ')' => {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push(')');
            }
            _ => out.extend(c.to_lowercase()),
        }
    }
    out.trim().to_string()
}

/// Split a shadow list into layers at top-level commas.
pub fn split_shadow_layers(s: &str) -> Vec<&str> {
    let mut layers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                layers.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    layers.push(s[start..].trim());
    layers.retain(|l| !l.is_empty());
    layers
}

/// The numeric parts of one shadow layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    /// Color alpha. `None` when the color carries no alpha (or is absent).
    pub opacity: Option<f64>,
    pub inset: bool,
}

/// Parse the first layer of a shadow value. `None` if it has fewer than
/// two lengths or an unrecognized word.
pub fn first_shadow_layer(s: &str) -> Option<ShadowLayer> {
    let layer = *split_shadow_layers(s).first()?;
    let mut lengths: Vec<f64> = Vec::with_capacity(4);
    let mut opacity = None;
    let mut inset = false;

    for part in split_top_level_whitespace(layer) {
        let lower = part.to_ascii_lowercase();
        if lower == "inset" {
            inset = true;
        } else if lower.starts_with('#') {
            parse_hex(&lower)?;
            opacity = Some(1.0);
        } else if lower.starts_with("rgb") {
            opacity = parse_rgba(&lower)?.alpha;
        } else if let Some(px) = to_px(&lower) {
            lengths.push(px);
        } else {
            return None;
        }
    }

    if lengths.len() < 2 || lengths.len() > 4 {
        return None;
    }
    Some(ShadowLayer {
        x: lengths[0],
        y: lengths[1],
        blur: lengths.get(2).copied().unwrap_or(0.0),
        spread: lengths.get(3).copied().unwrap_or(0.0),
        opacity,
        inset,
    })
}

fn split_top_level_whitespace(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (i, c) in s.char_indices() {
        match c {
            '(' => {
                depth += 1;
                start.get_or_insert(i);
            }
            ')' => {
                depth = depth.saturating_sub(1);
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(st) = start.take() {
                    parts.push(&s[st..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }
    if let Some(st) = start {
        parts.push(&s[st..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex_expands() {
        assert_eq!(normalize_hex("#fff").as_deref(), Some("#FFFFFF"));
        assert_eq!(hex_key("#25C9D0").as_deref(), Some("#25c9d0"));
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("25C9D0"), None);
    }

    #[test]
    fn test_rgba_parsing() {
        let c = parse_rgba("rgba(0, 0, 0, 0.28)").unwrap();
        assert_eq!(c.rgb, Rgb::new(0, 0, 0));
        assert_eq!(c.alpha, Some(0.28));
        assert_eq!(parse_rgba("rgb(255,255,255)").unwrap().alpha, None);
        assert!(parse_rgba("rgba(300, 0, 0, 1)").is_none());
        assert!(parse_rgba("rgba(0, 0, 0)").is_none());
    }

    #[test]
    fn test_lengths() {
        assert_eq!(to_px("4px"), Some(4.0));
        assert_eq!(to_px("0.25rem"), Some(4.0));
        assert_eq!(to_px("0"), Some(0.0));
        assert_eq!(to_px("auto"), None);
        assert_eq!(format_px(4.0), "4px");
        assert_eq!(format_px(2.5), "2.5px");
    }

    #[test]
    fn test_shadow_normalization() {
        assert_eq!(
            normalize_shadow("0px  4px 16px 0px RGBA( 0,0, 0,0.28 )"),
            "0px 4px 16px 0px rgba(0, 0, 0, 0.28)"
        );
    }

    #[test]
    fn test_first_layer_only() {
        let layer =
            first_shadow_layer("0 1px 2px rgba(0,0,0,0.2) inset, 0 8px 24px #000").unwrap();
        assert_eq!((layer.x, layer.y, layer.blur), (0.0, 1.0, 2.0));
        assert_eq!(layer.opacity, Some(0.2));
        assert!(layer.inset);
    }

    #[test]
    fn test_unparseable_shadow() {
        assert!(first_shadow_layer("none").is_none());
        assert!(first_shadow_layer("var(--shadow-sm)").is_none());
        assert_eq!(first_shadow_layer("2px 2px #333").unwrap().opacity, Some(1.0));
        assert_eq!(first_shadow_layer("2px 2px 4px").unwrap().opacity, None);
    }
}
