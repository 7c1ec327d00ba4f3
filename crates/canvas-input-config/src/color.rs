//! CSS-like color values with serde support as plain strings.
//!
//! Accepts the hex, functional (`rgb`, `rgba`, `hsl`, `hsla`, `hwb`) and
//! named forms an input's color attributes are written in.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

const NAMED: &[(&str, CssColor)] = &[
    ("black", CssColor::rgb(0, 0, 0)),
    ("silver", CssColor::rgb(192, 192, 192)),
    ("gray", CssColor::rgb(128, 128, 128)),
    ("white", CssColor::rgb(255, 255, 255)),
    ("maroon", CssColor::rgb(128, 0, 0)),
    ("red", CssColor::rgb(255, 0, 0)),
    ("purple", CssColor::rgb(128, 0, 128)),
    ("fuchsia", CssColor::rgb(255, 0, 255)),
    ("green", CssColor::rgb(0, 128, 0)),
    ("lime", CssColor::rgb(0, 255, 0)),
    ("olive", CssColor::rgb(128, 128, 0)),
    ("yellow", CssColor::rgb(255, 255, 0)),
    ("navy", CssColor::rgb(0, 0, 128)),
    ("blue", CssColor::rgb(0, 0, 255)),
    ("teal", CssColor::rgb(0, 128, 128)),
    ("aqua", CssColor::rgb(0, 255, 255)),
    ("orange", CssColor::rgb(255, 165, 0)),
    ("aliceblue", CssColor::rgb(240, 248, 255)),
    ("rebeccapurple", CssColor::rgb(102, 51, 153)),
    ("transparent", CssColor::rgba(0, 0, 0, 0)),
];

impl CssColor {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses any supported color string. Returns `None` for unknown forms.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        let lower = s.to_ascii_lowercase();
        if let Some((_, c)) = NAMED.iter().find(|(name, _)| *name == lower) {
            return Some(*c);
        }

        let open = lower.find('(')?;
        let body = lower[open + 1..].strip_suffix(')')?;
        let args: Vec<&str> = body
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match &lower[..open] {
            "rgb" | "rgba" => parse_rgb(&args),
            "hsl" | "hsla" => parse_hsl(&args),
            "hwb" => parse_hwb(&args),
            _ => None,
        }
    }

    /// Parses `s`, falling back to `fallback` when it is not a valid color.
    pub fn parse_or(s: &str, fallback: Self) -> Self {
        Self::parse(s).unwrap_or(fallback)
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#')?;
        if !s.is_ascii() {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&s[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        match s.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Formats as `#RRGGBB` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            let alpha = format!("{:.3}", f32::from(self.a) / 255.0);
            let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
            let alpha = if alpha.is_empty() { "0" } else { alpha };
            format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
        }
    }
}

fn parse_number(s: &str) -> Option<f32> {
    s.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_percent(s: &str) -> Option<f32> {
    parse_number(s.strip_suffix('%')?).map(|v| (v / 100.0).clamp(0.0, 1.0))
}

fn parse_channel(s: &str) -> Option<u8> {
    let v = match parse_percent(s) {
        Some(p) => p * 255.0,
        None => parse_number(s)?,
    };
    Some(v.round().clamp(0.0, 255.0) as u8)
}

fn parse_alpha(s: Option<&&str>) -> Option<u8> {
    let Some(s) = s else {
        return Some(255);
    };
    let a = match parse_percent(s) {
        Some(p) => p,
        None => parse_number(s)?.clamp(0.0, 1.0),
    };
    Some((a * 255.0).round() as u8)
}

fn parse_hue(s: &str) -> Option<f32> {
    let s = s.strip_suffix("deg").unwrap_or(s);
    parse_number(s).map(|h| h.rem_euclid(360.0))
}

fn parse_rgb(args: &[&str]) -> Option<CssColor> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    Some(CssColor::rgba(
        parse_channel(args[0])?,
        parse_channel(args[1])?,
        parse_channel(args[2])?,
        parse_alpha(args.get(3))?,
    ))
}

fn parse_hsl(args: &[&str]) -> Option<CssColor> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let (r, g, b) = hsl_to_rgb(
        parse_hue(args[0])?,
        parse_percent(args[1])?,
        parse_percent(args[2])?,
    );
    Some(CssColor::rgba(r, g, b, parse_alpha(args.get(3))?))
}

fn parse_hwb(args: &[&str]) -> Option<CssColor> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hue = parse_hue(args[0])?;
    let white = parse_percent(args[1])?;
    let black = parse_percent(args[2])?;
    let alpha = parse_alpha(args.get(3))?;

    if white + black >= 1.0 {
        let gray = (white / (white + black) * 255.0).round() as u8;
        return Some(CssColor::rgba(gray, gray, gray, alpha));
    }
    let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.5);
    let mix = |c: u8| {
        let v = f32::from(c) / 255.0 * (1.0 - white - black) + white;
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Some(CssColor::rgba(mix(r), mix(g), mix(b), alpha))
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let to_byte = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

fn is_digits(s: &str, max: usize) -> bool {
    !s.is_empty() && s.len() <= max && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_short_percent(s: &str) -> bool {
    s.strip_suffix('%').is_some_and(|n| is_digits(n, 3))
}

fn is_alpha_component(s: &str) -> bool {
    s == "1.0"
        || s.strip_prefix("0.").is_some_and(|d| is_digits(d, usize::MAX))
        || is_short_percent(s)
}

/// Builds a CSS color string from the component-list attribute form.
///
/// - `["ff", "88", "00"]` → `#ff8800` (three or more hex pairs)
/// - `["120", "50%", "50%"]` / `[.., "0.5"]` → `hsl(..)` / `hsla(..)`
/// - `["10", "20", "30"]` / `[.., "0.5"]` → `rgb(..)` / `rgba(..)`
/// - `["120", "10%", "20%", "hwb"]` / `[.., "0.5", "hwb"]` → `hwb(..)`
/// - a single named color is returned unchanged.
pub fn normalize_color(parts: &[&str]) -> Option<String> {
    if let [single] = parts {
        let lower = single.to_ascii_lowercase();
        if NAMED.iter().any(|(name, _)| *name == lower) {
            return Some((*single).to_string());
        }
    }

    if parts.len() >= 3
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_hexdigit()))
    {
        return Some(format!("#{}", parts.concat()));
    }

    let hsl_head = |p: &[&str]| {
        is_digits(p[0], usize::MAX) && p[1].ends_with('%') && p[2].ends_with('%')
    };
    if parts.len() == 3 && hsl_head(parts) {
        return Some(format!("hsl({})", parts.join(", ")));
    }
    if parts.len() == 4 && hsl_head(parts) && is_alpha_component(parts[3]) {
        return Some(format!("hsla({})", parts.join(", ")));
    }

    if parts.len() >= 3
        && (parts[..3].iter().all(|p| is_digits(p, 3))
            || parts[..3].iter().all(|p| is_short_percent(p)))
    {
        return match parts.len() {
            3 => Some(format!("rgb({})", parts.join(", "))),
            4 => Some(format!("rgba({})", parts.join(", "))),
            _ => None,
        };
    }

    match parts {
        [h, w, b, "hwb"] if hsl_head(parts) => Some(format!("hwb({h} {w} {b})")),
        [h, w, b, a, "hwb"] if hsl_head(parts) => Some(format!("hwb({h} {w} {b} / {a})")),
        _ => None,
    }
}

impl Serialize for CssColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for CssColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s}")))
    }
}
