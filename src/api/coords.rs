use regex::Regex;
use std::sync::LazyLock;

// Matches a full DMS pair like: 4°39'1.34"N 101°5'6.43"E
// The minute and second marks are optional; the degree glyph is not.
static DMS_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(\d+)°\s*(\d+)'?\s*(\d+\.?\d*)"?\s*([NS])\s+(\d+)°\s*(\d+)'?\s*(\d+\.?\d*)"?\s*([EW])"#,
    )
    .expect("DMS pattern is valid")
});

// "lat, lon" with nothing but whitespace around the two numbers.
static DECIMAL_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+\.?\d*)\s*,\s*(-?\d+\.?\d*)\s*$").expect("decimal pattern is valid")
});

/// A validated latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Coordinates {
    pub(super) latitude: f64,
    pub(super) longitude: f64,
}

impl Coordinates {
    /// Out-of-range input is rejected, never clamped.
    pub(super) fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum Notation {
    #[default]
    Sexagesimal,
    Decimal,
}

pub(super) fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

pub(super) fn hemisphere_sign(letter: &str) -> f64 {
    if letter.eq_ignore_ascii_case("S") || letter.eq_ignore_ascii_case("W") {
        -1.0
    } else {
        1.0
    }
}

/// Parse DMS notation, e.g. `4°39'1.34"N 101°5'6.43"E`.
/// Both groups must be present.
pub(super) fn parse_dms(input: &str) -> Option<Coordinates> {
    let caps = DMS_PAIR.captures(input)?;
    let num = |i: usize| caps[i].parse::<f64>().ok();

    let latitude = dms_to_decimal(num(1)?, num(2)?, num(3)?) * hemisphere_sign(&caps[4]);
    let longitude = dms_to_decimal(num(5)?, num(6)?, num(7)?) * hemisphere_sign(&caps[8]);

    Coordinates::new(latitude, longitude)
}

/// Parse decimal notation, e.g. `3.1578, 101.7117`.
pub(super) fn parse_decimal(input: &str) -> Option<Coordinates> {
    let caps = DECIMAL_PAIR.captures(input)?;
    let latitude = caps[1].parse::<f64>().ok()?;
    let longitude = caps[2].parse::<f64>().ok()?;
    Coordinates::new(latitude, longitude)
}

/// Parse either supported notation, DMS first.
pub(super) fn parse_coordinates(input: &str) -> Option<Coordinates> {
    parse_dms(input).or_else(|| parse_decimal(input))
}

fn axis_to_dms(value: f64) -> String {
    let abs = value.abs();
    let degrees = abs.floor();
    let min_float = (abs - degrees) * 60.0;
    let minutes = min_float.floor();
    let seconds = (min_float - minutes) * 60.0;
    format!("{}°{}'{:.2}\"", degrees as u32, minutes as u32, seconds)
}

/// Render a pair in DMS notation with seconds to two decimal places.
pub(super) fn to_dms(latitude: f64, longitude: f64) -> String {
    let lat_hemisphere = if latitude >= 0.0 { 'N' } else { 'S' };
    let lon_hemisphere = if longitude >= 0.0 { 'E' } else { 'W' };
    format!(
        "{}{} {}{}",
        axis_to_dms(latitude),
        lat_hemisphere,
        axis_to_dms(longitude),
        lon_hemisphere
    )
}

pub(super) fn format_coordinates(coords: Coordinates, notation: Notation) -> String {
    match notation {
        Notation::Sexagesimal => to_dms(coords.latitude, coords.longitude),
        Notation::Decimal => format!("{:.6}, {:.6}", coords.latitude, coords.longitude),
    }
}

/// Cheap routing hint: does this string resemble coordinate notation at all?
/// Positives may still fail to parse; plain place names must stay negative.
pub(super) fn looks_like_coordinates(input: &str) -> bool {
    static DEGREE_MARK: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\d+°").expect("degree pattern is valid"));
    static DECIMAL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^-?\d+\.?\d*\s*,\s*-?\d+\.?\d*$").expect("decimal shape pattern is valid")
    });

    DEGREE_MARK.is_match(input) || DECIMAL_SHAPE.is_match(input.trim())
}
