//! Font catalog
//!
//! The editor ships a fixed list of Urdu typefaces. No font files are loaded
//! here; exporters only ever need the family names.

/// Family used when no other is configured
pub const DEFAULT_FAMILY: &str = "Jameel Noori Nastaleeq";

/// Smallest selectable font size in points
pub const MIN_FONT_SIZE: f64 = 12.0;
/// Largest selectable font size in points
pub const MAX_FONT_SIZE: f64 = 44.0;

/// Typefaces offered by the format toolbar
pub const FAMILIES: &[&str] = &[
    "Jameel Noori Nastaleeq",
    "Mehr Nastaleeq",
    "Nafees Nastaleeq",
    "Faiz Lahori Nastaleeq",
    "Noori Nastaleeq",
    "Alvi Nastaleeq",
    "Aslam Lashkari Nastaleeq",
    "Pak Nastaleeq",
    "Khadim Quranic",
    "Amna",
    "Qalam Quran Majeed",
    "Fajer Noori Nastaleeq",
    "Hussaini Nastaleeq",
    "Urdu Typesetting",
    "Awami Nastaleeq",
];

/// Whether `family` is one of the bundled typefaces (case-insensitive)
pub fn is_known_family(family: &str) -> bool {
    FAMILIES.iter().any(|f| f.eq_ignore_ascii_case(family))
}

/// Clamp a requested size to the selectable range
pub fn clamp_size(size: f64) -> f64 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}
