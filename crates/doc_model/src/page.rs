//! Page geometry - Size presets and point-valued dimensions
//!
//! Standard sizes form a closed table that never changes at runtime; `Custom`
//! resolves from user-entered centimeters at a fixed conversion factor.

use crate::{DocModelError, Result};
use serde::{Deserialize, Serialize};

/// Points per centimeter, used to resolve custom page sizes.
pub const CM_TO_PT: f64 = 28.35;

/// Standard page size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSizePreset {
    /// A3 (297mm x 420mm)
    A3,
    /// A4 (210mm x 297mm)
    A4,
    /// A5 (148mm x 210mm)
    A5,
    /// B4 (250mm x 353mm)
    B4,
    /// B5 (176mm x 250mm)
    B5,
    /// US Letter (8.5" x 11")
    Letter,
    /// US Legal (8.5" x 14")
    Legal,
    /// Executive (7.25" x 10.5")
    Executive,
    /// User-entered size in centimeters
    Custom,
}

impl PageSizePreset {
    /// Get the dimensions in points for portrait orientation.
    ///
    /// Returns `None` for `Custom`, which has no static entry.
    pub fn dimensions(&self) -> Option<PageDimensions> {
        match self {
            PageSizePreset::A3 => Some(PageDimensions::new(842.0, 1191.0)),
            PageSizePreset::A4 => Some(PageDimensions::new(595.28, 841.89)),
            PageSizePreset::A5 => Some(PageDimensions::new(420.0, 595.0)),
            PageSizePreset::B4 => Some(PageDimensions::new(729.0, 1032.0)),
            PageSizePreset::B5 => Some(PageDimensions::new(516.0, 729.0)),
            PageSizePreset::Letter => Some(PageDimensions::new(612.0, 792.0)),
            PageSizePreset::Legal => Some(PageDimensions::new(612.0, 1008.0)),
            PageSizePreset::Executive => Some(PageDimensions::new(522.0, 756.0)),
            PageSizePreset::Custom => None,
        }
    }

    /// Get the preset name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            PageSizePreset::A3 => "A3",
            PageSizePreset::A4 => "A4",
            PageSizePreset::A5 => "A5",
            PageSizePreset::B4 => "B4",
            PageSizePreset::B5 => "B5",
            PageSizePreset::Letter => "Letter",
            PageSizePreset::Legal => "Legal",
            PageSizePreset::Executive => "Executive",
            PageSizePreset::Custom => "Custom",
        }
    }

    /// Parse a preset from its display name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "A3" => Some(PageSizePreset::A3),
            "A4" => Some(PageSizePreset::A4),
            "A5" => Some(PageSizePreset::A5),
            "B4" => Some(PageSizePreset::B4),
            "B5" => Some(PageSizePreset::B5),
            "Letter" => Some(PageSizePreset::Letter),
            "Legal" => Some(PageSizePreset::Legal),
            "Executive" => Some(PageSizePreset::Executive),
            "Custom" => Some(PageSizePreset::Custom),
            _ => None,
        }
    }
}

impl Default for PageSizePreset {
    fn default() -> Self {
        PageSizePreset::A4
    }
}

/// Custom page dimensions entered in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomPageSize {
    /// Width in centimeters
    pub width: f64,
    /// Height in centimeters
    pub height: f64,
}

impl CustomPageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert to points at [`CM_TO_PT`]
    pub fn to_points(&self) -> PageDimensions {
        PageDimensions::new(self.width * CM_TO_PT, self.height * CM_TO_PT)
    }
}

/// Immutable page width/height pair in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    /// Width in points
    pub width: f64,
    /// Height in points
    pub height: f64,
}

impl PageDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolve a preset (plus custom centimeters, if applicable) to point geometry.
///
/// Fails only when `Custom` is selected without usable dimensions; callers
/// must treat that as a configuration error and refuse to export.
pub fn resolve_page_size(
    preset: PageSizePreset,
    custom: Option<CustomPageSize>,
) -> Result<PageDimensions> {
    match preset.dimensions() {
        Some(dims) => Ok(dims),
        None => {
            let custom = custom.ok_or(DocModelError::MissingCustomPageSize)?;
            if custom.width <= 0.0 || custom.height <= 0.0 {
                return Err(DocModelError::InvalidPageDimensions {
                    width: custom.width,
                    height: custom.height,
                });
            }
            Ok(custom.to_points())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dimensions() {
        let a4 = PageSizePreset::A4.dimensions().unwrap();
        assert_eq!(a4.width, 595.28);
        assert_eq!(a4.height, 841.89);

        let letter = PageSizePreset::Letter.dimensions().unwrap();
        assert_eq!(letter.width, 612.0);
        assert_eq!(letter.height, 792.0);

        assert!(PageSizePreset::Custom.dimensions().is_none());
    }

    #[test]
    fn test_custom_conversion() {
        // 10cm x 15cm => 283.5pt x 425.25pt
        let dims =
            resolve_page_size(PageSizePreset::Custom, Some(CustomPageSize::new(10.0, 15.0)))
                .unwrap();
        assert!((dims.width - 283.5).abs() < 1e-9);
        assert!((dims.height - 425.25).abs() < 1e-9);
    }

    #[test]
    fn test_custom_requires_dimensions() {
        let err = resolve_page_size(PageSizePreset::Custom, None).unwrap_err();
        assert!(matches!(err, DocModelError::MissingCustomPageSize));
    }

    #[test]
    fn test_custom_rejects_non_positive() {
        let err = resolve_page_size(
            PageSizePreset::Custom,
            Some(CustomPageSize::new(0.0, 29.7)),
        )
        .unwrap_err();
        assert!(matches!(err, DocModelError::InvalidPageDimensions { .. }));
    }

    #[test]
    fn test_named_size_ignores_custom() {
        let dims = resolve_page_size(
            PageSizePreset::Legal,
            Some(CustomPageSize::new(10.0, 10.0)),
        )
        .unwrap();
        assert_eq!(dims.width, 612.0);
        assert_eq!(dims.height, 1008.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Custom geometry is always centimeters times 28.35, both axes
            #[test]
            fn custom_scales_linearly(width in 0.1..100.0f64, height in 0.1..100.0f64) {
                let dims = resolve_page_size(
                    PageSizePreset::Custom,
                    Some(CustomPageSize::new(width, height)),
                )
                .unwrap();
                prop_assert!((dims.width - width * CM_TO_PT).abs() < 1e-9);
                prop_assert!((dims.height - height * CM_TO_PT).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_name_round_trip() {
        for preset in [
            PageSizePreset::A3,
            PageSizePreset::A4,
            PageSizePreset::A5,
            PageSizePreset::B4,
            PageSizePreset::B5,
            PageSizePreset::Letter,
            PageSizePreset::Legal,
            PageSizePreset::Executive,
            PageSizePreset::Custom,
        ] {
            assert_eq!(PageSizePreset::from_name(preset.display_name()), Some(preset));
        }
        assert_eq!(PageSizePreset::from_name("Tabloid"), None);
    }
}
