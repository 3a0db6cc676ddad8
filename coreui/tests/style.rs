use coreui::dom::{Border, Style, Theme};
use coreui::style::ColorScheme;
use coreui::theme::{ThemeMode, build_theme};
use coreui::tokens::{Brand, Breakpoint, Hue, Radius, Semantic, Shade, Spacing};
use coreui::widgets::{
    AlertVariant, BadgeVariant, ButtonSize, ButtonVariant, CardVariant, FieldVariant, Placement,
    SpinnerSize,
};

#[test]
fn test_parse_is_strict_and_case_insensitive() {
    assert_eq!(ButtonVariant::parse("Outline"), Ok(ButtonVariant::Outline));
    assert_eq!(" 2xl ".parse::<coreui::widgets::AvatarSize>().map(|s| s.name()), Ok("2xl"));

    let err = ButtonVariant::parse("raised").unwrap_err();
    assert_eq!(err.kind, "button variant");
    assert_eq!(err.to_string(), "unknown button variant `raised`");
}

#[test]
fn test_from_name_falls_back_to_default() {
    assert_eq!(ButtonSize::from_name("huge"), ButtonSize::default());
    assert_eq!(Placement::from_name("nowhere"), Placement::BottomStart);
    assert_eq!(ColorScheme::from_name("teal"), ColorScheme::Teal);
}

#[test]
fn test_names_round_trip() {
    for variant in ButtonVariant::ALL {
        assert_eq!(ButtonVariant::parse(variant.name()), Ok(*variant));
        assert_eq!(variant.to_string(), variant.name());
    }
    assert_eq!(ColorScheme::ALL.len(), 28);
    assert_eq!(Placement::ALL.len(), 12);
}

#[test]
fn test_color_scheme_sets() {
    assert_eq!(ColorScheme::Primary.semantic(), Some(Semantic::Primary));
    assert_eq!(ColorScheme::Primary.hue(), None);
    assert_eq!(ColorScheme::Rose.hue(), Some(Hue::Rose));
    assert!(!ColorScheme::Rose.is_semantic());
    // Gray and neutral count as both
    assert!(ColorScheme::Gray.is_semantic());
    assert_eq!(ColorScheme::Gray.hue(), Some(Hue::Gray));
}

#[test]
fn test_theme_resolves_every_color_scheme() {
    for mode in ThemeMode::ALL {
        let theme = build_theme(*mode, &Brand::default());
        for color in ColorScheme::ALL {
            for shade in [Shade::S50, Shade::S500, Shade::S950] {
                let name = format!("{}-{}", color.name(), shade.name());
                assert!(theme.resolve(&name).is_some(), "{} missing in {}", name, mode);
            }
        }
        for role in ["bg", "surface", "overlay", "fg", "muted", "border", "subtle"] {
            assert!(theme.resolve(role).is_some(), "{} missing in {}", role, mode);
        }
    }
}

#[test]
fn test_brand_remaps_semantic_hue() {
    let brand = Brand::default().with(Semantic::Primary, Hue::Emerald);
    assert_eq!(brand.hue(Semantic::Primary), Hue::Emerald);
    assert_eq!(brand.hue(Semantic::Error), Hue::Red);
}

#[test]
fn test_every_variant_has_a_look() {
    for variant in ButtonVariant::ALL {
        assert_ne!(variant.style(ColorScheme::Primary, Radius::Md), Style::default());
        assert_ne!(variant.focused_style(ColorScheme::Primary), Style::default());
    }
    for variant in BadgeVariant::ALL {
        assert_ne!(variant.style(ColorScheme::Success, Radius::Full), Style::default());
    }
    for variant in AlertVariant::ALL {
        assert_ne!(variant.style(ColorScheme::Warning), Style::default());
    }
    for variant in CardVariant::ALL {
        assert_ne!(variant.style(Radius::Lg), Style::default());
    }
    for variant in FieldVariant::ALL {
        assert_ne!(variant.style(false), variant.style(true));
    }
}

#[test]
fn test_color_changes_solid_button() {
    let primary = ButtonVariant::Solid.style(ColorScheme::Primary, Radius::Md);
    let error = ButtonVariant::Solid.style(ColorScheme::Error, Radius::Md);
    assert_ne!(primary, error);
}

#[test]
fn test_radius_borders() {
    assert_eq!(Radius::None.border(), Border::Single);
    assert_ne!(Radius::Lg.border(), Radius::None.border());
}

#[test]
fn test_spacing_is_monotonic() {
    let cells: Vec<u16> = Spacing::ALL.iter().map(|s| s.cells()).collect();
    assert!(cells.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_breakpoints() {
    assert_eq!(Breakpoint::at(30), None);
    assert_eq!(Breakpoint::at(80), Some(Breakpoint::Md));
    assert_eq!(Breakpoint::at(200), Some(Breakpoint::Xl));
    assert!(Breakpoint::Md.reached(64));
    assert!(!Breakpoint::Md.reached(63));
}

#[test]
fn test_spinner_frames_by_size() {
    for size in SpinnerSize::ALL {
        assert!(size.frames().len() > 1, "{} spinner does not animate", size);
    }
}
