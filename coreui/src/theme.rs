//! Builds the color theme the renderer resolves variables against.
//!
//! Variables:
//! - `<hue>-<shade>` for every palette entry, e.g. `blue-500`
//! - `<semantic>-<shade>` aliasing the brand hue, e.g. `primary-500`
//! - surface roles: `bg`, `surface`, `overlay`, `fg`, `muted`, `border`,
//!   `subtle`, plus `white` and `black`

use coreui_dom::{Color, MapTheme};

use crate::style::named_enum;
use crate::tokens::{Brand, Hue, Semantic, Shade};

named_enum! {
    pub enum ThemeMode ("theme") {
        Dark = "dark",
        Light = "light",
    }
    default Dark
}

fn var(hue: Hue, shade: Shade) -> Color {
    Color::var(format!("{}-{}", hue.name(), shade.name()))
}

pub fn build_theme(mode: ThemeMode, brand: &Brand) -> MapTheme {
    let mut theme = MapTheme::new();

    for hue in Hue::ALL {
        for shade in Shade::ALL {
            theme.set(format!("{}-{}", hue.name(), shade.name()), hue.color(*shade));
        }
    }

    for semantic in Semantic::ALL {
        let hue = brand.hue(*semantic);
        for shade in Shade::ALL {
            theme.set(
                format!("{}-{}", semantic.name(), shade.name()),
                var(hue, *shade),
            );
        }
    }

    theme.set("white", Color::rgb(255, 255, 255));
    theme.set("black", Color::rgb(0, 0, 0));

    let roles = match mode {
        ThemeMode::Dark => [
            ("bg", var(Hue::Slate, Shade::S950)),
            ("surface", var(Hue::Slate, Shade::S900)),
            ("overlay", var(Hue::Slate, Shade::S800)),
            ("fg", var(Hue::Slate, Shade::S100)),
            ("muted", var(Hue::Slate, Shade::S400)),
            ("border", var(Hue::Slate, Shade::S700)),
            ("subtle", var(Hue::Slate, Shade::S800)),
        ],
        ThemeMode::Light => [
            ("bg", var(Hue::Slate, Shade::S50)),
            ("surface", Color::var("white")),
            ("overlay", var(Hue::Slate, Shade::S100)),
            ("fg", var(Hue::Slate, Shade::S900)),
            ("muted", var(Hue::Slate, Shade::S500)),
            ("border", var(Hue::Slate, Shade::S300)),
            ("subtle", var(Hue::Slate, Shade::S100)),
        ],
    };
    for (name, color) in roles {
        theme.set(name, color);
    }

    log::debug!("build_theme mode={} vars={}", mode, theme.len());
    theme
}
