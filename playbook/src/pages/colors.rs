use coreui::dom::{Color, Element, Size, Style};
use coreui::tokens::{Hue, Semantic, Shade};

use super::{Kit, caption};

const LABEL_WIDTH: u16 = 10;
const SWATCH_WIDTH: u16 = 5;

fn swatch(color: Color) -> Element {
    Element::fill(' ')
        .width(Size::Fixed(SWATCH_WIDTH))
        .height(Size::Fixed(1))
        .style(Style::new().background(color))
}

/// One labelled row of swatches, one per shade of `name`.
fn scale(name: &str) -> Element {
    Element::row()
        .child(Element::text(name).width(Size::Fixed(LABEL_WIDTH)))
        .children(
            Shade::ALL
                .iter()
                .map(|shade| swatch(Color::var(format!("{}-{}", name, shade.name())))),
        )
}

fn shade_header() -> Element {
    Element::row()
        .child(Element::text("").width(Size::Fixed(LABEL_WIDTH)))
        .children(Shade::ALL.iter().map(|shade| {
            caption(shade.name()).width(Size::Fixed(SWATCH_WIDTH))
        }))
}

fn semantic_rows(semantics: &[Semantic]) -> Element {
    Element::col()
        .child(shade_header())
        .children(semantics.iter().map(|s| scale(s.name())))
}

pub fn sections(kit: &Kit) -> Vec<Element> {
    let brand = kit
        .showcase("colors-brand", "Brand Colors")
        .description("Primary and secondary map onto palette hues through `Brand`.")
        .preview(semantic_rows(&[Semantic::Primary, Semantic::Secondary]))
        .code(
            r#"
let brand = Brand::default().with(Semantic::Primary, Hue::Emerald);
let theme = build_theme(ThemeMode::Dark, &brand);
"#,
        )
        .build(kit.registry);

    let semantic = kit
        .showcase("colors-semantic", "Semantic Colors")
        .description("Status colors used by alerts, badges and validation.")
        .preview(semantic_rows(&[
            Semantic::Success,
            Semantic::Warning,
            Semantic::Error,
            Semantic::Info,
        ]))
        .code(
            r#"
Badge::new("Saved").color(ColorScheme::Success)
"#,
        )
        .build(kit.registry);

    let palette = kit
        .showcase("colors-palette", "Palette")
        .description("22 hues, 11 shades each, generated in OKLCH.")
        .preview(
            Element::col()
                .child(shade_header())
                .children(Hue::ALL.iter().map(|hue| scale(hue.name()))),
        )
        .code(
            r#"
let accent = ColorScheme::Blue.shade(Shade::S500);
Style::new().foreground(accent)
"#,
        )
        .build(kit.registry);

    let roles = ["bg", "surface", "overlay", "fg", "muted", "border", "subtle"];
    let roles = kit
        .showcase("colors-roles", "Theme Roles")
        .description("Surface roles switch with the light and dark themes.")
        .preview(
            Element::row().gap(1).children(roles.iter().map(|role| {
                Element::col()
                    .child(swatch(Color::var(*role)))
                    .child(caption(*role))
            })),
        )
        .code(
            r#"
Style::new()
    .background(Color::var("surface"))
    .foreground(Color::var("fg"))
"#,
        )
        .build(kit.registry);

    vec![brand, semantic, palette, roles]
}
