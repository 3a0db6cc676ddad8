use coreui::dom::Align;
use coreui::prelude::*;

use super::{Kit, caption};
use crate::showcase::PropsTable;

const PEOPLE: &[(&str, ColorScheme)] = &[
    ("Ada Lovelace", ColorScheme::Primary),
    ("Grace Hopper", ColorScheme::Teal),
    ("Alan Turing", ColorScheme::Orange),
    ("Barbara Liskov", ColorScheme::Purple),
    ("Edsger Dijkstra", ColorScheme::Green),
    ("Margaret Hamilton", ColorScheme::Pink),
    ("Ken Thompson", ColorScheme::Cyan),
];

fn person(index: usize) -> Avatar {
    let (name, color) = PEOPLE[index % PEOPLE.len()];
    Avatar::new().name(name).color(color)
}

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let sizes = kit
        .showcase("avatar-sizes", "Sizes")
        .description("Initials come from the first and last word of the name.")
        .preview(
            Element::row()
                .gap(2)
                .align(Align::End)
                .children(AvatarSize::ALL.iter().enumerate().map(|(i, size)| {
                    person(i).size(*size).build(r, &none)
                })),
        )
        .code(
            r#"
Avatar::new()
    .name("Ada Lovelace")
    .size(AvatarSize::Lg)
    .color(ColorScheme::Primary)
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    let status = kit
        .showcase("avatar-status", "Status")
        .preview(
            Element::row()
                .gap(3)
                .children(AvatarStatus::ALL.iter().enumerate().map(|(i, status)| {
                    Element::col()
                        .gap(1)
                        .child(person(i).size(AvatarSize::Lg).status(*status).build(r, &none))
                        .child(caption(status.name()))
                })),
        )
        .code(
            r#"
Avatar::new().name("Grace Hopper").status(AvatarStatus::Online)
"#,
        )
        .build(r);

    let fallback = kit
        .showcase("avatar-fallback", "Fallback and Radius")
        .description("Without a name the avatar shows a person glyph. Images are never drawn.")
        .preview(
            Element::row()
                .gap(2)
                .child(Avatar::new().size(AvatarSize::Lg).build(r, &none))
                .child(
                    Avatar::new()
                        .name("Linus")
                        .src("https://example.com/linus.png")
                        .size(AvatarSize::Lg)
                        .build(r, &none),
                )
                .children(Radius::ALL.iter().enumerate().map(|(i, radius)| {
                    person(i).size(AvatarSize::Lg).radius(*radius).build(r, &none)
                })),
        )
        .code(
            r#"
Avatar::new().size(AvatarSize::Lg)
Avatar::new().name("Linus").radius(Radius::None)
"#,
        )
        .build(r);

    let group = kit
        .showcase("avatar-group", "Avatar Group")
        .description("Past max, the rest collapse into a +N avatar.")
        .preview(
            AvatarGroup::new()
                .max(4)
                .size(AvatarSize::Sm)
                .avatars((0..PEOPLE.len()).map(person))
                .build(r, &none),
        )
        .preview(
            AvatarGroup::new()
                .max(3)
                .size(AvatarSize::Lg)
                .avatars((0..PEOPLE.len()).map(person))
                .build(r, &none),
        )
        .code(
            r#"
AvatarGroup::new()
    .max(4)
    .avatars(team.iter().map(|name| Avatar::new().name(name)))
    .build(&registry, &handlers)
"#,
        )
        .build(r);

    vec![
        sizes,
        status,
        fallback,
        group,
        PropsTable::new("avatar-props", Avatar::PROPS)
            .title("Avatar Props")
            .build(r),
        PropsTable::new("avatar-group-props", AvatarGroup::PROPS)
            .title("AvatarGroup Props")
            .build(r),
    ]
}
