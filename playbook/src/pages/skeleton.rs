use coreui::prelude::*;

use super::{Kit, caption};
use crate::showcase::PropsTable;

pub fn sections(kit: &Kit) -> Vec<Element> {
    let none = WidgetHandlers::new();
    let r = kit.registry;

    let basic = kit
        .showcase("skeleton-basic", "Basic")
        .preview(
            Element::col()
                .gap(1)
                .child(Skeleton::new().height(2).build(r, &none))
                .child(Skeleton::new().width(Size::Percent(0.6)).build(r, &none))
                .child(Skeleton::new().text().build(r, &none)),
        )
        .code(
            r#"
Skeleton::new().height(2).build(&registry, &handlers)
Skeleton::new().text()
"#,
        )
        .build(r);

    let animations = kit
        .showcase("skeleton-animations", "Animations")
        .preview(Element::col().gap(1).children(SkeletonAnimation::ALL.iter().map(|animation| {
            Element::row()
                .gap(2)
                .child(caption(animation.name()).width(Size::Fixed(6)))
                .child(
                    Skeleton::new()
                        .animation(*animation)
                        .radius(Radius::Full)
                        .build(r, &none),
                )
        })))
        .code(
            r#"
Skeleton::new().animation(SkeletonAnimation::Wave)
"#,
        )
        .build(r);

    let composed = kit
        .showcase("skeleton-composed", "Loading a Card")
        .description("A circle and a few text lines stand in for a profile card.")
        .preview(
            Element::row()
                .gap(2)
                .child(SkeletonCircle::new().size(6).build(r, &none))
                .child(
                    Element::col()
                        .flex_grow(1)
                        .child(SkeletonText::new().lines(3).spacing(Spacing::Xs).build(r, &none)),
                ),
        )
        .code(
            r#"
SkeletonCircle::new().size(6)
SkeletonText::new().lines(3)
"#,
        )
        .build(r);

    vec![
        basic,
        animations,
        composed,
        PropsTable::new("skeleton-props", Skeleton::PROPS)
            .title("Skeleton Props")
            .build(r),
        PropsTable::new("skeleton-text-props", SkeletonText::PROPS)
            .title("SkeletonText Props")
            .build(r),
        PropsTable::new("skeleton-circle-props", SkeletonCircle::PROPS)
            .title("SkeletonCircle Props")
            .build(r),
    ]
}
