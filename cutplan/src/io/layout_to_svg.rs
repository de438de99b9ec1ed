use crate::entities::SheetLayout;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Renders a sheet as an SVG document: the sheet outline, one rectangle per
/// placed piece and a label with the sheet's key figures.
pub fn sheet_to_svg(sheet: &SheetLayout, title: &str) -> Document {
    let margin = f32::max(sheet.width, sheet.length) * 0.05;
    let font_size = f32::min(sheet.width, sheet.length.max(1.0)) * 0.03;

    let label = Text::new(format!(
        "width: {:.1} | length: {:.1} | utilization: {:.1}% | {}",
        sheet.width,
        sheet.length,
        sheet.utilization() * 100.0,
        title,
    ))
    .set("x", 0)
    .set("y", -0.5 * margin)
    .set("font-size", font_size)
    .set("font-family", "monospace");

    let outline = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", sheet.width)
        .set("height", sheet.length)
        .set("fill", "#fff")
        .set("stroke", "black")
        .set("stroke-width", margin * 0.05);

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                sheet.width + 2.0 * margin,
                sheet.length + 2.0 * margin,
            ),
        )
        .add(label)
        .add(outline);

    for p in &sheet.placed {
        let title = Title::new(format!(
            "piece {} copy {}, {:.1} x {:.1} at ({:.1}, {:.1}), rot {}°",
            p.piece_id,
            p.copy,
            p.width,
            p.height,
            p.x,
            p.y,
            p.rotation.degrees()
        ));
        let rect = Rectangle::new()
            .set("x", p.x)
            .set("y", p.y)
            .set("width", p.width)
            .set("height", p.height)
            .set("fill", "#BEDEF1")
            .set("fill-opacity", 0.8)
            .set("stroke", "black")
            .set("stroke-width", margin * 0.02);
        let tag = Text::new(format!("{}.{}", p.piece_id, p.copy))
            .set("x", p.x + p.width / 2.0)
            .set("y", p.y + p.height / 2.0)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("text-anchor", "middle");

        let group = Group::new()
            .set("id", format!("piece_{}_{}", p.piece_id, p.copy))
            .add(title)
            .add(rect)
            .add(tag);
        document = document.add(group);
    }

    document
}
