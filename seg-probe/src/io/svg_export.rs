use itertools::Itertools;
use svg::Document;
use svg::node::element::{Circle, Group, Path, Title};

use pcb_seg::Coord;
use pcb_seg::geometry::primitives::Seg;

use crate::io::ext_repr::ExtQueryBatch;
use crate::io::report::QueryResult;
use crate::io::svg_util::{SvgDrawOptions, seg_data};

/// Draws every query of the batch: both segments, colored by their collision verdict
pub fn batch_to_svg(batch: &ExtQueryBatch, results: &[QueryResult], options: SvgDrawOptions) -> Document {
    let segs = batch
        .queries
        .iter()
        .flat_map(|q| [q.a.to_seg(), q.b.to_seg()])
        .collect_vec();

    let stroke_width = options.stroke_width;
    let view_box = view_box(&segs, 10.0 * stroke_width);

    let mut document = Document::new().set("viewBox", view_box);

    for (query, result) in batch.queries.iter().zip(results) {
        let color = match result.collide {
            true => options.collision_color,
            false => options.clear_color,
        };
        let mut group = Group::new()
            .set("id", format!("query_{}", query.id))
            .add(Title::new(format!(
                "query {}: distance {}, clearance {}",
                query.id, result.distance, result.clearance
            )));

        for seg in [query.a.to_seg(), query.b.to_seg()] {
            group = group.add(
                Path::new()
                    .set("d", seg_data(&seg))
                    .set("fill", "none")
                    .set("stroke", format!("{color}"))
                    .set("stroke-width", stroke_width)
                    .set("stroke-linecap", "round"),
            );
        }

        if let (true, Some(ip)) = (options.show_intersections, result.violation_at) {
            group = group.add(
                Circle::new()
                    .set("cx", ip.x)
                    .set("cy", ip.y)
                    .set("r", 2.0 * stroke_width)
                    .set("fill", format!("{}", options.collision_color)),
            );
        }
        document = document.add(group);
    }
    document
}

fn view_box(segs: &[Seg], margin: f32) -> (f32, f32, f32, f32) {
    let (x_min, x_max) = segs
        .iter()
        .flat_map(|s| [s.a().x, s.b().x])
        .minmax()
        .into_option()
        .unwrap_or((0, 0));
    let (y_min, y_max) = segs
        .iter()
        .flat_map(|s| [s.a().y, s.b().y])
        .minmax()
        .into_option()
        .unwrap_or((0, 0));
    let width = |lo: Coord, hi: Coord| (hi as f32 - lo as f32) + 2.0 * margin;

    (
        x_min as f32 - margin,
        y_min as f32 - margin,
        width(x_min, x_max),
        width(y_min, y_max),
    )
}
