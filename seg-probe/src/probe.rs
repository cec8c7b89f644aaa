use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;

use pcb_seg::geometry::primitives::{Point, Seg};

use crate::config::ProbeConfig;
use crate::io::ext_repr::{ExtQuery, ExtQueryBatch};
use crate::io::report::{ProbeReport, QueryResult};

/// Evaluates a single query: segment `a` of the query is taken as the reference
pub fn evaluate(query: &ExtQuery, config: &ProbeConfig) -> QueryResult {
    let (a, b) = (query.a.to_seg(), query.b.to_seg());
    let clearance = query.clearance.unwrap_or(config.default_clearance);
    if clearance < 0 {
        warn!("query {}: negative clearance {clearance} treated as 0", query.id);
    }
    if a.is_degenerate() || b.is_degenerate() {
        debug!("query {}: zero-length segment in {a} / {b}", query.id);
    }

    let sq_distance = a.seg_squared_distance(&b);
    let collide = a.collide(&b, clearance);
    QueryResult {
        id: query.id,
        intersection: a.intersect(&b, config.ignore_endpoints, false),
        line_intersection: a.intersect_lines(&b),
        sq_distance,
        distance: pcb_seg::util::isqrt(sq_distance),
        clearance,
        collide,
        violation_at: collide.then(|| violation_marker(&a, &b)),
        collinear: a.collinear(&b),
        side_of_b: (a.side(b.a()).signum(), a.side(b.b()).signum()),
    }
}

/// Evaluates all queries of the batch, in parallel if configured, and bundles them in a report
pub fn run(batch: &ExtQueryBatch, config: ProbeConfig) -> ProbeReport {
    let results = match config.parallel {
        true => batch.queries.par_iter().map(|q| evaluate(q, &config)).collect::<Vec<_>>(),
        false => batch.queries.iter().map(|q| evaluate(q, &config)).collect_vec(),
    };
    let n_colliding = results.iter().filter(|r| r.collide).count();

    info!(
        "[PROBE] {}: {} queries evaluated, {} colliding",
        batch.name,
        results.len(),
        n_colliding
    );
    for r in results.iter().filter(|r| r.collide) {
        debug!("[PROBE] query {} collides (distance: {}, clearance: {})", r.id, r.distance, r.clearance);
    }

    ProbeReport {
        name: batch.name.clone(),
        config,
        n_colliding,
        results,
    }
}

/// Point on `a` closest to `b`, useful to locate a clearance violation
pub fn violation_marker(a: &Seg, b: &Seg) -> Point {
    match a.intersect(b, false, false) {
        Some(ip) => ip,
        None => [b.a(), b.b()]
            .into_iter()
            .map(|p| a.nearest_point(p))
            .chain([a.a(), a.b()])
            .min_by_key(|p| b.squared_distance(*p))
            .unwrap_or(a.a()),
    }
}
