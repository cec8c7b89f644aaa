use serde::{Deserialize, Serialize};

use pcb_seg::Coord;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of the probe
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ProbeConfig {
    /// Clearance used for queries which do not define their own
    pub default_clearance: Coord,
    /// Do not report intersections where the segments merely touch at a shared endpoint
    pub ignore_endpoints: bool,
    /// Evaluate the queries on all available threads
    pub parallel: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            default_clearance: 0,
            ignore_endpoints: false,
            parallel: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
