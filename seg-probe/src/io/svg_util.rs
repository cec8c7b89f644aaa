use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;

use pcb_seg::geometry::primitives::Seg;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///Stroke width of the drawn segments, in board units
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    ///Mark the location of clearance violations with a dot
    #[serde(default)]
    pub show_intersections: bool,
    ///Color of segment pairs within clearance
    #[serde(default = "default_collision_color")]
    pub collision_color: Color,
    ///Color of segment pairs that keep their clearance
    #[serde(default = "default_clear_color")]
    pub clear_color: Color,
}

fn default_stroke_width() -> f32 {
    1.0
}

fn default_collision_color() -> Color {
    Color(0xD0, 0x00, 0x00)
}

fn default_clear_color() -> Color {
    Color(0x2D, 0x2D, 0x2D)
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            show_intersections: true,
            collision_color: default_collision_color(),
            clear_color: default_clear_color(),
        }
    }
}

pub fn seg_data(seg: &Seg) -> Data {
    Data::new()
        .move_to::<(f32, f32)>(seg.a().into())
        .line_to::<(f32, f32)>(seg.b().into())
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        ensure!(s.len() == 6 && s.is_ascii(), "invalid color: {s}");
        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
