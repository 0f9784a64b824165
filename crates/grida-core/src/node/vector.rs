//! Vector node.

use super::{NodeBase, Positioning};
use crate::paint::{FillRule, Paint, StrokeCap, StrokeJoin};
use crate::vn::VectorNetwork;
use serde::{Deserialize, Serialize};

fn default_miter_limit() -> f64 {
    4.0
}

/// Stroke attributes of a vector node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    #[serde(default)]
    pub cap: StrokeCap,
    #[serde(default)]
    pub join: StrokeJoin,
    #[serde(default = "default_miter_limit")]
    pub miter_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<Vec<f64>>,
}

impl Stroke {
    pub fn new(paint: Paint, width: f64) -> Self {
        Self {
            paint,
            width,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
            miter_limit: default_miter_limit(),
            dash_array: None,
        }
    }

    /// kurbo stroke style for these attributes.
    pub fn to_kurbo(&self) -> kurbo::Stroke {
        let stroke = kurbo::Stroke::new(self.width)
            .with_caps(self.cap.into())
            .with_join(self.join.into())
            .with_miter_limit(self.miter_limit);
        match &self.dash_array {
            Some(dashes) => stroke.with_dashes(0.0, dashes.iter().copied()),
            None => stroke,
        }
    }
}

/// Geometry stored as a vector network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorNode {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(flatten)]
    pub positioning: Positioning,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default)]
    pub fill_rule: FillRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    pub vector_network: VectorNetwork,
    /// Intrinsic width, from the network's bounding box.
    pub layout_target_width: f64,
    /// Intrinsic height, from the network's bounding box.
    pub layout_target_height: f64,
}

impl VectorNode {
    /// Vector node sized to the network's bounding box.
    pub fn new(base: NodeBase, vector_network: VectorNetwork) -> Self {
        let bbox = vector_network.bounding_box();
        Self {
            base,
            positioning: Positioning::default(),
            fill: None,
            fill_rule: FillRule::default(),
            stroke: None,
            vector_network,
            layout_target_width: bbox.width(),
            layout_target_height: bbox.height(),
        }
    }
}
