use serde::{Deserialize, Serialize};

use crate::scene::{RenderOrder, SortingLayer};

/// Which part of the render bucket a field drives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortingMapType {
    /// Followers take the area's order-in-layer and keep their layer.
    #[default]
    OrderInLayer,
    /// Followers take the area's sorting layer and keep their order.
    SortingLayer,
}

/// One reference point along a field's forward axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortingArea {
    /// Distance from the field origin along the forward axis.
    #[serde(rename = "offset")]
    pub axis_offset: f32,

    /// Scale in percent reached at this area.
    #[serde(default = "default_scale")]
    pub scale: i32,

    /// Order-in-layer applied to followers inside this area.
    #[serde(default)]
    pub order: RenderOrder,

    /// Sorting layer applied to followers inside this area.
    #[serde(default)]
    pub layer: SortingLayer,
}

fn default_scale() -> i32 {
    100
}

impl SortingArea {
    /// Area at `axis_offset` with the given scale, order 0 on the default layer.
    pub fn new(axis_offset: f32, scale: i32) -> Self {
        Self {
            axis_offset,
            scale,
            order: RenderOrder::default(),
            layer: SortingLayer::default(),
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = RenderOrder::new(order);
        self
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = SortingLayer::new(layer);
        self
    }
}
