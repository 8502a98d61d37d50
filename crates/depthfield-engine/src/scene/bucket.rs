use core::fmt;

use serde::{Deserialize, Serialize};

use super::RenderOrder;

/// Name of a renderer sorting layer.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortingLayer(pub String);

impl SortingLayer {
    pub const DEFAULT_NAME: &'static str = "Default";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SortingLayer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl fmt::Display for SortingLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discrete render bucket (layer + order-in-layer).
///
/// Only equality matters to the tie-break resolver. The derived ordering exists so
/// buckets can be used as map keys and printed deterministically:
/// 1) `layer`: by name
/// 2) `order`: ascending
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct RenderBucket {
    pub layer: SortingLayer,
    pub order: RenderOrder,
}

impl RenderBucket {
    #[inline]
    pub fn new(layer: SortingLayer, order: RenderOrder) -> Self {
        Self { layer, order }
    }

    /// Bucket on the default layer with the given order.
    #[inline]
    pub fn with_order(order: i32) -> Self {
        Self::new(SortingLayer::default(), RenderOrder::new(order))
    }
}

impl fmt::Display for RenderBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.layer, self.order.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_layer_and_order_are_the_same_bucket() {
        assert_eq!(RenderBucket::with_order(3), RenderBucket::with_order(3));
        assert_ne!(RenderBucket::with_order(3), RenderBucket::with_order(4));
    }

    #[test]
    fn different_layer_is_a_different_bucket() {
        let a = RenderBucket::new(SortingLayer::new("Background"), RenderOrder::new(1));
        let b = RenderBucket::new(SortingLayer::new("Foreground"), RenderOrder::new(1));
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn order_breaks_ties_within_layer() {
        assert!(RenderBucket::with_order(-2) < RenderBucket::with_order(0));
    }

    #[test]
    fn display_is_layer_colon_order() {
        assert_eq!(RenderBucket::with_order(7).to_string(), "Default:7");
    }
}
