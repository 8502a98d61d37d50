use serde::{Deserialize, Serialize};

/// Order-in-layer value of a render bucket.
///
/// Higher values draw on top of lower values within the same layer. Areas
/// nearer the viewer usually carry a higher order than the ones behind them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderOrder(pub i32);

impl RenderOrder {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
