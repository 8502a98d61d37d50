use crate::coords::Vec3;
use crate::scene::RenderBucket;

use super::{FieldConfig, FieldError, Result, SortingArea, SortingMapType};

/// Angle (degrees) separating "ahead of" from "behind" a reference point.
const HALF_PLANE_DEG: f32 = 90.0;

/// Segment lengths at or below this are treated as an immediate scale step.
const MIN_SEGMENT: f32 = f32::EPSILON;

/// Scale and bucket field along a forward axis.
///
/// Areas are kept in non-decreasing offset order; every mutation that replaces
/// them is validated. Queries are pure and never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct SortingField {
    origin: Vec3,
    forward: Vec3,
    areas: Vec<SortingArea>,
    base_scale: i32,
    affects_scale: bool,
    affects_speed: bool,
    map_type: SortingMapType,
}

impl SortingField {
    /// Creates an empty field. `forward` is normalized.
    ///
    /// Defaults: base scale 100, scale off, speed on, order-in-layer mapping.
    pub fn new(origin: Vec3, forward: Vec3) -> Result<Self> {
        if !origin.is_finite() {
            return Err(FieldError::NonFiniteOrigin);
        }
        let forward = forward.try_normalize().ok_or(FieldError::DegenerateAxis)?;

        Ok(Self {
            origin,
            forward,
            areas: Vec::new(),
            base_scale: 100,
            affects_scale: false,
            affects_speed: true,
            map_type: SortingMapType::default(),
        })
    }

    /// Builds a field from a loaded definition, deriving intermediate scales when
    /// the definition asks for it.
    pub fn from_config(config: FieldConfig) -> Result<Self> {
        let mut field = Self::new(config.origin, config.forward)?
            .with_base_scale(config.base_scale)
            .with_affects_scale(config.affects_scale)
            .with_affects_speed(config.affects_speed)
            .with_map_type(config.map_type)
            .with_areas(config.areas)?;

        if config.auto_scale {
            field.derive_intermediate_scales();
        }

        log::debug!(
            "sorting field loaded: {} areas, base scale {}, map type {:?}",
            field.areas.len(),
            field.base_scale,
            field.map_type
        );
        Ok(field)
    }

    pub fn with_areas(mut self, areas: Vec<SortingArea>) -> Result<Self> {
        self.set_areas(areas)?;
        Ok(self)
    }

    pub fn with_base_scale(mut self, base_scale: i32) -> Self {
        self.base_scale = base_scale;
        self
    }

    pub fn with_affects_scale(mut self, affects_scale: bool) -> Self {
        self.affects_scale = affects_scale;
        self
    }

    pub fn with_affects_speed(mut self, affects_speed: bool) -> Self {
        self.affects_speed = affects_speed;
        self
    }

    pub fn with_map_type(mut self, map_type: SortingMapType) -> Self {
        self.map_type = map_type;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit forward axis.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    #[inline]
    pub fn areas(&self) -> &[SortingArea] {
        &self.areas
    }

    #[inline]
    pub fn base_scale(&self) -> i32 {
        self.base_scale
    }

    #[inline]
    pub fn affects_scale(&self) -> bool {
        self.affects_scale
    }

    #[inline]
    pub fn affects_speed(&self) -> bool {
        self.affects_speed
    }

    #[inline]
    pub fn map_type(&self) -> SortingMapType {
        self.map_type
    }

    // ── authoring ─────────────────────────────────────────────────────────

    /// Moves the field. The axis is untouched.
    pub fn set_origin(&mut self, origin: Vec3) -> Result<()> {
        if !origin.is_finite() {
            return Err(FieldError::NonFiniteOrigin);
        }
        self.origin = origin;
        Ok(())
    }

    pub fn set_forward(&mut self, forward: Vec3) -> Result<()> {
        self.forward = forward.try_normalize().ok_or(FieldError::DegenerateAxis)?;
        Ok(())
    }

    /// Replaces all areas. On error the previous areas are kept.
    pub fn set_areas(&mut self, areas: Vec<SortingArea>) -> Result<()> {
        validate_areas(&areas)?;
        self.areas = areas;
        Ok(())
    }

    /// Appends an area after the current last one.
    pub fn push_area(&mut self, area: SortingArea) -> Result<()> {
        let index = self.areas.len();
        if !area.axis_offset.is_finite() {
            return Err(FieldError::NonFiniteArea { index });
        }
        if let Some(prev) = self.areas.last() {
            if area.axis_offset < prev.axis_offset {
                return Err(FieldError::UnorderedAreas {
                    index,
                    previous: prev.axis_offset,
                    offset: area.axis_offset,
                });
            }
        }
        self.areas.push(area);
        Ok(())
    }

    /// Unchecked access to one area. Call [`validate`](Self::validate) after
    /// changing an offset.
    pub fn area_mut(&mut self, index: usize) -> Option<&mut SortingArea> {
        self.areas.get_mut(index)
    }

    pub fn validate(&self) -> Result<()> {
        validate_areas(&self.areas)
    }

    /// Fills every area but the last with a scale linearly interpolated between
    /// the base scale (at offset 0) and the last area's scale.
    ///
    /// Needs at least two areas and a non-zero last offset; otherwise nothing changes.
    pub fn derive_intermediate_scales(&mut self) {
        let Some(last) = self.areas.last() else {
            log::warn!("derive_intermediate_scales: field has no areas");
            return;
        };
        if self.areas.len() < 2 {
            log::warn!("derive_intermediate_scales: needs at least two areas");
            return;
        }
        if last.axis_offset == 0.0 {
            log::warn!("derive_intermediate_scales: last area sits at offset 0");
            return;
        }

        let final_scale = last.scale as f32;
        let final_offset = last.axis_offset;
        let base = self.base_scale as f32;
        let n = self.areas.len() - 1;

        for area in &mut self.areas[..n] {
            let scale = (area.axis_offset / final_offset) * (final_scale - base) + base;
            // Truncation toward zero.
            area.scale = scale as i32;
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// World position of area `index`, or `None` if out of range.
    pub fn axis_position(&self, index: usize) -> Option<Vec3> {
        self.areas.get(index).map(|a| self.point_at(a.axis_offset))
    }

    #[inline]
    fn point_at(&self, axis_offset: f32) -> Vec3 {
        self.origin + self.forward * axis_offset
    }

    /// Scale (percent) for a follower at `position`.
    ///
    /// Returns `1.0` when the field does not affect scale, or when no segment
    /// claims the position (e.g. exactly in the last area's plane but off-axis).
    pub fn scale_at(&self, position: Vec3) -> f32 {
        if !self.affects_scale {
            return 1.0;
        }
        self.interpolate(position).unwrap_or(1.0)
    }

    /// Sprite scale multiplier for a follower at `position` (1.0 = authored size).
    ///
    /// Positions no segment claims keep the authored size.
    pub fn scale_factor_at(&self, position: Vec3) -> f32 {
        if !self.affects_scale {
            return 1.0;
        }
        self.interpolate(position).map_or(1.0, |scale| scale / 100.0)
    }

    /// Percent scale at `position`, or `None` when no segment matches.
    fn interpolate(&self, position: Vec3) -> Option<f32> {
        let base = self.base_scale as f32;
        let Some(last) = self.areas.last() else {
            return Some(base);
        };

        // Behind the first area.
        if self.forward.angle_deg(self.origin - position) < HALF_PLANE_DEG {
            return Some(base);
        }

        // Past the last area.
        if self.forward.angle_deg(self.point_at(last.axis_offset) - position) > HALF_PLANE_DEG {
            return Some(last.scale as f32);
        }

        for (i, area) in self.areas.iter().enumerate() {
            let to_area = self.point_at(area.axis_offset) - position;
            let angle = self.forward.angle_deg(to_area);
            // NaN angles never match.
            if !(angle < HALF_PLANE_DEG) {
                continue;
            }

            let (prev_offset, prev_scale) = match i.checked_sub(1) {
                Some(p) => (self.areas[p].axis_offset, self.areas[p].scale as f32),
                None => (0.0, base),
            };

            let span = area.axis_offset - prev_offset;
            if span.abs() <= MIN_SEGMENT {
                log::trace!("zero-length segment before area {i}; stepping to its scale");
                return Some(area.scale as f32);
            }

            let proportion = 1.0 - to_area.length() / span * angle.to_radians().cos();
            return Some(prev_scale + proportion * (area.scale as f32 - prev_scale));
        }

        log::trace!("no segment matches {position:?}");
        None
    }

    /// Movement speed multiplier for a follower at `position`.
    ///
    /// Tracks the scale multiplier when the field affects both scale and speed.
    pub fn speed_factor_at(&self, position: Vec3) -> f32 {
        if self.affects_speed {
            self.scale_factor_at(position)
        } else {
            1.0
        }
    }

    /// Index of the area a follower at `position` belongs to: the first area
    /// still ahead of it, or the last area once it has passed them all.
    pub fn area_index_at(&self, position: Vec3) -> Option<usize> {
        if self.areas.is_empty() {
            return None;
        }

        let ahead = self.areas.iter().position(|area| {
            self.forward.angle_deg(self.point_at(area.axis_offset) - position) < HALF_PLANE_DEG
        });
        Some(ahead.unwrap_or(self.areas.len() - 1))
    }

    /// Bucket a follower at `position` should render in, starting from its
    /// `current` bucket. Only the part named by the map type is replaced.
    pub fn bucket_at(&self, position: Vec3, current: &RenderBucket) -> RenderBucket {
        let Some(index) = self.area_index_at(position) else {
            return current.clone();
        };
        let area = &self.areas[index];

        match self.map_type {
            SortingMapType::OrderInLayer => RenderBucket::new(current.layer.clone(), area.order),
            SortingMapType::SortingLayer => RenderBucket::new(area.layer.clone(), current.order),
        }
    }

    /// Line segments from the origin through every area, for debug drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let mut prev = self.origin;
        self.areas.iter().map(move |area| {
            let next = self.point_at(area.axis_offset);
            let segment = (prev, next);
            prev = next;
            segment
        })
    }
}

fn validate_areas(areas: &[SortingArea]) -> Result<()> {
    let mut previous: Option<f32> = None;

    for (index, area) in areas.iter().enumerate() {
        let offset = area.axis_offset;
        if !offset.is_finite() {
            return Err(FieldError::NonFiniteArea { index });
        }
        if let Some(previous) = previous {
            if offset < previous {
                return Err(FieldError::UnorderedAreas { index, previous, offset });
            }
            if offset == previous {
                log::warn!("areas {} and {index} share offset {offset}; scale steps immediately", index - 1);
            }
        }
        previous = Some(offset);
    }

    Ok(())
}
