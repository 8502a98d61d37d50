use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coords::Vec3;

use super::{FieldError, Result, SortingArea, SortingMapType};

/// Serializable sorting field definition (JSON).
///
/// ```json
/// {
///   "origin": { "x": 0.0, "y": 0.0, "z": 0.0 },
///   "affects_scale": true,
///   "auto_scale": true,
///   "areas": [
///     { "offset": 4.0, "order": 3 },
///     { "offset": 8.0, "order": 2, "scale": 160 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(default)]
    pub origin: Vec3,

    #[serde(default = "default_forward")]
    pub forward: Vec3,

    #[serde(default = "default_base_scale")]
    pub base_scale: i32,

    #[serde(default)]
    pub affects_scale: bool,

    #[serde(default = "default_true")]
    pub affects_speed: bool,

    #[serde(default)]
    pub map_type: SortingMapType,

    /// Derive every scale but the last one after loading.
    #[serde(default)]
    pub auto_scale: bool,

    #[serde(default)]
    pub areas: Vec<SortingArea>,
}

fn default_forward() -> Vec3 {
    Vec3::Z
}

fn default_base_scale() -> i32 {
    100
}

fn default_true() -> bool {
    true
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            forward: default_forward(),
            base_scale: default_base_scale(),
            affects_scale: false,
            affects_speed: true,
            map_type: SortingMapType::default(),
            auto_scale: false,
            areas: Vec::new(),
        }
    }
}

impl FieldConfig {
    pub fn from_json_str(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Reads and parses a definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| FieldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading sorting field from {}", path.display());
        Self::from_json_str(&src)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::SortingField;
    use crate::scene::{RenderOrder, SortingLayer};

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = FieldConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, FieldConfig::default());
    }

    #[test]
    fn parses_areas_with_partial_fields() {
        let cfg = FieldConfig::from_json_str(
            r#"{
                "affects_scale": true,
                "map_type": "sorting_layer",
                "areas": [
                    { "offset": 4.0 },
                    { "offset": 8.0, "scale": 160, "order": 2, "layer": "Front" }
                ]
            }"#,
        )
        .unwrap();

        assert!(cfg.affects_scale);
        assert_eq!(cfg.map_type, SortingMapType::SortingLayer);
        assert_eq!(cfg.areas[0].scale, 100);
        assert_eq!(cfg.areas[0].layer, SortingLayer::default());
        assert_eq!(cfg.areas[1].order, RenderOrder::new(2));
        assert_eq!(cfg.areas[1].layer, SortingLayer::new("Front"));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = FieldConfig::from_json_str(r#"{ "base_scael": 3 }"#).unwrap_err();
        assert!(matches!(err, FieldError::Parse(_)));
    }

    #[test]
    fn misspelled_area_key_is_a_parse_error() {
        let err = FieldConfig::from_json_str(
            r#"{ "areas": [ { "offset": 4.0, "scael": 60 } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FieldConfig::load("/definitely/not/here.json").unwrap_err();
        match err {
            FieldError::Io { path, .. } => assert!(path.ends_with("here.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn auto_scale_derives_on_load() {
        let cfg = FieldConfig::from_json_str(
            r#"{
                "base_scale": 100,
                "auto_scale": true,
                "areas": [
                    { "offset": 10.0 },
                    { "offset": 20.0, "scale": 200 }
                ]
            }"#,
        )
        .unwrap();
        let field = SortingField::from_config(cfg).unwrap();
        assert_eq!(field.areas()[0].scale, 150);
    }

    #[test]
    fn unordered_definition_fails_to_build() {
        let cfg = FieldConfig::from_json_str(
            r#"{ "areas": [ { "offset": 10.0 }, { "offset": 2.0 } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            SortingField::from_config(cfg),
            Err(FieldError::UnorderedAreas { .. })
        ));
    }

    #[test]
    fn serializes_back_to_equal_config() {
        let cfg = FieldConfig {
            affects_scale: true,
            areas: vec![SortingArea::new(3.0, 90).with_order(1)],
            ..FieldConfig::default()
        };
        let json = cfg.to_json_string().unwrap();
        assert_eq!(FieldConfig::from_json_str(&json).unwrap(), cfg);
    }
}
