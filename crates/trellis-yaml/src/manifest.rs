//! Scene manifest: a named, versioned collection of stack scenes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ParseError;
use crate::scene::Scene;

const BUNDLED: &str = include_str!("../scenes/stack.yaml");

/// A scene manifest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Format version ("X.Y")
    pub trellis: String,
    /// Kebab-case manifest name
    pub name: String,
    /// Human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Scenes in declaration order
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

impl Manifest {
    /// Parse a manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        tracing::debug!(
            name = %manifest.name,
            scenes = manifest.scenes.len(),
            "parsed manifest"
        );
        Ok(manifest)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// The demonstration scenes shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document fails to parse.
    pub fn bundled() -> Result<Self, ParseError> {
        Self::from_yaml(BUNDLED)
    }

    /// Validate the manifest structure.
    ///
    /// Checks:
    /// 1. `trellis` version format
    /// 2. name is kebab-case
    /// 3. scene IDs are non-empty and unique
    /// 4. every scene's sizes and layout configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(&self) -> Result<(), ParseError> {
        self.validate_version()?;
        self.validate_name()?;
        self.validate_scene_ids()?;
        for scene in &self.scenes {
            scene.validate()?;
        }
        Ok(())
    }

    /// Look up a scene by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SceneNotFound`] if no scene has this ID.
    pub fn scene(&self, id: &str) -> Result<&Scene, ParseError> {
        self.scenes
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ParseError::SceneNotFound(id.to_string()))
    }

    /// Scene IDs in declaration order.
    #[must_use]
    pub fn scene_ids(&self) -> Vec<&str> {
        self.scenes.iter().map(|s| s.id.as_str()).collect()
    }

    fn validate_version(&self) -> Result<(), ParseError> {
        let parts: Vec<&str> = self.trellis.split('.').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.parse::<u32>().is_err()) {
            return Err(ParseError::InvalidVersion(self.trellis.clone()));
        }
        Ok(())
    }

    fn validate_name(&self) -> Result<(), ParseError> {
        let name = &self.name;
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !name.starts_with('-')
            && !name.ends_with('-')
            && !name.contains("--");
        if valid {
            Ok(())
        } else {
            Err(ParseError::InvalidName(name.clone()))
        }
    }

    fn validate_scene_ids(&self) -> Result<(), ParseError> {
        let mut seen = HashSet::new();
        for (index, scene) in self.scenes.iter().enumerate() {
            if scene.id.trim().is_empty() {
                return Err(ParseError::InvalidValue {
                    field: format!("scenes[{index}].id"),
                    message: "must not be empty".to_string(),
                });
            }
            if !seen.insert(scene.id.as_str()) {
                return Err(ParseError::DuplicateSceneId(scene.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
trellis: "0.1"
name: minimal
scenes:
  - id: one
    container: { width: 100, height: 20 }
    items:
      - { size: 40 }
"#;

    fn manifest_with(header: &str, scenes: &str) -> String {
        format!("{header}\nscenes:\n{scenes}")
    }

    // =========================================================================
    // Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_minimal() {
        let manifest = Manifest::from_yaml(MINIMAL).unwrap();
        assert_eq!(manifest.trellis, "0.1");
        assert_eq!(manifest.name, "minimal");
        assert_eq!(manifest.scene_ids(), vec!["one"]);
        assert!(manifest.title.is_none());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Manifest::from_yaml("trellis: [unclosed").unwrap_err();
        assert!(matches!(err, ParseError::Yaml(_)));
    }

    #[test]
    fn test_parse_missing_container() {
        let yaml = manifest_with("trellis: \"0.1\"\nname: x", "  - id: a\n");
        assert!(matches!(
            Manifest::from_yaml(&yaml),
            Err(ParseError::Yaml(_))
        ));
    }

    #[test]
    fn test_scene_lookup() {
        let manifest = Manifest::from_yaml(MINIMAL).unwrap();
        assert_eq!(manifest.scene("one").unwrap().items.len(), 1);
        assert!(matches!(
            manifest.scene("two"),
            Err(ParseError::SceneNotFound(id)) if id == "two"
        ));
    }

    #[test]
    fn test_to_yaml_reparses() {
        let manifest = Manifest::from_yaml(MINIMAL).unwrap();
        let yaml = manifest.to_yaml().unwrap();
        let reparsed = Manifest::from_yaml(&yaml).unwrap();
        assert_eq!(manifest, reparsed);
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_invalid_version() {
        for version in ["1", "1.2.3", "a.b", ""] {
            let yaml = format!("trellis: \"{version}\"\nname: x\n");
            assert!(
                matches!(Manifest::from_yaml(&yaml), Err(ParseError::InvalidVersion(_))),
                "version {version:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_name() {
        for name in ["Stack", "stack scenes", "-stack", "stack-", "stack--scenes"] {
            let yaml = format!("trellis: \"0.1\"\nname: \"{name}\"\n");
            assert!(
                matches!(Manifest::from_yaml(&yaml), Err(ParseError::InvalidName(_))),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_names() {
        for name in ["stack", "stack-scenes", "v2-demo"] {
            let yaml = format!("trellis: \"0.1\"\nname: {name}\n");
            assert!(Manifest::from_yaml(&yaml).is_ok());
        }
    }

    #[test]
    fn test_duplicate_scene_id() {
        let scene = "  - id: a\n    container: { width: 10, height: 10 }\n";
        let yaml = manifest_with("trellis: \"0.1\"\nname: x", &scene.repeat(2));
        assert!(matches!(
            Manifest::from_yaml(&yaml),
            Err(ParseError::DuplicateSceneId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_empty_scene_id() {
        let yaml = manifest_with(
            "trellis: \"0.1\"\nname: x",
            "  - id: \"\"\n    container: { width: 10, height: 10 }\n",
        );
        assert!(matches!(
            Manifest::from_yaml(&yaml),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let yaml = manifest_with(
            "trellis: \"0.1\"\nname: x",
            "  - id: a\n    container: { width: 10, height: 10 }\n    stack: { spacing: -4 }\n",
        );
        match Manifest::from_yaml(&yaml) {
            Err(ParseError::Layout { scene, source }) => {
                assert_eq!(scene, "a");
                assert!(source.is_invalid_configuration());
            }
            other => panic!("expected layout error, got {other:?}"),
        }
    }

    #[test]
    fn test_spacer_overrides_are_ignored() {
        let yaml = manifest_with(
            "trellis: \"0.1\"\nname: x",
            "  - id: a\n    container: { width: 10, height: 10 }\n    items:\n      - { kind: spacer, size: 3 }\n",
        );
        let manifest = Manifest::from_yaml(&yaml).unwrap();
        let stack = manifest.scenes[0].to_stack();
        assert_eq!(stack.items()[0].config().size, None);
    }

    #[test]
    fn test_bundled_parses() {
        let manifest = Manifest::bundled().unwrap();
        assert!(!manifest.scenes.is_empty());
        assert_eq!(manifest.name, "stack-scenes");
    }
}
