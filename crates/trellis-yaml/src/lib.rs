//! YAML scene manifests for Trellis stacks.
//!
//! A manifest names a set of scenes. Each scene is a stack configuration,
//! its items and the container box they are placed in:
//!
//! ```
//! use trellis_yaml::Manifest;
//!
//! let manifest = Manifest::from_yaml(r#"
//! trellis: "0.1"
//! name: demo
//! scenes:
//!   - id: spacer
//!     container: { width: 720, height: 80 }
//!     stack: { align: stretch }
//!     items:
//!       - { size: 120 }
//!       - { kind: spacer }
//!       - { size: 80 }
//! "#).unwrap();
//!
//! let rects = manifest.scene("spacer").unwrap().arrange().unwrap();
//! assert_eq!(rects[2].x, 640.0);
//! ```

mod error;
mod manifest;
mod scene;

pub use error::ParseError;
pub use manifest::Manifest;
pub use scene::{ContainerSize, ItemKind, Scene, SceneItem, SceneReport};
