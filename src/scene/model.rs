//! Compiled scene model — the validated, normalized output of the compiler.
//!
//! These types hold parsed numbers only. The compiler performs structural and
//! referential validation; all geometric interpretation belongs to the engine.

use serde::{Deserialize, Serialize};

/// A plain coordinate triple. No vector math lives here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a coordinate triple.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Index into the scene's point table.
///
/// Faces reference points by id rather than by name; the compiler resolves
/// names at parse time so engines never see unresolved references.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PointId(pub usize);

/// A named 3D location, unique within its scene and immutable after parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Scene-unique identifier.
    pub name: String,
    /// Position.
    pub pos: Vec3,
}

/// A shaded triangle referencing three distinct scene points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// The three corner points, in script order.
    pub points: [PointId; 3],
    /// Single-character shade symbol selecting the face's fill style.
    pub shade: char,
}

/// A transformation directive attached to an object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    /// Rotation around an arbitrary axis (`M R` directive). Parameters are
    /// stored as parsed, not evaluated.
    Rotate {
        /// Rotation angle in degrees per animation cycle.
        degrees: f64,
        /// A point on the rotation axis.
        axis_point: Vec3,
        /// Axis direction (not normalized here).
        axis_dir: Vec3,
    },
}

/// A group of faces sharing transforms, bracketed by `OBJ` … `END_OBJ`.
///
/// Objects own their faces; points are scene-global and shared by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Object name (explicit in the script, or generated `obj<N>`).
    pub name: String,
    /// Faces in script order.
    pub faces: Vec<Face>,
    /// Transform directives in script order.
    pub transforms: Vec<Transform>,
}

/// A light source directive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Light {
    /// Point light (`L P`): position plus intensity.
    Point {
        /// Light position.
        pos: Vec3,
        /// Light intensity.
        intensity: f64,
    },
    /// Directional light (`L D`): direction plus intensity.
    Directional {
        /// Light direction (not normalized here).
        dir: Vec3,
        /// Light intensity.
        intensity: f64,
    },
}

/// The camera directive. Exactly one per scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Camera {
    /// Perspective camera (`C P`).
    Perspective {
        /// View direction (not normalized here).
        dir: Vec3,
        /// Camera position.
        pos: Vec3,
        /// Screen scale factor.
        scale: f64,
        /// Focal distance.
        focal: f64,
    },
    /// Orthographic camera (`C O`).
    Ortho {
        /// View direction (not normalized here).
        dir: Vec3,
        /// Camera position.
        pos: Vec3,
        /// Screen scale factor.
        scale: f64,
    },
}

/// The fully validated scene: lights, camera, points, and objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Light sources in script order (may be empty).
    pub lights: Vec<Light>,
    /// The scene camera.
    pub camera: Camera,
    /// Point table in declaration order. [`PointId`]s index into this.
    pub points: Vec<Point>,
    /// Objects in script order.
    pub objects: Vec<Object>,
}

impl Scene {
    /// Look up a point by id.
    pub fn point(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }

    /// Resolve a point name to its id, if declared.
    pub fn point_id(&self, name: &str) -> Option<PointId> {
        self.points
            .iter()
            .position(|p| p.name == name)
            .map(PointId)
    }

    /// Total face count across all objects.
    pub fn face_count(&self) -> usize {
        self.objects.iter().map(|o| o.faces.len()).sum()
    }
}
