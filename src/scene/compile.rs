//! Line compiler for the scene script format.
//!
//! Compilation is a pure function of the input lines: structural and
//! referential validation plus numeric parsing, nothing geometric. Errors are
//! fatal; no partial [`Scene`] is ever returned.

use std::collections::HashMap;

use tracing::debug;

use crate::scene::model::{Camera, Face, Light, Object, Point, PointId, Scene, Transform, Vec3};

/// Typed failure taxonomy for script compilation.
///
/// Each variant carries the 1-based script line it was detected on, except
/// end-of-input conditions which reference the relevant opening line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A point (or object) name was declared twice.
    #[error("line {line}: duplicate name `{name}`")]
    DuplicateName {
        /// Script line of the second declaration.
        line: usize,
        /// The offending name.
        name: String,
    },

    /// A face referenced a point that has not been declared yet.
    #[error("line {line}: unknown point `{name}`")]
    UnknownPoint {
        /// Script line of the reference.
        line: usize,
        /// The unresolved point name.
        name: String,
    },

    /// `OBJ` appeared while another object was still open.
    #[error("line {line}: `OBJ` while object `{open}` is still open")]
    NestedObject {
        /// Script line of the nested `OBJ`.
        line: usize,
        /// Name of the object that was already open.
        open: String,
    },

    /// A tag that requires an object context appeared outside of one.
    #[error("line {line}: `{tag}` outside of an object")]
    NoOpenObject {
        /// Script line of the misplaced tag.
        line: usize,
        /// The misplaced tag.
        tag: String,
    },

    /// End of input was reached with an object still open.
    #[error("object `{name}` opened on line {opened_at} is never closed")]
    UnterminatedObject {
        /// Name of the unterminated object.
        name: String,
        /// Script line of its `OBJ` marker.
        opened_at: usize,
    },

    /// A parameter expected to be numeric did not parse as a number.
    #[error("line {line}: malformed number `{token}`")]
    MalformedNumber {
        /// Script line of the token.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// A tag received the wrong number of parameters.
    #[error("line {line}: `{tag}` expects {expected} parameters, got {got}")]
    Arity {
        /// Script line of the tag.
        line: usize,
        /// The tag (including its kind token where applicable, e.g. `L P`).
        tag: String,
        /// Expected parameter count.
        expected: usize,
        /// Actual parameter count.
        got: usize,
    },

    /// A single-occurrence global directive appeared twice.
    #[error("line {line}: duplicate `{tag}` directive")]
    DuplicateDirective {
        /// Script line of the repeated directive.
        line: usize,
        /// The repeated tag.
        tag: String,
    },

    /// The script declared no camera.
    #[error("scene has no camera directive")]
    MissingCamera,

    /// A face did not reference three distinct points.
    #[error("line {line}: face must reference three distinct points")]
    DegenerateFace {
        /// Script line of the face.
        line: usize,
    },

    /// A shade symbol was not exactly one character.
    #[error("line {line}: shade symbol `{token}` must be a single character")]
    MalformedShade {
        /// Script line of the face.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The command tag was not recognized.
    #[error("line {line}: unknown tag `{tag}`")]
    UnknownTag {
        /// Script line of the tag.
        line: usize,
        /// The unrecognized tag.
        tag: String,
    },

    /// A kind-dispatched tag (`L`, `C`, `M`) carried an unrecognized kind.
    #[error("line {line}: unknown `{tag}` kind `{kind}`")]
    UnknownKind {
        /// Script line of the tag.
        line: usize,
        /// The dispatching tag.
        tag: String,
        /// The unrecognized kind token.
        kind: String,
    },

    /// A line contained no tokens at all.
    #[error("line {line}: blank line")]
    BlankLine {
        /// The blank script line.
        line: usize,
    },
}

/// Compile script lines into a validated [`Scene`].
///
/// Deterministic and side-effect free: the same input always yields a
/// structurally identical scene or the same error.
pub fn compile_script<S: AsRef<str>>(lines: &[S]) -> Result<Scene, CompileError> {
    let mut c = Compiler::default();
    for (i, raw) in lines.iter().enumerate() {
        c.line(i + 1, raw.as_ref())?;
    }
    let scene = c.finish()?;
    debug!(
        points = scene.points.len(),
        objects = scene.objects.len(),
        faces = scene.face_count(),
        lights = scene.lights.len(),
        "scene compiled"
    );
    Ok(scene)
}

#[derive(Default)]
struct Compiler {
    lights: Vec<Light>,
    camera: Option<Camera>,
    points: Vec<Point>,
    point_index: HashMap<String, PointId>,
    objects: Vec<Object>,
    open: Option<OpenObject>,
    // Total OBJ markers seen, for generated names.
    opened: usize,
}

struct OpenObject {
    opened_at: usize,
    object: Object,
}

impl Compiler {
    fn line(&mut self, line: usize, raw: &str) -> Result<(), CompileError> {
        let parts: Vec<&str> = raw.split_whitespace().collect();
        let Some((&tag, params)) = parts.split_first() else {
            return Err(CompileError::BlankLine { line });
        };
        match tag {
            "//" => Ok(()),
            "L" => self.light(line, params),
            "C" => self.camera(line, params),
            "P" => self.point(line, params),
            "OBJ" => self.open_object(line, params),
            "T" => self.face(line, params),
            "M" => self.transform(line, params),
            "END_OBJ" => self.close_object(line, params),
            _ => Err(CompileError::UnknownTag {
                line,
                tag: tag.to_owned(),
            }),
        }
    }

    fn light(&mut self, line: usize, params: &[&str]) -> Result<(), CompileError> {
        let (kind, rest) = split_kind(line, "L", params)?;
        let light = match kind {
            // The trailing `L P` parameter is reserved; it is accepted and
            // discarded without being parsed.
            "P" => {
                expect_arity(line, "L P", 5, rest)?;
                Light::Point {
                    pos: parse_vec3(line, &rest[0..3])?,
                    intensity: parse_f64(line, rest[3])?,
                }
            }
            "D" => {
                expect_arity(line, "L D", 4, rest)?;
                Light::Directional {
                    dir: parse_vec3(line, &rest[0..3])?,
                    intensity: parse_f64(line, rest[3])?,
                }
            }
            _ => {
                return Err(CompileError::UnknownKind {
                    line,
                    tag: "L".to_owned(),
                    kind: kind.to_owned(),
                });
            }
        };
        self.lights.push(light);
        Ok(())
    }

    fn camera(&mut self, line: usize, params: &[&str]) -> Result<(), CompileError> {
        if self.camera.is_some() {
            return Err(CompileError::DuplicateDirective {
                line,
                tag: "C".to_owned(),
            });
        }
        let (kind, rest) = split_kind(line, "C", params)?;
        let camera = match kind {
            "P" => {
                expect_arity(line, "C P", 8, rest)?;
                Camera::Perspective {
                    dir: parse_vec3(line, &rest[0..3])?,
                    pos: parse_vec3(line, &rest[3..6])?,
                    scale: parse_f64(line, rest[6])?,
                    focal: parse_f64(line, rest[7])?,
                }
            }
            "O" => {
                expect_arity(line, "C O", 7, rest)?;
                Camera::Ortho {
                    dir: parse_vec3(line, &rest[0..3])?,
                    pos: parse_vec3(line, &rest[3..6])?,
                    scale: parse_f64(line, rest[6])?,
                }
            }
            _ => {
                return Err(CompileError::UnknownKind {
                    line,
                    tag: "C".to_owned(),
                    kind: kind.to_owned(),
                });
            }
        };
        self.camera = Some(camera);
        Ok(())
    }

    fn point(&mut self, line: usize, params: &[&str]) -> Result<(), CompileError> {
        expect_arity(line, "P", 4, params)?;
        let name = params[0];
        if self.point_index.contains_key(name) {
            return Err(CompileError::DuplicateName {
                line,
                name: name.to_owned(),
            });
        }
        let pos = parse_vec3(line, &params[1..4])?;
        let id = PointId(self.points.len());
        self.points.push(Point {
            name: name.to_owned(),
            pos,
        });
        self.point_index.insert(name.to_owned(), id);
        Ok(())
    }

    fn open_object(&mut self, line: usize, params: &[&str]) -> Result<(), CompileError> {
        if let Some(open) = &self.open {
            return Err(CompileError::NestedObject {
                line,
                open: open.object.name.clone(),
            });
        }
        let name = match params {
            [] => format!("obj{}", self.opened),
            [name] => (*name).to_owned(),
            _ => {
                return Err(CompileError::Arity {
                    line,
                    tag: "OBJ".to_owned(),
                    expected: 1,
                    got: params.len(),
                });
            }
        };
        if self.objects.iter().any(|o| o.name == name) {
            return Err(CompileError::DuplicateName { line, name });
        }
        self.opened += 1;
        self.open = Some(OpenObject {
            opened_at: line,
            object: Object {
                name,
                faces: Vec::new(),
                transforms: Vec::new(),
            },
        });
        Ok(())
    }

    fn face(&mut self, line: usize, params: &[&str]) -> Result<(), CompileError> {
        expect_arity(line, "T", 4, params)?;
        // Unresolved references win over the object-context check on lines
        // that are wrong in both ways.
        let mut ids = [PointId(0); 3];
        for (slot, name) in ids.iter_mut().zip(&params[0..3]) {
            *slot = *self
                .point_index
                .get(*name)
                .ok_or_else(|| CompileError::UnknownPoint {
                    line,
                    name: (*name).to_owned(),
                })?;
        }
        if ids[0] == ids[1] || ids[0] == ids[2] || ids[1] == ids[2] {
            return Err(CompileError::DegenerateFace { line });
        }
        let shade = single_char(line, params[3])?;
        let Some(open) = self.open.as_mut() else {
            return Err(CompileError::NoOpenObject {
                line,
                tag: "T".to_owned(),
            });
        };
        open.object.faces.push(Face { points: ids, shade });
        Ok(())
    }

    fn transform(&mut self, line: usize, params: &[&str]) -> Result<(), CompileError> {
        let (kind, rest) = split_kind(line, "M", params)?;
        let transform = match kind {
            "R" => {
                expect_arity(line, "M R", 7, rest)?;
                Transform::Rotate {
                    degrees: parse_f64(line, rest[0])?,
                    axis_point: parse_vec3(line, &rest[1..4])?,
                    axis_dir: parse_vec3(line, &rest[4..7])?,
                }
            }
            _ => {
                return Err(CompileError::UnknownKind {
                    line,
                    tag: "M".to_owned(),
                    kind: kind.to_owned(),
                });
            }
        };
        // A transform attaches to the open object, or to the most recently
        // closed one when it trails the END_OBJ marker.
        let target = match self.open.as_mut() {
            Some(open) => &mut open.object,
            None => self
                .objects
                .last_mut()
                .ok_or_else(|| CompileError::NoOpenObject {
                    line,
                    tag: "M".to_owned(),
                })?,
        };
        target.transforms.push(transform);
        Ok(())
    }

    fn close_object(&mut self, line: usize, params: &[&str]) -> Result<(), CompileError> {
        expect_arity(line, "END_OBJ", 0, params)?;
        let open = self.open.take().ok_or_else(|| CompileError::NoOpenObject {
            line,
            tag: "END_OBJ".to_owned(),
        })?;
        self.objects.push(open.object);
        Ok(())
    }

    fn finish(self) -> Result<Scene, CompileError> {
        if let Some(open) = self.open {
            return Err(CompileError::UnterminatedObject {
                name: open.object.name,
                opened_at: open.opened_at,
            });
        }
        let Some(camera) = self.camera else {
            return Err(CompileError::MissingCamera);
        };
        Ok(Scene {
            lights: self.lights,
            camera,
            points: self.points,
            objects: self.objects,
        })
    }
}

fn split_kind<'a>(
    line: usize,
    tag: &str,
    params: &'a [&'a str],
) -> Result<(&'a str, &'a [&'a str]), CompileError> {
    params
        .split_first()
        .map(|(kind, rest)| (*kind, rest))
        .ok_or_else(|| CompileError::Arity {
            line,
            tag: tag.to_owned(),
            expected: 1,
            got: 0,
        })
}

fn expect_arity(
    line: usize,
    tag: &str,
    expected: usize,
    params: &[&str],
) -> Result<(), CompileError> {
    if params.len() != expected {
        return Err(CompileError::Arity {
            line,
            tag: tag.to_owned(),
            expected,
            got: params.len(),
        });
    }
    Ok(())
}

fn parse_f64(line: usize, token: &str) -> Result<f64, CompileError> {
    token
        .parse::<f64>()
        .map_err(|_| CompileError::MalformedNumber {
            line,
            token: token.to_owned(),
        })
}

fn parse_vec3(line: usize, tokens: &[&str]) -> Result<Vec3, CompileError> {
    Ok(Vec3::new(
        parse_f64(line, tokens[0])?,
        parse_f64(line, tokens[1])?,
        parse_f64(line, tokens[2])?,
    ))
}

fn single_char(line: usize, token: &str) -> Result<char, CompileError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CompileError::MalformedShade {
            line,
            token: token.to_owned(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compile.rs"]
mod tests;
