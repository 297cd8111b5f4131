use super::*;

const CAMERA: &str = "C P -1 -1 0 30 30 0 60 2";

fn compile(lines: &[&str]) -> Result<Scene, CompileError> {
    compile_script(lines)
}

#[test]
fn minimal_scene_compiles() {
    let scene = compile(&[CAMERA]).unwrap();
    assert!(scene.lights.is_empty());
    assert!(scene.points.is_empty());
    assert!(scene.objects.is_empty());
    assert!(matches!(scene.camera, Camera::Perspective { .. }));
}

#[test]
fn point_and_directional_lights_parse() {
    let scene = compile(&["L P 15 15 15 400 -", "L D -1 -0.5 -1 0.8", CAMERA]).unwrap();
    assert_eq!(scene.lights.len(), 2);
    assert!(matches!(
        scene.lights[0],
        Light::Point { intensity, .. } if intensity == 400.0
    ));
    assert!(matches!(scene.lights[1], Light::Directional { .. }));
}

#[test]
fn ortho_camera_parses() {
    let scene = compile(&["C O 0 0 -1 0 0 50 2"]).unwrap();
    assert!(matches!(scene.camera, Camera::Ortho { scale, .. } if scale == 2.0));
}

#[test]
fn comment_lines_are_ignored() {
    let scene = compile(&["// a cube", CAMERA, "// done"]).unwrap();
    assert!(scene.points.is_empty());
}

#[test]
fn object_collects_faces_and_transforms() {
    let scene = compile(&[
        CAMERA,
        "P A 0 0 1",
        "P B 0 1 0",
        "P C 1 0 0",
        "OBJ spinner",
        "T A B C #",
        "M R 90 0 0 0 0 0 1",
        "END_OBJ",
    ])
    .unwrap();
    assert_eq!(scene.objects.len(), 1);
    let obj = &scene.objects[0];
    assert_eq!(obj.name, "spinner");
    assert_eq!(obj.faces.len(), 1);
    assert_eq!(obj.faces[0].shade, '#');
    assert_eq!(
        obj.transforms,
        vec![Transform::Rotate {
            degrees: 90.0,
            axis_point: Vec3::new(0.0, 0.0, 0.0),
            axis_dir: Vec3::new(0.0, 0.0, 1.0),
        }]
    );
    assert_eq!(scene.point_id("A"), Some(PointId(0)));
    assert_eq!(scene.point(obj.faces[0].points[2]).name, "C");
}

#[test]
fn anonymous_objects_get_generated_names() {
    let scene = compile(&[CAMERA, "OBJ", "END_OBJ", "OBJ", "END_OBJ"]).unwrap();
    assert_eq!(scene.objects[0].name, "obj0");
    assert_eq!(scene.objects[1].name, "obj1");
}

#[test]
fn transform_after_close_attaches_to_the_last_object() {
    let scene = compile(&[
        CAMERA,
        "OBJ",
        "END_OBJ",
        "M R 45 0 0 0 0 1 0",
    ])
    .unwrap();
    assert_eq!(scene.objects[0].transforms.len(), 1);
}

#[test]
fn transform_before_any_object_is_rejected() {
    let err = compile(&[CAMERA, "M R 45 0 0 0 0 1 0"]).unwrap_err();
    assert_eq!(
        err,
        CompileError::NoOpenObject {
            line: 2,
            tag: "M".to_owned()
        }
    );
}

#[test]
fn duplicate_point_name_is_rejected() {
    let err = compile(&[CAMERA, "P A 0 0 0", "P A 1 1 1"]).unwrap_err();
    assert_eq!(
        err,
        CompileError::DuplicateName {
            line: 3,
            name: "A".to_owned()
        }
    );
}

#[test]
fn forward_point_reference_is_rejected() {
    let err = compile(&[
        CAMERA,
        "P A 0 0 0",
        "P B 0 1 0",
        "OBJ",
        "T A B Z -",
        "END_OBJ",
    ])
    .unwrap_err();
    assert_eq!(
        err,
        CompileError::UnknownPoint {
            line: 5,
            name: "Z".to_owned()
        }
    );
}

#[test]
fn unknown_point_wins_over_missing_object_context() {
    let err = compile(&[CAMERA, "T A B C -"]).unwrap_err();
    assert!(matches!(err, CompileError::UnknownPoint { .. }));
}

#[test]
fn face_outside_object_is_rejected() {
    let err = compile(&[
        CAMERA,
        "P A 0 0 0",
        "P B 0 1 0",
        "P C 1 0 0",
        "T A B C -",
    ])
    .unwrap_err();
    assert_eq!(
        err,
        CompileError::NoOpenObject {
            line: 5,
            tag: "T".to_owned()
        }
    );
}

#[test]
fn degenerate_face_is_rejected() {
    let err = compile(&[
        CAMERA,
        "P A 0 0 0",
        "P B 0 1 0",
        "OBJ",
        "T A B A -",
    ])
    .unwrap_err();
    assert_eq!(err, CompileError::DegenerateFace { line: 5 });
}

#[test]
fn multi_character_shade_is_rejected() {
    let err = compile(&[
        CAMERA,
        "P A 0 0 0",
        "P B 0 1 0",
        "P C 1 0 0",
        "OBJ",
        "T A B C ##",
    ])
    .unwrap_err();
    assert!(matches!(err, CompileError::MalformedShade { line: 6, .. }));
}

#[test]
fn nested_object_is_rejected() {
    let err = compile(&[CAMERA, "OBJ one", "OBJ two"]).unwrap_err();
    assert_eq!(
        err,
        CompileError::NestedObject {
            line: 3,
            open: "one".to_owned()
        }
    );
}

#[test]
fn close_without_open_is_rejected() {
    let err = compile(&[CAMERA, "END_OBJ"]).unwrap_err();
    assert_eq!(
        err,
        CompileError::NoOpenObject {
            line: 2,
            tag: "END_OBJ".to_owned()
        }
    );
}

#[test]
fn unterminated_object_is_rejected() {
    let err = compile(&[CAMERA, "OBJ lonely"]).unwrap_err();
    assert_eq!(
        err,
        CompileError::UnterminatedObject {
            name: "lonely".to_owned(),
            opened_at: 2
        }
    );
}

#[test]
fn duplicate_camera_is_rejected() {
    let err = compile(&[CAMERA, CAMERA]).unwrap_err();
    assert_eq!(
        err,
        CompileError::DuplicateDirective {
            line: 2,
            tag: "C".to_owned()
        }
    );
}

#[test]
fn missing_camera_is_rejected() {
    let err = compile(&["L P 0 0 0 1 -"]).unwrap_err();
    assert_eq!(err, CompileError::MissingCamera);
}

#[test]
fn malformed_number_is_rejected() {
    let err = compile(&[CAMERA, "P A 0 zero 0"]).unwrap_err();
    assert_eq!(
        err,
        CompileError::MalformedNumber {
            line: 2,
            token: "zero".to_owned()
        }
    );
}

#[test]
fn wrong_arity_is_rejected() {
    let err = compile(&[CAMERA, "P A 0 0"]).unwrap_err();
    assert_eq!(
        err,
        CompileError::Arity {
            line: 2,
            tag: "P".to_owned(),
            expected: 4,
            got: 3
        }
    );

    let err = compile(&["C P 1 2 3"]).unwrap_err();
    assert!(matches!(err, CompileError::Arity { .. }));
}

#[test]
fn unknown_tag_and_kind_are_rejected() {
    assert_eq!(
        compile(&[CAMERA, "Q 1 2 3"]).unwrap_err(),
        CompileError::UnknownTag {
            line: 2,
            tag: "Q".to_owned()
        }
    );
    assert_eq!(
        compile(&[CAMERA, "L X 0 0 0 1"]).unwrap_err(),
        CompileError::UnknownKind {
            line: 2,
            tag: "L".to_owned(),
            kind: "X".to_owned()
        }
    );
    assert!(matches!(
        compile(&[CAMERA, "M S 1 2 3 4 5 6 7"]).unwrap_err(),
        CompileError::UnknownKind { .. }
    ));
}

#[test]
fn blank_line_is_rejected() {
    assert_eq!(
        compile(&[CAMERA, "   "]).unwrap_err(),
        CompileError::BlankLine { line: 2 }
    );
}

#[test]
fn compilation_is_deterministic() {
    let lines = [
        "L P 15 15 15 400 -",
        CAMERA,
        "P A 0 0 1",
        "P B 0 1 0",
        "P C 1 0 0",
        "OBJ",
        "T A B C *",
        "M R 90 0 0 0 0 0 1",
        "END_OBJ",
    ];
    assert_eq!(compile(&lines).unwrap(), compile(&lines).unwrap());
}
