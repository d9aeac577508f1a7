use super::*;
use crate::mock::no_kwargs;
use tracing_subscriber::util::SubscriberInitExt;

#[test]
fn standard_template_set() {
    let world = World::new();
    for name in PRIMITIVES.iter().chain(AUXILIARY).chain(&["vector"]) {
        assert!(world.template(name).is_some(), "missing template {name}");
    }
    assert_eq!(world.templates().count(), PRIMITIVES.len() + AUXILIARY.len() + 1);
}

#[test]
fn primitives_start_at_the_origin() {
    let world = World::new();
    let ball = world.instantiate("sphere", vec![], no_kwargs());
    assert_eq!(ball.get("pos"), Some(&Value::Vector(Vector::ZERO)));
    assert_eq!(ball.get("radius"), Some(&Value::Number(1.0)));
    let arrow = world.instantiate("arrow", vec![], no_kwargs());
    assert_eq!(
        arrow.get("axis"),
        Some(&Value::Vector(Vector::new(1.0, 0.0, 0.0)))
    );
}

#[test]
fn colors_are_unit_triples() {
    let world = World::new();
    assert_eq!(world.color.get("red"), Some(Vector::new(1.0, 0.0, 0.0)));
    assert_eq!(world.color.get("white"), Some(Vector::new(1.0, 1.0, 1.0)));
    assert_eq!(world.color.get("chartreuse"), None);
    for name in world.color.names() {
        let c = world.color.get(name).unwrap();
        for component in [c.x, c.y, c.z] {
            assert!((0.0..=1.0).contains(&component), "{name} out of range");
        }
    }
}

#[test]
fn unknown_primitive_still_constructs() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .finish()
        .set_default();
    let world = World::new();
    let obj = world.instantiate("extrusion", vec![], [("path", "unmodeled")]);
    assert_eq!(obj.name(), "extrusion");
    assert_eq!(obj.get("path"), Some(&Value::Str("unmodeled".to_string())));
}

#[test]
fn simulation_step_loop() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .finish()
        .set_default();
    let world = World::new();
    let mut ball = world.instantiate(
        "sphere",
        vec![],
        [("pos", Vector::ZERO), ("color", Vector::new(1.0, 0.0, 0.0))],
    );
    let velocity = Vector::new(1.0, 0.0, 0.0);
    let dt = 0.5;
    for _ in 0..4 {
        let pos = ball
            .get("pos")
            .and_then(Value::as_vector)
            .unwrap_or(Vector::ZERO);
        ball.invoke(vec![], [("pos", pos + velocity * dt)]);
    }
    assert_eq!(
        ball.get("pos"),
        Some(&Value::Vector(Vector::new(2.0, 0.0, 0.0)))
    );
    assert_eq!(
        ball.get("color"),
        Some(&Value::Vector(Vector::new(1.0, 0.0, 0.0)))
    );
}
