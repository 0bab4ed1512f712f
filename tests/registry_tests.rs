use verlet2d::{Anchor, Body, PhysicsError, Solver, SolverConfig, Vec2};

fn solver() -> Solver<f32> {
    Solver::new(SolverConfig::new().with_gravity(Vec2::zero()))
}

fn body(x: f32, y: f32) -> Body<f32> {
    Body::new(Vec2::new(x, y), 2.0).unwrap()
}

#[test]
fn spawn_validates_radius() {
    let mut solver = solver();
    assert_eq!(solver.spawn(Vec2::zero(), 0.0, false), Err(PhysicsError::InvalidRadius));
    assert_eq!(solver.spawn(Vec2::zero(), -1.0, true), Err(PhysicsError::InvalidRadius));
    assert_eq!(solver.body_count(), 0);

    let pinned = solver.spawn(Vec2::zero(), 1.0, true).unwrap();
    assert!(solver.body(pinned).unwrap().is_static());
}

#[test]
fn add_link_registers_new_ends() {
    let mut solver = solver();
    let existing = solver.add_body(body(0.0, 0.0));

    let link = solver.add_link(existing, body(10.0, 0.0), 10.0, false).unwrap();
    assert_eq!(solver.body_count(), 2);

    let (a, b) = solver.link(link).unwrap().bodies();
    assert_eq!(a, existing);
    assert_eq!(solver.body(b).unwrap().position(), Vec2::new(10.0, 0.0));

    solver.add_link(body(20.0, 0.0), Anchor::New(body(30.0, 0.0)), 5.0, true).unwrap();
    assert_eq!(solver.body_count(), 4);
    assert_eq!(solver.link_count(), 2);
}

#[test]
fn add_link_rejects_bad_existing_ends() {
    let mut solver = solver();
    let a = solver.add_body(body(0.0, 0.0));
    let gone = solver.add_body(body(5.0, 0.0));
    solver.remove_body(gone).unwrap();

    assert_eq!(solver.add_link(a, a, 1.0, true), Err(PhysicsError::SameBody(a)));
    assert_eq!(
        solver.add_link(gone, body(9.0, 9.0), 1.0, true),
        Err(PhysicsError::BodyNotFound(gone)),
    );
    assert_eq!(solver.body_count(), 1);
}

#[test]
fn removing_a_body_removes_its_links() {
    let mut solver = solver();
    let a = solver.add_body(body(0.0, 0.0));
    let b = solver.add_body(body(10.0, 0.0));
    let c = solver.add_body(body(20.0, 0.0));
    let ab = solver.link_bodies(a, b, 10.0, true).unwrap();
    let bc = solver.link_bodies(b, c, 10.0, true).unwrap();
    let ac = solver.link_bodies(a, c, 20.0, false).unwrap();

    let removed = solver.remove_body(b).unwrap();
    assert_eq!(removed.position(), Vec2::new(10.0, 0.0));

    assert!(solver.link(ab).is_none());
    assert!(solver.link(bc).is_none());
    assert!(solver.link(ac).is_some());
    assert_eq!(solver.link_count(), 1);
    assert_eq!(solver.body_count(), 2);

    solver.step(1.0 / 60.0).unwrap();
}

#[test]
fn removing_a_link_keeps_its_bodies() {
    let mut solver = solver();
    let link = solver.add_link(body(0.0, 0.0), body(10.0, 0.0), 10.0, true).unwrap();

    let removed = solver.remove_link(link).unwrap();
    assert_eq!(solver.body_count(), 2);
    assert_eq!(solver.link_count(), 0);
    assert!(removed.is_fixed());
    assert_eq!(solver.remove_link(link), Err(PhysicsError::LinkNotFound(link)));
}

#[test]
fn stale_handles_never_resolve() {
    let mut solver = solver();
    let first = solver.add_body(body(1.0, 1.0));
    solver.remove_body(first).unwrap();
    let second = solver.add_body(body(2.0, 2.0));

    assert_ne!(first, second);
    assert!(solver.body(first).is_none());
    assert_eq!(solver.remove_body(first), Err(PhysicsError::BodyNotFound(first)));
    assert_eq!(solver.drag(first, Vec2::zero()), Err(PhysicsError::BodyNotFound(first)));
    assert_eq!(solver.set_static(first, true), Err(PhysicsError::BodyNotFound(first)));
    assert_eq!(solver.body(second).unwrap().position(), Vec2::new(2.0, 2.0));
}

#[test]
fn handles_stable_across_steps() {
    let mut solver = solver();
    let handles: Vec<_> = (0..5)
        .map(|i| solver.add_body(body(i as f32 * 10.0, 0.0)))
        .collect();

    solver.step(1.0 / 60.0).unwrap();

    let listed: Vec<_> = solver.bodies().map(|(handle, _)| handle).collect();
    assert_eq!(listed, handles);
}

#[test]
fn render_queries() {
    let mut solver = solver();
    let a = solver.add_body(Body::new(Vec2::new(10.0, 10.0), 5.0).unwrap());
    let b = solver.add_body(body(40.0, 10.0));
    let link = solver.link_bodies(a, b, 30.0, true).unwrap();

    assert_eq!(
        solver.body_bounds(a),
        Some((Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0))),
    );
    assert_eq!(
        solver.link_endpoints(link),
        Some((Vec2::new(10.0, 10.0), Vec2::new(40.0, 10.0))),
    );

    solver.clear();
    assert_eq!(solver.body_count(), 0);
    assert_eq!(solver.link_count(), 0);
    assert!(solver.body_bounds(a).is_none());
    assert!(solver.link_endpoints(link).is_none());
}

#[test]
fn error_messages_name_the_handle() {
    let mut solver = solver();
    let a = solver.add_body(body(0.0, 0.0));
    solver.remove_body(a).unwrap();
    let err = solver.remove_body(a).unwrap_err();
    assert_eq!(err.to_string(), "no body for BodyHandle(0v0)");
}
