use anyhow::Result;
use physics::{box_corners, euler_degrees, BoxShape, ContactProbe, LayerMask, ObstacleField, ObstaclePivot, Pose, RayCaster, Vec3};

const CUBE_HALF: f32 = 0.4;

/// Two wall halves leaving a vertical slot one unit wide around the pivot.
fn slot_field() -> Result<ObstacleField> {
    let wall = BoxShape::new(Vec3::ZERO, Vec3::new(1.5, 5.0, 0.25))?;
    let mut field = ObstacleField::new(Vec3::ZERO);
    field.add_box("left", Pose::at(Vec3::new(-2.0, 0.0, 0.0)), wall, 0);
    field.add_box("right", Pose::at(Vec3::new(2.0, 0.0, 0.0)), wall, 0);
    Ok(field)
}

fn blocked_corners(field: &ObstacleField, pose: &Pose) -> usize {
    box_corners(pose, &BoxShape::cube(CUBE_HALF))
        .iter()
        .filter(|corner| field.cast_ray(**corner, Vec3::Z, 200.0, LayerMask::ALL))
        .count()
}

#[test]
fn upright_cube_sees_through_slot() -> Result<()> {
    let field = slot_field()?;
    let pose = Pose::at(Vec3::new(0.0, 0.0, -6.0));
    assert_eq!(blocked_corners(&field, &pose), 0);
    Ok(())
}

#[test]
fn diagonal_cube_is_blocked_by_both_walls() -> Result<()> {
    let field = slot_field()?;
    let pose = Pose::new(Vec3::new(0.0, 0.0, -6.0), euler_degrees(0.0, 0.0, 45.0));
    // Corners reaching 0.4 * sqrt(2) sideways land behind the walls.
    assert_eq!(blocked_corners(&field, &pose), 4);
    Ok(())
}

#[test]
fn turning_the_pivot_moves_the_slot() -> Result<()> {
    let mut field = slot_field()?;
    let diagonal = Pose::new(Vec3::new(0.0, 0.0, -6.0), euler_degrees(0.0, 0.0, 45.0));

    field.set_obstacle_rotation(euler_degrees(0.0, 0.0, 45.0));
    assert_eq!(blocked_corners(&field, &diagonal), 0);
    assert_eq!(blocked_corners(&field, &Pose::at(Vec3::new(0.0, 0.0, -6.0))), 4);
    Ok(())
}

#[test]
fn rays_past_max_distance_miss() -> Result<()> {
    let field = slot_field()?;
    let origin = Vec3::new(2.0, 0.0, -6.0);
    assert!(field.cast_ray(origin, Vec3::Z, 200.0, LayerMask::ALL));
    assert!(!field.cast_ray(origin, Vec3::Z, 5.0, LayerMask::ALL));
    assert!(!field.cast_ray(origin, Vec3::Z, 200.0, LayerMask::from_layer(3)));
    Ok(())
}

#[test]
fn cube_clipping_a_wall_reports_contact() -> Result<()> {
    let field = slot_field()?;
    let shape = BoxShape::cube(CUBE_HALF);

    assert!(field.probe_contact(&Pose::at(Vec3::ZERO), &shape).is_none());

    let contact = field
        .probe_contact(&Pose::at(Vec3::new(0.3, 0.0, 0.0)), &shape)
        .ok_or_else(|| anyhow::anyhow!("no contact against the right wall"))?;
    assert!((contact.depth - 0.2).abs() < 1e-5);
    assert!(contact.normal.abs_diff_eq(Vec3::X, 1e-5));
    assert!(contact.point.x > 0.3);
    Ok(())
}
