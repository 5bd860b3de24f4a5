use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use planar_math_rs::math::scalar::PI_OVER_2;
use planar_math_rs::math::utils::{random_range, random_unit, random_unit_vector};
use planar_math_rs::math::{Mat2, Quaternion, Vector2};

#[test]
fn public_math_api_smoke() {
    let v = Vector2::new(1.0, 2.0);
    let r = Mat2::from_angle(0.0);
    let _ = v * r;
    let _ = r * v;
    let _ = Quaternion::IDENTITY * v;
}

#[test]
fn add_subtract_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let a = Vector2::new(random_unit(&mut rng), random_unit(&mut rng)) * 1e3;
        let b = Vector2::new(random_unit(&mut rng), random_unit(&mut rng)) * 1e3;
        let round_tripped = Vector2::subtract(Vector2::add(a, b), b);
        assert_relative_eq!(round_tripped.x, a.x, epsilon = 1e-3, max_relative = 1e-5);
        assert_relative_eq!(round_tripped.y, a.y, epsilon = 1e-3, max_relative = 1e-5);
    }
}

#[test]
fn normalized_is_unit_length_and_pure() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1_000 {
        let v = random_unit_vector(&mut rng) * random_range(&mut rng, 0.01, 100.0);
        let before = v;
        let unit = v.normalized();
        assert_eq!(v, before);
        assert_relative_eq!(unit.length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn rotation_matrix_and_quaternion_agree() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..1_000 {
        let angle = random_range(&mut rng, -6.0, 6.0);
        let v = random_unit_vector(&mut rng) * random_range(&mut rng, 0.1, 10.0);

        let by_matrix = v * Mat2::from_angle(angle);
        let by_quaternion = Quaternion::from_z_rotation(angle) * v;
        assert_relative_eq!(by_matrix.x, by_quaternion.x, epsilon = 1e-4);
        assert_relative_eq!(by_matrix.y, by_quaternion.y, epsilon = 1e-4);
    }
}

#[test]
fn quaternion_transform_preserves_length() {
    let q = Quaternion::from_z_rotation(0.83);
    let v = Vector2::new(-3.5, 1.25);
    let rotated = Vector2::transform(v, q);
    assert_relative_eq!(rotated.length(), v.length(), epsilon = 1e-5);
}

#[test]
fn perpendicular_is_a_quarter_turn() {
    let v = Vector2::new(2.0, 1.0);
    let left = v * Mat2::from_angle(PI_OVER_2);
    assert_relative_eq!(left.x, v.perpendicular_left().x, epsilon = 1e-6);
    assert_relative_eq!(left.y, v.perpendicular_left().y, epsilon = 1e-6);
    assert_relative_eq!(Vector2::dot(v, v.perpendicular_right()), 0.0);
    assert_relative_eq!(Vector2::dot(v, v.perpendicular_left()), 0.0);
}

#[test]
fn perp_dot_matches_rotation_orientation() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..1_000 {
        let v = random_unit_vector(&mut rng);
        // Rotating a vector left keeps the wedge positive.
        assert!(Vector2::perp_dot(v, v.perpendicular_left()) > 0.0);
        assert!(Vector2::perp_dot(v, v.perpendicular_right()) < 0.0);
    }
}

#[test]
fn magnitude_selection_tie_policy() {
    let v = Vector2::new(1.0, -2.0);
    let twin = Vector2::new(1.0, -2.0);
    // On a tie min returns its second argument and max its first.
    let min = Vector2::magnitude_min(v, twin);
    let max = Vector2::magnitude_max(v, twin);
    assert_eq!(min, twin);
    assert_eq!(max, v);
}

#[test]
fn into_forms_write_into_caller_storage() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(0.5, -0.5);
    let mut out = Vector2::splat(f32::NAN);
    Vector2::add_into(a, b, &mut out);
    assert_eq!(out, Vector2::new(1.5, 1.5));

    // Writing into one of the operands' storage is fine too.
    let mut acc = a;
    Vector2::multiply_into(acc, 2.0, &mut acc);
    assert_eq!(acc, Vector2::new(2.0, 4.0));
}

#[test]
fn hash_is_consistent_with_equality() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..1_000 {
        let v = Vector2::new(
            random_range(&mut rng, -1e4, 1e4),
            random_range(&mut rng, -1e4, 1e4),
        );
        let copy = v;
        assert_eq!(v, copy);
        assert_eq!(v.hash_code(), copy.hash_code());
    }
}
