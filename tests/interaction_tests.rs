use bezier_demo::core::{Button, CameraController, Interaction, PickState, PointerEvent, Viewport, HIT_RADIUS};
use bezier_demo::{BezierCurve, OrbitCamera};
use glam::{Mat4, Vec2, Vec3};

/// Mock camera mapping world [0,1]² onto a 100x100 viewport (y flipped),
/// recording every call made by the interaction layer
#[derive(Default)]
struct MockCamera {
    downs: Vec<(f32, f32, bool)>,
    drags: Vec<(f32, f32)>,
    ups: usize,
    wheels: Vec<(f32, bool)>,
}

impl CameraController for MockCamera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, 1.0, 0.0, 1.0, -1.0, 1.0)
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(100, 100)
    }

    fn down(&mut self, x: f32, y: f32, shift: bool) {
        self.downs.push((x, y, shift));
    }

    fn drag(&mut self, x: f32, y: f32) {
        self.drags.push((x, y));
    }

    fn up(&mut self) {
        self.ups += 1;
    }

    fn wheel(&mut self, spin: f32, shift: bool) {
        self.wheels.push((spin, shift));
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Screen position of a world point under `MockCamera`
fn screen(x: f32, y: f32) -> Vec2 {
    Vec2::new(x * 100.0, (1.0 - y) * 100.0)
}

#[cfg(test)]
mod picking_tests {
    use super::*;

    #[test]
    fn test_press_on_control_point_picks_it() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();

        let p = screen(0.75, 0.7);
        interaction.handle(PointerEvent::press(p.x + 3.0, p.y - 2.0), &mut curve, &mut camera);

        assert_eq!(interaction.state(), PickState::ControlPoint(2));
        assert!(camera.downs.is_empty(), "camera must not start orbiting");
    }

    #[test]
    fn test_press_on_empty_space_orbits_camera() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();

        let down = PointerEvent::Down { position: Vec2::new(50.0, 50.0), button: Button::MouseLeft, shift: true };
        interaction.handle(down, &mut curve, &mut camera);

        assert_eq!(interaction.state(), PickState::Camera);
        assert_eq!(camera.downs, vec![(50.0, 50.0, true)]);
    }

    #[test]
    fn test_hit_radius_boundary() {
        let curve = BezierCurve::default();
        let camera = MockCamera::default();
        let p0 = screen(0.1, 0.1);

        let inside = p0 + Vec2::new(HIT_RADIUS - 0.5, 0.0);
        let outside = p0 + Vec2::new(HIT_RADIUS + 0.5, 0.0);
        assert_eq!(Interaction::hit_test(&curve, &camera, inside), Some(0));
        assert_eq!(Interaction::hit_test(&curve, &camera, outside), None);
    }

    #[test]
    fn test_overlapping_points_pick_lowest_index() {
        let mut curve = BezierCurve::default();
        curve.set_control_point(3, Vec3::new(0.78, 0.7, 0.0));
        let camera = MockCamera::default();

        // Between P2 (75, 30) and P3 (78, 30) but nearer P3: index order still wins
        let cursor = Vec2::new(77.5, 30.0);
        assert_eq!(Interaction::hit_test(&curve, &camera, cursor), Some(2));
    }

    #[test]
    fn test_first_index_wins_over_every_later_overlap() {
        let curve = BezierCurve::new([Vec3::new(0.5, 0.5, 0.0); 4]);
        let camera = MockCamera::default();
        assert_eq!(Interaction::hit_test(&curve, &camera, Vec2::new(51.0, 51.0)), Some(0));
    }
}

#[cfg(test)]
mod gesture_tests {
    use super::*;

    #[test]
    fn test_drag_moves_picked_point_only() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();
        let before = curve;

        let p1 = screen(0.25, 0.7);
        interaction.handle(PointerEvent::press(p1.x, p1.y), &mut curve, &mut camera);
        interaction.handle(PointerEvent::moved(p1.x + 10.0, p1.y + 20.0), &mut curve, &mut camera);

        let moved = curve.control_point(1);
        assert!((moved - Vec3::new(0.35, 0.5, 0.0)).length() < 1e-4, "got {:?}", moved);
        for i in [0, 2, 3] {
            assert_eq!(curve.control_point(i), before.control_point(i));
        }
        assert!(camera.drags.is_empty());
    }

    #[test]
    fn test_drag_preserves_grab_offset() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();

        // grab P0 five pixels right of its center; no move means no jump
        let p0 = screen(0.1, 0.1);
        interaction.handle(PointerEvent::press(p0.x + 5.0, p0.y), &mut curve, &mut camera);
        interaction.handle(PointerEvent::moved(p0.x + 5.0, p0.y), &mut curve, &mut camera);

        assert!((curve.control_point(0) - Vec3::new(0.1, 0.1, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_evaluate_follows_dragged_endpoint() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();

        let p3 = screen(0.9, 0.1);
        interaction.handle(PointerEvent::press(p3.x, p3.y), &mut curve, &mut camera);
        interaction.handle(PointerEvent::moved(p3.x - 20.0, p3.y - 40.0), &mut curve, &mut camera);

        assert!((curve.evaluate(1.0) - Vec3::new(0.7, 0.5, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_camera_drag_forwarded() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();
        let before = curve;

        interaction.handle(PointerEvent::press(50.0, 50.0), &mut curve, &mut camera);
        interaction.handle(PointerEvent::moved(60.0, 45.0), &mut curve, &mut camera);

        assert_eq!(camera.drags, vec![(60.0, 45.0)]);
        assert_eq!(curve, before);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();

        let p2 = screen(0.75, 0.7);
        interaction.handle(PointerEvent::press(p2.x, p2.y), &mut curve, &mut camera);
        interaction.handle(PointerEvent::release(), &mut curve, &mut camera);
        assert_eq!(interaction.state(), PickState::None);
        assert_eq!(camera.ups, 1);

        // moves while idle change nothing
        let before = curve;
        interaction.handle(PointerEvent::moved(10.0, 10.0), &mut curve, &mut camera);
        assert_eq!(curve, before);
        assert!(camera.drags.is_empty());
    }

    #[test]
    fn test_wheel_always_reaches_camera() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();

        interaction.handle(PointerEvent::Wheel { spin: 1.0, shift: false }, &mut curve, &mut camera);
        let p1 = screen(0.25, 0.7);
        interaction.handle(PointerEvent::press(p1.x, p1.y), &mut curve, &mut camera);
        interaction.handle(PointerEvent::Wheel { spin: -2.0, shift: true }, &mut curve, &mut camera);

        assert_eq!(camera.wheels, vec![(1.0, false), (-2.0, true)]);
        assert_eq!(interaction.state(), PickState::ControlPoint(1));
    }

    #[test]
    fn test_new_press_replaces_previous_pick() {
        let mut curve = BezierCurve::default();
        let mut camera = MockCamera::default();
        let mut interaction = Interaction::new();

        let p0 = screen(0.1, 0.1);
        interaction.handle(PointerEvent::press(p0.x, p0.y), &mut curve, &mut camera);
        interaction.handle(PointerEvent::press(50.0, 50.0), &mut curve, &mut camera);
        assert_eq!(interaction.state(), PickState::Camera);
    }
}

#[cfg(test)]
mod orbit_camera_tests {
    use super::*;

    #[test]
    fn test_pick_and_drag_through_perspective_camera() {
        let mut curve = BezierCurve::default();
        let mut camera = OrbitCamera::new(800, 800);
        let mut interaction = Interaction::new();

        let p2 = camera.project(curve.control_point(2)).truncate();
        interaction.handle(PointerEvent::press(p2.x, p2.y), &mut curve, &mut camera);
        assert_eq!(interaction.state(), PickState::ControlPoint(2));

        let target = Vec3::new(0.6, 0.2, 0.0);
        let cursor = camera.project(target).truncate();
        interaction.handle(PointerEvent::moved(cursor.x, cursor.y), &mut curve, &mut camera);

        // point stays on its camera-facing plane (z = 0 for the default view)
        let moved = curve.control_point(2);
        assert!((moved - target).length() < 1e-3, "got {:?}", moved);
    }

    #[test]
    fn test_point_behind_eye_cannot_be_picked() {
        let mut camera = OrbitCamera::new(800, 800);
        let mut curve = BezierCurve::default();
        // eye sits at z = 4.5, so z = 10 is behind it
        curve.set_control_point(0, Vec3::new(0.3, 0.2, 10.0));
        let mut interaction = Interaction::new();

        assert!(camera.project_visible(curve.control_point(0)).is_none());
        let mirrored = camera.project(curve.control_point(0)).truncate();
        interaction.handle(PointerEvent::press(mirrored.x, mirrored.y), &mut curve, &mut camera);

        assert_eq!(interaction.state(), PickState::Camera);
        assert!(camera.is_dragging());
    }

    #[test]
    fn test_visible_projection_matches_project_in_front() {
        let camera = OrbitCamera::new(800, 600);
        let point = Vec3::new(0.75, 0.7, 0.0);
        let visible = camera.project_visible(point).map(|s| (s - camera.project(point)).length());
        assert!(visible.is_some_and(|error| error < 1e-3), "{:?}", visible);
    }

    #[test]
    fn test_orbit_then_release() {
        let mut curve = BezierCurve::default();
        let mut camera = OrbitCamera::new(800, 800);
        let mut interaction = Interaction::new();

        interaction.handle(PointerEvent::press(10.0, 10.0), &mut curve, &mut camera);
        interaction.handle(PointerEvent::moved(60.0, 10.0), &mut curve, &mut camera);
        assert!(camera.yaw > 0.0);
        assert!(camera.is_dragging());

        interaction.handle(PointerEvent::release(), &mut curve, &mut camera);
        assert!(!camera.is_dragging());
        assert_eq!(interaction.state(), PickState::None);
    }
}
