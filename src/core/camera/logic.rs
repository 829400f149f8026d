use bevy::math::Vec2;

/// Drawing canvas placed at the top of the window, above the controls strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub width: f32,
    pub height: f32,
    pub controls_height: f32,
}

impl CanvasLayout {
    pub fn window_height(&self) -> f32 {
        self.height + self.controls_height
    }

    /// Convert a canvas point (origin top-left, y down) into 2D world
    /// coordinates (origin at the window center, y up)
    pub fn canvas_to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x - self.width / 2.0,
            self.window_height() / 2.0 - point.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn default_layout() -> CanvasLayout {
        CanvasLayout {
            width: 600.0,
            height: 400.0,
            controls_height: 150.0,
        }
    }

    #[test]
    fn test_window_height_includes_controls() {
        assert_eq!(default_layout().window_height(), 550.0);
    }

    #[rstest]
    #[case(0.0, 0.0, -300.0, 275.0)] // top-left corner of the window
    #[case(600.0, 0.0, 300.0, 275.0)] // top-right corner
    #[case(300.0, 200.0, 0.0, 75.0)] // canvas center sits above the window center
    #[case(300.0, 400.0, 0.0, -125.0)] // bottom edge of the canvas meets the controls
    fn test_canvas_to_world(
        #[case] x: f32,
        #[case] y: f32,
        #[case] expected_x: f32,
        #[case] expected_y: f32,
    ) {
        let world = default_layout().canvas_to_world(Vec2::new(x, y));

        assert!((world.x - expected_x).abs() < 0.01, "x was {}, expected {}", world.x, expected_x);
        assert!((world.y - expected_y).abs() < 0.01, "y was {}, expected {}", world.y, expected_y);
    }

    #[test]
    fn test_without_controls_canvas_center_is_origin() {
        let layout = CanvasLayout {
            width: 600.0,
            height: 400.0,
            controls_height: 0.0,
        };

        assert_eq!(layout.canvas_to_world(Vec2::new(300.0, 200.0)), Vec2::ZERO);
    }

    #[test]
    fn test_canvas_y_axis_points_down() {
        let layout = default_layout();

        let upper = layout.canvas_to_world(Vec2::new(10.0, 10.0));
        let lower = layout.canvas_to_world(Vec2::new(10.0, 20.0));

        assert!(upper.y > lower.y);
        assert_eq!(upper.x, lower.x);
    }
}
