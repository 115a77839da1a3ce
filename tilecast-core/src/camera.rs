/// The fixed stage camera and its screen projection math
use nalgebra::{Matrix4, Point2, Point3};

/// Half of the vertical field of view, in degrees
const HALF_FOV_DEG: f64 = 20.0;
/// Downward pitch of the camera, in degrees
const PITCH_DEG: f64 = 30.0;
/// Extra yaw applied on the alternate side, in degrees
const SIDE_YAW_DEG: f64 = 10.0;
const NEAR: f64 = 0.3;
const FAR: f64 = 1000.0;

/// Which of a level's two camera anchors to project from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Primary,
    Alternate,
}

impl Side {
    /// Index of this side's anchor in a level's view list
    pub fn index(self) -> usize {
        match self {
            Side::Primary => 0,
            Side::Alternate => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Primary => "primary",
            Side::Alternate => "alternate",
        }
    }
}

impl From<bool> for Side {
    fn from(alternate: bool) -> Self {
        if alternate {
            Side::Alternate
        } else {
            Side::Primary
        }
    }
}

/// Camera for a fixed output size
///
/// All matrices are derived from the output size alone, so two cameras
/// built for the same size are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraModel {
    output_width: u32,
    output_height: u32,
    perspective: Matrix4<f64>,
    tilt: Matrix4<f64>,
    side_yaw: Matrix4<f64>,
}

impl CameraModel {
    pub fn new(output_width: u32, output_height: u32) -> Self {
        let ratio = f64::from(output_height) / f64::from(output_width);
        let cot_half_fov = 1.0 / HALF_FOV_DEG.to_radians().tan();
        let (pitch_sin, pitch_cos) = PITCH_DEG.to_radians().sin_cos();
        let (yaw_sin, yaw_cos) = SIDE_YAW_DEG.to_radians().sin_cos();

        #[rustfmt::skip]
        let perspective = Matrix4::new(
            ratio * cot_half_fov, 0.0,         0.0,                       0.0,
            0.0,                  cot_half_fov, 0.0,                      0.0,
            0.0,                  0.0,         -(FAR + NEAR) / (FAR - NEAR), -(2.0 * FAR * NEAR) / (FAR - NEAR),
            0.0,                  0.0,         -1.0,                      0.0,
        );

        // Pitch combined with a depth flip; the stage camera is tuned
        // this way and it is not a pure rotation.
        #[rustfmt::skip]
        let tilt = Matrix4::new(
            1.0, 0.0,        0.0,        0.0,
            0.0, pitch_cos,  -pitch_sin, 0.0,
            0.0, -pitch_sin, -pitch_cos, 0.0,
            0.0, 0.0,        0.0,        1.0,
        );

        #[rustfmt::skip]
        let side_yaw = Matrix4::new(
            yaw_cos,  0.0, yaw_sin, 0.0,
            0.0,      1.0, 0.0,     0.0,
            -yaw_sin, 0.0, yaw_cos, 0.0,
            0.0,      0.0, 0.0,     1.0,
        );

        Self {
            output_width,
            output_height,
            perspective,
            tilt,
            side_yaw,
        }
    }

    /// Width of the output frame in pixels
    pub fn output_width(&self) -> u32 {
        self.output_width
    }

    /// Height of the output frame in pixels
    pub fn output_height(&self) -> u32 {
        self.output_height
    }

    /// Combined view-projection matrix for one side of a level
    ///
    /// `anchor` is the translation that moves the level's camera anchor
    /// to the origin; the alternate side inserts the extra yaw.
    pub fn view_projection(&self, side: Side, anchor: &Matrix4<f64>) -> Matrix4<f64> {
        match side {
            Side::Primary => self.perspective * self.tilt * anchor,
            Side::Alternate => self.perspective * self.tilt * self.side_yaw * anchor,
        }
    }

    /// Project a world-space point through `matrix` into pixel coordinates
    ///
    /// Pixel x grows to the right and pixel y grows downward; points may
    /// land outside the frame.
    pub fn project_point(&self, matrix: &Matrix4<f64>, point: &Point3<f64>) -> Point2<f64> {
        let clip = matrix * point.to_homogeneous();

        // A point exactly in the camera plane has w == 0; skip the
        // divide there instead of emitting NaNs.
        let w = if clip.w == 0.0 { 1.0 } else { clip.w };
        let ndc_x = (clip.x / w + 1.0) / 2.0;
        let ndc_y = (clip.y / w + 1.0) / 2.0;

        Point2::new(
            ndc_x * f64::from(self.output_width),
            (1.0 - ndc_y) * f64::from(self.output_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective_entries() {
        let cam = CameraModel::new(1280, 720);
        let cot = 1.0 / HALF_FOV_DEG.to_radians().tan();
        assert!((cam.perspective[(0, 0)] - 0.5625 * cot).abs() < 1e-12);
        assert!((cam.perspective[(1, 1)] - cot).abs() < 1e-12);
        assert!((cam.perspective[(2, 2)] - (-1000.3 / 999.7)).abs() < 1e-12);
        assert!((cam.perspective[(2, 3)] - (-600.0 / 999.7)).abs() < 1e-12);
        assert_eq!(cam.perspective[(3, 2)], -1.0);
        assert_eq!(cam.perspective[(3, 3)], 0.0);
    }

    #[test]
    fn test_tilt_mirrors_depth() {
        let cam = CameraModel::new(1280, 720);
        let (sin, cos) = PITCH_DEG.to_radians().sin_cos();
        assert!((cam.tilt[(1, 1)] - cos).abs() < 1e-12);
        assert!((cam.tilt[(1, 2)] + sin).abs() < 1e-12);
        assert!((cam.tilt[(2, 1)] + sin).abs() < 1e-12);
        assert!((cam.tilt[(2, 2)] + cos).abs() < 1e-12);
        // The lower-right 2x2 block has determinant -1, not +1
        let det = cam.tilt[(1, 1)] * cam.tilt[(2, 2)] - cam.tilt[(1, 2)] * cam.tilt[(2, 1)];
        assert!((det + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_yaw_only_on_alternate_side() {
        let cam = CameraModel::new(1280, 720);
        let anchor = Matrix4::identity();
        let primary = cam.view_projection(Side::Primary, &anchor);
        let alternate = cam.view_projection(Side::Alternate, &anchor);
        assert_eq!(primary, cam.perspective * cam.tilt);
        assert_ne!(primary, alternate);
    }

    #[test]
    fn test_camera_is_deterministic() {
        assert_eq!(CameraModel::new(1280, 720), CameraModel::new(1280, 720));
    }

    #[test]
    fn test_anchor_point_hits_frame_center() {
        // The anchor itself sits in the camera plane (w == 0); the
        // divide guard must map it to the exact frame center.
        let cam = CameraModel::new(1280, 720);
        let matrix = cam.view_projection(Side::Primary, &Matrix4::identity());
        let pixel = cam.project_point(&matrix, &Point3::origin());
        assert_eq!(pixel, Point2::new(640.0, 360.0));
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Primary.index(), 0);
        assert_eq!(Side::Alternate.index(), 1);
        assert_eq!(Side::from(false), Side::Primary);
        assert_eq!(Side::from(true), Side::Alternate);
        assert_eq!(Side::Alternate.as_str(), "alternate");
    }
}
