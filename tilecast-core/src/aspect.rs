/// Aspect-ratio compensation for portrait-leaning output sizes
///
/// The camera layout is tuned for a 16:9 frame. Taller frames pull the
/// anchor back and down so the whole grid stays in view; wider frames
/// need no compensation at all.

/// Height-to-width ratio the camera layout is tuned for (16:9)
const NATIVE_RATIO: f64 = 9.0 / 16.0;
/// Ratio at which the full shift applies (4:3)
const TALL_RATIO: f64 = 3.0 / 4.0;
/// Ratios this close to native still count as native
const RATIO_EPSILON: f64 = 1e-5;

/// Anchor shift at the tall end of the ratio range
const FULL_Y_SHIFT: f64 = -1.4;
const FULL_Z_SHIFT: f64 = -2.8;

/// Anchor offset along the camera's y and z axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AspectShift {
    pub y: f64,
    pub z: f64,
}

/// Compensation for the given output size, or `None` when the frame is
/// at least as wide as the native ratio and the anchor can stay put
pub fn aspect_shift(output_width: u32, output_height: u32) -> Option<AspectShift> {
    let ratio = f64::from(output_height) / f64::from(output_width);
    if ratio < NATIVE_RATIO - RATIO_EPSILON {
        return None;
    }

    let t = (ratio - NATIVE_RATIO) / (TALL_RATIO - NATIVE_RATIO);
    Some(AspectShift {
        y: FULL_Y_SHIFT * t,
        z: FULL_Z_SHIFT * t,
    })
}
