//! Transform geometry shared by the chrome reducer transitions.

use crate::model::{ChromeMetrics, ElementRect};

/// Scale applied to the window as it collapses onto the icon.
pub const MINIMIZED_SCALE: f64 = 0.1;
/// Transform written when leaving the maximized state through the maximize button.
pub const UNMAXIMIZED_TRANSFORM: &str = "scale(1) translate(0, 0)";
/// Transform written when a restore settles the window back to its normal size.
pub const RESTORED_TRANSFORM: &str = "scale(1)";
pub const MINIMIZE_TRANSFORM_ORIGIN: &str = "top left";
pub const RESTORED_TRANSFORM_ORIGIN: &str = "center";

/// Uniform integer scale plus the vertical shift that keeps the scaled window's vertical center
/// where the unscaled one was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaximizeGeometry {
    pub scale: f64,
    /// Pre-scale translation in CSS pixels.
    pub translate_y: f64,
}

impl MaximizeGeometry {
    pub fn transform(&self) -> String {
        format!(
            "scale({}) translate(0, {}px)",
            self.scale, self.translate_y
        )
    }
}

/// Computes the maximize geometry, or `None` when the window cannot at least double in size.
pub fn maximize_geometry(metrics: ChromeMetrics) -> Option<MaximizeGeometry> {
    let scale_x = metrics.viewport_width / metrics.window_width;
    let scale_y = metrics.viewport_height / metrics.window_height;
    let scale = scale_x.min(scale_y).floor();
    if !scale.is_finite() || scale <= 1.0 {
        return None;
    }

    let scaled_height = metrics.window_height * scale;
    let height_difference = scaled_height - metrics.window_height;
    Some(MaximizeGeometry {
        scale,
        translate_y: height_difference / scale / 2.0,
    })
}

/// Transform that collapses the window onto the icon's position.
pub fn minimize_transform(window: ElementRect, icon: ElementRect) -> String {
    let translate_x = icon.left - window.left;
    let translate_y = icon.top - window.top;
    format!("translate({translate_x}px, {translate_y}px) scale({MINIMIZED_SCALE})")
}
