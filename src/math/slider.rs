//! Logarithmic slider mapping for the playback delay
//!
//! A linear slider position is mapped so that equal slider movements multiply
//! the value by equal factors, giving fine control near zero delay and coarse
//! control at long delays.

use num_traits::Float;
use std::time::Duration;

use crate::io::configuration::{
    DELAY_SLIDER_MAX_POSITION, DELAY_SLIDER_MAX_VALUE, DELAY_SLIDER_MIN_POSITION,
    DELAY_SLIDER_MIN_VALUE,
};

/// Map `position` in `[min_position, max_position]` onto `[min_value, max_value]`
/// on a logarithmic scale
///
/// Both value bounds must be positive. Positions outside the range extrapolate
/// along the same curve.
pub fn log_slider<T: Float>(
    position: T,
    min_position: T,
    max_position: T,
    min_value: T,
    max_value: T,
) -> T {
    let min_log = min_value.ln();
    let max_log = max_value.ln();
    let scale = (max_log - min_log) / (max_position - min_position);
    (min_log + scale * (position - min_position)).exp()
}

/// Playback delay for a delay slider position
///
/// The slider value is offset by one so the lowest position yields no delay
/// at all. Positions are clamped to the slider range.
pub fn delay_for_position(position: f64) -> Duration {
    let clamped = position.clamp(DELAY_SLIDER_MIN_POSITION, DELAY_SLIDER_MAX_POSITION);
    let millis = log_slider(
        clamped,
        DELAY_SLIDER_MIN_POSITION,
        DELAY_SLIDER_MAX_POSITION,
        DELAY_SLIDER_MIN_VALUE,
        DELAY_SLIDER_MAX_VALUE,
    ) - 1.0;
    Duration::from_secs_f64(millis.max(0.0) / 1000.0)
}
