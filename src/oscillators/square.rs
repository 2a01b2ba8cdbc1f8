//! Square voice: a ±1 plateau signal.

use std::f64::consts::TAU;

use super::{Channel, lane};

/// Renders one channel of a square wave into `buf`.
///
/// Wherever the underlying sine is positive the plateau contributes
/// `32767 * amplitude`, wherever negative `-32768 * amplitude`, and an
/// exact zero crossing contributes silence. The combined value is then
/// *snapped* to exactly `±(peak * amplitude)` by its sign rather than kept
/// as a sum, so layering several square renders into one segment
/// degenerates to "whichever sign wins" instead of true addition. This
/// mirrors the established output of the format and is relied on by
/// existing clips; see DESIGN.md for the discussion.
///
/// Snapped values are still clamped to the 16-bit range, so amplitudes
/// above 1.0 cannot wrap.
///
/// # Panics
///
/// Panics if `buf` holds fewer than `2 * num_samples` samples.
pub fn render_square(buf: &mut [i16], num_samples: usize, channel: Channel, freq_hz: f32, amplitude: f32) {
    let amplitude = f64::from(amplitude);
    let freq_hz = f64::from(freq_hz);
    let high = f64::from(i16::MAX) * amplitude;
    let low = f64::from(i16::MIN) * amplitude;
    for (t, slot) in lane(buf, num_samples, channel) {
        let raw = amplitude * (t * freq_hz * TAU).sin();
        let mixed: i32 = if raw > 0.0 {
            (high + f64::from(*slot)) as i32
        } else if raw < 0.0 {
            (low + f64::from(*slot)) as i32
        } else {
            0
        };
        let snapped: i32 = if mixed > 0 {
            high as i32
        } else if mixed < 0 {
            low as i32
        } else {
            0
        };
        *slot = snapped.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
    }
}
