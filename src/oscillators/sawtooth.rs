//! Sawtooth voice: a linear ramp over each cycle.

use super::{Channel, lane};

/// Span of the 16-bit range the ramp is rescaled by.
const FULL_RANGE: f64 = 65_535.0;

/// Renders one channel of a sawtooth wave additively into `buf`.
///
/// The phase `fract(t * f)` rises linearly from 0 to 1 over each cycle;
/// `amplitude * phase` is rescaled across the full 16-bit span and offset
/// so phase 0 maps to the minimum value, then added to the existing slot
/// and clamped. The offset applies regardless of amplitude, so rendering at
/// amplitude 0 (a pause under this voice) fills the segment with the floor
/// value rather than silence.
///
/// # Panics
///
/// Panics if `buf` holds fewer than `2 * num_samples` samples.
pub fn render_sawtooth(buf: &mut [i16], num_samples: usize, channel: Channel, freq_hz: f32, amplitude: f32) {
    let amplitude = f64::from(amplitude);
    let freq_hz = f64::from(freq_hz);
    for (t, slot) in lane(buf, num_samples, channel) {
        let phase = (t * freq_hz).fract();
        let raw = amplitude * phase;
        let mixed = (raw * FULL_RANGE + f64::from(i16::MIN) + f64::from(*slot)) as i32;
        *slot = mixed.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
    }
}
