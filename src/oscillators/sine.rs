//! Sine voice: the pure tone.

use std::f64::consts::TAU;

use super::{Channel, lane};

/// Renders one channel of a sine tone additively into `buf`.
///
/// For each slot the raw pressure `amplitude * sin(2π·f·t)` is scaled into
/// the 16-bit range — by `32767 * amplitude` when positive and
/// `32768 * amplitude` when negative, matching the asymmetry of the signed
/// range — added to the existing value, truncated toward zero, and clamped
/// to `[-32768, 32767]`.
///
/// # Panics
///
/// Panics if `buf` holds fewer than `2 * num_samples` samples.
pub fn render_sine(buf: &mut [i16], num_samples: usize, channel: Channel, freq_hz: f32, amplitude: f32) {
    let amplitude = f64::from(amplitude);
    let freq_hz = f64::from(freq_hz);
    for (t, slot) in lane(buf, num_samples, channel) {
        let raw = amplitude * (t * freq_hz * TAU).sin();
        let scale = if raw > 0.0 {
            f64::from(i16::MAX)
        } else {
            -f64::from(i16::MIN)
        };
        let mixed = (raw * scale * amplitude + f64::from(*slot)) as i32;
        *slot = mixed.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::SAMPLE_RATE;

    fn rendered(num_samples: usize, freq_hz: f32, amplitude: f32) -> Vec<i16> {
        let mut buf = vec![0i16; num_samples * 2];
        render_sine(&mut buf, num_samples, Channel::Left, freq_hz, amplitude);
        buf
    }

    #[test]
    fn test_matches_closed_form() {
        let buf = rendered(16, 440.0, 0.1);
        // mirror the f32-to-f64 widening the renderer performs
        let amplitude = f64::from(0.1f32);
        let freq = f64::from(440.0f32);
        for k in 1..=16usize {
            let t = k as f64 / f64::from(SAMPLE_RATE);
            let raw = amplitude * (t * freq * std::f64::consts::TAU).sin();
            let scale = if raw > 0.0 { 32_767.0 } else { 32_768.0 };
            let expected = (raw * scale * amplitude) as i32 as i16;
            assert_eq!(buf[(k - 1) * 2], expected, "sample {k}");
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(rendered(256, 440.0, 0.7), rendered(256, 440.0, 0.7));
    }

    #[test]
    fn test_double_render_sums() {
        let single = rendered(64, 220.0, 0.2);
        let mut twice = vec![0i16; 128];
        render_sine(&mut twice, 64, Channel::Left, 220.0, 0.2);
        render_sine(&mut twice, 64, Channel::Left, 220.0, 0.2);
        for (one, two) in single.iter().zip(&twice) {
            assert_eq!(*two, one * 2);
        }
    }

    #[test]
    fn test_clamps_on_saturated_buffer() {
        let mut buf = vec![i16::MAX; 128];
        render_sine(&mut buf, 64, Channel::Left, 997.0, 1.0);
        for &sample in &buf {
            assert!((i16::MIN..=i16::MAX).contains(&sample));
        }
        let mut buf = vec![i16::MIN; 128];
        render_sine(&mut buf, 64, Channel::Left, 997.0, 1.0);
        // clamped, never wrapped
        assert!(buf.iter().all(|&s| s <= 0));
    }

    #[test]
    fn test_zero_frequency_zero_amplitude_is_inert() {
        let mut buf = vec![123i16; 64];
        render_sine(&mut buf, 32, Channel::Right, 0.0, 0.0);
        assert!(buf.iter().all(|&s| s == 123));
    }
}
