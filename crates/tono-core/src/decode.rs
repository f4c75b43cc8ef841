//! Raw capture bytes to normalized samples.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::format::AudioFormat;

/// Fixed amplification applied to every decoded sample.
pub const GAIN: f32 = 100.0;

/// 16-bit full-scale reference the raw integer is normalized against.
pub const FULL_SCALE: f32 = 32768.0;

/// Decode a raw little-endian byte buffer into normalized `f32` samples.
///
/// Each group of `bytes_per_sample` consecutive bytes is accumulated
/// little-endian. Every byte in a group is masked to its unsigned value
/// except the most-significant byte of a multi-byte group, which keeps its
/// sign. Single-byte samples are always masked, so 8-bit input can never
/// decode negative; that quirk matches the capture pipeline this crate
/// replaces and is flagged in the tests rather than fixed.
///
/// The reconstructed integer is scaled by [`GAIN`] and normalized against
/// [`FULL_SCALE`] regardless of bit depth.
///
/// Output length is `data.len() / bytes_per_sample`; a trailing partial
/// group is dropped, and the buffer is never read past its end. An empty
/// buffer decodes to an empty vector.
pub fn decode_samples(data: &[u8], format: &AudioFormat) -> Vec<f32> {
    let bytes_per_sample = format.bytes_per_sample();
    if bytes_per_sample == 0 {
        return Vec::new();
    }

    let mut samples = Vec::with_capacity(data.len() / bytes_per_sample);
    for group in data.chunks_exact(bytes_per_sample) {
        let mut raw: i32 = 0;
        for (b, &byte) in group.iter().enumerate() {
            let v = if b < bytes_per_sample - 1 || bytes_per_sample == 1 {
                i32::from(byte)
            } else {
                // Sign byte of a multi-byte sample stays sign-extended.
                i32::from(byte as i8)
            };
            raw += v << (b * 8);
        }
        samples.push(GAIN * (raw as f32 / FULL_SCALE));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_bytes_over_bytes_per_sample() {
        let format = AudioFormat::default();
        let data = [0u8; 10];
        assert_eq!(decode_samples(&data, &format).len(), 5);
    }

    #[test]
    fn trailing_partial_group_is_dropped() {
        let format = AudioFormat::default();
        let data = [0u8; 11];
        assert_eq!(decode_samples(&data, &format).len(), 5);
    }

    #[test]
    fn empty_buffer_decodes_to_empty() {
        let format = AudioFormat::default();
        assert!(decode_samples(&[], &format).is_empty());
    }

    #[test]
    fn sixteen_bit_samples_are_little_endian_and_signed() {
        let format = AudioFormat::default();

        // 0x4000 = 16384 -> 100 * 16384 / 32768 = 50.0
        let positive = decode_samples(&[0x00, 0x40], &format);
        assert_eq!(positive, [50.0]);

        // 0xFFFF = -1 -> 100 * -1 / 32768
        let negative = decode_samples(&[0xFF, 0xFF], &format);
        assert!((negative[0] - (-100.0 / 32768.0)).abs() < 1e-6);
    }

    /// 8-bit samples always decode through the unsigned mask, so they can
    /// never be negative. Inherited behavior, kept on purpose.
    #[test]
    fn eight_bit_samples_never_negative() {
        let format = AudioFormat::new(8000, 1, 8);
        let samples = decode_samples(&[0x80, 0xFF, 0x00], &format);
        assert!(samples.iter().all(|&s| s >= 0.0));
        assert_eq!(samples[0], GAIN * (128.0 / FULL_SCALE));
    }

    #[test]
    fn gain_and_full_scale_are_applied() {
        let format = AudioFormat::default();
        let samples = decode_samples(&[0x00, 0x80], &format);
        // i16::MIN -> 100 * -32768 / 32768 = -100
        assert_eq!(samples, [-GAIN]);
    }
}
