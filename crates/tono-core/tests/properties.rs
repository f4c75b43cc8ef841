//! Property-based tests for the capture-buffer primitives.
//!
//! Uses proptest to verify the invariants the analysis layer leans on:
//! decode length arithmetic, bounded windowing, and loudness edge cases.

use proptest::prelude::*;
use tono_core::{AudioFormat, decode_samples, hann_window, rms_level};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Decoding yields exactly one sample per whole bytes-per-sample group,
    /// for every supported bit depth.
    #[test]
    fn decode_length_matches_group_count(
        data in prop::collection::vec(any::<u8>(), 0..512),
        bit_depth_idx in 0usize..4,
    ) {
        let bit_depth = [8u32, 16, 24, 32][bit_depth_idx];
        let format = AudioFormat::new(16_000, bit_depth / 8, bit_depth);

        let samples = decode_samples(&data, &format);
        prop_assert_eq!(samples.len(), data.len() / format.bytes_per_sample());
    }

    /// Decoded samples are always finite, whatever the input bytes.
    #[test]
    fn decode_output_is_finite(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let format = AudioFormat::default();
        for sample in decode_samples(&data, &format) {
            prop_assert!(sample.is_finite());
        }
    }

    /// Hann weights lie in [0, 1], so windowing never grows a sample.
    #[test]
    fn windowing_never_amplifies(
        mut signal in prop::collection::vec(-1000.0f32..1000.0, 1..256),
    ) {
        let original = signal.clone();
        hann_window(&mut signal);

        for (windowed, input) in signal.iter().zip(original.iter()) {
            prop_assert!(windowed.abs() <= input.abs() + 1e-4);
        }
    }

    /// A constant buffer has zero deviation from its mean, so its RMS level
    /// is exactly zero at any length.
    #[test]
    fn constant_buffer_rms_is_zero(byte in any::<u8>(), len in 1usize..2048) {
        prop_assert_eq!(rms_level(&vec![byte; len]), Some(0));
    }

    /// RMS never exceeds the signed-byte range and never fails on non-empty
    /// input.
    #[test]
    fn rms_is_bounded(data in prop::collection::vec(any::<u8>(), 1..2048)) {
        let level = rms_level(&data).unwrap();
        prop_assert!(level <= 128);
    }
}
