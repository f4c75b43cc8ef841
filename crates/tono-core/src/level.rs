//! Signed-byte RMS loudness.

use libm::{round, sqrt};

/// RMS level of a raw capture buffer, bytes reinterpreted as signed 8-bit.
///
/// Computes the mean of the signed byte values, then the mean of squared
/// deviations from that mean, and returns the rounded square root.
///
/// This is a separate, cheaper reading of the buffer than
/// [`decode_samples`](crate::decode_samples): volume is polled far more
/// often than pitch, and the two paths interpret bytes differently on
/// purpose. Routing loudness through the multi-byte decoder would change
/// the reported numbers.
///
/// Returns `None` for an empty buffer.
pub fn rms_level(data: &[u8]) -> Option<u32> {
    if data.is_empty() {
        return None;
    }

    let len = data.len() as f64;
    let sum: i64 = data.iter().map(|&b| i64::from(b as i8)).sum();
    let mean = sum as f64 / len;

    let mean_square = data
        .iter()
        .map(|&b| {
            let dev = f64::from(b as i8) - mean;
            dev * dev
        })
        .sum::<f64>()
        / len;

    Some(round(sqrt(mean_square)) as u32)
}
