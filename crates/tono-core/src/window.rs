//! In-place Hann windowing.

use core::f32::consts::PI;
use libm::cosf;

/// Apply a Hann window in place over `signal[pos..pos + size]`.
///
/// The weight at local index `j` (0-based within the window) is
/// `0.5 * (1 - cos(2π·j / size))`: zero at the leading edge, one at the
/// midpoint, falling back toward zero at the trailing edge.
///
/// The taper is a plain multiply, so applying it twice scales the data a
/// second time rather than being a no-op; apply it exactly once per sample
/// set.
///
/// `size` must be non-zero and `pos + size` must not exceed the buffer
/// length.
pub fn hann_window_range(signal: &mut [f32], pos: usize, size: usize) {
    debug_assert!(size > 0, "window size must be non-zero");
    for (j, sample) in signal[pos..pos + size].iter_mut().enumerate() {
        let w = 0.5 * (1.0 - cosf(2.0 * PI * j as f32 / size as f32));
        *sample *= w;
    }
}

/// Apply a Hann window across the whole buffer.
///
/// Empty buffers are left untouched.
pub fn hann_window(signal: &mut [f32]) {
    if signal.is_empty() {
        return;
    }
    hann_window_range(signal, 0, signal.len());
}
