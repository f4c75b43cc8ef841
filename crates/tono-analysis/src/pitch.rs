//! Fundamental-frequency estimation via Harmonic Product Spectrum.
//!
//! Pipeline: decode bytes to samples, Hann-window the whole sequence,
//! forward FFT, discard the negative-frequency half, decimate the remaining
//! spectrum into independent views, multiply the views together bin by bin,
//! and pick the strongest bin. Multiplying decimated copies reinforces the
//! fundamental while suppressing its harmonics, which all alias onto the
//! fundamental bin in one of the views.

use rustfft::{FftPlanner, num_complex::Complex};
use tono_core::{AudioFormat, decode_samples, hann_window};

use crate::{Error, Result};

/// Downsample factor used when the caller does not pick one.
pub const DEFAULT_HARMONICS: usize = 4;

/// Estimate the fundamental frequency of a raw capture buffer, in Hz.
///
/// `harmonics` is the Harmonic Product Spectrum downsample factor: each of
/// the `harmonics` views keeps every `(i+1)`-th bin of the halved spectrum,
/// truncated to `(len/2) / harmonics` bins. Raising it narrows the maximum
/// detectable frequency and increases robustness against octave confusion;
/// that trade-off is inherent to the method. With `harmonics == 1` the
/// combination step is a no-op and the estimate degenerates to plain
/// magnitude-peak picking.
///
/// The DC bin is never a candidate; the peak search starts at bin 1 and
/// requires a strictly positive magnitude. The winning bin index is
/// converted to Hz with a bin width of `round(sample_rate / fft_len)`.
///
/// Returns `Ok(None)` when no bin qualifies - an empty buffer, silence, or
/// any all-zero signal. Returns [`Error::InvalidDownsample`] when
/// `harmonics == 0`.
pub fn fundamental_frequency(
    data: &[u8],
    format: &AudioFormat,
    harmonics: usize,
) -> Result<Option<u32>> {
    if harmonics == 0 {
        return Err(Error::InvalidDownsample);
    }

    let mut samples = decode_samples(data, format);
    if samples.is_empty() {
        return Ok(None);
    }
    hann_window(&mut samples);

    let mut spectrum: Vec<Complex<f32>> = samples
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect();

    let fft_len = spectrum.len();
    FftPlanner::new()
        .plan_fft_forward(fft_len)
        .process(&mut spectrum);

    // Real input: the upper half mirrors the lower, so only [0, len/2) is
    // kept.
    let half = &spectrum[..fft_len / 2];

    let view_len = half.len() / harmonics;
    if view_len == 0 {
        return Ok(None);
    }

    // Independent decimated copies of the halved spectrum; view `i` keeps
    // every (i+1)-th bin. Materialized so the combination below never
    // aliases the original spectrum.
    let views: Vec<Vec<Complex<f32>>> = (0..harmonics)
        .map(|i| (0..view_len).map(|k| half[k * (i + 1)]).collect())
        .collect();

    let combined: Vec<Complex<f32>> = (0..view_len)
        .map(|k| {
            views
                .iter()
                .fold(Complex::new(1.0, 0.0), |product, view| product * view[k])
        })
        .collect();

    let bin_size = (format.sample_rate as f32 / fft_len as f32).round() as u32;
    Ok(peak_bin(&combined).map(|index| index as u32 * bin_size))
}

/// Index of the strongest bin by magnitude, skipping DC.
///
/// `None` when no bin rises above the smallest positive magnitude, which is
/// the all-zero (silent) case.
fn peak_bin(spectrum: &[Complex<f32>]) -> Option<usize> {
    let mut max = f32::MIN_POSITIVE;
    let mut index = None;
    for (i, bin) in spectrum.iter().enumerate().skip(1) {
        let magnitude = bin.norm();
        if magnitude > max {
            max = magnitude;
            index = Some(i);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_downsample_factor_is_rejected() {
        let format = AudioFormat::default();
        assert_eq!(
            fundamental_frequency(&[0u8; 64], &format, 0),
            Err(Error::InvalidDownsample)
        );
    }

    #[test]
    fn empty_buffer_is_unavailable() {
        let format = AudioFormat::default();
        assert_eq!(fundamental_frequency(&[], &format, 4), Ok(None));
    }

    #[test]
    fn silence_has_no_dominant_peak() {
        let format = AudioFormat::default();
        assert_eq!(fundamental_frequency(&[0u8; 4096], &format, 4), Ok(None));
    }

    #[test]
    fn buffer_shorter_than_one_view_is_unavailable() {
        let format = AudioFormat::default();
        // 3 samples -> half spectrum of 1 bin -> zero-length views at N=4.
        assert_eq!(fundamental_frequency(&[1u8; 6], &format, 4), Ok(None));
    }

    #[test]
    fn peak_bin_skips_dc() {
        let spectrum = vec![
            Complex::new(100.0, 0.0),
            Complex::new(1.0, 0.0),
            Complex::new(3.0, 0.0),
            Complex::new(2.0, 0.0),
        ];
        assert_eq!(peak_bin(&spectrum), Some(2));
    }

    #[test]
    fn peak_bin_of_zero_spectrum_is_none() {
        let spectrum = vec![Complex::new(0.0, 0.0); 16];
        assert_eq!(peak_bin(&spectrum), None);
    }
}
