//! Analyzer facade over a capture source.

use tracing::{debug, warn};

use tono_core::{AudioFormat, rms_level};

use crate::capture::CaptureSource;
use crate::pitch::{self, DEFAULT_HARMONICS};
use crate::{Error, Result};

/// Byte count analyzed by [`Analyzer::frequency`].
pub const DEFAULT_FREQUENCY_BYTES: usize = 4096;

/// Interval measured by [`Analyzer::volume`], in milliseconds.
pub const DEFAULT_VOLUME_INTERVAL_MS: u32 = 100;

/// Pitch and loudness analysis over a blocking capture source.
///
/// Each call pulls a fresh buffer from the source and analyzes it on the
/// calling thread before returning; nothing is cached between calls. Calls
/// borrow the analyzer mutably, so at most one pull is in flight per source
/// at a time.
///
/// Volume and pitch deliberately read the buffer differently: volume is a
/// cheap signed-byte RMS meant for frequent polling, while pitch runs the
/// full decode / window / transform pipeline. See [`rms_level`] and
/// [`fundamental_frequency`](pitch::fundamental_frequency).
pub struct Analyzer<S> {
    source: S,
    harmonics: usize,
}

impl<S: CaptureSource> Analyzer<S> {
    /// Wrap a capture source with the default downsample factor.
    pub fn new(source: S) -> Self {
        Self::with_harmonics(source, DEFAULT_HARMONICS)
    }

    /// Wrap a capture source with an explicit Harmonic Product Spectrum
    /// downsample factor.
    ///
    /// Raising the factor trades maximum detectable frequency for
    /// robustness against octave errors. A factor of zero is rejected at
    /// analysis time with [`Error::InvalidDownsample`].
    pub fn with_harmonics(source: S, harmonics: usize) -> Self {
        Self { source, harmonics }
    }

    /// The format the underlying source is capturing in.
    pub fn format(&self) -> AudioFormat {
        self.source.format()
    }

    /// Consume the analyzer and hand the capture source back.
    pub fn into_source(self) -> S {
        self.source
    }

    /// RMS volume over the default 100 ms interval.
    ///
    /// `None` when the capture device is unavailable. Allow at least the
    /// interval for the blocking read, or use [`Analyzer::volume_over`]
    /// with a shorter one.
    pub fn volume(&mut self) -> Option<u32> {
        self.volume_over(DEFAULT_VOLUME_INTERVAL_MS)
    }

    /// RMS volume over `interval_ms` of capture.
    ///
    /// Derives the byte count from the interval and the active format,
    /// pulls that many bytes, and measures their signed-byte RMS level.
    /// `None` when the device is unavailable.
    pub fn volume_over(&mut self, interval_ms: u32) -> Option<u32> {
        let format = self.source.format();
        let num_bytes = format.num_bytes(f64::from(interval_ms) / 1000.0);

        let Some(data) = self.source.read_bytes(num_bytes) else {
            warn!(num_bytes, "capture source unavailable, volume unknown");
            return None;
        };

        let level = rms_level(&data);
        debug!(num_bytes, ?level, "volume sample");
        level
    }

    /// Fundamental frequency over the default 4096-byte buffer, in Hz.
    ///
    /// `None` when the device is unavailable or the signal has no dominant
    /// peak. The default byte count satisfies the even-count precondition,
    /// so the error path cannot fire under documented use; if it ever does,
    /// the failure is logged and reported as unavailable instead of
    /// propagated.
    pub fn frequency(&mut self) -> Option<u32> {
        match self.frequency_over(DEFAULT_FREQUENCY_BYTES) {
            Ok(frequency) => frequency,
            Err(error) => {
                warn!(%error, "frequency analysis failed");
                None
            }
        }
    }

    /// Fundamental frequency over `num_bytes` of capture, in Hz.
    ///
    /// `num_bytes` must be even ([`Error::OddByteCount`] otherwise). One
    /// extra byte is pulled so the decoder can drop a trailing partial
    /// group without shortening the analysis window.
    ///
    /// `Ok(None)` when the device is unavailable or the signal has no
    /// dominant peak.
    pub fn frequency_over(&mut self, num_bytes: usize) -> Result<Option<u32>> {
        if num_bytes % 2 != 0 {
            return Err(Error::OddByteCount(num_bytes));
        }

        let format = self.source.format();
        let Some(data) = self.source.read_bytes(num_bytes + 1) else {
            warn!(num_bytes, "capture source unavailable, frequency unknown");
            return Ok(None);
        };

        let frequency = pitch::fundamental_frequency(&data, &format, self.harmonics)?;
        debug!(num_bytes, ?frequency, "frequency sample");
        Ok(frequency)
    }
}
