//! Pitch and loudness analysis for live audio capture.
//!
//! This crate turns raw PCM byte buffers pulled from a capture device into
//! two derived signals:
//!
//! - **Loudness** - an RMS level over the raw bytes ([`Analyzer::volume`])
//! - **Fundamental frequency** - a Harmonic Product Spectrum pitch estimate
//!   ([`Analyzer::frequency`])
//!
//! The capture device itself sits behind the [`CaptureSource`] trait; this
//! crate never opens devices, writes files, or spawns threads. Each call
//! pulls one buffer, analyzes it on the calling thread, and returns.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tono_analysis::{Analyzer, CaptureSource};
//!
//! let source = MyMicrophone::open()?; // implements CaptureSource
//! let mut analyzer = Analyzer::new(source);
//!
//! if let Some(level) = analyzer.volume() {
//!     println!("level: {level}");
//! }
//! if let Some(hz) = analyzer.frequency() {
//!     println!("pitch: {hz} Hz");
//! }
//! ```
//!
//! ## Unavailability vs. caller errors
//!
//! A device that cannot supply bytes, or a buffer with no usable signal
//! (silence, emptiness), yields `None` - never a panic and never a fake
//! number. Caller mistakes such as an odd frequency byte count or a zero
//! downsample factor are reported separately through [`Error`] so tests can
//! tell the two apart.

pub mod analyzer;
pub mod capture;
pub mod pitch;

pub use analyzer::{Analyzer, DEFAULT_FREQUENCY_BYTES, DEFAULT_VOLUME_INTERVAL_MS};
pub use capture::CaptureSource;
pub use pitch::{DEFAULT_HARMONICS, fundamental_frequency};
pub use tono_core::{AudioFormat, decode_samples, hann_window, hann_window_range, rms_level};

/// Precondition violations on the analysis surface.
///
/// Runtime unavailability (no device, silent input) is expressed as `None`
/// results instead; these variants only report caller errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A frequency request was made with an odd byte count.
    #[error("frequency byte count must be even, got {0}")]
    OddByteCount(usize),

    /// The harmonic-product downsample factor was zero.
    #[error("downsample factor must be at least 1")]
    InvalidDownsample,
}

/// Convenience result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
