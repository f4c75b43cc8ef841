//! Tono Core - primitives for live capture-buffer analysis
//!
//! This crate provides the building blocks the analysis layer composes into
//! pitch and loudness estimates:
//!
//! - [`AudioFormat`] - the sample format a capture device reports, plus
//!   byte/frame arithmetic
//! - [`decode_samples`] - raw little-endian PCM bytes to normalized `f32`
//!   samples
//! - [`hann_window`] / [`hann_window_range`] - in-place Hann tapering before
//!   a transform
//! - [`rms_level`] - coarse signed-byte RMS loudness
//!
//! Everything here is a pure function over caller-supplied buffers. Nothing
//! holds device state, nothing allocates beyond its output, and nothing
//! fails on well-formed input.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! tono-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use tono_core::{AudioFormat, decode_samples, hann_window, rms_level};
//!
//! let format = AudioFormat::default(); // 16 kHz, 16-bit, mono
//! let bytes = [0x00, 0x40, 0x00, 0xC0]; // +0.5 and -0.5 full scale
//!
//! let mut samples = decode_samples(&bytes, &format);
//! assert_eq!(samples.len(), 2);
//! hann_window(&mut samples);
//!
//! let level = rms_level(&bytes);
//! assert!(level.is_some());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod decode;
pub mod format;
pub mod level;
pub mod window;

pub use decode::{FULL_SCALE, GAIN, decode_samples};
pub use format::AudioFormat;
pub use level::rms_level;
pub use window::{hann_window, hann_window_range};
