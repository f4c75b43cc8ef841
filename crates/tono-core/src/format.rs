//! Capture format description and byte/frame arithmetic.

/// Sample format reported by a capture source.
///
/// Supplied by the capture device and treated as immutable for the duration
/// of an analysis call. All fields are positive; `bit_depth` is a multiple
/// of 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per sample-frame.
    pub frame_size: u32,
    /// Bits per sample.
    pub bit_depth: u32,
}

impl Default for AudioFormat {
    /// 16 kHz, 16-bit mono - the format speech capture typically runs at.
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            frame_size: 2,
            bit_depth: 16,
        }
    }
}

impl AudioFormat {
    /// Create a format from its raw fields.
    pub const fn new(sample_rate: u32, frame_size: u32, bit_depth: u32) -> Self {
        Self {
            sample_rate,
            frame_size,
            bit_depth,
        }
    }

    /// Bytes occupied by one decoded sample.
    pub const fn bytes_per_sample(&self) -> usize {
        (self.bit_depth / 8) as usize
    }

    /// Number of bytes the device produces over `seconds` of capture.
    pub fn num_bytes(&self, seconds: f64) -> usize {
        libm::round(seconds * f64::from(self.sample_rate) * f64::from(self.frame_size)) as usize
    }

    /// Number of whole frames contained in `bytes` (truncating).
    pub const fn num_frames(&self, bytes: usize) -> usize {
        bytes / self.frame_size as usize
    }
}
