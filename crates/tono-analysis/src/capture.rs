//! Pluggable capture source abstraction.
//!
//! [`CaptureSource`] decouples the analysis pipeline from any specific
//! platform capture API. The analyzer only ever asks for the active sample
//! format and pulls byte buffers on demand; device discovery, stream
//! lifecycle, encoding, and file writing all live behind the trait:
//!
//! - **Desktop**: a wrapper over the platform capture line
//! - **Embedded**: DMA/I2S interrupt-driven capture
//! - **Testing**: deterministic scripted sources for CI
//!
//! The trait is object-safe so sources can be selected at runtime and boxed
//! behind `dyn CaptureSource`.

use tono_core::AudioFormat;

/// A blocking source of raw capture bytes.
///
/// `read_bytes` blocks until the requested number of bytes has been
/// captured, and returns `None` when the device cannot supply data; the
/// analyzer converts that into unavailable results rather than panicking.
///
/// Implementations are pulled from at most once at a time per analyzer
/// (calls take `&mut self`), so no internal locking is required.
pub trait CaptureSource {
    /// The sample format the device is currently capturing in.
    ///
    /// Must stay constant for the duration of a single analysis call.
    fn format(&self) -> AudioFormat;

    /// Pull exactly `n` bytes from the device.
    ///
    /// Returns `None` if the device is unavailable or capture fails.
    fn read_bytes(&mut self, n: usize) -> Option<Vec<u8>>;
}

impl<S: CaptureSource + ?Sized> CaptureSource for Box<S> {
    fn format(&self) -> AudioFormat {
        (**self).format()
    }

    fn read_bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        (**self).read_bytes(n)
    }
}
