//! Binary codec NCDs: bz2, lzma and zlib over UTF-8 bytes.
//!
//! Each codec is feature-gated. The types always exist so configuration
//! never depends on compile-time features; invoking a codec that is not
//! compiled in returns [`Error::UnsupportedCompressor`]. The compressed
//! size strips the codec's constant header (15 bytes for bz2, 14 for
//! lzma, 2 for zlib) to remove per-call overhead from the formula.

#[cfg(any(feature = "bz2", feature = "lzma", feature = "zlib"))]
use std::io::Write;

use crate::base::{Kind, Metric, TextMetric};
use crate::compression::ncd;
use crate::Result;
#[cfg(not(all(feature = "bz2", feature = "lzma", feature = "zlib")))]
use crate::Error;

#[cfg(feature = "bz2")]
fn bz2_size(data: &[u8]) -> Result<f64> {
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;
    Ok(compressed.len().saturating_sub(15) as f64)
}

#[cfg(not(feature = "bz2"))]
fn bz2_size(_data: &[u8]) -> Result<f64> {
    Err(Error::UnsupportedCompressor("bz2"))
}

#[cfg(feature = "lzma")]
fn lzma_size(data: &[u8]) -> Result<f64> {
    let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;
    Ok(compressed.len().saturating_sub(14) as f64)
}

#[cfg(not(feature = "lzma"))]
fn lzma_size(_data: &[u8]) -> Result<f64> {
    Err(Error::UnsupportedCompressor("lzma"))
}

#[cfg(feature = "zlib")]
fn zlib_size(data: &[u8]) -> Result<f64> {
    let mut encoder =
        flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;
    Ok(compressed.len().saturating_sub(2) as f64)
}

#[cfg(not(feature = "zlib"))]
fn zlib_size(_data: &[u8]) -> Result<f64> {
    Err(Error::UnsupportedCompressor("zlib"))
}

macro_rules! byte_codec_ncd {
    ($(#[$doc:meta])* $name:ident, $size:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub fn new() -> Self {
                Self
            }
        }

        impl Metric<u8> for $name {
            fn kind(&self) -> Kind {
                Kind::Distance
            }

            fn maximum(&self, _seqs: &[&[u8]]) -> f64 {
                1.0
            }

            fn nary(&self) -> bool {
                true
            }

            fn call(&self, seqs: &[&[u8]]) -> Result<f64> {
                ncd(seqs, |s| $size(s))
            }
        }

        impl TextMetric for $name {
            fn str_kind(&self) -> Kind {
                Kind::Distance
            }

            fn str_maximum(&self, _seqs: &[&str]) -> f64 {
                1.0
            }

            fn str_call(&self, seqs: &[&str]) -> Result<f64> {
                let bytes: Vec<&[u8]> = seqs.iter().map(|s| s.as_bytes()).collect();
                Metric::<u8>::call(self, &bytes)
            }
        }
    };
}

byte_codec_ncd!(
    /// NCD backed by bzip2 (`bz2` feature).
    Bz2Ncd, bz2_size
);
byte_codec_ncd!(
    /// NCD backed by xz/LZMA (`lzma` feature).
    LzmaNcd, lzma_size
);
byte_codec_ncd!(
    /// NCD backed by zlib deflate (`zlib` feature).
    ZlibNcd, zlib_size
);
