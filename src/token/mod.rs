//! Scannable identifier tokens.
//!
//! A token is the student id encoded as a QR code. The encoder and decoder
//! are traits so the workflow does not depend on a particular QR library;
//! [`qr::QrCodec`] implements both.

pub mod qr;

use crate::errors::AppResult;
use crate::utils::path::ensure_parent;
use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

pub use qr::QrCodec;

/// Light modules around the symbol (QR quiet zone).
pub const QUIET_ZONE: u32 = 4;

/// Square module matrix of an encoded token, row-major, `true` = dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatrix {
    pub width: usize,
    pub modules: Vec<bool>,
}

impl TokenMatrix {
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }

    /// Rasterize with `scale` pixels per module and a white quiet zone.
    pub fn to_image(&self, scale: u32) -> GrayImage {
        let scale = scale.max(1);
        let side = (self.width as u32 + 2 * QUIET_ZONE) * scale;

        GrayImage::from_fn(side, side, |px, py| {
            let mx = (px / scale) as i64 - QUIET_ZONE as i64;
            let my = (py / scale) as i64 - QUIET_ZONE as i64;
            let inside = (0..self.width as i64).contains(&mx) && (0..self.width as i64).contains(&my);

            if inside && self.is_dark(mx as usize, my as usize) {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        })
    }

    pub fn save_png(&self, path: &Path, scale: u32) -> AppResult<()> {
        ensure_parent(path)?;
        self.to_image(scale).save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Scannable-token encoder: string → module matrix.
pub trait TokenEncoder {
    fn encode(&self, payload: &str) -> AppResult<TokenMatrix>;
}

/// Image decode service: zero or one payloads per image.
pub trait PayloadDecoder {
    fn decode(&self, image: &GrayImage) -> Option<String>;
}

const SHOWN_PAYLOAD_CHARS: usize = 24;

/// Payload as quoted in messages: long payloads are cut after a few
/// characters and tagged with their full length.
pub fn shown_payload(payload: &str) -> String {
    let total = payload.chars().count();
    if total <= SHOWN_PAYLOAD_CHARS {
        return payload.to_string();
    }

    let head: String = payload.chars().take(SHOWN_PAYLOAD_CHARS).collect();
    format!("{head}… ({total} chars)")
}

/// Load an image file as greyscale, ready for a [`PayloadDecoder`].
pub fn load_image(path: &Path) -> AppResult<GrayImage> {
    Ok(image::open(path)?.to_luma8())
}
