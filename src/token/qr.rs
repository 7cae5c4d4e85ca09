use super::{PayloadDecoder, TokenEncoder, TokenMatrix, shown_payload};
use crate::errors::{AppError, AppResult};
use image::GrayImage;
use qrcode::{Color, QrCode};

/// QR implementation of both token traits: `qrcode` to encode, `rqrr` to
/// decode.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodec;

impl TokenEncoder for QrCodec {
    fn encode(&self, payload: &str) -> AppResult<TokenMatrix> {
        if payload.is_empty() {
            return Err(AppError::Validation("token payload".into()));
        }

        let code = QrCode::new(payload.as_bytes())
            .map_err(|e| {
                AppError::Token(format!("cannot encode '{}': {e}", shown_payload(payload)))
            })?;

        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();

        Ok(TokenMatrix {
            width: code.width(),
            modules,
        })
    }
}

impl PayloadDecoder for QrCodec {
    fn decode(&self, image: &GrayImage) -> Option<String> {
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            image.width() as usize,
            image.height() as usize,
            |x, y| image.get_pixel(x as u32, y as u32).0[0],
        );

        // first grid that decodes wins
        prepared
            .detect_grids()
            .into_iter()
            .find_map(|grid| grid.decode().ok().map(|(_, content)| content))
    }
}
