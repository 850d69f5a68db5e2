use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::DynamicImage;

/// Decode a `data:<mime>;base64,<payload>` illustration.
///
/// Returns `None` for anything that is not a base64 data URI of a decodable
/// PNG, JPEG, GIF or WebP image.
pub(crate) fn decode_image(uri: &str) -> Option<DynamicImage> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }

    let bytes = match STANDARD.decode(payload.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Illustration is not valid base64: {}", e);
            return None;
        }
    };

    match image::load_from_memory(&bytes) {
        Ok(img) => Some(img),
        Err(e) => {
            log::warn!("Illustration could not be decoded: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_data_uris() {
        assert!(decode_image("https://example.com/cat.png").is_none());
        assert!(decode_image("data:image/png,plain").is_none());
        assert!(decode_image("data:image/png;base64,!!!").is_none());
        assert!(decode_image("data:image/png;base64,AAAA").is_none());
    }
}
