use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtworkError {
    #[error("fetching thumbnail failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("decoding thumbnail failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Download and decode a thumbnail image.
pub fn fetch(http: &reqwest::blocking::Client, url: &str) -> Result<DynamicImage, ArtworkError> {
    let bytes = http.get(url).send()?.error_for_status()?.bytes()?;
    Ok(image::load_from_memory(&bytes)?)
}
