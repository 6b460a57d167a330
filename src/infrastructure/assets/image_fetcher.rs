use anyhow::{Context, Result, bail};
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Image bytes held in memory for inline display
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl EmbeddedImage {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// `data:<mime>;base64,<payload>` for embedding in HTML
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Downloads an image over HTTP(S).
pub async fn fetch_image(client: &Client, url: &str) -> Result<EmbeddedImage> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        bail!("Only HTTP(S) URLs are supported for images: {}", url);
    }

    debug!("Fetching image from URL: {}", url);
    let mut response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Image request to {} failed", url))?;

    if !response.status().is_success() {
        bail!("Image fetch failed with status: {}", response.status());
    }

    let header_mime = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).trim().to_lowercase());

    // Reject on the declared size before reading anything
    if let Some(length) = response.content_length()
        && length > MAX_IMAGE_BYTES as u64
    {
        bail!(
            "Image too large: {} bytes (max: {} bytes)",
            length,
            MAX_IMAGE_BYTES
        );
    }

    // Chunked responses carry no length, so the cap is enforced while reading
    let mut bytes = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .context("Failed to read image body")?
    {
        if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
            bail!("Image too large: exceeds {} bytes", MAX_IMAGE_BYTES);
        }
        bytes.extend_from_slice(&chunk);
    }

    let mime_type = match header_mime {
        Some(mime) if mime.starts_with("image/") => mime,
        _ => sniff_mime_type(&bytes)
            .with_context(|| format!("{} did not return an image", url))?
            .to_string(),
    };

    Ok(EmbeddedImage::new(mime_type, bytes))
}

/// Reads a bundled image from disk.
pub fn read_image_file(path: &Path) -> Result<EmbeddedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read image {:?}", path))?;
    let mime_type = sniff_mime_type(&bytes)
        .with_context(|| format!("{:?} is not a PNG, JPEG, GIF or WebP image", path))?;
    Ok(EmbeddedImage::new(mime_type, bytes))
}

/// Detects the image type from its magic bytes
pub fn sniff_mime_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF8") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}
