//! Backgrounds: presets, classification, render styles, custom URLs,
//! file uploads.
//!
//! A background value is one of three things: a CSS gradient expression, a
//! remote image URL, or an uploaded image inlined as a data URI. The raw
//! string is what gets persisted; classification happens by prefix, the way
//! the selector decides between an image and a gradient.

mod search;

pub use search::{ImageSearch, SEARCH_ENDPOINT};

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, ValidationError};

/// Built-in animated gradients and space photos offered in the selector.
pub const PRESET_BACKGROUNDS: [&str; 8] = [
    "linear-gradient(to right, #0f0c29, #302b63, #24243e)",
    "linear-gradient(45deg, #000428, #004e92, #000428)",
    "linear-gradient(-45deg, #3f4c6b, #606c88, #3f4c6b)",
    "linear-gradient(60deg, #1f1c2c, #928dab, #1f1c2c)",
    "https://images.unsplash.com/photo-1506508618093-6fe5ce3def4c?ixlib=rb-4.1.0&fit=fillmax&h=1080&w=1920",
    "https://images.unsplash.com/photo-1533628635777-112b2239b1c7?ixlib=rb-4.1.0&fit=fillmax&h=1080&w=1920",
    "https://images.unsplash.com/photo-1508717272800-9fff97da7e8f?ixlib=rb-4.1.0&fit=fillmax&h=1080&w=1920",
    "https://images.unsplash.com/photo-1492892132812-a00a8b245c45?ixlib=rb-4.1.0&fit=fillmax&h=1080&w=1920",
];

/// Image file extensions accepted for custom URLs.
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// One background value. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Background {
    /// CSS gradient expression, rendered with a slow animated pan.
    Gradient(String),
    /// Remote image URL.
    ImageUrl(String),
    /// Uploaded image as a data URI.
    Uploaded(String),
}

impl Background {
    /// Classify a stored string: a data URI is an upload, a leading scheme
    /// prefix means a remote image, anything else is a gradient expression.
    pub fn from_value(value: &str) -> Self {
        if value.starts_with("data:") {
            Self::Uploaded(value.to_string())
        } else if value.starts_with("http") {
            Self::ImageUrl(value.to_string())
        } else {
            Self::Gradient(value.to_string())
        }
    }

    /// The first preset gradient; the default when nothing is persisted.
    pub fn default_preset() -> Self {
        Self::from_value(PRESET_BACKGROUNDS[0])
    }

    /// The raw persisted value.
    pub fn value(&self) -> &str {
        match self {
            Self::Gradient(v) | Self::ImageUrl(v) | Self::Uploaded(v) => v,
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, Self::Gradient(_))
    }

    /// Resolve to a render-ready style.
    pub fn resolve(&self) -> BackgroundStyle {
        match self {
            Self::Gradient(expression) => BackgroundStyle::Gradient {
                expression: expression.clone(),
            },
            Self::ImageUrl(url) => BackgroundStyle::Image { url: url.clone() },
            Self::Uploaded(data_uri) => BackgroundStyle::Image {
                url: data_uri.clone(),
            },
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::default_preset()
    }
}

/// Render-ready style for the active background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundStyle {
    /// Cover-fit, centered, fixed-attachment image.
    Image { url: String },
    /// Gradient with an oversized canvas panned on a 15 s loop.
    Gradient { expression: String },
}

impl BackgroundStyle {
    /// The CSS declarations for this style.
    pub fn css(&self) -> String {
        match self {
            Self::Image { url } => format!(
                "background-image: url({url}); background-repeat: no-repeat; \
                 background-position: center center; background-attachment: fixed; \
                 background-size: cover;"
            ),
            Self::Gradient { expression } => format!(
                "background: {expression}; background-size: 300% 300%; \
                 animation: gradientShift 15s ease infinite;"
            ),
        }
    }
}

/// Validate a user-supplied image URL.
///
/// Accepts http(s) URLs whose path ends in an allowed image extension
/// (query strings ignored, case-insensitive). Anything else is rejected
/// with a user-visible message and no state changes.
pub fn validate_custom_url(input: &str) -> Result<Background, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let parsed = Url::parse(input).map_err(|_| ValidationError::InvalidImageUrl)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::InvalidImageUrl);
    }

    let path = parsed.path().to_ascii_lowercase();
    let extension = path.rsplit_once('.').map(|(_, ext)| ext);
    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext) => {
            Ok(Background::ImageUrl(input.to_string()))
        }
        _ => Err(ValidationError::InvalidImageUrl),
    }
}

/// Read a local image file into a data URI, the form uploads are persisted
/// in. The MIME type is guessed from the file extension.
pub fn data_uri_from_file(path: &Path) -> Result<String, CoreError> {
    let bytes = std::fs::read(path)?;
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_by_prefix() {
        assert!(matches!(
            Background::from_value("linear-gradient(45deg, #000428, #004e92, #000428)"),
            Background::Gradient(_)
        ));
        assert!(matches!(
            Background::from_value("https://x.com/a.jpg"),
            Background::ImageUrl(_)
        ));
        assert!(matches!(
            Background::from_value("data:image/png;base64,AAAA"),
            Background::Uploaded(_)
        ));
    }

    #[test]
    fn default_is_first_preset_gradient() {
        let bg = Background::default_preset();
        assert_eq!(bg.value(), PRESET_BACKGROUNDS[0]);
        assert!(!bg.is_image());
    }

    #[test]
    fn gradient_style_pans() {
        let css = Background::default_preset().resolve().css();
        assert!(css.contains("background-size: 300% 300%"));
        assert!(css.contains("gradientShift 15s"));
        assert!(!css.contains("background-image"));
    }

    #[test]
    fn image_style_is_cover_fit() {
        let css = Background::from_value("https://x.com/a.jpg").resolve().css();
        assert!(css.contains("url(https://x.com/a.jpg)"));
        assert!(css.contains("background-size: cover"));
        assert!(css.contains("background-attachment: fixed"));
    }

    #[test]
    fn custom_url_validation() {
        assert_eq!(validate_custom_url(""), Err(ValidationError::EmptyUrl));
        assert_eq!(
            validate_custom_url("notanimage"),
            Err(ValidationError::InvalidImageUrl)
        );
        assert_eq!(
            validate_custom_url("https://x.com/a.bmp"),
            Err(ValidationError::InvalidImageUrl)
        );
        assert_eq!(
            validate_custom_url("ftp://x.com/a.jpg"),
            Err(ValidationError::InvalidImageUrl)
        );
        assert!(validate_custom_url("https://x.com/a.jpg").is_ok());
        assert!(validate_custom_url("http://x.com/shots/photo.WEBP").is_ok());
        // Query strings do not disqualify the extension.
        assert!(validate_custom_url("https://x.com/a.png?w=1920&q=80").is_ok());
    }

    #[test]
    fn upload_becomes_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("wallpaper.png");
        std::fs::write(&file, [0x89, 0x50, 0x4e, 0x47]).unwrap();
        let uri = data_uri_from_file(&file).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(matches!(
            Background::from_value(&uri),
            Background::Uploaded(_)
        ));
    }
}
