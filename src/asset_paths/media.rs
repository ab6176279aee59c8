use std::fmt;

/// Media type hint attached to `<source>` and `<img>` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `video/webm`
    VideoWebm,
    /// `video/mp4`
    VideoMp4,
    /// `image/jpeg`
    ImageJpeg,
    /// `image/png`
    ImagePng,
}

impl MediaType {
    /// MIME string for this media type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VideoWebm => "video/webm",
            Self::VideoMp4 => "video/mp4",
            Self::ImageJpeg => "image/jpeg",
            Self::ImagePng => "image/png",
        }
    }

    /// Returns `true` for video containers.
    pub fn is_video(self) -> bool {
        matches!(self, Self::VideoWebm | Self::VideoMp4)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guess the media type of a URL from its extension.
///
/// Unrecognised extensions yield `None`, leaving the type for the consumer to infer.
pub fn mime_from_extension(url: &str) -> Option<MediaType> {
    let lowered = url.to_ascii_lowercase();
    if lowered.ends_with(".webm") {
        Some(MediaType::VideoWebm)
    } else if lowered.ends_with(".mp4") {
        Some(MediaType::VideoMp4)
    } else if lowered.ends_with(".jpg") || lowered.ends_with(".jpeg") {
        Some(MediaType::ImageJpeg)
    } else if lowered.ends_with(".png") {
        Some(MediaType::ImagePng)
    } else {
        None
    }
}
