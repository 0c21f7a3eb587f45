//! YouTube video id extraction for embedded video cards.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::YoutubeError;

// Covers watch, short, embed, nocookie, mobile, oembed and legacy
// user-channel link shapes.
static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)(?:http:|https:)*?//(?:www\.|)(?:youtube\.com|m\.youtube\.com|youtu\.|youtube-nocookie\.com).*(?:v=|v%3D|v/|(?:a|p)/(?:a|u)/\d.*/|watch\?|vi(?:=|/)|/embed/|oembed\?|be/|e/)([^&?%#/\n]*)",
    )
    .expect("YouTube URL pattern is valid")
});

/// Extract the video id from any common YouTube link.
pub fn extract_youtube_video_id(src: &str) -> Result<String, YoutubeError> {
    let captures = YOUTUBE_URL
        .captures(src)
        .ok_or(YoutubeError::UnrecognizedUrl)?;
    match captures.get(1).map(|m| m.as_str()) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(YoutubeError::VideoIdNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn extracts_from_common_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "http://youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?start=10",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "//www.youtube.com/v/dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_youtube_video_id(url).as_deref(), Ok(ID), "{url}");
        }
    }

    #[test]
    fn rejects_other_hosts() {
        assert_eq!(
            extract_youtube_video_id("https://vimeo.com/76979871"),
            Err(YoutubeError::UnrecognizedUrl)
        );
        assert_eq!(
            extract_youtube_video_id(""),
            Err(YoutubeError::UnrecognizedUrl)
        );
    }

    #[test]
    fn empty_id_is_reported() {
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/watch?v="),
            Err(YoutubeError::VideoIdNotFound)
        );
    }

    #[test]
    fn error_text_matches_card_message() {
        assert_eq!(YoutubeError::UnrecognizedUrl.to_string(), "Unrecognized URL");
        assert_eq!(YoutubeError::VideoIdNotFound.to_string(), "Video ID not found");
    }
}
