use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// A single entry in the messages catalog.
#[derive(Serialize, Deserialize)]
pub struct Message {
    pub id: i64,

    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub speakers: Vec<String>,

    #[serde(default)]
    pub series: Option<Series>,

    #[serde(default)]
    pub thumbnail_url: Option<String>,

    #[serde(default, rename = "youtube")]
    pub youtube_url: Option<String>,

    #[serde(default)]
    pub audio_url: Option<String>,

    #[serde(default)]
    pub images: Option<ImageSet>,
}

impl Message {
    /// Picks the best available cover image: the square rendition, then any
    /// rendition with a URL, then the flat thumbnail, then the series cover.
    pub fn cover_image_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|set| {
                set.square
                    .as_ref()
                    .and_then(|img| img.url.as_deref())
                    .or_else(|| set.any_url())
            })
            .or(self.thumbnail_url.as_deref())
            .or_else(|| self.series.as_ref().and_then(|s| s.cover_image_url()))
    }

    /// Derives a YouTube still-frame URL from the message's video link.
    ///
    /// The upstream misformats its YouTube URLs with a trailing `?rel=0`
    /// after the query string; that suffix is stripped before parsing.
    pub fn video_thumbnail_url(&self) -> Option<String> {
        let raw = self.youtube_url.as_deref()?;
        let fixed = raw.replace("?rel=0", "");
        let url = Url::parse(&fixed).ok()?;
        let video_id = url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?;
        Some(format!(
            "https://img.youtube.com/vi/{}/maxresdefault.jpg",
            video_id
        ))
    }
}

/// Image renditions keyed by shape. Any of them may be missing.
#[derive(Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub square: Option<Image>,
    #[serde(default)]
    pub wide: Option<Image>,
    #[serde(default)]
    pub tall: Option<Image>,
    #[serde(default)]
    pub banner: Option<Image>,
}

impl ImageSet {
    /// First rendition that actually carries a URL, in shape order.
    pub fn any_url(&self) -> Option<&str> {
        [&self.square, &self.wide, &self.tall, &self.banner]
            .into_iter()
            .find_map(|image| image.as_ref().and_then(|img| img.url.as_deref()))
    }
}

#[derive(Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: Option<String>,
}

/// The series a message belongs to.
#[derive(Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub images: Option<ImageSet>,
}

impl Series {
    pub fn cover_image_url(&self) -> Option<&str> {
        self.images.as_ref().and_then(|set| {
            set.square
                .as_ref()
                .and_then(|img| img.url.as_deref())
                .or_else(|| set.any_url())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_message() -> Message {
        Message {
            id: 1,
            title: "test".to_string(),
            subtitle: None,
            date: None,
            speakers: vec![],
            series: None,
            thumbnail_url: None,
            youtube_url: None,
            audio_url: None,
            images: None,
        }
    }

    fn image(url: &str) -> Option<Image> {
        Some(Image {
            url: Some(url.to_string()),
        })
    }

    #[test]
    fn cover_image_prefers_square() {
        let mut message = bare_message();
        message.thumbnail_url = Some("https://cdn.example.com/thumb.jpg".to_string());
        message.images = Some(ImageSet {
            square: image("https://cdn.example.com/square.jpg"),
            wide: image("https://cdn.example.com/wide.jpg"),
            tall: None,
            banner: None,
        });
        assert_eq!(
            message.cover_image_url(),
            Some("https://cdn.example.com/square.jpg")
        );
    }

    #[test]
    fn cover_image_falls_back_to_any_rendition() {
        let mut message = bare_message();
        message.images = Some(ImageSet {
            square: Some(Image { url: None }),
            wide: None,
            tall: image("https://cdn.example.com/tall.jpg"),
            banner: None,
        });
        assert_eq!(
            message.cover_image_url(),
            Some("https://cdn.example.com/tall.jpg")
        );
    }

    #[test]
    fn cover_image_falls_back_to_thumbnail_then_series() {
        let mut message = bare_message();
        message.thumbnail_url = Some("https://cdn.example.com/thumb.jpg".to_string());
        assert_eq!(
            message.cover_image_url(),
            Some("https://cdn.example.com/thumb.jpg")
        );

        message.thumbnail_url = None;
        message.series = Some(Series {
            id: Some(9),
            title: Some("A Series".to_string()),
            images: Some(ImageSet {
                square: image("https://cdn.example.com/series.jpg"),
                wide: None,
                tall: None,
                banner: None,
            }),
        });
        assert_eq!(
            message.cover_image_url(),
            Some("https://cdn.example.com/series.jpg")
        );
    }

    #[test]
    fn cover_image_none_when_nothing_set() {
        assert_eq!(bare_message().cover_image_url(), None);
    }

    #[test]
    fn video_thumbnail_from_misformatted_url() {
        let mut message = bare_message();
        message.youtube_url =
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ?rel=0".to_string());
        assert_eq!(
            message.video_thumbnail_url().as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
        );
    }

    #[test]
    fn video_thumbnail_requires_video_id() {
        let mut message = bare_message();
        message.youtube_url = Some("https://www.youtube.com/playlist?list=abc".to_string());
        assert_eq!(message.video_thumbnail_url(), None);

        message.youtube_url = None;
        assert_eq!(message.video_thumbnail_url(), None);
    }
}
