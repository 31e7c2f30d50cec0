use std::collections::BTreeMap;

/// A content object that can hand out URLs for named, pre-generated variants of its image
pub trait Renditions {
    /// URL of the untouched image
    fn image_url(&self) -> &str;

    /// URL of the rendition called `name`, `None` when no such rendition is defined
    fn rendition_url(&self, name: &str) -> Option<String>;

    /// Human readable title, used as alternative text
    fn title(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageField {
    pub url: String,
}

/// A photo with named renditions, as found in template contexts and object files.
///
/// ```json
/// {
///     "title": "Harbour at dusk",
///     "image": { "url": "/media/photos/harbour.jpg" },
///     "renditions": { "thumb": "/media/photos/cache/harbour_thumb.jpg" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub image: ImageField,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub renditions: BTreeMap<String, String>,
}

impl Photo {
    pub fn new(url: &str) -> Self {
        Self {
            image: ImageField {
                url: url.to_owned(),
            },
            title: None,
            renditions: BTreeMap::new(),
        }
    }

    pub fn with_title(self, title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..self
        }
    }

    pub fn with_rendition(mut self, name: &str, url: &str) -> Self {
        self.renditions.insert(name.to_owned(), url.to_owned());
        self
    }
}

impl Renditions for Photo {
    fn image_url(&self) -> &str {
        &self.image.url
    }

    fn rendition_url(&self, name: &str) -> Option<String> {
        self.renditions.get(name).cloned()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Where the images of a picture come from
#[derive(Clone, Copy)]
pub enum ImageSource<'a> {
    /// A path below the static URL. Sized variants follow the `name-WIDTHxHEIGHT.ext` convention.
    StaticPath(&'a str),
    /// A content object whose sized variants are looked up by rendition name
    Rendition(&'a dyn Renditions),
}

impl std::fmt::Debug for ImageSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::StaticPath(path) => f.debug_tuple("StaticPath").field(path).finish(),
            ImageSource::Rendition(object) => f
                .debug_tuple("Rendition")
                .field(&object.image_url())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_from_json() {
        let photo: Photo = serde_json::from_str(
            r#"{"image": {"url": "/media/a.jpg"}, "renditions": {"thumb": "/media/a_thumb.jpg"}}"#,
        )
        .unwrap();
        assert_eq!(photo.image_url(), "/media/a.jpg");
        assert_eq!(photo.rendition_url("thumb").as_deref(), Some("/media/a_thumb.jpg"));
        assert_eq!(photo.rendition_url("detail"), None);
        assert_eq!(photo.title(), None);
    }

    #[test]
    fn test_photo_requires_image() {
        let photo = serde_json::from_str::<Photo>(r#"{"renditions": {}}"#);
        assert!(photo.is_err());
    }

    #[test]
    fn test_photo_builder() {
        let photo = Photo::new("/media/a.jpg")
            .with_title("A")
            .with_rendition("detail", "/media/a_detail.jpg");
        assert_eq!(photo.title(), Some("A"));
        assert_eq!(
            photo.rendition_url("detail").as_deref(),
            Some("/media/a_detail.jpg")
        );
    }
}
