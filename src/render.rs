//! The fixed `<picture>` template.
//!
//! Sources carry `srcset` (or `data-srcset` when lazy) and a `media` query
//! when bound to a breakpoint. Pictures without any breakpoint collapse into
//! a single `<source>` listing every size. Lazy pictures follow the
//! lazysizes conventions: a placeholder `src`, the real URL in `data-src`
//! and the `lazyload` class on the `<img>`.

use itertools::Itertools;
use maud::{html, Markup};

use crate::constants::{LAZY_CLASS, LAZY_PLACEHOLDER};
use crate::picture::PictureDescriptor;
use crate::source::srcset;

/// (media, srcset) for every `<source>` element, in document order
fn sources(picture: &PictureDescriptor) -> Vec<(Option<String>, String)> {
    if picture.has_breakpoints() {
        picture
            .sources
            .iter()
            .map(|group| (group.media(), group.srcset()))
            .collect()
    } else {
        vec![(None, srcset(&picture.srcsets))]
    }
}

fn img_class(picture: &PictureDescriptor) -> Option<String> {
    let lazy_class = picture.lazy.then_some(LAZY_CLASS);
    let classes = lazy_class
        .into_iter()
        .chain(picture.classes.iter().map(String::as_str))
        .join(" ");
    (!classes.is_empty()).then_some(classes)
}

pub fn picture_markup(picture: &PictureDescriptor) -> Markup {
    let class = img_class(picture);
    html! {
        picture {
            @for (media, candidates) in sources(picture) {
                @if picture.lazy {
                    source media=[media] data-srcset=(candidates);
                } @else {
                    source media=[media] srcset=(candidates);
                }
            }
            @if picture.lazy {
                img src=(LAZY_PLACEHOLDER) data-src=(picture.canonical_url) alt=(picture.alt()) class=[class.as_deref()];
            } @else {
                img src=(picture.canonical_url) alt=(picture.alt()) class=[class.as_deref()];
            }
        }
    }
}

/// Render a picture to an HTML fragment
pub fn render_picture(picture: &PictureDescriptor) -> String {
    picture_markup(picture).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::{build_picture, PictureOptions};
    use crate::rendition::{ImageSource, Photo};
    use crate::settings::Settings;

    fn static_picture(sizes: &str, options: PictureOptions) -> PictureDescriptor {
        build_picture(
            ImageSource::StaticPath("images/static.png"),
            sizes,
            &options,
            &Settings::new("/"),
        )
        .unwrap()
    }

    #[test]
    fn test_render_static_non_lazy() {
        let html = render_picture(&static_picture("640,320x240", PictureOptions::default()));
        assert_eq!(
            html,
            concat!(
                r#"<picture>"#,
                r#"<source srcset="/images/static-640.png 640w, /images/static-320x240.png 320w 240h">"#,
                r#"<img src="/images/static.png" alt="">"#,
                r#"</picture>"#
            )
        );
    }

    #[test]
    fn test_render_static_lazy() {
        let options = PictureOptions {
            lazy: true,
            classes: Some("hero".to_owned()),
            ..PictureOptions::default()
        };
        let html = render_picture(&static_picture("640", options));
        assert!(html.contains(r#"<source data-srcset="/images/static-640.png 640w">"#));
        assert!(!html.contains(" srcset="));
        assert!(html.contains(r#"data-src="/images/static.png""#));
        assert!(html.contains(&format!(r#"src="{}""#, LAZY_PLACEHOLDER)));
        assert!(html.contains(r#"class="lazyload hero""#));
    }

    #[test]
    fn test_render_breakpoints() {
        let options = PictureOptions {
            breakpoints: Some("1024".to_owned()),
            ..PictureOptions::default()
        };
        let html = render_picture(&static_picture("1280;640,320x240", options));
        assert_eq!(
            html,
            concat!(
                r#"<picture>"#,
                r#"<source media="(min-width: 1024px)" srcset="/images/static-1280.png 1280w">"#,
                r#"<source srcset="/images/static-640.png 640w, /images/static-320x240.png 320w 240h">"#,
                r#"<img src="/images/static.png" alt="">"#,
                r#"</picture>"#
            )
        );
    }

    #[test]
    fn test_render_groups_collapse_without_breakpoints() {
        let html = render_picture(&static_picture("640;320", PictureOptions::default()));
        assert_eq!(html.matches("<source").count(), 1);
        assert!(html.contains(r#"srcset="/images/static-640.png 640w, /images/static-320.png 320w""#));
    }

    #[test]
    fn test_render_rendition_title_and_escaping() {
        let photo = Photo::new("/media/a.jpg")
            .with_title("Fish & \"Chips\"")
            .with_rendition("thumb", "/media/a_thumb.jpg");
        let picture = build_picture(
            ImageSource::Rendition(&photo),
            "150x150",
            &PictureOptions {
                size_names: Some("thumb".to_owned()),
                classes: Some("rounded".to_owned()),
                ..PictureOptions::default()
            },
            &Settings::default(),
        )
        .unwrap();
        let html = render_picture(&picture);
        assert!(html.contains(r#"srcset="/media/a_thumb.jpg 150w 150h""#));
        assert!(html.contains(r#"alt="Fish &amp; &quot;Chips&quot;""#));
        assert!(html.contains(r#"class="rounded""#));
    }
}
