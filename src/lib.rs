#![warn(clippy::all)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod command_line;
pub mod constants;
pub mod error;
pub mod picture;
pub mod render;
pub mod rendition;
pub mod resolver;
pub mod settings;
pub mod size;
pub mod source;
pub mod tag;

pub use crate::error::PictureError;
pub use crate::picture::{build_picture, PictureDescriptor, PictureOptions};
pub use crate::render::render_picture;
pub use crate::rendition::{ImageSource, Photo, Renditions};
pub use crate::settings::Settings;
pub use crate::tag::render_template;

/// Build and render a picture in one go
pub fn picture(
    source: ImageSource,
    sizes: &str,
    options: &PictureOptions,
    settings: &Settings,
) -> Result<String, PictureError> {
    let picture = build_picture(source, sizes, options, settings)?;
    info!(
        "Rendering {} with {} size(s)",
        &picture.canonical_url,
        picture.srcsets.len()
    );
    Ok(render_picture(&picture))
}
