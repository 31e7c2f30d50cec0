#![warn(clippy::all, clippy::pedantic)]
#[macro_use]
extern crate log;

use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::Env;
use serde_json::Value;
use structopt::StructOpt;

use responsive_picture::command_line::{Command, Options};
use responsive_picture::constants::LOG_ENV;
use responsive_picture::{
    build_picture, render_picture, render_template, ImageSource, Photo, Settings,
};

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.to_string_lossy()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} as JSON", path.to_string_lossy()))
}

///
/// Renders responsive `<picture>` markup, either for a single image or for
/// every `{% picture %}` tag in a template, and prints it to stdout.
///
fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "info")).init();

    let options = Options::from_args();
    let settings = Settings::new(&options.static_url);
    debug!("Using static URL {}", &settings.static_url);

    match &options.command {
        Command::Picture(args) => {
            let photo: Option<Photo> = args.object.as_deref().map(read_json::<Photo>).transpose()?;
            let image_source = match (&photo, &args.source) {
                (Some(photo), _) => ImageSource::Rendition(photo),
                (None, Some(path)) => ImageSource::StaticPath(path),
                (None, None) => anyhow::bail!("Either an image path or --object is required"),
            };

            let picture = build_picture(image_source, &args.sizes, &args.options(), &settings)
                .with_context(|| format!("Failed to render picture for {:?}", image_source))?;
            info!(
                "Rendered {} with {} size(s)",
                &picture.canonical_url,
                picture.srcsets.len()
            );
            if args.json {
                println!("{}", serde_json::to_string_pretty(&picture)?);
            } else {
                println!("{}", render_picture(&picture));
            }
        }
        Command::Render { template, context } => {
            let contents = read_to_string(template)
                .with_context(|| format!("Failed to read {}", template.to_string_lossy()))?;
            let context: Value = match context {
                Some(path) => read_json(path)?,
                None => Value::Object(serde_json::Map::new()),
            };
            let html = render_template(&contents, &context, &settings)
                .with_context(|| format!("Failed to render {}", template.to_string_lossy()))?;
            print!("{}", html);
        }
    }
    Ok(())
}
