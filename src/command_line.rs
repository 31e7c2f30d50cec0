use structopt::StructOpt;

use std::path::PathBuf;

use crate::constants::DEFAULT_STATIC_URL;
use crate::picture::PictureOptions;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "responsive-picture",
    about = "Render responsive <picture> markup from compact size specifications"
)]
pub struct Options {
    /// Prefix joined to static image paths
    #[structopt(long = "static-url", env = "STATIC_URL", default_value = DEFAULT_STATIC_URL)]
    pub static_url: String,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Render a single picture
    Picture(PictureArgs),

    /// Render every picture tag in a template file
    Render {
        /// The template to render
        #[structopt(parse(from_os_str))]
        template: PathBuf,

        /// A JSON file providing the template variables
        #[structopt(long = "context", parse(from_os_str))]
        context: Option<PathBuf>,
    },
}

#[derive(Debug, StructOpt)]
pub struct PictureArgs {
    /// The image path below the static URL. Ignored when --object is given.
    #[structopt(required_unless = "object")]
    pub source: Option<String>,

    /// Sizes to render, e.g. "640,320x240;1024". `;` separates source groups.
    #[structopt(short = "s", long = "sizes")]
    pub sizes: String,

    /// A JSON file describing a photo and its named renditions
    #[structopt(short = "o", long = "object", parse(from_os_str))]
    pub object: Option<PathBuf>,

    /// Comma separated rendition names, one per size
    #[structopt(short = "n", long = "size-names")]
    pub size_names: Option<String>,

    /// Comma separated minimum viewport widths, one per source group
    #[structopt(short = "b", long = "breakpoints")]
    pub breakpoints: Option<String>,

    /// Emit lazy loading markup
    #[structopt(short = "l", long = "lazy")]
    pub lazy: bool,

    /// CSS classes for the img element
    #[structopt(short = "c", long = "classes")]
    pub classes: Option<String>,

    /// Print the picture as JSON instead of HTML
    #[structopt(long = "json")]
    pub json: bool,
}

impl PictureArgs {
    pub fn options(&self) -> PictureOptions {
        PictureOptions {
            size_names: self.size_names.clone(),
            breakpoints: self.breakpoints.clone(),
            lazy: self.lazy,
            classes: self.classes.clone(),
        }
    }
}
