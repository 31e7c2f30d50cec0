use crate::error::PictureError;
use crate::rendition::ImageSource;
use crate::resolver::resolve;
use crate::settings::Settings;
use crate::size::parse_sizes;
use crate::source::{bind_breakpoints, ResolvedSize, SourceGroup};

/// The optional arguments of a picture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PictureOptions {
    /// Comma separated rendition names, one per size. Only used with rendition objects.
    pub size_names: Option<String>,
    /// Comma separated minimum viewport widths, one per source group
    pub breakpoints: Option<String>,
    pub lazy: bool,
    /// Whitespace separated CSS classes for the `img` element
    pub classes: Option<String>,
}

/// What the picture knows about the content object it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub title: Option<String>,
}

/// Everything needed to render a `<picture>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureDescriptor {
    pub canonical_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub object: Option<ObjectSummary>,
    /// Sizes grouped by breakpoint, in the order they were specified
    pub sources: Vec<SourceGroup<ResolvedSize>>,
    /// Every size across all groups, in the order they were specified
    pub srcsets: Vec<ResolvedSize>,
    pub lazy: bool,
    pub classes: Vec<String>,
}

impl PictureDescriptor {
    /// True when at least one source group is bound to a breakpoint
    pub fn has_breakpoints(&self) -> bool {
        self.sources.iter().any(|group| group.breakpoint.is_some())
    }

    pub fn alt(&self) -> &str {
        self.object
            .as_ref()
            .and_then(|object| object.title.as_deref())
            .unwrap_or_default()
    }
}

/// Parse `sizes`, resolve every size against `source` and assemble the descriptor
pub fn build_picture(
    source: ImageSource,
    sizes: &str,
    options: &PictureOptions,
    settings: &Settings,
) -> Result<PictureDescriptor, PictureError> {
    let groups = bind_breakpoints(parse_sizes(sizes)?, options.breakpoints.as_deref());
    let resolution = resolve(
        source,
        groups,
        options.size_names.as_deref(),
        &settings.static_url,
    )?;

    let object = match source {
        ImageSource::StaticPath(_) => None,
        ImageSource::Rendition(object) => Some(ObjectSummary {
            image_url: object.image_url().to_owned(),
            title: object.title().map(str::to_owned),
        }),
    };

    let srcsets = resolution
        .groups
        .iter()
        .flat_map(|group| group.sizes.iter().cloned())
        .collect();

    let classes = options
        .classes
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_owned)
        .collect();

    Ok(PictureDescriptor {
        canonical_url: resolution.canonical_url,
        object,
        sources: resolution.groups,
        srcsets,
        lazy: options.lazy,
        classes,
    })
}
