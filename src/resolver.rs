use crate::error::PictureError;
use crate::rendition::{ImageSource, Renditions};
use crate::size::SizeSpec;
use crate::source::{ResolvedSize, SourceGroup};

/// The canonical image URL plus every group with its sizes resolved to URLs
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub canonical_url: String,
    pub groups: Vec<SourceGroup<ResolvedSize>>,
}

/// Pair every size in `groups` with a URL.
///
/// Static paths are joined to `static_url` and sized by file name convention.
/// Rendition objects take one name from `size_names` per size, in order
/// across all groups, so both counts must match.
pub fn resolve(
    source: ImageSource,
    groups: Vec<SourceGroup>,
    size_names: Option<&str>,
    static_url: &str,
) -> Result<Resolution, PictureError> {
    match source {
        ImageSource::StaticPath(path) => resolve_static(path, groups, static_url),
        ImageSource::Rendition(object) => resolve_renditions(object, groups, size_names),
    }
}

fn resolve_static(
    path: &str,
    groups: Vec<SourceGroup>,
    static_url: &str,
) -> Result<Resolution, PictureError> {
    let canonical_url = [static_url, path].join("");
    // Only the last path segment carries the extension
    let file_start = canonical_url.rfind('/').map_or(0, |slash| slash + 1);
    let dot = canonical_url[file_start..]
        .rfind('.')
        .map(|dot| file_start + dot)
        .ok_or_else(|| PictureError::MissingExtension(canonical_url.clone()))?;
    let (name, extension) = (&canonical_url[..dot], &canonical_url[dot + 1..]);

    let groups = map_sizes(groups, |size| {
        let url = format!("{}-{}.{}", name, size.suffix(), extension);
        Ok(ResolvedSize::new(size, url))
    })?;

    debug!("Resolved static image {}", &canonical_url);
    Ok(Resolution {
        canonical_url,
        groups,
    })
}

fn resolve_renditions(
    object: &dyn Renditions,
    groups: Vec<SourceGroup>,
    size_names: Option<&str>,
) -> Result<Resolution, PictureError> {
    let size_names: Vec<&str> = match size_names {
        Some(size_names) if !size_names.trim().is_empty() => {
            size_names.split(',').map(str::trim).collect()
        }
        _ => Vec::new(),
    };
    let size_count: usize = groups.iter().map(|group| group.sizes.len()).sum();
    if size_names.len() != size_count {
        return Err(PictureError::SizeNameMismatch {
            names: size_names.len(),
            sizes: size_count,
        });
    }

    let mut size_names = size_names.into_iter();
    let named_groups: Vec<SourceGroup<(SizeSpec, &str)>> = groups
        .into_iter()
        .map(|group| SourceGroup {
            breakpoint: group.breakpoint,
            sizes: group.sizes.into_iter().zip(size_names.by_ref()).collect(),
        })
        .collect();

    let groups = map_sizes(named_groups, |(size, name)| {
        let url = object
            .rendition_url(name)
            .ok_or_else(|| PictureError::UndefinedSize(name.to_owned()))?;
        Ok(ResolvedSize::new(size, url))
    })?;

    let canonical_url = object.image_url().to_owned();
    debug!("Resolved renditions of {}", &canonical_url);
    Ok(Resolution {
        canonical_url,
        groups,
    })
}

/// Resolve sizes group by group, keeping order and breakpoints
fn map_sizes<S, F>(
    groups: Vec<SourceGroup<S>>,
    mut resolve_size: F,
) -> Result<Vec<SourceGroup<ResolvedSize>>, PictureError>
where
    F: FnMut(S) -> Result<ResolvedSize, PictureError>,
{
    groups
        .into_iter()
        .map(|group| {
            let sizes = group
                .sizes
                .into_iter()
                .map(&mut resolve_size)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SourceGroup {
                breakpoint: group.breakpoint,
                sizes,
            })
        })
        .collect()
}
