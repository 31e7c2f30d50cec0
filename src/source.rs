use itertools::Itertools;

use crate::size::SizeSpec;

/// A set of sizes rendered as one `<source>` element.
///
/// Parsed groups hold [`SizeSpec`]s, resolved groups hold [`ResolvedSize`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceGroup<S = SizeSpec> {
    /// Minimum viewport width in pixels, `None` for an unconditional source
    pub breakpoint: Option<String>,
    pub sizes: Vec<S>,
}

impl<S> SourceGroup<S> {
    pub fn new(sizes: Vec<S>) -> Self {
        Self {
            breakpoint: None,
            sizes,
        }
    }

    pub fn with_breakpoint(self, breakpoint: Option<String>) -> Self {
        Self { breakpoint, ..self }
    }

    /// The `media` attribute for this group, if it is bound to a breakpoint
    pub fn media(&self) -> Option<String> {
        self.breakpoint
            .as_ref()
            .map(|breakpoint| format!("(min-width: {}px)", breakpoint))
    }
}

impl SourceGroup<ResolvedSize> {
    pub fn srcset(&self) -> String {
        srcset(&self.sizes)
    }
}

/// A size paired with the URL of the image rendered at that size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSize {
    #[serde(flatten)]
    pub size: SizeSpec,
    pub url: String,
}

impl ResolvedSize {
    pub fn new(size: SizeSpec, url: String) -> Self {
        Self { size, url }
    }

    /// A single srcset candidate, e.g. `/static/a-640.png 640w`
    pub fn candidate(&self) -> String {
        format!("{} {}", self.url, self.size.descriptor())
    }
}

/// Joins resolved sizes into a srcset attribute value
pub fn srcset(sizes: &[ResolvedSize]) -> String {
    sizes.iter().map(ResolvedSize::candidate).join(", ")
}

/// Assign a comma separated list of breakpoints to groups by position.
///
/// Groups past the end of the list, or matched with an empty entry, keep no
/// breakpoint.
pub fn bind_breakpoints<S>(
    groups: Vec<SourceGroup<S>>,
    breakpoints: Option<&str>,
) -> Vec<SourceGroup<S>> {
    let breakpoints: Vec<Option<String>> = breakpoints
        .map(|breakpoints| {
            breakpoints
                .split(',')
                .map(str::trim)
                .map(|breakpoint| (!breakpoint.is_empty()).then(|| breakpoint.to_owned()))
                .collect()
        })
        .unwrap_or_default();

    if breakpoints.len() > groups.len() {
        warn!(
            "{} breakpoints given for {} source groups, ignoring {:?}",
            breakpoints.len(),
            groups.len(),
            &breakpoints[groups.len()..]
        );
    }

    let mut breakpoints = breakpoints.into_iter();
    groups
        .into_iter()
        .map(|group| {
            let breakpoint = breakpoints.next().flatten();
            group.with_breakpoint(breakpoint)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::parse_sizes;

    #[test]
    fn test_bind_breakpoints() {
        let groups = bind_breakpoints(
            parse_sizes("640,320x240;1024").unwrap(),
            Some("640,1024"),
        );
        assert_eq!(groups[0].breakpoint.as_deref(), Some("640"));
        assert_eq!(groups[1].breakpoint.as_deref(), Some("1024"));
    }

    #[test]
    fn test_bind_fewer_breakpoints_than_groups() {
        let groups = bind_breakpoints(parse_sizes("640;1024;2048").unwrap(), Some("768"));
        assert_eq!(groups[0].breakpoint.as_deref(), Some("768"));
        assert_eq!(groups[1].breakpoint, None);
        assert_eq!(groups[2].breakpoint, None);
    }

    #[test]
    fn test_bind_no_breakpoints() {
        let groups = bind_breakpoints(parse_sizes("640;1024").unwrap(), None);
        assert!(groups.iter().all(|group| group.breakpoint.is_none()));

        let groups = bind_breakpoints(parse_sizes("640;1024").unwrap(), Some(""));
        assert!(groups.iter().all(|group| group.breakpoint.is_none()));
    }

    #[test]
    fn test_bind_empty_entry_keeps_position() {
        let groups = bind_breakpoints(parse_sizes("640;1024;2048").unwrap(), Some(",1024,2048"));
        assert_eq!(groups[0].breakpoint, None);
        assert_eq!(groups[1].breakpoint.as_deref(), Some("1024"));
        assert_eq!(groups[2].breakpoint.as_deref(), Some("2048"));
    }

    #[test]
    fn test_bind_surplus_breakpoints_are_ignored() {
        let groups = bind_breakpoints(parse_sizes("640").unwrap(), Some("768, 1024"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].breakpoint.as_deref(), Some("768"));
    }

    #[test]
    fn test_media() {
        let group: SourceGroup = SourceGroup::new(vec![]).with_breakpoint(Some("768".to_owned()));
        assert_eq!(group.media().as_deref(), Some("(min-width: 768px)"));
        let group: SourceGroup = SourceGroup::new(vec![]);
        assert_eq!(group.media(), None);
    }

    #[test]
    fn test_srcset() {
        let sizes = vec![
            ResolvedSize::new(SizeSpec::new("640", None), "/a-640.png".to_owned()),
            ResolvedSize::new(SizeSpec::new("320", Some("240")), "/a-320x240.png".to_owned()),
        ];
        assert_eq!(srcset(&sizes), "/a-640.png 640w, /a-320x240.png 320w 240h");
    }
}
