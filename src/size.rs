use crate::error::PictureError;
use crate::source::SourceGroup;

/// A single requested width and optional height.
///
/// Parsed from `WIDTH` or `WIDTHxHEIGHT`. Components are opaque, so named
/// sizes work too. Only the first `x` with text on both sides separates the
/// two, which keeps `max` or `xlarge` whole but reads `maxwidth` as `ma` by
/// `width`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSpec {
    pub width: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl SizeSpec {
    pub fn new(width: &str, height: Option<&str>) -> Self {
        Self {
            width: width.to_owned(),
            height: height.map(str::to_owned),
        }
    }

    /// The srcset descriptor, e.g. `640w` or `320w 240h`
    pub fn descriptor(&self) -> String {
        match &self.height {
            Some(height) => format!("{}w {}h", self.width, height),
            None => format!("{}w", self.width),
        }
    }

    /// The file name suffix used by the static naming convention, e.g. `640` or `320x240`
    pub fn suffix(&self) -> String {
        match &self.height {
            Some(height) => format!("{}x{}", self.width, height),
            None => self.width.clone(),
        }
    }
}

impl std::str::FromStr for SizeSpec {
    type Err = PictureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entry = s.trim();
        let malformed = || PictureError::MalformedSize(entry.to_owned());
        if entry.is_empty() || entry.contains(char::is_whitespace) {
            return Err(malformed());
        }
        let separator = entry
            .match_indices('x')
            .map(|(index, _)| index)
            .find(|&index| index > 0 && index + 1 < entry.len());
        match separator {
            Some(index) => {
                let (width, height) = (&entry[..index], &entry[index + 1..]);
                if height.contains('x') {
                    return Err(malformed());
                }
                Ok(Self::new(width, Some(height)))
            }
            None => Ok(Self::new(entry, None)),
        }
    }
}

/// Parse a size specification such as `640,320x240;1024`.
///
/// `;` separates source groups and `,` separates the sizes inside a group.
/// Groups come back without breakpoints, in input order.
pub fn parse_sizes(spec: &str) -> Result<Vec<SourceGroup>, PictureError> {
    let groups = spec
        .split(';')
        .map(|group| {
            group
                .split(',')
                .map(str::parse::<SizeSpec>)
                .collect::<Result<Vec<_>, _>>()
                .map(SourceGroup::new)
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "Parsed {} into {} group(s) of {} size(s)",
        spec,
        groups.len(),
        groups.iter().map(|group| group.sizes.len()).sum::<usize>()
    );
    Ok(groups)
}
