//! Target aspect ratios

use std::fmt;
use std::str::FromStr;

use crate::config::ratio_registry;
use crate::errors::{WallcropError, WallcropResult};

/// A target width:height ratio
///
/// Not reduced to lowest terms: `1440x2560` keeps its components so the
/// label used as a sidecar key stays the one users know. Comparisons against
/// image dimensions are done by cross-multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// Create an aspect ratio, rejecting zero components
    pub fn new(width: u32, height: u32) -> WallcropResult<Self> {
        if width == 0 || height == 0 {
            return Err(WallcropError::InvalidAspectRatio(format!("{}x{}", width, height)));
        }
        Ok(AspectRatio { width, height })
    }

    /// Look up a ratio by its configured name (`vertical`, `hd`, ...)
    pub fn named(name: &str) -> Option<Self> {
        ratio_registry::lookup(name)
    }

    /// Sidecar key for this ratio, e.g. `1440x2560`
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = WallcropError;

    /// Accepts a registry name, `WxH` or `W:H`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(ratio) = AspectRatio::named(s) {
            return Ok(ratio);
        }

        let (w, h) = s
            .split_once(|c| c == 'x' || c == ':')
            .ok_or_else(|| {
                let names: Vec<String> = ratio_registry::all().into_iter().map(|(name, _)| name).collect();
                WallcropError::InvalidAspectRatio(format!("{} (expected WxH, W:H or one of {})", s, names.join(", ")))
            })?;

        let width = w.trim().parse::<u32>()
            .map_err(|_| WallcropError::InvalidAspectRatio(s.to_string()))?;
        let height = h.trim().parse::<u32>()
            .map_err(|_| WallcropError::InvalidAspectRatio(s.to_string()))?;

        AspectRatio::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_pairs() {
        assert_eq!("vertical".parse::<AspectRatio>().unwrap(), AspectRatio::new(1440, 2560).unwrap());
        assert_eq!("16:9".parse::<AspectRatio>().unwrap(), AspectRatio::new(16, 9).unwrap());
        assert_eq!("3440x1440".parse::<AspectRatio>().unwrap(), AspectRatio::new(3440, 1440).unwrap());
    }

    #[test]
    fn rejects_degenerate_ratios() {
        assert!("0x10".parse::<AspectRatio>().is_err());
        assert!("widescreen".parse::<AspectRatio>().is_err());
        assert!("16/9".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn unknown_name_lists_registered_names() {
        let err = "widescreen".parse::<AspectRatio>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("widescreen"));
        assert!(message.contains("vertical"));
        assert!(message.contains("ultrawide"));
    }

    #[test]
    fn label_keeps_unreduced_components() {
        assert_eq!(AspectRatio::new(2256, 1504).unwrap().label(), "2256x1504");
    }
}
