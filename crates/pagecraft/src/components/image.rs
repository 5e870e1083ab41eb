//! Image primitive.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, MissingFieldError};
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::{resolve, ComponentStyleSpec, ConfigurationError, StyleProps};

use super::Render;

token_enum! {
    pub enum ObjectFit ("object fit") {
        Cover => "cover",
        Contain => "contain",
        Fill => "fill",
        ScaleDown => "scale-down",
        None => "none",
    }
    default Cover
}

token_enum! {
    pub enum Rounded ("corner radius") {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Full => "full",
    }
    default Md
}

token_enum! {
    pub enum Loading ("loading mode") {
        Lazy => "lazy",
        Eager => "eager",
    }
    default Lazy
}

token_enum! {
    pub enum FetchPriority ("fetch priority") {
        High => "high",
        Low => "low",
        Auto => "auto",
    }
    default Auto
}

pub static IMAGE_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "Image",
    base: &[Class("block")],
    axes: &[
        axis!("objectFit" default "cover" {
            "cover" => [Class("object-cover")],
            "contain" => [Class("object-contain")],
            "fill" => [Class("object-fill")],
            "scale-down" => [Class("object-scale-down")],
            "none" => [Class("object-none")],
        }),
        axis!("rounded" default "md" {
            "none" => [Class("rounded-none")],
            "sm" => [Class("rounded-sm")],
            "md" => [Class("rounded-md")],
            "lg" => [Class("rounded-lg")],
            "xl" => [Class("rounded-xl")],
            "full" => [Class("rounded-full")],
        }),
    ],
};

/// A `w/h` aspect ratio such as `16/9`. Both sides are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ratio {
    width: u32,
    height: u32,
}

impl Ratio {
    pub const WIDESCREEN: Ratio = Ratio { width: 16, height: 9 };
    pub const STANDARD: Ratio = Ratio { width: 4, height: 3 };

    pub fn new(width: u32, height: u32) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::Malformed {
                kind: "ratio",
                value: format!("{width}/{height}"),
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Height for `width` at this ratio, rounded to the nearest pixel.
    /// `None` when the result does not fit in a `u32`.
    pub fn height_for(&self, width: u32) -> Option<u32> {
        let (w, h) = (u64::from(self.width), u64::from(self.height));
        let exact = (u64::from(width) * h + w / 2) / w;
        u32::try_from(exact).ok()
    }
}

impl std::str::FromStr for Ratio {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigurationError::Malformed {
            kind: "ratio",
            value: s.to_string(),
        };
        let (w, h) = s.split_once('/').ok_or_else(malformed)?;
        let width: u32 = w.trim().parse().map_err(|_| malformed())?;
        let height: u32 = h.trim().parse().map_err(|_| malformed())?;
        Ratio::new(width, height).map_err(|_| malformed())
    }
}

impl TryFrom<String> for Ratio {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ratio> for String {
    fn from(ratio: Ratio) -> Self {
        format!("{}/{}", ratio.width, ratio.height)
    }
}

/// Image data as it appears in block props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageSource {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    pub width: u32,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub ratio: Option<Ratio>,
}

/// A responsive `<img>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub source: ImageSource,
    pub sizes: Option<String>,
    pub loading: Loading,
    pub fetch_priority: FetchPriority,
    pub object_fit: ObjectFit,
    pub rounded: Rounded,
    pub class: Option<String>,
}

impl Image {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            sizes: None,
            loading: Loading::default(),
            fetch_priority: FetchPriority::default(),
            object_fit: ObjectFit::default(),
            rounded: Rounded::default(),
            class: None,
        }
    }

    /// Uses `ratio` when the source gives neither a height nor a ratio.
    pub fn fallback_ratio(mut self, ratio: Ratio) -> Self {
        if self.source.ratio.is_none() {
            self.source.ratio = Some(ratio);
        }
        self
    }

    pub fn loading(mut self, loading: Loading) -> Self {
        self.loading = loading;
        self
    }

    pub fn fetch_priority(mut self, priority: FetchPriority) -> Self {
        self.fetch_priority = priority;
        self
    }

    pub fn rounded(mut self, rounded: Rounded) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// The explicit height, else the one implied by the ratio.
    pub fn computed_height(&self) -> Option<u32> {
        self.source.height.or_else(|| {
            self.source
                .ratio
                .and_then(|ratio| ratio.height_for(self.source.width))
        })
    }
}

impl Render for Image {
    fn render(&self) -> Result<Node, Error> {
        let alt = self
            .source
            .alt
            .as_deref()
            .ok_or(MissingFieldError::new("Image", "alt"))?;

        let height = self.computed_height();
        if height.is_none() {
            warn!(
                src = %self.source.src,
                "image has neither height nor ratio; layout will shift when it loads"
            );
        }

        let props = StyleProps::new()
            .with("objectFit", self.object_fit.as_str())
            .with("rounded", self.rounded.as_str());
        let style = resolve(&IMAGE_STYLE, &props, self.class.as_deref())?;

        Ok(Element::new("img")
            .styled(&style)
            .attr("src", self.source.src.as_str())
            .attr("alt", alt)
            .attr("width", self.source.width.to_string())
            .attr_opt("height", height.map(|h| h.to_string()))
            .attr_opt("sizes", self.sizes.as_deref())
            .attr("loading", self.loading.as_str())
            .attr("fetchpriority", self.fetch_priority.as_str())
            .attr("decoding", "async")
            .into())
    }
}
