//! Mapping of utility classes to the CSS property they set.
//!
//! Two utilities conflict when they write the same property under the same
//! modifiers. Shorthand utilities (`p-4`, `gap-2`, `rounded-md`) also knock
//! out the longhands they cover, see [`covered_properties`].
//!
//! Utilities the table does not recognise return `None` and only ever
//! conflict with an identical token.

use std::borrow::Cow;

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "flow-root",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const OBJECT_FIT: &[&str] = &["contain", "cover", "fill", "none", "scale-down"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];

/// Returns the CSS property written by a utility base (no modifiers).
///
/// # Example
///
/// ```rust
/// use pagecraft_merge::property_of;
///
/// assert_eq!(property_of("text-center").as_deref(), Some("text-align"));
/// assert_eq!(property_of("text-xl").as_deref(), Some("font-size"));
/// assert_eq!(property_of("text-muted-foreground").as_deref(), Some("color"));
/// assert_eq!(property_of("[--stack-gap:1rem]").as_deref(), Some("--stack-gap"));
/// assert_eq!(property_of("card-shell"), None);
/// ```
pub fn property_of(base: &str) -> Option<Cow<'static, str>> {
    if let Some(inner) = base.strip_prefix('[').and_then(|b| b.strip_suffix(']')) {
        let (name, _) = inner.split_once(':')?;
        return (!name.is_empty()).then(|| Cow::Owned(name.to_string()));
    }

    // Negative values (`-mx-4`, `-top-2`) write the same property.
    let base = base.strip_prefix('-').unwrap_or(base);

    fixed(base)
        .or_else(|| prefixed(base))
        .map(Cow::Borrowed)
}

/// Longhand properties a shorthand overrides.
pub fn covered_properties(property: &str) -> &'static [&'static str] {
    match property {
        "padding" => &[
            "padding-inline",
            "padding-block",
            "padding-top",
            "padding-right",
            "padding-bottom",
            "padding-left",
            "padding-inline-start",
            "padding-inline-end",
        ],
        "padding-inline" => &[
            "padding-left",
            "padding-right",
            "padding-inline-start",
            "padding-inline-end",
        ],
        "padding-block" => &["padding-top", "padding-bottom"],
        "margin" => &[
            "margin-inline",
            "margin-block",
            "margin-top",
            "margin-right",
            "margin-bottom",
            "margin-left",
            "margin-inline-start",
            "margin-inline-end",
        ],
        "margin-inline" => &[
            "margin-left",
            "margin-right",
            "margin-inline-start",
            "margin-inline-end",
        ],
        "margin-block" => &["margin-top", "margin-bottom"],
        "gap" => &["column-gap", "row-gap"],
        "overflow" => &["overflow-x", "overflow-y"],
        "size" => &["width", "height"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["left", "right"],
        "inset-y" => &["top", "bottom"],
        "border-radius" => &[
            "border-radius-t",
            "border-radius-r",
            "border-radius-b",
            "border-radius-l",
            "border-radius-s",
            "border-radius-e",
            "border-radius-tl",
            "border-radius-tr",
            "border-radius-br",
            "border-radius-bl",
            "border-radius-ss",
            "border-radius-se",
            "border-radius-ee",
            "border-radius-es",
        ],
        _ => &[],
    }
}

fn fixed(base: &str) -> Option<&'static str> {
    if DISPLAY.contains(&base) {
        return Some("display");
    }
    if POSITION.contains(&base) {
        return Some("position");
    }
    let property = match base {
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => "flex-direction",
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => "flex-wrap",
        "flex-1" | "flex-auto" | "flex-initial" | "flex-none" => "flex",
        "grow" | "grow-0" | "flex-grow" | "flex-grow-0" => "flex-grow",
        "shrink" | "shrink-0" | "flex-shrink" | "flex-shrink-0" => "flex-shrink",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "italic" | "not-italic" => "font-style",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration-line",
        "truncate" | "text-ellipsis" | "text-clip" => "text-overflow",
        "sr-only" | "not-sr-only" => "sr-only",
        "border" => "border-width",
        "shadow" => "box-shadow",
        "rounded" => "border-radius",
        "transition" => "transition-property",
        _ => return None,
    };
    Some(property)
}

fn prefixed(base: &str) -> Option<&'static str> {
    // Longest prefixes first so `gap-x-` is not read as `gap-`.
    const SIMPLE: &[(&str, &str)] = &[
        ("grid-cols-", "grid-template-columns"),
        ("grid-rows-", "grid-template-rows"),
        ("grid-flow-", "grid-auto-flow"),
        ("col-span-", "grid-column"),
        ("col-start-", "grid-column-start"),
        ("col-end-", "grid-column-end"),
        ("row-span-", "grid-row"),
        ("gap-x-", "column-gap"),
        ("gap-y-", "row-gap"),
        ("gap-", "gap"),
        ("space-x-", "space-x"),
        ("space-y-", "space-y"),
        ("items-", "align-items"),
        ("justify-items-", "justify-items"),
        ("justify-self-", "justify-self"),
        ("justify-", "justify-content"),
        ("content-", "align-content"),
        ("self-", "align-self"),
        ("place-items-", "place-items"),
        ("place-content-", "place-content"),
        ("px-", "padding-inline"),
        ("py-", "padding-block"),
        ("ps-", "padding-inline-start"),
        ("pe-", "padding-inline-end"),
        ("pt-", "padding-top"),
        ("pr-", "padding-right"),
        ("pb-", "padding-bottom"),
        ("pl-", "padding-left"),
        ("p-", "padding"),
        ("mx-", "margin-inline"),
        ("my-", "margin-block"),
        ("ms-", "margin-inline-start"),
        ("me-", "margin-inline-end"),
        ("mt-", "margin-top"),
        ("mr-", "margin-right"),
        ("mb-", "margin-bottom"),
        ("ml-", "margin-left"),
        ("m-", "margin"),
        ("min-w-", "min-width"),
        ("max-w-", "max-width"),
        ("min-h-", "min-height"),
        ("max-h-", "max-height"),
        ("size-", "size"),
        ("w-", "width"),
        ("h-", "height"),
        ("leading-", "line-height"),
        ("tracking-", "letter-spacing"),
        ("line-clamp-", "line-clamp"),
        ("whitespace-", "white-space"),
        ("overflow-x-", "overflow-x"),
        ("overflow-y-", "overflow-y"),
        ("overflow-", "overflow"),
        ("inset-x-", "inset-x"),
        ("inset-y-", "inset-y"),
        ("inset-", "inset"),
        ("top-", "top"),
        ("right-", "right"),
        ("bottom-", "bottom"),
        ("left-", "left"),
        ("z-", "z-index"),
        ("opacity-", "opacity"),
        ("shadow-", "box-shadow"),
        ("aspect-", "aspect-ratio"),
        ("duration-", "transition-duration"),
        ("ease-", "transition-timing-function"),
        ("transition-", "transition-property"),
        ("cursor-", "cursor"),
        ("order-", "order"),
    ];

    if let Some(rest) = base.strip_prefix("text-") {
        return Some(text_property(rest));
    }
    if let Some(rest) = base.strip_prefix("font-") {
        return Some(font_property(rest));
    }
    if let Some(rest) = base.strip_prefix("bg-") {
        return Some(background_property(rest));
    }
    if let Some(rest) = base.strip_prefix("rounded-") {
        return Some(radius_property(rest));
    }
    if let Some(rest) = base.strip_prefix("object-") {
        return Some(if OBJECT_FIT.contains(&rest) {
            "object-fit"
        } else {
            "object-position"
        });
    }
    if let Some(rest) = base.strip_prefix("border-") {
        return Some(border_property(rest));
    }

    SIMPLE
        .iter()
        .find(|(prefix, _)| base.starts_with(prefix))
        .map(|(_, property)| *property)
}

fn text_property(rest: &str) -> &'static str {
    if FONT_SIZES.contains(&rest) {
        return "font-size";
    }
    if TEXT_ALIGN.contains(&rest) {
        return "text-align";
    }
    match rest {
        "wrap" | "nowrap" | "balance" | "pretty" => return "text-wrap",
        "ellipsis" | "clip" => return "text-overflow",
        _ => {}
    }
    if let Some(arbitrary) = arbitrary_value(rest) {
        return match split_label(arbitrary) {
            (Some("color"), _) => "color",
            (Some(_), _) => "font-size",
            (None, value) if looks_like_color(value) => "color",
            (None, _) => "font-size",
        };
    }
    "color"
}

fn font_property(rest: &str) -> &'static str {
    if FONT_WEIGHTS.contains(&rest) {
        return "font-weight";
    }
    if let Some(arbitrary) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        if arbitrary.chars().all(|c| c.is_ascii_digit()) {
            return "font-weight";
        }
    }
    "font-family"
}

fn background_property(rest: &str) -> &'static str {
    if BG_SIZES.contains(&rest) {
        return "background-size";
    }
    if BG_POSITIONS.contains(&rest) {
        return "background-position";
    }
    if let Some(arbitrary) = arbitrary_value(rest) {
        return match split_label(arbitrary) {
            (Some("image" | "url"), _) => "background-image",
            (Some("length" | "size" | "percentage"), _) => "background-size",
            (Some("position"), _) => "background-position",
            (Some(_), _) => "background-color",
            (None, value) if looks_like_image(value) => "background-image",
            (None, _) => "background-color",
        };
    }
    match rest {
        "fixed" | "local" | "scroll" => "background-attachment",
        "none" => "background-image",
        _ if rest.starts_with("gradient-") => "background-image",
        _ if rest.starts_with("clip-") => "background-clip",
        _ if rest.starts_with("origin-") => "background-origin",
        _ if rest == "repeat" || rest.starts_with("repeat-") || rest == "no-repeat" => {
            "background-repeat"
        }
        _ => "background-color",
    }
}

fn radius_property(rest: &str) -> &'static str {
    let side = rest.split('-').next().unwrap_or(rest);
    match side {
        "t" => "border-radius-t",
        "r" => "border-radius-r",
        "b" => "border-radius-b",
        "l" => "border-radius-l",
        "s" => "border-radius-s",
        "e" => "border-radius-e",
        "tl" => "border-radius-tl",
        "tr" => "border-radius-tr",
        "br" => "border-radius-br",
        "bl" => "border-radius-bl",
        "ss" => "border-radius-ss",
        "se" => "border-radius-se",
        "ee" => "border-radius-ee",
        "es" => "border-radius-es",
        _ => "border-radius",
    }
}

fn border_property(rest: &str) -> &'static str {
    if BORDER_STYLES.contains(&rest) {
        return "border-style";
    }
    if rest.chars().all(|c| c.is_ascii_digit()) {
        return "border-width";
    }
    let mut parts = rest.splitn(2, '-');
    let head = parts.next().unwrap_or_default();
    let tail = parts.next();
    match (head, tail) {
        ("x" | "y" | "t" | "r" | "b" | "l" | "s" | "e", None) => "border-width-side",
        ("x" | "y" | "t" | "r" | "b" | "l" | "s" | "e", Some(t))
            if t.chars().all(|c| c.is_ascii_digit()) =>
        {
            "border-width-side"
        }
        _ => "border-color",
    }
}

/// The inside of an arbitrary value, `[...]`.
fn arbitrary_value(rest: &str) -> Option<&str> {
    rest.strip_prefix('[').and_then(|r| r.strip_suffix(']'))
}

/// Splits a type hint such as `color:` or `length:` off an arbitrary value.
///
/// A hint is a lowercase word before the first colon; `var(--x)` and
/// `url(https://...)` carry none.
fn split_label(value: &str) -> (Option<&str>, &str) {
    match value.split_once(':') {
        Some((label, rest))
            if !label.is_empty()
                && !label.starts_with('-')
                && label.chars().all(|c| c.is_ascii_lowercase() || c == '-') =>
        {
            (Some(label), rest)
        }
        _ => (None, value),
    }
}

fn looks_like_image(value: &str) -> bool {
    value.starts_with("url(")
        || value.starts_with("image-set(")
        || value.contains("-gradient(")
}

fn looks_like_color(value: &str) -> bool {
    value.starts_with('#')
        || value.starts_with("rgb")
        || value.starts_with("hsl")
        || value.starts_with("oklch")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(base: &str) -> Option<String> {
        property_of(base).map(|p| p.into_owned())
    }

    #[test]
    fn test_text_utilities_split_by_property() {
        assert_eq!(prop("text-sm").as_deref(), Some("font-size"));
        assert_eq!(prop("text-justify").as_deref(), Some("text-align"));
        assert_eq!(prop("text-foreground").as_deref(), Some("color"));
        assert_eq!(
            prop("text-[var(--heading-size)]").as_deref(),
            Some("font-size")
        );
        assert_eq!(prop("text-[#ff0000]").as_deref(), Some("color"));
    }

    #[test]
    fn test_labelled_text_values_follow_the_label() {
        assert_eq!(prop("text-[color:var(--brand)]").as_deref(), Some("color"));
        assert_eq!(prop("text-[length:var(--fluid)]").as_deref(), Some("font-size"));
        assert_eq!(prop("text-[rgb(0_0_0)]").as_deref(), Some("color"));
        assert_eq!(prop("text-[2.5rem]").as_deref(), Some("font-size"));
    }

    #[test]
    fn test_background_images_are_not_colors() {
        assert_eq!(prop("bg-[url(/hero.png)]").as_deref(), Some("background-image"));
        assert_eq!(
            prop("bg-[image:var(--hero-image)]").as_deref(),
            Some("background-image")
        );
        assert_eq!(
            prop("bg-[linear-gradient(to_right,red,blue)]").as_deref(),
            Some("background-image")
        );
        assert_eq!(
            prop("bg-[radial-gradient(circle,white,black)]").as_deref(),
            Some("background-image")
        );
        assert_eq!(prop("bg-[length:200px_100px]").as_deref(), Some("background-size"));
        assert_eq!(prop("bg-[position:center_top]").as_deref(), Some("background-position"));
        assert_eq!(prop("bg-[color:var(--brand)]").as_deref(), Some("background-color"));
        assert_eq!(prop("bg-[#0a0a0a]").as_deref(), Some("background-color"));
        assert_eq!(prop("bg-[var(--surface)]").as_deref(), Some("background-color"));
    }

    #[test]
    fn test_font_family_and_weight() {
        assert_eq!(prop("font-heading").as_deref(), Some("font-family"));
        assert_eq!(prop("font-body").as_deref(), Some("font-family"));
        assert_eq!(prop("font-semibold").as_deref(), Some("font-weight"));
        assert_eq!(prop("font-[650]").as_deref(), Some("font-weight"));
    }

    #[test]
    fn test_spacing_prefixes_do_not_shadow_each_other() {
        assert_eq!(prop("px-4").as_deref(), Some("padding-inline"));
        assert_eq!(prop("p-4").as_deref(), Some("padding"));
        assert_eq!(prop("gap-x-2").as_deref(), Some("column-gap"));
        assert_eq!(prop("gap-[var(--grid-gap)]").as_deref(), Some("gap"));
        assert_eq!(prop("-mx-4").as_deref(), Some("margin-inline"));
        assert_eq!(prop("max-w-4xl").as_deref(), Some("max-width"));
    }

    #[test]
    fn test_display_and_flex() {
        assert_eq!(prop("flex").as_deref(), Some("display"));
        assert_eq!(prop("grid").as_deref(), Some("display"));
        assert_eq!(prop("flex-col").as_deref(), Some("flex-direction"));
        assert_eq!(prop("flex-1").as_deref(), Some("flex"));
        assert_eq!(prop("grid-cols-3").as_deref(), Some("grid-template-columns"));
    }

    #[test]
    fn test_background_and_border() {
        assert_eq!(prop("bg-primary").as_deref(), Some("background-color"));
        assert_eq!(prop("bg-cover").as_deref(), Some("background-size"));
        assert_eq!(prop("border-2").as_deref(), Some("border-width"));
        assert_eq!(prop("border-dashed").as_deref(), Some("border-style"));
        assert_eq!(prop("border-muted").as_deref(), Some("border-color"));
        assert_eq!(prop("border-t").as_deref(), Some("border-width-side"));
    }

    #[test]
    fn test_radius_and_object() {
        assert_eq!(prop("rounded-md").as_deref(), Some("border-radius"));
        assert_eq!(prop("rounded-t-lg").as_deref(), Some("border-radius-t"));
        assert_eq!(prop("object-scale-down").as_deref(), Some("object-fit"));
        assert_eq!(prop("object-center").as_deref(), Some("object-position"));
    }

    #[test]
    fn test_unknown_utilities() {
        assert_eq!(prop("card-shell"), None);
        assert_eq!(prop("[not-a-property]"), None);
    }

    #[test]
    fn test_shorthands_cover_longhands() {
        assert!(covered_properties("padding").contains(&"padding-inline"));
        assert!(covered_properties("gap").contains(&"row-gap"));
        assert!(covered_properties("color").is_empty());
    }
}
