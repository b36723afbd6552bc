//! The built-in design system catalog.

use super::definition::CatalogDefinition;
use super::types::{BorderRadiusToken, ColorToken, ShadowToken, TypographyScale, TypographyToken};

/// (name, alias, value, usage)
const COLORS: &[(&str, &str, &str, Option<&str>)] = &[
    // Neutrals
    ("neutral-white", "White", "#FFFFFF", Some("backgrounds")),
    ("neutral-charcoal", "Charcoal", "#555555", Some("headlines, body text, labels")),
    // Brand
    ("olivia-blue", "Olivia Blue", "#25C9D0", Some("primary accent")),
    ("olivia-blue-dark", "Olivia Blue Dark", "#0BB4BA", Some("button hover, focus")),
    ("olivia-blue-t600", "Olivia Blue T600", "#BDE6E8", Some("disabled states")),
    ("olivia-blue-t700", "Olivia Blue T700", "#CCF4F3", Some("chat borders")),
    ("olivia-blue-t900", "Olivia Blue T900", "#E5FCFB", Some("background tint, calendar picker")),
    ("olivia-blue-t950", "Olivia Blue T950", "#F7FFFF", Some("lightest background tint, chat backgrounds")),
    ("midnight-teal", "Midnight Teal", "#395E66", Some("scheduling and events")),
    // Greys
    ("grey-earl", "Earl Grey (Light Grey)", "#A9A9A9", Some("secondary text, icons")),
    ("grey-steel", "Steel Grey (Darkest Border)", "#DADCE0", Some("darkest borders")),
    ("grey-glitter", "Glitter Grey (Divider)", "#EDEDED", Some("dividers, candidate response borders")),
    ("grey-disco", "Disco Grey (Chat Border)", "#F2F2F2", Some("chat borders")),
    ("grey-fog", "Fog Grey (Grayfield 1)", "#F8F8F8", Some("background, candidate response fields")),
    ("grey-mist", "Mist Grey (Grayfield 2)", "#FCFCFC", Some("lightest grey background")),
    // Status
    ("danger-red", "Danger Red", "#E52D2D", Some("warnings, destructive actions")),
    ("danger-red-dark", "Danger Red Dark", "#BF1818", None),
    ("danger-red-t300", "Danger Red T300", "#FAC4C4", None),
    ("danger-red-t900", "Danger Red T900", "#FDEDED", None),
    ("caution-yellow", "Caution Yellow", "#F9BC4F", Some("caution, missing information")),
    ("caution-yellow-dark", "Caution Yellow Dark", "#E08F00", None),
    ("caution-yellow-t300", "Caution Yellow T300", "#FBD288", None),
    ("caution-yellow-t900", "Caution Yellow T900", "#FEF6E7", None),
    ("success-green", "Go Green", "#39D279", Some("success states")),
    ("success-green-dark", "Go Green Dark", "#27AA5D", None),
    ("success-green-t300", "Go Green T300", "#B4EECC", None),
    ("success-green-t900", "Go Green T900", "#E9FAF0", None),
    // User types
    ("user-candidate", "Cardinal Red (Candidate)", "#DD7373", Some("candidate avatars")),
    ("user-employee", "Cactus Green (Employee)", "#3BCEAC", Some("employee avatars")),
    ("user-admin", "Navy Blue (User)", "#233D4D", Some("admin user avatars")),
    // Illustration palette
    ("ecem-sky-blue", "Sky Blue", "#37A9E9", None),
    ("ecem-sky-blue-dark", "Sky Blue Dark", "#126892", None),
    ("ecem-sky-blue-t600", "Sky Blue T600", "#B7E0F7", None),
    ("ecem-sky-blue-t800", "Sky Blue T800", "#D7EEFB", None),
    ("ecem-twilight-purple", "Twilight Purple", "#AD8CE2", None),
    ("ecem-twilight-purple-dark", "Twilight Purple Dark", "#56499B", None),
    ("ecem-twilight-purple-t400", "Twilight Purple T400", "#CEBAEE", None),
    ("ecem-twilight-purple-t800", "Twilight Purple T800", "#EFE8F9", None),
    ("ecem-prickly-pear-magenta", "Prickly Pear Magenta", "#C961AA", None),
    ("ecem-prickly-pear-magenta-dark", "Prickly Pear Magenta Dark", "#64347F", None),
    ("ecem-prickly-pear-magenta-t400", "Prickly Pear Magenta T400", "#DFA0CC", None),
    ("ecem-prickly-pear-magenta-t800", "Prickly Pear Magenta T800", "#F4DFEE", None),
    ("ecem-desert-red", "Desert Red", "#FE6D73", None),
    ("ecem-desert-red-dark", "Desert Red Dark", "#7F3A64", None),
    ("ecem-desert-red-t400", "Desert Red T400", "#FEA7AB", None),
    ("ecem-desert-red-t800", "Desert Red T800", "#FFE2E3", None),
    ("ecem-dune-orange", "Dune Orange", "#FF9B71", None),
    ("ecem-dune-orange-dark", "Dune Orange Dark", "#B24213", None),
    ("ecem-dune-orange-t400", "Dune Orange T400", "#FFC3AA", None),
    ("ecem-dune-orange-t800", "Dune Orange T800", "#FFEBE3", None),
];

const RADII: &[(&str, &str, &str)] = &[
    ("radius-3xs", "3x Small", "2px"),
    ("radius-2xs", "2x Small", "4px"),
    ("radius-xs", "1x Small", "8px"),
    ("radius-sm", "Small", "12px"),
    ("radius-md", "Medium", "16px"),
];

const SHADOWS: &[(&str, &str, &str)] = &[
    ("shadow-outer-dark", "Outer Dark 9 Blur", "0px 3px 9px 0px rgba(0, 0, 0, 0.50)"),
    ("shadow-outer-medium-16", "Outer Medium 16 Blur", "0px 4px 16px 0px rgba(0, 0, 0, 0.28)"),
    ("shadow-outer-medium-12", "Outer Medium 12 Blur", "0px 6px 12px 0px rgba(0, 0, 0, 0.18)"),
    ("shadow-tooltip", "Outer Tooltip", "0px 2px 8px 0px rgba(0, 0, 0, 0.20)"),
    ("shadow-outer-light", "Outer Light 10 Blur", "0px 2px 10px 2px rgba(0, 0, 0, 0.10)"),
    ("shadow-outer-extra-light", "Outer Extra Light 3 Blur", "0px 1px 3px 0px rgba(0, 0, 0, 0.10)"),
    ("shadow-inner", "Box Shadow Inner", "0px 1px 2px 0px rgba(0, 0, 0, 0.20) inset"),
];

/// (value, utility class) pairs shared by several text styles.
type Scale = (&'static str, &'static str);

const SIZE_XL: Scale = ("20px", "text-xl");
const SIZE_BASE: Scale = ("16px", "text-base");
const SIZE_SM: Scale = ("14px", "text-sm");
const SIZE_XS: Scale = ("12px", "text-xs");
const SIZE_10: Scale = ("10px", "text-[10px]");

const WEIGHT_NORMAL: Scale = ("400", "font-normal");
const WEIGHT_SEMIBOLD: Scale = ("600", "font-semibold");
const WEIGHT_BOLD: Scale = ("700", "font-bold");

// Every style uses a 1.4 ratio; the class encodes the resulting pixel height.
const LEADING_28: Scale = ("1.4", "leading-7");
const LEADING_22: Scale = ("1.4", "leading-[22px]");
const LEADING_20: Scale = ("1.4", "leading-5");
const LEADING_17: Scale = ("1.4", "leading-[17px]");
const LEADING_14: Scale = ("1.4", "leading-[14px]");

/// (name, alias, size, weight, line height, usage)
const TYPOGRAPHY: &[(&str, &str, Scale, Scale, Scale, Option<&str>)] = &[
    ("text-headline-h1", "Header 1", SIZE_XL, WEIGHT_SEMIBOLD, LEADING_28, Some("Main page titles")),
    ("text-headline-h2", "Header 2", SIZE_BASE, WEIGHT_SEMIBOLD, LEADING_22, Some("Section titles")),
    ("text-headline-h3", "Header 3", SIZE_SM, WEIGHT_SEMIBOLD, LEADING_20, Some("Subsection titles")),
    ("text-body", "Body", SIZE_SM, WEIGHT_NORMAL, LEADING_20, Some("Standard paragraph text")),
    ("text-button", "Button", SIZE_SM, WEIGHT_SEMIBOLD, LEADING_20, Some("Standard button text")),
    ("text-button-sm", "Button (sm)", SIZE_XS, WEIGHT_SEMIBOLD, LEADING_17, Some("Small button text")),
    ("text-link", "Link", SIZE_SM, WEIGHT_SEMIBOLD, LEADING_20, Some("Hyperlink text")),
    ("text-input-lg", "Input (lg)", SIZE_BASE, WEIGHT_NORMAL, LEADING_22, Some("Large form input text")),
    ("text-input-sm", "Input (sm)", SIZE_SM, WEIGHT_NORMAL, LEADING_20, Some("Small form input text")),
    ("text-subtitle", "Subtitle", SIZE_SM, WEIGHT_SEMIBOLD, LEADING_20, Some("Standard subtitles")),
    ("text-subtitle-mini", "Subtitle (mini)", SIZE_XS, WEIGHT_SEMIBOLD, LEADING_17, Some("Small subtitles")),
    ("text-tab-label", "Tab Label", SIZE_XS, WEIGHT_SEMIBOLD, LEADING_17, Some("Tab navigation labels")),
    ("text-avatar", "Avatar", SIZE_XS, WEIGHT_BOLD, LEADING_17, Some("Standard avatar text")),
    ("text-avatar-sm", "Avatar (sm)", SIZE_10, WEIGHT_SEMIBOLD, LEADING_14, Some("Small avatar text")),
    ("text-tooltip", "Tooltip", SIZE_XS, WEIGHT_SEMIBOLD, LEADING_17, Some("Tooltip text")),
];

fn scale((value, class): Scale) -> TypographyScale {
    TypographyScale {
        value: value.to_string(),
        utility_class: class.to_string(),
    }
}

/// The built-in catalog as a definition, ready for validation.
pub fn definition() -> CatalogDefinition {
    CatalogDefinition {
        colors: COLORS
            .iter()
            .map(|&(name, alias, value, usage)| ColorToken {
                name: name.to_string(),
                alias: alias.to_string(),
                value: value.to_string(),
                usage: usage.map(str::to_string),
            })
            .collect(),
        border_radius: RADII
            .iter()
            .map(|&(name, alias, value)| BorderRadiusToken {
                name: name.to_string(),
                alias: alias.to_string(),
                value: value.to_string(),
            })
            .collect(),
        shadows: SHADOWS
            .iter()
            .map(|&(name, alias, value)| ShadowToken {
                name: name.to_string(),
                alias: alias.to_string(),
                value: value.to_string(),
            })
            .collect(),
        typography: TYPOGRAPHY
            .iter()
            .map(|&(name, alias, size, weight, leading, usage)| TypographyToken {
                name: name.to_string(),
                alias: alias.to_string(),
                size: scale(size),
                weight: scale(weight),
                line_height: Some(scale(leading)),
                usage: usage.map(str::to_string),
            })
            .collect(),
    }
}
