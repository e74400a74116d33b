//! Theme types for the ticket marketplace client.
//!
//! Responsibilities:
//! - Define the user-toggled dark/light flag (`ThemeFlag`).
//! - Define the semantic style categories and their variants.
//! - Expand a `ThemeFlag` into an immutable `StyleTokenBundle` of style classes.
//!
//! Does NOT handle:
//! - Rendering or applying classes (presentation layers consume the bundle).
//! - Persisting the flag (the loader reads it; storage is external).
//!
//! Invariants:
//! - Resolution is pure and total: every variant has a dark and a light class
//!   defined in a static table, so no lookup can fail.
//! - Unknown variants degrade to the category default; unknown categories
//!   degrade to `text.primary`.
//! - Colors are semantically named (error/warning/success/info) for consistent usage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Category used when a lookup names a category that does not exist.
const FALLBACK_CATEGORY: &str = "text";

/// User-toggled dark/light presentation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeFlag(bool);

impl ThemeFlag {
    /// Light mode.
    pub const LIGHT: Self = Self(false);
    /// Dark mode.
    pub const DARK: Self = Self(true);

    pub const fn new(is_dark_mode: bool) -> Self {
        Self(is_dark_mode)
    }

    pub const fn is_dark_mode(self) -> bool {
        self.0
    }

    /// Flip between dark and light.
    pub const fn toggle(self) -> Self {
        Self(!self.0)
    }

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        if self.0 { "Dark" } else { "Light" }
    }

    /// Expand the flag into its style token bundle.
    pub fn tokens(self) -> StyleTokenBundle {
        StyleTokenBundle::from_theme_flag(self)
    }
}

impl From<bool> for ThemeFlag {
    fn from(is_dark_mode: bool) -> Self {
        Self(is_dark_mode)
    }
}

impl fmt::Display for ThemeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Declares one style category: a variant enum plus its dark/light class table.
macro_rules! style_category {
    (
        $(#[$meta:meta])*
        $name:ident => $category:literal, default $default:ident {
            $($variant:ident => $key:literal: $dark:literal, $light:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Category name used in dotted token keys.
            pub const CATEGORY: &'static str = $category;

            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Variant name used in dotted token keys.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// Style class for this variant under the given mode.
            pub const fn class(self, flag: ThemeFlag) -> &'static str {
                match self {
                    $(Self::$variant => if flag.is_dark_mode() { $dark } else { $light },)+
                }
            }

            /// Parse a variant name, degrading to the category default.
            pub fn parse_or_default(name: &str) -> Self {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == name)
                    .unwrap_or_default()
            }

            fn token_group(flag: ThemeFlag) -> TokenGroup {
                TokenGroup {
                    default_variant: Self::default().as_str(),
                    tokens: Self::ALL
                        .iter()
                        .map(|variant| (variant.as_str(), variant.class(flag)))
                        .collect(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse_or_default(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

style_category! {
    /// Foreground text styles.
    TextVariant => "text", default Primary {
        Primary => "primary": "text-white", "text-gray-900";
        Secondary => "secondary": "text-gray-300", "text-gray-700";
        Tertiary => "tertiary": "text-gray-400", "text-gray-600";
        Quaternary => "quaternary": "text-gray-500", "text-gray-500";
        Muted => "muted": "text-gray-500", "text-gray-400";
        Accent => "accent": "text-blue-400", "text-blue-600";
        Success => "success": "text-green-400", "text-green-600";
        Warning => "warning": "text-yellow-400", "text-yellow-600";
        Error => "error": "text-red-400", "text-red-600";
        Info => "info": "text-cyan-400", "text-cyan-600";
    }
}

style_category! {
    /// Surface background styles.
    BackgroundVariant => "background", default Primary {
        Primary => "primary": "bg-gray-900", "bg-white";
        Secondary => "secondary": "bg-gray-800", "bg-gray-50";
        Tertiary => "tertiary": "bg-gray-700", "bg-gray-100";
        Card => "card": "bg-gray-800 shadow-lg shadow-black/20", "bg-white shadow-md";
        Modal => "modal": "bg-gray-800", "bg-white";
        Overlay => "overlay": "bg-black/70", "bg-black/40";
        Dropdown => "dropdown": "bg-gray-800 border-gray-700", "bg-white border-gray-200";
        Hover => "hover": "hover:bg-gray-700", "hover:bg-gray-100";
        Active => "active": "bg-gray-700", "bg-gray-200";
    }
}

style_category! {
    /// Border styles.
    BorderVariant => "border", default Primary {
        Primary => "primary": "border-gray-700", "border-gray-200";
        Secondary => "secondary": "border-gray-600", "border-gray-300";
        Accent => "accent": "border-blue-500", "border-blue-400";
        Success => "success": "border-green-500", "border-green-400";
        Warning => "warning": "border-yellow-500", "border-yellow-400";
        Error => "error": "border-red-500", "border-red-400";
        Focus => "focus": "focus:border-blue-400 focus:ring-blue-400", "focus:border-blue-500 focus:ring-blue-500";
    }
}

style_category! {
    /// Button styles.
    ButtonVariant => "button", default Primary {
        Primary => "primary": "bg-blue-600 hover:bg-blue-700 text-white", "bg-blue-500 hover:bg-blue-600 text-white";
        Secondary => "secondary": "bg-gray-700 hover:bg-gray-600 text-gray-100", "bg-gray-200 hover:bg-gray-300 text-gray-800";
        Success => "success": "bg-green-600 hover:bg-green-700 text-white", "bg-green-500 hover:bg-green-600 text-white";
        Warning => "warning": "bg-yellow-600 hover:bg-yellow-700 text-white", "bg-yellow-500 hover:bg-yellow-600 text-white";
        Error => "error": "bg-red-600 hover:bg-red-700 text-white", "bg-red-500 hover:bg-red-600 text-white";
        Outline => "outline": "border border-gray-500 text-gray-200 hover:bg-gray-800", "border border-gray-300 text-gray-700 hover:bg-gray-50";
        Ghost => "ghost": "text-gray-300 hover:bg-gray-800", "text-gray-600 hover:bg-gray-100";
        Link => "link": "text-blue-400 hover:underline", "text-blue-600 hover:underline";
    }
}

style_category! {
    /// Inline badge styles.
    BadgeVariant => "badge", default Default {
        Default => "default": "bg-gray-700 text-gray-200", "bg-gray-100 text-gray-800";
        Primary => "primary": "bg-blue-900 text-blue-200", "bg-blue-100 text-blue-800";
        Success => "success": "bg-green-900 text-green-200", "bg-green-100 text-green-800";
        Warning => "warning": "bg-yellow-900 text-yellow-200", "bg-yellow-100 text-yellow-800";
        Error => "error": "bg-red-900 text-red-200", "bg-red-100 text-red-800";
        Info => "info": "bg-cyan-900 text-cyan-200", "bg-cyan-100 text-cyan-800";
    }
}

style_category! {
    /// Data table styles.
    TableVariant => "table", default Row {
        Header => "header": "bg-gray-800 text-gray-300", "bg-gray-50 text-gray-600";
        Row => "row": "bg-gray-900 border-gray-700", "bg-white border-gray-200";
        RowHover => "row_hover": "hover:bg-gray-800", "hover:bg-gray-50";
        Cell => "cell": "text-gray-200", "text-gray-900";
        Border => "border": "divide-gray-700", "divide-gray-200";
    }
}

style_category! {
    /// Alert banner styles.
    AlertVariant => "alert", default Info {
        Info => "info": "bg-cyan-900/40 border-cyan-700 text-cyan-200", "bg-cyan-50 border-cyan-200 text-cyan-800";
        Success => "success": "bg-green-900/40 border-green-700 text-green-200", "bg-green-50 border-green-200 text-green-800";
        Warning => "warning": "bg-yellow-900/40 border-yellow-700 text-yellow-200", "bg-yellow-50 border-yellow-200 text-yellow-800";
        Error => "error": "bg-red-900/40 border-red-700 text-red-200", "bg-red-50 border-red-200 text-red-800";
    }
}

/// Style classes of one category, keyed by variant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenGroup {
    #[serde(skip)]
    default_variant: &'static str,
    #[serde(flatten)]
    tokens: BTreeMap<&'static str, &'static str>,
}

impl TokenGroup {
    /// Class for `variant`, or for the category default when unknown.
    pub fn get(&self, variant: &str) -> &'static str {
        self.tokens
            .get(variant)
            .or_else(|| self.tokens.get(self.default_variant))
            .copied()
            .unwrap_or_default()
    }

    /// Variant names in this category.
    pub fn variants(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tokens.keys().copied()
    }
}

/// Expanded style token bundle for one theme flag state.
///
/// Invariants:
/// - Built only from the static tables above; equal flags give equal bundles.
/// - Never partially updated. A flag change means building a new bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleTokenBundle {
    dark_mode: bool,
    #[serde(flatten)]
    groups: BTreeMap<&'static str, TokenGroup>,
}

impl StyleTokenBundle {
    /// Expand a theme flag into the full token bundle.
    pub fn from_theme_flag(flag: ThemeFlag) -> Self {
        let groups = [
            (TextVariant::CATEGORY, TextVariant::token_group(flag)),
            (BackgroundVariant::CATEGORY, BackgroundVariant::token_group(flag)),
            (BorderVariant::CATEGORY, BorderVariant::token_group(flag)),
            (ButtonVariant::CATEGORY, ButtonVariant::token_group(flag)),
            (BadgeVariant::CATEGORY, BadgeVariant::token_group(flag)),
            (TableVariant::CATEGORY, TableVariant::token_group(flag)),
            (AlertVariant::CATEGORY, AlertVariant::token_group(flag)),
        ]
        .into_iter()
        .collect();

        Self {
            dark_mode: flag.is_dark_mode(),
            groups,
        }
    }

    /// The flag this bundle was resolved from.
    pub fn theme(&self) -> ThemeFlag {
        ThemeFlag::new(self.dark_mode)
    }

    pub fn text(&self, variant: TextVariant) -> &'static str {
        variant.class(self.theme())
    }

    pub fn background(&self, variant: BackgroundVariant) -> &'static str {
        variant.class(self.theme())
    }

    pub fn border(&self, variant: BorderVariant) -> &'static str {
        variant.class(self.theme())
    }

    pub fn button(&self, variant: ButtonVariant) -> &'static str {
        variant.class(self.theme())
    }

    pub fn badge(&self, variant: BadgeVariant) -> &'static str {
        variant.class(self.theme())
    }

    pub fn table(&self, variant: TableVariant) -> &'static str {
        variant.class(self.theme())
    }

    pub fn alert(&self, variant: AlertVariant) -> &'static str {
        variant.class(self.theme())
    }

    /// Look up a class by category and variant name.
    ///
    /// Unknown variants fall back to the category default; unknown
    /// categories fall back to `text.primary`.
    pub fn lookup(&self, category: &str, variant: &str) -> &'static str {
        match self.groups.get(category) {
            Some(group) => group.get(variant),
            None => self.groups[FALLBACK_CATEGORY].get(TextVariant::default().as_str()),
        }
    }

    /// Look up a dotted key such as `button.success`.
    ///
    /// A key without a dot names the category default.
    pub fn get(&self, key: &str) -> &'static str {
        match key.split_once('.') {
            Some((category, variant)) => self.lookup(category, variant),
            None => self.lookup(key, ""),
        }
    }

    /// Category names present in the bundle.
    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.keys().copied()
    }

    /// All `(category.variant, class)` pairs in key order.
    pub fn entries(&self) -> Vec<(String, &'static str)> {
        self.groups
            .iter()
            .flat_map(|(category, group)| {
                group
                    .tokens
                    .iter()
                    .map(move |(variant, class)| (format!("{category}.{variant}"), *class))
            })
            .collect()
    }
}

impl Default for StyleTokenBundle {
    fn default() -> Self {
        Self::from_theme_flag(ThemeFlag::default())
    }
}

/// Resolve the style token bundle for a dark/light flag.
pub fn resolve(is_dark_mode: bool) -> StyleTokenBundle {
    StyleTokenBundle::from_theme_flag(ThemeFlag::new(is_dark_mode))
}
