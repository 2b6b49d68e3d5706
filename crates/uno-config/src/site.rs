//! The site's own UnoCSS configuration.

use crate::config::UnoConfig;
use crate::error::ConfigError;
use crate::preset::Preset;

/// Tokens of the `btn` shortcut, in precedence order.
pub const BTN_TOKENS: [&str; 18] = [
    "relative",
    "font-normal",
    "white-space-nowrap",
    "pl-6",
    "pr-6",
    "inline-flex",
    "h-12",
    "cursor-pointer",
    "border",
    "border-1",
    "border-rounded-8",
    "border-solid",
    "color-default",
    "items-center",
    "justify-center",
    "text-center",
    "transition-ease",
    "hover:btn-hover",
];

/// Builds the site document: its custom rules, the default preset, and the
/// `btn` shortcut.
///
/// Each call returns a fresh value; callers pass it to whatever consumes it.
pub fn site_config() -> Result<UnoConfig, ConfigError> {
    UnoConfig::builder()
        .rule("white-space-normal", [("white-space", "normal")])
        .rule("white-space-nowrap", [("white-space", "nowrap")])
        .rule("color-default", [("color", "var(--color-fg-default)")])
        .rule(
            "transition-ease",
            [(
                "transition",
                "color 0.25s ease 0s, border-color 0.25s ease 0s, \
                 background-color 0.25s ease 0s, box-shadow 0.25s ease 0s",
            )],
        )
        .rule("transition-ease-simple", [("transition", "color 0.25s ease 0s")])
        .rule("transition-ease-slow", [("transition", "opacity 250ms ease 100ms")])
        .rule("scrollbar-w-none", [("scrollbar-width", "none")])
        .rule("snap-x-mandatory", [("scroll-snap-type", "x mandatory")])
        .rule(
            "bg-gradient",
            [("background", "linear-gradient(rgba(0,0,0,0), rgba(0,0,0,0.6))")],
        )
        .rule(
            "bg-gradient-hero",
            [(
                "background",
                "linear-gradient(rgba(35, 55, 59, .0), rgba(35, 55, 59, 0.4))",
            )],
        )
        .rule(
            "btn-hover",
            [
                ("background-color", "var(--color-Sec3Dark)"),
                ("border-color", "var(--color-Sec3Dark)"),
                ("color", "white"),
                ("text-decoration", "underline"),
            ],
        )
        .preset(Preset::uno())
        .shortcut("btn", BTN_TOKENS)
        .build()
}
