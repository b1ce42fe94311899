//! Default TOML settings template with inline documentation comments.

/// Generate the default TOML settings content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# superdrag settings
# Only override what you want to change -- missing keys use defaults.
#
# Actions: google, youtube, twitter, rakuten, amazon, maps,
#          deepl, gtranslate, chatgpt, claude, gemini, copy, none

# Short drags
up = "google"
down = "twitter"
left = "amazon"
right = "copy"

# Long drags (only used when farDragEnabled = true; "none" falls back to
# the short-drag action for that direction)
upFar = "none"
downFar = "none"
leftFar = "none"
rightFar = "none"
farDragEnabled = false

# Show the direction guide after selecting text
enableGuides = true

# Region used for localized search URLs ("ja" selects Japanese domains)
locale = "en"
"##
}
