use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty sheet if it is missing.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css").unwrap_or_default())
        .as_str()
}

/// Data URI for an embedded icon under `assets/icons/`, e.g. `fish-icon-illegal.svg`.
pub fn icon_data_uri(file: &str) -> Option<String> {
    load_data_uri(&format!("icons/{file}"))
}

/// Image source for an icon resolved under the asset base path. Embedded icons
/// are inlined; anything else is served from `resolved` as is.
pub fn icon_src(resolved: &str) -> String {
    resolved
        .rsplit('/')
        .next()
        .and_then(icon_data_uri)
        .unwrap_or_else(|| resolved.to_string())
}

fn load_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).ok()
}

fn load_data_uri(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    let mime = guess_mime(path);
    let encoded = encode_base64(asset.as_ref());
    Some(format!("data:{mime};base64,{encoded}"))
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical).map(|file| file.data)
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn guess_mime(path: &str) -> &'static str {
    if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".png") {
        "image/png"
    } else {
        "application/octet-stream"
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity((input.len() + 2) / 3 * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = *chunk.get(1).unwrap_or(&0);
        let b2 = *chunk.get(2).unwrap_or(&0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            output.push(TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            output.push('=');
        }

        if chunk.len() > 2 {
            output.push(TABLE[(b2 & 0b0011_1111) as usize] as char);
        } else {
            output.push('=');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClassificationTables, CommodityStatus};

    #[test]
    fn base64_matches_known_vectors() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foo"), "Zm9v");
    }

    #[test]
    fn every_status_icon_is_embedded() {
        let tables = ClassificationTables::canonical();
        for status in CommodityStatus::ALL {
            let icon = &tables.status_style(status).icon;
            let uri = icon_data_uri(icon).unwrap_or_default();
            assert!(uri.starts_with("data:image/svg+xml;base64,"), "missing icon {icon}");
        }
        assert!(icon_data_uri("nope.svg").is_none());
    }

    #[test]
    fn icon_src_inlines_embedded_icons_and_passes_others_through() {
        let inlined = icon_src("/oceanus/icons/fish-icon-suspect.svg");
        assert!(inlined.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(icon_src("/oceanus/icons/custom.svg"), "/oceanus/icons/custom.svg");
    }

    #[test]
    fn stylesheet_defines_status_classes() {
        let css = main_css();
        for class in ["commodity-legal", "commodity-suspect", "commodity-illegal", "tooltip-danger"] {
            assert!(css.contains(class), "{class} missing from main.css");
        }
    }

    #[test]
    fn shell_box_matches_the_window() {
        // The shell's resize events feed the tooltip viewport, so it must not grow with content.
        let css = main_css();
        let rule = css
            .lines()
            .find(|line| line.starts_with(".shell {"))
            .expect(".shell rule");
        assert!(rule.contains("height: 100vh"), "{rule}");
        assert!(rule.contains("overflow: auto"), "{rule}");
        assert!(!rule.contains("min-height"), "{rule}");
    }
}
