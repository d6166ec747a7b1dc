//! Stylesheet and script locations for generated pages.

use mdpages_core::AssetSource;

/// Links every page needs for its stylesheet and script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLinks {
    pub stylesheet: String,
    pub script: String,
    /// CDN scripts load async with anonymous CORS
    pub is_cdn: bool,
}

impl AssetLinks {
    pub fn for_source(source: &AssetSource) -> Self {
        match source {
            AssetSource::Cdn { base } => {
                let base = base.trim_end_matches('/');
                Self {
                    stylesheet: format!("{}/BASE/assets/css/style.min.css", base),
                    script: format!("{}/BASE/assets/js/main.min.js", base),
                    is_cdn: true,
                }
            }
            AssetSource::Local(_) | AssetSource::Bundled => Self {
                stylesheet: "./assets/css/style.css".to_string(),
                script: "./assets/js/main.js".to_string(),
                is_cdn: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cdn_links() {
        let links = AssetLinks::for_source(&AssetSource::Cdn {
            base: "https://cdn.example.com/pkg@v1/".to_string(),
        });
        assert_eq!(
            links.stylesheet,
            "https://cdn.example.com/pkg@v1/BASE/assets/css/style.min.css"
        );
        assert_eq!(
            links.script,
            "https://cdn.example.com/pkg@v1/BASE/assets/js/main.min.js"
        );
        assert!(links.is_cdn);
    }

    #[test]
    fn test_local_and_bundled_share_links() {
        let local = AssetLinks::for_source(&AssetSource::Local(PathBuf::from("theme")));
        let bundled = AssetLinks::for_source(&AssetSource::Bundled);
        assert_eq!(local, bundled);
        assert_eq!(local.stylesheet, "./assets/css/style.css");
        assert!(!local.is_cdn);
    }
}
