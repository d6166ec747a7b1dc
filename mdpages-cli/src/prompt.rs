//! Interactive resolution of build settings.

use anyhow::{Context, Result};
use mdpages_core::config::{
    parse_yes_no, DEFAULT_ASSETS_DIR, DEFAULT_INPUT_DIR, DEFAULT_SUPER_HEADING,
};
use mdpages_core::{AssetSource, Config, Settings};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Source of answers for settings the command line and config left open
pub trait Prompter {
    fn ask(&mut self, question: &str, default: &str) -> Result<String>;

    /// Whether answers come from a person; a non-interactive prompter never
    /// supplies an assets directory of its own.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Reads answers line by line from stdin
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ({}): ", question, default)?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read answer from stdin")?;

        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }
}

/// Accepts every default without asking
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn ask(&mut self, _question: &str, default: &str) -> Result<String> {
        Ok(default.to_string())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub use_cdn: Option<bool>,
    pub assets: Option<PathBuf>,
    pub super_heading: Option<String>,
}

/// Merge command line, config file and prompt answers into build settings.
///
/// Questions are asked in a fixed order (input, output, CDN, assets, super
/// heading) and only for values neither layer provides.
pub fn resolve_settings(
    overrides: Overrides,
    config: &Config,
    prompter: &mut dyn Prompter,
) -> Result<Settings> {
    let input_dir = match overrides.input.or_else(|| config.input_dir()) {
        Some(dir) => dir,
        None => PathBuf::from(prompter.ask(
            "Enter input directory for Markdown files",
            DEFAULT_INPUT_DIR,
        )?),
    };

    let output_dir = match overrides.output.or_else(|| config.output_dir()) {
        Some(dir) => dir,
        None => {
            let default = input_dir.to_string_lossy();
            PathBuf::from(prompter.ask("Enter output directory for HTML files", &default)?)
        }
    };

    let use_cdn = match overrides.use_cdn.or(config.use_cdn) {
        Some(flag) => flag,
        None => parse_yes_no(&prompter.ask("Use CDN for custom CSS/JS (yes/no)?", "yes")?),
    };

    let assets = if use_cdn {
        AssetSource::Cdn {
            base: config.cdn_base.clone(),
        }
    } else {
        match overrides.assets.or_else(|| config.assets_dir()) {
            Some(dir) => AssetSource::Local(dir),
            None if prompter.is_interactive() => AssetSource::Local(PathBuf::from(prompter.ask(
                "Enter path to assets directory (e.g., ./BASE/assets)",
                DEFAULT_ASSETS_DIR,
            )?)),
            None => AssetSource::Bundled,
        }
    };

    let super_heading = match overrides
        .super_heading
        .or_else(|| config.super_heading.clone())
    {
        Some(heading) => heading,
        None => prompter.ask("Enter super heading for your pages", DEFAULT_SUPER_HEADING)?,
    };

    Ok(Settings {
        input_dir,
        output_dir,
        assets,
        super_heading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and records the questions asked
    struct Scripted {
        answers: VecDeque<&'static str>,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for Scripted {
        fn ask(&mut self, question: &str, default: &str) -> Result<String> {
            self.asked.push(question.to_string());
            let answer = self.answers.pop_front().unwrap_or("");
            Ok(if answer.is_empty() {
                default.to_string()
            } else {
                answer.to_string()
            })
        }
    }

    fn empty_config() -> Config {
        Config::from_yaml("").unwrap()
    }

    #[test]
    fn test_all_defaults_interactive() {
        let mut prompter = Scripted::new(&["", "", "", ""]);
        let settings = resolve_settings(Overrides::default(), &empty_config(), &mut prompter)
            .unwrap();

        assert_eq!(settings.input_dir, PathBuf::from("."));
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert!(matches!(settings.assets, AssetSource::Cdn { .. }));
        assert_eq!(settings.super_heading, "Notes");
        assert_eq!(prompter.asked.len(), 4);
    }

    #[test]
    fn test_output_defaults_to_input() {
        let mut prompter = Scripted::new(&["docs", "", "yes", "Wiki"]);
        let settings = resolve_settings(Overrides::default(), &empty_config(), &mut prompter)
            .unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("docs"));
        assert_eq!(settings.super_heading, "Wiki");
    }

    #[test]
    fn test_local_assets_are_asked_for() {
        let mut prompter = Scripted::new(&["in", "out", "n", "theme/assets", ""]);
        let settings = resolve_settings(Overrides::default(), &empty_config(), &mut prompter)
            .unwrap();
        assert_eq!(
            settings.assets,
            AssetSource::Local(PathBuf::from("theme/assets"))
        );
        assert_eq!(prompter.asked.len(), 5);
    }

    #[test]
    fn test_overrides_skip_questions() {
        let overrides = Overrides {
            input: Some(PathBuf::from("notes")),
            output: Some(PathBuf::from("site")),
            use_cdn: Some(false),
            assets: Some(PathBuf::from("assets")),
            super_heading: Some("Docs".to_string()),
        };
        let mut prompter = Scripted::new(&[]);
        let settings = resolve_settings(overrides, &empty_config(), &mut prompter).unwrap();

        assert!(prompter.asked.is_empty());
        assert_eq!(settings.assets, AssetSource::Local(PathBuf::from("assets")));
        assert!(settings.writes_elsewhere());
    }

    #[test]
    fn test_config_fills_gaps_before_prompting() {
        let config = Config::from_yaml("input: notes\nuse_cdn: true\n").unwrap();
        let overrides = Overrides {
            super_heading: Some("Docs".to_string()),
            ..Overrides::default()
        };
        let mut prompter = Scripted::new(&[""]);
        let settings = resolve_settings(overrides, &config, &mut prompter).unwrap();

        assert_eq!(prompter.asked, vec!["Enter output directory for HTML files"]);
        assert_eq!(settings.output_dir, PathBuf::from("notes"));
        assert_eq!(
            settings.assets,
            AssetSource::Cdn {
                base: config.cdn_base.clone()
            }
        );
    }

    #[test]
    fn test_non_interactive_local_uses_bundle() {
        let overrides = Overrides {
            use_cdn: Some(false),
            ..Overrides::default()
        };
        let settings =
            resolve_settings(overrides, &empty_config(), &mut AcceptDefaults).unwrap();
        assert_eq!(settings.assets, AssetSource::Bundled);
        assert_eq!(settings.input_dir, PathBuf::from("."));
    }
}
