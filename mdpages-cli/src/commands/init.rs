//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../mdpages.yml.example");

/// Initialize a new mdpages project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    scaffold_notes(root)?;

    println!("✓ mdpages initialized in {:?}", root);
    println!("  - Edit mdpages.yml to choose directories and the super heading");
    println!("  - Write markdown documents in notes/, then run `mdpages build`");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("mdpages.yml");
    if config_path.exists() {
        println!("mdpages.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn scaffold_notes(root: &Path) -> Result<()> {
    let notes = root.join("notes");
    let imgs = notes.join("imgs");

    for dir in [&notes, &imgs] {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }

    // Starter note
    let sample = notes.join("welcome.md");
    if !sample.exists() {
        fs::write(&sample, SAMPLE_NOTE).with_context(|| format!("Failed to write {:?}", sample))?;
        println!("Created {:?}", sample);
    }

    Ok(())
}

const SAMPLE_NOTE: &str = r#"# Welcome

Every heading in this document gets an anchor, and the table of contents
beside the page links to each one.

## Writing notes

Put markdown files in `notes/`. Images go in `notes/imgs/` and are copied
next to the generated pages.

## Building

```bash
mdpages build
```

### Custom anchors

Give a heading its own id with an attribute block:

```markdown
## Building {#build}
```

# Next steps

Edit `mdpages.yml` to change the output directory or the super heading.
"#;
