//! Collection hook commands: `expand`, `feed`, `index`, `individual`.

use anyhow::{Context, Result};

use super::args::{Cli, Commands};
use super::io::{read_items, write_output};
use crate::collection::{Hooks, Paginator};
use crate::config::SiteConfig;
use crate::i18n::Catalog;
use crate::{debug, log};

/// Run the selected hook command.
pub fn run(cli: &Cli, config: &SiteConfig) -> Result<()> {
    let mode = config.build_mode(cli.mode);
    debug!("config"; "mode: {}, page size: {}", mode, config.build.page_size);

    let catalog = load_catalog(config)?;
    let hooks = Hooks::new(
        &catalog,
        Paginator::new(config.build.page_size),
        mode,
        &config.site.default_locale,
    );

    let io = cli.command.io();
    let items = read_items(&io.input)?;
    let output = io.output.as_deref();

    match &cli.command {
        Commands::Expand { lang, .. } => {
            if let Some(lang) = lang {
                check_language(config, lang);
            }
            let expanded = hooks.add_fields(&items, &io.path, lang.as_deref());
            write_output(&expanded, io.pretty, output)
        }
        Commands::Feed { .. } => {
            let expanded = hooks.add_fields(&items, &io.path, None);
            let feed = hooks.feed(&expanded);
            log!("feed"; "{} of {} items ({} mode)", feed.len(), expanded.len(), mode);
            write_output(&feed, io.pretty, output)
        }
        Commands::Index { href, .. } => {
            let expanded = hooks.add_fields(&items, &io.path, None);
            let pages = hooks.index(&expanded, href, &config.collections.test_items);
            log!("index"; "{} pages under {}", pages.len(), href);
            write_output(&pages, io.pretty, output)
        }
        Commands::Individual { lang, .. } => {
            check_language(config, lang);
            let expanded = hooks.add_fields(&items, &io.path, Some(lang.as_str()));
            let pages = hooks.individual(&expanded, lang);
            log!("individual"; "{} pages for {} items ({})", pages.len(), expanded.len(), lang);
            write_output(&pages, io.pretty, output)
        }
    }
}

/// Load the translation catalog named by `[build] i18n`.
fn load_catalog(config: &SiteConfig) -> Result<Catalog> {
    let dir = config.root_join(&config.build.i18n);
    let catalog = Catalog::load_dir(&dir, &config.site.default_locale)
        .with_context(|| format!("failed to load translations from {}", dir.display()))?;
    if catalog.is_empty() {
        log!("warning"; "no translations in {}, titles fall back to keys", dir.display());
    } else {
        debug!("i18n"; "{} keys from {}", catalog.len(), dir.display());
    }
    Ok(catalog)
}

/// Warn (without failing) when `lang` is not one of the site's languages.
fn check_language(config: &SiteConfig, lang: &str) {
    if !config.site.supports(lang) {
        log!("warning"; "'{}' is not in [site] languages {:?}", lang, config.site.languages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use clap::Parser;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    const ITEMS: &str = r#"[
        {"key": "zeta", "href": "/tags/zeta/"},
        {"key": "alpha", "href": "/tags/alpha/", "elements": [{"url": "/a/"}]},
        {"key": "mu", "href": "/tags/mu/", "elements": [{"url": "/m/"}]}
    ]"#;

    const TAGS: &str = r#"
[zeta.title]
en = "Zeta"

[alpha.title]
en = "Alpha"

[mu.title]
en = "Mu"
"#;

    /// Project dir with items, a catalog and a config rooted there.
    fn project(config: &str) -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("i18n")).unwrap();
        fs::write(dir.path().join("i18n/tags.toml"), TAGS).unwrap();
        fs::write(dir.path().join("items.json"), ITEMS).unwrap();

        let mut config = test_parse_config(config);
        config.root = dir.path().to_path_buf();
        (dir, config)
    }

    fn run_to_json(dir: &TempDir, config: &SiteConfig, args: &[&str]) -> Value {
        let input = dir.path().join("items.json");
        let output = dir.path().join("out.json");
        let mut argv = vec!["collection-hooks"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["--path", "tags"]);
        argv.extend_from_slice(&["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()]);

        run(&Cli::parse_from(argv), config).unwrap();
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap()
    }

    #[test]
    fn test_index_uses_test_items_and_page_size() {
        let (dir, config) = project(
            r#"
[build]
mode = "test-capture"
page_size = 1

[collections]
test_items = ["zeta", "mu"]
"#,
        );

        let pages = run_to_json(&dir, &config, &["index", "--href", "/tags/"]);
        let pages = pages.as_array().unwrap();
        assert_eq!(pages.len(), 2);

        assert_eq!(pages[0]["href"], "/tags/");
        assert_eq!(pages[0]["index"], 0);
        assert_eq!(pages[0]["pages"], 2);
        assert_eq!(pages[0]["total"], 2);
        assert_eq!(pages[0]["elements"][0]["key"], "mu");
        assert_eq!(pages[0]["elements"][0]["title"], "Mu");

        assert_eq!(pages[1]["href"], "/tags/2/");
        assert_eq!(pages[1]["elements"][0]["key"], "zeta");
        assert_eq!(pages[1]["elements"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_cli_mode_overrides_config() {
        let (dir, config) = project("[build]\nmode = \"test-capture\"");

        let pages = run_to_json(&dir, &config, &["-m", "draft", "index", "--href", "/tags/"]);
        let keys: Vec<&str> = pages[0]["elements"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["alpha", "mu"]);
    }

    #[test]
    fn test_feed_in_production() {
        let (dir, config) = project("[build]\nmode = \"production\"");

        let feed = run_to_json(&dir, &config, &["feed"]);
        let keys: Vec<&str> = feed
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["alpha", "mu"]);
    }

    #[test]
    fn test_missing_catalog_dir_fails() {
        let (dir, mut config) = project("");
        config.build.i18n = "missing".into();

        let input = dir.path().join("items.json");
        let cli = Cli::parse_from([
            "collection-hooks",
            "expand",
            "--path",
            "tags",
            "-i",
            input.to_str().unwrap(),
        ]);
        let err = run(&cli, &config).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load translations"));
    }
}
