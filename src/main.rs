//! Folio - content catalog tooling for a portfolio site.
//!
//! Ranks case studies and articles for recommendation sections and splits
//! metric display strings for animated counters. Output is plain data
//! (text lines or JSON) for the site templates to render.

mod catalog;
mod check;
mod cli;
mod config;
mod logger;
mod metric;
mod output;
mod rank;
mod utils;

use anyhow::{Context, Result, bail};
use catalog::{Catalog, ContentItem, ContentKind};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use output::{ParsedMetric, RankedEntry};
use std::io::stdout;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Loaded once here and only ever borrowed afterwards.
    let catalog = if cli.needs_catalog() {
        Catalog::from_path(&config.catalog.path)
            .with_context(|| format!("failed to load `{}`", config.catalog.path.display()))?
    } else {
        Catalog::default()
    };

    match &cli.command {
        Commands::Recommend {
            kind,
            exclude,
            limit,
            tag,
            output,
        } => {
            let limit = limit.map_or(config.recommend.limit, clamp_limit);
            run_ranking(
                &catalog,
                &config,
                *kind,
                exclude.as_deref(),
                limit,
                tag.as_deref(),
                output.json,
            )
        }
        Commands::List { kind, tag, output } => run_ranking(
            &catalog,
            &config,
            *kind,
            None,
            usize::MAX,
            tag.as_deref(),
            output.json,
        ),
        Commands::Metric {
            values,
            item,
            kind,
            frames,
            output,
        } => match item {
            Some(slug) => run_item_metrics(&catalog, *kind, slug, *frames, output.json),
            None => run_metrics(values, *frames, output.json),
        },
        Commands::Check { output } => run_check(&catalog, output.json),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;
    config.validate(cli)?;
    Ok(config)
}

/// Negative limits from the command line mean "show nothing".
fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

fn run_ranking(
    catalog: &Catalog,
    config: &SiteConfig,
    kind: ContentKind,
    exclude: Option<&str>,
    limit: usize,
    tag: Option<&str>,
    json: bool,
) -> Result<()> {
    let items = catalog.items(kind);
    let ranked = match tag {
        Some(tag) => rank::recommend(rank::with_tag(items, tag), exclude, limit),
        None => rank::recommend(items, exclude, limit),
    };

    if ranked.is_empty() {
        log!(kind.name(); "nothing to recommend");
    }

    let entries = RankedEntry::from_ranked(&ranked, kind, config);
    output::print_ranked(&mut stdout().lock(), &entries, json)
}

fn run_metrics(values: &[String], frames: usize, json: bool) -> Result<()> {
    let entries: Vec<_> = values
        .iter()
        .map(|value| ParsedMetric {
            label: None,
            input: value,
            value: metric::parse(value),
            frames: counter_frames(value, frames),
        })
        .collect();

    output::print_metrics(&mut stdout().lock(), &entries, json)
}

fn run_item_metrics(
    catalog: &Catalog,
    kind: ContentKind,
    slug: &str,
    frames: usize,
    json: bool,
) -> Result<()> {
    let Some(item) = catalog.find(kind, slug) else {
        bail!("no {kind} record with slug `{slug}`");
    };
    if item.metrics.is_empty() {
        log!(kind.name(); "`{}` has no metrics", slug);
    }

    let entries = item_metrics(item, frames);
    output::print_metrics(&mut stdout().lock(), &entries, json)
}

fn item_metrics(item: &ContentItem, frames: usize) -> Vec<ParsedMetric<'_>> {
    item.metrics
        .iter()
        .map(|entry| ParsedMetric {
            label: Some(entry.label.as_str()),
            input: &entry.value,
            value: metric::parse(&entry.value),
            frames: counter_frames(&entry.value, frames),
        })
        .collect()
}

fn counter_frames(value: &str, steps: usize) -> Vec<String> {
    if steps == 0 {
        Vec::new()
    } else {
        metric::parse(value).frames(steps)
    }
}

fn run_check(catalog: &Catalog, json: bool) -> Result<()> {
    if catalog.is_empty() {
        log!("warn"; "catalog has no records");
    }
    let report = check::check_catalog(catalog);

    for issue in &report.issues {
        let module = match issue.severity {
            check::Severity::Error => "error",
            check::Severity::Warning => "warn",
        };
        let slug = issue.slug.as_deref().unwrap_or("?");
        log!(module; "{}[{}] {}: {}", issue.kind, issue.index, slug, issue.message);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let warnings = report.count(check::Severity::Warning);
    if report.has_errors() {
        let errors = report.count(check::Severity::Error);
        bail!("catalog has {errors} error(s) and {warnings} warning(s)");
    }

    if report.is_clean() {
        log!("check"; "ok");
    } else {
        log!("check"; "ok, {} warning(s)", warnings);
    }
    Ok(())
}
