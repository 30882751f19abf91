use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;

use ciliahub::api::{CiliaHub, CmdMessage, MessageLevel, StatsReport, SuggestionKind};
use ciliahub::config::CiliaHubConfig;
use ciliahub::dataset::GeneTable;
use ciliahub::error::{CiliaHubError, Result};
use ciliahub::model::{GeneRecord, QueryState};
use ciliahub::reference::{parse_references, Reference};
use ciliahub::store::fs::FileStore;
use ciliahub::usage::UsageEntry;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    home: PathBuf,
    config: CiliaHubConfig,
    data: Option<String>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let home = resolve_home()?;
    let config = CiliaHubConfig::load(&home).unwrap_or_default();
    let ctx = AppContext {
        home,
        config,
        data: cli.data.clone(),
    };

    match cli.command {
        Commands::Search {
            query,
            localization,
            omim,
            reference,
            synonym,
            sort,
            csv,
        } => handle_search(
            &ctx,
            query,
            localization,
            omim,
            reference,
            synonym,
            sort,
            csv,
        ),
        Commands::Batch { genes } => handle_batch(&ctx, genes),
        Commands::Export { output } => handle_export(&ctx, output),
        Commands::Stats => handle_stats(&ctx),
        Commands::Popular { n } => handle_popular(&ctx, n),
        Commands::Reset => handle_reset(&ctx),
        Commands::Suggest { query } => handle_suggest(&ctx, query),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn resolve_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("CILIAHUB_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("org", "rarediseaselab", "ciliahub")
        .ok_or_else(|| CiliaHubError::Store("could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Open a full session: dataset plus usage counters.
fn init_hub(ctx: &AppContext) -> Result<CiliaHub<FileStore>> {
    let table = load_table(ctx)?;
    CiliaHub::new(table, FileStore::in_dir(&ctx.home))
}

/// Session for counter-only commands; skips the dataset fetch.
fn init_counter_hub(ctx: &AppContext) -> Result<CiliaHub<FileStore>> {
    CiliaHub::new(GeneTable::default(), FileStore::in_dir(&ctx.home))
}

fn load_table(ctx: &AppContext) -> Result<GeneTable> {
    let source = ctx
        .data
        .clone()
        .unwrap_or_else(|| ctx.config.data_url.clone());
    if source.starts_with("http://") || source.starts_with("https://") {
        GeneTable::fetch(&source)
    } else {
        GeneTable::from_path(&source)
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_search(
    ctx: &AppContext,
    query: Option<String>,
    localization: Option<String>,
    omim: Option<String>,
    reference: Option<String>,
    synonym: Option<String>,
    sort: String,
    csv: Option<PathBuf>,
) -> Result<()> {
    let mut state = QueryState::default().with_sort(sort.parse()?);
    if let Some(q) = query {
        state = state.with_text(&q);
    }
    if let Some(l) = localization {
        state = state.with_localization(&l);
    }
    if let Some(o) = omim {
        state = state.with_omim(o.parse()?);
    }
    if let Some(r) = reference {
        state = state.with_reference(r.parse()?);
    }
    if let Some(s) = synonym {
        state = state.with_synonym(&s);
    }

    let mut hub = init_hub(ctx)?;
    let result = if let Some(path) = csv {
        hub.export_filtered(&state, Some(path))?
    } else {
        let result = hub.search(&state)?;
        if !result.prompt {
            print_records(&result.listed_records);
        }
        result
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_batch(ctx: &AppContext, genes: Vec<String>) -> Result<()> {
    let mut hub = init_hub(ctx)?;
    let result = hub.batch(&genes.join(" "))?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let hub = init_hub(ctx)?;
    let result = hub.export(output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let hub = init_hub(ctx)?;
    let result = hub.stats()?;
    if let Some(report) = &result.stats {
        print_stats(report);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_popular(ctx: &AppContext, n: Option<usize>) -> Result<()> {
    let hub = init_counter_hub(ctx)?;
    let result = hub.popular(n.unwrap_or(ctx.config.top_n))?;
    print_popular(&result.popular);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &AppContext) -> Result<()> {
    let mut hub = init_counter_hub(ctx)?;
    let result = hub.reset_counters()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_suggest(ctx: &AppContext, query: String) -> Result<()> {
    let hub = init_hub(ctx)?;
    let result = hub.suggest(&query)?;
    if result.suggestions.is_empty() {
        println!("No suggestions.");
    }
    for suggestion in &result.suggestions {
        let kind = match suggestion.kind {
            SuggestionKind::Gene => "gene",
            SuggestionKind::Synonym => "synonym",
            SuggestionKind::Ensembl => "ensembl",
        };
        println!("{}  {}", suggestion.text.bold(), kind.dimmed());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = ctx.config.clone();
    match (key.as_deref(), value) {
        (None, _) => {
            println!("data-url = {}", config.data_url);
            println!("top-n = {}", config.top_n);
        }
        (Some("data-url"), None) => println!("data-url = {}", config.data_url),
        (Some("data-url"), Some(v)) => {
            config.data_url = v;
            config.save(&ctx.home)?;
            println!("{}", "Configuration saved.".green());
        }
        (Some("top-n"), None) => println!("top-n = {}", config.top_n),
        (Some("top-n"), Some(v)) => {
            config.top_n = v
                .parse()
                .map_err(|_| CiliaHubError::Store(format!("invalid top-n value '{}'", v)))?;
            config.save(&ctx.home)?;
            println!("{}", "Configuration saved.".green());
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[GeneRecord]) {
    if records.is_empty() {
        println!("No genes found.");
        return;
    }

    for record in records {
        let mut headline = record.gene.bold().to_string();
        if !record.ensembl_id.is_empty() {
            headline = format!("{}  {}", headline, record.ensembl_id.dimmed());
        }
        if !record.localization.is_empty() {
            headline = format!("{}  [{}]", headline, record.localization);
        }
        println!("{}", headline);

        if !record.description.is_empty() {
            println!("    {}", truncate(&record.description, 96));
        }
        if !record.synonym.is_empty() {
            println!("    Synonyms: {}", record.synonym);
        }
        if !record.omim_id.trim().is_empty() {
            println!("    OMIM: {}", record.omim_id);
        }
        for reference in parse_references(&record.reference) {
            let tag = match reference {
                Reference::Pubmed(_) => "PubMed",
                Reference::Doi(_) => "DOI",
                Reference::Url(_) => "URL",
                Reference::Plain(_) => "Ref",
            };
            match reference.link() {
                Some(link) => println!("    {}: {}  {}", tag, reference.label(), link.dimmed()),
                None => println!("    {}: {}", tag, reference.label()),
            }
        }
    }
    println!("{}", format!("Showing {} genes", records.len()).dimmed());
}

fn print_stats(report: &StatsReport) {
    println!("Cilia-related genes: {}", report.total_cilia_genes);
    println!("Localization categories: {}", report.unique_categories);
    println!("With OMIM entry: {}", report.with_omim);
    println!("With references: {}", report.with_references);
    for (category, count) in &report.category_counts {
        println!("    {:<20} {}", category, count);
    }
}

fn print_popular(entries: &[UsageEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        let searches = if entry.count == 1 {
            "search"
        } else {
            "searches"
        };
        println!(
            "{}. {} ({} {})",
            i + 1,
            entry.query.bold(),
            entry.count,
            searches
        );
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
