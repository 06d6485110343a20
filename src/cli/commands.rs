//! Command implementations for the apifinder CLI.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::catalog::{self, Catalog};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ApiFinderConfig;
use crate::error::{ApiFinderError, Result};
use crate::search::controller::{SearchController, SearchView};
use crate::search::ranking::{RankingEngine, normalize_query};
use crate::search::scheduler::{Scheduler, WallClockScheduler};
use crate::search::scorer::RelevanceScorer;
use crate::tags::{CategoryTaxonomy, TagSynthesizer};

/// Upper bound on a single wait in the interactive loop when no timer is due.
const IDLE_WAIT: Duration = Duration::from_secs(3600);

/// Execute a CLI command.
pub fn execute_command(args: ApiFinderArgs) -> Result<()> {
    match &args.command {
        Command::Enrich(enrich_args) => enrich_catalog(enrich_args.clone(), &args),
        Command::Tags(tags_args) => show_tags(tags_args.clone(), &args),
        Command::Search(search_args) => search_catalog(search_args.clone(), &args),
        Command::Interactive(interactive_args) => {
            interactive_search(interactive_args.clone(), &args)
        }
    }
}

/// Configuration and tag synthesizer shared by every command.
struct Context {
    config: ApiFinderConfig,
    synthesizer: TagSynthesizer,
}

impl Context {
    fn load(cli_args: &ApiFinderArgs) -> Result<Self> {
        let config = match &cli_args.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                ApiFinderConfig::load_from_file(path)?
            }
            None => ApiFinderConfig::default(),
        };

        let taxonomy = match &cli_args.taxonomy {
            Some(path) => CategoryTaxonomy::load_from_file(path)?,
            None => CategoryTaxonomy::default(),
        };

        let synthesizer = TagSynthesizer::new(Arc::new(taxonomy), config.tags.clone());
        Ok(Context {
            config,
            synthesizer,
        })
    }

    fn engine(&self) -> RankingEngine {
        RankingEngine::new(RelevanceScorer::new(self.config.weights))
    }

    /// Load a catalog, synthesizing tags for entries that carry none.
    fn load_catalog(&self, path: &Path) -> Result<Catalog> {
        let entries = catalog::load_entries(path)?;
        Ok(self.synthesizer.enrich_missing(entries))
    }
}

/// Synthesize tags for every entry and write the catalog as JSON.
fn enrich_catalog(args: EnrichArgs, cli_args: &ApiFinderArgs) -> Result<()> {
    let context = Context::load(cli_args)?;
    let start_time = Instant::now();

    let entries = catalog::load_entries(&args.input)?;
    let catalog = context.synthesizer.enrich_all(entries);

    match &args.output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            catalog::write_json(&catalog, writer, cli_args.pretty)?;

            output_result(
                &EnrichmentResult {
                    input: args.input.display().to_string(),
                    output: path.display().to_string(),
                    entries: catalog.len(),
                    duration_ms: start_time.elapsed().as_millis() as u64,
                },
                cli_args,
            )?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            catalog::write_json(&catalog, &mut writer, cli_args.pretty)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

/// Print the tags synthesized for one category and description.
fn show_tags(args: TagsArgs, cli_args: &ApiFinderArgs) -> Result<()> {
    let context = Context::load(cli_args)?;
    let tags = context
        .synthesizer
        .tag_string(&args.category, &args.description);

    output_result(
        &TagsResult {
            category: args.category,
            description: args.description,
            tags,
        },
        cli_args,
    )
}

/// Rank a catalog against a single query and print the resulting view.
fn search_catalog(args: SearchArgs, cli_args: &ApiFinderArgs) -> Result<()> {
    let context = Context::load(cli_args)?;
    let renderer = ViewRenderer::from_args(cli_args);

    let catalog = context.load_catalog(&args.catalog)?;

    let query = normalize_query(&args.query);
    if query.is_empty() {
        let view = SearchView::Default {
            entries: catalog
                .head(context.config.search.default_view_size)
                .to_vec(),
        };
        println!("{}", renderer.render(&view)?.trim_end());
        return Ok(());
    }

    let engine = context.engine();
    let limit = args.limit.unwrap_or(context.config.search.result_limit);
    let hits = engine.rank(&catalog, &query, limit);

    let text = if args.explain {
        let explained: Vec<ExplainedHit> = hits
            .into_iter()
            .map(|hit| ExplainedHit {
                breakdown: engine.scorer().explain(&hit.entry, &query),
                entry: hit.entry,
                relevance_score: hit.relevance_score,
            })
            .collect();
        renderer.render_explained(&query, &explained)?
    } else if hits.is_empty() {
        renderer.render(&SearchView::NoResults { query })?
    } else {
        renderer.render(&SearchView::Results { query, hits })?
    };

    println!("{}", text.trim_end());
    Ok(())
}

/// Drive a debounced search controller from lines read on stdin.
///
/// Each line is one input change. The current view is printed whenever the
/// controller re-renders. The loop ends once stdin is closed and no search
/// is pending.
fn interactive_search(args: InteractiveArgs, cli_args: &ApiFinderArgs) -> Result<()> {
    let context = Context::load(cli_args)?;
    let renderer = ViewRenderer::from_args(cli_args);

    let mut search_config = context.config.search;
    if let Some(debounce_ms) = args.debounce_ms {
        search_config.debounce_ms = debounce_ms;
    }

    let engine = context.engine();
    let scheduler = WallClockScheduler::new();
    let controller = match context.load_catalog(&args.catalog) {
        Ok(catalog) => SearchController::new(catalog, engine, search_config, scheduler),
        Err(e) if e.is_catalog_unavailable() => {
            log::warn!("{}", e);
            let reason = match e {
                ApiFinderError::Catalog(reason) => reason,
                other => other.to_string(),
            };
            SearchController::unavailable(reason, engine, search_config, scheduler)
        }
        Err(e) => return Err(e),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let stdout = std::io::stdout();
    runtime.block_on(run_interactive(
        controller,
        renderer,
        BufReader::new(tokio::io::stdin()),
        &mut stdout.lock(),
    ))
}

/// Feed each line of `input` to the controller and write every rendered
/// view to `out`, starting with the initial one.
///
/// Returns once `input` is exhausted and no debounced search is pending.
async fn run_interactive<S, R, W>(
    mut controller: SearchController<S>,
    renderer: ViewRenderer,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: Scheduler,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write_view(out, &renderer, controller.view())?;

    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        let wait = controller.scheduler().time_until_next();
        if !input_open && wait.is_none() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => match line? {
                Some(line) => controller.on_input(line),
                None => {
                    log::debug!("Input closed");
                    input_open = false;
                }
            },
            _ = tokio::time::sleep(wait.unwrap_or(IDLE_WAIT)), if wait.is_some() => {}
        }

        if controller.poll() {
            write_view(out, &renderer, controller.view())?;
        }
    }

    Ok(())
}

fn write_view<W: Write>(out: &mut W, renderer: &ViewRenderer, view: &SearchView) -> Result<()> {
    writeln!(out, "{}", renderer.render(view)?.trim_end())?;
    out.flush()?;
    Ok(())
}
