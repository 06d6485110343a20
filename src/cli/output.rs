//! Output formatting for CLI commands.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::entry::CatalogEntry;
use crate::cli::args::{ApiFinderArgs, OutputFormat};
use crate::error::Result;
use crate::search::controller::SearchView;
use crate::search::ranking::ScoredEntry;
use crate::search::scorer::ScoreBreakdown;

/// Placeholder shown when a ranked query matched nothing.
pub const NO_RESULTS_PLACEHOLDER: &str = "No APIs found";

/// Result structure for catalog enrichment.
#[derive(Debug, Serialize)]
pub struct EnrichmentResult {
    pub input: String,
    pub output: String,
    pub entries: usize,
    pub duration_ms: u64,
}

/// Result structure for tag synthesis.
#[derive(Debug, Serialize)]
pub struct TagsResult {
    pub category: String,
    pub description: String,
    pub tags: String,
}

/// A ranked entry together with its per-field score contributions.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedHit {
    #[serde(flatten)]
    pub entry: Arc<CatalogEntry>,
    pub relevance_score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Results that know how to print themselves for a terminal.
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

impl HumanReadable for EnrichmentResult {
    fn to_human(&self) -> String {
        format!(
            "Enriched {} entries from {} into {} ({} ms)",
            self.entries, self.input, self.output, self.duration_ms
        )
    }
}

impl HumanReadable for TagsResult {
    fn to_human(&self) -> String {
        self.tags.clone()
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanReadable>(result: &T, args: &ApiFinderArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => println!("{}", result.to_human()),
        OutputFormat::Json => println!("{}", to_json(result, args.pretty)?),
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Turns search views into text.
///
/// Rendering is a pure function of the view, so drawing the same view twice
/// produces the same output.
#[derive(Debug, Clone, Copy)]
pub struct ViewRenderer {
    format: OutputFormat,
    pretty: bool,
}

impl ViewRenderer {
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        ViewRenderer { format, pretty }
    }

    pub fn from_args(args: &ApiFinderArgs) -> Self {
        Self::new(args.output_format, args.pretty)
    }

    /// Render a view.
    pub fn render(&self, view: &SearchView) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(view, self.pretty),
            OutputFormat::Human => Ok(render_view_human(view)),
        }
    }

    /// Render ranked hits with their score breakdowns.
    pub fn render_explained(&self, query: &str, hits: &[ExplainedHit]) -> Result<String> {
        if hits.is_empty() {
            return self.render(&SearchView::NoResults {
                query: query.to_string(),
            });
        }

        match self.format {
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct Explained<'a> {
                    view: &'static str,
                    query: &'a str,
                    hits: &'a [ExplainedHit],
                }
                to_json(
                    &Explained {
                        view: "results",
                        query,
                        hits,
                    },
                    self.pretty,
                )
            }
            OutputFormat::Human => {
                let mut out = results_header(query, hits.len());
                for (i, hit) in hits.iter().enumerate() {
                    out.push('\n');
                    push_entry(&mut out, i + 1, &hit.entry, Some(hit.relevance_score));
                    let b = &hit.breakdown;
                    out.push_str(&format!(
                        "   name +{}, category +{}, tags +{}, description +{}\n",
                        b.name, b.category, b.tags, b.description
                    ));
                }
                Ok(out)
            }
        }
    }
}

fn render_view_human(view: &SearchView) -> String {
    match view {
        SearchView::Default { entries } => {
            if entries.is_empty() {
                return "Catalog is empty.\n".to_string();
            }
            let mut out = format!("Browsing catalog ({} entries shown)\n", entries.len());
            for (i, entry) in entries.iter().enumerate() {
                out.push('\n');
                push_entry(&mut out, i + 1, entry, None);
            }
            out
        }
        SearchView::Results { query, hits } => render_hits_human(query, hits),
        SearchView::NoResults { query } => {
            format!("{NO_RESULTS_PLACEHOLDER} for \"{query}\".\n")
        }
        SearchView::CatalogUnavailable { reason } => {
            format!("Catalog unavailable: {reason}\n")
        }
    }
}

fn render_hits_human(query: &str, hits: &[ScoredEntry]) -> String {
    let mut out = results_header(query, hits.len());
    for (i, hit) in hits.iter().enumerate() {
        out.push('\n');
        push_entry(&mut out, i + 1, &hit.entry, Some(hit.relevance_score));
    }
    out
}

fn results_header(query: &str, count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("{count} {noun} for \"{query}\"\n")
}

fn push_entry(out: &mut String, position: usize, entry: &CatalogEntry, score: Option<u32>) {
    match score {
        Some(score) => out.push_str(&format!("{position}. {} [score {score}]\n", entry.name())),
        None => out.push_str(&format!("{position}. {}\n", entry.name())),
    }
    if !entry.description().is_empty() {
        out.push_str(&format!("   {}\n", entry.description()));
    }

    let key = if entry.requires_key() {
        "API Key Required"
    } else {
        "No Key Needed"
    };
    if entry.category().is_empty() {
        out.push_str(&format!("   {key}\n"));
    } else {
        out.push_str(&format!("   {} - {key}\n", entry.category()));
    }

    if !entry.url().is_empty() {
        out.push_str(&format!("   {}\n", entry.url()));
    }
}
