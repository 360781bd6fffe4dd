//! `playbill` command line: load catalog and invoice JSON, print statements.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use playbill_plays::PlayCatalog;
use playbill_pricing::PricingRules;
use playbill_statement::{Invoice, StatementResult, compute_statement, render_plain_text};

/// How statements are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for playbill
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "playbill")]
#[command(about = "Print theatre billing statements for a set of invoices")]
#[command(version)]
pub struct Args {
    /// Play catalog (`{ "<playID>": { "name": .., "type": .. } }`)
    pub plays: PathBuf,

    /// Invoices (`[{ "customer": .., "performances": [..] }]`)
    pub invoices: PathBuf,

    /// Print statements as a JSON array instead of text
    #[arg(long)]
    pub json: bool,

    /// JSON rate card overriding the house rates
    #[arg(long, env = "PLAYBILL_PRICING")]
    pub pricing: Option<PathBuf>,
}

impl Args {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Rate card: the configured file, or the house rates.
    pub fn pricing_rules(&self) -> anyhow::Result<PricingRules> {
        match &self.pricing {
            Some(path) => {
                let json = read(path)?;
                let rules = PricingRules::from_json(&json)
                    .with_context(|| format!("invalid rate card {}", path.display()))?;
                tracing::info!(path = %path.display(), "loaded rate card");
                Ok(rules)
            }
            None => {
                tracing::info!("no rate card configured; using house rates");
                Ok(PricingRules::HOUSE)
            }
        }
    }
}

/// Compute one statement per invoice. Any failing invoice fails the run.
pub fn compute_all(
    plays_json: &str,
    invoices_json: &str,
    rules: &PricingRules,
) -> anyhow::Result<Vec<StatementResult>> {
    let plays = PlayCatalog::from_json(plays_json)?;
    let invoices = Invoice::list_from_json(invoices_json)?;
    tracing::info!(plays = plays.len(), invoices = invoices.len(), "inputs loaded");

    invoices
        .iter()
        .enumerate()
        .map(|(i, invoice)| {
            compute_statement(invoice, &plays, rules).with_context(|| {
                format!("invoice #{} for customer {:?}", i + 1, invoice.customer)
            })
        })
        .collect()
}

/// Render computed statements in the requested format.
pub fn render(statements: &[StatementResult], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(statements
            .iter()
            .map(render_plain_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(statements)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Full run: read inputs, compute, render.
pub fn run(args: &Args) -> anyhow::Result<String> {
    let rules = args.pricing_rules()?;
    let plays_json = read(&args.plays)?;
    let invoices_json = read(&args.invoices)?;

    let statements = compute_all(&plays_json, &invoices_json, &rules)?;
    render(&statements, args.format())
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
