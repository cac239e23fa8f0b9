mod db;
mod error;
mod metrics;
mod output;
mod parser;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use metrics::{new_run_id, DegradationTracker};
use parser::config::ExtractorConfig;
use parser::region::RegionId;
use parser::segment::segment_regions;
use settings::Settings;

#[derive(Parser)]
#[command(name = "ris3_domains", about = "Regional RIS3 specialization domains from the NRIS3 annex")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract all regions and write the JSON catalog
    Parse {
        /// Plain text of the annex (or RIS3_INPUT)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Second text conversion to cross-check names against
        #[arg(short, long)]
        reference: Option<PathBuf>,
        /// Output directory (default: data)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Also store the catalog in this SQLite file
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Show where each region's slice starts and how long it is
    Segments {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print how every line of one region's domain sections is classified
    Trace {
        /// Region name, e.g. "Zlínský kraj" or just "Zlínský"
        #[arg(long)]
        region: String,
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let config = ExtractorConfig::nris3();

    match cli.command {
        Commands::Parse {
            input,
            reference,
            out_dir,
            db,
        } => {
            let settings = Settings::load()?.override_with(Settings {
                input,
                reference,
                out_dir,
                db_path: db,
            });
            run_parse(&settings, &config)?;
        }
        Commands::Segments { input } => {
            let settings = Settings::load()?.override_with(Settings {
                input,
                ..Default::default()
            });
            let document = output::read_text(settings.input()?)?;
            let segmentation = segment_regions(&document, &config.anchors);

            println!("{:<22} | {:>9} | {:>9}", "Region", "Offset", "Bytes");
            println!("{}", "-".repeat(46));
            for slice in &segmentation.slices {
                println!("{:<22} | {:>9} | {:>9}", slice.region.name(), slice.start, slice.len());
            }
            for degradation in &segmentation.degradations {
                println!("! {degradation}");
            }
        }
        Commands::Trace { region, input } => {
            let id = RegionId::from_name(&region).with_context(|| format!("unknown region {region:?}"))?;
            let settings = Settings::load()?.override_with(Settings {
                input,
                ..Default::default()
            });
            let document = output::read_text(settings.input()?)?;
            let segmentation = segment_regions(&document, &config.anchors);
            let slice = segmentation
                .slices
                .iter()
                .find(|s| s.region == id)
                .with_context(|| format!("anchor for {id} not found in document"))?;
            let region_config = config
                .region(id)
                .with_context(|| format!("{id} is not configured"))?;

            for section in parser::regions::trace(id, slice.text(&document), region_config) {
                println!("== {} ==", section.label);
                match section.lines {
                    None => println!("(start marker not found)"),
                    Some(lines) => {
                        for (line, role) in lines {
                            println!("{:<14} {}", format!("{role:?}"), line);
                        }
                    }
                }
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn run_parse(settings: &Settings, config: &ExtractorConfig) -> anyhow::Result<()> {
    let input = settings.input()?;
    let document = output::read_text(input)?;
    info!(path = ?input, bytes = document.len(), "input loaded");

    let extraction = parser::process_document(&document, config);

    let mut tracker = DegradationTracker::new(new_run_id());
    tracker.record_all(extraction.all_degradations());

    if let Some(path) = &settings.reference {
        let reference = output::read_text(path)?;
        let report = output::cross_check(&reference, config, &extraction.regions);
        if report.is_clean() {
            info!(path = ?path, "reference text agrees");
        }
    }

    let files = output::write_outputs(&extraction.regions, &settings.out_dir())?;

    if let Some(path) = &settings.db_path {
        let mut conn = db::connect(path).with_context(|| format!("opening {path:?}"))?;
        db::init_schema(&conn)?;
        let counts = db::save_extraction(&mut conn, &extraction)?;
        tracker.persist(&conn)?;
        info!(
            run_id = tracker.run_id(),
            regions = counts.regions,
            domains = counts.domains,
            codes = counts.codes,
            emerging = counts.emerging,
            "catalog stored"
        );
    }

    println!("{:<22} | {:>6} | {:>6} | {:>8}", "Region", "Domén", "S NACE", "Emerging");
    println!("{}", "-".repeat(52));
    for outcome in &extraction.regions {
        let summary = output::RegionSummary::of(&outcome.domains);
        println!(
            "{:<22} | {:>6} | {:>6} | {:>8}",
            outcome.region.name(),
            summary.domains,
            summary.with_codes,
            outcome.emerging.len()
        );
    }

    let total: usize = extraction.regions.iter().map(|r| r.domains.len()).sum();
    println!(
        "\n{} domains in {} regions -> {}",
        total,
        extraction.regions.len(),
        files.catalog.display()
    );
    if tracker.total() > 0 {
        let kinds: Vec<String> = tracker
            .counts()
            .iter()
            .map(|(kind, n)| format!("{kind}={n}"))
            .collect();
        println!("{} degradations: {}", tracker.total(), kinds.join(", "));
    }
    Ok(())
}
