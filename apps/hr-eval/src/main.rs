//! hr-eval — score a heroes routing submission.
//!
//! Loads the instance CSVs from `--data`, normalizes and replays the
//! submission, and prints the score with its breakdown.  Optional outputs:
//! the expanded legs, the normalized submission, and a JSON timeline for
//! the journey viewer (always horizon-truncated).
//!
//! ```text
//! hr-eval --data data/ --submission sample_submit.csv --expanded expanded.csv
//! ```
//!
//! Logging goes through `env_logger`; the default level is `info` and can be
//! overridden with `RUST_LOG`.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use hr_data::load_instance_dir;
use hr_output::{CsvLegWriter, LegWriter, build_timeline, write_assignments_csv, write_timeline_json};
use hr_sim::{SimContext, evaluate, expand, read_submission_csv, summarize_by_hero};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding data_heroes.csv, data_objects.csv, dist_start.csv
    /// and dist_objects.csv.
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Submission CSV with `hero_id` and `object_id` columns.
    #[arg(short, long)]
    submission: PathBuf,

    /// Write the expanded legs to this CSV file.
    #[arg(long)]
    expanded: Option<PathBuf>,

    /// Drop legs arriving after day 7 from the expanded CSV.
    #[arg(long)]
    truncate: bool,

    /// Write the normalized submission to this CSV file.
    #[arg(long)]
    normalized: Option<PathBuf>,

    /// Write the journey timeline (days 1–7 only) to this JSON file.
    #[arg(long)]
    timeline: Option<PathBuf>,

    /// Print a per-hero table.
    #[arg(long)]
    per_hero: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // 1. Reference data.
    let instance = load_instance_dir(&cli.data)
        .with_context(|| format!("loading instance from {}", cli.data.display()))?;
    let ctx = SimContext::from(&instance);

    // 2. Submission.
    let raw = read_submission_csv(&cli.submission)
        .with_context(|| format!("reading submission {}", cli.submission.display()))?;
    info!("read {} submission rows", raw.len());

    // 3. Evaluate.
    let t0 = Instant::now();
    let eval = evaluate(ctx, &raw);
    info!("replayed {} legs in {:.3} ms", eval.legs.len(), t0.elapsed().as_secs_f64() * 1e3);

    // 4. Outputs.
    if let Some(path) = &cli.normalized {
        write_assignments_csv(path, &eval.assignments)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("normalized submission: {} rows → {}", eval.assignments.len(), path.display());
    }

    if let Some(path) = &cli.expanded {
        let legs = if cli.truncate { expand(ctx, &eval.assignments, true) } else { eval.legs.clone() };
        let mut w = CsvLegWriter::from_path(path)
            .with_context(|| format!("writing {}", path.display()))?;
        w.write_legs(&legs)?;
        w.finish()?;
        info!("expanded legs: {} rows → {}", legs.len(), path.display());
    }

    if let Some(path) = &cli.timeline {
        let shown = expand(ctx, &eval.assignments, true);
        let timeline = build_timeline(&instance.catalog, &shown)?;
        write_timeline_json(path, &timeline)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("timeline: {} journeys → {}", timeline.journeys.len(), path.display());
    }

    // 5. Report.
    let b = eval.breakdown;
    println!("Legs          : {} ({} early, {} late)", b.legs, b.early_legs, b.late_legs);
    println!("Total reward  : {} of {} available", b.total_reward, instance.catalog.total_reward());
    match b.max_hero_id {
        Some(id) => println!("Hero cost     : {} (up to hero {})", b.hero_cost, id.get()),
        None => println!("Hero cost     : 0"),
    }
    println!("Score         : {}", b.score);

    if cli.per_hero {
        println!();
        println!("{:<6} {:>5} {:>8} {:>6} {:>5} {:>9} {:>6}", "Hero", "Legs", "Reward", "Early", "Late", "Burned", "Day");
        println!("{}", "-".repeat(53));
        for s in summarize_by_hero(&eval.legs) {
            println!(
                "{:<6} {:>5} {:>8} {:>6} {:>5} {:>9} {:>6}",
                s.hero.get(),
                s.legs,
                s.reward,
                s.early_legs,
                s.late_legs,
                s.burned,
                s.final_day,
            );
        }
    }

    Ok(())
}
