//! Questlog CLI - gamified tutorial progress tracker.

use anyhow::Result;
use clap::{Parser, Subcommand};
use questlog_core::{Badge, EventKind, ModuleId, StepId};
use questlog_storage::JsonStore;
use questlog_tracker::Tracker;
use tracing::Level;

#[derive(Parser)]
#[command(name = "questlog")]
#[command(about = "Track your tutorial progress, earn points, unlock badges", long_about = None)]
struct Cli {
    /// Directory holding the progress snapshot
    #[arg(long, default_value = ".questlog")]
    data_dir: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark a tutorial step complete
    Complete {
        /// Module number (1-5)
        module: u8,
        /// Step number within the module
        step: u8,
    },
    /// Show overall and per-module progress
    Status,
    /// Show the badge roster
    Badges,
    /// Reset all progress
    Reset {
        /// Skip the confirmation summary
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let store = JsonStore::new(&cli.data_dir).await?;
    let mut tracker = Tracker::open(store).await?;

    match cli.command {
        Commands::Complete { module, step } => {
            let module = ModuleId::new(module)?;
            let step = StepId::new(module, step)?;

            let events = tracker.complete_step(step).await?;
            if events.is_empty() {
                println!("Step {} is already complete.", step);
                return Ok(());
            }
            for event in &events {
                render_event(&event.kind, &tracker);
            }
        }
        Commands::Status => {
            let snapshot = tracker.snapshot();

            println!("Questlog");
            println!("  Points: {}", snapshot.total_points);
            println!("  Badges: {}/{}", snapshot.badges_unlocked, Badge::all().len());
            println!(
                "  Overall: {}/{} steps ({:.0}%)",
                snapshot.completed_steps, snapshot.total_steps, snapshot.percentage
            );
            println!();
            for row in &snapshot.modules {
                let badge = if row.badge_unlocked {
                    format!("[{}]", row.badge.title())
                } else {
                    "[locked]".to_string()
                };
                println!(
                    "  Module {} | {:<24} | {}/{} Steps Complete | {}",
                    row.module, row.title, row.completed, row.required, badge
                );
            }
        }
        Commands::Badges => {
            let badges = tracker.state().badges();
            println!("Badges ({}/{})", badges.unlocked_count(), Badge::all().len());
            for badge in Badge::all() {
                let mark = if badges.is_unlocked(badge) { "x" } else { " " };
                println!("  [{}] {} ({})", mark, badge.title(), badge);
            }
        }
        Commands::Reset { yes } => {
            if !yes {
                println!("Reset your progress? This will:");
                println!("  - Reset all points to 0");
                println!("  - Remove all badges");
                println!("  - Mark all steps as incomplete");
                println!();
                println!("Run again with --yes to confirm.");
                return Ok(());
            }
            tracker.reset().await?;
            println!("Progress reset. Your quest starts fresh, good luck!");
        }
    }

    Ok(())
}

fn render_event(kind: &EventKind, tracker: &Tracker<JsonStore>) {
    match kind {
        EventKind::StepCompleted { step, points } => {
            println!("Step {} complete: +{} points!", step, points);
        }
        EventKind::BadgeUnlocked { badge } => {
            println!("Badge unlocked: {}!", badge.title());
        }
        EventKind::AllBadgesUnlocked => {
            println!();
            println!("All badges unlocked - you finished the whole tutorial!");
            println!("Final score: {} points.", tracker.state().total_points());
        }
        EventKind::Reset => {
            println!("Progress reset.");
        }
    }
}
