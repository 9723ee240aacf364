mod report;
mod text;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashboard_core::{load_settings, DashboardController, PanelToggle};
use serde::Serialize;
use shared::{
    domain::CandidateId,
    error::{DashboardError, ErrorPayload},
    forms::JobPostingForm,
};
use tracing_subscriber::EnvFilter;

use crate::report::{JobPostedView, NotificationsView};

#[derive(Parser, Debug)]
#[command(about = "Browse the talent dashboard from a terminal")]
struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Candidates {
        #[arg(long, default_value = "")]
        search: String,
        /// all, shortlisted, ai-flagged or new. An unknown tag leaves the active filter unchanged.
        #[arg(long, default_value = "all")]
        filter: String,
    },
    Profile {
        id: i64,
    },
    PostJob {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        skills: String,
        #[arg(long, default_value = "")]
        experience: String,
    },
    Notifications {
        /// Open the panel, which marks everything read.
        #[arg(long)]
        open: bool,
        #[arg(long)]
        clear: bool,
    },
    Stats,
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let settings = load_settings().context("failed to load dashboard settings")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut controller = DashboardController::initialize(&settings);

    match cli.command {
        Command::Candidates { search, filter } => {
            controller.select_filter(&filter);
            controller.set_search_term(&search);
            if cli.json {
                print_json(&controller.grid())?;
            } else {
                print!("{}", text::render_grid(controller.grid()));
            }
        }
        Command::Profile { id } => {
            // Unknown ids print nothing.
            if let Some(summary) = controller.view_profile(CandidateId(id)) {
                if cli.json {
                    print_json(&summary)?;
                } else {
                    println!("{summary}");
                }
            }
        }
        Command::PostJob {
            title,
            department,
            description,
            skills,
            experience,
        } => {
            let form = JobPostingForm {
                title,
                department,
                description,
                skills,
                experience,
            };
            match controller.submit_job_posting(&form) {
                Ok(posting) => {
                    let view = JobPostedView::acknowledge(&mut controller, posting);
                    if cli.json {
                        print_json(&view)?;
                    } else {
                        print!("{}", text::render_job_posted(&view));
                    }
                }
                Err(err) => {
                    let err = DashboardError::from(err);
                    if cli.json {
                        print_json(&ErrorPayload::from(&err))?;
                    }
                    return Err(err.into());
                }
            }
        }
        Command::Notifications { open, clear } => {
            if open {
                if let PanelToggle::Opened { badge } = controller.toggle_notifications_panel() {
                    tracing::debug!(?badge, "notifications panel opened");
                }
            }
            if clear {
                controller.clear_notifications();
            }
            if cli.json {
                print_json(&NotificationsView::of(&controller))?;
            } else {
                match controller.badge_count() {
                    Some(count) => println!("Notifications ({count} unread)"),
                    None => println!("Notifications"),
                }
                print!("{}", text::render_notifications(controller.notifications()));
            }
        }
        Command::Stats => {
            let mut tiles = controller.stats();
            // Nothing to animate in a terminal; jump every counter to its target.
            for tile in &mut tiles {
                tile.advance_to(Duration::MAX);
            }
            if cli.json {
                let values: Vec<(String, String)> = tiles
                    .iter()
                    .map(|tile| (tile.label.clone(), tile.display()))
                    .collect();
                print_json(&values)?;
            } else {
                print!("{}", text::render_stats(&tiles));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unknown_filter_keeps_previous_filter() {
        let help = Cli::command()
            .find_subcommand("candidates")
            .and_then(|cmd| cmd.get_arguments().find(|arg| arg.get_id() == "filter"))
            .and_then(|arg| arg.get_help().map(ToString::to_string))
            .unwrap_or_default();
        assert!(help.contains("leaves the active filter unchanged"));

        let mut controller = DashboardController::initialize(&dashboard_core::Settings::default());
        controller.select_filter("shortlisted");
        assert!(!controller.select_filter("bogus"));
        assert_eq!(controller.active_filter(), shared::domain::FilterTag::Shortlisted);
    }
}
