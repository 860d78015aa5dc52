use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::TaskTracker;
use crate::errors::{AppError, AppResult};
use crate::export::json::{history_to_json, write_json};
use crate::export::tsv::write_tsv;
use crate::export::{ExportFormat, notify_export_success};
use crate::platform::clipboard::SystemClipboard;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Track {
        tasks,
        format,
        out,
        copy,
    } = cmd
    {
        let mut tracker = TaskTracker::new();
        for spec in tasks {
            let (project, ticket, description) = parse_task_spec(spec)?;
            tracker.start(project, ticket)?;
            tracker.complete(description)?;
        }

        if *copy {
            // Clipboard failure stays a logged warning; the export below
            // still happens.
            tracker.copy_to_clipboard(&mut SystemClipboard::new());
        }

        match out {
            Some(file) => {
                let path = Path::new(file);
                match format {
                    ExportFormat::Tsv => write_tsv(path, tracker.history())?,
                    ExportFormat::Json => write_json(path, tracker.history())?,
                }
                notify_export_success(format.as_str(), path);
            }
            None => match format {
                ExportFormat::Tsv => print!("{}", tracker.export_tsv()?),
                ExportFormat::Json => println!("{}", history_to_json(tracker.history())?),
            },
        }

        success(format!("Tracked {} task(s)", tracker.history().len()));
    }
    Ok(())
}

/// Task specs come in as `project,ticket,description`; the description may
/// itself contain commas.
fn parse_task_spec(spec: &str) -> AppResult<(&str, &str, &str)> {
    let mut parts = spec.splitn(3, ',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(project), Some(ticket), Some(description)) if !project.trim().is_empty() => {
            Ok((project.trim(), ticket.trim(), description.trim()))
        }
        _ => Err(AppError::InvalidTask(format!(
            "expected \"project,ticket,description\", got \"{spec}\""
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_spec_allows_commas_in_description() {
        let (p, t, d) = parse_task_spec("Alpha,T-1,Fixed bug, twice").unwrap();
        assert_eq!(p, "Alpha");
        assert_eq!(t, "T-1");
        assert_eq!(d, "Fixed bug, twice");
    }

    #[test]
    fn task_spec_requires_three_fields() {
        assert!(parse_task_spec("Alpha,T-1").is_err());
        assert!(parse_task_spec(",T-1,desc").is_err());
    }
}
