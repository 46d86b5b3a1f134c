//! Command execution.
//!
//! Each command loads the whole data file, works on it in memory and writes
//! it back only when something changed. User-facing text goes to `out`.

use std::io::Write;

use tracing::{info, warn};

use super::{AddCommand, Command, ConfigCommand, DisplayCommand, SelectCommand};
use crate::config::Config;
use crate::error::Result;
use crate::presenter::{indexed, render};
use crate::record::TrainRecord;
use crate::repository::Insertion;
use crate::storage::Store;

/// Notice printed when the train being added is already recorded.
pub const DUPLICATE_NOTICE: &str = "Train already added.";

/// Run `command` against the data directory in `config`.
///
/// # Errors
///
/// Returns an error if the data file cannot be read, parsed or written, or
/// if writing to `out` fails.
pub fn dispatch(command: &Command, config: &Config, out: &mut impl Write) -> Result<()> {
    let store = Store::new(config.data_dir());
    match command {
        Command::Add(cmd) => handle_add(&store, cmd, out),
        Command::Select(cmd) => handle_select(&store, cmd, out),
        Command::Display(cmd) => handle_display(&store, cmd, out),
        Command::Config(cmd) => handle_config(config, cmd, out),
    }
}

fn handle_add(store: &Store, cmd: &AddCommand, out: &mut impl Write) -> Result<()> {
    let mut trains = store.load(&cmd.filename)?;

    let record = TrainRecord::new(
        &cmd.departure_point,
        &cmd.number_train,
        &cmd.time_departure,
        &cmd.destination,
    );
    if !record.has_clock_time() {
        warn!(
            "Departure time {:?} is not HH:MM; trains are ordered by plain text comparison",
            record.time_departure
        );
    }

    match trains.insert_sorted(record) {
        Insertion::Added { position } => {
            store.save(&cmd.filename, &trains)?;
            info!(
                "Added train at position {} of {} in {}",
                position + 1,
                trains.len(),
                cmd.filename
            );
        }
        Insertion::Duplicate => writeln!(out, "{DUPLICATE_NOTICE}")?,
    }
    Ok(())
}

fn handle_select(store: &Store, cmd: &SelectCommand, out: &mut impl Write) -> Result<()> {
    let trains = store.load(&cmd.filename)?;
    let destination = cmd.point_user.to_lowercase();
    let selected = trains.filter_by_destination(&destination);
    write!(out, "{}", render(indexed(selected)))?;
    Ok(())
}

fn handle_display(store: &Store, cmd: &DisplayCommand, out: &mut impl Write) -> Result<()> {
    let trains = store.load(&cmd.filename)?;
    write!(out, "{}", render(indexed(&trains)))?;
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand, out: &mut impl Write) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
            } else {
                writeln!(out, "Current Configuration")?;
                writeln!(out, "=====================")?;
                writeln!(out)?;
                writeln!(out, "[Storage]")?;
                writeln!(out, "  Data directory:     {}", config.data_dir().display())?;
            }
        }
        ConfigCommand::Path => {
            writeln!(out, "{}", Config::default_config_path().display())?;
        }
        ConfigCommand::Validate { file } => {
            let path = file.clone().unwrap_or_else(Config::default_config_path);
            writeln!(out, "Validating configuration: {}", path.display())?;
            match Config::load_from(Some(path)) {
                Ok(_) => writeln!(out, "Configuration is valid.")?,
                Err(e) => writeln!(out, "Configuration error: {e}")?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::logging::init_test_logging;
    use std::fs;
    use tempfile::TempDir;

    fn setup(content: &str) -> (TempDir, Config) {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("trains.json"), content).unwrap();
        let config = Config::default().with_data_dir(dir.path());
        (dir, config)
    }

    fn add(time: &str, destination: &str) -> Command {
        Command::Add(AddCommand {
            filename: "trains.json".to_string(),
            departure_point: "Moscow".to_string(),
            number_train: "A1".to_string(),
            time_departure: time.to_string(),
            destination: destination.to_string(),
        })
    }

    fn run(command: &Command, config: &Config) -> Result<String> {
        let mut out = Vec::new();
        dispatch(command, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_writes_file() {
        let (dir, config) = setup("[]");
        let output = run(&add("08:00", "Kazan"), &config).unwrap();
        assert!(output.is_empty());

        let content = fs::read_to_string(dir.path().join("trains.json")).unwrap();
        assert!(content.contains("\"kazan\""));
    }

    #[test]
    fn test_add_duplicate_prints_notice_and_keeps_file() {
        let (dir, config) = setup("[]");
        run(&add("08:00", "Kazan"), &config).unwrap();
        let before = fs::read_to_string(dir.path().join("trains.json")).unwrap();

        let output = run(&add("08:00", "Kazan"), &config).unwrap();
        assert_eq!(output, format!("{DUPLICATE_NOTICE}\n"));
        let after = fs::read_to_string(dir.path().join("trains.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_add_duplicate_does_not_rewrite_file() {
        let (dir, config) = setup("[]");
        run(&add("08:00", "Kazan"), &config).unwrap();

        // Compact formatting is only kept if nothing rewrites the file.
        let compact = r#"[{"departure_point":"moscow","number_train":"a1","time_departure":"08:00","destination":"kazan"}]"#;
        fs::write(dir.path().join("trains.json"), compact).unwrap();
        run(&add("08:00", "Kazan"), &config).unwrap();

        let content = fs::read_to_string(dir.path().join("trains.json")).unwrap();
        assert_eq!(content, compact);
    }

    #[test]
    fn test_add_accepts_non_clock_time() {
        let (_dir, config) = setup("[]");
        assert!(run(&add("morning", "Kazan"), &config).is_ok());
    }

    #[test]
    fn test_add_missing_file() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let config = Config::default().with_data_dir(dir.path());
        let err = run(&add("08:00", "Kazan"), &config).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(!dir.path().join("trains.json").exists());
    }

    #[test]
    fn test_select_malformed_file() {
        let (_dir, config) = setup("not json");
        let command = Command::Select(SelectCommand {
            filename: "trains.json".to_string(),
            point_user: "Ufa".to_string(),
        });
        assert!(run(&command, &config).unwrap_err().is_parse_error());
    }

    #[test]
    fn test_display_empty() {
        let (_dir, config) = setup("[]");
        let command = Command::Display(DisplayCommand {
            filename: "trains.json".to_string(),
        });
        let output = run(&command, &config).unwrap();
        assert_eq!(output, format!("{}\n", crate::presenter::EMPTY_MESSAGE));
    }

    #[test]
    fn test_config_show_plain() {
        let config = Config::default().with_data_dir("/srv/trains");
        let output = run(&Command::Config(ConfigCommand::Show { json: false }), &config).unwrap();
        assert!(output.contains("/srv/trains"));
    }

    #[test]
    fn test_config_show_json() {
        let config = Config::default();
        let output = run(&Command::Config(ConfigCommand::Show { json: true }), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["storage"]["data_dir"], "data");
    }

    #[test]
    fn test_config_path() {
        let output = run(&Command::Config(ConfigCommand::Path), &Config::default()).unwrap();
        assert!(output.trim_end().ends_with("config.toml"));
    }
}
