use std::io::{self, Write};
use std::path::Path;

use audiohost::config::Settings;
use audiohost::logging::{init_tracing, startup_subscriber};
use audiohost::options::{app_options, AppOption, OptionRegistry, OptionsError, Tokens};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let tokens = Tokens::from_args(std::env::args());

    let startup = startup_subscriber(&settings.logging.filter);
    let loaded = tracing::subscriber::with_default(startup, || load_options(&tokens));

    let options = match loaded {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let log_file = options
        .get_string(AppOption::LogFile.index())
        .filter(|s| !s.is_empty())
        .map(Path::new);
    init_tracing(&log_filter(&options, &settings), log_file)?;

    let layout = settings.help.layout();
    let mut stdout = io::stdout().lock();

    if options.is_enabled(AppOption::Version.index()) {
        writeln!(stdout, "audiohost {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    if tokens.is_empty() || options.is_enabled(AppOption::Help.index()) {
        match options
            .get_string(AppOption::Help.index())
            .filter(|s| !s.is_empty())
        {
            Some(name) => options.print_help_for(&mut stdout, name, &layout)?,
            None => {
                writeln!(stdout, "Usage: audiohost [options]\n\nOptions:")?;
                options.print_help(&mut stdout, true, &layout)?;
            }
        }
        return Ok(());
    }

    for entry in options.entries().filter(|e| e.is_enabled()) {
        tracing::info!(option = entry.name(), value = ?entry.value(), "Option set");
    }

    Ok(())
}

/// Parse the command line, then the config file it names, if any.
fn load_options(tokens: &Tokens) -> Result<OptionRegistry, OptionsError> {
    let mut options = app_options()?;
    options.parse(tokens)?;

    if options.is_enabled(AppOption::ConfigFile.index()) {
        let path = options
            .get_string(AppOption::ConfigFile.index())
            .unwrap_or_default()
            .to_string();
        options.parse_config_file(Path::new(&path))?;
    }

    Ok(options)
}

fn log_filter(options: &OptionRegistry, settings: &Settings) -> String {
    match options.get_string(AppOption::LogLevel.index()) {
        Some(level) if !level.is_empty() => level.to_string(),
        _ if options.is_enabled(AppOption::Verbose.index()) => "debug".to_string(),
        _ if options.is_enabled(AppOption::Quiet.index()) => "error".to_string(),
        _ => settings.logging.filter.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_and_quiet_pick_filter() {
        let settings = Settings::default();

        let mut options = app_options().unwrap();
        options.parse_args(["audiohost", "-v"]).unwrap();
        assert_eq!(log_filter(&options, &settings), "debug");

        let mut options = app_options().unwrap();
        options.parse_args(["audiohost", "--quiet"]).unwrap();
        assert_eq!(log_filter(&options, &settings), "error");

        let options = app_options().unwrap();
        assert_eq!(log_filter(&options, &settings), "info");
    }

    #[test]
    fn log_level_wins_over_verbose() {
        let mut options = app_options().unwrap();
        options
            .parse_args(["audiohost", "-v", "--log-level", "warn"])
            .unwrap();
        assert_eq!(log_filter(&options, &Settings::default()), "warn");
    }
}
