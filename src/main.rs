//! Command-line entry point.
//!
//! This binary is the presentation surface for the library: it performs the
//! single load, then either renders one page and exits, or runs a line-based
//! interactive session that feeds events into the dispatch table.
//!
//! # Lifecycle
//!
//! 1. **Parse**: CLI flags, then the config file, flags winning
//! 2. **Trace**: install the subscriber (stderr, optional OTLP file)
//! 3. **Load**: one read from the endpoint or `--file`; failure switches the
//!    session to its error view
//! 4. **Surface**: one-shot render, or the interactive loop
//!
//! # Interactive Commands
//!
//! - `type <text>`: set the search field (live search rules apply)
//! - `search [<text>]`: optionally set the field, then press the search button
//! - `open <name>`: activate the card with that exact building name
//! - `help`: list commands
//! - `quit`: leave
//!
//! # Action Mapping
//!
//! - `ScrollToResults` → results summary is reprinted
//! - `ShowDetails` → details printed
//! - `ConfirmDirections` → details printed with a `[y/N]` prompt
//! - `OpenExternal` → URL opened in the default browser

#![allow(clippy::multiple_crate_versions)]

use campusnav::loader::{BuildingSource, FileSource, HttpSource};
use campusnav::observability::init_tracing;
use campusnav::ui::ResultsBody;
use campusnav::{
    handle_event, initialize, render_page, Action, AppState, Config, Event, LoadError,
    NavigateError, Result, Theme,
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Config file (default: platform config dir/campusnav/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Building list URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Read the building list from a JSON file instead of the endpoint
    #[arg(short, long, conflicts_with = "endpoint")]
    file: Option<PathBuf>,

    /// Where to write the rendered page ("-" for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Built-in theme (uncp, high-contrast)
    #[arg(short, long)]
    theme: Option<String>,

    /// Apply this search before rendering
    #[arg(short, long)]
    query: Option<String>,

    /// Read commands from stdin instead of rendering once
    #[arg(short, long)]
    interactive: bool,
}

impl Cli {
    fn apply_to(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(theme) = &self.theme {
            config.theme = Some(theme.clone());
            config.theme_file = None;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("campusnav: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    let _guard = init_tracing(&config);
    tracing::debug!(?config, "configuration resolved");

    let source: std::result::Result<Box<dyn BuildingSource>, LoadError> = match &cli.file {
        Some(path) => Ok(Box::new(FileSource::new(path.clone()))),
        None => HttpSource::new(config.endpoint.clone())
            .map(|source| Box::new(source) as Box<dyn BuildingSource>),
    };

    let state = load_state(source).await;
    let mut surface = Surface {
        state,
        theme: config.resolve_theme(),
        output: config.output.clone(),
    };

    if let Some(query) = &cli.query {
        handle_event(&mut surface.state, &Event::InputChanged(query.clone()));
        handle_event(&mut surface.state, &Event::SearchClicked);
    }

    if cli.interactive {
        surface.render()?;
        surface.run_interactive(&mut io::stdin().lock())
    } else {
        surface.write_page()
    }
}

/// Runs the single load, or enters the error phase if the source could not be set up.
async fn load_state(source: std::result::Result<Box<dyn BuildingSource>, LoadError>) -> AppState {
    match source {
        Ok(source) => initialize(source.as_ref()).await,
        Err(e) => {
            tracing::error!(error = %e, "failed to set up building source");
            AppState::failed(&e)
        }
    }
}

/// Terminal presentation surface.
struct Surface {
    state: AppState,
    theme: Theme,
    output: PathBuf,
}

enum Command {
    Type(String),
    Search(Option<String>),
    Open(String),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        Some(match verb {
            "type" => Self::Type(rest.to_string()),
            "search" if rest.is_empty() => Self::Search(None),
            "search" => Self::Search(Some(rest.to_string())),
            "open" => Self::Open(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(verb.to_string()),
        })
    }
}

const HELP: &str = "\
commands:
  type <text>       set the search field
  search [<text>]   search (optionally setting the field first)
  open <name>       show details for a building
  help              show this help
  quit              leave";

impl Surface {
    fn run_interactive(&mut self, input: &mut impl BufRead) -> Result<()> {
        println!("{HELP}");

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(());
            };

            let event = match Command::parse(&line) {
                None => continue,
                Some(Command::Quit) => return Ok(()),
                Some(Command::Help) => {
                    println!("{HELP}");
                    continue;
                }
                Some(Command::Unknown(verb)) => {
                    println!("unknown command '{verb}', try 'help'");
                    continue;
                }
                Some(Command::Type(text)) => Event::InputChanged(text),
                Some(Command::Search(text)) => {
                    if let Some(text) = text {
                        self.state.input = text;
                    }
                    Event::SearchClicked
                }
                Some(Command::Open(name)) => Event::CardClicked { building_id: name },
            };

            if let Err(e) = self.dispatch(&event, input) {
                tracing::warn!(error = %e, "command failed");
                println!("{e}");
            }
        }
    }

    /// Runs one event through the handler, then renders and executes actions.
    fn dispatch(&mut self, event: &Event, input: &mut impl BufRead) -> Result<()> {
        let (render, actions) = handle_event(&mut self.state, event);
        if render {
            self.render()?;
        }
        for action in actions {
            self.execute_action(action, input)?;
        }
        Ok(())
    }

    fn execute_action(&mut self, action: Action, input: &mut impl BufRead) -> Result<()> {
        match action {
            Action::ScrollToResults => {
                self.print_summary();
                Ok(())
            }
            Action::ShowDetails(details) => {
                println!("\n{details}\n");
                Ok(())
            }
            Action::ConfirmDirections { details, url } => {
                println!("\n{details}");
                print!("[y/N] ");
                io::stdout().flush()?;

                let answer = read_line(input)?.unwrap_or_default();
                if matches!(answer.trim(), "y" | "Y" | "yes") {
                    self.dispatch(&Event::DirectionsConfirmed { url }, input)
                } else {
                    Ok(())
                }
            }
            Action::OpenExternal { url } => open::that(&url).map_err(|e| {
                NavigateError::Surface(format!("could not open {url}: {e}"))
            }),
        }
    }

    fn render(&self) -> Result<()> {
        self.write_page()?;
        if self.output != Path::new("-") {
            println!("{}", self.state.view_model().title);
        }
        Ok(())
    }

    fn print_summary(&self) {
        match self.state.view_model().body {
            ResultsBody::Groups(groups) => {
                for group in groups {
                    println!("  {} ({})", group.kind, group.count);
                    for card in group.cards {
                        println!("    {}", card.name);
                    }
                }
            }
            ResultsBody::NoResults { query } => {
                println!("  No buildings match your search for \"{query}\".");
            }
            ResultsBody::Error { message } => println!("  {message}"),
        }
    }

    fn write_page(&self) -> Result<()> {
        let html = render_page(&self.state.view_model(), &self.theme);

        if self.output == Path::new("-") {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        } else {
            std::fs::write(&self.output, html)?;
            tracing::debug!(path = %self.output.display(), "page written");
        }
        Ok(())
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusnav::loader::StaticSource;
    use campusnav::Phase;

    #[tokio::test]
    async fn source_setup_failure_enters_error_phase() {
        let state = load_state(Err(LoadError::Decode("no TLS backend".to_string()))).await;

        assert!(matches!(state.phase, Phase::Error { ref message } if message.contains("no TLS backend")));
        assert!(matches!(state.view_model().body, ResultsBody::Error { .. }));
        assert_eq!(state.view_model().title, "Campus Locations");
    }

    #[tokio::test]
    async fn built_source_is_loaded() {
        let source: Box<dyn BuildingSource> =
            Box::new(StaticSource::new(r#"[{"name": "Old Main", "type": "Landmark"}]"#));
        let state = load_state(Ok(source)).await;

        assert!(state.phase.is_loaded());
        assert_eq!(state.working_set().len(), 1);
    }

    #[test]
    fn commands_parse_verbs_and_arguments() {
        assert!(Command::parse("  ").is_none());
        assert!(matches!(Command::parse("search"), Some(Command::Search(None))));
        assert!(matches!(
            Command::parse("open Old Main"),
            Some(Command::Open(ref name)) if name == "Old Main"
        ));
        assert!(matches!(Command::parse("q"), Some(Command::Quit)));
    }
}
