#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc)]

use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use centerpane_layouts::DefaultLayout;
use centerpane_layouts::LayoutCommand;
use centerpane_layouts::PersistedState;
use centerpane_layouts::WindowId;

use crate::config::StaticConfig;
use crate::request::CommandInput;
use crate::request::FramesInput;
use crate::request::UpdateInput;

mod config;
mod request;

#[derive(Parser)]
#[clap(author, about, version)]
struct Opts {
    /// Layout to drive (overrides the configuration file)
    #[clap(long, global = true, value_enum)]
    layout: Option<DefaultLayout>,
    /// Path to a static configuration file (centerpane.json or centerpane.yaml)
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
struct Input {
    /// Read the JSON payload from this file instead of stdin
    #[clap(long)]
    input: Option<PathBuf>,
}

#[derive(Parser)]
struct RunCommand {
    /// Command to apply
    #[clap(value_enum)]
    command: LayoutCommand,
    /// Id of the focused window, used by setFocusedAsMain
    #[clap(long, value_parser = WindowId::from_str)]
    focused: Option<WindowId>,
    /// Read the persisted state from this file instead of stdin
    #[clap(long)]
    input: Option<PathBuf>,
}

#[derive(Parser)]
enum SubCommand {
    /// List the available layouts
    Layouts,
    /// Show the initial state of the layout
    InitialState,
    /// Show the command table of the layout
    Commands,
    /// Compute frames from {"windows", "screenFrame", "state"}
    Frames(Input),
    /// Reduce {"change", "state"} into the next state
    Update(Input),
    /// Apply a command to a persisted state
    Command(RunCommand),
    /// Answer line-delimited JSON requests on stdin until it closes
    Serve,
    /// Generate JSON schemas for the persisted state, screen frames and configuration file
    #[cfg(feature = "schemars")]
    Schema,
}

fn setup(config: &StaticConfig) -> Result<Option<WorkerGuard>> {
    color_eyre::install()?;

    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries responses
    let stderr = tracing_subscriber::fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let (file, guard) = match &config.log_file {
        Some(path) => {
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map_or_else(|| PathBuf::from("centerpane.log"), PathBuf::from);

            let appender = tracing_appender::rolling::never(directory, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            (
                Some(
                    tracing_subscriber::fmt::Layer::default()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(filter()),
                ),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(stderr).with(file).try_init()?;

    // https://github.com/tokio-rs/tracing/blob/master/examples/examples/panic_hook.rs
    std::panic::set_hook(Box::new(|panic| {
        if let Some(location) = panic.location() {
            tracing::error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            tracing::error!(message = %panic);
        }
    }));

    Ok(guard)
}

fn read_input<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read input file {}", path.display()))?,
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .wrap_err("could not read input from stdin")?;
            content
        }
    };

    serde_json::from_str(&content).wrap_err("could not decode input")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    let config = StaticConfig::load(opts.config.as_deref())?;

    // File logging worker guard has to have an assignment in the main fn to work
    let _guard = setup(&config)?;

    let layout = config.layout(opts.layout);
    tracing::debug!("using layout: {}", layout.name());

    match opts.subcmd {
        SubCommand::Layouts => {
            for kind in DefaultLayout::iter() {
                println!("{kind}: {}", kind.name());
            }
        }
        SubCommand::InitialState => {
            print_json(&layout.initial_state())?;
        }
        SubCommand::Commands => {
            print_json(&request::command_table(&layout))?;
        }
        SubCommand::Frames(arg) => {
            let input: FramesInput = read_input(arg.input.as_deref())?;
            print_json(&input.frames(&layout))?;
        }
        SubCommand::Update(arg) => {
            let input: UpdateInput = read_input(arg.input.as_deref())?;
            print_json(&input.update(&layout))?;
        }
        SubCommand::Command(arg) => {
            let state: PersistedState = read_input(arg.input.as_deref())?;
            let input = CommandInput {
                command: arg.command,
                state,
                focused_id: arg.focused,
            };

            print_json(&input.run(&layout))?;
        }
        SubCommand::Serve => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            request::serve(&layout, stdin.lock(), stdout.lock())?;
        }
        #[cfg(feature = "schemars")]
        SubCommand::Schema => {
            let state = schemars::schema_for!(PersistedState);
            let screen_frame = schemars::schema_for!(centerpane_layouts::Rect);
            let config = schemars::schema_for!(StaticConfig);

            let schemas = serde_json::json!({
                "state": state,
                "screenFrame": screen_frame,
                "config": config,
            });

            print_json(&schemas)?;
        }
    }

    Ok(())
}
