use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use eyre::Result;

use geraete_checklist::{ChecklistSchema, ChecklistWorkflow};
use geraete_cli::commands::{self, CommandOutput};
use geraete_cli::config::{self, CheckConfig};
use geraete_cli::{input, logging};
use geraete_core::models::{RawAnswers, RawMeta};
use geraete_export::DirectoryExporter;
use geraete_export::styles::DocumentStyles;
use geraete_storage::FileStore;

#[derive(Parser)]
#[command(name = "geraete-check", version)]
#[command(about = "Prüfliste für aufbereitete Geräte: erfassen, prüfen, speichern, exportieren")]
struct Cli {
    /// Config file (default: <config dir>/geraete-check/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory for saved records
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Directory for exported files
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,
    /// JSON item list replacing the built-in checklist
    #[arg(long, global = true)]
    schema: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Emit logs as JSON lines
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the checklist items (* = required)
    Items {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Validate and save a check locally
    Save(SessionArgs),
    /// Export a check as JSON, even with open required items
    Export {
        #[command(flatten)]
        session: SessionArgs,
        /// Also write a DOCX protocol
        #[arg(long, default_value_t = false)]
        docx: bool,
    },
    /// Show a saved check
    Show {
        device: String,
        date: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List saved checks
    List,
    /// Read or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args)]
struct SessionArgs {
    #[arg(long, default_value = "")]
    device: String,
    #[arg(long)]
    tester: Option<String>,
    /// YYYY-MM-DD, defaults to today
    #[arg(long, default_value = "")]
    date: String,
    /// <item-id>=<ja|nein|n/a>, repeatable
    #[arg(long = "answer")]
    answers: Vec<String>,
    /// <item-id>=<text>, repeatable
    #[arg(long = "note")]
    notes: Vec<String>,
    /// JSON object of item id -> {result, notes}
    #[arg(long)]
    answers_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ConfigCommand {
    Show,
    Set {
        #[arg(value_enum)]
        key: ConfigKey,
        value: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConfigKey {
    DataDir,
    ExportDir,
    TesterName,
    SchemaPath,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    let output = run(&cli, config, &config_path)?;
    if !output.text.is_empty() {
        if output.success {
            println!("{}", output.text);
        } else {
            eprintln!("{}", output.text);
        }
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(cli: &Cli, mut config: CheckConfig, config_path: &Path) -> Result<CommandOutput> {
    match &cli.command {
        Command::Config { command } => run_config(command, &mut config, config_path),
        Command::Items { json } => commands::list_items(&build_workflow(cli, &config)?, *json),
        Command::Save(session) => {
            let workflow = build_workflow(cli, &config)?;
            let (answers, meta) = session_input(session, &config)?;
            let mut store = FileStore::new(data_dir(cli, &config)?);
            commands::save(&workflow, &mut store, &answers, &meta)
        }
        Command::Export { session, docx } => {
            let workflow = build_workflow(cli, &config)?;
            let (answers, meta) = session_input(session, &config)?;
            let export_dir = cli.export_dir.clone().unwrap_or_else(|| config.export_dir());
            tracing::debug!(export_dir = %export_dir.display(), "exporting");
            let mut exporter = DirectoryExporter::new(export_dir);
            let styles = DocumentStyles::default();
            commands::export(
                &workflow,
                &mut exporter,
                &answers,
                &meta,
                docx.then_some(&styles),
            )
        }
        Command::Show { device, date, json } => {
            let workflow = build_workflow(cli, &config)?;
            let store = FileStore::new(data_dir(cli, &config)?);
            commands::show(&workflow, &store, device, date, *json)
        }
        Command::List => commands::list(&FileStore::new(data_dir(cli, &config)?)),
    }
}

fn data_dir(cli: &Cli, config: &CheckConfig) -> Result<PathBuf> {
    let dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.data_dir()?,
    };
    tracing::debug!(data_dir = %dir.display(), "using record directory");
    Ok(dir)
}

fn build_workflow(cli: &Cli, config: &CheckConfig) -> Result<ChecklistWorkflow> {
    let schema = match cli.schema.as_ref().or(config.schema_path.as_ref()) {
        Some(path) => {
            let bytes = std::fs::read(path)
                .map_err(|e| eyre::eyre!("failed to read schema {}: {e}", path.display()))?;
            let schema = ChecklistSchema::from_json(&bytes)?;
            tracing::info!(path = %path.display(), items = schema.len(), "custom schema loaded");
            schema
        }
        None => ChecklistSchema::default_device_check(),
    };
    Ok(ChecklistWorkflow::new(schema))
}

fn session_input(session: &SessionArgs, config: &CheckConfig) -> Result<(RawAnswers, RawMeta)> {
    let answers = input::build_raw_answers(
        session.answers_file.as_deref(),
        &session.answers,
        &session.notes,
    )?;
    let tester = session
        .tester
        .clone()
        .or_else(|| config.tester_name.clone())
        .unwrap_or_default();
    Ok((answers, RawMeta::new(&session.device, tester, &session.date)))
}

fn run_config(
    command: &ConfigCommand,
    config: &mut CheckConfig,
    config_path: &Path,
) -> Result<CommandOutput> {
    match command {
        ConfigCommand::Show => Ok(CommandOutput {
            text: format!(
                "# {}\n{}",
                config_path.display(),
                serde_json::to_string_pretty(config)?
            ),
            success: true,
        }),
        ConfigCommand::Set { key, value } => {
            match key {
                ConfigKey::DataDir => config.data_dir = Some(PathBuf::from(value)),
                ConfigKey::ExportDir => config.export_dir = Some(PathBuf::from(value)),
                ConfigKey::TesterName => config.tester_name = Some(value.clone()),
                ConfigKey::SchemaPath => config.schema_path = Some(PathBuf::from(value)),
            }
            config::save_config(config_path, config)?;
            Ok(CommandOutput {
                text: format!(
                    "{} gespeichert in {}",
                    key.to_possible_value()
                        .map(|v| v.get_name().to_string())
                        .unwrap_or_default(),
                    config_path.display()
                ),
                success: true,
            })
        }
    }
}
