use clap::{Parser, Subcommand};
use platon_next_cli::application::parse_params;
use platon_next_cli::{ActivityRunner, CliError, LogConfig, Result, StateStore};
use platon_next_core::{hash_params, ActivitySnapshot, GradeStrategy, NavigationCommand, SessionConfig};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "platon-next")]
#[command(version, about = "PLaTon Next - exercise navigation and grading for activities")]
struct Cli {
    /// Activity state file (JSON snapshot)
    #[arg(long, global = true, env = "PLATON_STATE", default_value = "activity.json")]
    state: PathBuf,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// No logs on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Also append logs to this file
    #[arg(long, global = true, env = "PLATON_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Seed for random exercise selection
    #[arg(long, global = true, env = "PLATON_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new activity; each --group is a comma-separated list of exercise IDs
    Init {
        #[arg(short = 'g', long = "group", required = true)]
        groups: Vec<String>,
    },

    /// Show the activity state
    Status,

    /// Switch to an exercise
    Play {
        exercise_id: String,

        /// Exercise params (JSON object)
        #[arg(short = 'p', long)]
        params: Option<String>,
    },

    /// Switch to an exercise unless it was already attempted
    PlayIfUnplayed {
        exercise_id: String,

        #[arg(short = 'p', long)]
        params: Option<String>,
    },

    /// Replay the previous exercise if it has no attempt
    Previous,

    /// Play the first unplayed exercise
    First,

    /// Play the next unplayed exercise after the previous one
    Next {
        /// Fall back to the first unplayed exercise
        #[arg(long = "loop")]
        wrap: bool,
    },

    /// Play a random exercise of the group unless one was attempted
    AnyFromGroup { group: i64 },

    /// Play the next unplayed exercise of the group
    AllFromGroup {
        group: i64,

        #[arg(long)]
        random: bool,
    },

    /// Record an attempt with its grade
    Record { exercise_id: String, grade: i64 },

    /// Compute and store the activity grade
    Grade { strategy: GradeStrategy },

    /// Generate an exercise from a template once per distinct params
    Generate {
        exercise_id: String,

        #[arg(short = 'p', long)]
        params: Option<String>,
    },

    /// End the activity
    Stop,

    /// Print the dedup hash of a generated exercise
    Hash {
        exercise_id: String,

        #[arg(short = 'p', long)]
        params: Option<String>,
    },

    /// Print the JSON schema of the state file
    Schema,
}

fn main() {
    let cli = Cli::parse();

    let mut log_config = LogConfig::default().with_level(cli.log_level);
    if cli.json_logs {
        log_config = log_config.with_json();
    }
    if cli.quiet {
        log_config = log_config.without_logs();
    }
    if let Some(path) = cli.log_file.clone() {
        log_config = log_config.with_log_file(path);
    }
    if let Err(e) = log_config.init() {
        eprintln!("{}", e);
    }

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = SessionConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let runner = ActivityRunner::new(StateStore::new(cli.state), config);

    let command = match cli.command {
        Commands::Init { groups } => {
            let groups = groups
                .iter()
                .map(|group| split_group(group))
                .collect::<Result<Vec<_>>>()?;
            return print_json(&runner.init(groups)?);
        }
        Commands::Status => return print_json(&runner.status()?),
        Commands::Hash {
            exercise_id,
            params,
        } => {
            let params = parse_params(params.as_deref())?.unwrap_or_default();
            println!("{}", hash_params(&params, &exercise_id));
            return Ok(());
        }
        Commands::Schema => return print_json(&schemars::schema_for!(ActivitySnapshot)),

        Commands::Play {
            exercise_id,
            params,
        } => NavigationCommand::PlayExercise {
            exercise_id,
            params: parse_params(params.as_deref())?,
        },
        Commands::PlayIfUnplayed {
            exercise_id,
            params,
        } => NavigationCommand::PlayIfUnplayed {
            exercise_id,
            params: parse_params(params.as_deref())?,
        },
        Commands::Previous => NavigationCommand::PlayPreviousIfUnplayed,
        Commands::First => NavigationCommand::PlayFirstUnplayed,
        Commands::Next { wrap } => NavigationCommand::PlayNextUnplayed { wrap },
        Commands::AnyFromGroup { group } => NavigationCommand::PlayAnyFromGroup { group_nb: group },
        Commands::AllFromGroup { group, random } => NavigationCommand::PlayAllFromGroup {
            group_nb: group,
            random_order: random,
        },
        Commands::Record { exercise_id, grade } => {
            NavigationCommand::RecordAttempt { exercise_id, grade }
        }
        Commands::Grade { strategy } => NavigationCommand::SetActivityGrade { strategy },
        Commands::Generate {
            exercise_id,
            params,
        } => NavigationCommand::GenerateAndPlay {
            exercise_id,
            params: parse_params(params.as_deref())?,
        },
        Commands::Stop => NavigationCommand::StopActivity,
    };

    let event = runner.execute(command)?;
    print_json(&event)
}

fn split_group(group: &str) -> Result<Vec<String>> {
    let ids: Vec<String> = group
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    if ids.is_empty() {
        return Err(CliError::InvalidConfig(format!("empty group '{}'", group)));
    }
    Ok(ids)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
