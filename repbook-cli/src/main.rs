use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use log::debug;
use std::fmt;
use std::path::PathBuf;

use repbook::logging::{init_logger, parse_level};
use repbook::metrics::estimate_one_rep_max;
use repbook::models::{FormField, SetField, Unit, parse_number};
use repbook::session::SessionStore;
use repbook::store::{get_store_path, set_store_path};

#[derive(Parser, Debug)]
#[command(version, about = "Repbook - Workout Log CLI", long_about = None)]
struct Args {
    /// Directory holding the workout ledger (defaults to $REPBOOK_STORE or ./repbook-data)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Commit a workout session
    Log {
        /// Start from the saved routine with this index
        #[arg(long)]
        routine: Option<usize>,

        #[command(flatten)]
        form: FormArgs,
    },
    /// Save or list routine templates
    Routine {
        #[command(subcommand)]
        action: RoutineCommand,
    },
    /// Show or change the weight unit for new sessions
    Unit { unit: Option<UnitArg> },
    /// List committed sessions
    History {
        /// Only sessions on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Print (exercise, best 1RM) pairs for charting
    Progress {
        #[arg(long)]
        date: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Estimate a one-rep max with the Epley formula
    Estimate { weight: String, reps: String },
}

#[derive(Subcommand, Debug)]
enum RoutineCommand {
    /// Save a routine built from the given fields
    Save {
        #[command(flatten)]
        form: FormArgs,
    },
    List,
}

#[derive(clap::Args, Debug, Clone, Default)]
struct FormArgs {
    #[arg(long)]
    day: Option<String>,

    #[arg(long)]
    group: Option<String>,

    #[arg(long)]
    exercise: Option<String>,

    /// Warm-up as WEIGHTxREPS
    #[arg(long, value_parser = parse_set_pair)]
    warmup: Option<SetPair>,

    /// Working set as WEIGHTxREPS, repeated in order
    #[arg(long = "set", value_parser = parse_set_pair)]
    sets: Vec<SetPair>,

    #[arg(long)]
    notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct SetPair {
    weight: String,
    reps: String,
}

fn parse_set_pair(s: &str) -> Result<SetPair, String> {
    let (weight, reps) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WEIGHTxREPS, got {:?}", s))?;
    Ok(SetPair {
        weight: weight.trim().to_string(),
        reps: reps.trim().to_string(),
    })
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitArg {
    Kg,
    Lb,
}

impl From<UnitArg> for Unit {
    fn from(u: UnitArg) -> Self {
        match u {
            UnitArg::Kg => Unit::Kg,
            UnitArg::Lb => Unit::Lb,
        }
    }
}

impl fmt::Display for UnitArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Unit::from(*self))
    }
}

fn apply_form_args(store: &mut SessionStore, args: &FormArgs) -> Result<()> {
    let fields = [
        (FormField::Day, &args.day),
        (FormField::Group, &args.group),
        (FormField::Exercise, &args.exercise),
        (FormField::Notes, &args.notes),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            store.update_field(field, value);
        }
    }

    if let Some(warmup) = &args.warmup {
        store.update_field(FormField::WarmupWeight, &warmup.weight);
        store.update_field(FormField::WarmupReps, &warmup.reps);
    }

    for (index, pair) in args.sets.iter().enumerate() {
        store.update_set(index, SetField::Weight, &pair.weight)?;
        store.update_set(index, SetField::Reps, &pair.reps)?;
    }
    Ok(())
}

fn print_routines(store: &SessionStore) {
    if store.routines().is_empty() {
        println!("No routines saved. Use `routine save` to create one.");
        return;
    }
    for (idx, routine) in store.routines().iter().enumerate() {
        println!("[{}] {}", idx, routine.routine_label());
    }
}

fn open_store(path: Option<PathBuf>) -> Result<SessionStore> {
    if let Some(path) = path {
        set_store_path(path)?;
    }
    debug!("Using store at {}", get_store_path().display());
    SessionStore::open_path(get_store_path())
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let level = parse_level(&args.log_level)
        .ok_or_else(|| anyhow!("Unknown log level: {}", args.log_level))?;
    init_logger(level);

    match args.command {
        Commands::Estimate { weight, reps } => {
            println!(
                "{}",
                estimate_one_rep_max(parse_number(&weight), parse_number(&reps))
            );
        }
        Commands::Log { routine, form } => {
            let mut store = open_store(args.store)?;
            if let Some(index) = routine {
                store.load_routine_at(index)?;
            }
            apply_form_args(&mut store, &form)?;
            let session = store.commit_session()?;
            println!("Logged #{}: {}", session.id, session);
        }
        Commands::Routine { action } => match action {
            RoutineCommand::Save { form } => {
                let mut store = open_store(args.store)?;
                apply_form_args(&mut store, &form)?;
                store.save_routine()?;
                println!(
                    "Saved routine [{}] {}",
                    store.routines().len() - 1,
                    store.form().routine_label()
                );
            }
            RoutineCommand::List => print_routines(&open_store(args.store)?),
        },
        Commands::Unit { unit } => {
            let mut store = open_store(args.store)?;
            if let Some(unit) = unit {
                store.set_unit(unit.into())?;
            }
            println!("{}", store.unit());
        }
        Commands::History { date } => {
            let store = open_store(args.store)?;
            let sessions = store.sessions(date.as_deref());
            if sessions.is_empty() {
                println!("No sessions found.");
            }
            for session in sessions {
                println!("{}", session);
            }
        }
        Commands::Progress { date, json } => {
            let points = open_store(args.store)?.progress(date.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                for point in points {
                    println!("{}\t{}", point.exercise, point.best_1rm);
                }
            }
        }
    }

    Ok(())
}
