//! Command-line front end for the person store.
//!
//! # Responsibility
//! - Resolve configuration from flags and `PEOPLE_*` environment variables.
//! - Route subcommands to `PersonProcessor` over a SQLite store.

use clap::{Parser, Subcommand};
use log::info;
use people_core::{
    default_log_level, init_logging, open_db, PersonId, PersonModel, PersonProcessor,
    SqliteDataAccess,
};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "people", version, about = "Validate and store person records")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "PEOPLE_DB", default_value = "people.db")]
    db: PathBuf,

    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, env = "PEOPLE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. File logging is off when unset.
    #[arg(long, env = "PEOPLE_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate and insert a new person.
    Add {
        first_name: String,
        last_name: String,
        /// Height as <feet>'<inches>", e.g. 6'8"
        height: String,
    },
    /// List every stored person.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Validate and overwrite the person stored under `id`.
    Update {
        id: PersonId,
        first_name: String,
        last_name: String,
        height: String,
    },
    /// Convert height text into inches without touching the store.
    Height { text: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir)?;
    }

    match cli.command {
        Command::Height { text } => {
            let conversion = PersonProcessor::without_store().convert_height_text_to_inches(&text);
            if !conversion.is_valid {
                return Err(format!("`{text}` is not a <feet>'<inches>\" height").into());
            }
            println!("{}", conversion.height_in_inches);
            Ok(())
        }
        Command::Add {
            first_name,
            last_name,
            height,
        } => with_store(&cli.db, |processor| {
            let person = processor.create_person(&first_name, &last_name, &height)?;
            processor.save_person(&person)?;
            info!("event=cli_add module=cli status=ok");
            Ok(())
        }),
        Command::List { json } => with_store(&cli.db, |processor| {
            let people = processor.load_people()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&people)?);
            } else {
                print_table(&people);
            }
            Ok(())
        }),
        Command::Update {
            id,
            first_name,
            last_name,
            height,
        } => with_store(&cli.db, |processor| {
            let mut person = processor.create_person(&first_name, &last_name, &height)?;
            person.id = id;
            processor.update_person(&person)?;
            info!("event=cli_update module=cli status=ok id={id}");
            Ok(())
        }),
    }
}

fn with_store<F>(db: &Path, action: F) -> Result<(), Box<dyn Error>>
where
    F: for<'conn> FnOnce(&PersonProcessor<SqliteDataAccess<'conn>>) -> Result<(), Box<dyn Error>>,
{
    let conn = open_db(db)?;
    action(&PersonProcessor::new(SqliteDataAccess::new(&conn)))
}

fn print_table(people: &[PersonModel]) {
    println!("{:>5}  {:<20} {:<20} {:>8}", "ID", "FIRST", "LAST", "INCHES");
    for person in people {
        println!(
            "{:>5}  {:<20} {:<20} {:>8.1}",
            person.id, person.first_name, person.last_name, person.height_in_inches
        );
    }
}
