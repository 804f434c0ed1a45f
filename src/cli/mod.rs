use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};

use crate::application::{LedgerService, SAMPLE_LEDGER};
use crate::io::export::Exporter;
use crate::io::import::Importer;

/// Partita - party-to-party transaction ledger
#[derive(Parser)]
#[command(name = "partita")]
#[command(about = "An in-memory ledger that tracks payments between named parties")]
#[command(version)]
pub struct Cli {
    /// Pre-populate the ledger with the bundled sample data
    #[arg(long, global = true)]
    pub sample: bool,

    /// Load "YYYY-mm-dd,Payer,Payee,####.##" lines from a file before
    /// running the command
    #[arg(short, long, global = true)]
    pub load: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate and append one ledger entry
    Add {
        /// Raw entry line: "YYYY-mm-dd,Payer Name,Payee Name,####.##"
        entry: String,
    },

    /// Show the net balance for a party
    Balance {
        /// Party name, matched exactly against payers and payees
        party: String,

        /// Count only entries dated on or before this date (YYYY-mm-dd)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// List all ledger entries in insertion order
    Entries,

    /// Export the ledger to CSV or JSON
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start an interactive console
    Console,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = if self.sample {
            LedgerService::with_sample_data()
        } else {
            LedgerService::new()
        };

        if let Some(path) = &self.load {
            load_entries_file(&mut service, path)?;
        }

        match self.command {
            Commands::Add { entry } => {
                println!("{}", service.add_transaction_entry(&entry)?);
            }

            Commands::Balance { party, as_of } => {
                println!(
                    "{}",
                    service.get_balance_as_of_date(&party, as_of.as_deref())?
                );
            }

            Commands::Entries => print_entries(&service),

            Commands::Export { format, output } => run_export(&service, format, output)?,

            Commands::Console => run_console(&mut service)?,
        }

        Ok(())
    }
}

fn load_entries_file(service: &mut LedgerService, path: &Path) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let result = Importer::new(service).import_entries(file)?;

    for failure in &result.errors {
        eprintln!(
            "{}: line {} skipped: {}",
            path.display(),
            failure.line,
            failure.error
        );
    }
    Ok(())
}

fn print_entries(service: &LedgerService) {
    for entry in service.ledger().entries() {
        println!(
            "{},{},{},{}",
            entry.date, entry.payer, entry.payee, entry.amount
        );
    }
}

fn run_export(
    service: &LedgerService,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let exporter = Exporter::new(service);
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_export(&exporter, format, file)?;
            println!(
                "Exported {} entries to {}",
                service.ledger().len(),
                path.display()
            );
        }
        None => write_export(&exporter, format, io::stdout().lock())?,
    }
    Ok(())
}

fn write_export<W: Write>(exporter: &Exporter, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Csv => {
            exporter.export_entries_csv(writer)?;
        }
        ExportFormat::Json => {
            exporter.export_json(writer)?;
        }
    }
    Ok(())
}

const CONSOLE_INSTRUCTIONS: &str = r#"This console keeps track of financial transactions between named parties -
people and organizations. Parties are identified by a simple string, such as
"John" or "Supermarket". The ledger of transactions has the format shown
below:

    2015-01-16,john,mary,125.00
    2015-01-17,john,supermarket,20.00
    2015-01-17,john,mary,100.00

Commands:
    add <entry>             validate and append one entry,
                            e.g. add 2017-10-02,Me,You,55.25
    balance <party>         current net balance for a party,
                            e.g. balance John Smith
    balance <party>,<date>  balance as of an inclusive cutoff date,
                            e.g. balance John Smith,2017-03-15
    entries                 list all entries in insertion order
    sample                  load the bundled sample ledger
    help                    show these instructions again
    quit                    leave the console"#;

/// Interactive console: reads one command per line and keeps running on
/// errors, so a rejected entry never ends the session.
fn run_console(service: &mut LedgerService) -> Result<()> {
    println!("{CONSOLE_INSTRUCTIONS}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match console_command(service, line) {
            Ok(message) => println!("{message}"),
            Err(err) => println!("error: {err}"),
        }
    }

    Ok(())
}

fn console_command(service: &mut LedgerService, line: &str) -> Result<String> {
    if let Some(entry) = line.strip_prefix("add ") {
        return Ok(service.add_transaction_entry(entry.trim())?);
    }

    if let Some(rest) = line.strip_prefix("balance ") {
        // "balance John Smith" or "balance John Smith,2017-03-15"; party
        // names may contain spaces but never commas.
        let (party, cutoff) = match rest.split_once(',') {
            Some((party, date)) => (party.trim(), Some(date.trim())),
            None => (rest.trim(), None),
        };
        return Ok(service.get_balance_as_of_date(party, cutoff)?);
    }

    match line {
        "entries" => {
            print_entries(service);
            Ok(format!("{} entries.", service.ledger().len()))
        }
        "sample" => {
            let result = Importer::new(service).import_entries(SAMPLE_LEDGER.as_bytes())?;
            Ok(format!("Loaded {} sample entries.", result.imported))
        }
        "help" => Ok(CONSOLE_INSTRUCTIONS.to_string()),
        _ => Err(anyhow!(r#"unknown command, type "help" for instructions"#)),
    }
}
