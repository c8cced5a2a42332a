use clap::{Parser, Subcommand};
use colored::Colorize;
use testsdk::commands;

#[derive(Parser)]
#[command(name = "testsdk")]
#[command(about = "Exercise the testsdk sample SDK from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SDK title
    Title,
    /// Compute sum, difference, product and quotient of two integers
    Compute {
        #[arg(allow_hyphen_values = true)]
        one: i32,
        #[arg(allow_hyphen_values = true)]
        two: i32,
        /// Report a zero divisor as an error instead of crashing
        #[arg(long)]
        checked: bool,
    },
    /// Greet someone by name
    Hello {
        /// Name to greet (empty names are rejected)
        to: String,
    },
    /// Save a value to the process-wide slot and read it back
    Save {
        #[arg(allow_hyphen_values = true)]
        val: i32,
    },
    /// Label a computation through the Computation capability
    Print {
        #[arg(allow_hyphen_values = true)]
        one: i32,
        #[arg(allow_hyphen_values = true)]
        two: i32,
    },
    /// List the functions exposed to the mobile host
    Surface {
        /// Path to testsdk.toml (defaults to ./testsdk.toml when present)
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Title => commands::title::execute(),
        Commands::Compute { one, two, checked } => commands::compute::execute(one, two, checked),
        Commands::Hello { to } => commands::hello::execute(&to),
        Commands::Save { val } => commands::save::execute(val),
        Commands::Print { one, two } => commands::print::execute(one, two),
        Commands::Surface { config } => commands::surface::execute(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
