use crate::render::{run_calculate, run_vaccine_due, run_vaccine_schedule};
use crate::server;
use clap::{Args, Parser, Subcommand, ValueEnum};
use child_cost::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Child Cost Calculator",
    about = "Estimate the annual cost of raising a child in China",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Calculate the annual cost breakdown and recommendations
    Calculate(CalculateArgs),
    /// Inspect the vaccination schedule
    Vaccines {
        #[command(subcommand)]
        command: VaccinesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum VaccinesCommand {
    /// Print the 0-18 year vaccination projection
    Schedule(ScheduleArgs),
    /// Print the vaccines due at a given month of age
    Due(DueArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Household monthly income
    #[arg(long)]
    pub(crate) income: f64,
    /// Child age in whole years (0-18)
    #[arg(long)]
    pub(crate) age: i64,
    /// City tier: tier1, tier2 or tier3
    #[arg(long)]
    pub(crate) location: String,
    /// Education type: public, private or international
    #[arg(long)]
    pub(crate) education: Option<String>,
    /// Healthcare level: basic or premium
    #[arg(long)]
    pub(crate) healthcare: Option<String>,
    /// Include extracurricular activity costs
    #[arg(long)]
    pub(crate) extracurricular: bool,
    /// Also print the cost of every remaining year up to age 18
    #[arg(long)]
    pub(crate) projection: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleArgs {
    /// Include optional (elective) vaccines
    #[arg(long)]
    pub(crate) include_optional: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DueArgs {
    /// Child age in months
    #[arg(long)]
    pub(crate) age_months: u16,
    /// Include optional (elective) vaccines
    #[arg(long)]
    pub(crate) include_optional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
    Csv,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculate(args) => run_calculate(args),
        Command::Vaccines {
            command: VaccinesCommand::Schedule(args),
        } => run_vaccine_schedule(args),
        Command::Vaccines {
            command: VaccinesCommand::Due(args),
        } => run_vaccine_due(args),
    }
}
