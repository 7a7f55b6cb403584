use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use calc_cli::render::{BudgetReport, SalaryReport, TransferReport};
use calc_cli::settings::{self, TableSources};
use calc_cli::{app, logging};
use calc_core::TracingSink;
use calc_core::input::{BudgetForm, SalaryForm, TransferForm};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Israeli salary, smart-home budget and money-transfer calculators.
///
/// Numeric options are read like form fields: missing or unparsable values
/// fall back to their defaults instead of failing.
#[derive(Debug, Parser)]
#[command(name = "smarthome-calc", version)]
struct Cli {
    /// TOML file replacing some or all of the built-in reference tables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV file with the income tax brackets (`lower_bound,upper_bound,rate`).
    #[arg(long, global = true)]
    brackets: Option<PathBuf>,

    /// CSV file with the transfer providers.
    #[arg(long, global = true)]
    providers: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,calc_core=trace`. Overrides `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON instead of a text report.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Monthly net salary and deduction breakdown.
    Salary(SalaryArgs),
    /// Smart-home equipment budget.
    Budget(BudgetArgs),
    /// Compare USD to ILS transfer providers.
    Transfer(TransferArgs),
    /// Print the effective reference tables as TOML.
    Tables,
}

#[derive(Debug, Args)]
struct SalaryArgs {
    /// Gross monthly income in shekels [default: 0].
    #[arg(long, default_value = "")]
    gross: String,

    /// Tax credit points [default: 2.25].
    #[arg(long, default_value = "")]
    credit_points: String,

    /// Employee pension contribution, in percent [default: 6.5].
    #[arg(long, default_value = "")]
    pension: String,

    /// Contribute to a study fund.
    #[arg(long)]
    voluntary_fund: bool,
}

impl From<SalaryArgs> for SalaryForm {
    fn from(args: SalaryArgs) -> Self {
        Self {
            gross_income: args.gross,
            credit_points: args.credit_points,
            pension_percent: args.pension,
            voluntary_fund: args.voluntary_fund,
        }
    }
}

#[derive(Debug, Args)]
struct BudgetArgs {
    /// Number of rooms [default: 3].
    #[arg(long, default_value = "")]
    rooms: String,

    /// Automation tier: basic, intermediate or advanced [default: basic].
    #[arg(long, default_value = "")]
    tier: String,
}

impl From<BudgetArgs> for BudgetForm {
    fn from(args: BudgetArgs) -> Self {
        Self {
            room_count: args.rooms,
            tier: args.tier,
        }
    }
}

#[derive(Debug, Args)]
struct TransferArgs {
    /// Amount to send, in dollars [default: 1000].
    #[arg(long, default_value = "")]
    amount: String,

    /// Open this provider's referral link (records an affiliate click).
    #[arg(long, value_name = "PROVIDER")]
    open: Option<String>,

    /// Analytics category attached to the click.
    #[arg(long, requires = "open")]
    category: Option<String>,
}

// ─── output ──────────────────────────────────────────────────────────────────

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{json}");
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;

    let tables = settings::load_tables(&TableSources {
        config: cli.config.as_deref(),
        brackets: cli.brackets.as_deref(),
        providers: cli.providers.as_deref(),
    })
    .context("failed to load reference tables")?;

    debug!(command = ?cli.command, "running");

    match cli.command {
        Command::Salary(args) => {
            let result = app::salary(&tables, &args.into());
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", SalaryReport(&result));
            }
        }
        Command::Budget(args) => {
            let estimate = app::budget(&tables, &args.into());
            if cli.json {
                print_json(&estimate)?;
            } else {
                println!("{}", BudgetReport(&estimate));
            }
        }
        Command::Transfer(args) => {
            let comparison = app::transfer(
                &tables,
                &TransferForm {
                    amount: args.amount,
                },
            );
            if cli.json {
                print_json(&comparison)?;
            } else {
                println!("{}", TransferReport(&comparison));
            }

            if let Some(name) = args.open.as_deref() {
                let provider = app::open_provider(
                    &tables.transfer,
                    name,
                    args.category.as_deref(),
                    &TracingSink,
                )?;
                info!("opening {}", provider.referral_url);
                if !cli.json {
                    println!("{}", provider.referral_url);
                }
            }
        }
        Command::Tables => {
            let text = settings::tables_to_toml(&tables).context("failed to render tables")?;
            print!("{text}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn salary_flags_become_form_fields() {
        let cli = Cli::try_parse_from([
            "smarthome-calc",
            "salary",
            "--gross",
            "15,000",
            "--pension",
            "7",
            "--voluntary-fund",
        ])
        .unwrap();

        let Command::Salary(args) = cli.command else {
            panic!("expected salary command");
        };
        assert_eq!(
            SalaryForm::from(args),
            SalaryForm {
                gross_income: "15,000".to_string(),
                credit_points: String::new(),
                pension_percent: "7".to_string(),
                voluntary_fund: true,
            }
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["smarthome-calc", "budget", "--tier", "advanced", "--json"])
            .unwrap();

        assert!(cli.json);
        let Command::Budget(args) = cli.command else {
            panic!("expected budget command");
        };
        assert_eq!(BudgetForm::from(args).tier, "advanced");
    }

    #[test]
    fn category_requires_open() {
        let result = Cli::try_parse_from(["smarthome-calc", "transfer", "--category", "transfer"]);

        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["smarthome-calc"]).is_err());
    }
}
