use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use seedgen_cli::config::limits_from_env;
use seedgen_cli::items::resolve_items;
use seedgen_cli::report::{dump_stream, run_generator, write_report, OutputLines, Report};
use seedgen_core::generators::{ListPicker, NumberGenerator, SortOrder, TeamSplitter};
use seedgen_core::{canonicalize, combine_seed, hash_to_u32, Param, SeedSource};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seedgen")]
#[command(about = "Reproducible random generators driven by shareable seeds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Base seed; omit for a one-off result that cannot be replayed
    #[arg(long)]
    seed: Option<String>,
    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Also write the JSON report to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash a string to its 32-bit generator seed
    Hash { text: String },
    /// Show the combined seed for a base seed and a JSON params object
    Combine {
        #[arg(long)]
        seed: Option<String>,
        #[arg(long)]
        params: Option<String>,
    },
    /// Dump the first draws of a seed's stream
    Stream {
        #[arg(long)]
        seed: Option<String>,
        #[arg(long)]
        params: Option<String>,
        /// Hash --seed as-is instead of combining it with --params
        #[arg(long, default_value_t = false, requires = "seed", conflicts_with = "params")]
        raw: bool,
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Draw integers in [MIN, MAX] instead of floats in [0, 1)
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
        int: Option<Vec<i64>>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Random integers in a range
    Numbers {
        #[command(flatten)]
        run: RunArgs,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max: i64,
        /// Never repeat a value
        #[arg(long, default_value_t = false)]
        unique: bool,
        #[arg(long, value_enum, default_value_t = CliSort::None)]
        sort: CliSort,
    },
    /// Pick entries from a list
    Pick {
        #[command(flatten)]
        run: RunArgs,
        /// Comma-separated items
        #[arg(long)]
        items: Option<String>,
        /// File with one item per line
        #[arg(long)]
        items_file: Option<PathBuf>,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = false)]
        unique: bool,
    },
    /// Split members into random teams
    Teams {
        #[command(flatten)]
        run: RunArgs,
        /// Comma-separated members
        #[arg(long)]
        members: Option<String>,
        /// File with one member per line
        #[arg(long)]
        members_file: Option<PathBuf>,
        #[arg(long, default_value_t = 2)]
        teams: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliSort {
    None,
    Asc,
    Desc,
}

impl From<CliSort> for SortOrder {
    fn from(value: CliSort) -> Self {
        match value {
            CliSort::None => SortOrder::None,
            CliSort::Asc => SortOrder::Ascending,
            CliSort::Desc => SortOrder::Descending,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Cli { command } = Cli::parse();
    let limits = limits_from_env();

    match command {
        Commands::Hash { text } => {
            let hash = hash_to_u32(&text);
            println!("hash={hash}");
            println!("hex={hash:#010x}");
        }
        Commands::Combine { seed, params } => {
            let params = parse_params(params.as_deref())?;
            let combined = combine_seed(seed.as_deref(), &params);
            println!("seed={combined}");
            println!("reproducible={}", combined.is_reproducible());
            println!("params={}", canonicalize(&params));
            println!("hash={}", hash_to_u32(combined.as_str()));
        }
        Commands::Stream {
            seed,
            params,
            raw,
            count,
            int,
            json,
        } => {
            if count > limits.max_count {
                return Err(anyhow!(
                    "--count {count} exceeds the limit of {}",
                    limits.max_count
                ));
            }
            let seed = match (raw, seed) {
                (true, Some(seed)) => SeedSource::Reproducible(seed),
                (true, None) => return Err(anyhow!("--raw requires --seed")),
                (false, seed) => {
                    combine_seed(seed.as_deref(), &parse_params(params.as_deref())?)
                }
            };
            let int_range = match int.as_deref() {
                Some([min, max]) if min <= max => Some((*min, *max)),
                Some([min, max]) => {
                    return Err(anyhow!("--int MIN MAX needs MIN <= MAX, got {min} {max}"))
                }
                Some(_) => return Err(anyhow!("--int takes exactly two values")),
                None => None,
            };

            let report = dump_stream(&seed, count, int_range);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("seed={}", report.seed);
                println!("reproducible={}", report.reproducible);
                println!("hash={}", report.hash);
                for draw in &report.draws {
                    println!("{}", serde_json::to_string(draw)?);
                }
            }
        }
        Commands::Numbers {
            run,
            count,
            min,
            max,
            unique,
            sort,
        } => {
            let generator = NumberGenerator {
                count,
                min,
                max,
                unique,
                sort: sort.into(),
            };
            let report = run_generator("numbers", &generator, run.seed.as_deref(), &limits)?;
            emit(&report, &run)?;
        }
        Commands::Pick {
            run,
            items,
            items_file,
            count,
            unique,
        } => {
            let items = resolve_items(items.as_deref(), items_file.as_deref(), "items")?;
            let generator = ListPicker {
                items,
                count,
                unique,
            };
            let report = run_generator("pick", &generator, run.seed.as_deref(), &limits)?;
            emit(&report, &run)?;
        }
        Commands::Teams {
            run,
            members,
            members_file,
            teams,
        } => {
            let members = resolve_items(members.as_deref(), members_file.as_deref(), "members")?;
            let generator = TeamSplitter { members, teams };
            let report = run_generator("teams", &generator, run.seed.as_deref(), &limits)?;
            emit(&report, &run)?;
        }
    }

    Ok(())
}

fn parse_params(raw: Option<&str>) -> Result<Param> {
    match raw {
        Some(raw) => {
            serde_json::from_str(raw).with_context(|| format!("invalid --params json: {raw}"))
        }
        None => Ok(Param::Undefined),
    }
}

fn emit<T: OutputLines + Serialize>(report: &Report<T>, run: &RunArgs) -> Result<()> {
    if run.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for line in report.to_lines() {
            println!("{line}");
        }
    }

    if let Some(path) = &run.output {
        write_report(path, report)?;
        tracing::info!(path = %path.display(), "wrote report");
        if !run.json {
            println!("output={}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn stream_int_accepts_negative_bounds() {
        let cli = Cli::try_parse_from(["seedgen", "stream", "--int", "-5", "5"]).unwrap();
        match cli.command {
            Commands::Stream { int, raw, .. } => {
                assert_eq!(int, Some(vec![-5, 5]));
                assert!(!raw);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn stream_int_needs_two_values() {
        let err = Cli::try_parse_from(["seedgen", "stream", "--int", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongNumberOfValues);
    }

    #[test]
    fn raw_stream_rejects_params() {
        let err = Cli::try_parse_from([
            "seedgen", "stream", "--raw", "--seed", "abc", "--params", "{}",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn raw_stream_requires_seed() {
        let err = Cli::try_parse_from(["seedgen", "stream", "--raw"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn numbers_sort_maps_onto_sort_order() {
        let cli = Cli::try_parse_from([
            "seedgen", "numbers", "--seed", "x", "--min", "-3", "--sort", "desc",
        ])
        .unwrap();
        match cli.command {
            Commands::Numbers { run, min, sort, .. } => {
                assert_eq!(run.seed.as_deref(), Some("x"));
                assert_eq!(min, -3);
                assert_eq!(SortOrder::from(sort), SortOrder::Descending);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
