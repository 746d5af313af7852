use std::{io::Write, path::PathBuf, time::Duration};

use clap::Parser;
use marten_sat::{config::Config, context::Context, reports::Report};

mod read;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

/// Determine the satisfiability of a formula in DIMACS form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The formula to solve, read from stdin if absent.
    file: Option<PathBuf>,

    /// Seed for the source of randomness used when making decisions.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Probability of a random decision, once half of the atoms have a value.
    #[arg(long)]
    random_bias: Option<f64>,

    /// Frequencies decay after this multiple of the atom count of greedy decisions.
    #[arg(long)]
    decay_interval: Option<usize>,

    /// Time limit for the solve, in seconds.
    #[arg(long)]
    time_limit: Option<f64>,

    /// Maximum number of decisions to make.
    #[arg(long)]
    decision_limit: Option<usize>,

    /// Print counters from the solve as comments.
    #[arg(long)]
    stats: bool,
}

const EXIT_SATISFIABLE: i32 = 10;
const EXIT_UNSATISFIABLE: i32 = 20;
const EXIT_UNKNOWN: i32 = 0;
const EXIT_INPUT_ERROR: i32 = 1;
const EXIT_SOLVE_ERROR: i32 = 2;

fn config_from_args(args: &Args) -> Result<Config, String> {
    let mut config = Config::default();

    config.rng_seed.value = args.seed;

    if let Some(bias) = args.random_bias {
        if !config.random_decision_bias.set(bias) {
            let (min, max) = config.random_decision_bias.min_max();
            return Err(format!("random bias must be within {min}..={max}"));
        }
    }

    if let Some(interval) = args.decay_interval {
        if !config.decay_interval.set(interval) {
            let (min, _) = config.decay_interval.min_max();
            return Err(format!("decay interval must be at least {min}"));
        }
    }

    if let Some(seconds) = args.time_limit {
        match Duration::try_from_secs_f64(seconds) {
            Ok(limit) => config.time_limit = Some(limit),
            Err(_) => return Err(format!("invalid time limit {seconds}")),
        }
    }

    config.decision_limit = args.decision_limit;

    Ok(config)
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("c {e}");
            std::process::exit(EXIT_INPUT_ERROR);
        }
    };

    let mut the_context = Context::from_config(config);

    let info = match read::read_dimacs(args.file.as_deref(), &mut the_context) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("c {e}");
            std::process::exit(EXIT_INPUT_ERROR);
        }
    };

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("c Solve error: {e}");
            std::process::exit(EXIT_SOLVE_ERROR);
        }
    };

    let mut stdout = std::io::stdout().lock();

    if args.stats {
        let counters = &the_context.counters;
        let mut write_stats = || -> std::io::Result<()> {
            writeln!(stdout, "c Atoms:            {}", info.expected_atoms)?;
            writeln!(stdout, "c Clauses:          {}", info.added_clauses)?;
            writeln!(stdout, "c Learnt clauses:   {}", the_context.clause_db.addition_count())?;
            writeln!(stdout, "c Conflicts:        {}", counters.total_conflicts)?;
            writeln!(stdout, "c Decisions:        {}", counters.total_decisions)?;
            writeln!(stdout, "c Random decisions: {}", counters.random_decisions)?;
            writeln!(stdout, "c Decays:           {}", counters.decays)?;
            writeln!(stdout, "c Iterations:       {}", counters.total_iterations)?;
            writeln!(stdout, "c Time:             {:.2?}", counters.time)
        };
        if let Err(e) = write_stats() {
            eprintln!("c Failed to write stats: {e}");
        }
    }

    if let Err(e) = the_context.write_verdict(&mut stdout) {
        eprintln!("c Failed to write verdict: {e}");
    }
    let _ = stdout.flush();

    let code = match report {
        Report::Satisfiable => EXIT_SATISFIABLE,
        Report::Unsatisfiable => EXIT_UNSATISFIABLE,
        Report::Unknown => EXIT_UNKNOWN,
    };
    std::process::exit(code);
}
