//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Reads minterms and variable names either from flags or from a two-line
//! problem file and prints the minimized sum of products.

use clap::Parser;
use qmc_logic::input::Problem;
use qmc_logic::{InputError, MinimizeConfig, Minimizer, Solution, SopExpr};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey Boolean function minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Comma-separated minterms, e.g. "0,1,5,7"
    #[arg(short = 'm', long = "minterms", requires = "variables", conflicts_with = "file")]
    minterms: Option<String>,

    /// Comma-separated variable letters, most significant first, e.g. "A,B,C"
    #[arg(short = 'v', long = "variables", requires = "minterms")]
    variables: Option<String>,

    /// Problem file: minterm line followed by variable line
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Fail instead of running more than this many merge rounds
    #[arg(long = "max-rounds")]
    max_rounds: Option<usize>,

    /// Fail if a merge round produces more than this many implicants
    #[arg(long = "max-implicants")]
    max_implicants: Option<usize>,

    /// Print the prime implicants and the minterms each one covers
    #[arg(short = 'p', long = "show-primes")]
    show_primes: bool,

    /// Parse the result back and check its truth table against the minterms
    #[arg(long = "verify")]
    verify: bool,
}

fn setup_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or("QMC_LOG", "warn")
            .write_style("QMC_LOG_STYLE"),
    )
    .format_timestamp(None)
    .init();
}

fn load_problem(args: &Args) -> Result<Problem, String> {
    match (&args.file, &args.minterms, &args.variables) {
        (Some(path), _, _) => Problem::from_file(path).map_err(|e| {
            // Rejected contents are reported like rejected flags
            match e.get_ref().and_then(|inner| inner.downcast_ref::<InputError>()) {
                Some(input) => format!("Error: {}", input),
                None => format!("Error reading problem file '{}': {}", path.display(), e),
            }
        }),
        (None, Some(minterms), Some(variables)) => {
            Problem::parse(minterms, variables).map_err(|e| format!("Error: {}", e))
        }
        _ => Err("Error: provide either --file or both --minterms and --variables".to_string()),
    }
}

fn print_primes(solution: &Solution) {
    println!("Prime implicants:");
    for (implicant, covered) in solution.table().iter() {
        let marker = if solution.cover().contains(implicant) {
            '*'
        } else {
            ' '
        };
        let covered: Vec<String> = covered.iter().map(u64::to_string).collect();
        println!("  {} {}  covers {}", marker, implicant, covered.join(","));
    }
    let literals: usize = solution.cover().implicants().map(|p| p.literal_count()).sum();
    println!(
        "Selected {} ({} essential), {} literals",
        solution.cover().len(),
        solution.cover().essential_count(),
        literals
    );
}

fn verify(solution: &Solution, rendered: &str) -> Result<(), String> {
    let expr = SopExpr::parse(rendered).map_err(|e| e.to_string())?;
    let actual = expr
        .minterms(solution.variables())
        .map_err(|e| e.to_string())?;

    let mut expected = solution.minterms().to_vec();
    expected.sort_unstable();
    expected.dedup();

    if let Some(m) = expected
        .iter()
        .find(|&&m| !solution.cover().implicants().any(|p| p.covers(m)))
    {
        return Err(format!("Verification failed: minterm {} is not covered", m));
    }

    if actual == expected {
        Ok(())
    } else {
        Err(format!(
            "Verification failed: expression is true on {:?}, expected {:?}",
            actual, expected
        ))
    }
}

fn main() {
    let args = Args::parse();
    setup_logging();

    let problem = match load_problem(&args) {
        Ok(problem) => problem,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    };

    let config = MinimizeConfig {
        max_rounds: args.max_rounds,
        max_implicants: args.max_implicants,
    };
    log::info!(
        "minimizing {} minterms over {} variables",
        problem.minterms().len(),
        problem.variables().len()
    );

    let solution = match problem.solve(&Minimizer::new(config)) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.show_primes {
        print_primes(&solution);
    }

    let rendered = solution.expression();
    println!("{}", rendered);

    if args.verify {
        match verify(&solution, &rendered) {
            Ok(()) => eprintln!("Verified: truth table matches the minterms."),
            Err(msg) => {
                eprintln!("{}", msg);
                process::exit(1);
            }
        }
    }
}
