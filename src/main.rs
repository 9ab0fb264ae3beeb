use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use primordial::classify::{good_primes, strong_primes, weak_primes};
use primordial::config::Config;
use primordial::factor::decompose;
use primordial::mersenne::mersenne_exponents;
use primordial::poly::{aks_prime, format_expansion};
use primordial::primality::classify;
use primordial::sieve::{first_n_primes, primorials, sieve_of_eratosthenes};
use primordial::spiral::UlamSpiral;
use primordial::Result;

#[derive(Parser)]
#[command(name = "primordial")]
#[command(about = "A prime-number toolkit: generation, classification, Mersenne testing")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Primes up to a bound via the Sieve of Eratosthenes
    Sieve { limit: u64 },
    /// The first N primes via 6k±1 trial division
    Primes { count: usize },
    /// The first N+1 primorial numbers
    Primorial { count: usize },
    /// Classify a number as prime or composite
    Check { number: u64 },
    /// Prime factorization, shown as a product of factors
    Factor {
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
    /// Strong, weak, or good primes up to a bound
    Classify {
        #[arg(value_enum)]
        kind: Kind,
        bound: u64,
    },
    /// Mersenne-prime exponents up to a bound (Lucas-Lehmer)
    Mersenne { bound: u32 },
    /// Ulam spiral of primes
    Spiral {
        /// Grid side length (odd); config default when omitted
        size: Option<usize>,
        /// Center value; config default when omitted
        #[arg(long)]
        start: Option<u64>,
    },
    /// Expanded polynomials (x-1)^0 .. (x-1)^P, with the AKS verdict for P
    Expand { power: u32 },
}

#[derive(ValueEnum, Clone, Copy)]
enum Kind {
    Strong,
    Weak,
    Good,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    };
    if !config.display.colors {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli.command, &config) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            Ok(Config::load(path)?)
        }
        None => Ok(Config::from_env()),
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Sieve { limit } => {
            let primes = sieve_of_eratosthenes(limit);
            log::debug!("sieved {} primes up to {limit}", primes.len());
            print_header(&format!("primes in [2, {limit}]"));
            print_numbers(primes.iter());
        }
        Commands::Primes { count } => {
            print_header(&format!("first {count} primes"));
            print_numbers(first_n_primes(count).iter());
        }
        Commands::Primorial { count } => {
            print_header(&format!("primorial numbers 0..={count}"));
            print_numbers(primorials(count).iter());
        }
        Commands::Check { number } => {
            let verdict = classify(number)?;
            println!("{number} is a {verdict} number");
        }
        Commands::Factor { numbers } => {
            for n in numbers {
                println!("{}", decompose(n)?);
            }
        }
        Commands::Classify { kind, bound } => {
            print_header(&format!("{} primes up to {bound}", kind.name()));
            match kind {
                Kind::Strong => print_numbers(strong_primes(bound)),
                Kind::Weak => print_numbers(weak_primes(bound)),
                Kind::Good => print_numbers(good_primes(bound)),
            }
        }
        Commands::Mersenne { bound } => {
            print_header(&format!("Mersenne-prime exponents up to {bound}"));
            let line: Vec<String> = mersenne_exponents(bound).map(|p| format!("M{p}")).collect();
            println!("{}", line.join(" "));
        }
        Commands::Spiral { size, start } => {
            let size = size.unwrap_or(config.spiral.size);
            let start = start.unwrap_or(config.spiral.start);
            let spiral = UlamSpiral::new(size, start)?;
            print!("{}", spiral.render());
        }
        Commands::Expand { power } => {
            for p in 0..=power {
                println!("{}", format_expansion(p));
            }
            let verdict = if aks_prime(power) { "prime" } else { "not prime" };
            println!("AKS: {power} is {verdict}");
        }
    }
    Ok(())
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Strong => "strong",
            Kind::Weak => "weak",
            Kind::Good => "good",
        }
    }
}

fn print_header(title: &str) {
    println!("{}", title.bold());
}

fn print_numbers<T: std::fmt::Display>(values: impl Iterator<Item = T>) {
    let line: Vec<String> = values.map(|v| v.to_string()).collect();
    println!("{}", line.join(" "));
}
