use anyhow::{ensure, Context, Result};
use bitkit::{crt, crt_extended, gcd, lcm, permutations, FenwickTree, TreeConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bitkit", about = "Fenwick tree, CRT and permutation toolkit")]
struct Cli {
    /// Log at info level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a Fenwick tree, apply updates, and answer queries.
    Fenwick {
        /// Number of slots (rounded up to a power of two).
        #[arg(long)]
        capacity: usize,
        /// Point update `<index>:<delta>` (repeatable).
        #[arg(long = "add", value_parser = parse_add, allow_hyphen_values = true)]
        adds: Vec<(usize, i64)>,
        /// Prefix-sum query through `<index>`; -1 is the empty prefix.
        #[arg(long = "prefix", allow_hyphen_values = true)]
        prefixes: Vec<isize>,
        /// Range-sum query `<low>:<high>`.
        #[arg(long = "range", value_parser = parse_range)]
        ranges: Vec<(usize, usize)>,
        /// Largest index whose prefix sum is at most `<threshold>`.
        #[arg(long = "at-most", allow_hyphen_values = true)]
        thresholds: Vec<i64>,
    },
    /// Solve a system of congruences given as `<residue>:<modulus>`.
    Crt {
        #[arg(required = true, value_parser = parse_congruence, allow_hyphen_values = true)]
        congruences: Vec<(i64, i64)>,
    },
    /// Print the distinct permutations of a word's characters.
    Permute {
        /// Characters to permute.
        word: String,
    },
    /// Run the built-in sanity scenarios.
    SelfTest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fenwick {
            capacity,
            adds,
            prefixes,
            ranges,
            thresholds,
        } => run_fenwick(capacity, &adds, &prefixes, &ranges, &thresholds)?,
        Commands::Crt { congruences } => run_crt(&congruences)?,
        Commands::Permute { word } => run_permute(&word),
        Commands::SelfTest => run_self_test()?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_fenwick(
    capacity: usize,
    adds: &[(usize, i64)],
    prefixes: &[isize],
    ranges: &[(usize, usize)],
    thresholds: &[i64],
) -> Result<()> {
    let config = TreeConfig::for_len(capacity);
    let mut tree = FenwickTree::with_config(&config).context("failed to create tree")?;
    tracing::info!(capacity = tree.capacity(), updates = adds.len(), "tree ready");

    for &(index, delta) in adds {
        tree.add(index, delta)
            .with_context(|| format!("failed to add {delta} at index {index}"))?;
    }

    for &index in prefixes {
        let sum = tree
            .prefix_sum(index)
            .with_context(|| format!("prefix query failed for index {index}"))?;
        println!("prefix\t{index}\t{sum}");
    }

    for &(low, high) in ranges {
        let sum = tree
            .range_sum(low, high)
            .with_context(|| format!("range query failed for {low}:{high}"))?;
        println!("range\t{low}:{high}\t{sum}");
    }

    for &threshold in thresholds {
        let index = tree
            .largest_index_with_sum_at_most(threshold)
            .map_or(-1, |index| index as i64);
        println!("at-most\t{threshold}\t{index}");
    }

    Ok(())
}

fn run_crt(congruences: &[(i64, i64)]) -> Result<()> {
    let (residues, moduli): (Vec<i64>, Vec<i64>) = congruences.iter().copied().unzip();
    match crt_extended(&residues, &moduli).context("invalid system of congruences")? {
        Some(solution) => println!("{} (mod {})", solution.residue, solution.modulus),
        None => println!("no solution"),
    }
    Ok(())
}

fn run_permute(word: &str) {
    for permutation in permutations(word.chars()) {
        println!("{}", permutation.into_iter().collect::<String>());
    }
}

fn run_self_test() -> Result<()> {
    let mut tree = FenwickTree::new(32)?;
    tree.add(6, 14)?;
    tree.add(28, 52)?;
    tree.add(24, 2)?;
    ensure!(tree.prefix_sum(27)? == 16, "prefix_sum(27) should be 16");
    ensure!(tree.prefix_sum(28)? == 68, "prefix_sum(28) should be 68");
    ensure!(tree.prefix_sum(-1)? == 0, "empty prefix should be 0");
    ensure!(
        tree.largest_index_with_sum_at_most(-1).is_none(),
        "negative threshold should match only the empty prefix"
    );
    tracing::info!("fenwick scenarios passed");

    ensure!(gcd(14, 21) == 7, "gcd(14, 21) should be 7");
    for a in 1..=99i64 {
        for b in 1..=99i64 {
            let product = lcm(a, b)? * gcd(a, b);
            ensure!(product == (a * b) as u64, "lcm * gcd != a * b for {a}, {b}");
        }
    }
    let solution = crt(2, 3, 3, 5)?.context("crt(2, 3, 3, 5) should be solvable")?;
    ensure!(
        solution.residue == 8 && solution.modulus == 15,
        "crt(2, 3, 3, 5) should be 8 (mod 15), got {solution:?}"
    );
    tracing::info!("number theory scenarios passed");

    let words: Vec<String> = permutations("bac".chars())
        .map(|p| p.into_iter().collect())
        .collect();
    ensure!(
        words == ["abc", "acb", "bac", "bca", "cab", "cba"],
        "unexpected permutations of bac: {words:?}"
    );
    let counted = permutations([1, 2, 1]).count();
    ensure!(counted == 3, "expected 3 permutations of [1, 2, 1], got {counted}");
    tracing::info!("permutation scenarios passed");

    println!("all self-tests passed");
    Ok(())
}

fn parse_add(raw: &str) -> Result<(usize, i64), String> {
    let (index, delta) = split_pair(raw)?;
    Ok((
        index.parse().map_err(|e| format!("invalid index '{index}': {e}"))?,
        delta.parse().map_err(|e| format!("invalid delta '{delta}': {e}"))?,
    ))
}

fn parse_range(raw: &str) -> Result<(usize, usize), String> {
    let (low, high) = split_pair(raw)?;
    Ok((
        low.parse().map_err(|e| format!("invalid low bound '{low}': {e}"))?,
        high.parse().map_err(|e| format!("invalid high bound '{high}': {e}"))?,
    ))
}

fn parse_congruence(raw: &str) -> Result<(i64, i64), String> {
    let (residue, modulus) = split_pair(raw)?;
    Ok((
        residue.parse().map_err(|e| format!("invalid residue '{residue}': {e}"))?,
        modulus.parse().map_err(|e| format!("invalid modulus '{modulus}': {e}"))?,
    ))
}

fn split_pair(raw: &str) -> Result<(&str, &str), String> {
    raw.split_once(':')
        .map(|(left, right)| (left.trim(), right.trim()))
        .ok_or_else(|| format!("expected '<a>:<b>', got '{raw}'"))
}
