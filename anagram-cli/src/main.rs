use anagram::{load_wordlist, AnagramIndex, IndexConfig};
use anyhow::{Context, Result};
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::time;
use structopt::StructOpt;

const DEFAULT_WORDLIST_FILE: &str = "/usr/share/dict/words";

#[derive(Debug, StructOpt)]
#[structopt(name = "anagram")]
struct Opt {
    /// Input wordlist file
    #[structopt(short, long, parse(from_os_str), default_value = DEFAULT_WORDLIST_FILE)]
    input: PathBuf,

    /// Upper bound on the number of hash buckets
    #[structopt(short = "b", long, default_value = "50000")]
    max_buckets: usize,

    /// Print index statistics after loading
    #[structopt(long)]
    stats: bool,

    /// Log index activity
    #[structopt(short, long)]
    verbose: bool,

    /// Words to find anagrams of
    #[structopt(name = "query", required = true)]
    queries: Vec<String>,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    colog::default_builder()
        .filter_level(if opt.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let start = time::Instant::now();
    let words = load_wordlist(&opt.input)?;
    let mut index = AnagramIndex::with_config(IndexConfig::new(opt.max_buckets))
        .context("invalid --max-buckets")?;
    index.extend(&words);
    info!("loaded {} words in {:?}", words.len(), start.elapsed());

    if opt.stats {
        eprintln!("{}", index.stats());
    }

    for query in &opt.queries {
        println!("{}:", query);
        index.lookup_each(query, |word| println!("  {}", word));
    }
    Ok(())
}
