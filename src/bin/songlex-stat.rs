use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use itertools::Itertools;
use log::info;
use songlex::decades::{self, Decade};
use songlex::input::Document;
use songlex::lemmatizer::LemmaTable;
use songlex::loader;
use songlex::normalizer::{NormalizationConfig, Normalizer};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

/// Corpus statistics per decade
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Corpus directory (one .txt file per song)
    corpus: PathBuf,
    /// Song years (JSON object: song id -> year)
    #[arg(long)]
    years: Option<PathBuf>,
    /// Lemma table (form, lemma; tab-separated)
    #[arg(long)]
    lemmas: Option<PathBuf>,
    /// Normalization option, e.g. lemmatize=true
    #[arg(short, long = "option")]
    options: Vec<String>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

struct RawStat<'a> {
    documents: u64,
    lines: u64,
    tokens: u64,
    types: HashSet<&'a str>,
}

impl<'a> RawStat<'a> {
    fn new() -> Self {
        Self {
            documents: 0,
            lines: 0,
            tokens: 0,
            types: HashSet::new(),
        }
    }

    fn feed_document(&mut self, doc: &'a Document) {
        self.documents += 1;
        self.lines += doc.nonblank_lines().count() as u64;
        for token in doc.tokens() {
            self.tokens += 1;
            self.types.insert(token);
        }
    }

    fn print(&self, prefix: &str) {
        println!("{prefix}- songs: {}", self.documents);
        println!("{prefix}- lines: {}", self.lines);
        println!("{prefix}- tokens: {}", self.tokens);
        println!("{prefix}- types: {}", self.types.len());
    }
}

fn label(doc: &Document) -> String {
    match doc.year {
        None => "undated".to_owned(),
        Some(year) => Decade::of(year).to_string(),
    }
}

fn stat(raw: &[Document], normalized: &[Document]) {
    let mut by_label: BTreeMap<String, (RawStat, RawStat)> = BTreeMap::new();
    let mut overall = (RawStat::new(), RawStat::new());
    for (r, n) in raw.iter().zip(normalized) {
        overall.0.feed_document(r);
        overall.1.feed_document(n);
        let entry = by_label
            .entry(label(r))
            .or_insert_with(|| (RawStat::new(), RawStat::new()));
        entry.0.feed_document(r);
        entry.1.feed_document(n);
    }
    let mut rows = vec![("all".to_owned(), overall)];
    rows.extend(by_label);
    for (name, (r, n)) in &rows {
        println!("{name}:");
        println!("  raw:");
        r.print("  ");
        println!("  normalized:");
        n.print("  ");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    let config = NormalizationConfig::from_options(&args.options)
        .map_err(anyhow::Error::msg)
        .context("invalid normalization options")?;
    let corpus = loader::load_corpus(&args.corpus, args.years.as_deref())
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("cannot read {}", args.corpus.display()))?;
    let lemmas = match &args.lemmas {
        None => LemmaTable::new(),
        Some(path) => LemmaTable::load(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("cannot read {}", path.display()))?,
    };
    if let Some(years) = decades::get_years(&corpus) {
        info!(target: "songlex", "years in input data: {}", decades::pretty_years(&years));
    }
    let normalizer = Normalizer::new(&config, &lemmas);
    let normalized = corpus.iter().map(|d| normalizer.normalize(d)).collect_vec();
    stat(&corpus, &normalized);
    Ok(())
}
