use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{error, info};
use songlex::driver::{self, AnalysisArgs};
use songlex::errors::Result;
use songlex::lemmatizer::LemmaTable;
use songlex::lexicon::Lexicon;
use songlex::loader;
use songlex::normalizer::NormalizationConfig;
use songlex::output::OError;
use std::path::PathBuf;
use std::{error, fs, io, process};

const DEFAULT_TOP: usize = 20;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Corpus directory (one .txt file per song)
    corpus: PathBuf,
    /// Output file (JSON)
    outfile: String,
    /// Song years (JSON object: song id -> year)
    #[arg(long)]
    years: Option<PathBuf>,
    /// Emotion lexicon (word, category, 0/1; tab-separated)
    #[arg(long)]
    emotions: Option<PathBuf>,
    /// Valence lexicon (word or phrase, score; tab-separated)
    #[arg(long)]
    valence: Option<PathBuf>,
    /// Lemma table (form, lemma; tab-separated)
    #[arg(long)]
    lemmas: Option<PathBuf>,
    /// Normalization option, e.g. lemmatize=true or extra_stopwords=baby,oh
    #[arg(short, long = "option")]
    options: Vec<String>,
    /// Number of terms in ranked lists
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,
    /// Report results per decade
    #[arg(long)]
    by_decade: bool,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn process(args: &Args) -> Result<()> {
    let config = NormalizationConfig::from_options(&args.options)?;
    let corpus = loader::load_corpus(&args.corpus, args.years.as_deref())?;
    let lexicon = Lexicon::load(args.emotions.as_deref(), args.valence.as_deref())?;
    let lemmas = match &args.lemmas {
        None => LemmaTable::new(),
        Some(path) => LemmaTable::load(path)?,
    };
    if config.lemmatize && lemmas.is_empty() {
        info!(target: "songlex", "lemmatization without a lemma table leaves words unchanged");
    }
    let analysis_args = AnalysisArgs {
        config: &config,
        top: args.top,
        by_decade: args.by_decade,
    };
    let output = driver::analyze(&analysis_args, &corpus, &lexicon, &lemmas)?;
    info!(target: "songlex", "write: {}", args.outfile);
    let file = fs::File::create(&args.outfile)?;
    let writer = io::BufWriter::new(file);
    if args.compact {
        serde_json::to_writer(writer, &output)?;
    } else {
        serde_json::to_writer_pretty(writer, &output)?;
    }
    Ok(())
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            match &args.error_file {
                Some(filename) => match store_error(filename, &*e) {
                    Ok(()) => {
                        info!(target: "songlex", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "songlex", "{e}");
                        error!(target: "songlex", "{e2}");
                    }
                },
                None => error!(target: "songlex", "{e}"),
            }
            process::exit(1);
        }
    }
}
