//! Main entry point for calculating everything.

use crate::decades::{self, Decade};
use crate::emotion::EmotionVector;
use crate::errors::{EmptyScoreSet, Result};
use crate::frequency::{self, TermFrequencyTable};
use crate::information;
use crate::input::Document;
use crate::lemmatizer::Lemmatizer;
use crate::lexicon::LexiconProvider;
use crate::normalizer::{NormalizationConfig, Normalizer};
use crate::output::{self, ODecade, ODocument, OTerm, Output};
use crate::parallelism;
use crate::sentiment::{self, DocumentScore};
use crate::summary::{self, Summary};
use itertools::Itertools;
use log::{debug, info, warn};
use std::collections::HashMap;

/// What to calculate?
pub struct AnalysisArgs<'a> {
    /// How to normalize text for term frequencies.
    /// Emotion counts always use the lemmatized variant of this configuration.
    pub config: &'a NormalizationConfig,

    /// Length of the ranked term lists.
    pub top: usize,

    /// Do we also report per-decade results?
    /// If set, every document needs a year.
    pub by_decade: bool,
}

/// Per-document results, in corpus order.
struct Song {
    score: Option<DocumentScore>,
    emotions: EmotionVector,
}

/// Calculate everything.
///
/// This is the main entry point for the library.
pub fn analyze(
    args: &AnalysisArgs,
    corpus: &[Document],
    lexicon: &dyn LexiconProvider,
    lemmatizer: &dyn Lemmatizer,
) -> Result<Output> {
    information::statistics(corpus);
    let groups = if args.by_decade {
        Some(decades::partition_by_decade(corpus, |d| d.year)?)
    } else {
        None
    };

    let normalizer = Normalizer::new(args.config, lemmatizer);
    debug!(target: "songlex", "stages: {:?}", normalizer.stages());
    let normalized = parallelism::map_parallel(corpus, |d| normalizer.normalize(d));
    information::post_statistics(&normalized);
    let table = TermFrequencyTable::build(&normalized)?;

    let lemmatized_config = args.config.lemmatized();
    let lemmatized_owned;
    let lemmatized: &[Document] = if args.config.lemmatize {
        &normalized
    } else {
        let normalizer = Normalizer::new(&lemmatized_config, lemmatizer);
        lemmatized_owned = parallelism::map_parallel(corpus, |d| normalizer.normalize(d));
        &lemmatized_owned
    };

    let pairs = corpus.iter().zip(lemmatized).collect_vec();
    let results = parallelism::map_parallel(&pairs, |(raw, lemmatized)| {
        (
            sentiment::score_document(raw, lexicon),
            sentiment::emotion_counts(lemmatized, lexicon),
        )
    });
    let mut songs = Vec::with_capacity(results.len());
    for (score, emotions) in results {
        let score = match score {
            Ok(score) => Some(score),
            Err(e) if e.is::<EmptyScoreSet>() => {
                warn!(target: "songlex", "{e}");
                None
            }
            Err(e) => return Err(e),
        };
        songs.push(Song { score, emotions });
    }

    let all = (0..corpus.len()).collect_vec();
    let emotions: EmotionVector = songs.iter().map(|s| &s.emotions).sum();
    let (sentiment, line_sentiment) = sentiment_summaries(&songs, &all, "all songs");
    info!(
        target: "songlex",
        "all songs: {}; {}",
        output::summary_string(&sentiment),
        output::emotions_string(&output::emotions(&emotions))
    );

    let decades = match &groups {
        None => vec![],
        Some(groups) => {
            let index: HashMap<&str, usize> = corpus
                .iter()
                .enumerate()
                .map(|(i, d)| (d.id.as_str(), i))
                .collect();
            let mut decades = vec![];
            for (&decade, docs) in groups {
                let members = docs.iter().map(|d| index[d.id.as_str()]).collect_vec();
                decades.push(calc_decade(args, decade, &members, corpus, &table, &songs)?);
            }
            decades
        }
    };

    Ok(Output {
        config: args.config.clone(),
        documents: corpus.len(),
        tokens: table.total_tokens(),
        distinct_terms: table.terms().len(),
        top_terms: output::terms(&table.top_n(args.top), table.total_tokens()),
        emotions: output::emotions(&emotions),
        sentiment,
        line_sentiment,
        songs: corpus
            .iter()
            .zip(&songs)
            .map(|(doc, song)| ODocument {
                id: doc.id.clone(),
                year: doc.year,
                decade: doc.year.map(Decade::of),
                lines: song.score.as_ref().map_or(0, |s| s.line_scores.len()),
                mean: song.score.as_ref().map(|s| s.mean),
                emotions: output::emotions(&song.emotions),
            })
            .collect_vec(),
        decades,
    })
}

fn calc_decade(
    args: &AnalysisArgs,
    decade: Decade,
    members: &[usize],
    corpus: &[Document],
    table: &TermFrequencyTable,
    songs: &[Song],
) -> Result<ODecade> {
    let ids = members.iter().map(|&i| corpus[i].id.as_str()).collect_vec();
    let counts = table.group_counts(&ids)?;
    let ratios = table.per_group_frequency(&ids)?;
    let top_terms = frequency::rank(&counts)
        .into_iter()
        .take(args.top)
        .map(|(term, count)| OTerm {
            ratio: ratios[&term],
            term,
            count,
        })
        .collect_vec();
    let emotions: EmotionVector = members.iter().map(|&i| &songs[i].emotions).sum();
    let label = decade.to_string();
    let (sentiment, line_sentiment) = sentiment_summaries(songs, members, &label);
    let d = ODecade {
        decade,
        documents: members.len(),
        tokens: counts.values().sum(),
        top_terms,
        emotions: output::emotions(&emotions),
        sentiment,
        line_sentiment,
    };
    debug!(
        target: "songlex",
        "{}: {} songs, {} tokens, top terms: {}; {}; {}",
        label,
        d.documents,
        d.tokens,
        d.top_terms.iter().take(5).map(|t| t.term.as_str()).join(", "),
        output::summary_string(&d.sentiment),
        output::emotions_string(&d.emotions)
    );
    Ok(d)
}

/// Summaries of document means and of individual line scores.
fn sentiment_summaries(
    songs: &[Song],
    members: &[usize],
    what: &str,
) -> (Option<Summary>, Option<Summary>) {
    let scores = members.iter().filter_map(|&i| songs[i].score.as_ref()).collect_vec();
    let means = scores.iter().map(|s| s.mean).collect_vec();
    let lines = scores
        .iter()
        .flat_map(|s| s.line_scores.iter().copied())
        .collect_vec();
    (
        optional_summary(&means, what),
        optional_summary(&lines, what),
    )
}

fn optional_summary(scores: &[f64], what: &str) -> Option<Summary> {
    match summary::distribution_summary(scores) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(target: "songlex", "{what}: {e}");
            None
        }
    }
}
