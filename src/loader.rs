//! Reading a corpus of lyric files from disk.
//!
//! A corpus directory holds one `*.txt` file per song; the file stem is
//! the document identifier. Subdirectories named after a decade (`1980s`)
//! give their songs the first year of that decade, and `others` holds songs
//! of unknown date. A JSON manifest `{"song_id": 1987, ...}` can assign
//! exact years and takes precedence over directory names.
//!
//! The scraper writes every song to `all/` and, when sorting by decade,
//! once more to `decades/<decade>/`. If a `decades/` subdirectory exists,
//! it is read as the corpus and `all/` is ignored; otherwise `all/` is read
//! as a folder of undated songs.

use crate::decades::Decade;
use crate::errors::{self, Result};
use crate::input::{Corpus, Document, Year};
use crate::lexicon::read_file;
use itertools::Itertools;
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

const UNDATED_DIR: &str = "others";
const ALL_DIR: &str = "all";
const DECADES_DIR: &str = "decades";

/// Latest year a manifest may assign.
pub const MAX_YEAR: Year = 9999;

/// Load every document, or fail as a whole.
pub fn load_corpus(dir: &Path, years: Option<&Path>) -> Result<Corpus> {
    if !dir.is_dir() {
        return Err(errors::input_not_found(dir));
    }
    info!(target: "songlex", "read: {}", dir.display());
    let decades_dir = dir.join(DECADES_DIR);
    let mut corpus = if decades_dir.is_dir() {
        debug!(target: "songlex", "decade folders under {}", decades_dir.display());
        read_tree(&decades_dir)?
    } else {
        read_tree(dir)?
    };
    if corpus.is_empty() {
        return Err(errors::invalid_input(format!(
            "no .txt files in {}",
            dir.display()
        )));
    }
    check_unique(&corpus)?;
    if let Some(path) = years {
        assign_years(&mut corpus, &read_years(path)?);
    }
    Ok(corpus)
}

/// Text files directly in `dir` and in its decade, `others` and `all` folders.
fn read_tree(dir: &Path) -> Result<Corpus> {
    let mut corpus = vec![];
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
            let year = match name.as_deref() {
                Some(UNDATED_DIR) | Some(ALL_DIR) => None,
                Some(label) => match Decade::from_label(label) {
                    Some(decade) => Some(decade.0),
                    None => {
                        debug!(target: "songlex", "skip directory: {}", path.display());
                        continue;
                    }
                },
                None => continue,
            };
            for file in sorted_entries(&path)? {
                if is_text_file(&file) {
                    corpus.push(read_document(&file, year)?);
                }
            }
        } else if is_text_file(&path) {
            corpus.push(read_document(&path, None)?);
        }
    }
    Ok(corpus)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = vec![];
    for entry in fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}

fn is_text_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|e| e == "txt")
}

pub fn read_document(path: &Path, year: Option<Year>) -> Result<Document> {
    let id = match path.file_stem() {
        None => {
            return Err(errors::invalid_input(format!(
                "no file name: {}",
                path.display()
            )));
        }
        Some(stem) => stem.to_string_lossy().into_owned(),
    };
    let text = read_file(path)?;
    Ok(Document {
        id,
        year,
        lines: text.lines().map(|l| l.to_owned()).collect_vec(),
    })
}

fn check_unique(corpus: &[Document]) -> Result<()> {
    let mut seen = HashMap::new();
    for doc in corpus {
        if let Some(year) = seen.insert(doc.id.as_str(), doc.year) {
            return Err(errors::invalid_input(format!(
                "document '{}' appears twice ({} and {})",
                doc.id,
                year_label(year),
                year_label(doc.year)
            )));
        }
    }
    Ok(())
}

fn year_label(year: Option<Year>) -> String {
    match year {
        None => UNDATED_DIR.to_owned(),
        Some(y) => Decade::of(y).to_string(),
    }
}

pub fn read_years(path: &Path) -> Result<BTreeMap<String, Year>> {
    let data = read_file(path)?;
    let years: BTreeMap<String, Year> = serde_json::from_str(&data)?;
    for (id, &year) in &years {
        if year > MAX_YEAR {
            return Err(errors::invalid_input(format!(
                "{}: implausible year {year} for '{id}'",
                path.display()
            )));
        }
    }
    Ok(years)
}

fn assign_years(corpus: &mut [Document], years: &BTreeMap<String, Year>) {
    let mut assigned = 0;
    for doc in corpus.iter_mut() {
        if let Some(&year) = years.get(&doc.id) {
            doc.year = Some(year);
            assigned += 1;
        }
    }
    if assigned < years.len() {
        warn!(
            target: "songlex",
            "years manifest lists {} songs that are not in the corpus",
            years.len() - assigned
        );
    }
}
