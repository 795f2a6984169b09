//! Grouping documents by decade.

use crate::errors::{self, Result};
use crate::input::{Document, Year};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type Years = (Year, Year);

/// A decade, identified by its first year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Decade(pub Year);

impl Decade {
    pub fn of(year: Year) -> Decade {
        Decade(year / 10 * 10)
    }

    /// Parse a directory label such as `1980s`.
    pub fn from_label(label: &str) -> Option<Decade> {
        let year = label.strip_suffix('s')?;
        if year.len() != 4 {
            return None;
        }
        let year: Year = year.parse().ok()?;
        if year % 10 != 0 {
            return None;
        }
        Some(Decade(year))
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Split a corpus by decade; every document must have a year.
pub fn partition_by_decade<'a, F>(
    corpus: &'a [Document],
    year_of: F,
) -> Result<BTreeMap<Decade, Vec<&'a Document>>>
where
    F: Fn(&Document) -> Option<Year>,
{
    let mut groups: BTreeMap<Decade, Vec<&Document>> = BTreeMap::new();
    for doc in corpus {
        match year_of(doc) {
            None => return Err(errors::unresolvable_year(&doc.id)),
            Some(year) => groups.entry(Decade::of(year)).or_default().push(doc),
        }
    }
    Ok(groups)
}

/// Year range covered by the documents that have a year.
pub fn get_years(corpus: &[Document]) -> Option<Years> {
    let mut years = None;
    for year in corpus.iter().filter_map(|d| d.year) {
        years = match years {
            None => Some((year, year.saturating_add(1))),
            Some((a, b)) => Some((a.min(year), b.max(year.saturating_add(1)))),
        };
    }
    years
}

pub fn pretty_years(p: &Years) -> String {
    format!("{}-{}", p.0, p.1 - 1)
}

pub fn pretty_decades(decades: &[Decade]) -> String {
    match decades {
        [first, second, _, _, .., last] => format!("{first}, {second}, ..., {last}"),
        _ => decades.iter().join(", "),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::UnresolvableYear;

    #[test]
    fn decade_of_year() {
        assert_eq!(Decade::of(1987), Decade(1980));
        assert_eq!(Decade::of(1980), Decade(1980));
        assert_eq!(Decade::of(1989), Decade(1980));
        assert_eq!(Decade::of(1990), Decade(1990));
        assert_eq!(format!("{}", Decade(1980)), "1980s");
    }

    #[test]
    fn labels() {
        assert_eq!(Decade::from_label("1980s"), Some(Decade(1980)));
        assert_eq!(Decade::from_label("1985s"), None);
        assert_eq!(Decade::from_label("others"), None);
        assert_eq!(Decade::from_label("80s"), None);
    }

    #[test]
    fn partition() {
        let corpus = vec![
            Document::new("a", Some(1987), &[]),
            Document::new("b", Some(1981), &[]),
            Document::new("c", Some(2003), &[]),
        ];
        let groups = partition_by_decade(&corpus, |d| d.year).unwrap();
        assert_eq!(groups.keys().copied().collect_vec(), [Decade(1980), Decade(2000)]);
        let ids = groups[&Decade(1980)].iter().map(|d| d.id.as_str()).collect_vec();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(get_years(&corpus), Some((1981, 2004)));
    }

    #[test]
    fn partition_rejects_missing_year() {
        let corpus = vec![
            Document::new("a", Some(1987), &[]),
            Document::new("b", None, &[]),
        ];
        let e = partition_by_decade(&corpus, |d| d.year).unwrap_err();
        assert!(e.is::<UnresolvableYear>());
        assert_eq!(format!("{e}"), "no year known for document 'b'");
    }

    #[test]
    fn year_range_at_the_top_of_the_scale() {
        let corpus = vec![
            Document::new("a", Some(1987), &[]),
            Document::new("b", Some(Year::MAX), &[]),
        ];
        assert_eq!(get_years(&corpus), Some((1987, Year::MAX)));
        assert_eq!(Decade::of(Year::MAX), Decade(65530));
    }

    #[test]
    fn pretty() {
        assert_eq!(pretty_years(&(1981, 2004)), "1981-2003");
        assert_eq!(pretty_decades(&[Decade(1990)]), "1990s");
        assert_eq!(
            pretty_decades(&[Decade(1970), Decade(1980), Decade(1990), Decade(2000)]),
            "1970s, 1980s, 1990s, 2000s"
        );
        assert_eq!(
            pretty_decades(&[
                Decade(1970),
                Decade(1980),
                Decade(1990),
                Decade(2000),
                Decade(2010)
            ]),
            "1970s, 1980s, ..., 2010s"
        );
    }
}
