//! Input table reading.
//!
//! The input is a CSV with at least `ID`, `TITLE` and `CONTENT` columns and
//! an optional `SOURCE`. Header names are matched case-insensitively —
//! scraper exports disagree on casing, so everything is upper-cased before
//! lookup.
//!
//! Robustness posture follows the rest of the pipeline: a missing required
//! *column* aborts the run with a diagnostic naming the column (failing late
//! would surface as an opaque empty artifact), while a missing *field* in an
//! individual row degrades to an empty string.

use std::path::Path;

use crate::{Article, Error, Result};

/// Read all articles from the CSV at `path`, in table order.
///
/// # Errors
///
/// Fails when the file cannot be read or when any of `ID`, `TITLE`,
/// `CONTENT` is absent from the header ([`Error::MissingColumn`]).
pub fn read_articles(path: &Path) -> Result<Vec<Article>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(str::to_uppercase)
        .collect();
    let column = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(Error::MissingColumn(name))
    };

    let id_col = column("ID")?;
    let title_col = column("TITLE")?;
    let content_col = column("CONTENT")?;
    let source_col = headers.iter().position(|h| h == "SOURCE");

    let mut articles = Vec::new();
    for record in reader.records() {
        let record = record?;
        articles.push(Article {
            id: record.get(id_col).unwrap_or("").to_owned(),
            title: record.get(title_col).unwrap_or("").to_owned(),
            content: record.get(content_col).unwrap_or("").to_owned(),
            source: source_col.and_then(|c| record.get(c)).map(str::to_owned),
        });
    }
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_articles_in_table_order() {
        let file = write_input(
            "ID,TITLE,CONTENT,SOURCE\n\
             1,Tiêu đề một,Nội dung một,baomoi\n\
             2,Tiêu đề hai,Nội dung hai,vnexpress\n",
        );
        let articles = read_articles(file.path()).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "1");
        assert_eq!(articles[0].title, "Tiêu đề một");
        assert_eq!(articles[1].source.as_deref(), Some("vnexpress"));
    }

    #[test]
    fn headers_match_case_insensitively() {
        let file = write_input("id,Title,content\n7,t,c\n");
        let articles = read_articles(file.path()).unwrap();
        assert_eq!(articles[0].id, "7");
        assert_eq!(articles[0].source, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let file = write_input("ID,TITLE\n1,t\n");
        let err = read_articles(file.path()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn("CONTENT")));
    }

    #[test]
    fn short_row_degrades_to_empty_fields() {
        let file = write_input("ID,TITLE,CONTENT\n1,chỉ có tiêu đề\n");
        let articles = read_articles(file.path()).unwrap();
        assert_eq!(articles[0].content, "");
    }
}
