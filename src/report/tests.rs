use super::*;
use crate::criteria::ModelEntry;
use crate::topsis::RankedRow;

fn models() -> Vec<ModelEntry> {
    vec![
        ModelEntry::new("albert-base-v2", "ALBERT"),
        ModelEntry::new("roberta-base", "RoBERTa"),
        ModelEntry::new("distilbert-base-uncased", "DistilBERT"),
    ]
}

fn ranking() -> Vec<RankedRow> {
    vec![
        RankedRow {
            row_index: 0,
            rank: 2,
            score: 0.6,
        },
        RankedRow {
            row_index: 1,
            rank: 3,
            score: 0.1,
        },
        RankedRow {
            row_index: 2,
            rank: 1,
            score: 0.9,
        },
    ]
}

#[test]
fn test_assemble_sorts_by_rank() {
    let rows = assemble(&models(), &ranking()).unwrap();

    let ids: Vec<_> = rows.iter().map(|r| r.model_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["distilbert-base-uncased", "albert-base-v2", "roberta-base"]
    );
    assert_eq!(rows[0].display_name, "DistilBERT");
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].score, 0.9);
}

#[test]
fn test_assemble_row_count_mismatch() {
    let err = assemble(&models()[..2], &ranking()).unwrap_err();
    assert!(matches!(
        err,
        ReportError::RowCountMismatch {
            models: 2,
            ranks: 3
        }
    ));
}

#[test]
fn test_assemble_unknown_row() {
    let mut ranking = ranking();
    ranking[1].row_index = 7;
    let err = assemble(&models(), &ranking).unwrap_err();
    assert!(matches!(err, ReportError::UnknownRow { row_index: 7 }));
}

#[test]
fn test_write_csv_identifiers() {
    let rows = assemble(&models(), &ranking()).unwrap();
    let mut out = Vec::new();

    write_csv(&mut out, &rows, NameColumn::Identifier).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Model Name,Rank\ndistilbert-base-uncased,1\nalbert-base-v2,2\nroberta-base,3\n"
    );
}

#[test]
fn test_write_csv_display_names() {
    let rows = assemble(&models(), &ranking()).unwrap();
    let mut out = Vec::new();

    write_csv(&mut out, &rows, NameColumn::DisplayName).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Model Name,Rank\nDistilBERT,1\n"));
}

#[test]
fn test_write_json() {
    let rows = assemble(&models(), &ranking()).unwrap();
    let mut out = Vec::new();

    write_json(&mut out, &rows).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value[0]["model_id"], "distilbert-base-uncased");
    assert_eq!(value[2]["rank"], 3);
}

#[test]
fn test_report_format_parse() {
    assert_eq!("csv".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
    assert_eq!(" JSON ".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    assert!(matches!(
        "xlsx".parse::<ReportFormat>(),
        Err(ReportError::UnknownFormat { .. })
    ));
}

#[test]
fn test_save_report_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/model_ranking.csv");
    let rows = assemble(&models(), &ranking()).unwrap();

    save_report(&path, &rows, ReportFormat::Csv, NameColumn::Identifier).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert_eq!(text.lines().next(), Some("Model Name,Rank"));
}
