//! End-to-end parsing tests (source -> table -> verify)

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Cursor;
use tabulist::prelude::*;

fn parse(text: &str) -> Vec<Vec<String>> {
    let table = CsvReader::read_str(text, &CsvReadOptions::default()).unwrap();
    table.assert_consistent();
    table.to_strings()
}

/// Parse with the `csv` crate as a reference reader
fn reference(text: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|record| record.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_simple_record() {
    assert_eq!(parse("a,b,c\n"), vec![vec!["a", "b", "c"]]);
}

#[test]
fn test_quoted_delimiter() {
    assert_eq!(parse("a,\"b,c\",d\n"), vec![vec!["a", "b,c", "d"]]);
}

#[test]
fn test_escaped_quotes() {
    let rows = parse("a,\"\"\"b\"\"\",c");
    assert_eq!(rows[0][1], "\"b\"");
    assert_eq!(rows, vec![vec!["a", "\"b\"", "c"]]);
}

#[test]
fn test_strip_and_discard() {
    let options = CsvReadOptions::new()
        .strip_spaces(true)
        .discard_empty_cells(true);
    let table = CsvReader::read_str("a, ,b", &options).unwrap();
    assert_eq!(table.to_strings(), vec![vec!["a", "b"]]);
}

#[test]
fn test_space_delimiter_forces_flags() {
    let options = CsvReadOptions::new()
        .delimiter(b' ')
        .strip_spaces(true)
        .discard_empty_cells(false);
    let resolved = options.resolved().unwrap();
    assert!(!resolved.strip_spaces);
    assert!(resolved.discard_empty_cells);

    let table = CsvReader::read_str("x  y   \"a b\"\n", &options).unwrap();
    assert_eq!(table.to_strings(), vec![vec!["x", "y", "a b"]]);
}

#[test]
fn test_chunk_boundary_inside_quoted_field() {
    let text = "id,comment\n1,\"first, with comma\"\n2,\"multi\nline \"\"quoted\"\"\"\n";
    let whole = CsvReader::read_str(text, &CsvReadOptions::default()).unwrap();

    for chunk_size in 1..=text.len() {
        let options = CsvReadOptions::default().chunk_size(chunk_size);
        let streamed = CsvReader::read(Cursor::new(text), &options).unwrap();
        assert_eq!(streamed, whole, "chunk size {chunk_size}");
    }
    assert_eq!(whole.value(2, 1), Some("multi\nline \"quoted\""));
}

#[test]
fn test_matches_reference_reader() {
    let fixtures = [
        "name,age,city\nAlice,30,Boston\nBob,25,\"New York, NY\"\n",
        "\"multi\nline\",x\r\ny,\"say \"\"hi\"\"\"\r\n",
        "a,,c\n,\n",
        "\"\",x\n",
        "no,trailing,newline",
        " leading, trailing ,\" both \"\n",
    ];
    for text in fixtures {
        assert_eq!(parse(text), reference(text), "input {text:?}");
    }
}

#[test]
fn test_customer_lookup() {
    let text = "Name,Age,City\n\
                Ada Lovelace,36,London\n\
                Julian Applebottom,42,Springfield\n";
    let table = CsvReader::read_str(text, &CsvReadOptions::default()).unwrap();

    let header = table.row(0).unwrap();
    let age_column = header.position_of_value("Age").unwrap();

    let (_, name_cell) = table.find("Julian Applebottom").unwrap();
    let (_, row) = table.parent_row(name_cell).unwrap();
    let age: u32 = row.value(age_column).unwrap().parse().unwrap();
    assert_eq!(age, 42);
}

#[test]
fn test_empty_and_blank_sources() {
    assert!(parse("").is_empty());
    assert_eq!(parse("\n"), vec![vec![""]]);
    assert_eq!(parse("a\n\nb\n"), vec![vec!["a"], vec![""], vec!["b"]]);
}

#[test]
fn test_custom_delimiter_and_quote() {
    let options = CsvReadOptions::new().delimiter(b';').quote(b'\'');
    let table = CsvReader::read_str("'a;b';'it''s'\n", &options).unwrap();
    assert_eq!(table.to_strings(), vec![vec!["a;b", "it's"]]);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let table = CsvReader::read_bytes(b"ok,\xff\xfe\n", &CsvReadOptions::default()).unwrap();
    assert_eq!(table.value(0, 0), Some("ok"));
    assert_eq!(table.value(0, 1), Some("\u{FFFD}\u{FFFD}"));
}

proptest! {
    #[test]
    fn prop_chunk_size_never_changes_result(
        text in "[ab,\" \r\n]{0,64}",
        chunk_size in 1usize..16,
        strip in any::<bool>(),
        discard in any::<bool>(),
    ) {
        let options = CsvReadOptions::new()
            .strip_spaces(strip)
            .discard_empty_cells(discard)
            .chunk_size(chunk_size);
        let whole = CsvReader::read_str(&text, &options).unwrap();
        let streamed = CsvReader::read(Cursor::new(text.as_bytes()), &options).unwrap();
        whole.assert_consistent();
        prop_assert_eq!(streamed, whole);
    }
}
