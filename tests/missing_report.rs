use swqi_explore::{
    count_missing, summarize_missing, write_missing, Column, DataTable, Dataset, ReportError,
    TableColumn, TableResult,
};

fn report<D: Dataset>(dataset: &D) -> String {
    let mut out: Vec<u8> = Vec::new();
    write_missing(dataset, &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("report is utf-8")
}

fn water_quality() -> TableResult<DataTable> {
    DataTable::new()
        .with_column(TableColumn::<i32>::with_values("a", [Some(1), None, Some(3)]))?
        .with_column(TableColumn::<f64>::with_values("b", [None, None, None]))
}

#[test]
fn reports_counts_per_column_in_order() -> TableResult<()> {
    let table = water_quality()?;
    assert_eq!(report(&table), "a\nfalse 2\ntrue 1\n\nb\ntrue 3\n\n");
    Ok(())
}

#[test]
fn column_without_missing_values_omits_true() -> TableResult<()> {
    let table = DataTable::new()
        .with_column(TableColumn::<String>::with_values(
            "site",
            [Some("Bear".to_string()), Some(String::new())],
        ))?;
    assert_eq!(report(&table), "site\nfalse 2\n\n");
    Ok(())
}

#[test]
fn equal_counts_keep_first_seen_order() -> TableResult<()> {
    let table = DataTable::new()
        .with_column(TableColumn::<i32>::with_values("x", [None, Some(1)]))?
        .with_column(TableColumn::<i32>::with_values("y", [Some(1), None]))?;
    assert_eq!(report(&table), "x\ntrue 1\nfalse 1\n\ny\nfalse 1\ntrue 1\n\n");
    Ok(())
}

#[test]
fn empty_inputs_do_not_fail() -> TableResult<()> {
    assert_eq!(report(&DataTable::new()), "");

    let table = DataTable::new().with_column(TableColumn::<bool>::new("empty"))?;
    assert_eq!(report(&table), "empty\n\n");
    Ok(())
}

#[test]
fn one_block_per_column_and_counts_cover_every_row() -> TableResult<()> {
    let table = DataTable::new()
        .with_column(TableColumn::<i32>::with_values(
            "ph",
            (0..17).map(|i| if i % 3 == 0 { None } else { Some(i) }),
        ))?
        .with_column(TableColumn::<i64>::with_values("do", (0..17).map(|_| None)))?
        .with_column(TableColumn::<u32>::new("temp"))?;

    let text = report(&table);
    let blocks: Vec<&str> = text.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), table.column_count());

    for (block, name) in blocks.iter().zip(table.column_names()) {
        let mut lines = block.lines();
        assert_eq!(lines.next(), Some(name));
        let total: usize = lines
            .map(|line| {
                let (_, count) = line.split_once(' ').expect("state and count");
                count.parse::<usize>().expect("numeric count")
            })
            .sum();
        let column = table.column(name).expect("listed column");
        assert_eq!(total, column.len());
    }
    Ok(())
}

#[test]
fn summary_matches_counts() -> TableResult<()> {
    let table = water_quality()?;
    let summary = summarize_missing(&table).expect("all columns resolvable");
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].name, "a");
    assert_eq!(summary[0].counts.entries(), &[(false, 2), (true, 1)]);
    assert_eq!(summary[0].counts.missing(), 1);
    assert_eq!(summary[0].counts.present(), 2);
    assert_eq!(summary[1].counts.present(), 0);
    assert_eq!(summary[1].counts.total(), 3);

    let a = table.column("a").expect("a");
    assert_eq!(count_missing(a), summary[0].counts);
    Ok(())
}

#[test]
fn report_does_not_mutate_the_dataset() -> TableResult<()> {
    let table = water_quality()?;
    let before = table.render();
    report(&table);
    assert_eq!(table.render(), before);
    Ok(())
}

/// A dataset backed by plain vectors, to check the report only needs the trait.
struct Columns(Vec<TableColumn<String>>);

impl Dataset for Columns {
    fn column_names(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.name()).collect()
    }

    fn column(&self, name: &str) -> Option<&dyn Column> {
        self.0
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c as &dyn Column)
    }
}

#[test]
fn any_dataset_implementation_can_be_reported() {
    let data = Columns(vec![TableColumn::with_values(
        "station",
        [None, Some("0317".to_string()), Some("0322".to_string())],
    )]);
    assert_eq!(report(&data), "station\nfalse 2\ntrue 1\n\n");
}

struct Dangling;

impl Dataset for Dangling {
    fn column_names(&self) -> Vec<&str> {
        vec!["ghost"]
    }

    fn column(&self, _name: &str) -> Option<&dyn Column> {
        None
    }
}

#[test]
fn unresolvable_column_is_an_error() {
    let mut out: Vec<u8> = Vec::new();
    let err = write_missing(&Dangling, &mut out).unwrap_err();
    assert!(matches!(err, ReportError::UnknownColumn(ref name) if name == "ghost"));
    assert!(out.is_empty());
}

#[test]
fn float_nan_cells_count_as_missing() -> TableResult<()> {
    let table = DataTable::new()
        .with_column(TableColumn::<f64>::with_values("x", [Some(f64::NAN), Some(1.0)]))?
        .with_column(TableColumn::<f32>::with_values("y", [Some(2.0), Some(f32::NAN)]))?;
    assert_eq!(report(&table), "x\ntrue 1\nfalse 1\n\ny\nfalse 1\ntrue 1\n\n");
    Ok(())
}

#[test]
fn nan_appended_through_a_row_is_stored_as_missing() -> TableResult<()> {
    let mut table = DataTable::new().with_column(TableColumn::<f64>::new("wqi"))?;
    table.append_row(vec![f64::NAN.into()])?;
    table.append_row(vec![61.0_f64.into()])?;

    assert_eq!(table.get_row(0)?, vec![swqi_explore::Value::Null]);
    assert_eq!(report(&table), "wqi\ntrue 1\nfalse 1\n\n");
    Ok(())
}
