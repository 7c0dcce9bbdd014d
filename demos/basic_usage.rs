use std::error::Error;

use swqi_explore::{
    find_missing, percentage, Column, DataPaths, DataTable, Dataset, TableColumn, Value,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let paths = DataPaths::default();
    println!("Original data: {}", paths.original.display());
    println!("Processed data: {}\n", paths.processed.display());

    let mut table = DataTable::new();
    table
        .add_column(TableColumn::<String>::new("Site"))?
        .add_column(TableColumn::<f64>::new("WQI"))?
        .add_column(TableColumn::<i32>::new("Year"))?;

    table.append_row(vec!["Bear Creek".into(), 78.5_f64.into(), 2018.into()])?;
    table.append_row(vec!["Issaquah Creek".into(), Value::Null, 2018.into()])?;
    table.append_row(vec!["Juanita Creek".into(), 61.0_f64.into(), Value::Null])?;
    table.append_row(vec![Value::Null, Value::Null, 2019.into()])?;

    println!("{}\n", table);
    find_missing(&table)?;

    let wqi = table.column("WQI").ok_or("WQI column missing")?;
    let missing = (0..wqi.len()).filter(|&idx| wqi.is_missing(idx)).count();
    println!(
        "WQI missing in {:.1}% of rows",
        percentage(missing, wqi.len())?
    );
    Ok(())
}
