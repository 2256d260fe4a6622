use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "min_due", "total_due", "rate"])?;

    for i in 1..=rows {
        let min_due = (i % 50) * 10;
        let total_due = min_due * 20 + 100;
        wtr.write_record([
            i.to_string(),
            min_due.to_string(),
            total_due.to_string(),
            format!("{}.99", 5 + (i % 25)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
