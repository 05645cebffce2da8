use crate::table::error::TableError;
use log::info;
use polars::frame::DataFrame;
use polars::prelude::*;
use std::path::Path;

/// Reads a comma-delimited file with a header row into a `DataFrame`.
///
/// Schema inference is disabled, so every column comes back as text exactly as it
/// appears in the file. Empty cells are nulls.
///
/// # Errors
///
/// Returns [`TableError::FileOpen`] if the file cannot be accessed and
/// [`TableError::CsvRead`] if its contents are not valid CSV.
pub fn read_table(path: &Path) -> Result<DataFrame, TableError> {
    std::fs::metadata(path).map_err(|e| TableError::FileOpen(path.to_path_buf(), e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| TableError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| TableError::CsvRead(path.to_path_buf(), e))?;

    info!(
        "Loaded {} rows and {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Header names of the frame, in file order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_every_column_as_text() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(
            "station,date_time,direction,speed_knots\n\
             CYLT,2000-01-04 12:00,200,2\n\
             CYLT,2000-01-04 13:00,150,0.00\n",
        );
        let df = read_table(file.path())?;
        assert_eq!(df.shape(), (2, 4));
        assert_eq!(
            column_names(&df),
            vec!["station", "date_time", "direction", "speed_knots"]
        );
        let speeds: Vec<Option<&str>> = df.column("speed_knots")?.str()?.into_iter().collect();
        assert_eq!(speeds, vec![Some("2"), Some("0.00")]);
        Ok(())
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let err = read_table(Path::new("/definitely/not/here.csv")).unwrap_err();
        match err {
            TableError::FileOpen(path, _) => assert_eq!(path, Path::new("/definitely/not/here.csv")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
