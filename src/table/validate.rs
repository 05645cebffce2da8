use crate::config::ColumnSelection;
use crate::table::error::TableError;
use crate::types::interval_scheme::IntervalScheme;

/// Checks that the declared columns exist among the file's headers.
///
/// Radial and direction columns are always required. The timestamp column is only
/// required when `scheme` splits rows by time.
///
/// # Errors
///
/// Every failure carries the list of available headers so the caller can show the
/// user what to pick from.
pub fn validate_columns(
    available: &[String],
    columns: &ColumnSelection,
    scheme: IntervalScheme,
) -> Result<(), TableError> {
    validate_plot_columns(available, columns)?;
    if scheme.requires_timestamp() {
        validate_timestamp_column(available, columns.timestamp.as_deref())?;
    }
    Ok(())
}

fn validate_plot_columns(available: &[String], columns: &ColumnSelection) -> Result<(), TableError> {
    if columns.radial.is_empty() || columns.direction.is_empty() {
        return Err(TableError::PlotColumnsNotProvided);
    }
    let has_radial = contains(available, &columns.radial);
    let has_direction = contains(available, &columns.direction);
    match (has_radial, has_direction) {
        (true, true) => Ok(()),
        (false, false) => Err(TableError::PlotColumnsNotFound {
            radial: columns.radial.clone(),
            direction: columns.direction.clone(),
            available: available.to_vec(),
        }),
        (false, true) => Err(TableError::RadialColumnNotFound {
            column: columns.radial.clone(),
            available: available.to_vec(),
        }),
        (true, false) => Err(TableError::DirectionColumnNotFound {
            column: columns.direction.clone(),
            available: available.to_vec(),
        }),
    }
}

fn validate_timestamp_column(available: &[String], timestamp: Option<&str>) -> Result<(), TableError> {
    let Some(column) = timestamp.filter(|name| !name.trim().is_empty()) else {
        return Err(TableError::TimestampNotProvided {
            available: available.to_vec(),
        });
    };
    if contains(available, column) {
        Ok(())
    } else {
        Err(TableError::TimestampColumnNotFound {
            column: column.to_string(),
            available: available.to_vec(),
        })
    }
}

fn contains(available: &[String], name: &str) -> bool {
    available.iter().any(|column| column == name)
}
