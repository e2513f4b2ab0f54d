//! Extraction of samples from polars frames.

use baryfit_primitives::{Samples, Vector};
use polars::prelude::*;

use crate::UtilsError;

/// Convert a numeric series of any dtype into a [`Vector`].
///
/// Values are cast to `Float64`; nulls become NaN.
///
/// # Errors
/// Returns `UtilsError::Polars` if the series cannot be cast to `Float64`.
pub fn series_to_vector(series: &Series) -> Result<Vector, UtilsError> {
    let values = series.cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Read nodes and values from two columns of a DataFrame.
///
/// # Arguments
/// * `df` - Input DataFrame
/// * `x_col` - Column holding the nodes
/// * `y_col` - Column holding the values
///
/// # Errors
/// Returns `UtilsError::MissingColumn` if either column is absent, or
/// `UtilsError::Polars` if a column is not numeric.
pub fn frame_samples(df: &DataFrame, x_col: &str, y_col: &str) -> Result<Samples, UtilsError> {
    let x = column_vector(df, x_col)?;
    let y = column_vector(df, y_col)?;
    Ok(Samples::new(x, y)?)
}

/// Collect two columns of a LazyFrame into samples.
///
/// # Errors
/// Returns `UtilsError::Polars` if the query fails (including unknown
/// columns) or a column is not numeric.
pub fn lazy_samples(lf: LazyFrame, x_col: &str, y_col: &str) -> Result<Samples, UtilsError> {
    let df = lf.select([col(x_col), col(y_col)]).collect()?;
    frame_samples(&df, x_col, y_col)
}

fn column_vector(df: &DataFrame, name: &str) -> Result<Vector, UtilsError> {
    let column = df.column(name).map_err(|_| UtilsError::MissingColumn(name.to_string()))?;
    series_to_vector(column.as_materialized_series())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_to_vector_casts_integers() {
        let s = Series::new("a".into(), &[1_i32, 2, 3]);
        assert_eq!(series_to_vector(&s).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn series_to_vector_nulls_become_nan() {
        let s = Series::new("a".into(), &[Some(1.5_f32), None, Some(-2.0)]);
        let v = series_to_vector(&s).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], 1.5);
        assert!(v[1].is_nan());
        assert_eq!(v[2], -2.0);
    }

    #[test]
    fn frame_samples_reads_columns() {
        let df = df! {
            "x" => &[0_i64, 1, 2, 3],
            "y" => &[1.0, 2.0, 5.0, 10.0],
            "z" => &["a", "b", "c", "d"],
        }
        .unwrap();

        let samples = frame_samples(&df, "x", "y").unwrap();
        assert_eq!(samples.x().as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(samples.y().as_slice(), &[1.0, 2.0, 5.0, 10.0]);
    }

    #[test]
    fn frame_samples_missing_column() {
        let df = df! { "x" => &[0.0, 1.0] }.unwrap();
        let err = frame_samples(&df, "x", "y").unwrap_err();
        assert!(matches!(err, UtilsError::MissingColumn(ref c) if c == "y"));
    }

    #[test]
    fn lazy_samples_selects_columns() {
        let lf = df! {
            "t" => &[10_u32, 20, 30],
            "v" => &[Some(0.5), None, Some(1.5)],
        }
        .unwrap()
        .lazy();

        let samples = lazy_samples(lf, "t", "v").unwrap();
        assert_eq!(samples.x().as_slice(), &[10.0, 20.0, 30.0]);
        assert!(samples.y()[1].is_nan());
    }

    #[test]
    fn lazy_samples_unknown_column() {
        let lf = df! { "t" => &[1.0, 2.0] }.unwrap().lazy();
        assert!(matches!(lazy_samples(lf, "t", "missing"), Err(UtilsError::Polars(_))));
    }
}
