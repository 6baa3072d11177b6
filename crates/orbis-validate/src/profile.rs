//! Per-column descriptive statistics.

use std::collections::HashSet;

use polars::prelude::*;

use orbis_common::{any_to_f64, cell_text, round_ratio};
use orbis_model::{ColumnKind, ColumnProfile, PROFILE_COLUMNS, ProfileSummary};

use crate::error::Result;

const MAX_SAMPLE_VALUES: usize = 5;

/// Profiles every column, in column order.
pub fn column_profiles(df: &DataFrame) -> Vec<ColumnProfile> {
    df.get_columns().iter().map(profile_column).collect()
}

/// Profiles every column and renders the result as a table.
pub fn profile_columns(df: &DataFrame) -> Result<DataFrame> {
    profiles_frame(&column_profiles(df))
}

/// Label used in the `dtype` column of the profile.
pub fn dtype_label(dtype: &DataType) -> String {
    match dtype {
        DataType::Int8 => "int8".to_string(),
        DataType::Int16 => "int16".to_string(),
        DataType::Int32 => "int32".to_string(),
        DataType::Int64 => "int64".to_string(),
        DataType::UInt8 => "uint8".to_string(),
        DataType::UInt16 => "uint16".to_string(),
        DataType::UInt32 => "uint32".to_string(),
        DataType::UInt64 => "uint64".to_string(),
        DataType::Float32 => "float32".to_string(),
        DataType::Float64 => "float64".to_string(),
        DataType::String => "string".to_string(),
        DataType::Boolean => "bool".to_string(),
        other => other.to_string(),
    }
}

fn profile_column(column: &Column) -> ColumnProfile {
    let count = column.len();
    let null_count = column.null_count();
    let non_null_count = count - null_count;

    let mut distinct: HashSet<String> = HashSet::new();
    let mut samples: Vec<String> = Vec::new();
    for idx in 0..count {
        let Some(text) = cell_text(column.get(idx).unwrap_or(AnyValue::Null)) else {
            continue;
        };
        if distinct.insert(text.clone()) && samples.len() < MAX_SAMPLE_VALUES {
            samples.push(text);
        }
    }

    let summary = if ColumnKind::of(column.dtype()).is_numeric() {
        numeric_summary(column)
    } else {
        ProfileSummary::Samples(samples)
    };

    ColumnProfile {
        column_name: column.name().to_string(),
        dtype: dtype_label(column.dtype()),
        count: count as u64,
        non_null_count: non_null_count as u64,
        null_count: null_count as u64,
        null_pct: round_ratio(null_count, count),
        num_unique: distinct.len() as u64,
        summary,
    }
}

fn numeric_summary(column: &Column) -> ProfileSummary {
    let values: Vec<f64> = (0..column.len())
        .filter_map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect();

    if values.is_empty() {
        return ProfileSummary::Numeric {
            min: None,
            max: None,
            mean: None,
            std: None,
        };
    }

    let n = values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / n;
    // Sample standard deviation (n - 1)
    let std = (values.len() >= 2).then(|| {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (n - 1.0)).sqrt()
    });

    ProfileSummary::Numeric {
        min: Some(min),
        max: Some(max),
        mean: Some(mean),
        std,
    }
}

/// Renders profile records with the fixed profile columns.
pub fn profiles_frame(profiles: &[ColumnProfile]) -> Result<DataFrame> {
    let mut names = Vec::with_capacity(profiles.len());
    let mut dtypes = Vec::with_capacity(profiles.len());
    let mut counts = Vec::with_capacity(profiles.len());
    let mut non_null = Vec::with_capacity(profiles.len());
    let mut nulls = Vec::with_capacity(profiles.len());
    let mut null_pct = Vec::with_capacity(profiles.len());
    let mut unique = Vec::with_capacity(profiles.len());
    let mut mins: Vec<Option<f64>> = Vec::with_capacity(profiles.len());
    let mut maxs: Vec<Option<f64>> = Vec::with_capacity(profiles.len());
    let mut means: Vec<Option<f64>> = Vec::with_capacity(profiles.len());
    let mut stds: Vec<Option<f64>> = Vec::with_capacity(profiles.len());
    let mut samples: Vec<Option<String>> = Vec::with_capacity(profiles.len());

    for profile in profiles {
        names.push(profile.column_name.clone());
        dtypes.push(profile.dtype.clone());
        counts.push(profile.count);
        non_null.push(profile.non_null_count);
        nulls.push(profile.null_count);
        null_pct.push(profile.null_pct);
        unique.push(profile.num_unique);
        match &profile.summary {
            ProfileSummary::Numeric {
                min,
                max,
                mean,
                std,
            } => {
                mins.push(*min);
                maxs.push(*max);
                means.push(*mean);
                stds.push(*std);
            }
            ProfileSummary::Samples(_) => {
                mins.push(None);
                maxs.push(None);
                means.push(None);
                stds.push(None);
            }
        }
        samples.push(profile.sample_values());
    }

    let series = [
        Series::new("".into(), names),
        Series::new("".into(), dtypes),
        Series::new("".into(), counts),
        Series::new("".into(), non_null),
        Series::new("".into(), nulls),
        Series::new("".into(), null_pct),
        Series::new("".into(), unique),
        Series::new("".into(), mins),
        Series::new("".into(), maxs),
        Series::new("".into(), means),
        Series::new("".into(), stds),
        Series::new("".into(), samples),
    ];
    let columns: Vec<Column> = PROFILE_COLUMNS
        .iter()
        .zip(series)
        .map(|(name, series)| series.with_name((*name).into()).into_column())
        .collect();

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("a".into(), &[Some(1i64), Some(2), None]).into_column(),
            Series::new("b".into(), &[Some("x"), None, Some("y")]).into_column(),
        ])
        .expect("df")
    }

    #[test]
    fn numeric_profile() {
        let profiles = column_profiles(&frame());
        assert_eq!(profiles.len(), 2);

        let a = &profiles[0];
        assert_eq!(a.column_name, "a");
        assert_eq!(a.dtype, "int64");
        assert_eq!(a.count, 3);
        assert_eq!(a.non_null_count, 2);
        assert_eq!(a.null_count, 1);
        assert_eq!(a.null_pct, 0.333333);
        assert_eq!(a.num_unique, 2);
        match &a.summary {
            ProfileSummary::Numeric {
                min,
                max,
                mean,
                std,
            } => {
                assert_eq!(*min, Some(1.0));
                assert_eq!(*max, Some(2.0));
                assert_eq!(*mean, Some(1.5));
                let std = std.expect("std");
                assert!((std - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
            }
            ProfileSummary::Samples(_) => panic!("expected numeric summary"),
        }
    }

    #[test]
    fn text_profile_samples_in_first_seen_order() {
        let profiles = column_profiles(&frame());
        let b = &profiles[1];
        assert_eq!(b.dtype, "string");
        assert_eq!(b.null_count, 1);
        assert_eq!(b.sample_values().as_deref(), Some("x, y"));
    }

    #[test]
    fn samples_capped_at_five() {
        let df = DataFrame::new(vec![
            Series::new("v".into(), &["g", "f", "e", "d", "c", "b", "a", "g"]).into_column(),
        ])
        .expect("df");

        let profile = &column_profiles(&df)[0];
        assert_eq!(profile.num_unique, 7);
        assert_eq!(profile.sample_values().as_deref(), Some("g, f, e, d, c"));
    }

    #[test]
    fn all_null_numeric_has_no_statistics() {
        let df = DataFrame::new(vec![
            Series::new("v".into(), &[None::<f64>, None]).into_column(),
        ])
        .expect("df");

        let profile = &column_profiles(&df)[0];
        assert_eq!(
            profile.summary,
            ProfileSummary::Numeric {
                min: None,
                max: None,
                mean: None,
                std: None,
            }
        );
        assert_eq!(profile.null_pct, 1.0);
    }

    #[test]
    fn single_value_has_no_std() {
        let df = DataFrame::new(vec![Series::new("v".into(), &[4.0f64]).into_column()])
            .expect("df");

        match &column_profiles(&df)[0].summary {
            ProfileSummary::Numeric { std, mean, .. } => {
                assert_eq!(*std, None);
                assert_eq!(*mean, Some(4.0));
            }
            ProfileSummary::Samples(_) => panic!("expected numeric summary"),
        }
    }

    #[test]
    fn frame_has_fixed_columns() {
        let out = profile_columns(&frame()).expect("profile");
        assert_eq!(out.height(), 2);
        assert_eq!(out.get_column_names_str(), PROFILE_COLUMNS.to_vec());

        let samples = out.column("sample_values").expect("samples").str().expect("str");
        assert_eq!(samples.get(0), None);
        assert_eq!(samples.get(1), Some("x, y"));
        let mins = out.column("min").expect("min").f64().expect("f64");
        assert_eq!(mins.get(0), Some(1.0));
        assert_eq!(mins.get(1), None);
    }
}
