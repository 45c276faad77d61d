use chrono::{Datelike, NaiveDate};

use crate::error::{GenerationError, Result};
use crate::model::entry::Fuel;
use crate::store::{stored_quantity, RecordStore};
use crate::time::parse_entry_date;

/// One line of the chart. `x` is the day number from the common era, `y` the quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub fuel: Fuel,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub series: Vec<ChartSeries>,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub max_value: f64,
}

impl ChartData {
    pub fn x_bounds(&self) -> [f64; 2] {
        let first = day_number(self.first_date);
        let last = day_number(self.last_date);
        if first == last {
            [first - 1.0, last + 1.0]
        } else {
            [first, last]
        }
    }
}

pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Builds the three series in ascending date order. Every date and quantity must parse.
pub fn chart_data(store: &RecordStore) -> Result<Option<ChartData>> {
    if store.is_empty() {
        return Ok(None);
    }

    let mut points = Vec::with_capacity(store.len());
    for (key, entry) in store.iter() {
        let date = parse_entry_date(&entry.date).ok_or_else(|| GenerationError::InvalidDate {
            key: key.to_string(),
            value: entry.date.clone(),
        })?;
        let mut values = [0.0; 3];
        for (slot, fuel) in values.iter_mut().zip(Fuel::ALL) {
            *slot = stored_quantity(key, entry, fuel)?;
        }
        points.push((date, values));
    }
    points.sort_by_key(|(date, _)| *date);

    let first_date = points[0].0;
    let last_date = points[points.len() - 1].0;
    let max_value = points
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(0.0_f64, f64::max);

    let series = Fuel::ALL
        .iter()
        .enumerate()
        .map(|(i, &fuel)| ChartSeries {
            fuel,
            points: points.iter().map(|(date, values)| (day_number(*date), values[i])).collect(),
        })
        .collect();

    Ok(Some(ChartData {
        series,
        first_date,
        last_date,
        max_value,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::Entry;

    #[test]
    fn test_empty_store_has_no_chart() {
        assert_eq!(chart_data(&RecordStore::new()).unwrap(), None);
    }

    #[test]
    fn test_series_sorted_ascending() {
        let mut store = RecordStore::new();
        store.add("2024-01-20", "2", "20", "200").unwrap();
        store.add("2023-12-31", "1", "10", "100").unwrap();
        store.add("2024-01-05", "3", "30", "300").unwrap();

        let chart = chart_data(&store).unwrap().unwrap();
        assert_eq!(chart.first_date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(chart.last_date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        assert_eq!(chart.max_value, 300.0);

        let diesel = &chart.series[0];
        assert_eq!(diesel.fuel, Fuel::Diesel);
        let ys: Vec<f64> = diesel.points.iter().map(|p| p.1).collect();
        assert_eq!(ys, vec![1.0, 3.0, 2.0]);

        let xs: Vec<f64> = diesel.points.iter().map(|p| p.0).collect();
        assert_eq!(xs[1] - xs[0], 5.0);
        assert_eq!(xs[2] - xs[1], 15.0);
    }

    #[test]
    fn test_single_day_bounds_are_widened() {
        let mut store = RecordStore::new();
        store.add("2024-01-01", "1", "1", "1").unwrap();

        let chart = chart_data(&store).unwrap().unwrap();
        let [lo, hi] = chart.x_bounds();
        assert_eq!(hi - lo, 2.0);
    }

    #[test]
    fn test_bad_date_fails() {
        let mut store = RecordStore::new();
        store.insert(Entry::new("someday", "1", "1", "1"));

        assert!(matches!(chart_data(&store), Err(GenerationError::InvalidDate { .. })));
    }
}
