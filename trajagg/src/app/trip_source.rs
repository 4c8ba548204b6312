use std::path::Path;

use kdam::tqdm;
use serde::{Deserialize, Serialize};
use trajagg_core::model::{LatLon, TripRequest};

use super::{config::VehicleConfig, AppError};

/// one row of the trips file. columns beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub vehicle_type: String,
    pub dept_lat: f64,
    pub dept_lon: f64,
    pub arr_lat: f64,
    pub arr_lon: f64,
}

impl TripRecord {
    pub fn origin(&self) -> LatLon {
        LatLon::new(self.dept_lat, self.dept_lon)
    }

    pub fn destination(&self) -> LatLon {
        LatLon::new(self.arr_lat, self.arr_lon)
    }
}

/// reads the trips file into trip requests, in file order.
///
/// rows whose vehicle type is not one of `vehicles` are skipped; the
/// routing profile of every other row comes from its vehicle.
pub fn read_trips(path: &Path, vehicles: &[VehicleConfig]) -> Result<Vec<TripRequest>, AppError> {
    let filepath = path.to_string_lossy().to_string();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::TripReadError {
            filepath: filepath.clone(),
            source: e,
        })?;
    let row_iter = tqdm!(
        reader.into_deserialize::<TripRecord>(),
        desc = format!("reading {filepath}")
    );

    let mut trips = vec![];
    let mut skipped = 0;
    for row in row_iter {
        let record = row.map_err(|e| AppError::TripReadError {
            filepath: filepath.clone(),
            source: e,
        })?;
        match vehicles.iter().find(|v| v.name == record.vehicle_type) {
            Some(vehicle) => trips.push(TripRequest::new(
                &vehicle.name,
                record.origin(),
                record.destination(),
                vehicle.profile.clone(),
            )),
            None => {
                log::debug!("skipping trip of unconfigured vehicle '{}'", record.vehicle_type);
                skipped += 1;
            }
        }
    }
    eprintln!();

    log::info!("{} trips loaded from {filepath}", trips.len());
    if skipped > 0 {
        log::info!("{skipped} trips skipped with unconfigured vehicle types");
    }
    Ok(trips)
}

#[cfg(test)]
mod tests {
    use super::read_trips;
    use crate::app::{config::VehicleConfig, AppError};
    use std::io::Write;
    use trajagg_core::model::LatLon;

    fn vehicles() -> Vec<VehicleConfig> {
        vec![
            VehicleConfig::new("EV Car", "driving-car"),
            VehicleConfig::new("Rickshaw", "cycling-regular"),
        ]
    }

    fn trips_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write trips");
        file
    }

    #[test]
    fn test_reads_configured_vehicles_in_order() {
        let file = trips_file(
            "trip_id,vehicle_type,dept_lat,dept_lon,arr_lat,arr_lon\n\
             1,Rickshaw,11.5625,104.9160,11.5500,104.9200\n\
             2,Bus,11.0,104.0,11.1,104.1\n\
             3,EV Car,11.57,104.93,11.58,104.94\n",
        );
        let trips = read_trips(file.path(), &vehicles()).expect("should read");
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].vehicle_type, "Rickshaw");
        assert_eq!(trips[0].profile.as_str(), "cycling-regular");
        assert_eq!(trips[0].origin, LatLon::new(11.5625, 104.9160));
        assert_eq!(trips[0].destination, LatLon::new(11.55, 104.92));
        assert_eq!(trips[1].vehicle_type, "EV Car");
        assert_eq!(trips[1].profile.as_str(), "driving-car");
    }

    #[test]
    fn test_missing_file() {
        let result = read_trips(std::path::Path::new("/nonexistent/trips.csv"), &vehicles());
        assert!(matches!(result, Err(AppError::TripReadError { .. })));
    }

    #[test]
    fn test_malformed_row() {
        let file = trips_file(
            "vehicle_type,dept_lat,dept_lon,arr_lat,arr_lon\n\
             EV Car,north,104.9,11.5,104.9\n",
        );
        let result = read_trips(file.path(), &vehicles());
        assert!(matches!(result, Err(AppError::TripReadError { .. })));
    }
}
