use super::FrequencyGrid;
use crate::model::{BoundingBox, LatLon};

/// bins points into an n×n grid spanning the bounding box, where each cell
/// holds the number of points inside it. row 0 is the northernmost band,
/// column 0 the westernmost.
///
/// a bounding box with zero latitude or longitude extent produces an all-zero
/// grid. indices are clamped into `[0, n-1]`, so a point on the maximum edge
/// (or slightly outside the box) lands in the nearest edge cell. non-finite
/// points are skipped. the caller is expected to pad the box (see
/// [`BoundingBox::padded`]) so boundary points are not clipped asymmetrically.
///
/// # Arguments
///
/// * `points` - (lat, lon) points to bin
/// * `bbox`   - extent covered by the grid
/// * `n`      - number of rows and columns
///
/// # Returns
///
/// * the grid. for a non-degenerate box the grid total equals the number of
///   finite input points.
pub fn build_grid<'a, I>(points: I, bbox: &BoundingBox, n: usize) -> FrequencyGrid
where
    I: IntoIterator<Item = &'a LatLon>,
{
    let mut grid = FrequencyGrid::zeros(n);
    if n == 0 || bbox.is_degenerate() {
        return grid;
    }

    let lat_range = bbox.lat_range();
    let lon_range = bbox.lon_range();
    let n_f64 = n as f64;
    let max_index = (n - 1) as f64;
    let mut skipped = 0;

    for point in points {
        if !point.is_finite() {
            skipped += 1;
            continue;
        }
        let col = ((point.lon - bbox.lon_min) / lon_range * n_f64).floor();
        // flipped so that north is row 0
        let row = ((bbox.lat_max - point.lat) / lat_range * n_f64).floor();
        let col = col.clamp(0.0, max_index) as usize;
        let row = row.clamp(0.0, max_index) as usize;
        grid.increment(row, col);
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} non-finite points while binning grid");
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::build_grid;
    use crate::model::{BoundingBox, LatLon};

    #[test]
    fn test_conservation() {
        let points = vec![
            LatLon::new(10.0, 10.0),
            LatLon::new(10.0, 10.0),
            LatLon::new(11.0, 11.0),
        ];
        let bbox = BoundingBox::new(10.0, 11.0, 10.0, 11.0);
        let grid = build_grid(&points, &bbox, 2);
        assert_eq!(grid.total(), 3);
        // the two identical points share the south-west cell
        assert_eq!(grid.get(1, 0), Some(2));
        // the north-east corner is clamped into the last column, first row
        assert_eq!(grid.get(0, 1), Some(1));
    }

    #[test]
    fn test_boundary_clamp() {
        let bbox = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        let points = vec![
            LatLon::new(1.0, 0.5),
            LatLon::new(0.5, 1.0),
            LatLon::new(0.0, 0.0),
            LatLon::new(-0.5, 2.0),
        ];
        let grid = build_grid(&points, &bbox, 4);
        assert_eq!(grid.total(), 4);
        assert_eq!(grid.get(0, 2), Some(1));
        assert_eq!(grid.get(2, 3), Some(1));
        assert_eq!(grid.get(3, 0), Some(1));
        assert_eq!(grid.get(3, 3), Some(1));
    }

    #[test]
    fn test_north_is_row_zero() {
        let bbox = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        let points = vec![LatLon::new(9.5, 0.5), LatLon::new(0.5, 9.5)];
        let grid = build_grid(&points, &bbox, 10);
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(9, 9), Some(1));
    }

    #[test]
    fn test_degenerate_bbox_is_all_zero() {
        let points = vec![LatLon::new(5.0, 5.0), LatLon::new(5.0, 6.0)];
        let flat = BoundingBox::new(5.0, 5.0, 5.0, 6.0);
        let grid = build_grid(&points, &flat, 4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn test_zero_size_and_empty_input() {
        let bbox = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        let points = vec![LatLon::new(0.5, 0.5)];
        assert_eq!(build_grid(&points, &bbox, 0).size(), 0);
        let none: Vec<LatLon> = vec![];
        assert_eq!(build_grid(&none, &bbox, 8).total(), 0);
    }

    #[test]
    fn test_non_finite_points_are_skipped() {
        let bbox = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        let points = vec![LatLon::new(f64::NAN, 0.5), LatLon::new(0.5, 0.5)];
        let grid = build_grid(&points, &bbox, 2);
        assert_eq!(grid.total(), 1);
    }
}
