use crate::analysis::GridPoint;
use crate::error::CoreError;
use crate::flavour::{FlavourZone, SEABROOK_FLAVOURS};

/// Nearest zone for a grid point, with its distance.
#[derive(Clone, Copy, Debug)]
pub struct Classification<'a> {
    pub zone: &'a FlavourZone,
    pub distance: f64,
}

/// Trouve la zone la plus proche (distance euclidienne) dans `catalog`.
///
/// Ties go to the entry that appears first in `catalog`.
///
/// # Errors
/// - [`CoreError::CoordinateOutOfRange`] if a coordinate is outside [0, 1] or NaN.
/// - [`CoreError::EmptyCatalog`] if `catalog` has no entry.
///
/// # Example
/// ```
/// use rb_core::classify::classify;
/// use rb_core::flavour::SEABROOK_FLAVOURS;
/// let zone = classify(0.0, 0.05, &SEABROOK_FLAVOURS).unwrap();
/// assert_eq!(zone.id, "sea-salted");
/// ```
pub fn classify(
    pitch_coordinate: f64,
    volume_coordinate: f64,
    catalog: &[FlavourZone],
) -> Result<&FlavourZone, CoreError> {
    let point = GridPoint::new(pitch_coordinate, volume_coordinate)?;
    nearest(point, catalog).map(|c| c.zone)
}

/// Linear scan over `catalog`, returning the closest zone and its distance.
///
/// # Errors
/// Returns [`CoreError::EmptyCatalog`] if `catalog` has no entry.
pub fn nearest(point: GridPoint, catalog: &[FlavourZone]) -> Result<Classification<'_>, CoreError> {
    let mut best: Option<Classification<'_>> = None;
    for zone in catalog {
        let distance = point.distance(&zone.zone);
        // strict `<`: the first of two equidistant zones stays
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Classification { zone, distance });
        }
    }
    let found = best.ok_or(CoreError::EmptyCatalog)?;
    log::debug!(
        "({:.3}, {:.3}) -> {} @ {:.4}",
        point.x(),
        point.y(),
        found.zone.id,
        found.distance
    );
    Ok(found)
}

/// [`classify`] against the built-in five-flavour catalog.
///
/// # Errors
/// Returns [`CoreError::CoordinateOutOfRange`] for coordinates outside [0, 1].
pub fn closest_flavour(
    pitch_coordinate: f64,
    volume_coordinate: f64,
) -> Result<&'static FlavourZone, CoreError> {
    classify(pitch_coordinate, volume_coordinate, &SEABROOK_FLAVOURS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, x: f64, y: f64) -> FlavourZone {
        FlavourZone::new(id, id, "", "", "", x, y).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn each_centroid_classifies_to_itself() -> Result<(), CoreError> {
        for z in &SEABROOK_FLAVOURS {
            let found = closest_flavour(z.zone.x(), z.zone.y())?;
            assert_eq!(found.id, z.id);
        }
        Ok(())
    }

    #[test]
    fn origin_is_sea_salted() -> Result<(), CoreError> {
        assert_eq!(closest_flavour(0.0, 0.0)?.id, "sea-salted");
        assert_eq!(closest_flavour(0.0, 0.05)?.id, "sea-salted");
        Ok(())
    }

    #[test]
    fn corners_map_to_nearest_quadrant() -> Result<(), CoreError> {
        assert_eq!(closest_flavour(0.0, 1.0)?.id, "beefy");
        assert_eq!(closest_flavour(1.0, 0.0)?.id, "prawn-cocktail");
        assert_eq!(closest_flavour(1.0, 1.0)?.id, "sea-salt-vinegar");
        assert_eq!(closest_flavour(0.45, 0.55)?.id, "cheese-onion");
        Ok(())
    }

    #[test]
    fn tie_goes_to_first_entry() -> Result<(), CoreError> {
        let catalog = [zone("left", 0.25, 0.5), zone("right", 0.75, 0.5)];
        assert_eq!(classify(0.5, 0.5, &catalog)?.id, "left");

        let reversed = [zone("right", 0.75, 0.5), zone("left", 0.25, 0.5)];
        assert_eq!(classify(0.5, 0.5, &reversed)?.id, "right");
        Ok(())
    }

    #[test]
    fn empty_catalog_is_an_error() {
        assert_eq!(classify(0.5, 0.5, &[]).err(), Some(CoreError::EmptyCatalog));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        assert!(matches!(
            closest_flavour(1.01, 0.5),
            Err(CoreError::CoordinateOutOfRange { axis: "pitch", .. })
        ));
        assert!(matches!(
            closest_flavour(0.5, f64::NAN),
            Err(CoreError::CoordinateOutOfRange { axis: "volume", .. })
        ));
    }

    #[test]
    fn nearest_reports_distance() -> Result<(), CoreError> {
        let p = GridPoint::new(0.2, 0.2)?;
        let c = nearest(p, &SEABROOK_FLAVOURS)?;
        assert_eq!(c.zone.id, "sea-salted");
        assert!(c.distance.abs() < 1e-12);
        Ok(())
    }
}
