use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::analysis::GridPoint;
use crate::error::CoreError;

/// One flavour category and its centroid on the pitch × volume grid.
///
/// Built-in entries borrow `'static` text; zones loaded from a config file own theirs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlavourZone {
    /// Stable identifier, e.g. `"sea-salted"`.
    pub id: Cow<'static, str>,
    /// Display name.
    pub name: Cow<'static, str>,
    /// Marketing blurb shown under the name.
    pub description: Cow<'static, str>,
    /// Headline reacting to the rumble.
    pub rumble_description: Cow<'static, str>,
    /// Packet artwork, relative to the asset root.
    pub image: Cow<'static, str>,
    /// Centroid. `x` = pitch, `y` = volume.
    pub zone: GridPoint,
}

impl FlavourZone {
    /// Construit une zone à partir de valeurs possédées, en validant le centroïde.
    ///
    /// # Errors
    /// Returns [`CoreError::CoordinateOutOfRange`] if the centroid lies outside the grid.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        rumble_description: impl Into<String>,
        image: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id: Cow::Owned(id.into()),
            name: Cow::Owned(name.into()),
            description: Cow::Owned(description.into()),
            rumble_description: Cow::Owned(rumble_description.into()),
            image: Cow::Owned(image.into()),
            zone: GridPoint::new(x, y)?,
        })
    }

    const fn builtin(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        rumble_description: &'static str,
        image: &'static str,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            description: Cow::Borrowed(description),
            rumble_description: Cow::Borrowed(rumble_description),
            image: Cow::Borrowed(image),
            zone: GridPoint::new_unchecked(x, y),
        }
    }
}

/// TOML / JSON shape of a user-supplied zone.
#[derive(Clone, Debug, Deserialize)]
pub struct ZoneSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rumble_description: String,
    #[serde(default)]
    pub image: String,
    /// Pitch centroid.
    pub x: f64,
    /// Volume centroid.
    pub y: f64,
}

impl TryFrom<ZoneSpec> for FlavourZone {
    type Error = CoreError;

    fn try_from(spec: ZoneSpec) -> Result<Self, Self::Error> {
        FlavourZone::new(
            spec.id,
            spec.name,
            spec.description,
            spec.rumble_description,
            spec.image,
            spec.x,
            spec.y,
        )
    }
}

/// Le catalogue intégré : cinq saveurs, ordre significatif (départage des égalités).
pub static SEABROOK_FLAVOURS: [FlavourZone; 5] = [
    FlavourZone::builtin(
        "beefy",
        "Beefy",
        "Rich, meaty flavour that satisfies the deepest hungers. Britain's original crinkle cut with bold, hearty taste.",
        "We heard a deep, growly rumble... it's gotta be BEEFY! 🥩",
        "beefy.jpg",
        0.2,
        0.8,
    ),
    FlavourZone::builtin(
        "prawn-cocktail",
        "Prawn Cocktail",
        "Tangy seafood sensation with a cocktail twist. A Yorkshire favourite since 1979.",
        "That delicate, high-pitched tummy whisper calls for PRAWN COCKTAIL! 🦐",
        "prawn-cocktail.jpg",
        0.8,
        0.2,
    ),
    FlavourZone::builtin(
        "cheese-onion",
        "Cheese & Onion",
        "Classic combination of sharp cheese and caramelised onion. Brilliant by the bagful.",
        "A perfectly balanced rumble demands the classic CHEESE & ONION! 🧀",
        "cheese-onion.jpg",
        0.5,
        0.5,
    ),
    FlavourZone::builtin(
        "sea-salt-vinegar",
        "Sea Salt & Vinegar",
        "Sharp, tangy punch with proper sea salt. The bold taste of the UK's number 1 crinkle cut crisp.",
        "That loud, sharp stomach shriek screams SEA SALT & VINEGAR! ⚡",
        "salt-vinegar.jpg",
        0.8,
        0.8,
    ),
    FlavourZone::builtin(
        "sea-salted",
        "Sea Salted",
        "Simple, pure potato perfection with natural sea salt. Made from potatoes grown within 50 miles of Bradford.",
        "A gentle, subtle rumble suggests you're a SEA SALTED purist! 🥔",
        "sea-salted.webp",
        0.2,
        0.2,
    ),
];

/// Look up a zone by id.
///
/// # Example
/// ```
/// use rb_core::flavour::{find_by_id, SEABROOK_FLAVOURS};
/// let zone = find_by_id(&SEABROOK_FLAVOURS, "beefy").unwrap();
/// assert_eq!(zone.name, "Beefy");
/// assert!(find_by_id(&SEABROOK_FLAVOURS, "marmite").is_none());
/// ```
#[must_use]
pub fn find_by_id<'a>(catalog: &'a [FlavourZone], id: &str) -> Option<&'a FlavourZone> {
    catalog.iter().find(|z| z.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_on_grid() {
        for zone in &SEABROOK_FLAVOURS {
            assert!(
                GridPoint::new(zone.zone.x(), zone.zone.y()).is_ok(),
                "zone {} hors grille",
                zone.id
            );
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        for (i, a) in SEABROOK_FLAVOURS.iter().enumerate() {
            for b in &SEABROOK_FLAVOURS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn zone_spec_validates_centroid() {
        let spec = ZoneSpec {
            id: "marmite".into(),
            name: "Marmite".into(),
            description: String::new(),
            rumble_description: String::new(),
            image: String::new(),
            x: 1.4,
            y: 0.5,
        };
        assert!(matches!(
            FlavourZone::try_from(spec),
            Err(CoreError::CoordinateOutOfRange { axis: "pitch", .. })
        ));
    }
}
