//! # chowmap-db-json
//!
//! JSON file backed storage for the places dataset and the edit
//! overlay.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::anyhow;

use chowmap_boundary as json;
use chowmap_core::{
    entities::*,
    repositories::{self as repo, OverlayRepo, PlaceRepo},
};

type Result<T> = std::result::Result<T, repo::Error>;

/// Storage rooted at two files: the read-only places dataset and
/// the writable edit overlay.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    places_path: PathBuf,
    overlay_path: PathBuf,
}

impl FileCatalog {
    pub fn new(places_path: PathBuf, overlay_path: PathBuf) -> Self {
        Self {
            places_path,
            overlay_path,
        }
    }

    pub fn places_path(&self) -> &Path {
        &self.places_path
    }

    pub fn overlay_path(&self) -> &Path {
        &self.overlay_path
    }
}

impl PlaceRepo for FileCatalog {
    fn all_places(&self) -> Result<Vec<Place>> {
        let contents = match fs::read_to_string(&self.places_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(repo::Error::NotFound);
            }
            Err(err) => return Err(err.into()),
        };
        let places: Vec<json::Place> = serde_json::from_str(&contents).map_err(|err| {
            anyhow!(
                "Malformed places dataset {}: {err}",
                self.places_path.display()
            )
        })?;
        Ok(places.into_iter().map(Into::into).collect())
    }
}

impl OverlayRepo for FileCatalog {
    fn load_overlay(&self) -> Result<Overlay> {
        let contents = match fs::read_to_string(&self.overlay_path) {
            Ok(contents) => contents,
            // No overlay file yet simply means no pending edits.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Overlay::default());
            }
            Err(err) => return Err(err.into()),
        };
        let patches: BTreeMap<String, json::PlacePatch> =
            serde_json::from_str(&contents).map_err(|err| {
                anyhow!(
                    "Malformed edit overlay {}: {err}",
                    self.overlay_path.display()
                )
            })?;
        Ok(patches
            .into_iter()
            .map(|(id, patch)| (id.into(), patch.into()))
            .collect())
    }

    fn save_overlay(&self, overlay: &Overlay) -> Result<()> {
        let patches: BTreeMap<&str, json::PlacePatch> = overlay
            .iter()
            .map(|(id, patch)| (id.as_str(), json::PlacePatch::from(patch.clone())))
            .collect();
        let contents = serde_json::to_string_pretty(&patches)
            .map_err(|err| anyhow!("Unserializable edit overlay: {err}"))?;
        if let Some(dir) = self.overlay_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.overlay_path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_in(dir: &Path) -> FileCatalog {
        FileCatalog::new(dir.join("places.json"), dir.join("overlay.json"))
    }

    const DATASET: &str = r#"[
        {
            "id": "a",
            "name": "Ramen House",
            "lat": 47.6062,
            "lng": -122.3321,
            "city": "Seattle",
            "cuisines": ["japanese"],
            "rating": 4.5,
            "price": 2,
            "wouldReturn": true,
            "visitedAt": "2024-11-03"
        },
        { "id": "b", "name": "Taco Stand" }
    ]"#;

    #[test]
    fn loads_dataset_rows() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("places.json"), DATASET).unwrap();
        let catalog = catalog_in(dir.path());

        let places = catalog.all_places().unwrap();
        assert_eq!(2, places.len());
        assert_eq!("Ramen House", places[0].name);
        assert_eq!(Some(StarRating::from(4.5)), places[0].rating);
        assert_eq!(Some(PriceTier::Casual), places[0].price);
        assert!(places[0].pos.is_some());
        assert_eq!(None, places[1].pos);
        assert_eq!(2, catalog.count_places().unwrap());
    }

    #[test]
    fn missing_dataset_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_in(dir.path());
        assert!(matches!(catalog.all_places(), Err(repo::Error::NotFound)));
    }

    #[test]
    fn malformed_dataset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("places.json"), "not json").unwrap();
        let catalog = catalog_in(dir.path());
        assert!(catalog.all_places().is_err());
    }

    #[test]
    fn missing_overlay_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_in(dir.path());
        assert!(catalog.load_overlay().unwrap().is_empty());
    }

    #[test]
    fn malformed_overlay_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("overlay.json"), "{ nope").unwrap();
        let catalog = catalog_in(dir.path());
        assert!(catalog.load_overlay().is_err());
    }

    #[test]
    fn saves_and_reloads_the_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_in(dir.path());

        let mut overlay = Overlay::default();
        overlay.apply(
            "a".into(),
            PlacePatch {
                rating: FieldEdit::Set(4.8.into()),
                notes: FieldEdit::Clear,
                ..Default::default()
            },
        );
        catalog.save_overlay(&overlay).unwrap();

        let raw = fs::read_to_string(dir.path().join("overlay.json")).unwrap();
        assert!(raw.contains("\"notes\": null"));

        assert_eq!(overlay, catalog.load_overlay().unwrap());
    }

    #[test]
    fn tri_state_overlay_file_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("overlay.json"),
            r#"{ "a": { "rating": 2.0, "photo": null } }"#,
        )
        .unwrap();
        let catalog = catalog_in(dir.path());

        let overlay = catalog.load_overlay().unwrap();
        let patch = overlay.get(&"a".into()).unwrap();
        assert_eq!(FieldEdit::Set(StarRating::from(2.0)), patch.rating.clone());
        assert_eq!(FieldEdit::Clear, patch.photo_url.clone());
        assert_eq!(FieldEdit::Keep, patch.notes.clone());
    }
}
