#[cfg(test)]
mod tests {
    use super::super::error::PresetError;
    use super::super::models::Preset;
    use super::super::store::{default_presets, PresetStore, PRESET_FILE_NAME};
    use crate::solver::{self, DerivationMode, DerivationRequest, SolverError};
    use crate::units::LinearUnit;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, PresetStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::new(dir.path().join("nested").join(PRESET_FILE_NAME));
        (dir, store)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let (_dir, store) = temp_store();
        assert!(!store.path().exists());

        let presets = store.load();
        assert_eq!(presets, default_presets());
        assert_eq!(presets.len(), 5);
    }

    #[test]
    fn test_empty_and_corrupt_files_yield_defaults() {
        let (dir, _) = temp_store();
        let path = dir.path().join("presets.json");
        let store = PresetStore::new(&path);

        std::fs::write(&path, "[]").unwrap();
        assert_eq!(store.load(), default_presets());

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(store.load(), default_presets());
    }

    #[test]
    fn test_add_creates_directory_and_keeps_defaults() {
        let (_dir, store) = temp_store();
        store
            .add(Preset::dimensions("Shelf", LinearUnit::Centimeter, 80.0, 30.0, 2.0))
            .unwrap();

        assert!(store.path().exists());
        let presets = store.load();
        assert_eq!(presets.len(), 6);
        assert_eq!(presets.last().unwrap().name, "Shelf");
    }

    #[test]
    fn test_add_overwrites_case_insensitively() {
        let (_dir, store) = temp_store();
        store
            .add(Preset::dimensions("Shelf", LinearUnit::Centimeter, 80.0, 30.0, 2.0))
            .unwrap();
        store
            .add(Preset::from_volume("SHELF", LinearUnit::Meter, 2.0, 1.0, 1.0))
            .unwrap();

        let presets = store.load();
        let shelves: Vec<_> = presets.iter().filter(|p| p.matches_name("shelf")).collect();
        assert_eq!(shelves.len(), 1);
        assert_eq!(shelves[0].name, "SHELF");
        assert_eq!(shelves[0].mode, DerivationMode::Volume);
        // Replaced record moves to the end
        assert_eq!(presets.last().unwrap().name, "SHELF");
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let (_dir, store) = temp_store();
        let result = store.add(Preset::dimensions("   ", LinearUnit::Meter, 1.0, 1.0, 1.0));
        assert!(matches!(result, Err(PresetError::EmptyName)));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_names_are_trimmed() {
        let preset = Preset::dimensions("  Crate  ", LinearUnit::Meter, 1.0, 1.0, 1.0);
        assert_eq!(preset.name, "Crate");
        assert!(preset.matches_name(" crate "));
    }

    #[test]
    fn test_delete() {
        let (_dir, store) = temp_store();
        assert!(!store.delete("no such preset").unwrap());
        assert!(!store.path().exists());

        assert!(store.delete("cube 7M³").unwrap());
        let names = store.names();
        assert_eq!(names.len(), 4);
        assert!(!names.iter().any(|n| n == "Cube 7m³"));
    }

    #[test]
    fn test_find_and_get() {
        let (_dir, store) = temp_store();
        let preset = store.find("surface 100M²").unwrap();
        assert_eq!(preset.mode, DerivationMode::Surface);
        assert_eq!(preset.surface_area, 100.0);

        assert!(matches!(
            store.get("missing"),
            Err(PresetError::NotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_json_layout() {
        let preset = Preset::from_surface("Panel", LinearUnit::Centimeter, 40.0, 2.0, 3.0);
        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["name"], "Panel");
        assert_eq!(json["mode"], "surface");
        assert_eq!(json["unit"], "cm");
        assert_eq!(json["surfaceArea"], 40.0);
        assert_eq!(json["height"], 0.0);
    }

    #[test]
    fn test_reads_pascal_case_records() {
        let json = r#"[
            {
                "Name": "Legacy",
                "Mode": "volume",
                "Unit": "CM",
                "Length": 10,
                "Width": 10,
                "Height": 0,
                "Volume": 1000,
                "SurfaceArea": 0
            }
        ]"#;
        let presets: Vec<Preset> = serde_json::from_str(json).unwrap();
        assert_eq!(presets[0].name, "Legacy");
        assert_eq!(presets[0].unit, LinearUnit::Centimeter);
        assert_eq!(presets[0].volume, 1000.0);
    }

    #[test]
    fn test_stored_names_with_padding_still_match() {
        let (dir, store) = temp_store();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(
            store.path(),
            r#"[{"Name": "Foo ", "Mode": "dimensions", "Unit": "m", "Length": 1, "Width": 2, "Height": 3}]"#,
        )
        .unwrap();

        assert_eq!(store.find("foo").unwrap().name, "Foo ");
        assert!(store.delete("FOO").unwrap());
        assert!(store.find("foo").is_none());
    }

    #[test]
    fn test_unit_falls_back_to_meters() {
        let json = r#"[
            {"name": "A", "mode": "dimensions", "length": 1, "width": 1, "height": 1},
            {"name": "B", "mode": "dimensions", "unit": null, "length": 1, "width": 1, "height": 1},
            {"name": "C", "mode": "dimensions", "unit": "yards", "length": 1, "width": 1, "height": 1}
        ]"#;
        let presets: Vec<Preset> = serde_json::from_str(json).unwrap();
        assert!(presets.iter().all(|p| p.unit == LinearUnit::Meter));
    }

    #[test]
    fn test_to_request_normalizes_units() {
        let preset = Preset::from_volume("Tank", LinearUnit::Meter, 7.0, 1.9129, 1.9129);
        match preset.to_request() {
            DerivationRequest::FromVolume {
                volume,
                length,
                width,
            } => {
                assert_eq!(volume, 7e9);
                assert_relative_eq!(length, 1912.9, max_relative = 1e-12);
                assert_relative_eq!(width, 1912.9, max_relative = 1e-12);
            }
            other => panic!("Expected volume request, got {:?}", other),
        }

        let preset = Preset::from_surface("Sheet", LinearUnit::Centimeter, 100.0, 5.0, 5.0);
        assert_eq!(
            preset.to_request(),
            DerivationRequest::FromSurface {
                surface_area: 10_000.0,
                length: 50.0,
                width: 50.0,
            }
        );
    }

    #[test]
    fn test_default_presets_solve() {
        for preset in default_presets() {
            let dims = solver::solve(preset.to_request()).unwrap();
            assert!(solver::dimensions_valid(
                dims.length(),
                dims.width(),
                dims.height()
            ));
        }

        let surface = default_presets().pop().unwrap();
        let dims = solver::solve(surface.to_request()).unwrap();
        assert_relative_eq!(dims.height(), 2500.0);
    }

    #[test]
    fn test_preset_with_unused_zero_fields_fails_in_solver() {
        let preset = Preset::from_values(
            "Flat",
            DerivationMode::Dimensions,
            LinearUnit::Meter,
            [1.0, 1.0, 0.0],
        );
        assert!(matches!(
            solver::solve(preset.to_request()),
            Err(SolverError::NonPositiveDimension { name: "height", .. })
        ));
    }

    #[test]
    fn test_from_inputs_stores_values_in_preset_unit() {
        let preset = Preset::from_inputs(
            "Crate",
            DerivationMode::Volume,
            LinearUnit::Meter,
            ["500000 cm³", "200 cm", "0.5"],
        )
        .unwrap();

        assert_eq!(preset.unit, LinearUnit::Meter);
        assert_relative_eq!(preset.volume, 0.5, max_relative = 1e-12);
        assert_relative_eq!(preset.length, 2.0, max_relative = 1e-12);
        assert_relative_eq!(preset.width, 0.5, max_relative = 1e-12);
        assert_eq!(preset.height, 0.0);

        assert!(Preset::from_inputs(
            "Bad",
            DerivationMode::Surface,
            LinearUnit::Meter,
            ["2 m³", "1", "1"],
        )
        .is_err());
    }

    #[test]
    fn test_summary() {
        let preset = Preset::from_volume("Tank", LinearUnit::Meter, 7.0, 1.9129, 1.9129);
        assert_eq!(preset.summary(), "V=7 m³, L=1.9129 m, W=1.9129 m");
        assert_eq!(
            preset.to_string(),
            "Tank (volume: V=7 m³, L=1.9129 m, W=1.9129 m)"
        );
    }

    #[test]
    fn test_default_path_layout() {
        let path = PresetStore::default_path();
        assert!(path.ends_with("QuaderGenerator/QuaderPresets.json"));
    }
}
