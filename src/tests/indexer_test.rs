#[cfg(test)]
mod tests {
    use std::{cmp::Ordering, fs};

    use tracing_test::traced_test;

    use crate::{
        collator,
        error::{IndexError, SourceKind},
        indexer,
        models::settings::Settings,
        tests::{
            fixtures::TestBundle,
            test_constants::{CLICK_HASH, COW_SAY_HASH, STONE1_HASH, STONE2_HASH, WAIT_HASH},
        },
    };

    #[traced_test]
    #[test]
    fn index_sound_data_test() {
        let bundle = TestBundle::new();
        let events = indexer::index_sound_data(&bundle.settings).unwrap();

        let summary: Vec<(&str, &str, &str)> = events
            .iter()
            .map(|e| (e.id.as_str(), e.display_name.as_str(), e.category.as_str()))
            .collect();
        assert_eq!(
            summary,
            [
                ("music_disc.wait", "Music_disc Wait", "music_disc"),
                ("entity.cow.ambient", "ウシ (環境音)", "entity"),
                ("ui.button.click", "ボタンのクリック音", "ui"),
                ("block.stone.break", "石 (破壊)", "block"),
            ]
        );

        let stone = &events[3];
        let variants: Vec<(&str, &str)> = stone
            .sounds
            .iter()
            .map(|s| (s.name.as_str(), s.hash.as_str()))
            .collect();
        assert_eq!(variants, [("stone1", STONE1_HASH), ("stone2", STONE2_HASH)]);

        assert_eq!(events[0].sounds[0].hash, WAIT_HASH);
        assert_eq!(events[0].sounds[0].name, "wait");
        assert_eq!(events[1].sounds[0].hash, COW_SAY_HASH);
        assert_eq!(events[2].sounds[0].hash, CLICK_HASH);
    }

    #[traced_test]
    #[test]
    fn emitted_events_are_backed_by_files_test() {
        let bundle = TestBundle::new();
        let events = indexer::index_sound_data(&bundle.settings).unwrap();

        assert!(!events.is_empty());
        for event in &events {
            assert!(!event.sounds.is_empty());
            for sound in &event.sounds {
                assert!(sound.absolute_path.exists());
                assert!(sound.absolute_path.starts_with(&bundle.settings.objects_dir));
            }
        }

        let collator = collator::display_collator().unwrap();
        for pair in events.windows(2) {
            assert_ne!(
                collator.compare(&pair[0].display_name, &pair[1].display_name),
                Ordering::Greater
            );
        }
    }

    #[traced_test]
    #[test]
    fn dropped_events_test() {
        let bundle = TestBundle::new();
        let events = indexer::index_sound_data(&bundle.settings).unwrap();

        // Not in the asset index.
        assert!(!events.iter().any(|e| e.id == "entity.cow.say"));
        // Indexed but missing from the store.
        assert!(!events.iter().any(|e| e.id == "ambient.cave"));
    }

    #[traced_test]
    #[test]
    fn removed_object_drops_event_test() {
        let bundle = TestBundle::new();
        fs::remove_file(bundle.store_object(CLICK_HASH)).unwrap();

        let events = indexer::index_sound_data(&bundle.settings).unwrap();
        assert_eq!(events.len(), 3);
        assert!(!events.iter().any(|e| e.id == "ui.button.click"));
    }

    #[traced_test]
    #[test]
    fn without_localization_test() {
        let bundle = TestBundle::new();
        let settings = Settings {
            language_json_path: bundle.root().join("missing.json"),
            ..bundle.settings.clone()
        };

        let names: Vec<String> = indexer::index_sound_data(&settings)
            .unwrap()
            .into_iter()
            .map(|e| e.display_name)
            .collect();
        assert_eq!(
            names,
            [
                "Block Stone Break",
                "Entity Cow Ambient",
                "Music_disc Wait",
                "Ui Button Click",
            ]
        );
    }

    #[traced_test]
    #[test]
    fn idempotent_test() {
        let bundle = TestBundle::new();
        let first = indexer::index_sound_data(&bundle.settings).unwrap();
        let second = indexer::index_sound_data(&bundle.settings).unwrap();
        assert_eq!(first, second);
    }

    #[traced_test]
    #[test]
    fn missing_sound_manifest_test() {
        let bundle = TestBundle::new();
        let settings = Settings {
            sounds_json_path: bundle.root().join("does-not-exist.json"),
            ..bundle.settings.clone()
        };

        let err = indexer::index_sound_data(&settings).unwrap_err();
        assert!(matches!(
            err,
            IndexError::MissingInput {
                kind: SourceKind::SoundManifest,
                ..
            }
        ));
        assert!(indexer::index_or_empty(&settings).is_empty());
        assert!(logs_contain("Error indexing sound data"));
    }

    #[traced_test]
    #[test]
    fn objects_dir_is_not_required_test() {
        let bundle = TestBundle::new();
        let settings = Settings {
            objects_dir: bundle.root().join("elsewhere"),
            ..bundle.settings.clone()
        };

        assert!(indexer::index_sound_data(&settings).unwrap().is_empty());
    }
}
