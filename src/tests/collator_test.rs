#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tracing_test::traced_test;

    use crate::{
        collator,
        models::events::{SoundEventItem, SoundVariant},
    };

    fn item(id: &str, display_name: &str) -> SoundEventItem {
        SoundEventItem {
            id: id.to_string(),
            display_name: display_name.to_string(),
            category: "block".to_string(),
            sounds: vec![SoundVariant {
                name: "stone1".to_string(),
                hash: "a1c9f3b0e2d4c6a8b0d2f4e6a8c0b2d4f6e8a0c2".to_string(),
                absolute_path: PathBuf::from("/objects/a1/a1c9f3b0e2d4c6a8b0d2f4e6a8c0b2d4f6e8a0c2"),
            }],
        }
    }

    fn ids(events: &[SoundEventItem]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[traced_test]
    #[test]
    fn japanese_order_test() {
        // Code point order would put the hiragana う before the katakana イ.
        let events = vec![item("u", "う"), item("i", "イ"), item("a", "あ")];
        let sorted = collator::collate(events).unwrap();
        assert_eq!(ids(&sorted), ["a", "i", "u"]);
    }

    #[traced_test]
    #[test]
    fn mixed_script_order_test() {
        let events = vec![
            item("block.stone.break", "石 (破壊)"),
            item("ui.button.click", "ボタンのクリック音"),
            item("music_disc.wait", "Music_disc Wait"),
            item("entity.cow.ambient", "ウシ (環境音)"),
        ];
        let sorted = collator::collate(events).unwrap();
        assert_eq!(
            ids(&sorted),
            [
                "music_disc.wait",
                "entity.cow.ambient",
                "ui.button.click",
                "block.stone.break",
            ]
        );
    }

    #[traced_test]
    #[test]
    fn ties_keep_input_order_test() {
        let events = vec![
            item("block.stone.hit", "石"),
            item("block.cobblestone.hit", "丸石"),
            item("block.stone.fall", "石"),
            item("block.stone.smash", "石"),
        ];
        let sorted = collator::collate(events).unwrap();
        let stones: Vec<&str> = sorted
            .iter()
            .filter(|e| e.display_name == "石")
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(
            stones,
            ["block.stone.hit", "block.stone.fall", "block.stone.smash"]
        );
    }

    #[traced_test]
    #[test]
    fn empty_events_are_dropped_test() {
        let mut silent = item("block.stone.break", "石");
        silent.sounds.clear();

        let sorted = collator::collate(vec![silent, item("entity.cow.say", "ウシ")]).unwrap();
        assert_eq!(ids(&sorted), ["entity.cow.say"]);
    }
}
