use strum::{EnumIter, EnumString};

pub(crate) const NAMESPACE: &str = "minecraft";
pub(crate) const SOUND_ASSET_PREFIX: &str = "minecraft/sounds/";
pub(crate) const SOUND_ASSET_EXT: &str = ".ogg";

pub(crate) const UNKNOWN_CATEGORY: &str = "unknown";
pub(crate) const SUBTITLES_PREFIX: &str = "subtitles";

/// Categories whose events are named after a registry object (`block.minecraft.stone`).
pub(crate) const REGISTRY_CATEGORIES: [&str; 3] = ["block", "entity", "item"];
/// Categories that also try the event's own subtitle key first.
pub(crate) const SUBTITLED_CATEGORIES: [&str; 3] = ["ambient", "music", "weather"];

/// Trailing event segments that get a translated action suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Break,
    Place,
    Step,
    Hit,
    Fall,
    Ambient,
    Hurt,
    Death,
    Attack,
    Eat,
    Drink,
    Idle,
    Say,
}

impl Action {
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Break => "破壊",
            Self::Place => "設置",
            Self::Step => "足音",
            Self::Hit => "ヒット",
            Self::Fall => "落下",
            Self::Ambient => "環境音",
            Self::Hurt => "ダメージ",
            Self::Death => "死亡",
            Self::Attack => "攻撃",
            Self::Eat => "食べる",
            Self::Drink => "飲む",
            Self::Idle => "待機",
            Self::Say => "鳴き声",
        }
    }
}

/// Display label for a sound category, if it has one.
pub fn category_label(category: &str) -> Option<&'static str> {
    Some(match category {
        "ambient" => "環境音",
        "block" => "ブロック",
        "enchant" => "エンチャント",
        "entity" => "エンティティ",
        "event" => "イベント",
        "item" => "アイテム",
        "music" => "音楽",
        "music_disc" => "レコード",
        "particle" => "パーティクル",
        "ui" => "UI",
        "weather" => "天気",
        _ => return None,
    })
}
