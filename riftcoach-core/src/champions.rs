//! Champion roster and the name-to-asset-slug catalog.
use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Champion display names the picker grid offers, alphabetical.
pub const CHAMPION_ROSTER: &[&str] = &[
    "Aatrox", "Ahri", "Akali", "Akshan", "Alistar",
    "Amumu", "Anivia", "Annie", "Aphelios", "Ashe",
    "Aurelion Sol", "Azir", "Bard", "Bel'Veth", "Blitzcrank",
    "Brand", "Braum", "Caitlyn", "Camille", "Cassiopeia",
    "Cho'Gath", "Corki", "Darius", "Diana", "Dr. Mundo",
    "Draven", "Ekko", "Elise", "Evelynn", "Ezreal",
    "Fiddlesticks", "Fiora", "Fizz", "Galio", "Gangplank",
    "Garen", "Gnar", "Gragas", "Graves", "Gwen",
    "Hecarim", "Heimerdinger", "Illaoi", "Irelia", "Ivern",
    "Janna", "Jarvan IV", "Jax", "Jayce", "Jhin",
    "Jinx", "K'Sante", "Kai'Sa", "Kalista", "Karma",
    "Karthus", "Kassadin", "Katarina", "Kayle", "Kayn",
    "Kennen", "Kha'Zix", "Kindred", "Kled", "Kog'Maw",
    "LeBlanc", "Lee Sin", "Leona", "Lillia", "Lissandra",
    "Lucian", "Lulu", "Lux", "Malphite", "Malzahar",
    "Maokai", "Master Yi", "Milio", "Miss Fortune", "Mordekaiser",
    "Morgana", "Naafiri", "Nami", "Nasus", "Nautilus",
    "Neeko", "Nidalee", "Nilah", "Nocturne", "Nunu",
    "Olaf", "Orianna", "Ornn", "Pantheon", "Poppy",
    "Pyke", "Qiyana", "Quinn", "Rakan", "Rammus",
    "Rek'Sai", "Rell", "Renata Glasc", "Renekton", "Rengar",
    "Riven", "Rumble", "Ryze", "Samira", "Sejuani",
    "Senna", "Seraphine", "Sett", "Shaco", "Shen",
    "Shyvana", "Singed", "Sion", "Sivir", "Skarner",
    "Sona", "Soraka", "Swain", "Sylas", "Syndra",
    "Tahm Kench", "Taliyah", "Talon", "Taric", "Teemo",
    "Thresh", "Tristana", "Trundle", "Tryndamere", "Twisted Fate",
    "Twitch", "Udyr", "Urgot", "Varus", "Vayne",
    "Veigar", "Vel'Koz", "Vex", "Vi", "Viego",
    "Viktor", "Vladimir", "Volibear", "Warwick", "Wukong",
    "Xayah", "Xerath", "Xin Zhao", "Yasuo", "Yone",
    "Yorick", "Yuumi", "Zac", "Zed", "Zeri",
    "Ziggs", "Zilean", "Zoe", "Zyra",
];

/// The catalog file could not be parsed. Callers treat the catalog as
/// optional and degrade to plain tiles.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed champion catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    data: HashMap<String, RawChampion>,
}

#[derive(Debug, Deserialize)]
struct RawChampion {
    name: String,
}

/// Display name to asset slug, from the static game-data catalog.
/// Slugs differ from names where the asset pipeline disagrees with the
/// display name (e.g. `Wukong` is the `MonkeyKing` asset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChampionCatalog {
    name_to_slug: HashMap<String, String>,
}

impl ChampionCatalog {
    /// Parse the catalog from the game-data `champion.json` shape:
    /// a `data` object keyed by slug, each entry carrying the display
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when the text is not that
    /// shape.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(raw)?;
        let name_to_slug = raw
            .data
            .into_iter()
            .map(|(slug, champion)| (champion.name, slug))
            .collect();
        Ok(Self { name_to_slug })
    }

    /// Asset slug for a display name, when the catalog knows it.
    #[must_use]
    pub fn slug_for(&self, name: &str) -> Option<&str> {
        self.name_to_slug.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_to_slug.is_empty()
    }
}
