//! Response models for the PokeAPI
//!
//! Deserialization targets mirroring the JSON shapes the remote catalog
//! returns. The cache below this layer stores raw bytes; decoding into
//! these types happens after the cache seam.

use std::fmt::Write as _;

use serde::{Deserialize, Deserializer};

/// One page of a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A name plus the URL of the full resource, PokeAPI's standard
/// reference shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Encounter list for one location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationEncounters {
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

/// One creature that can be encountered at a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

/// Full creature detail from `pokemon/{name}`.
///
/// `base_experience` drives the catch roll; it is null for a few
/// creatures in the catalog, which decodes as zero (a guaranteed catch).
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

/// The catalog serializes an unknown base experience as an explicit
/// `null` rather than omitting the field.
fn null_to_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

impl Pokemon {
    /// Renders the multi-line report shown by the `inspect` command.
    pub fn inspection(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Base Experience: {}", self.base_experience);
        let _ = writeln!(out, "Height: {}", self.height);
        let _ = writeln!(out, "Weight: {}", self.weight);

        let _ = writeln!(out, "Types:");
        for t in &self.types {
            let _ = writeln!(out, "  - {}", t.type_.name);
        }

        let _ = writeln!(out, "Stats:");
        for s in &self.stats {
            let _ = writeln!(out, "  - {}: {}", s.stat.name, s.base_stat);
        }

        let _ = writeln!(out, "Moves:");
        for m in &self.moves {
            let _ = writeln!(out, "  - {}", m.move_.name);
        }

        let _ = writeln!(out, "Abilities:");
        for a in &self.abilities {
            let _ = writeln!(out, "  - {}", a.ability.name);
        }

        out
    }
}
