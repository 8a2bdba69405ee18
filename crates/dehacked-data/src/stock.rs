//! A skeleton DOOM database built from the original name tables.
//!
//! It carries sprites, sounds, music, action functions, replaceable texts,
//! finale backgrounds and map infos. Thing and state records are left to a
//! full definitions file.

use dehacked_types::{
    Definitions, MapInfo, Music, Sound, SpriteId, Text, Value, compose_map_uri,
};

use crate::names::{ACTION_NAMES, FINALE_BACKGROUNDS, MUSIC_NAMES, SOUND_NAMES, SPRITE_NAMES};
use crate::text_mappings::TEXT_MAPPINGS;
use crate::util::escape_newlines;

pub fn doom_definitions() -> Definitions {
    let lump = |prefix: &str, name: &str| {
        if name == "none" {
            String::new()
        } else {
            format!("{prefix}{}", name.to_ascii_uppercase())
        }
    };

    let mut map_infos = Vec::new();
    for episode in 1..=4 {
        for map in 1..=9 {
            map_infos.push(MapInfo::new(compose_map_uri(episode, map)));
        }
    }
    for map in 1..=32 {
        map_infos.push(MapInfo::new(compose_map_uri(0, map)));
    }

    Definitions {
        sprites: SPRITE_NAMES.iter().map(|&n| SpriteId::new(n)).collect(),
        sounds: SOUND_NAMES
            .iter()
            .map(|&n| Sound::new(n, lump("DS", n)))
            .collect(),
        musics: MUSIC_NAMES
            .iter()
            .map(|&n| Music::new(n, lump("D_", n)))
            .collect(),
        actions: ACTION_NAMES.iter().map(|&n| n.to_string()).collect(),
        texts: TEXT_MAPPINGS
            .iter()
            .filter(|m| !m.is_disallowed())
            .map(|m| Text::new(m.id, escape_newlines(m.text)))
            .collect(),
        values: FINALE_BACKGROUNDS
            .iter()
            .map(|&(flat, id)| Value::new(id, flat))
            .collect(),
        map_infos,
        ..Definitions::default()
    }
}
