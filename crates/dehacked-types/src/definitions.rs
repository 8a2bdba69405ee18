use serde::{Deserialize, Serialize};

use crate::map_info::MapInfo;
use crate::mobj_info::MobjInfo;
use crate::sound::{Music, Sound};
use crate::sprite::SpriteId;
use crate::state::State;
use crate::value::{Text, Value};

/// The live definition database a patch is applied to.
///
/// Collections are plain vectors: records are addressed by index, which is
/// what DeHackEd's numeric references resolve to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definitions {
    pub things: Vec<MobjInfo>,
    pub states: Vec<State>,
    pub sprites: Vec<SpriteId>,
    pub sounds: Vec<Sound>,
    pub musics: Vec<Music>,
    pub values: Vec<Value>,
    pub texts: Vec<Text>,
    pub map_infos: Vec<MapInfo>,
    /// Names of the action functions the engine links.
    pub actions: Vec<String>,
}

impl Definitions {
    /// Find a value by exact key-path. Searches from the most recently
    /// appended record backwards, so the newest duplicate wins.
    pub fn value_index(&self, path: &str) -> Option<usize> {
        if path.is_empty() {
            return None;
        }
        self.values.iter().rposition(|v| v.id == path)
    }

    pub fn value(&self, path: &str) -> Option<&str> {
        self.value_index(path).map(|i| self.values[i].text.as_str())
    }

    /// Set the text of the value at `path`, appending a new record when
    /// none exists. Returns the record's index.
    pub fn set_value(&mut self, path: &str, text: impl Into<String>) -> usize {
        let text = text.into();
        match self.value_index(path) {
            Some(idx) => {
                self.values[idx].text = text;
                idx
            }
            None => {
                self.values.push(Value::new(path, text));
                self.values.len() - 1
            }
        }
    }

    pub fn text_index(&self, id: &str) -> Option<usize> {
        self.texts.iter().position(|t| t.id.eq_ignore_ascii_case(id))
    }

    pub fn map_info_index(&self, uri: &str) -> Option<usize> {
        self.map_infos
            .iter()
            .position(|m| m.uri.eq_ignore_ascii_case(uri))
    }

    /// Look up a known action function, returning its canonical spelling.
    pub fn action(&self, name: &str) -> Option<&str> {
        self.actions
            .iter()
            .find(|a| a.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }
}
