use serde::{Deserialize, Serialize};

/// Per-map information, keyed by map URI (`Maps:E1M1`, `Maps:MAP01`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapInfo {
    pub uri: String,
    pub name: String,
    /// Par time in seconds.
    pub par_time: f32,
}

impl MapInfo {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }
}

/// Compose the URI of a map. Episode 0 means DOOM II style `MAPxx` naming.
pub fn compose_map_uri(episode: i32, map: i32) -> String {
    if episode > 0 {
        format!("Maps:E{episode}M{map}")
    } else {
        format!("Maps:MAP{map:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episodic_uri() {
        assert_eq!(compose_map_uri(1, 4), "Maps:E1M4");
        assert_eq!(compose_map_uri(4, 9), "Maps:E4M9");
    }

    #[test]
    fn doom2_uri() {
        assert_eq!(compose_map_uri(0, 7), "Maps:MAP07");
        assert_eq!(compose_map_uri(0, 32), "Maps:MAP32");
    }
}
