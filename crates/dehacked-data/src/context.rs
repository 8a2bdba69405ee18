//! State shared by a patch and every file it includes.

use std::io;
use std::path::{Path, PathBuf};

use dehacked_types::{Definitions, NUMMOBJTYPES, NUMSPRITES, NUMSTATES};

/// Default ceiling on nested `include` directives.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 2;

/// Where the reader finds included patches and checks for lumps.
pub trait Resources {
    /// Read the whole of an included patch.
    fn read_include(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Whether a lump with this name is available to the engine.
    fn lump_exists(&self, name: &str) -> bool;
}

/// Includes and lumps resolved against a directory on disk. A lump `NAME`
/// exists when `NAME` or `NAME.lmp` is present in the directory.
#[derive(Debug, Clone)]
pub struct FsResources {
    base: PathBuf,
}

impl FsResources {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl Resources for FsResources {
    fn read_include(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.base.join(path))
    }

    fn lump_exists(&self, name: &str) -> bool {
        self.base.join(name).is_file() || self.base.join(format!("{name}.lmp")).is_file()
    }
}

/// Definitions as they were before any patch was applied. Legacy patches
/// address some things by their original identity rather than their
/// current one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginalData {
    pub sprite_names: Vec<String>,
    pub action_names: Vec<String>,
    pub thing_heights: Vec<f32>,
}

impl OriginalData {
    pub fn capture(defs: &Definitions) -> Self {
        Self {
            sprite_names: defs
                .sprites
                .iter()
                .take(NUMSPRITES)
                .map(|s| s.id.clone())
                .collect(),
            action_names: defs
                .states
                .iter()
                .take(NUMSTATES)
                .map(|s| s.action.clone())
                .collect(),
            thing_heights: defs
                .things
                .iter()
                .take(NUMMOBJTYPES)
                .map(|t| t.height)
                .collect(),
        }
    }

    /// State index of code pointer `offset`: the `offset`-th original state
    /// that had an action function.
    pub fn state_for_action_offset(&self, offset: usize) -> Option<usize> {
        self.action_names
            .iter()
            .enumerate()
            .filter(|(_, action)| !action.is_empty() && !action.eq_ignore_ascii_case("NULL"))
            .nth(offset)
            .map(|(idx, _)| idx)
    }

    pub fn is_sprite_name(&self, name: &str) -> bool {
        self.sprite_names.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

/// Context threaded through a patch and its includes.
pub struct PatchContext {
    pub(crate) depth: usize,
    pub max_include_depth: usize,
    /// Identity of the game being patched, e.g. `doom` or `chex`.
    pub game_id: String,
    pub original: OriginalData,
    pub resources: Box<dyn Resources>,
}

impl PatchContext {
    /// Capture the original-data snapshot from `defs`, which should not
    /// have been patched yet.
    pub fn new(defs: &Definitions, resources: Box<dyn Resources>) -> Self {
        Self {
            depth: 0,
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            game_id: "doom".into(),
            original: OriginalData::capture(defs),
            resources,
        }
    }

    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    pub fn with_game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = game_id.into();
        self
    }

    /// Number of readers currently active, the outermost patch included.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
