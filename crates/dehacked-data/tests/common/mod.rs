#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::sync::Once;

use dehacked_data::{PatchContext, ReaderFlags, Resources, apply_patch, stock};
use dehacked_types::{Definitions, MobjFlags, MobjInfo, State};

// Each test thread sees only the records it produced.
thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let entry = (record.level(), record.args().to_string());
        RECORDS.with(|r| r.borrow_mut().push(entry));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger (once per process) and clear this thread's
/// records.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("install capture logger");
        log::set_max_level(log::LevelFilter::Debug);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

pub fn warnings() -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(level, _)| *level == log::Level::Warn)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

pub fn has_warning(needle: &str) -> bool {
    warnings().iter().any(|w| w.contains(needle))
}

#[derive(Debug, Default)]
pub struct MemoryResources {
    files: HashMap<String, Vec<u8>>,
    lumps: Vec<String>,
}

impl MemoryResources {
    pub fn with_file(mut self, name: &str, contents: &str) -> Self {
        self.files.insert(name.to_string(), contents.as_bytes().to_vec());
        self
    }

    pub fn with_lump(mut self, name: &str) -> Self {
        self.lumps.push(name.to_string());
        self
    }
}

impl Resources for MemoryResources {
    fn read_include(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }

    fn lump_exists(&self, name: &str) -> bool {
        self.lumps.iter().any(|l| l.eq_ignore_ascii_case(name))
    }
}

pub const SIGNATURE: &str = "Patch File for DeHackEd v3.0\nDoom version = 19\nPatch format = 6\n\n";

/// The stock skeleton plus a few things and states.
pub fn fixture() -> Definitions {
    let mut defs = stock::doom_definitions();

    let mut player = MobjInfo::new("PLAYER");
    player.doom_ed_num = -1;
    player.spawn_health = 100;
    player.speed = 1.0;
    player.radius = 16.0;
    player.height = 56.0;

    let mut possessed = MobjInfo::new("POSSESSED");
    possessed.doom_ed_num = 3004;
    possessed.spawn_health = 20;
    possessed.reaction_time = 8;
    possessed.pain_chance = 200;
    possessed.speed = 8.0;
    possessed.radius = 20.0;
    possessed.height = 56.0;
    possessed.mass = 100;
    possessed.states[0] = "POSS_STND".into();

    let mut keen = MobjInfo::new("KEEN");
    keen.doom_ed_num = 72;
    keen.height = 72.0;
    keen.flags[0] = (MobjFlags::SPAWNCEILING | MobjFlags::SHOOTABLE).bits() as i32;

    defs.things = vec![player, possessed, keen];

    let states = [
        ("NULL", "NULL"),
        ("PLAY", ""),
        ("POSS_STND", "A_Look"),
        ("POSS_RUN1", "A_Chase"),
        ("POSS_ATK1", "A_FaceTarget"),
        ("POSS_ATK2", "A_PosAttack"),
        ("POSS_PAIN", ""),
        ("POSS_PAIN2", "A_Pain"),
        ("KEENSTND", ""),
        ("KEENPAIN", "A_Pain"),
    ];
    defs.states = states
        .iter()
        .map(|&(id, action)| {
            let mut state = State::new(id);
            state.action = action.into();
            state
        })
        .collect();

    defs
}

pub fn context(defs: &Definitions, resources: MemoryResources) -> PatchContext {
    PatchContext::new(defs, Box::new(resources))
}

/// Apply a user patch with no reader flags.
pub fn apply(defs: &mut Definitions, ctx: &mut PatchContext, patch: &str) {
    apply_patch(defs, ctx, patch.as_bytes(), true, ReaderFlags::empty());
}

/// Fixture plus context, with `patch` applied.
pub fn patched(patch: &str) -> Definitions {
    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default());
    apply(&mut defs, &mut ctx, patch);
    defs
}
