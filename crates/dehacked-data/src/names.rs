//! Names from the original DOOM executable's tables.
//!
//! Sound and music names are the lump names without their `DS` / `D_`
//! prefix; index 0 of both is the unused `none` entry.

pub static SPRITE_NAMES: &[&str] = &[
    "TROO", "SHTG", "PUNG", "PISG", "PISF", "SHTF", "SHT2", "CHGG", "CHGF", "MISG",
    "MISF", "SAWG", "PLSG", "PLSF", "BFGG", "BFGF", "BLUD", "PUFF", "BAL1", "BAL2",
    "PLSS", "PLSE", "MISL", "BFS1", "BFE1", "BFE2", "TFOG", "IFOG", "PLAY", "POSS",
    "SPOS", "VILE", "FIRE", "FATB", "FBXP", "SKEL", "MANF", "FATT", "CPOS", "SARG",
    "HEAD", "BAL7", "BOSS", "BOS2", "SKUL", "SPID", "BSPI", "APLS", "APBX", "CYBR",
    "PAIN", "SSWV", "KEEN", "BBRN", "BOSF", "ARM1", "ARM2", "BAR1", "BEXP", "FCAN",
    "BON1", "BON2", "BKEY", "RKEY", "YKEY", "BSKU", "RSKU", "YSKU", "STIM", "MEDI",
    "SOUL", "PINV", "PSTR", "PINS", "MEGA", "SUIT", "PMAP", "PVIS", "CLIP", "AMMO",
    "ROCK", "BROK", "CELL", "CELP", "SHEL", "SBOX", "BPAK", "BFUG", "MGUN", "CSAW",
    "LAUN", "PLAS", "SHOT", "SGN2", "COLU", "SMT2", "GOR1", "POL2", "POL5", "POL4",
    "POL3", "POL1", "POL6", "GOR2", "GOR3", "GOR4", "GOR5", "SMIT", "COL1", "COL2",
    "COL3", "COL4", "CAND", "CBRA", "COL6", "TRE1", "TRE2", "ELEC", "CEYE", "FSKU",
    "COL5", "TBLU", "TGRN", "TRED", "SMBT", "SMGT", "SMRT", "HDB1", "HDB2", "HDB3",
    "HDB4", "HDB5", "HDB6", "POB1", "POB2", "BRS1", "TLMP", "TLP2",
];

pub static SOUND_NAMES: &[&str] = &[
    "none", "pistol", "shotgn", "sgcock", "dshtgn", "dbopn", "dbcls", "dbload",
    "plasma", "bfg", "sawup", "sawidl", "sawful", "sawhit", "rlaunc", "rxplod",
    "firsht", "firxpl", "pstart", "pstop", "doropn", "dorcls", "stnmov", "swtchn",
    "swtchx", "plpain", "dmpain", "popain", "vipain", "mnpain", "pepain", "slop",
    "itemup", "wpnup", "oof", "telept", "posit1", "posit2", "posit3", "bgsit1",
    "bgsit2", "sgtsit", "cacsit", "brssit", "cybsit", "spisit", "bspsit", "kntsit",
    "vilsit", "mansit", "pesit", "sklatk", "sgtatk", "skepch", "vilatk", "claw",
    "skeswg", "pldeth", "pdiehi", "podth1", "podth2", "podth3", "bgdth1", "bgdth2",
    "sgtdth", "cacdth", "skldth", "brsdth", "cybdth", "spidth", "bspdth", "vildth",
    "kntdth", "pedth", "skedth", "posact", "bgact", "dmact", "bspact", "bspwlk",
    "vilact", "noway", "barexp", "punch", "hoof", "metal", "chgun", "tink",
    "bdopn", "bdcls", "itmbk", "flame", "flamst", "getpow", "bospit", "boscub",
    "bossit", "bospn", "bosdth", "manatk", "mandth", "sssit", "ssdth", "keenpn",
    "keendt", "skeact", "skesit", "skeatk", "radio",
];

pub static MUSIC_NAMES: &[&str] = &[
    "none", "e1m1", "e1m2", "e1m3", "e1m4", "e1m5", "e1m6", "e1m7",
    "e1m8", "e1m9", "e2m1", "e2m2", "e2m3", "e2m4", "e2m5", "e2m6",
    "e2m7", "e2m8", "e2m9", "e3m1", "e3m2", "e3m3", "e3m4", "e3m5",
    "e3m6", "e3m7", "e3m8", "e3m9", "inter", "intro", "bunny", "victor",
    "introa", "runnin", "stalks", "countd", "betwee", "doom", "the_da", "shawn",
    "ddtblu", "in_cit", "dead", "stlks2", "theda2", "doom2", "ddtbl2", "runni2",
    "dead2", "stlks3", "romero", "shawn2", "messag", "count2", "ddtbl3", "ampie",
    "theda3", "adrian", "messg2", "romer2", "tense", "shawn3", "openin", "evil",
    "ultima", "read_m", "dm2ttl", "dm2int",
];

/// Action functions linked by the original executable.
pub static ACTION_NAMES: &[&str] = &[
    "A_Light0", "A_WeaponReady", "A_Lower", "A_Raise",
    "A_Punch", "A_ReFire", "A_FirePistol", "A_Light1",
    "A_FireShotgun", "A_Light2", "A_FireShotgun2", "A_CheckReload",
    "A_OpenShotgun2", "A_LoadShotgun2", "A_CloseShotgun2", "A_FireCGun",
    "A_GunFlash", "A_FireMissile", "A_Saw", "A_FirePlasma",
    "A_BFGsound", "A_FireBFG", "A_BFGSpray", "A_Explode",
    "A_Pain", "A_PlayerScream", "A_Fall", "A_XScream",
    "A_Look", "A_Chase", "A_FaceTarget", "A_PosAttack",
    "A_Scream", "A_SPosAttack", "A_VileChase", "A_VileStart",
    "A_VileTarget", "A_VileAttack", "A_StartFire", "A_Fire",
    "A_FireCrackle", "A_Tracer", "A_SkelWhoosh", "A_SkelFist",
    "A_SkelMissile", "A_FatRaise", "A_FatAttack1", "A_FatAttack2",
    "A_FatAttack3", "A_BossDeath", "A_CPosAttack", "A_CPosRefire",
    "A_TroopAttack", "A_SargAttack", "A_HeadAttack", "A_BruisAttack",
    "A_SkullAttack", "A_Metal", "A_SpidRefire", "A_BabyMetal",
    "A_BspiAttack", "A_Hoof", "A_CyberAttack", "A_PainAttack",
    "A_PainDie", "A_KeenDie", "A_BrainPain", "A_BrainScream",
    "A_BrainDie", "A_BrainAwake", "A_BrainSpit", "A_SpawnSound",
    "A_SpawnFly", "A_BrainExplode",
];

/// Index of `name` in one of the name tables, ignoring case.
pub fn find_name(table: &[&str], name: &str) -> Option<usize> {
    table.iter().position(|n| n.eq_ignore_ascii_case(name))
}

/// Finale background flats and the value ids that select them.
pub static FINALE_BACKGROUNDS: &[(&str, &str)] = &[
    ("FLOOR4_8", "BGFLATE1"),
    ("SFLR6_1", "BGFLATE2"),
    ("MFLR8_4", "BGFLATE3"),
    ("MFLR8_3", "BGFLATE4"),
    ("SLIME16", "BGFLAT06"),
    ("RROCK14", "BGFLAT11"),
    ("RROCK07", "BGFLAT20"),
    ("RROCK17", "BGFLAT30"),
    ("RROCK13", "BGFLAT15"),
    ("RROCK19", "BGFLAT31"),
    ("BOSSBACK", "BGCASTCALL"),
];

/// Look up the finale background value id for a flat name.
pub fn find_finale_background(flat: &str) -> Option<&'static str> {
    FINALE_BACKGROUNDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(flat))
        .map(|&(_, id)| id)
}

/// Whether `id` is one of the finale background value ids.
pub fn is_finale_background_id(id: &str) -> bool {
    FINALE_BACKGROUNDS
        .iter()
        .any(|(_, value)| value.eq_ignore_ascii_case(id))
}
