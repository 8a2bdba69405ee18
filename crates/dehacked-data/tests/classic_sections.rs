mod common;

use common::{
    MemoryResources, SIGNATURE, apply, capture_logs, context, fixture, has_warning, patched,
};
use dehacked_data::{DehError, DehReader, ReaderFlags};
use dehacked_types::{MobjFlags, SoundName, StateFlags, StateName};

#[test]
fn thing_patch_changes_only_named_fields() {
    let before = fixture();
    let defs = patched(&format!("{SIGNATURE}Thing 1\nHit points = 2000\nID # = 9999\n"));

    let mut expected = before.things[0].clone();
    expected.spawn_health = 2000;
    expected.doom_ed_num = 9999;
    assert_eq!(defs.things[0], expected);
    assert_eq!(defs.things[1..], before.things[1..]);
}

#[test]
fn out_of_range_thing_is_discarded() {
    capture_logs();
    let before = fixture();
    let defs = patched(&format!("{SIGNATURE}Thing 99999\nSpeed = 10\n"));

    assert!(has_warning("out of range"), "expected an out of range warning");
    for (thing, original) in defs.things.iter().zip(&before.things) {
        assert_eq!(thing.speed, original.speed);
    }
}

#[test]
fn discarded_section_is_still_syntax_checked() {
    let mut defs = fixture();
    let before = defs.clone();
    let mut ctx = context(&defs, MemoryResources::default());
    let patch = format!("{SIGNATURE}Frame 5000\nDuration = 3\n = 4\nThing 1\nMass = 7\n");

    let result = {
        let mut reader =
            DehReader::new(&mut defs, &mut ctx, patch.as_bytes(), true, ReaderFlags::empty());
        reader.parse()
    };

    assert!(matches!(result, Err(DehError::Syntax { .. })));
    assert_eq!(defs, before, "nothing may be applied from or after the bad line");
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn every_out_of_range_header_discards() {
    capture_logs();
    let before = fixture();
    let defs = patched(
        "Thing 0\nMass = 1\n\n\
         Thing -4\nMass = 1\n\n\
         Frame 10\nDuration = 1\n\n\
         Sprite 138\nOffset = 151328\n\n\
         Sound 109\nValue = 1\n\n\
         Pointer 99\nCodep Frame = 2\n\n\
         Ammo 4\nMax ammo = 1\n",
    );

    assert_eq!(defs.things, before.things);
    assert_eq!(defs.states, before.states);
    assert_eq!(defs.sprites, before.sprites);
    assert_eq!(defs.sounds, before.sounds);
    assert_eq!(defs.values, before.values);
    assert!(has_warning("Thing #0 out of range"));
    assert!(has_warning("Frame #10 out of range"));
    assert!(has_warning("Sprite #138 out of range"));
    assert!(has_warning("Sound #109 out of range"));
    assert!(has_warning("Pointer #99 out of range"));
    assert!(has_warning("Ammo #4 out of range"));
}

#[test]
fn unknown_section_is_skipped() {
    capture_logs();
    let defs = patched(
        "Frobnicate 3\nfoo = 1\nbar = 2\n\n\
         Thing 2\nHit points = 55\n\n\
         Misc 0\nMax Health = 250\n",
    );

    assert!(has_warning("Unknown section \"Frobnicate 3\""));
    assert_eq!(defs.things[1].spawn_health, 55);
    assert_eq!(defs.value("Player|Health Limit"), Some("250"));
}

#[test]
fn signature_versions() {
    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default());
    let patch = "Patch File for DeHackEd v2.3\nDoom version = 20\nPatch format = 6\n";
    let mut reader =
        DehReader::new(&mut defs, &mut ctx, patch.as_bytes(), true, ReaderFlags::empty());
    reader.parse().expect("parse signature");
    assert_eq!(reader.doom_version(), 1);
    assert_eq!(reader.patch_version(), 6);
}

#[test]
fn unknown_doom_version_assumes_v19() {
    capture_logs();
    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default());
    let patch = "Patch File for DeHackEd v3.0\nDoom version = 12\nPatch format = 5\n";
    let mut reader =
        DehReader::new(&mut defs, &mut ctx, patch.as_bytes(), true, ReaderFlags::empty());
    reader.parse().expect("parse signature");
    assert_eq!(reader.doom_version(), 3);
    assert!(has_warning("Doom version 12 unknown"));
    assert!(has_warning("Unknown patch format 5"));
}

#[test]
fn missing_signature_assumes_bex() {
    capture_logs();
    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default());
    let mut reader =
        DehReader::new(&mut defs, &mut ctx, b"Thing 1\nMass = 5\n", true, ReaderFlags::empty());
    reader.parse().expect("parse");
    assert_eq!(reader.doom_version(), 3);
    assert_eq!(reader.patch_version(), 6);
    drop(reader);
    assert!(has_warning("missing a signature"));
    assert_eq!(defs.things[0].mass, 5);
}

#[test]
fn thing_fixed_point_fields() {
    let defs = patched(
        "Thing 2\nWidth = 1310720\nHeight = 3670016\nSpeed = 12\n\n\
         Thing 1\nSpeed = 1310720\n",
    );
    assert_eq!(defs.things[1].radius, 20.0);
    assert_eq!(defs.things[1].height, 56.0);
    assert_eq!(defs.things[1].speed, 12.0);
    assert_eq!(defs.things[0].speed, 20.0);
}

#[test]
fn thing_state_and_sound_slots() {
    capture_logs();
    let before = fixture();
    let defs = patched(
        "Thing 2\nInitial frame = 3\nInjury frame = 6\nAlert sound = 36\nPain sound = 27\n\
         Bogus frame = 1\n",
    );
    let thing = &defs.things[1];
    assert_eq!(thing.state(StateName::Spawn), "POSS_RUN1");
    assert_eq!(thing.state(StateName::Pain), "POSS_PAIN");
    assert_eq!(thing.sounds[SoundName::See as usize], before.sounds[36].id);
    assert_eq!(thing.sounds[SoundName::Pain as usize], before.sounds[27].id);
    assert!(has_warning("Bogus frame"));
}

#[test]
fn bits_mnemonics_and_numbers() {
    capture_logs();
    let defs = patched(
        "Thing 1\nBits = SOLID+SHOOTABLE | countkill\n\n\
         Thing 2\nBits = 4194310\n\n\
         Thing 3\nBits = TRANSLATION NOTELEPORT WIBBLE\n",
    );
    let expected = MobjFlags::SOLID | MobjFlags::SHOOTABLE | MobjFlags::COUNTKILL;
    assert_eq!(defs.things[0].flags[0], expected.bits() as i32);
    assert_eq!(defs.things[1].flags[0], 0x0040_0006);
    assert_eq!(defs.things[2].flags[0], MobjFlags::TRANSLATION.bits() as i32);
    assert_eq!(defs.things[2].flags[1], 1 << 7);
    assert!(has_warning("Unknown flag mnemonic \"WIBBLE\""));
}

#[test]
fn numeric_bits_cannot_set_engine_flags() {
    let defs = patched("Thing 1\nBits = -1\n");
    assert_eq!(defs.things[0].flags[0], MobjFlags::DEHACKED_MASK as i32);
}

#[test]
fn spawn_ceiling_height_is_restored() {
    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default());

    apply(&mut defs, &mut ctx, "Thing 3\nHeight = 655360\n");
    assert_eq!(defs.things[2].height, 10.0);

    apply(&mut defs, &mut ctx, "Thing 3\nBits = SPAWNCEILING\n");
    assert_eq!(defs.things[2].height, 72.0, "height comes back from the snapshot");

    apply(&mut defs, &mut ctx, "Thing 3\nBits = SPAWNCEILING\nHeight = 655360\n");
    assert_eq!(defs.things[2].height, 10.0, "an explicit height wins");
}

#[test]
fn ceiling_spawner_keeps_patched_height_without_bits() {
    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default());

    apply(&mut defs, &mut ctx, "Thing 3\nHeight = 655360\n");
    apply(&mut defs, &mut ctx, "Thing 3\nHit points = 5\n");
    assert_eq!(defs.things[2].spawn_health, 5);
    assert_eq!(defs.things[2].height, 10.0);

    apply(&mut defs, &mut ctx, "Thing 3\nBits = SHOOTABLE\n");
    assert_eq!(defs.things[2].height, 10.0, "bits without SPAWNCEILING leave the height");
}

#[test]
fn frame_fields() {
    let defs = patched(
        "Frame 2\nDuration = 7\nNext frame = 3\nSprite number = 1\n\
         Sprite subnumber = 32770\nUnknown 1 = 5\n",
    );
    let state = &defs.states[2];
    assert_eq!(state.tics, 7);
    assert_eq!(state.next_state, "POSS_RUN1");
    assert_eq!(state.sprite, "SHTG");
    assert_eq!(state.frame, 2);
    assert!(state.flags.contains(StateFlags::FULLBRIGHT));
    assert_eq!(state.misc[1], 5);
}

#[test]
fn frame_subnumber_clears_fullbright() {
    let mut defs = fixture();
    defs.states[4].flags = StateFlags::FULLBRIGHT;
    let mut ctx = context(&defs, MemoryResources::default());
    apply(&mut defs, &mut ctx, "Frame 4\nSprite subnumber = 3\n");
    assert_eq!(defs.states[4].frame, 3);
    assert!(!defs.states[4].flags.contains(StateFlags::FULLBRIGHT));
}

#[test]
fn frame_subnumber_keeps_high_bits() {
    let defs = patched("Frame 2\nSprite subnumber = 98306\n");
    assert_eq!(defs.states[2].frame, 0x1_0002);
    assert!(defs.states[2].flags.contains(StateFlags::FULLBRIGHT));
}

#[test]
fn frame_unsupported_keys_warn() {
    capture_logs();
    let defs = patched("Frame 3\nAction pointer = 1234\nArgs1 = 5\nDuration = 2\n");
    assert!(has_warning("Action pointer"));
    assert!(has_warning("Args1"));
    assert_eq!(defs.states[3].tics, 2);
}

#[test]
fn pointer_uses_original_action_offsets() {
    // Only states 2 to 5, 7 and 9 carry actions, so code pointer 1 is state 3.
    let defs = patched("Pointer 1 (Frame 3)\nCodep Frame = 7\n");
    assert_eq!(defs.states[3].action, "A_Pain");
}

#[test]
fn pointer_reads_actions_from_before_the_patch() {
    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default());
    apply(
        &mut defs,
        &mut ctx,
        "Pointer 0 (Frame 2)\nCodep Frame = 5\n\nPointer 3 (Frame 5)\nCodep Frame = 2\n",
    );
    assert_eq!(defs.states[2].action, "A_PosAttack");
    assert_eq!(defs.states[5].action, "A_Look");
}

#[test]
fn sprite_offset_copies_original_name() {
    // v1.9 table offset plus the pointer base plus five 8-byte entries.
    let offset = 129_284 + 22_044 + 5 * 8;
    let defs = patched(&format!("{SIGNATURE}Sprite 0\nOffset = {offset}\n"));
    assert_eq!(defs.sprites[0].id, "SHTF");
}

#[test]
fn extreme_sprite_offset_is_out_of_range() {
    capture_logs();
    let before = fixture();
    let defs = patched("Sprite 1\nOffset = -2147483648\n");
    assert_eq!(defs.sprites, before.sprites);
    assert!(has_warning("Sprite offset #-2147483648 out of range"));
}

#[test]
fn sound_fields() {
    let before = fixture();
    let defs = patched(
        "Sound 1\nValue = 64\nZero/One = 1\nZero 1 = 3\nZero 2 = 10\nZero 3 = 20\n\
         Zero 4 = 0\nNeg. One 1 = -1\nNeg. One 2 = -1\n",
    );
    let sound = &defs.sounds[1];
    assert_eq!(sound.priority, 64);
    assert_eq!(sound.group, 1);
    assert_eq!(sound.link, before.sounds[2].id);
    assert_eq!(sound.link_pitch, 10);
    assert_eq!(sound.link_volume, 20);
}

#[test]
fn sound_link_zero_clears() {
    let mut defs = fixture();
    defs.sounds[3].link = "pistol".into();
    let mut ctx = context(&defs, MemoryResources::default());
    apply(&mut defs, &mut ctx, "Sound 3\nZero 1 = 0\n");
    assert_eq!(defs.sounds[3].link, "");
}

#[test]
fn extreme_sound_link_is_out_of_range() {
    capture_logs();
    let before = fixture();
    let defs = patched("Sound 1\nZero 1 = -2147483648\n");
    assert_eq!(defs.sounds, before.sounds);
    assert!(has_warning("Sound #-2147483648 out of range"));
}

#[test]
fn ammo_and_weapon_values() {
    let defs = patched(
        "Ammo 1\nMax ammo = 100\nPer ammo = 8\n\n\
         Weapon 2\nAmmo type = 1\nAmmo per shot = 2\nShooting frame = 4\n",
    );
    assert_eq!(defs.value("Player|Max ammo|Shell"), Some("100"));
    assert_eq!(defs.value("Player|Clip ammo|Shell"), Some("8"));
    assert_eq!(defs.value("Weapon Info|2|Type"), Some("shell"));
    assert_eq!(defs.value("Weapon Info|2|Per shot"), Some("2"));
    assert_eq!(defs.value("Weapon Info|2|Attack"), Some("POSS_ATK1"));
}

#[test]
fn misc_values() {
    capture_logs();
    let defs = patched(
        "Misc 0\nInitial Health = 150\nMonsters Infight = 221\nBFG Cells/Shot = 30\n\
         Frag Limit = 3\n",
    );
    assert_eq!(defs.value("Player|Health"), Some("150"));
    assert_eq!(defs.value("AI|Infight"), Some("1"));
    assert_eq!(defs.value("Weapon Info|6|Per shot"), Some("30"));
    assert!(has_warning("Unknown value \"Frag Limit\""));

    let defs = patched("Misc 0\nMonsters Infight = 202\n");
    assert_eq!(defs.value("AI|Infight"), Some("0"));
}

#[test]
fn cheat_section_is_skipped() {
    capture_logs();
    let defs = patched("Cheat 0\nChange music = idmus\n\nMisc 0\nMax Armor = 250\n");
    assert!(has_warning("[Cheat] patches are not supported"));
    assert_eq!(defs.value("Player|Blue Armor"), Some("250"));
}

#[test]
fn bundled_chex_cheats_are_quiet() {
    capture_logs();
    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default()).with_game_id("chex");
    dehacked_data::apply_patch(
        &mut defs,
        &mut ctx,
        b"Cheat 0\nGod mode = joelkoenigs\n",
        false,
        ReaderFlags::empty(),
    );
    assert!(!has_warning("[Cheat]"));

    dehacked_data::apply_patch(
        &mut defs,
        &mut ctx,
        b"Cheat 0\nGod mode = joelkoenigs\n",
        true,
        ReaderFlags::empty(),
    );
    assert!(has_warning("[Cheat]"));
}

#[test]
fn nul_ends_the_patch_unless_ignored() {
    let patch = "Misc 0\nMax Health = 250\n\0\nMisc 0\nMax Armor = 300\n";

    let defs = patched(patch);
    assert_eq!(defs.value("Player|Health Limit"), Some("250"));
    assert_eq!(defs.value("Player|Blue Armor"), None);

    let mut defs = fixture();
    let mut ctx = context(&defs, MemoryResources::default());
    dehacked_data::apply_patch(
        &mut defs,
        &mut ctx,
        patch.as_bytes(),
        true,
        ReaderFlags::IGNORE_EOF,
    );
    assert_eq!(defs.value("Player|Blue Armor"), Some("300"));
}

#[test]
fn comments_and_crlf_are_tolerated() {
    let defs = patched("# a comment\r\n\r\nThing 1\r\n# inside\r\nMass = 300\r\n");
    assert_eq!(defs.things[0].mass, 300);
}
