mod settings;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use config::{Config, File, FileFormat};
use dehacked_data::{FsResources, PatchContext, apply_patch, stock};
use dehacked_types::Definitions;

use crate::settings::Settings;

/// Apply DeHackEd/BEX patches to a DOOM definitions database.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Patch files, applied in order.
    #[arg(required = true)]
    patches: Vec<PathBuf>,

    /// TOML settings file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML definitions database to patch instead of the built-in one.
    #[arg(short, long)]
    definitions: Option<PathBuf>,

    /// The patches ship with the game rather than being user add-ons.
    #[arg(long)]
    bundled: bool,

    /// Ignore include directives.
    #[arg(long)]
    no_include: bool,

    /// Consume Text sections without applying them.
    #[arg(long)]
    no_text: bool,

    /// Treat NUL bytes as data instead of end of file.
    #[arg(long)]
    ignore_eof: bool,

    /// Print the patched definitions.
    #[arg(long)]
    dump: bool,

    /// More log output (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut settings = Settings::load(args.config.as_deref())?;
    settings.no_include |= args.no_include;
    settings.no_text |= args.no_text;
    settings.ignore_eof |= args.ignore_eof;
    if args.definitions.is_some() {
        settings.definitions.clone_from(&args.definitions);
    }

    let mut defs = match &settings.definitions {
        Some(path) => load_definitions(path)?,
        None => stock::doom_definitions(),
    };

    // The snapshot is taken here, before the first patch touches anything.
    let mut ctx = PatchContext::new(&defs, Box::new(FsResources::new(".")))
        .with_max_include_depth(settings.max_include_depth)
        .with_game_id(settings.game_id.clone());

    let flags = settings.reader_flags();
    for path in &args.patches {
        let patch = std::fs::read(path)
            .wrap_err_with(|| format!("reading patch {}", path.display()))?;
        let base = path.parent().unwrap_or(Path::new("."));
        ctx.resources = Box::new(FsResources::new(base));

        log::info!("Applying \"{}\"...", path.display());
        apply_patch(&mut defs, &mut ctx, &patch, !args.bundled, flags);
    }

    if args.dump {
        println!("{defs:#?}");
    } else {
        println!(
            "Applied {} patch(es): {} things, {} states, {} sprites, {} sounds, {} musics, {} values, {} texts, {} maps",
            args.patches.len(),
            defs.things.len(),
            defs.states.len(),
            defs.sprites.len(),
            defs.sounds.len(),
            defs.musics.len(),
            defs.values.len(),
            defs.texts.len(),
            defs.map_infos.len(),
        );
    }
    Ok(())
}

fn load_definitions(path: &Path) -> Result<Definitions> {
    let defs: Definitions = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml))
        .build()
        .and_then(Config::try_deserialize)
        .wrap_err_with(|| format!("loading definitions from {}", path.display()))?;
    Ok(defs)
}
