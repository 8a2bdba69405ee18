mod bex;
pub mod context;
pub mod error;
pub mod mappings;
pub mod names;
pub mod reader;
pub mod section;
pub mod sections;
pub mod source;
pub mod stock;
mod text;
pub mod text_mappings;
pub mod util;

pub use context::{DEFAULT_MAX_INCLUDE_DEPTH, FsResources, OriginalData, PatchContext, Resources};
pub use error::DehError;
pub use reader::{DehReader, ReaderFlags, normalize_doom_version};
pub use sections::Target;

use dehacked_types::Definitions;

/// Apply one DeHackEd/BEX patch to `defs`.
///
/// Nothing is returned: problems are logged, and a syntax error that
/// abandons the rest of the patch is logged as a warning too. Whatever was
/// applied before the error stays applied.
pub fn apply_patch(
    defs: &mut Definitions,
    ctx: &mut PatchContext,
    patch: &[u8],
    is_custom: bool,
    flags: ReaderFlags,
) {
    let mut reader = DehReader::new(defs, ctx, patch, is_custom, flags);
    if let Err(err) = reader.parse() {
        log::warn!("{err}, the rest of the patch is ignored");
    }
}
