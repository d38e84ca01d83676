//! Slots command - list the fixed slot enumeration

use crate::output::{OutputMode, SlotListing};

/// Print every slot with its mod-category identifier
pub fn run(mode: OutputMode) -> anyhow::Result<()> {
    SlotListing::new().print(mode)
}
