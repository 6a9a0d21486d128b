//! Condition labels as they appear in TCGplayer price exports.

/// Condition assigned to non-foil copies
pub const NEAR_MINT: &str = "Near Mint";

/// Condition assigned to foil copies
pub const NEAR_MINT_FOIL: &str = "Near Mint Foil";

/// Returns true if a foil indicator cell marks the card as foil.
///
/// Manabox writes `foil` for foils and `normal` (or nothing) otherwise.
pub fn is_foil_flag(flag: &str) -> bool {
    flag.trim().to_lowercase() == "foil"
}

/// Maps a foil indicator onto the condition label used by price exports
pub fn condition_for_foil_flag(flag: &str) -> &'static str {
    if is_foil_flag(flag) {
        NEAR_MINT_FOIL
    } else {
        NEAR_MINT
    }
}
