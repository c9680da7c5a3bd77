//! Star-gated unlock tiers.
//!
//! The app presents its content in tiers (planets) that open up as the
//! learner collects stars. The tier list itself is content and lives with
//! the host application; these functions only decide what a given star
//! total opens.

use serde::{Deserialize, Serialize};

/// One unlockable content tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockTier {
    pub id: String,
    /// Stars required to open this tier
    pub required_stars: u32,
    /// Open from the start regardless of stars
    pub default_unlocked: bool,
    /// Display order
    pub order: u32,
}

pub fn is_unlocked(tier: &UnlockTier, total_stars: u32) -> bool {
    tier.default_unlocked || total_stars >= tier.required_stars
}

/// Tiers open at the given star total, in slice order.
pub fn unlocked_tiers(tiers: &[UnlockTier], total_stars: u32) -> Vec<&UnlockTier> {
    tiers
        .iter()
        .filter(|tier| is_unlocked(tier, total_stars))
        .collect()
}

/// The closest still-locked tier (lowest star requirement first).
pub fn next_locked_tier(tiers: &[UnlockTier], total_stars: u32) -> Option<&UnlockTier> {
    tiers
        .iter()
        .filter(|tier| !is_unlocked(tier, total_stars))
        .min_by_key(|tier| tier.required_stars)
}

/// Unlock progress in [0, 1]. Already-open tiers report 1.
pub fn unlock_progress(tier: &UnlockTier, total_stars: u32) -> f64 {
    if tier.default_unlocked || tier.required_stars == 0 {
        return 1.0;
    }
    (f64::from(total_stars) / f64::from(tier.required_stars)).min(1.0)
}

/// Tiers sorted by display order.
pub fn tiers_in_order(tiers: &[UnlockTier]) -> Vec<&UnlockTier> {
    let mut sorted: Vec<&UnlockTier> = tiers.iter().collect();
    sorted.sort_by_key(|tier| tier.order);
    sorted
}

// ==================== Tests ====================
