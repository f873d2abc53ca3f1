//! Kit ranking — deterministic weighted scoring of catalog entries against preferences.
//!
//! Six independent factor groups are summed; exactly one branch fires per group.
//! Ranking uses a stable sort so kits with equal scores keep catalog order.

use serde::Serialize;

use crate::catalog::models::{DrumKit, KitType, SkillLevel, Space};
use crate::catalog::preferences::Preferences;

/// Shortlist size used when none is configured.
pub const DEFAULT_SHORTLIST_SIZE: usize = 3;

const TYPE_MATCH: i32 = 30;
const TYPE_MISMATCH: i32 = -10;

const BUDGET_FIT: i32 = 25;
const BUDGET_TOO_LOW: i32 = -20;
// Overpaying is penalized less than being priced out.
const BUDGET_TOO_HIGH: i32 = -5;

const SPACE_MATCH: i32 = 20;
const SPACE_CONFLICT: i32 = -40;
const SPACE_OTHER: i32 = 5;

const SKILL_EXACT: i32 = 10;
const SKILL_NEAR: i32 = 6;

const GENRE_MATCH: i32 = 15;
const GENRE_MISMATCH: i32 = 2;

const QUIET_BONUS: i32 = 10;

/// A kit paired with its score for one set of preferences.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredKit<'a> {
    pub kit: &'a DrumKit,
    pub score: i32,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn score_kit(kit: &DrumKit, prefs: &Preferences) -> i32 {
    type_score(kit, prefs)
        + budget_score(kit, prefs.budget)
        + space_score(kit, prefs)
        + skill_score(kit, prefs.skill)
        + genre_score(kit, &prefs.genre)
        + quiet_score(kit, prefs.quiet_priority)
}

fn type_score(kit: &DrumKit, prefs: &Preferences) -> i32 {
    if prefs.kit_type == kit.kit_type {
        TYPE_MATCH
    } else {
        TYPE_MISMATCH
    }
}

fn budget_score(kit: &DrumKit, budget: u32) -> i32 {
    if (kit.price_min..=kit.price_max).contains(&budget) {
        BUDGET_FIT
    } else if budget < kit.price_min {
        BUDGET_TOO_LOW
    } else {
        BUDGET_TOO_HIGH
    }
}

fn space_score(kit: &DrumKit, prefs: &Preferences) -> i32 {
    if prefs.space == kit.space {
        SPACE_MATCH
    } else if prefs.space == Space::Apartment && kit.kit_type == KitType::Acoustic {
        // an acoustic kit in an apartment is a noise conflict
        SPACE_CONFLICT
    } else {
        SPACE_OTHER
    }
}

fn skill_score(kit: &DrumKit, skill: SkillLevel) -> i32 {
    if skill == kit.skill {
        SKILL_EXACT
    } else if skill == SkillLevel::Beginner && kit.skill != SkillLevel::Advanced {
        SKILL_NEAR
    } else {
        0
    }
}

fn genre_score(kit: &DrumKit, genre: &str) -> i32 {
    if kit.supports_genre(genre) {
        GENRE_MATCH
    } else {
        GENRE_MISMATCH
    }
}

fn quiet_score(kit: &DrumKit, quiet_priority: bool) -> i32 {
    if quiet_priority && kit.kit_type == KitType::Electronic {
        QUIET_BONUS
    } else {
        0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Scores every kit and orders them best-first. Equal scores keep catalog order.
pub fn rank_kits<'a>(catalog: &'a [DrumKit], prefs: &Preferences) -> Vec<ScoredKit<'a>> {
    let mut ranked: Vec<ScoredKit<'a>> = catalog
        .iter()
        .map(|kit| ScoredKit {
            kit,
            score: score_kit(kit, prefs),
        })
        .collect();
    // `sort_by` is stable; do not switch to `sort_unstable_by`.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// The top `k` kits (fewer if the catalog is smaller), best first.
#[allow(dead_code)]
pub fn pick_top_kits<'a>(
    catalog: &'a [DrumKit],
    prefs: &Preferences,
    k: usize,
) -> Vec<&'a DrumKit> {
    rank_kits(catalog, prefs)
        .into_iter()
        .take(k)
        .map(|scored| scored.kit)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
