//! Type matchup helpers read off an effectiveness matrix

use crate::stats::EffectivenessMatrix;
use crate::types::Effectiveness;

/// Combined multiplier of one attacking type against every defending type
/// (product of the single-type multipliers).
///
/// Returns `None` if any name is missing from the matrix.
pub fn effectiveness_multi(
    matrix: &EffectivenessMatrix,
    attacker: &str,
    defenders: &[&str],
) -> Option<f32> {
    defenders
        .iter()
        .map(|d| matrix.get(attacker, d).map(|e| e.multiplier()))
        .product()
}

/// Attacking types in the matrix whose combined multiplier satisfies `keep`,
/// in matrix order
fn attackers_where<F>(matrix: &EffectivenessMatrix, defenders: &[&str], keep: F) -> Vec<String>
where
    F: Fn(f32) -> bool,
{
    matrix
        .type_names()
        .iter()
        .filter(|attacker| {
            effectiveness_multi(matrix, attacker, defenders).is_some_and(&keep)
        })
        .cloned()
        .collect()
}

/// Attacking types that hit the defender for more than 1×
pub fn weaknesses(matrix: &EffectivenessMatrix, defenders: &[&str]) -> Vec<String> {
    attackers_where(matrix, defenders, |eff| eff > 1.0)
}

/// Attacking types the defender resists (0 < effectiveness < 1)
pub fn resistances(matrix: &EffectivenessMatrix, defenders: &[&str]) -> Vec<String> {
    attackers_where(matrix, defenders, |eff| eff > 0.0 && eff < 1.0)
}

/// Attacking types the defender is immune to
pub fn immunities(matrix: &EffectivenessMatrix, defenders: &[&str]) -> Vec<String> {
    attackers_where(matrix, defenders, |eff| eff == 0.0)
}

/// Defending types the attacker hits super effectively (single types only)
pub fn super_effective_targets(matrix: &EffectivenessMatrix, attacker: &str) -> Vec<String> {
    matrix
        .row(attacker)
        .map(|row| {
            matrix
                .type_names()
                .iter()
                .zip(row)
                .filter(|(_, cell)| **cell == Effectiveness::SuperEffective)
                .map(|(name, _)| name.clone())
                .collect()
        })
        .unwrap_or_default()
}
