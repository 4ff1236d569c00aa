//! Plain-text rendering of catalog statistics

use std::fmt::Write;

use typedex_analytics::query::CatalogPage;
use typedex_analytics::{
    CatalogSummary, Effectiveness, EffectivenessMatrix, TypeCombination, TypeRankings, TypeShare,
};

/// "poison" -> "Poison"
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize each part of a slash-joined combination key
fn capitalize_key(key: &str) -> String {
    key.split('/').map(capitalize).collect::<Vec<_>>().join("/")
}

pub fn distribution(shares: &[TypeShare], limit: Option<usize>) -> String {
    let mut out = String::from("Type Distribution\n\n");
    let _ = writeln!(out, "{:<10} {:>6} {:>8}", "TYPE", "COUNT", "SHARE");

    for share in shares.iter().take(limit.unwrap_or(usize::MAX)) {
        let _ = writeln!(
            out,
            "{:<10} {:>6} {:>7.1}%",
            capitalize(&share.type_name),
            share.count,
            share.percentage
        );
    }
    if shares.is_empty() {
        out.push_str("(no data)\n");
    }
    out
}

pub fn combinations(combos: &[TypeCombination]) -> String {
    let mut out = String::from("Popular Type Combinations\n\n");
    let total: usize = combos.iter().map(|c| c.count).sum();

    for (i, combo) in combos.iter().enumerate() {
        let share = if total == 0 {
            0.0
        } else {
            combo.count as f64 / total as f64 * 100.0
        };
        let _ = writeln!(
            out,
            "#{:<3} {:<20} {:>4} ({:.0}%)",
            i + 1,
            capitalize_key(&combo.key),
            combo.count,
            share
        );
    }
    if combos.is_empty() {
        out.push_str("(no multi-type creatures)\n");
    }
    out
}

pub fn matrix(matrix: &EffectivenessMatrix) -> String {
    let mut out = String::from("Type Effectiveness Matrix\n");
    out.push_str("Attacking type (rows) vs Defending type (columns)\n\n");

    let _ = write!(out, "{:<10}", "ATK \\ DEF");
    for name in matrix.type_names() {
        let short: String = capitalize(name).chars().take(3).collect();
        let _ = write!(out, " {short:>3}");
    }
    out.push('\n');

    for attacker in matrix.type_names() {
        let _ = write!(out, "{:<10}", capitalize(attacker));
        if let Some(row) = matrix.row(attacker) {
            for cell in row {
                let _ = write!(out, " {:>3}", cell.symbol());
            }
        }
        out.push('\n');
    }

    out.push('\n');
    let legend: Vec<String> = Effectiveness::ALL
        .iter()
        .rev()
        .map(|e| format!("{} {}", e.symbol(), e.label()))
        .collect();
    out.push_str(&legend.join("   "));
    out.push('\n');
    out
}

pub fn rankings(rankings: &TypeRankings, top: usize) -> String {
    let mut out = String::from("Best Offensive Types\n");
    for (i, entry) in rankings.by_offense().into_iter().take(top).enumerate() {
        let _ = writeln!(
            out,
            "  #{} {:<10} Super effective vs {} types (score {:+})",
            i + 1,
            capitalize(&entry.type_name),
            entry.super_effective_count,
            entry.offensive_score
        );
    }

    out.push_str("\nMost Vulnerable Types\n");
    for (i, entry) in rankings.by_vulnerability().into_iter().take(top).enumerate() {
        let _ = writeln!(
            out,
            "  #{} {:<10} Weak to {} types (defense {:+})",
            i + 1,
            capitalize(&entry.type_name),
            entry.weak_to_count,
            entry.defensive_score
        );
    }
    out
}

pub fn summary(summary: &CatalogSummary) -> String {
    let mut out = String::from("Summary Statistics\n\n");
    let _ = writeln!(out, "{:<20} {}", "Total Pokemon", summary.total_creatures);
    let _ = writeln!(out, "{:<20} {}", "Total Types", summary.total_types);
    let _ = writeln!(out, "{:<20} {}", "Type Combinations", summary.combination_count);
    let _ = writeln!(out, "{:<20} {}", "Avg Base EXP", summary.average_base_experience);
    out
}

pub fn catalog_page(page: &CatalogPage<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<14} {:<18} {:>10} {:>11} {:>8}",
        "ID", "POKEMON", "TYPES", "HEIGHT (m)", "WEIGHT (kg)", "BASE EXP"
    );

    for creature in &page.rows {
        let types: Vec<String> = creature.types.iter().map(|t| capitalize(t)).collect();
        let _ = writeln!(
            out,
            "#{:03}  {:<14} {:<18} {:>10.1} {:>11.1} {:>8}",
            creature.id,
            capitalize(&creature.name),
            types.join("/"),
            creature.height_m(),
            creature.weight_kg(),
            creature.base_experience
        );
    }

    let _ = writeln!(
        out,
        "\nPage {} of {} ({} matches)",
        page.page + 1,
        page.page_count.max(1),
        page.total_matches
    );
    out
}

pub fn matchup(
    defenders: &[&str],
    weaknesses: &[String],
    resistances: &[String],
    immunities: &[String],
    strong_against: &[String],
) -> String {
    let list = |names: &[String]| {
        if names.is_empty() {
            "none".to_string()
        } else {
            names.iter().map(|n| capitalize(n)).collect::<Vec<_>>().join(", ")
        }
    };
    let title: Vec<String> = defenders.iter().map(|d| capitalize(d)).collect();

    let mut out = String::new();
    let _ = writeln!(out, "Defending: {}\n", title.join("/"));
    let _ = writeln!(out, "{:<12} {}", "Weak to", list(weaknesses));
    let _ = writeln!(out, "{:<12} {}", "Resists", list(resistances));
    let _ = writeln!(out, "{:<12} {}", "Immune to", list(immunities));
    let _ = writeln!(out, "{:<12} {}", "Hits hard", list(strong_against));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedex_analytics::query::CatalogQuery;
    use typedex_analytics::{
        Creature, TypeRecord, build_effectiveness_matrix, compute_type_combinations,
        compute_type_distribution, compute_type_rankings,
    };

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("poison"), "Poison");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize_key("grass/poison"), "Grass/Poison");
    }

    #[test]
    fn test_distribution_table() {
        let creatures = vec![
            Creature::new(1, "bulbasaur", ["grass", "poison"]),
            Creature::new(4, "charmander", ["fire"]),
        ];
        let out = distribution(&compute_type_distribution(&creatures), Some(2));

        assert!(out.contains("Fire"));
        assert!(out.contains("50.0%"));
        assert!(!out.contains("Poison"));
    }

    #[test]
    fn test_empty_tables() {
        assert!(distribution(&[], None).contains("(no data)"));
        assert!(combinations(&[]).contains("(no multi-type creatures)"));
    }

    #[test]
    fn test_combinations_list() {
        let creatures = vec![
            Creature::new(1, "bulbasaur", ["grass", "poison"]),
            Creature::new(2, "ivysaur", ["grass", "poison"]),
            Creature::new(6, "charizard", ["fire", "flying"]),
        ];
        let out = combinations(&compute_type_combinations(&creatures));

        assert!(out.contains("#1   Grass/Poison"));
        assert!(out.contains("(67%)"));
    }

    #[test]
    fn test_matrix_grid() {
        let types = vec![
            TypeRecord::new(10, "fire").with_double_damage_to("grass"),
            TypeRecord::new(12, "grass").with_half_damage_to("fire"),
        ];
        let out = matrix(&build_effectiveness_matrix(&types));

        assert!(out.contains("ATK \\ DEF  Fir Gra"));
        assert!(out.contains("Fire        1×  2×"));
        assert!(out.contains("Grass       ½×  1×"));
        assert!(out.contains("2× Super Effective"));
    }

    #[test]
    fn test_rankings_sections() {
        let types = vec![
            TypeRecord::new(1, "normal").with_double_damage_from("fighting"),
            TypeRecord::new(2, "fighting").with_double_damage_to("normal"),
        ];
        let out = rankings(&compute_type_rankings(&types), 5);

        assert!(out.contains("#1 Fighting   Super effective vs 1 types (score +1)"));
        assert!(out.contains("#1 Normal     Weak to 1 types (defense -1)"));
    }

    #[test]
    fn test_catalog_page_rows() {
        let mut creature = Creature::new(1, "bulbasaur", ["grass", "poison"]);
        creature.height = 7;
        creature.weight = 69;
        creature.base_experience = 64;
        let creatures = vec![creature];
        let out = catalog_page(&CatalogQuery::new().apply(&creatures));

        assert!(out.contains("#001  Bulbasaur"));
        assert!(out.contains("Grass/Poison"));
        assert!(out.contains("0.7"));
        assert!(out.contains("6.9"));
        assert!(out.contains("Page 1 of 1 (1 matches)"));
    }

    #[test]
    fn test_matchup_lists() {
        let out = matchup(
            &["ghost"],
            &[],
            &["poison".to_string()],
            &["normal".to_string()],
            &["ghost".to_string(), "psychic".to_string()],
        );

        assert!(out.contains("Defending: Ghost"));
        assert!(out.contains("Weak to      none"));
        assert!(out.contains("Immune to    Normal"));
        assert!(out.contains("Hits hard    Ghost, Psychic"));
    }
}
