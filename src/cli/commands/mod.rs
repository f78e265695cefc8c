//! CLI command handlers for `deptadvisor`.
//!
//! Each command is implemented in its own submodule. Handlers print their
//! own `✓`/`✗` messages and return `false` on failure so `main` can set the
//! exit code.

pub mod browse;
pub mod calc;
pub mod config;
pub mod quiz;
pub mod report;
pub mod session;
pub mod submit;

use dept_advisor::core::api::{AdvisorApi, AdvisorClient, AdvisorData, Notice, OfflineBackend};
use dept_advisor::core::config::Config;
use dept_advisor::core::scoring::{
    EngineOptions, PreferenceOrder, PreferenceScoringEngine, ReorderOutcome, ScoreRow,
    FORMULA_LEGEND, STRATEGIC_TIP,
};
use dept_advisor::{debug, info, warn};

/// Backend selected for this run
pub struct Backend {
    api: Box<dyn AdvisorApi>,
    fallback: bool,
}

impl Backend {
    /// HTTP backend from config, or an offline backend that always uses samples
    pub fn new(config: &Config, offline: bool) -> Self {
        if offline {
            info!("Offline mode: backend requests are disabled");
            Self {
                api: Box::new(OfflineBackend),
                fallback: true,
            }
        } else {
            let client = AdvisorClient::from_config(&config.api);
            debug!("Using backend at {}", client.base_url());
            Self {
                api: Box::new(client),
                fallback: config.api.fallback_to_samples,
            }
        }
    }

    /// Read access with sample fallback
    pub fn data(&self) -> AdvisorData<'_> {
        AdvisorData::new(self.api.as_ref(), self.fallback)
    }

    /// Raw backend for submissions
    pub fn api(&self) -> &dyn AdvisorApi {
        self.api.as_ref()
    }
}

/// Engine honouring `[calculator] reorderable`
pub fn engine_from_config(config: &Config) -> PreferenceScoringEngine {
    PreferenceScoringEngine::with_options(EngineOptions {
        reorderable: config.calculator.reorderable,
    })
}

/// Split `DEPT:TARGET`
pub fn parse_move(arg: &str) -> Result<(&str, &str), String> {
    match arg.split_once(':') {
        Some((moved, target)) if !moved.trim().is_empty() && !target.trim().is_empty() => {
            Ok((moved.trim(), target.trim()))
        }
        _ => Err(format!(
            "Invalid move '{arg}': expected DEPT:TARGET (e.g. chemical:civil)"
        )),
    }
}

/// Apply `--move` arguments in order, starting from the catalog order
pub fn apply_moves(
    engine: &PreferenceScoringEngine,
    moves: &[String],
) -> Result<PreferenceOrder, String> {
    let mut order = engine.reset_order();
    for arg in moves {
        let (moved, target) = parse_move(arg)?;
        let moved_id = engine
            .resolve_id(moved)
            .ok_or_else(|| format!("Unknown department '{moved}'"))?;
        let target_id = engine
            .resolve_id(target)
            .ok_or_else(|| format!("Unknown department '{target}'"))?;

        let outcome = engine.reorder(&order, moved_id, target_id);
        if let ReorderOutcome::Disabled(_) = outcome {
            warn!("Reordering is disabled; ignoring --move {arg}");
        }
        order = outcome.into_order();
    }
    Ok(order)
}

/// Print the score table with its legend and tip
pub fn print_score_table(rows: &[ScoreRow]) {
    println!("{FORMULA_LEGEND}\n");
    println!(
        "  {:<12} {:<20} {:>7}   {}",
        "Rank", "Department", "Score", "Breakdown"
    );
    for row in rows {
        let marker = if row.rank == 1 { '*' } else { ' ' };
        println!(
            "{marker} {:<12} {:<20} {:>7}   {}",
            row.choice_label(),
            row.department_label,
            row.formatted_total(),
            row.breakdown()
        );
    }
    println!("\nTip: {STRATEGIC_TIP}");
}

/// Print a sample-data notice to stderr
pub fn print_notice(notice: Option<&Notice>) {
    if let Some(notice) = notice {
        eprintln!("⚠ {notice}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("chemical:civil"), Ok(("chemical", "civil")));
        assert_eq!(parse_move(" SiTE (Software) : civil"), Ok(("SiTE (Software)", "civil")));
        assert!(parse_move("chemical").is_err());
        assert!(parse_move(":civil").is_err());
    }

    #[test]
    fn test_apply_moves_in_order() {
        let engine = PreferenceScoringEngine::default();
        let moves = vec!["chemical:civil".to_string()];
        let order = apply_moves(&engine, &moves).unwrap();
        assert_eq!(
            order.ids(),
            vec!["chemical", "civil", "electrical", "biomedical", "software", "mechanical"]
        );
    }

    #[test]
    fn test_apply_moves_unknown_department() {
        let engine = PreferenceScoringEngine::default();
        let moves = vec!["nursing:civil".to_string()];
        assert_eq!(
            apply_moves(&engine, &moves),
            Err("Unknown department 'nursing'".to_string())
        );
    }

    #[test]
    fn test_apply_moves_fixed_engine() {
        let engine = PreferenceScoringEngine::with_options(EngineOptions { reorderable: false });
        let moves = vec!["chemical:civil".to_string()];
        let order = apply_moves(&engine, &moves).unwrap();
        assert_eq!(order, engine.reset_order());
    }
}
