//! Calc command handler

use super::{apply_moves, engine_from_config, print_score_table};
use dept_advisor::core::config::Config;
use dept_advisor::{error, info};

/// Print the score table for `gpa` after applying `moves`
pub fn run(gpa: &str, moves: &[String], config: &Config) -> bool {
    let engine = engine_from_config(config);

    let order = match apply_moves(&engine, moves) {
        Ok(order) => order,
        Err(e) => {
            error!("calc: {e}");
            eprintln!("✗ {e}");
            return false;
        }
    };

    if let Some(rows) = engine.score_table(gpa, &order) {
        info!("Scored GPA {} across {} departments", gpa.trim(), rows.len());
        print_score_table(&rows);
        true
    } else {
        eprintln!(
            "✗ Invalid GPA '{}': enter a value between 0.00 and 4.00",
            gpa.trim()
        );
        false
    }
}
