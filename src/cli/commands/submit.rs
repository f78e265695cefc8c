//! GPA submission

use super::Backend;
use dept_advisor::core::scoring::parse_gpa;
use dept_advisor::{error, info};

/// Send `gpa_text` to the backend; submissions never fall back to samples
pub fn gpa(gpa_text: &str, backend: &Backend) -> bool {
    let Some(gpa) = parse_gpa(gpa_text) else {
        eprintln!(
            "✗ Invalid GPA '{}': enter a value between 0.00 and 4.00",
            gpa_text.trim()
        );
        return false;
    };

    match backend.api().submit_gpa(gpa) {
        Ok(()) => {
            info!("GPA {gpa:.2} submitted");
            println!("✓ GPA submitted! Your GPA of {gpa:.2} has been recorded.");
            true
        }
        Err(e) => {
            error!("GPA submission failed: {e}");
            eprintln!("✗ Failed to submit GPA. Please try again.");
            false
        }
    }
}
