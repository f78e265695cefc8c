//! Alumni testimonial filtering

use crate::core::models::Testimonial;

/// Filter option that matches every department
pub const ALL_DEPARTMENTS: &str = "All";

/// `"All"` followed by each department in order of first appearance
#[must_use]
pub fn filter_options(testimonials: &[Testimonial]) -> Vec<String> {
    let mut options = vec![ALL_DEPARTMENTS.to_string()];
    for testimonial in testimonials {
        if !options.contains(&testimonial.department) {
            options.push(testimonial.department.clone());
        }
    }
    options
}

/// Testimonials for `selection`; `"All"` (any case) keeps everything
#[must_use]
pub fn filter_by_department<'a>(
    testimonials: &'a [Testimonial],
    selection: &str,
) -> Vec<&'a Testimonial> {
    if selection.eq_ignore_ascii_case(ALL_DEPARTMENTS) {
        return testimonials.iter().collect();
    }
    testimonials
        .iter()
        .filter(|t| t.department.eq_ignore_ascii_case(selection))
        .collect()
}
