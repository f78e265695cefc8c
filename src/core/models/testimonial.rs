//! Alumni testimonial model

use serde::{Deserialize, Serialize};

/// A quote from a graduate of one of the departments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Identifier assigned by the backend
    pub id: String,

    /// Department the graduate studied in
    pub department: String,

    /// The testimonial text
    pub quote: String,

    /// Graduate's name
    pub student_name: String,

    /// Graduation year
    pub year: u16,
}
