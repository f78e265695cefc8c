//! Sample payloads shown when the advisor backend cannot be reached

use crate::core::models::{CutoffRecord, Recommendation, Testimonial};

fn recommendation(
    id: &str,
    name: &str,
    description: &str,
    match_percentage: f64,
    cutoff: f64,
) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        match_percentage,
        cutoff,
    }
}

fn testimonial(
    id: &str,
    department: &str,
    student_name: &str,
    year: u16,
    quote: &str,
) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        department: department.to_string(),
        quote: quote.to_string(),
        student_name: student_name.to_string(),
        year,
    }
}

/// Sample department recommendations, best match first
#[must_use]
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        recommendation(
            "1",
            "Computer Science",
            "Focus on algorithms, programming, and software development. Perfect for students interested in AI, web development, and system design.",
            95.0,
            3.6,
        ),
        recommendation(
            "2",
            "Data Science",
            "Combine mathematics, statistics, and programming to extract insights from data. Ideal for analytical minds interested in AI and business intelligence.",
            88.0,
            3.4,
        ),
        recommendation(
            "3",
            "Cybersecurity",
            "Protect systems and networks from digital threats. Great for students interested in ethical hacking, forensics, and security architecture.",
            82.0,
            3.2,
        ),
        recommendation(
            "4",
            "Information Technology",
            "Broad field covering system administration, network management, and enterprise solutions. Perfect for hands-on technical roles.",
            75.0,
            3.0,
        ),
        recommendation(
            "5",
            "Software Engineering",
            "Focus on large-scale software development, project management, and software architecture. Ideal for students who enjoy collaborative development.",
            70.0,
            3.3,
        ),
    ]
}

/// Sample cutoff history, 2020-2024, grouped by department
#[must_use]
pub fn cutoffs() -> Vec<CutoffRecord> {
    const SERIES: [(&str, [f64; 5]); 4] = [
        ("Computer Science", [3.8, 3.7, 3.6, 3.5, 3.6]),
        ("Data Science", [3.6, 3.5, 3.4, 3.3, 3.4]),
        ("Cybersecurity", [3.4, 3.3, 3.2, 3.1, 3.2]),
        ("Information Technology", [3.2, 3.1, 3.0, 2.9, 3.0]),
    ];

    SERIES
        .iter()
        .flat_map(|(department, values)| {
            (2020_u16..)
                .zip(values.iter())
                .map(move |(year, cutoff)| CutoffRecord::new(year, department, *cutoff))
        })
        .collect()
}

/// Sample alumni testimonials
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "1",
            "Computer Science",
            "Sarah Chen",
            2022,
            "The CS program gave me a solid foundation in algorithms and software engineering. I'm now working as a Senior Software Engineer at Google, and the problem-solving skills I learned here are invaluable every day.",
        ),
        testimonial(
            "2",
            "Data Science",
            "Marcus Rodriguez",
            2023,
            "What I loved about Data Science was the perfect blend of mathematics, programming, and real-world applications. I landed a role as a Data Scientist at Microsoft right after graduation. The hands-on projects really prepared me for industry challenges.",
        ),
        testimonial(
            "3",
            "Cybersecurity",
            "Aisha Patel",
            2021,
            "The Cybersecurity program opened my eyes to the critical importance of digital protection. I'm now a Security Analyst at a major bank, and the ethical hacking courses were particularly valuable for my current role.",
        ),
        testimonial(
            "4",
            "Computer Science",
            "David Kim",
            2020,
            "The collaborative environment and industry connections in CS were amazing. I started my own tech startup during my final year, and the entrepreneurship support from faculty was incredible. We're now a team of 12!",
        ),
        testimonial(
            "5",
            "Information Technology",
            "Jennifer Walsh",
            2022,
            "IT gave me the practical skills I needed to succeed. The internship program connected me with a local tech company where I'm now the IT Manager. The broad curriculum really prepared me for leadership roles.",
        ),
        testimonial(
            "6",
            "Data Science",
            "Ahmed Hassan",
            2023,
            "The statistics foundation in Data Science was incredible. I transitioned from a biology background, and now I'm doing bioinformatics research at a pharmaceutical company. The interdisciplinary approach was perfect for me.",
        ),
        testimonial(
            "7",
            "Cybersecurity",
            "Emma Thompson",
            2021,
            "The hands-on labs and real-world simulations in Cybersecurity were outstanding. I'm now working as a Penetration Tester, and I feel confident tackling any security challenge. The industry certifications embedded in the curriculum were a huge plus.",
        ),
        testimonial(
            "8",
            "Software Engineering",
            "Carlos Mendoza",
            2022,
            "Software Engineering taught me how to work on large-scale projects with teams. The agile methodology courses and project management skills helped me become a Technical Lead at Amazon. The program really emphasizes collaboration.",
        ),
    ]
}
