//! English data pools.

use super::{Locale, LocalePools};

pub(crate) static POOLS: LocalePools = LocalePools {
    locale: Locale::En,
    names: &[
        "John Doe",
        "Jane Smith",
        "Michael Johnson",
        "Sarah Williams",
        "David Brown",
        "Emily Davis",
        "James Wilson",
        "Olivia Taylor",
        "Robert Anderson",
        "Sophia Thomas",
        "William Moore",
        "Ava Martin",
        "Daniel Jackson",
        "Mia Thompson",
        "Christopher White",
        "Chloe O'Connor",
        "Matthew Harris",
        "Grace Clark-Lewis",
    ],
    domains: &[
        "example.com",
        "mail.com",
        "inbox.net",
        "postbox.org",
        "webmail.io",
        "fastmail.us",
    ],
    phone_numbers: &[
        "123-456-7890",
        "234-567-8901",
        "345-678-9012",
        "456-789-0123",
        "(212) 555-0147",
        "(310) 555-0192",
        "(312) 555-0168",
        "(713) 555-0125",
        "+1 415 555 0133",
        "+1 206 555 0171",
    ],
    cities: &[
        "New York",
        "Los Angeles",
        "Chicago",
        "Houston",
        "Phoenix",
        "Philadelphia",
        "San Antonio",
        "San Diego",
        "Dallas",
        "Seattle",
        "Denver",
        "Boston",
    ],
    addresses: &[
        "123 Main St",
        "456 Elm St",
        "789 Oak St",
        "321 Pine St",
        "654 Maple Ave",
        "987 Cedar Ln",
        "246 Birch Rd",
        "135 Walnut Dr",
        "802 Spruce Ct",
        "17 Willow Way",
    ],
    job_titles: &[
        "Software Engineer",
        "Product Manager",
        "Data Scientist",
        "UX Designer",
        "Marketing Specialist",
        "Sales Representative",
        "Accountant",
        "Nurse",
        "Teacher",
        "Project Coordinator",
        "Operations Analyst",
        "Customer Success Manager",
    ],
    company_names: &[
        "Acme Corporation",
        "Globex Inc.",
        "Initech",
        "Umbrella Holdings",
        "Stark Industries",
        "Wayne Enterprises",
        "Hooli",
        "Vandelay Industries",
        "Soylent Corp",
        "Cyberdyne Systems",
    ],
    hobbies: &[
        "Reading",
        "Hiking",
        "Cooking",
        "Photography",
        "Gardening",
        "Cycling",
        "Chess",
        "Painting",
        "Running",
        "Woodworking",
        "Birdwatching",
        "Board games",
    ],
    education_levels: &[
        "High School Diploma",
        "Associate Degree",
        "Bachelor's Degree",
        "Master's Degree",
        "Doctorate",
        "Professional Certificate",
    ],
    skills: &[
        "JavaScript",
        "Python",
        "Rust",
        "SQL",
        "Project Management",
        "Public Speaking",
        "Data Analysis",
        "Negotiation",
        "Graphic Design",
        "Copywriting",
        "Cloud Infrastructure",
        "Team Leadership",
        "Customer Service",
        "Budgeting",
    ],
};
