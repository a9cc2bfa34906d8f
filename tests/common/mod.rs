//! Sample payload shared by the integration tests.

#![allow(dead_code)]

use u_priority::heap::Ranked;

pub const MAX_UNITS: f64 = 150.0;
pub const MAX_GPA: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub red_id: String,
    pub email: String,
    pub gpa: f64,
    pub units: i64,
}

impl Student {
    pub fn new(name: &str, red_id: &str, email: &str, gpa: f64, units: i64) -> Self {
        Self {
            name: name.to_string(),
            red_id: red_id.to_string(),
            email: email.to_string(),
            gpa,
            units,
        }
    }
}

impl Ranked for Student {
    /// Equal weight on normalized units and normalized GPA.
    fn priority(&self) -> f64 {
        0.5 * (self.units as f64 / MAX_UNITS) + 0.5 * (self.gpa / MAX_GPA)
    }

    fn units(&self) -> i64 {
        self.units
    }

    fn gpa(&self) -> f64 {
        self.gpa
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.red_id
    }
}

/// The demo roster: regular students, boundary values, and a three-way tie.
pub fn roster() -> Vec<Student> {
    vec![
        Student::new("Ivy Huynh", "R1234567", "ivy.huynh@university.edu", 3.7, 128),
        Student::new("Alex Kim", "R2000001", "alex.kim@university.edu", 3.2, 96),
        Student::new("Jordan Lee", "R2000002", "jordan.lee@university.edu", 2.9, 72),
        Student::new("Priya Patel", "R2000003", "priya.patel@university.edu", 3.95, 110),
        Student::new("Sam Rivera", "R2000004", "sam.rivera@university.edu", 3.4, 140),
        Student::new("Casey Nguyen", "R2000005", "casey.nguyen@university.edu", 3.8, 100),
        Student::new("Taylor Brooks", "R2000006", "taylor.brooks@university.edu", 3.1, 145),
        Student::new("ZeroZero", "R100", "zero.zero@university.edu", 0.0, 0),
        Student::new("MaxGPA", "R101", "max.gpa@university.edu", 4.0, 0),
        Student::new("MaxUnits", "R102", "max.units@university.edu", 0.0, 150),
        Student::new("MaxBoth", "R103", "max.both@university.edu", 4.0, 150),
        Student::new("Adam Young", "R010", "adam.young@university.edu", 3.0, 100),
        Student::new("Bella Young", "R009", "bella.young@university.edu", 3.0, 100),
        Student::new("Adam Xiong", "R008", "adam.xiong@university.edu", 3.0, 100),
    ]
}
