//! Employee records built by composing a person

use crate::console::Console;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// A person with an employee number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub person: Person,
    pub employee_id: u64,
}

impl Employee {
    pub fn new(person: Person, employee_id: u64) -> Self {
        Self {
            person,
            employee_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn age(&self) -> u32 {
        self.person.age
    }

    /// Lines describing the employee
    pub fn info_lines(&self) -> [String; 3] {
        [
            format!("Employee Name: {}", self.name()),
            format!("Employee Age: {}", self.age()),
            format!("Employee ID: {}", self.employee_id),
        ]
    }

    /// Print name, age and id, one per line
    pub fn print_info(&self, console: &Console) {
        for line in self.info_lines() {
            console.line(line);
        }
    }
}
