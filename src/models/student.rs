use serde::Serialize;

/// A registered student, as stored in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub id: String,              // ⇔ students.id (primary key)
    pub name: String,            // ⇔ students.name
    pub course: Option<String>,  // ⇔ students.course (NULL when not given)
    pub pass_id: Option<String>, // ⇔ students.pass_id (secondary lookup key)
}

impl StudentRecord {
    pub fn new(id: &str, name: &str, course: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            course: course.map(str::to_string),
            pass_id: None,
        }
    }

    pub fn with_pass_id(mut self, pass_id: Option<&str>) -> Self {
        self.pass_id = pass_id.map(str::to_string);
        self
    }

    pub fn course_str(&self) -> &str {
        self.course.as_deref().unwrap_or("")
    }
}
