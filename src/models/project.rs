use serde::{Deserialize, Serialize};

/// Project status value meaning the work is done.
/// The dashboard's "active" count excludes exactly this status.
const STATUS_COMPLETED: &str = "completed";

/// An engagement for a client. The list endpoint returns projects without
/// tasks; the detail endpoint embeds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub tenant: i64,
    pub client: i64,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status != STATUS_COMPLETED
    }
}

/// A work item inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project: i64,
    pub title: String,
    pub status: String,
    pub priority: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_detail_with_tasks() {
        let json = r#"{
            "id": 12,
            "tenant": 1,
            "client": 4,
            "name": "Website rebuild",
            "status": "in_progress",
            "start_date": "2026-01-05",
            "description": "Marketing site on the new stack",
            "tasks": [
                {"id": 40, "project": 12, "title": "Wireframes", "status": "done", "priority": 1},
                {"id": 41, "project": 12, "title": "Checkout flow", "status": "open", "priority": 3}
            ]
        }"#;

        let project: Project = serde_json::from_str(json).expect("failed to parse project");
        assert!(project.is_active());
        assert_eq!(project.tasks.len(), 2);
        assert_eq!(project.tasks[1].title, "Checkout flow");
        assert_eq!(project.tasks[1].priority, 3);
    }

    #[test]
    fn test_parse_project_list_without_tasks() {
        let json = r#"[{"id": 1, "tenant": 1, "client": 2, "name": "Logo", "status": "completed"}]"#;
        let projects: Vec<Project> = serde_json::from_str(json).expect("failed to parse projects");
        assert!(projects[0].tasks.is_empty());
        assert!(!projects[0].is_active());
    }
}
