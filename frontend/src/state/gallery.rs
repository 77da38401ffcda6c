use crate::models::catalog::{find_service, Project, ServiceCategory};

/// Selector value that shows every project.
pub const ALL: &str = "all";

/// Categories offered by the filter bar, in display order.
pub const FILTER_BAR: [&str; 6] = [ALL, "machinery", "electrical", "civil", "trucks", "hvac"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => project.category == category.as_str(),
        }
    }
}

/// Portfolio gallery: a fixed project list plus the active category filter.
///
/// Any category string is accepted. A category nothing is tagged with just
/// yields an empty gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery<'a> {
    projects: &'a [Project],
    selected: CategoryFilter,
}

impl<'a> Gallery<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            selected: CategoryFilter::All,
        }
    }

    pub fn set_filter(&mut self, category: &str) {
        self.selected = CategoryFilter::parse(category);
    }

    /// Copy of the gallery with another filter applied.
    pub fn with_filter(&self, category: &str) -> Self {
        let mut next = self.clone();
        next.set_filter(category);
        next
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.as_str() == category
    }

    pub fn projects(&self) -> &'a [Project] {
        self.projects
    }

    /// Projects matching the current filter, in catalog order.
    pub fn visible_projects(&self) -> Vec<&'a Project> {
        self.projects
            .iter()
            .filter(|project| self.selected.matches(project))
            .collect()
    }
}

/// Label of a filter bar button: "Tout" for everything, otherwise the first
/// word of the service title, falling back to the raw id.
pub fn filter_label<'a>(services: &[ServiceCategory], category: &'a str) -> &'a str {
    if category == ALL {
        return "Tout";
    }
    find_service(services, category)
        .and_then(|service| service.title.split(' ').next())
        .filter(|word| !word.is_empty())
        .unwrap_or(category)
}
