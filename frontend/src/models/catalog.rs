/// One line of business shown in the services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Font Awesome class list
    pub icon: &'static str,
    pub image: &'static str,
    pub details: &'static [&'static str],
}

/// A past engagement shown in the portfolio gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    /// Id of the `ServiceCategory` this project belongs to
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub fn find_service<'a>(services: &'a [ServiceCategory], id: &str) -> Option<&'a ServiceCategory> {
    services.iter().find(|service| service.id == id)
}

/// Title of the service a project is tagged with.
///
/// Returns `None` when the project points at a category that does not exist,
/// in which case the card simply renders without a label.
pub fn category_title(services: &[ServiceCategory], project: &Project) -> Option<&'static str> {
    find_service(services, project.category).map(|service| service.title)
}

/// Projects whose category has no matching service.
pub fn dangling_projects<'a>(projects: &'a [Project], services: &[ServiceCategory]) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| find_service(services, project.category).is_none())
        .collect()
}
