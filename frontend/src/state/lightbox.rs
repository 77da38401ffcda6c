use crate::models::catalog::Project;

/// The project currently open in the lightbox, if any.
///
/// `Closed -> select -> Open -> clear -> Closed`. Selecting while open swaps
/// the project.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Lightbox<'a> {
    selected: Option<&'a Project>,
}

impl<'a> Lightbox<'a> {
    pub fn closed() -> Self {
        Self { selected: None }
    }

    pub fn select(&mut self, project: &'a Project) {
        self.selected = Some(project);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'a Project> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
