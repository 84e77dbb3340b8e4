use std::fmt;

/// Entity kinds owned by the registry (gerenciamento) service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    Student,
    Teacher,
    ClassGroup,
}

impl RegistryKind {
    pub const ALL: [RegistryKind; 3] = [Self::Student, Self::Teacher, Self::ClassGroup];

    /// Path segment under the registry base URL (`/api/{segment}/{id}`).
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Student => "alunos",
            Self::Teacher => "professores",
            Self::ClassGroup => "turmas",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == segment)
    }

    /// Lower-case noun used in error messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::ClassGroup => "class group",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}
