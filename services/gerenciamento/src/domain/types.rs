/// Student owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Teacher owned by the registry. `subject` and `age` are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub subject: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub subject: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub subject: Option<String>,
    /// `Some(None)` clears the stored notes.
    pub notes: Option<Option<String>>,
}

/// Class group ("turma").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroup {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassGroup {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassGroupPatch {
    pub name: Option<String>,
    /// `Some(None)` clears the stored description.
    pub description: Option<Option<String>>,
}

impl StudentPatch {
    pub fn apply(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(email) = self.email {
            student.email = email;
        }
    }
}

impl TeacherPatch {
    pub fn apply(self, teacher: &mut Teacher) {
        if let Some(name) = self.name {
            teacher.name = name;
        }
        if let Some(age) = self.age {
            teacher.age = age;
        }
        if let Some(email) = self.email {
            teacher.email = email;
        }
        if let Some(subject) = self.subject {
            teacher.subject = subject;
        }
        if let Some(notes) = self.notes {
            teacher.notes = notes;
        }
    }
}

impl ClassGroupPatch {
    pub fn apply(self, class_group: &mut ClassGroup) {
        if let Some(name) = self.name {
            class_group.name = name;
        }
        if let Some(description) = self.description {
            class_group.description = description;
        }
    }
}
