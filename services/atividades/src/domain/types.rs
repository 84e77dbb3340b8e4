/// Activity accepted by this process. Lives until restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: i32,
    pub class_group_id: i32,
}

/// Activity whose references have been checked, waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: i32,
    pub class_group_id: i32,
}

impl NewActivity {
    pub fn with_id(self, id: u64) -> Activity {
        Activity {
            id,
            title: self.title,
            description: self.description,
            teacher_id: self.teacher_id,
            class_group_id: self.class_group_id,
        }
    }
}
