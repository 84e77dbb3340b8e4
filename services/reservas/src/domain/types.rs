/// A student's seat in a class group, kept until the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: u64,
    pub student_id: i32,
    pub class_group_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewReservation {
    pub student_id: i32,
    pub class_group_id: i32,
}

impl NewReservation {
    pub fn with_id(self, id: u64) -> Reservation {
        Reservation {
            id,
            student_id: self.student_id,
            class_group_id: self.class_group_id,
        }
    }
}
