use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Label substituted wherever a class name is blank.
pub const UNNAMED_CLASS_LABEL: &str = "Sin mencionar";

/// Returns the class name shown to readers.
///
/// Blank class names (empty or whitespace-only after trimming) are replaced
/// by [`UNNAMED_CLASS_LABEL`]; anything else passes through untouched.
pub fn display_class(class: &str) -> &str {
    if class.trim().is_empty() {
        UNNAMED_CLASS_LABEL
    } else {
        class
    }
}

/// A single student row taken from the workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub id: String,
}

/// Identifies one (teacher, class) group. Both parts are stored trimmed and
/// compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub teacher: String,
    pub class: String,
}

/// One (teacher, class) group and its students, in source row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub key: GroupKey,
    pub students: Vec<Student>,
}

/// Raw cell content before it is normalised into an id string.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Plain text cell.
    Text(String),
    /// Numeric cell.
    Number(f64),
    /// Any other cell kind, carried as its display form.
    Other(String),
    /// Absent cell.
    Empty,
}

impl CellValue {
    /// Normalises the cell into the id string stored on a [`Student`].
    ///
    /// Whole-number values drop their decimal point, fractional values keep
    /// their native representation, text is trimmed, and absent cells become
    /// the empty string.
    pub fn into_id(self) -> String {
        match self {
            CellValue::Text(value) => value.trim().to_string(),
            CellValue::Number(value) if value.fract() == 0.0 => (value as i64).to_string(),
            CellValue::Number(value) => value.to_string(),
            CellValue::Other(value) => value.trim().to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

/// Students grouped by (teacher, class).
///
/// Groups appear in the order their key was first seen in the source rows,
/// and each group keeps its students in row order. The container is built
/// once by the loader and treated as read-only afterwards.
#[derive(Debug, Default)]
pub struct Roster {
    groups: Vec<Group>,
    index: HashMap<GroupKey, usize>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a student to the (teacher, class) group, creating the group on
    /// first sight. Duplicate students under the same key are all kept.
    pub fn push(&mut self, teacher: String, class: String, student: Student) {
        let key = GroupKey { teacher, class };
        match self.index.get(&key) {
            Some(&position) => self.groups[position].students.push(student),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push(Group {
                    key,
                    students: vec![student],
                });
            }
        }
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
