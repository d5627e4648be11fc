use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub id: NoteId,
    pub title: String,
    pub date: NaiveDate,
}

const PLACEHOLDERS: &[(&str, i32, u32, u32)] = &[
    ("Introduction to React", 2023, 5, 15),
    ("Advanced JavaScript Concepts", 2023, 5, 20),
    ("Machine Learning Basics", 2023, 5, 25),
];

/// Insertion-ordered list of generated notes with its own id counter.
#[derive(Debug, Clone)]
pub struct NoteBook {
    notes: Vec<NoteRecord>,
    next_id: u64,
}

impl Default for NoteBook {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteBook {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_placeholders() -> Self {
        let mut book = Self::new();
        for (title, year, month, day) in PLACEHOLDERS {
            if let Some(date) = NaiveDate::from_ymd_opt(*year, *month, *day) {
                book.append(*title, date);
            }
        }
        book
    }

    pub fn append(&mut self, title: impl Into<String>, date: NaiveDate) -> &NoteRecord {
        let id = NoteId(self.next_id);
        self.next_id += 1;

        self.notes.push(NoteRecord {
            id,
            title: title.into(),
            date,
        });
        &self.notes[self.notes.len() - 1]
    }

    pub fn get(&self, id: NoteId) -> Option<&NoteRecord> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteRecord> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn last(&self) -> Option<&NoteRecord> {
        self.notes.last()
    }
}
