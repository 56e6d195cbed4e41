//! Core types of Notefile.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// ID of notes.
///
/// IDs are chosen by the caller when a note is added.
/// Nothing guarantees that two notes in a store have different IDs.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NoteID {
    id: i64,
}

impl NoteID {
    pub fn new(id: i64) -> Self {
        NoteID { id }
    }

    /// Parse an ID taken from a URL path segment.
    ///
    /// Leading whitespace and a sign are accepted, then the longest run of
    /// digits is taken and anything after it is ignored, so `"12abc"` is
    /// note 12. A `0x` or `0X` prefix switches to hexadecimal digits.
    /// Returns `None` when there are no digits or the value does not fit;
    /// `None` matches no note.
    pub fn parse_lenient(s: &str) -> Option<NoteID> {
        let s = s.trim_start();
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'-') => ("-", &s[1..]),
            Some(b'+') => ("", &s[1..]),
            _ => ("", s),
        };
        let (radix, rest) = match rest.get(..2) {
            Some("0x") | Some("0X") => (16, &rest[2..]),
            _ => (10, rest),
        };
        let digits_len = rest
            .bytes()
            .take_while(|b| (*b as char).is_digit(radix))
            .count();
        if digits_len == 0 {
            return None;
        }
        let digits = format!("{}{}", sign, &rest[..digits_len]);
        let value = i64::from_str_radix(&digits, radix).ok()?;
        Some(NoteID::new(value))
    }
}

impl From<i64> for NoteID {
    fn from(id: i64) -> NoteID {
        NoteID::new(id)
    }
}

impl From<NoteID> for i64 {
    fn from(id: NoteID) -> i64 {
        id.id
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A note as it is stored.
///
/// `date` is kept as the caller sent it and never interpreted.
/// Stored records may lack any field but `id`; a missing field reads as empty.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Note {
    pub id: NoteID,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
}

impl Note {
    pub fn new(id: NoteID, title: String, content: String, date: String) -> Self {
        Note {
            id,
            title,
            content,
            date,
        }
    }
}

/// Replacement fields of an edit.
///
/// An edit replaces the whole note; only the ID survives.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct NoteEdit {
    pub title: String,
    pub content: String,
    pub date: String,
}

impl NoteEdit {
    pub fn into_note(self, id: NoteID) -> Note {
        Note::new(id, self.title, self.content, self.date)
    }
}
