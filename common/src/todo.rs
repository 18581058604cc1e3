use serde::{Deserialize, Serialize};

use crate::serializer::{Reader, ReaderError, Serializer, Writer};

// Zero-based position of a todo in its list
pub type TodoId = u64;

/// A single entry of a TodoList
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub content: String,
    pub is_completed: bool,
}

impl Todo {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_completed: false,
        }
    }
}

impl Serializer for Todo {
    fn write(&self, writer: &mut Writer) {
        writer.write_string(&self.content);
        writer.write_bool(self.is_completed);
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        let content = reader.read_string()?;
        let is_completed = reader.read_bool()?;
        Ok(Self {
            content,
            is_completed,
        })
    }

    fn size(&self) -> usize {
        self.content.size() + 1
    }
}
