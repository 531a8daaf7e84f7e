//! The static command catalog.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::PaletteError;

/// Identifier of a palette command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandId {
    Heading1,
    Heading2,
    Heading3,
    BulletList,
    NumberedList,
    Checklist,
    Table,
    Divider,
    Quote,
    Code,
    Paragraph,
}

impl CommandId {
    /// All identifiers, in catalog order
    pub const ALL: [CommandId; 11] = [
        CommandId::Heading1,
        CommandId::Heading2,
        CommandId::Heading3,
        CommandId::BulletList,
        CommandId::NumberedList,
        CommandId::Checklist,
        CommandId::Table,
        CommandId::Divider,
        CommandId::Quote,
        CommandId::Code,
        CommandId::Paragraph,
    ];

    /// Returns the wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Heading1 => "heading1",
            CommandId::Heading2 => "heading2",
            CommandId::Heading3 => "heading3",
            CommandId::BulletList => "bulletList",
            CommandId::NumberedList => "numberedList",
            CommandId::Checklist => "checklist",
            CommandId::Table => "table",
            CommandId::Divider => "divider",
            CommandId::Quote => "quote",
            CommandId::Code => "code",
            CommandId::Paragraph => "paragraph",
        }
    }

    /// The change the host applies to the block at the cursor
    pub fn block_change(&self) -> BlockChange {
        match self {
            CommandId::Heading1 => BlockChange::Heading(1),
            CommandId::Heading2 => BlockChange::Heading(2),
            CommandId::Heading3 => BlockChange::Heading(3),
            CommandId::BulletList => BlockChange::BulletItem,
            CommandId::NumberedList => BlockChange::NumberedItem,
            CommandId::Checklist => BlockChange::CheckItem,
            CommandId::Quote => BlockChange::Quote,
            CommandId::Code => BlockChange::CodeBlock,
            // Tables and dividers belong to the editing engine
            CommandId::Table | CommandId::Divider | CommandId::Paragraph => BlockChange::Paragraph,
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PaletteError::UnknownCommand(s.to_string()))
    }
}

/// Block update requested by a committed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockChange {
    Heading(u8),
    BulletItem,
    NumberedItem,
    CheckItem,
    Quote,
    CodeBlock,
    Paragraph,
}

impl BlockChange {
    /// Block type name in the editor's document format
    pub fn block_type(&self) -> &'static str {
        match self {
            BlockChange::Heading(_) => "heading",
            BlockChange::BulletItem => "bulletListItem",
            BlockChange::NumberedItem => "numberedListItem",
            BlockChange::CheckItem => "checkListItem",
            BlockChange::Quote => "quote",
            BlockChange::CodeBlock => "codeBlock",
            BlockChange::Paragraph => "paragraph",
        }
    }
}

/// One selectable palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandItem {
    /// Command identifier
    pub id: CommandId,
    /// Human-readable name
    pub label: &'static str,
    /// What the command inserts
    pub description: &'static str,
}

impl CommandItem {
    /// Checks if this item matches the given query.
    ///
    /// The query is expected in lowercase; label and description are compared
    /// case-insensitively.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.label.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

/// The full command catalog, in display order
pub static CATALOG: [CommandItem; 11] = [
    CommandItem {
        id: CommandId::Heading1,
        label: "Heading 1",
        description: "Large section heading",
    },
    CommandItem {
        id: CommandId::Heading2,
        label: "Heading 2",
        description: "Medium section heading",
    },
    CommandItem {
        id: CommandId::Heading3,
        label: "Heading 3",
        description: "Small section heading",
    },
    CommandItem {
        id: CommandId::BulletList,
        label: "Bullet List",
        description: "Create a bulleted list",
    },
    CommandItem {
        id: CommandId::NumberedList,
        label: "Numbered List",
        description: "Create a numbered list",
    },
    CommandItem {
        id: CommandId::Checklist,
        label: "Checklist",
        description: "Create a checklist",
    },
    CommandItem {
        id: CommandId::Table,
        label: "Table",
        description: "Add a table",
    },
    CommandItem {
        id: CommandId::Divider,
        label: "Divider",
        description: "Add a divider line",
    },
    CommandItem {
        id: CommandId::Quote,
        label: "Quote",
        description: "Add a quote or blockquote",
    },
    CommandItem {
        id: CommandId::Code,
        label: "Code Block",
        description: "Insert code with syntax highlighting",
    },
    CommandItem {
        id: CommandId::Paragraph,
        label: "Text",
        description: "Just start typing",
    },
];

/// Returns the static catalog
pub fn catalog() -> &'static [CommandItem] {
    &CATALOG
}

/// Catalog items matching `query`, in catalog order. An empty query matches everything.
pub fn filter(items: &'static [CommandItem], query: &str) -> Vec<&'static CommandItem> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let query_lower = query.to_lowercase();
    items.iter().filter(|item| item.matches(&query_lower)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_ids() {
        let ids: Vec<CommandId> = catalog().iter().map(|item| item.id).collect();
        assert_eq!(ids, CommandId::ALL.to_vec());
    }

    #[test]
    fn test_command_id_round_trip_str() {
        for id in CommandId::ALL {
            assert_eq!(id.as_str().parse::<CommandId>().unwrap(), id);
        }
        assert!(matches!(
            "heading4".parse::<CommandId>(),
            Err(PaletteError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_command_id_serializes_as_wire_id() {
        let json = serde_json::to_string(&CommandId::NumberedList).unwrap();
        assert_eq!(json, "\"numberedList\"");
    }

    #[test]
    fn test_filter_head() {
        let ids: Vec<CommandId> = filter(catalog(), "head").iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            vec![CommandId::Heading1, CommandId::Heading2, CommandId::Heading3]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_and_reads_description() {
        let ids: Vec<CommandId> = filter(catalog(), "SYNTAX").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![CommandId::Code]);
        assert_eq!(filter(catalog(), "list").len(), 3);
    }

    #[test]
    fn test_block_change_mapping() {
        assert_eq!(CommandId::Heading2.block_change(), BlockChange::Heading(2));
        assert_eq!(CommandId::Checklist.block_change().block_type(), "checkListItem");
        assert_eq!(CommandId::Divider.block_change(), BlockChange::Paragraph);
        assert_eq!(CommandId::Table.block_change(), BlockChange::Paragraph);
    }
}
