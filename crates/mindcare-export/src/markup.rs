//! The line-oriented markup the report template renders to.
//!
//! - `# Title` → centered title
//! - `> text` → centered subtitle
//! - `## Heading` / `### Subheading`
//! - `- item` → bullet
//! - `| a | b |` → bordered table row (the first row of a run is the header)
//! - `[chart]` → the indicator bar chart
//! - `_text_` → italic caption
//! - blank line → small vertical gap
//! - everything else → body paragraph

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Subtitle(String),
    Heading(String),
    Subheading(String),
    Paragraph(String),
    Bullet(String),
    TableRow { cells: Vec<String>, header: bool },
    Chart,
    Caption(String),
    Gap,
}

pub fn parse(markup: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut in_table = false;

    for line in markup.lines() {
        let trimmed = line.trim();

        if let Some(row) = trimmed.strip_prefix('|').and_then(|r| r.strip_suffix('|')) {
            blocks.push(Block::TableRow {
                cells: row.split('|').map(|c| c.trim().to_string()).collect(),
                header: !in_table,
            });
            in_table = true;
            continue;
        }
        in_table = false;

        let block = if trimmed.is_empty() {
            Block::Gap
        } else if trimmed == "[chart]" {
            Block::Chart
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            Block::Subheading(text.to_string())
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            Block::Heading(text.to_string())
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            Block::Title(text.to_string())
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            Block::Subtitle(text.to_string())
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            Block::Bullet(text.to_string())
        } else if let Some(text) = trimmed
            .strip_prefix('_')
            .and_then(|t| t.strip_suffix('_'))
            .filter(|t| !t.is_empty())
        {
            Block::Caption(text.to_string())
        } else {
            Block::Paragraph(trimmed.to_string())
        };
        blocks.push(block);
    }

    blocks
}
