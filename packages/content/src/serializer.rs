use crate::ast::*;
use std::fmt::Write;

const MIN_MARKS: u32 = 1;
const MAX_MARKS: u32 = 6;

/// Serializer renders content as an indented, Markdown-flavoured outline
///
/// Headings are written as `#` repeated `level` times (clamped to 1..=6,
/// since levels are not validated), paragraphs as plain
/// lines and list items as `- item`. Blocks nested under a heading are
/// indented one step deeper than the heading.
pub struct Serializer {
    indent_level: usize,
    indent_string: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            indent_string: "  ".to_string(),
        }
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent_level: 0,
            indent_string: indent.to_string(),
        }
    }

    /// Serialize the whole document
    pub fn serialize(&mut self, content: &DocumentContent) -> String {
        let mut output = String::new();
        self.serialize_blocks(&content.items, &mut output);
        output
    }

    fn serialize_blocks(&mut self, blocks: &[Block], output: &mut String) {
        for block in blocks {
            self.serialize_block(block, output);
        }
    }

    fn serialize_block(&mut self, block: &Block, output: &mut String) {
        match block {
            Block::Paragraph(paragraph) => {
                self.write_indent(output);
                writeln!(output, "{}", paragraph.text).unwrap();
            }
            Block::Heading(heading) => self.serialize_heading(heading, output),
            Block::List(list) => {
                for item in &list.items {
                    self.write_indent(output);
                    writeln!(output, "- {}", item.text).unwrap();
                }
            }
        }
    }

    fn serialize_heading(&mut self, heading: &Heading, output: &mut String) {
        self.write_indent(output);
        let marks = "#".repeat(heading.level.clamp(MIN_MARKS, MAX_MARKS) as usize);
        writeln!(output, "{} {}", marks, heading.text).unwrap();

        self.indent_level += 1;
        self.serialize_blocks(&heading.items, output);
        self.indent_level -= 1;
    }

    fn write_indent(&self, output: &mut String) {
        for _ in 0..self.indent_level {
            output.push_str(&self.indent_string);
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to serialize content with default indentation
pub fn serialize(content: &DocumentContent) -> String {
    Serializer::new().serialize(content)
}
