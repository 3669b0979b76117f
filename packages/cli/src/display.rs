use colored::Colorize;
use quire_content::serialize;
use quire_editor::EditBuffer;

/// Print the document outline under a heading line
pub fn print_outline(label: &str, buffer: &EditBuffer) {
    let document = buffer.document();
    let stats = document.stats();

    println!(
        "{} {} (v{}, {} nodes, {} undo / {} redo)",
        "▸".bright_blue(),
        label.bold(),
        document.version,
        stats.total_nodes(),
        buffer.undo_levels(),
        buffer.redo_levels()
    );

    let outline = serialize(document.content());
    if outline.is_empty() {
        println!("    {}", "(empty)".dimmed());
    }
    for line in outline.lines() {
        println!("    {}", line);
    }
    println!();
}
