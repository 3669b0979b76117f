use quire_content::*;

/// Visitor pattern for walking content immutably
///
/// Default implementations walk the entire tree. Override specific
/// `visit_*` methods to act on particular nodes; call the matching `walk_*`
/// function from an override to keep descending.
pub trait Visitor: Sized {
    fn visit_content(&mut self, content: &DocumentContent) {
        walk_content(self, content);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {
        // Leaf node, no children to walk
    }

    fn visit_heading(&mut self, heading: &Heading) {
        walk_heading(self, heading);
    }

    fn visit_list(&mut self, list: &ListElem) {
        walk_list(self, list);
    }

    fn visit_list_item(&mut self, _item: &ListItem) {
        // Leaf node, no children to walk
    }
}

pub fn walk_content<V: Visitor>(visitor: &mut V, content: &DocumentContent) {
    for block in &content.items {
        visitor.visit_block(block);
    }
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    match block {
        Block::Paragraph(paragraph) => visitor.visit_paragraph(paragraph),
        Block::Heading(heading) => visitor.visit_heading(heading),
        Block::List(list) => visitor.visit_list(list),
    }
}

pub fn walk_heading<V: Visitor>(visitor: &mut V, heading: &Heading) {
    for block in &heading.items {
        visitor.visit_block(block);
    }
}

pub fn walk_list<V: Visitor>(visitor: &mut V, list: &ListElem) {
    for item in &list.items {
        visitor.visit_list_item(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects heading texts, skipping everything under level-2 headings
    struct TopHeadings {
        seen: Vec<String>,
    }

    impl Visitor for TopHeadings {
        fn visit_heading(&mut self, heading: &Heading) {
            self.seen.push(heading.text.clone());
            if heading.level < 2 {
                walk_heading(self, heading);
            }
        }
    }

    #[test]
    fn test_override_controls_descent() {
        let content = DocumentContent::new(vec![Heading::with_items(
            "A",
            1,
            vec![Heading::with_items("B", 2, vec![Heading::new("C", 3).into()]).into()],
        )
        .into()]);

        let mut visitor = TopHeadings { seen: Vec::new() };
        visitor.visit_content(&content);

        assert_eq!(visitor.seen, vec!["A", "B"]);
    }
}
