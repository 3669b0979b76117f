use quire_content::{DocumentContent, Heading, ListElem, ListItem, Paragraph};

use crate::visitor::{walk_heading, walk_list, Visitor};

/// Node counts for a content tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentStats {
    pub paragraphs: usize,
    pub headings: usize,
    pub lists: usize,
    pub list_items: usize,

    /// Deepest heading nesting (0 when there are no headings)
    pub max_depth: usize,
}

impl ContentStats {
    pub fn collect(content: &DocumentContent) -> Self {
        let mut collector = StatsCollector::default();
        collector.visit_content(content);
        collector.stats
    }

    /// Nodes a traversal yields (lists themselves are not yielded)
    pub fn total_nodes(&self) -> usize {
        self.paragraphs + self.headings + self.list_items
    }
}

#[derive(Default)]
struct StatsCollector {
    stats: ContentStats,
    depth: usize,
}

impl Visitor for StatsCollector {
    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {
        self.stats.paragraphs += 1;
    }

    fn visit_heading(&mut self, heading: &Heading) {
        self.stats.headings += 1;
        self.depth += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
        walk_heading(self, heading);
        self.depth -= 1;
    }

    fn visit_list(&mut self, list: &ListElem) {
        self.stats.lists += 1;
        walk_list(self, list);
    }

    fn visit_list_item(&mut self, _item: &ListItem) {
        self.stats.list_items += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_content::Traverse;

    #[test]
    fn test_collect_counts_every_kind() {
        let content = DocumentContent::new(vec![
            Paragraph::new("Intro").into(),
            Heading::with_items(
                "H1",
                1,
                vec![
                    Paragraph::new("Inside").into(),
                    ListElem::from_texts(["Item 1", "Item 2"]).into(),
                    Heading::new("H2", 2).into(),
                ],
            )
            .into(),
        ]);

        let stats = ContentStats::collect(&content);

        assert_eq!(
            stats,
            ContentStats {
                paragraphs: 2,
                headings: 2,
                lists: 1,
                list_items: 2,
                max_depth: 2,
            }
        );
        assert_eq!(stats.total_nodes(), content.descendants().count());
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(ContentStats::collect(&DocumentContent::default()), ContentStats::default());
    }
}
