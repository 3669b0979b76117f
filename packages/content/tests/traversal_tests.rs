//! Traversal properties over generated trees

use quire_content::{Block, DocumentContent, Heading, ListElem, ListItem, Node, Paragraph, Traverse};

/// Builds a tree whose node texts are numbered in pre-order, so a correct
/// traversal must read "0", "1", "2", ... back.
struct Builder {
    next: usize,
}

impl Builder {
    fn label(&mut self) -> String {
        let label = self.next.to_string();
        self.next += 1;
        label
    }

    fn blocks(&mut self, seed: usize, depth: usize) -> Vec<Block> {
        (0..(seed % 4) + 1)
            .map(|i| -> Block {
                match (seed + i) % 3 {
                    0 => Paragraph::new(self.label()).into(),
                    1 => {
                        let count = (seed / 3 + i) % 4;
                        ListElem::new((0..count).map(|_| ListItem::new(self.label())).collect()).into()
                    }
                    _ => {
                        let text = self.label();
                        let items = if depth == 0 {
                            Vec::new()
                        } else {
                            self.blocks(seed * 7 + i + 1, depth - 1)
                        };
                        Heading::with_items(text, (4 - depth) as u32, items).into()
                    }
                }
            })
            .collect()
    }
}

fn generated(seed: usize) -> (DocumentContent, usize) {
    let mut builder = Builder { next: 0 };
    let items = builder.blocks(seed, 3);
    (DocumentContent::new(items), builder.next)
}

#[test]
fn test_traversal_visits_every_node_once_in_order() {
    for seed in 0..50 {
        let (content, total) = generated(seed);
        let seen: Vec<String> = content.descendants().map(|n| n.text().to_string()).collect();
        let expected: Vec<String> = (0..total).map(|i| i.to_string()).collect();

        assert_eq!(seen, expected, "seed {}", seed);
    }
}

#[test]
fn test_traversal_is_restartable() {
    for seed in 0..20 {
        let (content, _) = generated(seed);
        let first: Vec<Node> = content.descendants().collect();
        let second: Vec<Node> = content.descendants().collect();
        assert_eq!(first, second);
    }
}

#[test]
fn test_leaf_count_matches_structure() {
    let content = DocumentContent::new(vec![
        Paragraph::new("Intro").into(),
        Heading::with_items(
            "H1",
            1,
            vec![
                Paragraph::new("Inside").into(),
                ListElem::from_texts(["Item 1", "Item 2"]).into(),
            ],
        )
        .into(),
    ]);

    let leaves = content
        .descendants()
        .filter(|n| !matches!(n, Node::Heading(_)))
        .count();
    assert_eq!(leaves, 4);
}

#[test]
fn test_content_json_round_trip_preserves_traversal() {
    let (content, _) = generated(11);
    let json = serde_json::to_string(&content).unwrap();
    let restored: DocumentContent = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, content);
    assert!(restored.descendants().eq(content.descendants()));
}
