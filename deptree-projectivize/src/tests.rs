use deptree::graph::{DepEdge, DepGraph};
use deptree::token::{Token, TokenBuilder};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref NONPROJECTIVE_SENTENCES: Vec<Vec<Token>> = vec![
        sentence(&[
            ("Für", 9, "PP"),
            ("diese", 3, "DET"),
            ("Behauptung", 1, "PN"),
            ("hat", 0, "ROOT"),
            ("Beckmeyer", 4, "SUBJ"),
            ("bisher", 9, "ADV"),
            ("keinen", 8, "DET"),
            ("Nachweis", 9, "OBJA"),
            ("geliefert", 4, "AUX"),
            (".", 9, "-PUNCT-"),
        ]),
        sentence(&[
            ("Für", 8, "PP"),
            ("diese", 3, "DET"),
            ("Behauptung", 1, "PN"),
            ("hat", 0, "ROOT"),
            ("Beckmeyer", 4, "SUBJ"),
            ("bisher", 9, "ADV"),
            ("keinen", 8, "DET"),
            ("Nachweis", 9, "OBJA"),
            ("geliefert", 4, "AUX"),
            (".", 9, "-PUNCT-"),
        ]),
        sentence(&[
            ("Auch", 2, "ADV"),
            ("für", 10, "PP"),
            ("Rumänien", 2, "PN"),
            ("selbst", 3, "ADV"),
            ("ist", 0, "ROOT"),
            ("der", 7, "DET"),
            ("Papst-Besuch", 5, "SUBJ"),
            ("von", 5, "PRED"),
            ("großer", 10, "ATTR"),
            ("Bedeutung", 8, "PN"),
            (".", 10, "-PUNCT-"),
        ]),
    ];

    pub static ref PROJECTIVE_SENTENCES: Vec<Vec<Token>> = vec![
        sentence(&[
            ("Für", 4, "PP|AUX"),
            ("diese", 3, "DET"),
            ("Behauptung", 1, "PN"),
            ("hat", 0, "ROOT"),
            ("Beckmeyer", 4, "SUBJ"),
            ("bisher", 9, "ADV"),
            ("keinen", 8, "DET"),
            ("Nachweis", 9, "OBJA"),
            ("geliefert", 4, "AUX"),
            (".", 9, "-PUNCT-"),
        ]),
        sentence(&[
            ("Für", 4, "PP|OBJA"),
            ("diese", 3, "DET"),
            ("Behauptung", 1, "PN"),
            ("hat", 0, "ROOT"),
            ("Beckmeyer", 4, "SUBJ"),
            ("bisher", 9, "ADV"),
            ("keinen", 8, "DET"),
            ("Nachweis", 9, "OBJA"),
            ("geliefert", 4, "AUX"),
            (".", 9, "-PUNCT-"),
        ]),
        sentence(&[
            ("Auch", 2, "ADV"),
            ("für", 5, "PP|PN"),
            ("Rumänien", 2, "PN"),
            ("selbst", 3, "ADV"),
            ("ist", 0, "ROOT"),
            ("der", 7, "DET"),
            ("Papst-Besuch", 5, "SUBJ"),
            ("von", 5, "PRED"),
            ("großer", 10, "ATTR"),
            ("Bedeutung", 8, "PN"),
            (".", 10, "-PUNCT-"),
        ]),
    ];
}

/// Construct a sentence from (form, head, head relation) triples.
pub fn sentence(tokens: &[(&str, usize, &str)]) -> Vec<Token> {
    tokens
        .iter()
        .map(|&(form, head, head_rel)| {
            Token::from(
                TokenBuilder::new(form)
                    .lemma(form.to_lowercase())
                    .head(head)
                    .head_rel(head_rel),
            )
        })
        .collect()
}

pub fn graph_from_relations(n_vertices: usize, edges: &[(usize, usize, &str)]) -> DepGraph {
    let mut graph = DepGraph::new(n_vertices);
    for &(head, dependent, rel) in edges {
        graph
            .add_edge(head, DepEdge::new(dependent, rel.to_owned()))
            .unwrap();
    }
    graph
}

pub fn graph_from_edges(n_vertices: usize, edges: &[(usize, usize)]) -> DepGraph {
    let edges: Vec<_> = edges
        .iter()
        .map(|&(head, dependent)| (head, dependent, ""))
        .collect();
    graph_from_relations(n_vertices, &edges)
}
