/// Separator between the relation of a lifted token and the relation of
/// its original head in head-marked relations.
pub const HEAD_MARKER_SEPARATOR: char = '|';

/// Dependency relation under the head-marking encoding.
///
/// In a sentence, the relation of a lifted token is written as
/// `original|owner`, where `owner` is the relation of the token's
/// original head. `HeadRel` is the decoded form of such a relation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HeadRel {
    /// An ordinary relation.
    Plain(String),

    /// The relation of a token that was lifted.
    Lifted {
        /// The relation between the token and its original head.
        original: String,

        /// The relation between the original head and its own head.
        owner: String,
    },
}

impl HeadRel {
    /// Decode a relation, splitting it on the first `separator`.
    pub fn parse(relation: &str, separator: char) -> Self {
        match relation.find(separator) {
            Some(idx) => HeadRel::Lifted {
                original: relation[..idx].to_owned(),
                owner: relation[idx + separator.len_utf8()..].to_owned(),
            },
            None => HeadRel::Plain(relation.to_owned()),
        }
    }

    /// Encode the relation, joining a lifted relation with `separator`.
    pub fn encode(&self, separator: char) -> String {
        match self {
            HeadRel::Plain(relation) => relation.clone(),
            HeadRel::Lifted { original, owner } => {
                format!("{}{}{}", original, separator, owner)
            }
        }
    }

    /// The relation to the original head.
    pub fn original(&self) -> &str {
        match self {
            HeadRel::Plain(relation) => relation,
            HeadRel::Lifted { original, .. } => original,
        }
    }

    /// The relation of the original head, for lifted relations.
    pub fn owner(&self) -> Option<&str> {
        match self {
            HeadRel::Plain(_) => None,
            HeadRel::Lifted { owner, .. } => Some(owner),
        }
    }
}

impl From<String> for HeadRel {
    fn from(relation: String) -> Self {
        HeadRel::Plain(relation)
    }
}
