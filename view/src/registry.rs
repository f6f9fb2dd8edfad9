use std::collections::HashMap;

use pollbox_protocol::AnswerDefinition;

/// Ordered answer list plus a value→position index.
///
/// Built once at construction; answers are never added or removed
/// afterwards. Duplicate values are tolerated: the later entry shadows the
/// earlier one in the index while both keep their display rows.
pub(crate) struct AnswerRegistry {
    answers: Vec<AnswerDefinition>,
    index: HashMap<String, usize>,
}

impl AnswerRegistry {
    pub(crate) fn build(answers: Vec<AnswerDefinition>) -> Self {
        let mut index = HashMap::with_capacity(answers.len());
        for (position, answer) in answers.iter().enumerate() {
            index.insert(answer.value.clone(), position);
        }
        Self { answers, index }
    }

    pub(crate) fn len(&self) -> usize {
        self.answers.len()
    }

    pub(crate) fn get(&self, position: usize) -> Option<&AnswerDefinition> {
        self.answers.get(position)
    }

    pub(crate) fn position(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    /// Answers in display order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &AnswerDefinition> {
        self.answers.iter()
    }
}
