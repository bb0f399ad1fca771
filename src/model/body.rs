use super::block::ContentBlock;
use serde::Serialize;

/// Ordered sequence of normalized blocks, as produced by the transformer.
///
/// Order mirrors the source document's top-level reading order. The body
/// holds no reference back to the records it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContentBody {
    blocks: Vec<ContentBlock>,
}

impl ContentBody {
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentBlock> {
        self.blocks.iter()
    }
}

impl FromIterator<ContentBlock> for ContentBody {
    fn from_iter<I: IntoIterator<Item = ContentBlock>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ContentBody {
    type Item = &'a ContentBlock;
    type IntoIter = std::slice::Iter<'a, ContentBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
