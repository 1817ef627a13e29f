use crate::error::{BfResult, BlockForgeError};
use std::fmt;

/// Physical placement order of the blocks of one function.
/// `order[p]` is the block placed at position `p`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    order: Vec<usize>,
}

impl Layout {
    /// Validates that `order` is a permutation of `0..block_count`.
    pub fn new(order: Vec<usize>, block_count: usize) -> BfResult<Self> {
        if order.len() != block_count {
            return Err(BlockForgeError::validation(format!(
                "layout has {} entries but the instance has {} blocks",
                order.len(),
                block_count
            )));
        }

        let mut seen = vec![false; block_count];
        for (pos, &block) in order.iter().enumerate() {
            if block >= block_count {
                return Err(BlockForgeError::validation(format!(
                    "block {} at position {} is out of range [0, {})",
                    block, pos, block_count
                )));
            }
            if seen[block] {
                return Err(BlockForgeError::validation(format!(
                    "block {} appears more than once (again at position {})",
                    block, pos
                )));
            }
            seen[block] = true;
        }

        Ok(Self { order })
    }

    /// The untouched layout `[0, 1, ..., n-1]`.
    pub fn identity(block_count: usize) -> Self {
        Self {
            order: (0..block_count).collect(),
        }
    }

    /// Parses `"[1, 0, 2]"`, `"1,0,2"` or `"1 0 2"`.
    pub fn parse(text: &str, block_count: usize) -> BfResult<Self> {
        let body = text.trim().trim_start_matches('[').trim_end_matches(']');

        let mut order = Vec::with_capacity(block_count);
        for token in body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let block = token.parse::<usize>().map_err(|e| {
                BlockForgeError::validation(format!("invalid layout entry '{}': {}", token, e))
            })?;
            order.push(block);
        }

        Self::new(order, block_count)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline(always)]
    pub fn block_at(&self, position: usize) -> usize {
        self.order[position]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Inverse map: `positions()[block]` is where `block` sits.
    pub fn positions(&self) -> Vec<usize> {
        let mut pos = vec![0; self.order.len()];
        for (p, &block) in self.order.iter().enumerate() {
            pos[block] = p;
        }
        pos
    }

    pub fn reversed(&self) -> Self {
        Self {
            order: self.order.iter().rev().copied().collect(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.order.iter().enumerate().all(|(p, &b)| p == b)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, block) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", block)?;
        }
        write!(f, "]")
    }
}

impl AsRef<[usize]> for Layout {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        let expected = vec![2, 0, 1];
        assert_eq!(Layout::parse("[2, 0, 1]", 3).unwrap().as_slice(), &expected[..]);
        assert_eq!(Layout::parse("2,0,1", 3).unwrap().as_slice(), &expected[..]);
        assert_eq!(Layout::parse(" 2 0 1 ", 3).unwrap().as_slice(), &expected[..]);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            Layout::parse("[0, x, 1]", 3),
            Err(BlockForgeError::Validation(_))
        ));
        assert!(matches!(
            Layout::parse("[0, -1, 1]", 3),
            Err(BlockForgeError::Validation(_))
        ));
    }

    #[test]
    fn test_display_matches_parse() {
        let layout = Layout::new(vec![3, 1, 0, 2], 4).unwrap();
        assert_eq!(layout.to_string(), "[3, 1, 0, 2]");
        assert_eq!(Layout::parse(&layout.to_string(), 4).unwrap(), layout);
    }

    #[test]
    fn test_positions_and_reverse() {
        let layout = Layout::new(vec![2, 0, 1], 3).unwrap();
        assert_eq!(layout.positions(), vec![1, 2, 0]);
        assert_eq!(layout.reversed().as_slice(), &[1, 0, 2]);
        assert!(!layout.is_identity());
        assert!(Layout::identity(3).is_identity());
    }
}
