use crate::gameplay::edge::Edge;

/// the public action sequence of a hand, stored as abstract
/// action indices with the deal marker in place, so the key
/// carries round structure without revealing any cards.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path(Vec<u8>);

impl Path {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Path {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
impl From<&[Edge]> for Path {
    fn from(edges: &[Edge]) -> Self {
        Self(edges.iter().map(|e| e.index() as u8).collect())
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for byte in self.0.iter() {
            match byte {
                0 => write!(f, "F")?,
                1 => write!(f, "C")?,
                9 => write!(f, "!")?,
                10 => write!(f, "/")?,
                n => write!(f, "{}", n)?,
            }
        }
        Ok(())
    }
}
