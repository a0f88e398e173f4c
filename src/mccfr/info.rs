use super::path::Path;

/// an information set key: everything one seat can see, folded
/// down to (card bucket, public action path). hidden cards of
/// other seats never enter, so states a player cannot tell apart
/// share a key and share a strategy.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Info {
    present: u8,
    path: Path,
}

impl Info {
    pub fn present(&self) -> u8 {
        self.present
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<(u8, Path)> for Info {
    fn from((present, path): (u8, Path)) -> Self {
        Self { present, path }
    }
}

impl std::fmt::Display for Info {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>3}::{}", self.present, self.path)
    }
}
