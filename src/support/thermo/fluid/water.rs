/// Canonical identifier for water and steam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Water;
