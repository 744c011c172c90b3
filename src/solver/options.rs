/// Knobs that change how equilibria are computed, never which ones are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Options {
    /// drop single-strategy players before sweeping, reinsert them after
    pub compact: bool,
    /// split sweeps across the rayon pool
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            compact: true,
            parallel: true,
        }
    }
}

impl Options {
    pub fn compact(self, compact: bool) -> Self {
        Self { compact, ..self }
    }
    pub fn parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }
}
