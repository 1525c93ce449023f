use std::collections::HashMap;

use crate::element::{ShapeId, ShapeKind};

pub const DEFAULT_SEQUENCE_WIDTH: usize = 3;

/// Hands out `<KindName><sequence>` ids with one counter per shape kind.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: HashMap<ShapeKind, usize>,
    width: usize,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENCE_WIDTH)
    }
}

impl IdAllocator {
    pub fn new(width: usize) -> Self {
        Self {
            next: HashMap::new(),
            width,
        }
    }

    pub fn generate_id(&mut self, kind: ShapeKind) -> ShapeId {
        let counter = self.next.entry(kind).or_insert(1);
        let sequence = *counter;
        *counter += 1;
        ShapeId::new(format!("{}{:0width$}", kind.name(), sequence, width = self.width))
    }

    /// Number of ids handed out so far for `kind`
    pub fn issued(&self, kind: ShapeKind) -> usize {
        self.next.get(&kind).map_or(0, |next| next - 1)
    }
}
