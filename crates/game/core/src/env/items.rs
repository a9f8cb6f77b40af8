use super::CellId;

/// Display names for carryable items.
///
/// Items are identified by their sprite id; the oracle only resolves the
/// label shown in the inventory picker.
pub trait ItemOracle: Send + Sync {
    fn display_name(&self, item: CellId) -> &'static str;
}
