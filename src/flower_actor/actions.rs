/// Custom actions for Flower entities.
///
/// These run inside the inventory actor, so a check and the mutation that
/// follows it cannot interleave with another order against the same flower.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowerAction {
    /// Decrements stock by the given amount.
    ///
    /// # Errors
    /// Fails without touching stock if the amount exceeds what is available.
    ReserveStock(i64),
    /// Puts previously reserved units back.
    ReleaseStock(i64),
}

/// Results from FlowerActions - variants match 1:1 with FlowerAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowerActionResult {
    /// Stock remaining after the reservation
    Reserved(i64),
    /// Stock after the release
    Released(i64),
}
