/// Growth phases in strict forward order.
///
/// The ordering is load-bearing: rendering gates on `phase >= Branches`
/// and `phase >= Hearts`, and the machine only ever steps forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Trunk,
    Branches,
    Hearts,
    Done,
}

/// Emitted by the state machine when the phase steps forward.
///
/// Subscribers react to transitions (the text reveal listens for `Bloomed`)
/// instead of the machine reaching into unrelated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Trunk reached full height, branches start growing
    TrunkGrown,
    /// Every branch reached its target length, hearts start blooming
    BranchesGrown,
    /// Every heart exhausted its delay and reached its target size
    Bloomed,
}
