use std::cell::Cell;

/// Independently refreshed part of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Summary,
    VolumeChart,
    TypeChart,
    Transactions,
}

impl Region {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            Region::Summary => 0,
            Region::VolumeChart => 1,
            Region::TypeChart => 2,
            Region::Transactions => 3,
        }
    }
}

/// Proof that a request was issued for a region at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub region: Region,
    pub sequence: u64,
}

/// Monotonic request counters, one per region.
///
/// A completion may only be applied while its ticket is still the latest one
/// issued for the region; anything older is stale.
#[derive(Debug, Default)]
pub struct RegionSequencer {
    latest: [Cell<u64>; Region::COUNT],
}

impl RegionSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, region: Region) -> Ticket {
        let counter = &self.latest[region.index()];
        let sequence = counter.get() + 1;
        counter.set(sequence);
        Ticket { region, sequence }
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest[ticket.region.index()].get() == ticket.sequence
    }
}
