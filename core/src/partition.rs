//! Partition records and the fixed four-slot table

use crate::error::{MbrError, Result};

/// Maximum number of primary partitions in an MBR
pub const MAX_PARTITIONS: usize = 4;

/// A resolved partition placement, in 512-byte sectors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartitionRecord {
    /// First sector of the partition (LBA)
    pub first_sector: u32,
    /// Number of sectors in the partition
    pub sector_count: u32,
}

impl PartitionRecord {
    /// First sector past the end of the partition
    pub fn end_sector(&self) -> u64 {
        self.first_sector as u64 + self.sector_count as u64
    }
}

/// Partition table for a disk
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartitionTable {
    records: [Option<PartitionRecord>; MAX_PARTITIONS],
    count: usize,
}

impl PartitionTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            records: [None; MAX_PARTITIONS],
            count: 0,
        }
    }

    /// Append a record to the next free slot
    pub fn add(&mut self, record: PartitionRecord) -> Result<()> {
        if self.count >= MAX_PARTITIONS {
            return Err(MbrError::TooManyPartitions);
        }

        self.records[self.count] = Some(record);
        self.count += 1;
        Ok(())
    }

    /// Number of populated slots
    pub fn count(&self) -> usize {
        self.count
    }

    /// Record at `index`, if populated
    pub fn get(&self, index: usize) -> Option<&PartitionRecord> {
        if index < self.count {
            self.records[index].as_ref()
        } else {
            None
        }
    }

    /// Iterate over populated records in slot order
    pub fn iter(&self) -> impl Iterator<Item = &PartitionRecord> {
        self.records[..self.count].iter().filter_map(|r| r.as_ref())
    }
}
