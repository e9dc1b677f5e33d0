//! Byte-exact 512-byte MBR image building and parsing
//!
//! The on-disk layout (all multi-byte fields little-endian):
//!
//! ```text
//! offset 0    446 bytes   bootstrap area, zero-filled
//! offset 446  4 x 16 B    partition entries
//! offset 510  2 bytes     boot signature 0xAA55 (0x55, 0xAA on disk)
//! ```
//!
//! Each 16-byte entry: bootable flag (0), first-sector CHS (0,0,0),
//! partition type, last-sector CHS (0,0,0), first sector LBA, sector count.
//! Fields are emitted with explicit offsets and `to_le_bytes` so the image
//! is byte-identical on any host endianness.

use crate::error::{MbrError, Result};
use crate::partition::{PartitionRecord, PartitionTable, MAX_PARTITIONS};

/// Bytes per sector, and the size of the whole MBR
pub const SECTOR_SIZE: usize = 512;

/// Size of the zero-filled bootstrap area
pub const BOOTSTRAP_SIZE: usize = 446;

/// Size of one partition table entry
pub const ENTRY_SIZE: usize = 16;

/// Boot signature stored at offset 510
pub const BOOT_SIGNATURE: u16 = 0xAA55;

/// Partition type written for every entry (native Linux)
pub const PARTITION_TYPE_LINUX: u8 = 0x83;

/// Offset of an entry's partition type byte
const ENTRY_TYPE: usize = 4;
/// Offset of an entry's first-sector LBA field
const ENTRY_FIRST_LBA: usize = 8;
/// Offset of an entry's sector-count LBA field
const ENTRY_NUM_LBA: usize = 12;

/// Serialise a partition table into a 512-byte MBR image.
///
/// The output is a pure function of the table: identical tables yield
/// byte-identical buffers. Unused entry slots, CHS fields, bootable flags,
/// and the bootstrap area are all zero.
pub fn build_mbr_image(table: &PartitionTable, buffer: &mut [u8; SECTOR_SIZE]) {
    buffer.fill(0);

    for (slot, record) in table.iter().enumerate() {
        let offset = BOOTSTRAP_SIZE + slot * ENTRY_SIZE;

        // Bootable flag and both CHS fields stay zero
        buffer[offset + ENTRY_TYPE] = PARTITION_TYPE_LINUX;
        buffer[offset + ENTRY_FIRST_LBA..offset + ENTRY_FIRST_LBA + 4]
            .copy_from_slice(&record.first_sector.to_le_bytes());
        buffer[offset + ENTRY_NUM_LBA..offset + ENTRY_NUM_LBA + 4]
            .copy_from_slice(&record.sector_count.to_le_bytes());
    }

    // Boot signature
    buffer[SECTOR_SIZE - 2..].copy_from_slice(&BOOT_SIGNATURE.to_le_bytes());
}

/// Parse a 512-byte MBR image back into a partition table.
///
/// Fails with `InvalidSignature` if offset 510 does not carry 0xAA55.
/// Entries whose type byte and LBA fields are all zero are treated as
/// absent; populated entries recover `(first_sector, sector_count)`
/// exactly as built.
pub fn parse_mbr_image(buffer: &[u8; SECTOR_SIZE]) -> Result<PartitionTable> {
    let signature = u16::from_le_bytes([buffer[SECTOR_SIZE - 2], buffer[SECTOR_SIZE - 1]]);
    if signature != BOOT_SIGNATURE {
        return Err(MbrError::InvalidSignature);
    }

    let mut table = PartitionTable::new();

    for slot in 0..MAX_PARTITIONS {
        let offset = BOOTSTRAP_SIZE + slot * ENTRY_SIZE;
        let entry = &buffer[offset..offset + ENTRY_SIZE];

        let first_sector = u32::from_le_bytes([
            entry[ENTRY_FIRST_LBA],
            entry[ENTRY_FIRST_LBA + 1],
            entry[ENTRY_FIRST_LBA + 2],
            entry[ENTRY_FIRST_LBA + 3],
        ]);
        let sector_count = u32::from_le_bytes([
            entry[ENTRY_NUM_LBA],
            entry[ENTRY_NUM_LBA + 1],
            entry[ENTRY_NUM_LBA + 2],
            entry[ENTRY_NUM_LBA + 3],
        ]);

        if entry[ENTRY_TYPE] == 0 && first_sector == 0 && sector_count == 0 {
            continue;
        }

        table.add(PartitionRecord {
            first_sector,
            sector_count,
        })?;
    }

    Ok(table)
}
