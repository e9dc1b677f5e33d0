//! Sector 0 access over the `BlockIo` seam

use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;

use crate::error::{MbrError, Result};
use crate::image::{build_mbr_image, parse_mbr_image, SECTOR_SIZE};
use crate::partition::PartitionTable;

/// Device capacity in 512-byte sectors
pub fn device_capacity<B: BlockIo>(block_io: &mut B) -> Result<u64> {
    block_io.num_blocks().map_err(|_| MbrError::IoError)
}

/// Build the MBR image for `table` and write it to sector 0.
///
/// One 512-byte block is written; a short or failed write surfaces as
/// `IoError`. The device is flushed afterwards so the table is not left
/// sitting in a driver cache.
pub fn write_mbr<B: BlockIo>(block_io: &mut B, table: &PartitionTable) -> Result<()> {
    let mut buffer = [0u8; SECTOR_SIZE];
    build_mbr_image(table, &mut buffer);

    block_io
        .write_blocks(Lba(0), &buffer)
        .map_err(|_| MbrError::IoError)?;
    block_io.flush().map_err(|_| MbrError::IoError)
}

/// Read sector 0 and parse it as an MBR
pub fn read_mbr<B: BlockIo>(block_io: &mut B) -> Result<PartitionTable> {
    let mut buffer = [0u8; SECTOR_SIZE];
    block_io
        .read_blocks(Lba(0), &mut buffer)
        .map_err(|_| MbrError::IoError)?;

    parse_mbr_image(&buffer)
}
