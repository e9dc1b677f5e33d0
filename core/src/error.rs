//! Error types for MBR operations

use core::fmt;

/// Result type for MBR operations
pub type Result<T> = core::result::Result<T, MbrError>;

/// Errors that can occur while building or writing an MBR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbrError {
    /// I/O error on the block device
    IoError,

    /// A numeric sector token failed to parse
    BadNumber,

    /// Partition overlaps the previous partition or the MBR sector
    Overlap,

    /// Partition extends past the end of the device or the 32-bit
    /// sector range
    OutOfRange,

    /// Partition has zero sectors
    EmptyPartition,

    /// More than four partitions requested
    TooManyPartitions,

    /// A request remains but the device has no free sectors left
    NoSpaceLeft,

    /// Sector 0 does not carry the 0xAA55 boot signature
    InvalidSignature,
}

impl fmt::Display for MbrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError => write!(f, "I/O error on block device"),
            Self::BadNumber => write!(f, "invalid sector number"),
            Self::Overlap => write!(f, "partition overlaps previous partition or the MBR"),
            Self::OutOfRange => write!(f, "partition extends past the end of the device"),
            Self::EmptyPartition => write!(f, "partition has zero sectors"),
            Self::TooManyPartitions => write!(f, "an MBR holds at most four partitions"),
            Self::NoSpaceLeft => write!(f, "no free sectors left on device"),
            Self::InvalidSignature => write!(f, "missing 0xAA55 boot signature"),
        }
    }
}
