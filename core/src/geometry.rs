//! Sector token parsing and the packed-placement allocator
//!
//! Requests arrive as `(start, length)` token pairs. Each token is either a
//! numeric literal (base auto-detected: `0x` hex, leading `0` octal, else
//! decimal) or the sentinel `auto`. A monotone cursor starting at sector 1
//! (sector 0 holds the MBR itself) resolves `auto` starts to the next free
//! sector and `auto` lengths to the rest of the device.

use crate::error::{MbrError, Result};
use crate::partition::{PartitionRecord, PartitionTable, MAX_PARTITIONS};

/// One user-supplied sector value, before resolution
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SectorToken {
    /// The `auto` sentinel: next free sector / all remaining sectors
    Auto,
    /// An explicit sector number or count
    Literal(u32),
}

impl SectorToken {
    /// Parse a command-line token.
    ///
    /// Numeric literals follow strtol base-0 rules: `0x`/`0X` prefix for
    /// hexadecimal, a leading `0` for octal, decimal otherwise. Anything
    /// negative, empty, or out of `u32` range is `BadNumber`.
    pub fn parse(token: &str) -> Result<Self> {
        if token == "auto" {
            return Ok(Self::Auto);
        }

        let (digits, radix) = if let Some(hex) = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
        {
            (hex, 16)
        } else if token.len() > 1 && token.starts_with('0') {
            (&token[1..], 8)
        } else {
            (token, 10)
        };

        u32::from_str_radix(digits, radix)
            .map(Self::Literal)
            .map_err(|_| MbrError::BadNumber)
    }
}

/// An unresolved `(start, length)` pair
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartitionRequest {
    /// First sector, or `auto` for the next free sector
    pub start: SectorToken,
    /// Sector count, or `auto` for all remaining sectors
    pub length: SectorToken,
}

impl PartitionRequest {
    /// Parse a token pair as taken from the command line
    pub fn parse(start: &str, length: &str) -> Result<Self> {
        Ok(Self {
            start: SectorToken::parse(start)?,
            length: SectorToken::parse(length)?,
        })
    }
}

/// Resolve one request against the cursor and device capacity
fn resolve_one(request: &PartitionRequest, next: u64, capacity: u64) -> Result<PartitionRecord> {
    let start = match request.start {
        SectorToken::Auto => next,
        SectorToken::Literal(v) => v as u64,
    };

    if start < next {
        return Err(MbrError::Overlap);
    }

    let size = match request.length {
        SectorToken::Auto => capacity.checked_sub(start).ok_or(MbrError::OutOfRange)?,
        SectorToken::Literal(v) => v as u64,
    };

    let end = start + size;
    if end > capacity || end > u32::MAX as u64 {
        return Err(MbrError::OutOfRange);
    }
    if size == 0 {
        return Err(MbrError::EmptyPartition);
    }

    Ok(PartitionRecord {
        first_sector: start as u32,
        sector_count: size as u32,
    })
}

/// Resolve requests into a partition table for a device of `capacity`
/// sectors.
///
/// The cursor starts at sector 1 and advances to the end of each resolved
/// partition; requests are validated in order and the first failure aborts.
/// Requests left over once four partitions are placed, or once the cursor
/// reaches the end of the device, are rejected rather than silently
/// dropped.
pub fn resolve_requests(requests: &[PartitionRequest], capacity: u64) -> Result<PartitionTable> {
    if requests.len() > MAX_PARTITIONS {
        return Err(MbrError::TooManyPartitions);
    }

    let mut table = PartitionTable::new();
    let mut next: u64 = 1;

    for request in requests {
        if next >= capacity {
            return Err(MbrError::NoSpaceLeft);
        }

        let record = resolve_one(request, next, capacity)?;
        table.add(record)?;
        next = record.end_sector();
    }

    Ok(table)
}

/// Parse and resolve raw token pairs in command-line order.
///
/// Parsing interleaves with placement, one request at a time, so the first
/// failing request determines the reported error: a malformed token in a
/// later pair is never examined once an earlier pair has already failed
/// validation.
pub fn resolve_token_pairs(pairs: &[(&str, &str)], capacity: u64) -> Result<PartitionTable> {
    if pairs.len() > MAX_PARTITIONS {
        return Err(MbrError::TooManyPartitions);
    }

    let mut table = PartitionTable::new();
    let mut next: u64 = 1;

    for &(start, length) in pairs {
        if next >= capacity {
            return Err(MbrError::NoSpaceLeft);
        }

        let request = PartitionRequest::parse(start, length)?;
        let record = resolve_one(&request, next, capacity)?;
        table.add(record)?;
        next = record.end_sector();
    }

    Ok(table)
}
