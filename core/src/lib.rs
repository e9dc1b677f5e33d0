//! MBR Partition Table Assembly
//!
//! A `no_std` library for building Master Boot Record partition tables from
//! `(start, length)` sector requests and writing them to a block device.
//!
//! # Overview
//!
//! The MBR is the 512-byte structure in sector 0 of a disk: 446 bytes of
//! bootstrap area, four 16-byte partition entries, and the 0xAA55 boot
//! signature. This crate provides:
//! - Sector token parsing (`auto` sentinel, decimal/hex/octal literals)
//! - A cursor-based allocator that resolves requests against device capacity
//! - A byte-exact, endian-portable 512-byte image builder and parser
//! - Sector 0 read/write over any `gpt_disk_io::BlockIo` device
//!
//! # Architecture
//!
//! The implementation is layered:
//! 1. **Geometry layer** - Parses tokens and resolves packed placement
//! 2. **Image layer** - Serialises records into the on-disk layout
//! 3. **Writer layer** - Moves the image across the `BlockIo` seam
//!
//! # Usage
//!
//! ```ignore
//! use mkmbr::{resolve_requests, write_mbr, PartitionRequest};
//!
//! // "auto auto" fills the rest of the device starting at sector 1
//! let requests = [PartitionRequest::parse("auto", "auto")?];
//!
//! let capacity = mkmbr::device_capacity(&mut block_io)?;
//! let table = resolve_requests(&requests, capacity)?;
//! write_mbr(&mut block_io, &table)?;
//! ```
//!
//! CHS fields, the bootable flag, and the bootstrap area are left zero; the
//! partition type is fixed to 0x83 (native Linux).

#![no_std]
#![warn(missing_docs)]

pub mod error;
pub mod geometry;
pub mod image;
pub mod partition;
pub mod writer;

pub use error::{MbrError, Result};
pub use partition::{PartitionRecord, PartitionTable};

// High-level API exports
pub use geometry::{resolve_requests, resolve_token_pairs, PartitionRequest, SectorToken};
pub use image::{build_mbr_image, parse_mbr_image};
pub use writer::{device_capacity, read_mbr, write_mbr};
