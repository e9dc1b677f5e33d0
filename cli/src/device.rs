//! std::fs::File to gpt_disk_io::BlockIo adapter
//!
//! Wraps an opened block device or disk image in the `BlockIo` trait so the
//! layout code never sees the platform handle. Sectors are fixed at 512
//! bytes; partial reads and writes surface as errors.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};

const SECTOR_SIZE: u64 = 512;

/// An open read-write device with a known sector count
pub struct FileDevice {
    file: File,
    num_blocks: u64,
}

impl FileDevice {
    /// Open the device at `path` for read-write access.
    ///
    /// Only the open itself happens here; sizing is a separate step so the
    /// caller can tell an open failure from a stat failure.
    pub fn open(path: &Path) -> io::Result<File> {
        OpenOptions::new().read(true).write(true).open(path)
    }

    /// Determine the device size and wrap the handle.
    ///
    /// Regular files report their length through `metadata()`. Block
    /// devices on some platforms stat as zero-length, so a zero answer
    /// falls back to seeking to the end, which the kernel resolves to the
    /// device size. The capacity is the byte size divided by 512,
    /// truncating.
    pub fn with_size(mut file: File) -> io::Result<Self> {
        let mut byte_size = file.metadata()?.len();
        if byte_size == 0 {
            byte_size = file.seek(SeekFrom::End(0))?;
            file.seek(SeekFrom::Start(0))?;
        }

        Ok(Self {
            file,
            num_blocks: byte_size / SECTOR_SIZE,
        })
    }

    /// Device capacity in 512-byte sectors
    pub fn num_blocks(&self) -> u64 {
        self.num_blocks
    }
}

impl BlockIo for FileDevice {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::BS_512
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok(self.num_blocks)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.file.seek(SeekFrom::Start(start_lba.0 * SECTOR_SIZE))?;
        self.file.read_exact(dst)
    }

    fn write_blocks(&mut self, start_lba: Lba, src: &[u8]) -> Result<(), Self::Error> {
        self.file.seek(SeekFrom::Start(start_lba.0 * SECTOR_SIZE))?;
        self.file.write_all(src)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// A 1 MiB scratch image, removed on drop
    struct ScratchImage(PathBuf);

    impl ScratchImage {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!("mkmbr-{}-{}", std::process::id(), name));
            fs::write(&path, vec![0u8; 2048 * 512]).expect("create scratch image");
            Self(path)
        }
    }

    impl Drop for ScratchImage {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_regular_file_capacity() {
        let image = ScratchImage::new("capacity");
        let file = FileDevice::open(&image.0).expect("open scratch image");
        let device = FileDevice::with_size(file).expect("size scratch image");

        assert_eq!(device.num_blocks(), 2048);
    }

    #[test]
    fn test_capacity_truncates_partial_sector() {
        let image = ScratchImage::new("truncate");
        fs::write(&image.0, vec![0u8; 2048 * 512 + 511]).unwrap();

        let file = FileDevice::open(&image.0).unwrap();
        let device = FileDevice::with_size(file).unwrap();
        assert_eq!(device.num_blocks(), 2048, "byte size / 512 truncates");
    }

    #[test]
    fn test_write_read_sector_zero() {
        let image = ScratchImage::new("sector0");
        let file = FileDevice::open(&image.0).unwrap();
        let mut device = FileDevice::with_size(file).unwrap();

        let mut sector = [0u8; 512];
        sector[0] = 0xEB;
        sector[510] = 0x55;
        sector[511] = 0xAA;
        device.write_blocks(Lba(0), &sector).unwrap();

        let mut read_back = [0u8; 512];
        device.read_blocks(Lba(0), &mut read_back).unwrap();
        assert_eq!(read_back[..], sector[..]);

        // Only the first sector of the image changed
        let contents = fs::read(&image.0).unwrap();
        assert_eq!(&contents[..512], &sector[..]);
        assert!(contents[512..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_open_missing_path_fails() {
        let path = std::env::temp_dir().join("mkmbr-no-such-device");
        assert!(FileDevice::open(&path).is_err());
    }
}
