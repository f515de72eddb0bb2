//! Fashion-MNIST IDX loader.
//!
//! The dataset ships as four big-endian IDX files: a magic number, one `u32`
//! per dimension, then raw `u8` data. Images are 28x28 greyscale; labels are
//! class indices `0..10`.

use super::types::TrainError;
use std::fs;
use std::path::Path;

pub const IMAGE_MAGIC: u32 = 0x0000_0803;
pub const LABEL_MAGIC: u32 = 0x0000_0801;

pub const TRAIN_IMAGES_FILE: &str = "train-images-idx3-ubyte";
pub const TRAIN_LABELS_FILE: &str = "train-labels-idx1-ubyte";
pub const TEST_IMAGES_FILE: &str = "t10k-images-idx3-ubyte";
pub const TEST_LABELS_FILE: &str = "t10k-labels-idx1-ubyte";

pub const CLASS_NAMES: [&str; 10] = [
    "T-shirt/top",
    "Trouser",
    "Pullover",
    "Dress",
    "Coat",
    "Sandal",
    "Shirt",
    "Sneaker",
    "Bag",
    "Ankle boot",
];

pub fn class_name(label: usize) -> &'static str {
    CLASS_NAMES.get(label).copied().unwrap_or("Unknown")
}

/// Images flattened row-major, pixel values scaled to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ImageSet {
    pub rows: usize,
    pub cols: usize,
    pub pixels: Vec<f32>,
}

impl ImageSet {
    pub fn pixels_per_image(&self) -> usize {
        self.rows * self.cols
    }

    pub fn len(&self) -> usize {
        match self.pixels_per_image() {
            0 => 0,
            per_image => self.pixels.len() / per_image,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixels of images `start..end`, contiguous.
    pub fn slice(&self, start: usize, end: usize) -> &[f32] {
        let per_image = self.pixels_per_image();
        &self.pixels[start * per_image..end * per_image]
    }
}

#[derive(Debug, Clone)]
pub struct FashionMnist {
    pub train_images: ImageSet,
    pub train_labels: Vec<u8>,
    pub test_images: ImageSet,
    pub test_labels: Vec<u8>,
}

impl FashionMnist {
    pub fn load(dir: &Path) -> Result<Self, TrainError> {
        tracing::info!("Loading Fashion-MNIST from {}", dir.display());

        let train_images = parse_images(&fs::read(dir.join(TRAIN_IMAGES_FILE))?)?;
        let train_labels = parse_labels(&fs::read(dir.join(TRAIN_LABELS_FILE))?)?;
        let test_images = parse_images(&fs::read(dir.join(TEST_IMAGES_FILE))?)?;
        let test_labels = parse_labels(&fs::read(dir.join(TEST_LABELS_FILE))?)?;

        if train_images.len() != train_labels.len() || test_images.len() != test_labels.len() {
            return Err(TrainError::Dataset(format!(
                "image/label count mismatch (train {}/{}, test {}/{})",
                train_images.len(),
                train_labels.len(),
                test_images.len(),
                test_labels.len()
            )));
        }

        tracing::info!(
            "Loaded {} training and {} test images",
            train_images.len(),
            test_images.len()
        );

        Ok(Self {
            train_images,
            train_labels,
            test_images,
            test_labels,
        })
    }
}

pub fn parse_images(bytes: &[u8]) -> Result<ImageSet, TrainError> {
    check_magic(bytes, IMAGE_MAGIC)?;
    let count = read_u32(bytes, 4)? as usize;
    let rows = read_u32(bytes, 8)? as usize;
    let cols = read_u32(bytes, 12)? as usize;

    let data = &bytes[16..];
    let expected = count
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(cols))
        .ok_or_else(|| TrainError::Dataset("image dimensions overflow".to_string()))?;
    if data.len() != expected {
        return Err(TrainError::Dataset(format!(
            "expected {} pixel bytes, found {}",
            expected,
            data.len()
        )));
    }

    Ok(ImageSet {
        rows,
        cols,
        pixels: data.iter().map(|&p| p as f32 / 255.0).collect(),
    })
}

pub fn parse_labels(bytes: &[u8]) -> Result<Vec<u8>, TrainError> {
    check_magic(bytes, LABEL_MAGIC)?;
    let count = read_u32(bytes, 4)? as usize;

    let data = &bytes[8..];
    if data.len() != count {
        return Err(TrainError::Dataset(format!(
            "expected {} labels, found {}",
            count,
            data.len()
        )));
    }
    if let Some(bad) = data.iter().find(|&&label| label as usize >= CLASS_NAMES.len()) {
        return Err(TrainError::Dataset(format!("label {} out of range", bad)));
    }

    Ok(data.to_vec())
}

fn check_magic(bytes: &[u8], expected: u32) -> Result<(), TrainError> {
    let magic = read_u32(bytes, 0)?;
    if magic != expected {
        return Err(TrainError::Dataset(format!(
            "bad magic number {:#010x}, expected {:#010x}",
            magic, expected
        )));
    }
    Ok(())
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32, TrainError> {
    bytes
        .get(offset..offset + 4)
        .and_then(|slice| <[u8; 4]>::try_from(slice).ok())
        .map(u32::from_be_bytes)
        .ok_or_else(|| TrainError::Dataset(format!("truncated header at byte {}", offset)))
}
