//! `burn` data pipeline for Fashion-MNIST.
//!
//! `FashionSplit` exposes one split of the dataset through burn's `Dataset`
//! trait; `FashionBatcher` stacks items into `[batch, pixels]` image tensors
//! and `[batch]` label tensors for the `DataLoader`.

use super::dataset::ImageSet;

use burn::{
    data::{dataloader::batcher::Batcher, dataset::Dataset},
    prelude::*,
};

/// One image with its class index.
#[derive(Debug, Clone, PartialEq)]
pub struct FashionItem {
    pub pixels: Vec<f32>,
    pub label: u8,
}

/// Train or test split, owned so a `DataLoader` can hold it.
#[derive(Debug, Clone)]
pub struct FashionSplit {
    images: ImageSet,
    labels: Vec<u8>,
}

impl FashionSplit {
    pub fn new(images: ImageSet, labels: Vec<u8>) -> Self {
        Self { images, labels }
    }

    pub fn pixels_per_image(&self) -> usize {
        self.images.pixels_per_image()
    }

    /// The first `count` items in file order.
    pub fn head(&self, count: usize) -> Vec<FashionItem> {
        (0..count.min(self.len()))
            .filter_map(|index| self.get(index))
            .collect()
    }
}

impl Dataset<FashionItem> for FashionSplit {
    fn get(&self, index: usize) -> Option<FashionItem> {
        let label = *self.labels.get(index)?;
        if index >= self.images.len() {
            return None;
        }
        Some(FashionItem {
            pixels: self.images.slice(index, index + 1).to_vec(),
            label,
        })
    }

    fn len(&self) -> usize {
        self.images.len().min(self.labels.len())
    }
}

#[derive(Debug, Clone)]
pub struct FashionBatch<B: Backend> {
    /// `[batch, pixels]`
    pub images: Tensor<B, 2>,
    /// `[batch]`
    pub labels: Tensor<B, 1, Int>,
}

impl<B: Backend> FashionBatch<B> {
    pub fn len(&self) -> usize {
        self.labels.dims()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct FashionBatcher;

impl<B: Backend> Batcher<B, FashionItem, FashionBatch<B>> for FashionBatcher {
    fn batch(&self, items: Vec<FashionItem>, device: &B::Device) -> FashionBatch<B> {
        let batch_size = items.len();
        let pixels_per_image = items.first().map_or(0, |item| item.pixels.len());

        let pixels: Vec<f32> = items
            .iter()
            .flat_map(|item| item.pixels.iter().copied())
            .collect();
        let labels: Vec<i32> = items.iter().map(|item| item.label as i32).collect();

        let images = Tensor::<B, 1>::from_floats(pixels.as_slice(), device)
            .reshape([batch_size, pixels_per_image]);
        let labels = Tensor::<B, 1, Int>::from_ints(labels.as_slice(), device);

        FashionBatch { images, labels }
    }
}
