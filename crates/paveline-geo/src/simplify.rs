//! Ring compression for storage
//!
//! Dense rings are thinned with Douglas-Peucker and, if still too long,
//! uniformly sampled down to a point cap. Kept points are the original
//! coordinates, elevation included.

use std::fmt;

use geo::SimplifyIdx;
use paveline_core::models::Coordinate;
use serde::{Deserialize, Serialize};

use crate::models::to_line_string;

/// Rings with fewer points than this are left alone
pub const COMPRESSION_THRESHOLD: usize = 100;

/// Douglas-Peucker tolerance in coordinate units
pub const SIMPLIFY_TOLERANCE: f64 = 0.00001;

/// Most points a compressed ring may keep
pub const MAX_COMPRESSED_POINTS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionMethod {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "douglas-peucker")]
    DouglasPeucker,
    #[serde(rename = "douglas-peucker + uniform-sampling")]
    DouglasPeuckerUniformSampling,
}

impl CompressionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionMethod::None => "none",
            CompressionMethod::DouglasPeucker => "douglas-peucker",
            CompressionMethod::DouglasPeuckerUniformSampling => "douglas-peucker + uniform-sampling",
        }
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compressed ring plus how much it shrank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedRing {
    pub original_count: usize,
    pub compressed_count: usize,
    pub compression_ratio: f64,
    pub method: CompressionMethod,
    pub coordinates: Vec<Coordinate>,
}

impl CompressedRing {
    fn unchanged(ring: &[Coordinate]) -> Self {
        Self {
            original_count: ring.len(),
            compressed_count: ring.len(),
            compression_ratio: 1.0,
            method: CompressionMethod::None,
            coordinates: ring.to_vec(),
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.method != CompressionMethod::None
    }

    /// Counts and method without the coordinates; `None` for rings below the threshold
    pub fn summary(&self) -> Option<CompressionSummary> {
        self.is_compressed().then(|| CompressionSummary {
            original_count: self.original_count,
            compressed_count: self.compressed_count,
            compression_ratio: self.compression_ratio,
            method: self.method,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionSummary {
    pub original_count: usize,
    pub compressed_count: usize,
    pub compression_ratio: f64,
    pub method: CompressionMethod,
}

/// Compress a ring with the default tolerance and point cap
pub fn compress_ring(ring: &[Coordinate]) -> CompressedRing {
    compress_ring_with(ring, SIMPLIFY_TOLERANCE, MAX_COMPRESSED_POINTS)
}

pub fn compress_ring_with(ring: &[Coordinate], tolerance: f64, max_points: usize) -> CompressedRing {
    if ring.len() < COMPRESSION_THRESHOLD {
        return CompressedRing::unchanged(ring);
    }

    let simplified: Vec<Coordinate> = to_line_string(ring)
        .simplify_idx(tolerance)
        .into_iter()
        .map(|index| ring[index])
        .collect();

    let (coordinates, method) = if simplified.len() > max_points {
        (uniform_sample(&simplified, max_points), CompressionMethod::DouglasPeuckerUniformSampling)
    } else {
        (simplified, CompressionMethod::DouglasPeucker)
    };

    tracing::debug!(
        original = ring.len(),
        compressed = coordinates.len(),
        "Compressed boundary ring"
    );

    CompressedRing {
        original_count: ring.len(),
        compressed_count: coordinates.len(),
        compression_ratio: coordinates.len() as f64 / ring.len() as f64,
        method,
        coordinates,
    }
}

/// Evenly spaced subset of `target` points that keeps both endpoints
fn uniform_sample(points: &[Coordinate], target: usize) -> Vec<Coordinate> {
    if points.len() <= target || target < 2 {
        return points.to_vec();
    }

    let step = (points.len() - 1) as f64 / (target - 1) as f64;
    let mut sampled = Vec::with_capacity(target);
    sampled.push(points[0]);
    for i in 1..target - 1 {
        sampled.push(points[(i as f64 * step).round() as usize]);
    }
    sampled.push(points[points.len() - 1]);
    sampled
}
