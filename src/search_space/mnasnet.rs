//! MnasNet search-space construction
//!
//! Builds per-stage choice sets around a reference architecture. Every
//! tunable field becomes a one-of choice; the external search engine later
//! narrows each choice to a single candidate.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::architectures::MNASNET_NUM_BLOCKS;
use crate::error::{NasError, Result};

use super::block::{BlockFn, BlockSpec};
use super::choice::Choice;

/// Reference architectures a search space can be seeded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceArchitecture {
    /// MobileNet-V2 baseline
    #[serde(rename = "mobilenet_v2")]
    MobileNetV2,
    /// MnasNet-A1 baseline
    #[serde(rename = "mnasnet_a1")]
    MnasnetA1,
}

impl ReferenceArchitecture {
    /// Per-stage base repeat counts.
    pub fn num_repeats(&self) -> [u32; MNASNET_NUM_BLOCKS] {
        match self {
            Self::MobileNetV2 => [1, 2, 3, 4, 3, 3, 1],
            Self::MnasnetA1 => [1, 2, 3, 4, 2, 3, 1],
        }
    }

    /// Per-stage base output filter counts.
    pub fn output_filters(&self) -> [u32; MNASNET_NUM_BLOCKS] {
        match self {
            Self::MobileNetV2 => [16, 24, 32, 64, 96, 160, 320],
            Self::MnasnetA1 => [16, 24, 40, 80, 112, 160, 320],
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MobileNetV2 => "mobilenet_v2",
            Self::MnasnetA1 => "mnasnet_a1",
        }
    }
}

impl fmt::Display for ReferenceArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceArchitecture {
    type Err = NasError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mobilenet_v2" => Ok(Self::MobileNetV2),
            "mnasnet_a1" => Ok(Self::MnasnetA1),
            other => Err(NasError::UnknownReference(other.to_string())),
        }
    }
}

/// The tunable specification of one MnasNet block.
///
/// Structurally a [`BlockSpec`] whose fields hold discrete choice sets
/// instead of resolved values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunableBlockSpec {
    /// Choices for the number of repeats.
    pub num_repeats: Choice<u32>,
    /// Choices for the block function.
    pub block_fn: Choice<BlockFn>,
    /// Choices for the expansion ratio.
    pub expand_ratio: Choice<u32>,
    /// Choices for the kernel size.
    pub kernel_size: Choice<u32>,
    /// Choices for the squeeze-excitation ratio.
    pub se_ratio: Choice<f64>,
    /// Choices for the number of output filters.
    pub output_filters: Choice<u32>,
}

impl TunableBlockSpec {
    /// Resolve every field uniformly at random into a concrete block spec.
    pub fn sample(&self, rng: &mut impl Rng) -> Result<BlockSpec> {
        let spec = BlockSpec {
            num_repeats: self.num_repeats.sample(rng),
            block_fn: self.block_fn.sample(rng),
            expand_ratio: self.expand_ratio.sample(rng),
            kernel_size: self.kernel_size.sample(rng),
            se_ratio: self.se_ratio.sample(rng),
            output_filters: self.output_filters.sample(rng),
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Build the tunable spec for one stage around its base repeat count and
/// base filter count.
fn tunable_block(base_repeats: u32, base_filters: u32) -> Result<TunableBlockSpec> {
    // Base value first, matching the reference ordering. A base of 1 clamps
    // to {1, 2} so repeats never reach zero.
    let repeat_choices = if base_repeats > 1 {
        vec![base_repeats, base_repeats - 1, base_repeats + 1]
    } else {
        vec![1, 2]
    };

    // Integer truncation toward zero for the scaled variants.
    let scaled_down = (base_filters as f64 * 0.75) as u32;
    let scaled_up = (base_filters as f64 * 1.25) as u32;

    Ok(TunableBlockSpec {
        num_repeats: Choice::one_of(repeat_choices)?,
        block_fn: Choice::one_of(BlockFn::all().to_vec())?,
        expand_ratio: Choice::one_of(vec![1, 3, 6])?,
        kernel_size: Choice::one_of(vec![3, 5])?,
        se_ratio: Choice::one_of(vec![0.0, 0.10, 0.25, 0.50, 0.75, 1.0])?,
        output_filters: Choice::one_of(vec![scaled_down, base_filters, scaled_up])?,
    })
}

/// Build the MnasNet search space around a reference architecture.
///
/// Returns one tunable spec per network stage, stage order preserved.
pub fn search_space(reference: ReferenceArchitecture) -> Result<Vec<TunableBlockSpec>> {
    debug!(reference = %reference, "building search space");
    reference
        .num_repeats()
        .iter()
        .zip(reference.output_filters().iter())
        .map(|(&r, &o)| tunable_block(r, o))
        .collect()
}

/// Build the MnasNet search space from a reference architecture name.
///
/// Supports `mobilenet_v2` and `mnasnet_a1`; any other name fails with
/// [`NasError::UnknownReference`].
pub fn build_search_space(reference: &str) -> Result<Vec<TunableBlockSpec>> {
    let reference = reference.parse::<ReferenceArchitecture>()?;
    search_space(reference)
}
