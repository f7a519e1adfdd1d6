//! Block specification records and validation

use crate::architectures::MNASNET_NUM_BLOCKS;
use crate::error::{NasError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Types of convolutional block functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockFn {
    /// Plain convolution
    Conv,
    /// Mobile inverted-bottleneck convolution
    Mbconv,
    /// Fused MBConv (expansion folded into the main convolution)
    FusedMbconv,
}

impl BlockFn {
    /// All block function variants, in declaration order.
    pub fn all() -> [Self; 3] {
        [Self::Conv, Self::Mbconv, Self::FusedMbconv]
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conv => "conv",
            Self::Mbconv => "mbconv",
            Self::FusedMbconv => "fused_mbconv",
        }
    }
}

impl fmt::Display for BlockFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockFn {
    type Err = NasError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "conv" => Ok(Self::Conv),
            "mbconv" => Ok(Self::Mbconv),
            "fused_mbconv" => Ok(Self::FusedMbconv),
            other => Err(NasError::ValidationError(format!(
                "unknown block_fn `{other}`, expected one of: conv, mbconv, fused_mbconv"
            ))),
        }
    }
}

/// A resolved specification of one MnasNet building block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    /// The number of times this block is stacked.
    pub num_repeats: u32,
    /// The type of block function.
    pub block_fn: BlockFn,
    /// The channel expansion ratio of the MBConv block.
    pub expand_ratio: u32,
    /// The convolution kernel size.
    pub kernel_size: u32,
    /// The squeeze-excitation ratio; 0.0 disables SE.
    pub se_ratio: f64,
    /// The number of output filters.
    pub output_filters: u32,
}

impl BlockSpec {
    /// Create a block spec with the documented defaults:
    /// `num_repeats = 1`, `block_fn = mbconv`, `expand_ratio = 1`,
    /// `kernel_size = 3`, `se_ratio = 0.0`.
    pub fn new(output_filters: u32) -> Result<Self> {
        let spec = Self {
            num_repeats: 1,
            block_fn: BlockFn::Mbconv,
            expand_ratio: 1,
            kernel_size: 3,
            se_ratio: 0.0,
            output_filters,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Build a validated spec from raw parameters.
    pub fn from_params(params: &BlockSpecParams) -> Result<Self> {
        let block_fn = params.block_fn.parse::<BlockFn>()?;
        let output_filters = params.output_filters.ok_or_else(|| {
            NasError::ValidationError("output_filters is required".to_string())
        })?;

        let spec = Self {
            num_repeats: params.num_repeats,
            block_fn,
            expand_ratio: params.expand_ratio,
            kernel_size: params.kernel_size,
            se_ratio: params.se_ratio,
            output_filters,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<()> {
        if self.num_repeats < 1 {
            return Err(NasError::ValidationError(format!(
                "num_repeats must be positive, got {}",
                self.num_repeats
            )));
        }
        if self.expand_ratio < 1 {
            return Err(NasError::ValidationError(format!(
                "expand_ratio must be positive, got {}",
                self.expand_ratio
            )));
        }
        if self.kernel_size < 1 {
            return Err(NasError::ValidationError(format!(
                "kernel_size must be positive, got {}",
                self.kernel_size
            )));
        }
        if !self.se_ratio.is_finite() || !(0.0..=1.0).contains(&self.se_ratio) {
            return Err(NasError::ValidationError(format!(
                "se_ratio must be within [0.0, 1.0], got {}",
                self.se_ratio
            )));
        }
        if self.output_filters < 1 {
            return Err(NasError::ValidationError(format!(
                "output_filters must be positive, got {}",
                self.output_filters
            )));
        }
        Ok(())
    }
}

fn default_num_repeats() -> u32 {
    1
}

fn default_block_fn() -> String {
    "mbconv".to_string()
}

fn default_expand_ratio() -> u32 {
    1
}

fn default_kernel_size() -> u32 {
    3
}

/// Raw, unvalidated block parameters.
///
/// Mirrors the loosely-typed form a configuration front end hands over:
/// every field except `output_filters` carries a default, and `block_fn`
/// is a plain string so unrecognized names are rejected eagerly rather
/// than at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSpecParams {
    /// The number of repeats for each block.
    #[serde(default = "default_num_repeats")]
    pub num_repeats: u32,
    /// The type of block function.
    #[serde(default = "default_block_fn")]
    pub block_fn: String,
    /// The expansion ratio of the MBConv block.
    #[serde(default = "default_expand_ratio")]
    pub expand_ratio: u32,
    /// The kernel size.
    #[serde(default = "default_kernel_size")]
    pub kernel_size: u32,
    /// The squeeze-excitation ratio.
    #[serde(default)]
    pub se_ratio: f64,
    /// The number of output filters. Required.
    #[serde(default)]
    pub output_filters: Option<u32>,
}

impl Default for BlockSpecParams {
    fn default() -> Self {
        Self {
            num_repeats: default_num_repeats(),
            block_fn: default_block_fn(),
            expand_ratio: default_expand_ratio(),
            kernel_size: default_kernel_size(),
            se_ratio: 0.0,
            output_filters: None,
        }
    }
}

/// Build the full list of validated block specs from raw parameters.
///
/// The input must describe every one of the network stages, in stage order.
pub fn build_block_specs(params: &[BlockSpecParams]) -> Result<Vec<BlockSpec>> {
    if params.len() != MNASNET_NUM_BLOCKS {
        return Err(NasError::SchemaError {
            expected: MNASNET_NUM_BLOCKS,
            actual: params.len(),
        });
    }
    debug!(blocks = params.len(), "building block specs");
    params.iter().map(BlockSpec::from_params).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(output_filters: u32) -> BlockSpecParams {
        BlockSpecParams {
            output_filters: Some(output_filters),
            ..Default::default()
        }
    }

    #[test]
    fn test_block_fn_parse() {
        assert_eq!("mbconv".parse::<BlockFn>().unwrap(), BlockFn::Mbconv);
        assert_eq!(
            "fused_mbconv".parse::<BlockFn>().unwrap(),
            BlockFn::FusedMbconv
        );
        assert!(matches!(
            "invalid".parse::<BlockFn>(),
            Err(NasError::ValidationError(_))
        ));
    }

    #[test]
    fn test_new_applies_defaults() {
        let spec = BlockSpec::new(16).unwrap();
        assert_eq!(spec.num_repeats, 1);
        assert_eq!(spec.block_fn, BlockFn::Mbconv);
        assert_eq!(spec.expand_ratio, 1);
        assert_eq!(spec.kernel_size, 3);
        assert_eq!(spec.se_ratio, 0.0);
        assert_eq!(spec.output_filters, 16);
    }

    #[test]
    fn test_from_params() {
        let raw = BlockSpecParams {
            num_repeats: 3,
            block_fn: "mbconv".to_string(),
            expand_ratio: 3,
            kernel_size: 5,
            se_ratio: 0.25,
            output_filters: Some(40),
        };
        let spec = BlockSpec::from_params(&raw).unwrap();
        assert_eq!(spec.num_repeats, 3);
        assert_eq!(spec.kernel_size, 5);
        assert_eq!(spec.se_ratio, 0.25);
        assert_eq!(spec.output_filters, 40);
    }

    #[test]
    fn test_missing_output_filters_fails() {
        let raw = BlockSpecParams::default();
        assert!(matches!(
            BlockSpec::from_params(&raw),
            Err(NasError::ValidationError(_))
        ));
    }

    #[test]
    fn test_invalid_block_fn_fails() {
        let raw = BlockSpecParams {
            block_fn: "depthwise".to_string(),
            ..params(16)
        };
        assert!(matches!(
            BlockSpec::from_params(&raw),
            Err(NasError::ValidationError(_))
        ));
    }

    #[test]
    fn test_se_ratio_out_of_range_fails() {
        let raw = BlockSpecParams {
            se_ratio: 1.5,
            ..params(16)
        };
        assert!(matches!(
            BlockSpec::from_params(&raw),
            Err(NasError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_repeats_fails() {
        let raw = BlockSpecParams {
            num_repeats: 0,
            ..params(16)
        };
        assert!(matches!(
            BlockSpec::from_params(&raw),
            Err(NasError::ValidationError(_))
        ));
    }

    #[test]
    fn test_build_block_specs_wrong_length() {
        let raw: Vec<BlockSpecParams> = (0..3).map(|_| params(16)).collect();
        let err = build_block_specs(&raw).unwrap_err();
        assert!(matches!(
            err,
            NasError::SchemaError {
                expected: MNASNET_NUM_BLOCKS,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_build_block_specs_preserves_order() {
        let filters = [16, 24, 32, 64, 96, 160, 320];
        let raw: Vec<BlockSpecParams> = filters.iter().map(|&f| params(f)).collect();
        let specs = build_block_specs(&raw).unwrap();

        assert_eq!(specs.len(), MNASNET_NUM_BLOCKS);
        for (spec, &f) in specs.iter().zip(filters.iter()) {
            assert_eq!(spec.output_filters, f);
        }
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let raw: BlockSpecParams =
            serde_json::from_str(r#"{"output_filters": 24}"#).unwrap();
        assert_eq!(raw.num_repeats, 1);
        assert_eq!(raw.block_fn, "mbconv");
        assert_eq!(raw.output_filters, Some(24));

        let spec = BlockSpec::from_params(&raw).unwrap();
        assert_eq!(spec.block_fn, BlockFn::Mbconv);
    }
}
