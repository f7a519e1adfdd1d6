//! Fixed MnasNet reference constants

use crate::search_space::{BlockFn, BlockSpec};

/// Number of sequential block stages in the MnasNet family.
pub const MNASNET_NUM_BLOCKS: usize = 7;

/// Per-stage strides. Same as MobileNet-V2.
pub const MNASNET_STRIDES: [u32; MNASNET_NUM_BLOCKS] = [1, 2, 2, 2, 1, 2, 1];

/// The fixed MnasNet-A1 architecture discovered by a prior search.
pub const MNASNET_A1_BLOCK_SPECS: [BlockSpec; MNASNET_NUM_BLOCKS] = [
    BlockSpec {
        num_repeats: 1,
        block_fn: BlockFn::Mbconv,
        expand_ratio: 1,
        kernel_size: 3,
        se_ratio: 0.0,
        output_filters: 16,
    },
    BlockSpec {
        num_repeats: 2,
        block_fn: BlockFn::Mbconv,
        expand_ratio: 6,
        kernel_size: 3,
        se_ratio: 0.0,
        output_filters: 24,
    },
    BlockSpec {
        num_repeats: 3,
        block_fn: BlockFn::Mbconv,
        expand_ratio: 3,
        kernel_size: 5,
        se_ratio: 0.25,
        output_filters: 40,
    },
    BlockSpec {
        num_repeats: 4,
        block_fn: BlockFn::Mbconv,
        expand_ratio: 6,
        kernel_size: 3,
        se_ratio: 0.0,
        output_filters: 80,
    },
    BlockSpec {
        num_repeats: 2,
        block_fn: BlockFn::Mbconv,
        expand_ratio: 6,
        kernel_size: 3,
        se_ratio: 0.25,
        output_filters: 112,
    },
    BlockSpec {
        num_repeats: 3,
        block_fn: BlockFn::Mbconv,
        expand_ratio: 6,
        kernel_size: 5,
        se_ratio: 0.25,
        output_filters: 160,
    },
    BlockSpec {
        num_repeats: 1,
        block_fn: BlockFn::Mbconv,
        expand_ratio: 6,
        kernel_size: 3,
        se_ratio: 0.0,
        output_filters: 320,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a1_specs_are_valid() {
        for spec in &MNASNET_A1_BLOCK_SPECS {
            spec.validate().unwrap();
        }
    }

    #[test]
    fn test_a1_filter_progression() {
        let filters: Vec<u32> = MNASNET_A1_BLOCK_SPECS
            .iter()
            .map(|s| s.output_filters)
            .collect();
        assert_eq!(filters, vec![16, 24, 40, 80, 112, 160, 320]);
    }

    #[test]
    fn test_stride_table() {
        assert_eq!(MNASNET_STRIDES, [1, 2, 2, 2, 1, 2, 1]);
    }
}
