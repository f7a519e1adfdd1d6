//! Mobile NAS - declarative search spaces for mobile convolutional networks
//!
//! This crate is the configuration layer of a neural architecture search
//! system for the MnasNet / MobileNet-V2 family:
//!
//! - [`search_space`] - one-of choice primitives, validated block records,
//!   and search-space construction around a reference architecture
//! - [`architectures`] - fixed reference architecture tables
//!
//! Search execution (sampling strategy, mutation, crossover, evaluation)
//! is owned by an external optimization engine; this crate only describes
//! the space it searches over.
//!
//! # Example
//!
//! ```
//! use mobile_nas::prelude::*;
//!
//! let space = build_search_space("mobilenet_v2")?;
//! assert_eq!(space.len(), MNASNET_NUM_BLOCKS);
//! assert_eq!(space[0].output_filters.candidates(), &[12, 16, 20]);
//! # Ok::<(), NasError>(())
//! ```

// Core error handling
pub mod error;

// Search-space configuration
pub mod search_space;

// Fixed reference tables
pub mod architectures;

pub use error::{NasError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{NasError, Result};

    // Search space
    pub use crate::search_space::{
        build_block_specs, build_search_space, search_space, BlockFn, BlockSpec, BlockSpecParams,
        Choice, ReferenceArchitecture, TunableBlockSpec,
    };

    // Reference tables
    pub use crate::architectures::{MNASNET_A1_BLOCK_SPECS, MNASNET_NUM_BLOCKS, MNASNET_STRIDES};
}
