//! Fixed reference architecture tables

mod mnasnet;

pub use mnasnet::{MNASNET_A1_BLOCK_SPECS, MNASNET_NUM_BLOCKS, MNASNET_STRIDES};
