#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pk_reflect as reflect;
pub use pk_utils as utils;
