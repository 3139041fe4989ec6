//! 哈希模块 - 三种桶定位策略
//!
//! 所有函数都按 32 位整数语义计算：乘法回绕，右移补零。

pub mod strategy;
pub mod modulo;
pub mod java;
pub mod fibonacci;

pub use strategy::{dispatch, BucketHasher, HasherVisitor};
pub use modulo::{modulo_hash, ModuloHasher};
pub use java::{java_hash, JavaHasher};
pub use fibonacci::{fib_hash, FibonacciHasher, FIB_MULTIPLIER};
