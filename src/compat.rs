/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::string::String;

#[cfg(all(test, feature = "std"))]
pub use std::format;

#[cfg(not(feature = "std"))]
pub use alloc::string::String;

#[cfg(all(test, not(feature = "std")))]
pub use alloc::format;
