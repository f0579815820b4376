//! Descriptor providers.
//!
//! Code generation depends only on the [`DescriptorProvider`] capability:
//! given an algorithm name, return its descriptor. The JSON-backed
//! [`Catalog`](crate::Catalog) is the usual implementation; tests plug in
//! synthetic providers through [`FnProvider`].

use crate::descriptor::AlgorithmDescriptor;
use crate::error::{CatalogError, CatalogResult};

/// Looks up algorithm descriptors by name.
pub trait DescriptorProvider {
    /// Returns the descriptor for `name`.
    fn descriptor(&self, name: &str) -> CatalogResult<AlgorithmDescriptor>;
}

impl<P: DescriptorProvider + ?Sized> DescriptorProvider for &P {
    fn descriptor(&self, name: &str) -> CatalogResult<AlgorithmDescriptor> {
        (**self).descriptor(name)
    }
}

impl<P: DescriptorProvider + ?Sized> DescriptorProvider for Box<P> {
    fn descriptor(&self, name: &str) -> CatalogResult<AlgorithmDescriptor> {
        (**self).descriptor(name)
    }
}

/// Adapts a lookup closure into a provider.
///
/// A closure returning `None` reports [`CatalogError::UnknownAlgorithm`].
///
/// ```
/// use algobind_catalog::{AlgorithmDescriptor, DescriptorProvider, FnProvider, TypeTag};
///
/// let provider = FnProvider(|name: &str| {
///     (name == "Gain").then(|| {
///         AlgorithmDescriptor::builder("Gain")
///             .input("signal", TypeTag::VectorReal, "input")
///             .output("signal", TypeTag::VectorReal, "output")
///             .build()
///     })
/// });
///
/// assert!(provider.descriptor("Gain").is_ok());
/// assert!(provider.descriptor("Loudness").is_err());
/// ```
pub struct FnProvider<F>(pub F);

impl<F> DescriptorProvider for FnProvider<F>
where
    F: Fn(&str) -> Option<AlgorithmDescriptor>,
{
    fn descriptor(&self, name: &str) -> CatalogResult<AlgorithmDescriptor> {
        (self.0)(name).ok_or_else(|| CatalogError::unknown(name))
    }
}
