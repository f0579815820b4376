//! The generation driver.
//!
//! A [`Generator`] pairs a descriptor provider with a [`CodegenConfig`] and
//! runs the emitters over a selection. Every selected algorithm is fetched
//! and normalized before any emitter runs, so a malformed descriptor aborts
//! the run without producing partial output.

use algobind_catalog::{AlgorithmDescriptor, AlgorithmSelection, DescriptorProvider, TypeTag};
use tracing::{debug, info, warn};

use crate::artifact::{GeneratedArtifact, GenerationRun};
use crate::config::CodegenConfig;
use crate::emit::emit;
use crate::error::CodegenResult;
use crate::normalize::{normalize, NormalizedAlgorithm};
use crate::summary::{find_params_of_type, ParamMatch, TypeSummary};
use crate::target::Target;
use crate::wrapper::param_types::param_type_exports;

/// Runs the emitters over algorithms fetched from a provider.
#[derive(Debug, Clone)]
pub struct Generator<P> {
    provider: P,
    config: CodegenConfig,
}

impl<P: DescriptorProvider> Generator<P> {
    /// Creates a generator, rejecting inconsistent configuration.
    pub fn new(provider: P, config: CodegenConfig) -> CodegenResult<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    /// Creates a generator with the default configuration.
    pub fn with_defaults(provider: P) -> Self {
        Self {
            provider,
            config: CodegenConfig::default(),
        }
    }

    /// Fetches the selected descriptors, in selection order.
    pub fn descriptors(&self, selection: &AlgorithmSelection) -> CodegenResult<Vec<AlgorithmDescriptor>> {
        selection
            .resolve()
            .iter()
            .map(|name| self.provider.descriptor(name).map_err(Into::into))
            .collect()
    }

    /// Fetches and normalizes the selected algorithms.
    pub fn normalize_selection(
        &self,
        selection: &AlgorithmSelection,
    ) -> CodegenResult<Vec<NormalizedAlgorithm>> {
        for name in selection.unused_exclusions() {
            warn!(algorithm = name, "excluded algorithm is not in the inclusion list");
        }
        selection
            .resolve()
            .iter()
            .map(|name| normalize(&self.provider, name, &self.config))
            .collect()
    }

    /// Generates one target for every selected algorithm.
    pub fn generate(
        &self,
        selection: &AlgorithmSelection,
        target: Target,
    ) -> CodegenResult<Vec<GeneratedArtifact>> {
        let algorithms = self.normalize_selection(selection)?;
        self.emit_pass(&algorithms, target)
    }

    /// Generates the requested targets, in the order given, into one run.
    ///
    /// Repeated targets are generated once. When [`Target::ParamTypes`] is
    /// requested the run also carries the export block.
    pub fn run(&self, selection: &AlgorithmSelection, targets: &[Target]) -> CodegenResult<GenerationRun> {
        let algorithms = self.normalize_selection(selection)?;
        let mut run = GenerationRun::new();
        let mut done = Vec::with_capacity(targets.len());

        for &target in targets {
            if done.contains(&target) {
                continue;
            }
            done.push(target);

            let artifacts = self.emit_pass(&algorithms, target)?;
            if target == Target::ParamTypes {
                run.param_type_exports = Some(param_type_exports(&artifacts, &self.config));
            }
            for artifact in artifacts {
                run.push(artifact);
            }
        }

        Ok(run)
    }

    /// Generates every target.
    pub fn run_all(&self, selection: &AlgorithmSelection) -> CodegenResult<GenerationRun> {
        self.run(selection, Target::all())
    }

    /// Summarizes the type tags used by the selection.
    pub fn type_summary(&self, selection: &AlgorithmSelection) -> CodegenResult<TypeSummary> {
        let descriptors = self.descriptors(selection)?;
        Ok(TypeSummary::collect(&descriptors))
    }

    /// Lists selected algorithms with parameters of type `tag`.
    pub fn find_params(
        &self,
        selection: &AlgorithmSelection,
        tag: &TypeTag,
    ) -> CodegenResult<Vec<ParamMatch>> {
        let descriptors = self.descriptors(selection)?;
        Ok(find_params_of_type(&descriptors, tag))
    }

    fn emit_pass(
        &self,
        algorithms: &[NormalizedAlgorithm],
        target: Target,
    ) -> CodegenResult<Vec<GeneratedArtifact>> {
        info!(pass = %target, algorithms = algorithms.len(), "generating");
        let artifacts = algorithms
            .iter()
            .map(|algo| {
                debug!(pass = %target, algorithm = algo.name(), "emitting");
                emit(target, algo, &self.config)
            })
            .collect::<CodegenResult<Vec<_>>>()?;
        info!(
            pass = %target,
            generated = artifacts.iter().filter(|a| !a.is_empty()).count(),
            "finished"
        );
        Ok(artifacts)
    }
}
