//! Generated artifacts and whole-run assembly.

use crate::target::Target;

/// Generated text for one algorithm on one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Algorithm the text was generated for.
    pub algorithm: String,
    /// Target surface.
    pub target: Target,
    /// Generated lines, without trailing newlines.
    pub lines: Vec<String>,
}

impl GeneratedArtifact {
    /// Creates an artifact.
    pub fn new(algorithm: impl Into<String>, target: Target, lines: Vec<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            target,
            lines,
        }
    }

    /// Creates an artifact with no content.
    pub fn empty(algorithm: impl Into<String>, target: Target) -> Self {
        Self::new(algorithm, target, Vec::new())
    }

    /// Returns true if nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines into one text block.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Every artifact produced by one generation run, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRun {
    /// Per-algorithm artifacts, grouped by target in request order.
    pub artifacts: Vec<GeneratedArtifact>,
    /// Export block listing every generated parameter type, if requested.
    pub param_type_exports: Option<Vec<String>>,
}

impl GenerationRun {
    /// Creates an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an artifact.
    pub fn push(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    /// Iterates the artifacts of one target.
    pub fn for_target(&self, target: Target) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter().filter(move |a| a.target == target)
    }

    /// Returns the artifact for an (algorithm, target) pair.
    pub fn get(&self, algorithm: &str, target: Target) -> Option<&GeneratedArtifact> {
        self.artifacts
            .iter()
            .find(|a| a.target == target && a.algorithm == algorithm)
    }

    /// Concatenates a target's artifacts into one file body.
    ///
    /// Empty artifacts are skipped; the parameter-type export block closes
    /// the [`Target::ParamTypes`] body.
    pub fn render(&self, target: Target) -> String {
        let mut blocks: Vec<String> = self
            .for_target(target)
            .filter(|a| !a.is_empty())
            .map(GeneratedArtifact::text)
            .collect();
        if target == Target::ParamTypes {
            if let Some(ref exports) = self.param_type_exports {
                blocks.push(exports.join("\n"));
            }
        }
        let mut body = blocks.join("\n\n");
        body.push('\n');
        body
    }

    /// BLAKE3 digest of a target's rendered body, as hex.
    pub fn digest(&self, target: Target) -> String {
        blake3::hash(self.render(target).as_bytes())
            .to_hex()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_skips_empty_and_appends_exports() {
        let mut run = GenerationRun::new();
        run.push(GeneratedArtifact::new(
            "Windowing",
            Target::ParamTypes,
            lines(&["type ParamsWindowing = {", "};"]),
        ));
        run.push(GeneratedArtifact::empty("Energy", Target::ParamTypes));
        run.param_type_exports = Some(lines(&["export {", "  ParamsWindowing,", "}"]));

        assert_eq!(
            run.render(Target::ParamTypes),
            "type ParamsWindowing = {\n};\n\nexport {\n  ParamsWindowing,\n}\n"
        );
    }

    #[test]
    fn test_lookup_and_filter() {
        let mut run = GenerationRun::new();
        run.push(GeneratedArtifact::new("A", Target::Binding, lines(&["a"])));
        run.push(GeneratedArtifact::new("A", Target::Wrapper, lines(&["w"])));
        run.push(GeneratedArtifact::new("B", Target::Binding, lines(&["b"])));

        assert_eq!(run.for_target(Target::Binding).count(), 2);
        assert_eq!(run.get("A", Target::Wrapper).unwrap().text(), "w");
        assert!(run.get("B", Target::Wrapper).is_none());
        assert_eq!(run.render(Target::Binding), "a\n\nb\n");
    }

    #[test]
    fn test_digest_is_stable_hex() {
        let mut run = GenerationRun::new();
        run.push(GeneratedArtifact::new("A", Target::Binding, lines(&["a"])));
        let digest = run.digest(Target::Binding);
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, run.digest(Target::Binding));
    }
}
