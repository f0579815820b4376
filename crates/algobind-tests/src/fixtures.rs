//! Test fixtures: synthetic descriptors and an on-disk catalog.

use std::fs;
use std::path::{Path, PathBuf};

use algobind_catalog::{AlgorithmDescriptor, Catalog, TypeTag};
use tempfile::TempDir;

/// Algorithms in the fixture catalog that generate cleanly on every target.
pub const SUPPORTED: &[&str] = &[
    "Windowing",
    "Spectrum",
    "Energy",
    "BPF",
    "PitchYin",
    "PitchMelodia",
];

/// Path to the checked-in fixture catalog.
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalog.json")
}

/// Loads the checked-in fixture catalog.
pub fn load_catalog() -> Catalog {
    Catalog::from_path(&catalog_path()).expect("fixture catalog should load")
}

/// `Windowing` with one string parameter.
pub fn windowing() -> AlgorithmDescriptor {
    AlgorithmDescriptor::builder("Windowing")
        .description("This algorithm applies windowing to an audio signal.")
        .input("signal", TypeTag::VectorReal, "the input audio frame")
        .output("signal", TypeTag::VectorReal, "the windowed audio frame")
        .param("type", TypeTag::String, "hann", "the window type")
        .build()
}

/// `Energy` with no parameters.
pub fn energy() -> AlgorithmDescriptor {
    AlgorithmDescriptor::builder("Energy")
        .description("This algorithm computes the energy of an array.")
        .input("array", TypeTag::VectorReal, "the input array")
        .output("energy", TypeTag::Real, "the energy of the input array")
        .build()
}

/// `BPF` with two float-vector parameters.
pub fn bpf() -> AlgorithmDescriptor {
    AlgorithmDescriptor::builder("BPF")
        .description("This algorithm implements a break point function.")
        .input("x", TypeTag::Real, "the input coordinate (x-axis)")
        .output("y", TypeTag::Real, "the output coordinate (y-axis)")
        .param("xPoints", TypeTag::VectorReal, "[0, 1]", "the x-coordinates")
        .param("yPoints", TypeTag::VectorReal, "[0, 1]", "the y-coordinates")
        .build()
}

/// `PitchMelodia`, which is reconfigured by recreating its handle.
pub fn pitch_melodia() -> AlgorithmDescriptor {
    AlgorithmDescriptor::builder("PitchMelodia")
        .description("This algorithm estimates the fundamental frequency of the melody.")
        .input("signal", TypeTag::VectorReal, "the input signal")
        .output("pitch", TypeTag::VectorReal, "the estimated pitch values [Hz]")
        .output("pitchConfidence", TypeTag::VectorReal, "confidence with which the pitch was detected")
        .param("frameSize", TypeTag::Integer, "2048", "the frame size")
        .param("hopSize", TypeTag::Integer, "128", "the hop size")
        .build()
}

/// A descriptor with no inputs, outputs, or parameters.
pub fn empty() -> AlgorithmDescriptor {
    AlgorithmDescriptor::builder("Silence").build()
}

/// Every synthetic descriptor above, as a catalog.
pub fn synthetic_catalog() -> Catalog {
    Catalog::from_descriptors([windowing(), energy(), bpf(), pitch_melodia(), empty()])
        .expect("synthetic descriptors have distinct names")
}

/// A temporary workspace holding a catalog file, a run config, and an output
/// directory for CLI-level tests.
pub struct WorkspaceFixture {
    pub root: TempDir,
}

impl WorkspaceFixture {
    /// Creates a workspace with a copy of the fixture catalog.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        fs::copy(catalog_path(), root.path().join("catalog.json"))
            .expect("Failed to copy fixture catalog");
        Self { root }
    }

    /// Get the workspace root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of the catalog inside the workspace.
    pub fn catalog(&self) -> PathBuf {
        self.path().join("catalog.json")
    }

    /// Path of the output directory inside the workspace.
    pub fn out_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    /// Writes a run config file and returns its path.
    ///
    /// The file name decides the format (`.json`, `.yaml`, `.yml`).
    pub fn write_config(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.path().join(file_name);
        fs::write(&path, content).expect("Failed to write run config");
        path
    }

    /// Reads a generated file from the output directory.
    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.out_dir().join(file_name)).expect("Failed to read output")
    }
}

impl Default for WorkspaceFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_catalog_loads() {
        let catalog = load_catalog();
        for name in SUPPORTED {
            assert!(catalog.contains(name), "{}", name);
        }
        assert!(catalog.contains("Magnitude"));
        assert!(catalog.contains("Silence"));
    }

    #[test]
    fn test_workspace_fixture() {
        let ws = WorkspaceFixture::new();
        assert!(ws.catalog().exists());
        let config = ws.write_config("run.json", "{}");
        assert!(config.exists());
    }
}
